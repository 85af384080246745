//! Push-based decoding of tagged zlib containers.
//!
//! A tagged container is a zlib stream prefixed with a fixed twelve byte [`PREAMBLE`]. Input
//! written to an [`InflateStream`] is sniffed for that preamble: tagged input is inflated and
//! the plaintext handed to a [`Sink`] as soon as it is produced, anything else is passed to the
//! sink byte for byte. Ending the stream checks that a tagged payload really was complete.
//!
//! The inflate engine is pluggable through the [`codec::Decode`] trait; by default
//! [`codec::FlateDecoder`] backed by [`flate2`] is used.
//!
//! # Feature Organization
//!
//! The synchronous [`InflateStream`] is always available. Adaptors for the asynchronous write
//! traits of the popular runtimes are selected via Cargo features:
//!
//!  Feature | Type
//! ---------|------
#![cfg_attr(
    feature = "futures-io",
    doc = "[`futures-io`](crate::futures::write) | [`futures::io::AsyncWrite`](futures_io::AsyncWrite)"
)]
#![cfg_attr(
    not(feature = "futures-io"),
    doc = "`futures-io` (*inactive*) | `futures::io::AsyncWrite`"
)]
#![cfg_attr(
    feature = "tokio",
    doc = "[`tokio`](crate::tokio::write) | [`tokio::io::AsyncWrite`](::tokio::io::AsyncWrite)"
)]
#![cfg_attr(
    not(feature = "tokio"),
    doc = "`tokio` (*inactive*) | `tokio::io::AsyncWrite`"
)]
//!
//! `all-implementations` activates every adaptor.
//!
//! # Logging
//!
//! Mode decisions and failures are reported through [`tracing`] at `debug` and `warn` level;
//! install a subscriber to see them.

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    rustdoc::broken_intra_doc_links
)]

pub mod codec;
mod error;
mod generic;
mod preamble;
mod sink;
mod stream;
pub mod util;

#[cfg(feature = "futures-io")]
#[cfg_attr(docsrs, doc(cfg(feature = "futures-io")))]
pub mod futures;
#[cfg(feature = "tokio")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
pub mod tokio;

pub use flate2;

pub use crate::{
    error::{Error, ErrorKind},
    preamble::PREAMBLE,
    sink::{Sink, WriteSink},
    stream::{InflateStream, Mode},
};
