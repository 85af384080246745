//! Implementations for IO traits exported by [`futures-io`](::futures_io).

pub mod write;
