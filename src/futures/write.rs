//! Types which operate over [`AsyncWrite`](futures_io::AsyncWrite) streams.

use futures_io::AsyncWrite;

crate::generic::write::impl_inflate_decoder!(poll_close);
