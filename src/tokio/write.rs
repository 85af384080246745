//! Types which operate over [`AsyncWrite`](tokio::io::AsyncWrite) streams.

use tokio::io::AsyncWrite;

crate::generic::write::impl_inflate_decoder!(poll_shutdown);
