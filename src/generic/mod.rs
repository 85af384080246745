#[cfg(any(feature = "futures-io", feature = "tokio"))]
pub(crate) mod write;
