//! Implementations for IO traits exported by [`tokio` v1.0](::tokio).

pub mod write;
