//! The inflate engine seam.
//!
//! [`InflateStream`](crate::InflateStream) drives any [`Decode`] implementation; the one shipped
//! with this crate is [`FlateDecoder`], backed by [`flate2`].

use crate::util::PartialBuffer;
use std::io::Result;

mod flate;

pub use self::flate::FlateDecoder;

/// Abstraction for incremental decoders.
pub trait Decode {
    /// Decode from `input` into `output`, advancing both by the amount consumed and produced.
    ///
    /// Returns `true` once the codec has reached the logical end of its stream. Malformed data
    /// is reported as an error.
    fn decode(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool>;

    /// Confirm that the logical end of the stream has been reached.
    ///
    /// Returns an [`UnexpectedEof`](std::io::ErrorKind::UnexpectedEof) error if the codec still
    /// expects more input.
    fn finish(&mut self) -> Result<()>;
}

impl<D: Decode + ?Sized> Decode for Box<D> {
    fn decode(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        (**self).decode(input, output)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}
