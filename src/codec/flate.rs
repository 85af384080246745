use crate::{codec::Decode, util::PartialBuffer};
use flate2::{Decompress, FlushDecompress, Status};
use std::io::{Error, ErrorKind, Result};

/// An inflate engine over [`flate2::Decompress`].
#[derive(Debug)]
pub struct FlateDecoder {
    decompress: Decompress,
    done: bool,
}

impl FlateDecoder {
    /// Inflate a zlib stream: two byte header, deflate data, Adler-32 trailer.
    pub fn zlib() -> Self {
        Self::new(true)
    }

    /// Inflate headerless deflate data.
    pub fn raw() -> Self {
        Self::new(false)
    }

    fn new(zlib_header: bool) -> Self {
        Self {
            decompress: Decompress::new(zlib_header),
            done: false,
        }
    }

    fn do_decode(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<Status> {
        let prior_in = self.decompress.total_in();
        let prior_out = self.decompress.total_out();

        let status =
            self.decompress
                .decompress(input.unwritten(), output.unwritten_mut(), FlushDecompress::None)?;

        input.advance((self.decompress.total_in() - prior_in) as usize);
        output.advance((self.decompress.total_out() - prior_out) as usize);

        Ok(status)
    }
}

impl Decode for FlateDecoder {
    fn decode(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        if self.done {
            return if input.unwritten().is_empty() {
                Ok(true)
            } else {
                Err(Error::new(
                    ErrorKind::InvalidData,
                    "extra data after end of compressed stream",
                ))
            };
        }

        match self.do_decode(input, output)? {
            Status::Ok => Ok(false),
            Status::StreamEnd => {
                self.done = true;
                Ok(true)
            }
            // No progress was possible, the caller has to supply more input or more space.
            Status::BufError => Ok(false),
        }
    }

    fn finish(&mut self) -> Result<()> {
        if self.done {
            Ok(())
        } else {
            Err(Error::from(ErrorKind::UnexpectedEof))
        }
    }
}
