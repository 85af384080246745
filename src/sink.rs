//! Receivers of decoded output.

use std::io::{self, Result};

/// Downstream receiver of the bytes produced by an [`InflateStream`](crate::InflateStream).
///
/// `write` receives chunks in order. `end` is called once, after the last chunk, and only if the
/// stream finished successfully.
pub trait Sink {
    fn write(&mut self, buf: &[u8]) -> Result<()>;

    fn end(&mut self) -> Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        (**self).write(buf)
    }

    fn end(&mut self) -> Result<()> {
        (**self).end()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        (**self).write(buf)
    }

    fn end(&mut self) -> Result<()> {
        (**self).end()
    }
}

impl Sink for Vec<u8> {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A [`Sink`] over any [`io::Write`]. Ending the sink flushes the writer.
#[derive(Debug)]
pub struct WriteSink<W> {
    writer: W,
}

impl<W: io::Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W> WriteSink<W> {
    /// Gets a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Gets a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes this sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Sink for WriteSink<W> {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        self.writer.write_all(buf)
    }

    fn end(&mut self) -> Result<()> {
        self.writer.flush()
    }
}
