use crate::{Error, InflateStream, Mode};
use futures_core::ready;
use std::{io, task::Poll};

/// The runtime independent half of the async write adaptors.
///
/// Decoded output is collected in the inner stream's `Vec` sink and drained into the wrapped
/// writer before more input is accepted, so at most one write's worth of output is pending.
/// Output decoded before a failure is still drained before the failure is reported.
#[derive(Debug)]
pub(crate) struct Decoder {
    stream: InflateStream<Vec<u8>>,
    written: usize,
    /// Kind and message of the error that failed the stream, reported by every later call.
    failure: Option<(io::ErrorKind, String)>,
}

impl Decoder {
    pub(crate) fn new() -> Self {
        Self {
            stream: InflateStream::new(Vec::new()),
            written: 0,
            failure: None,
        }
    }

    pub(crate) fn stream_mut(&mut self) -> &mut InflateStream<Vec<u8>> {
        &mut self.stream
    }

    pub(crate) fn mode(&self) -> Mode {
        self.stream.mode()
    }

    fn fail(&mut self, err: Error) {
        let err = io::Error::from(err);
        self.failure = Some((err.kind(), err.to_string()));
    }

    fn failure(&self) -> Option<io::Error> {
        self.failure
            .as_ref()
            .map(|(kind, message)| io::Error::new(*kind, message.clone()))
    }

    fn drain(
        &mut self,
        poll_write: &mut dyn FnMut(&[u8]) -> Poll<io::Result<usize>>,
    ) -> Poll<io::Result<()>> {
        let pending = self.stream.get_mut();

        while self.written < pending.len() {
            let bytes_written = ready!(poll_write(&pending[self.written..]))?;
            if bytes_written == 0 {
                return Poll::Ready(Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "failed to write the decoded data",
                )));
            }

            self.written += bytes_written;
        }

        pending.clear();
        self.written = 0;
        Poll::Ready(Ok(()))
    }

    pub(crate) fn poll_write(
        &mut self,
        buf: &[u8],
        poll_write: &mut dyn FnMut(&[u8]) -> Poll<io::Result<usize>>,
    ) -> Poll<io::Result<usize>> {
        loop {
            ready!(self.drain(poll_write))?;
            if let Some(err) = self.failure() {
                return Poll::Ready(Err(err));
            }

            match self.stream.write(buf) {
                Ok(()) => return Poll::Ready(Ok(buf.len())),
                Err(err) => self.fail(err),
            }
        }
    }

    pub(crate) fn poll_flush(
        &mut self,
        poll_write: &mut dyn FnMut(&[u8]) -> Poll<io::Result<usize>>,
    ) -> Poll<io::Result<()>> {
        self.drain(poll_write)
    }

    /// Ends the stream once, then drains whatever output is still pending.
    pub(crate) fn poll_close(
        &mut self,
        poll_write: &mut dyn FnMut(&[u8]) -> Poll<io::Result<usize>>,
    ) -> Poll<io::Result<()>> {
        loop {
            ready!(self.drain(poll_write))?;
            if let Some(err) = self.failure() {
                return Poll::Ready(Err(err));
            }
            if self.stream.mode() == Mode::Finished {
                return Poll::Ready(Ok(()));
            }

            if let Err(err) = self.stream.end() {
                self.fail(err);
            }
        }
    }
}

macro_rules! impl_inflate_decoder {
    ($poll_close: tt) => {
        use crate::{generic::write::Decoder as GenericDecoder, Mode};
        use futures_core::ready;
        use pin_project_lite::pin_project;
        use std::{
            io,
            pin::Pin,
            task::{Context, Poll},
        };

        pin_project! {
            /// Decodes tagged zlib containers written to it, passing untagged input through
            /// unchanged, and writes the result to the wrapped writer.
            ///
            /// Closing the decoder ends the decoding stream; a tagged stream that was cut short
            /// makes the close fail with [`UnexpectedEof`](std::io::ErrorKind::UnexpectedEof).
            /// Once decoding has failed, every later write or close reports that same failure.
            #[derive(Debug)]
            pub struct InflateDecoder<W> {
                #[pin]
                writer: W,
                inner: GenericDecoder,
            }
        }

        impl<W: AsyncWrite> InflateDecoder<W> {
            /// Creates a new decoder which writes its decoded output to `writer`.
            pub fn new(writer: W) -> Self {
                Self {
                    writer,
                    inner: GenericDecoder::new(),
                }
            }

            /// See [`InflateStream::strict_preamble`](crate::InflateStream::strict_preamble).
            pub fn strict_preamble(&mut self, enabled: bool) {
                self.inner.stream_mut().strict_preamble(enabled);
            }
        }

        impl<W> InflateDecoder<W> {
            /// Returns the current [`Mode`] of the decoding stream.
            pub fn mode(&self) -> Mode {
                self.inner.mode()
            }

            /// Gets a reference to the underlying writer.
            pub fn get_ref(&self) -> &W {
                &self.writer
            }

            /// Gets a mutable reference to the underlying writer.
            ///
            /// It is inadvisable to directly write to the underlying writer.
            pub fn get_mut(&mut self) -> &mut W {
                &mut self.writer
            }

            /// Gets a pinned mutable reference to the underlying writer.
            ///
            /// It is inadvisable to directly write to the underlying writer.
            pub fn get_pin_mut(self: Pin<&mut Self>) -> Pin<&mut W> {
                self.project().writer
            }

            /// Consumes this decoder, returning the underlying writer.
            ///
            /// Decoded output not yet written to the writer is lost.
            pub fn into_inner(self) -> W {
                self.writer
            }
        }

        fn get_poll_write<'a, 'b, W: AsyncWrite>(
            mut writer: Pin<&'a mut W>,
            cx: &'a mut Context<'b>,
        ) -> impl for<'buf> FnMut(&'buf [u8]) -> Poll<io::Result<usize>> + use<'a, 'b, W> {
            move |buf| writer.as_mut().poll_write(cx, buf)
        }

        impl<W: AsyncWrite> AsyncWrite for InflateDecoder<W> {
            fn poll_write(
                self: Pin<&mut Self>,
                cx: &mut Context<'_>,
                buf: &[u8],
            ) -> Poll<io::Result<usize>> {
                let this = self.project();
                this.inner
                    .poll_write(buf, &mut get_poll_write(this.writer, cx))
            }

            fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
                let mut this = self.project();
                ready!(this
                    .inner
                    .poll_flush(&mut get_poll_write(this.writer.as_mut(), cx)))?;
                this.writer.poll_flush(cx)
            }

            fn $poll_close(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
                let mut this = self.project();
                ready!(this
                    .inner
                    .poll_close(&mut get_poll_write(this.writer.as_mut(), cx)))?;
                this.writer.$poll_close(cx)
            }
        }
    };
}
pub(crate) use impl_inflate_decoder;
