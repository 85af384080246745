use crate::{
    codec::{Decode, FlateDecoder},
    error::Error,
    preamble::{Sniffer, Verdict},
    sink::Sink,
    util::PartialBuffer,
};
use std::{fmt, io, mem};

const DEFAULT_BUF_SIZE: usize = 8192;

/// The externally observable state of an [`InflateStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Not enough input has arrived to tell whether the preamble is present.
    Undetermined,
    /// Input is forwarded to the sink unchanged.
    Raw,
    /// The preamble matched; input is being inflated.
    Compressed,
    /// The stream ended successfully and the sink has been ended.
    Finished,
    /// An error occurred; the stream accepts no further calls.
    Failed,
}

#[derive(Debug)]
enum State<D> {
    Sniffing(Sniffer),
    Raw,
    Inflating(Inflater<D>),
    Finished,
    Failed,
}

/// An inflate engine together with its fixed-size output chunk buffer.
struct Inflater<D> {
    decoder: D,
    output: Box<[u8]>,
}

impl<D: fmt::Debug> fmt::Debug for Inflater<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inflater")
            .field("decoder", &self.decoder)
            .field("output", &format_args!("[u8; {}]", self.output.len()))
            .finish()
    }
}

impl<D: Decode> Inflater<D> {
    fn new(decoder: D, cap: usize) -> Self {
        Self {
            decoder,
            output: vec![0; cap.max(1)].into(),
        }
    }

    /// Runs the whole of `input` through the decoder, handing each produced chunk to `sink`
    /// before decoding further.
    fn feed(&mut self, input: &[u8], sink: &mut impl Sink) -> Result<(), Error> {
        let mut input = PartialBuffer::new(input);

        loop {
            let mut output = PartialBuffer::new(&mut self.output[..]);
            let prior_in = input.written().len();

            let done = self
                .decoder
                .decode(&mut input, &mut output)
                .map_err(Error::Decode)?;

            let consumed = input.written().len() - prior_in;
            let produced = output.written().len();
            let full = output.unwritten().is_empty();

            if produced > 0 {
                tracing::trace!(produced, "forwarding inflated chunk");
                sink.write(output.written()).map_err(Error::Sink)?;
            }

            if input.unwritten().is_empty() && (done || !full) {
                return Ok(());
            }

            if consumed == 0 && produced == 0 && !done {
                return Err(Error::Decode(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "inflate engine made no progress",
                )));
            }
        }
    }
}

/// A push-based decoder for tagged zlib containers.
///
/// Bytes written to the stream are inspected for the [`PREAMBLE`](crate::PREAMBLE). If the input
/// starts with it, everything after it is inflated and the plaintext is written to the sink as it
/// is produced. Any other input is passed to the sink unchanged.
///
/// Once [`end`](Self::end) succeeds the sink has been ended. Any error leaves the stream failed,
/// and the inflate engine is released as soon as the stream finishes, fails or is dropped.
///
/// ```
/// use tagged_inflate::{InflateStream, PREAMBLE};
///
/// let mut input = PREAMBLE.to_vec();
/// // zlib encoding of "Hello, world!"
/// input.extend_from_slice(&[
///     0x78, 0x9c, 0xf3, 0x48, 0xcd, 0xc9, 0xc9, 0xd7, 0x51, 0x28, 0xcf, 0x2f, 0xca, 0x49,
///     0x51, 0x04, 0x00, 0x20, 0x5e, 0x04, 0x8a,
/// ]);
///
/// let mut stream = InflateStream::new(Vec::new());
/// stream.write(&input)?;
/// stream.end()?;
///
/// assert_eq!(stream.into_inner(), b"Hello, world!");
/// # Ok::<(), tagged_inflate::Error>(())
/// ```
#[derive(Debug)]
pub struct InflateStream<S, D = FlateDecoder> {
    sink: S,
    state: State<D>,
    init: fn() -> io::Result<D>,
    capacity: usize,
    strict_preamble: bool,
}

fn zlib() -> io::Result<FlateDecoder> {
    Ok(FlateDecoder::zlib())
}

impl<S: Sink> InflateStream<S> {
    /// Creates a stream writing to `sink`, inflating tagged input as zlib data.
    pub fn new(sink: S) -> Self {
        Self::with_capacity(DEFAULT_BUF_SIZE, sink)
    }

    /// Creates a stream whose decoded output is handed to `sink` in chunks of at most `cap` bytes.
    pub fn with_capacity(cap: usize, sink: S) -> Self {
        Self::with_decoder_and_capacity(cap, sink, zlib)
    }
}

impl<S: Sink, D: Decode> InflateStream<S, D> {
    /// Creates a stream that constructs its inflate engine with `init` once the preamble has been
    /// seen.
    pub fn with_decoder(sink: S, init: fn() -> io::Result<D>) -> Self {
        Self::with_decoder_and_capacity(DEFAULT_BUF_SIZE, sink, init)
    }

    /// Combines [`with_decoder`](Self::with_decoder) and [`with_capacity`](Self::with_capacity).
    pub fn with_decoder_and_capacity(cap: usize, sink: S, init: fn() -> io::Result<D>) -> Self {
        Self {
            sink,
            state: State::Sniffing(Sniffer::default()),
            init,
            capacity: cap,
            strict_preamble: false,
        }
    }

    /// When enabled, ending the stream part way through the preamble fails with
    /// [`Error::TruncatedStream`] instead of passing the partial preamble through as raw data.
    ///
    /// Disabled by default.
    pub fn strict_preamble(&mut self, enabled: bool) {
        self.strict_preamble = enabled;
    }

    /// Returns the current [`Mode`] of the stream.
    pub fn mode(&self) -> Mode {
        match self.state {
            State::Sniffing(_) => Mode::Undetermined,
            State::Raw => Mode::Raw,
            State::Inflating(_) => Mode::Compressed,
            State::Finished => Mode::Finished,
            State::Failed => Mode::Failed,
        }
    }

    /// Processes `buf`, forwarding whatever output it yields to the sink before returning.
    pub fn write(&mut self, buf: &[u8]) -> Result<(), Error> {
        if self.is_terminal() {
            return Err(Error::InvalidState);
        }

        let state = mem::replace(&mut self.state, State::Failed);
        let result = self.do_write(state, buf);
        self.settle(result)
    }

    /// Finishes the stream and ends the sink.
    ///
    /// Fails with [`Error::TruncatedStream`] if the input was compressed and the inflate engine
    /// has not seen the end of its data; the sink is not ended in that case.
    pub fn end(&mut self) -> Result<(), Error> {
        if self.is_terminal() {
            return Err(Error::InvalidState);
        }

        let state = mem::replace(&mut self.state, State::Failed);
        let result = self.do_end(state);
        self.settle(result)
    }

    fn is_terminal(&self) -> bool {
        matches!(self.state, State::Finished | State::Failed)
    }

    fn settle(&mut self, result: Result<State<D>, Error>) -> Result<(), Error> {
        match result {
            Ok(state) => {
                self.state = state;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "decoding stream failed");
                Err(err)
            }
        }
    }

    fn do_write(&mut self, state: State<D>, buf: &[u8]) -> Result<State<D>, Error> {
        match state {
            State::Sniffing(mut sniffer) => match sniffer.push(buf) {
                Verdict::Undecided => Ok(State::Sniffing(sniffer)),

                Verdict::Raw => {
                    tracing::debug!(
                        buffered = sniffer.buffered().len(),
                        "no preamble, passing input through"
                    );
                    self.pass_through(sniffer.buffered())?;
                    self.pass_through(buf)?;
                    Ok(State::Raw)
                }

                Verdict::Tagged { consumed } => {
                    tracing::debug!("preamble matched, inflating");
                    let decoder = (self.init)().map_err(Error::CodecInit)?;
                    let mut inflater = Inflater::new(decoder, self.capacity);
                    inflater.feed(&buf[consumed..], &mut self.sink)?;
                    Ok(State::Inflating(inflater))
                }
            },

            State::Raw => {
                self.pass_through(buf)?;
                Ok(State::Raw)
            }

            State::Inflating(mut inflater) => {
                inflater.feed(buf, &mut self.sink)?;
                Ok(State::Inflating(inflater))
            }

            State::Finished | State::Failed => Err(Error::InvalidState),
        }
    }

    fn do_end(&mut self, state: State<D>) -> Result<State<D>, Error> {
        match state {
            State::Sniffing(sniffer) => {
                let buffered = sniffer.buffered();
                if self.strict_preamble && !buffered.is_empty() {
                    return Err(Error::TruncatedStream);
                }
                tracing::debug!(
                    buffered = buffered.len(),
                    "ended before the preamble was decided, treating input as raw"
                );
                self.pass_through(buffered)?;
            }

            State::Raw => {}

            State::Inflating(mut inflater) => {
                inflater.decoder.finish().map_err(|err| {
                    if err.kind() == io::ErrorKind::UnexpectedEof {
                        Error::TruncatedStream
                    } else {
                        Error::Decode(err)
                    }
                })?;
            }

            State::Finished | State::Failed => return Err(Error::InvalidState),
        }

        self.sink.end().map_err(Error::Sink)?;
        tracing::debug!("decoding stream finished");
        Ok(State::Finished)
    }

    fn pass_through(&mut self, buf: &[u8]) -> Result<(), Error> {
        if buf.is_empty() {
            return Ok(());
        }
        self.sink.write(buf).map_err(Error::Sink)
    }
}

impl<S, D> InflateStream<S, D> {
    /// Gets a reference to the sink.
    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Gets a mutable reference to the sink.
    ///
    /// It is inadvisable to directly write to the sink.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the stream, returning the sink. An unfinished inflate engine is dropped.
    pub fn into_inner(self) -> S {
        self.sink
    }
}

/// Writes go through [`InflateStream::write`]; the stream still has to be
/// [ended](InflateStream::end) explicitly.
impl<S: Sink, D: Decode> io::Write for InflateStream<S, D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        InflateStream::write(self, buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
