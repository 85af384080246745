use std::io;

/// Errors reported by an [`InflateStream`](crate::InflateStream).
///
/// Every error except [`Error::InvalidState`] moves the stream into its failed state; no
/// further calls will succeed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to initialize the compression engine")]
    CodecInit(#[source] io::Error),

    #[error("compressed data is invalid")]
    Decode(#[source] io::Error),

    #[error("compressed data is incomplete")]
    TruncatedStream,

    #[error("stream already closed")]
    InvalidState,

    #[error("failed to write to the output sink")]
    Sink(#[source] io::Error),
}

/// Classification of an [`Error`], without its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CodecInit,
    Decode,
    TruncatedStream,
    InvalidState,
    Sink,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CodecInit(_) => ErrorKind::CodecInit,
            Self::Decode(_) => ErrorKind::Decode,
            Self::TruncatedStream => ErrorKind::TruncatedStream,
            Self::InvalidState => ErrorKind::InvalidState,
            Self::Sink(_) => ErrorKind::Sink,
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match &err {
            // Sink errors already carry the kind the caller cares about.
            Error::Sink(inner) => inner.kind(),
            Error::Decode(_) => io::ErrorKind::InvalidData,
            Error::TruncatedStream => io::ErrorKind::UnexpectedEof,
            Error::CodecInit(_) | Error::InvalidState => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}
