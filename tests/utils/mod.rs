#![allow(unused)] // Different tests use a different subset of functions

mod input_stream;
mod track_ended;

pub use self::{input_stream::InputStream, track_ended::TrackEnded};

use flate2::{bufread::ZlibEncoder, Compression};
use std::io::Read;
use tagged_inflate::{Error, InflateStream, PREAMBLE};

/// The tagged encoding of "Hello, world!".
pub const HELLO_WORLD: &[u8] = &[
    0x23, 0x23, 0x53, 0x43, 0x30, 0x30, 0x31, 0x00, 0x00, 0x00, 0x00, 0x00, 0x78, 0x9c, 0xf3,
    0x48, 0xcd, 0xc9, 0xc9, 0xd7, 0x51, 0x28, 0xcf, 0x2f, 0xca, 0x49, 0x51, 0x04, 0x00, 0x20,
    0x5e, 0x04, 0x8a,
];

/// The tagged encoding of the empty string.
pub const EMPTY: &[u8] = &[
    0x23, 0x23, 0x53, 0x43, 0x30, 0x30, 0x31, 0x00, 0x00, 0x00, 0x00, 0x00, 0x78, 0x9c, 0x03,
    0x00, 0x00, 0x00, 0x00, 0x01,
];

pub fn zlib_compress(bytes: &[u8]) -> Vec<u8> {
    let mut output = vec![];
    ZlibEncoder::new(bytes, Compression::fast())
        .read_to_end(&mut output)
        .unwrap();
    output
}

/// Compresses `bytes` and prefixes the result with the preamble.
pub fn tagged(bytes: &[u8]) -> Vec<u8> {
    let mut output = PREAMBLE.to_vec();
    output.extend(zlib_compress(bytes));
    output
}

/// Routes the decoder's logs to the test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .without_time()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .with_target(false)
        .try_init();
}

/// Writes every chunk to a fresh stream, then ends it.
pub fn decode_chunks<'a>(
    chunks: impl IntoIterator<Item = &'a [u8]>,
) -> Result<TrackEnded, Error> {
    let mut stream = InflateStream::new(TrackEnded::default());
    for chunk in chunks {
        stream.write(chunk)?;
    }
    stream.end()?;
    Ok(stream.into_inner())
}

pub fn decode(bytes: &[u8]) -> Result<TrackEnded, Error> {
    decode_chunks([bytes])
}

pub fn decode_one_by_one(bytes: &[u8]) -> Result<TrackEnded, Error> {
    decode_chunks(bytes.chunks(1))
}
