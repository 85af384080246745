use proptest_derive::Arbitrary;

/// Input split into arbitrary chunks, each handed to a separate `write` call.
#[derive(Arbitrary, Debug, Clone)]
pub struct InputStream(Vec<Vec<u8>>);

impl InputStream {
    /// Re-split `bytes` into chunks of `chunk_size`.
    pub fn rechunk(bytes: &[u8], chunk_size: usize) -> Self {
        InputStream(bytes.chunks(chunk_size).map(Vec::from).collect())
    }

    pub fn chunks(&self) -> impl Iterator<Item = &[u8]> {
        // Interleave empty chunks before and after each chunk so that zero length writes are
        // exercised at every point of the stream.
        self.0
            .iter()
            .flat_map(|bytes| [&[][..], &bytes[..]])
            .chain(Some(&[][..]))
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.0.iter().flatten().cloned().collect()
    }
}

impl From<Vec<Vec<u8>>> for InputStream {
    fn from(input: Vec<Vec<u8>>) -> InputStream {
        InputStream(input)
    }
}
