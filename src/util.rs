/// A byte buffer split into a processed prefix and a remaining suffix.
///
/// Used both for input (processed = consumed by the codec) and for output
/// (processed = filled with decoded bytes).
#[derive(Debug, Default)]
pub struct PartialBuffer<B> {
    buffer: B,
    index: usize,
}

impl<B: AsRef<[u8]>> PartialBuffer<B> {
    pub fn new(buffer: B) -> Self {
        Self { buffer, index: 0 }
    }

    /// The processed part of the buffer.
    pub fn written(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.index]
    }

    /// The part of the buffer not yet processed.
    pub fn unwritten(&self) -> &[u8] {
        &self.buffer.as_ref()[self.index..]
    }

    pub fn advance(&mut self, amount: usize) {
        debug_assert!(self.index + amount <= self.buffer.as_ref().len());
        self.index += amount;
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> PartialBuffer<B> {
    pub fn unwritten_mut(&mut self) -> &mut [u8] {
        &mut self.buffer.as_mut()[self.index..]
    }
}

#[cfg(test)]
mod tests {
    use super::PartialBuffer;

    #[test]
    fn advance_moves_bytes_between_halves() {
        let mut buffer = PartialBuffer::new(&b"abcdef"[..]);
        assert_eq!(buffer.written(), b"");
        assert_eq!(buffer.unwritten(), b"abcdef");

        buffer.advance(2);
        assert_eq!(buffer.written(), b"ab");
        assert_eq!(buffer.unwritten(), b"cdef");

        buffer.advance(4);
        assert!(buffer.unwritten().is_empty());
    }

    #[test]
    fn output_fills_from_the_front() {
        let mut storage = [0u8; 4];
        let mut buffer = PartialBuffer::new(&mut storage[..]);
        buffer.unwritten_mut()[..3].copy_from_slice(b"xyz");
        buffer.advance(3);
        assert_eq!(buffer.written(), b"xyz");
        assert_eq!(buffer.unwritten_mut().len(), 1);
    }
}
