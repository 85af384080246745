//! Recognition of the container preamble.

/// Leading bytes announcing that a zlib stream follows: seven marker bytes and five reserved
/// zero bytes.
pub const PREAMBLE: [u8; 12] = *b"##SC001\0\0\0\0\0";

/// Outcome of feeding bytes to a [`Sniffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// Everything seen so far is a strict prefix of the preamble.
    Undecided,
    /// The input diverged from the preamble; it is raw data. The sniffer still holds only the
    /// bytes matched by earlier calls, the latest input has to be passed through in full.
    Raw,
    /// The preamble completed after `consumed` bytes of the latest input.
    Tagged { consumed: usize },
}

/// Matches incoming bytes against [`PREAMBLE`].
///
/// Only a count is kept: while undecided the look-ahead bytes are by construction
/// `PREAMBLE[..matched]`.
#[derive(Debug, Default)]
pub(crate) struct Sniffer {
    matched: usize,
}

impl Sniffer {
    pub(crate) fn push(&mut self, input: &[u8]) -> Verdict {
        let prior = self.matched;

        for (i, &byte) in input.iter().enumerate() {
            if byte != PREAMBLE[self.matched] {
                self.matched = prior;
                return Verdict::Raw;
            }

            self.matched += 1;
            if self.matched == PREAMBLE.len() {
                return Verdict::Tagged { consumed: i + 1 };
            }
        }

        Verdict::Undecided
    }

    /// Bytes held back from earlier calls while undecided.
    pub(crate) fn buffered(&self) -> &'static [u8] {
        &PREAMBLE[..self.matched]
    }
}
