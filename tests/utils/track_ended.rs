use std::io::{Error, ErrorKind, Result};
use tagged_inflate::Sink;

/// A sink recording its output and how often it was ended.
#[derive(Debug, Default)]
pub struct TrackEnded {
    output: Vec<u8>,
    writes: usize,
    ended: usize,
    fail_writes: bool,
}

impl TrackEnded {
    /// A sink which rejects every write.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn is_ended(&self) -> bool {
        self.ended > 0
    }

    pub fn times_ended(&self) -> usize {
        self.ended
    }
}

impl Sink for TrackEnded {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        assert_eq!(self.ended, 0, "write after end");
        assert!(!buf.is_empty(), "empty chunk forwarded");
        if self.fail_writes {
            return Err(Error::new(ErrorKind::BrokenPipe, "sink closed"));
        }
        self.writes += 1;
        self.output.extend_from_slice(buf);
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.ended += 1;
        Ok(())
    }
}
