//! We use this mocking module in unit tests to emulate a serial port.

/// Scripted serial port double: inbound bytes are queued ahead of time,
/// outbound bytes are captured for inspection.
pub struct MockSerial {
    /// Bytes the engine will see when it reads.
    inbound: Vec<u8>,
    /// Read cursor into `inbound`.
    position: usize,
    /// Everything the engine wrote.
    outbound: Vec<u8>,
    /// When set, reads fail with a hard transport error.
    pub fail_reads: bool,
    /// When set, writes fail with a hard transport error.
    pub fail_writes: bool,
}

#[derive(Debug)]
pub enum MockSerialError {
    /// No more scripted bytes; the engine should stop draining.
    WouldBlock,
    /// Simulated hard transport fault.
    Broken,
}

impl core::fmt::Display for MockSerialError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl core::error::Error for MockSerialError {}

impl embedded_io::Error for MockSerialError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            // The engine's poll loop treats TimedOut as "drained".
            MockSerialError::WouldBlock => embedded_io::ErrorKind::TimedOut,
            MockSerialError::Broken => embedded_io::ErrorKind::BrokenPipe,
        }
    }
}

impl embedded_io::ErrorType for MockSerial {
    type Error = MockSerialError;
}

impl embedded_io::Read for MockSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_reads {
            return Err(MockSerialError::Broken);
        }
        if self.position >= self.inbound.len() {
            return Err(MockSerialError::WouldBlock);
        }
        let available = &self.inbound[self.position..];
        let count = buf.len().min(available.len());
        buf[..count].copy_from_slice(&available[..count]);
        self.position += count;
        Ok(count)
    }
}

impl embedded_io::Write for MockSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.fail_writes {
            return Err(MockSerialError::Broken);
        }
        self.outbound.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockSerialError::Broken);
        }
        Ok(())
    }
}

impl MockSerial {
    pub fn new() -> Self {
        Self {
            inbound: Vec::new(),
            position: 0,
            outbound: Vec::new(),
            fail_reads: false,
            fail_writes: false,
        }
    }

    /// Append bytes for the engine to read. May be called between polls to
    /// model traffic trickling in.
    pub fn queue_input(&mut self, data: &[u8]) {
        self.inbound.extend_from_slice(data);
    }

    /// Everything the engine has written so far.
    pub fn written(&self) -> &[u8] {
        &self.outbound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io::{Error, Read, Write};

    #[test]
    fn reads_drain_queued_input_then_block() {
        let mut mock = MockSerial::new();
        mock.queue_input(b"PING\n");

        let mut buf = [0u8; 3];
        assert_eq!(mock.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf, b"PIN");
        assert_eq!(mock.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"G\n");

        let blocked = mock.read(&mut buf).unwrap_err();
        assert!(matches!(blocked.kind(), embedded_io::ErrorKind::TimedOut));
    }

    #[test]
    fn input_queued_after_exhaustion_is_readable() {
        let mut mock = MockSerial::new();
        mock.queue_input(b"AB");
        let mut buf = [0u8; 8];
        mock.read(&mut buf).unwrap();

        mock.queue_input(b"CD");
        assert_eq!(mock.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"CD");
    }

    #[test]
    fn writes_accumulate() {
        let mut mock = MockSerial::new();
        mock.write(b"PONG").unwrap();
        mock.write(b"\r\n").unwrap();
        assert_eq!(mock.written(), b"PONG\r\n");
    }

    #[test]
    fn faults_report_hard_error_kinds() {
        let mut mock = MockSerial::new();
        mock.queue_input(b"data");
        mock.fail_reads = true;
        mock.fail_writes = true;

        let mut buf = [0u8; 4];
        let read_err = mock.read(&mut buf).unwrap_err();
        assert!(matches!(read_err.kind(), embedded_io::ErrorKind::BrokenPipe));
        let write_err = mock.write(b"x").unwrap_err();
        assert!(matches!(write_err.kind(), embedded_io::ErrorKind::BrokenPipe));
    }
}
