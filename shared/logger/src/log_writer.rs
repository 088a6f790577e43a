//! Asynchronous log file writer.

use crate::error::Result;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender, channel};
use tracing_subscriber::fmt::MakeWriter;

/// Owns the log file on the dedicated writer thread.
struct LogWriter {
    file: File,
}

impl LogWriter {
    /// Opens or creates the file in append mode.
    fn new(log_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        Ok(Self { file })
    }

    /// Writes and flushes one formatted line.
    fn write_line(&mut self, line: &[u8]) {
        if let Err(e) = self.file.write_all(line) {
            eprintln!("Error writing log: {}", e);
            return;
        }
        if let Err(e) = self.file.flush() {
            eprintln!("Error flushing log: {}", e);
        }
    }

    /// Runs until every sender is dropped.
    fn run(mut self, receiver: Receiver<Vec<u8>>) {
        for line in receiver {
            self.write_line(&line);
        }
    }
}

/// `MakeWriter` that forwards formatted events to a writer thread.
///
/// Cloning shares the same thread and file.
#[derive(Clone)]
pub struct FileMakeWriter {
    sender: Sender<Vec<u8>>,
}

impl FileMakeWriter {
    /// Opens `log_path` and spawns the writer thread that owns it.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or the thread cannot start.
    pub fn spawn(log_path: &Path) -> Result<Self> {
        let writer = LogWriter::new(log_path)?;
        let (sender, receiver) = channel();
        std::thread::Builder::new()
            .name("log-writer".to_string())
            .spawn(move || writer.run(receiver))?;
        Ok(Self { sender })
    }
}

/// Per-event handle returned by [`FileMakeWriter`].
pub struct ChannelWriter {
    sender: Sender<Vec<u8>>,
}

impl Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sender.send(buf.to_vec()).map_err(|_| {
            io::Error::new(io::ErrorKind::BrokenPipe, "log writer thread stopped")
        })?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_spawn_creates_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let writer = FileMakeWriter::spawn(&log_path);
        assert!(writer.is_ok());
        assert!(log_path.exists());
    }

    #[test]
    fn test_lines_reach_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let make_writer = FileMakeWriter::spawn(&log_path).unwrap();
        make_writer.make_writer().write_all(b"first line\n").unwrap();
        make_writer.make_writer().write_all(b"second line\n").unwrap();
        drop(make_writer);

        thread::sleep(Duration::from_millis(100));

        let content = fs::read_to_string(log_path).unwrap();
        assert_eq!(content, "first line\nsecond line\n");
    }

    #[test]
    fn test_open_failure_is_reported() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("missing").join("test.log");

        assert!(FileMakeWriter::spawn(&log_path).is_err());
    }
}
