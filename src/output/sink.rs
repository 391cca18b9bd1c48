// Wed Feb 11 2026 - Alex

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Destination for offset records: standard output, or a file opened once
/// per run in truncate or append mode. Closes on drop, including on the
/// abort paths.
pub enum OutputSink {
    Stdout(io::Stdout),
    File(File),
}

impl OutputSink {
    pub fn stdout() -> Self {
        OutputSink::Stdout(io::stdout())
    }

    pub fn open(path: &Path, append: bool) -> io::Result<Self> {
        let file = if append {
            OpenOptions::new().create(true).append(true).open(path)?
        } else {
            File::create(path)?
        };
        Ok(OutputSink::File(file))
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Stdout(out) => out.write(buf),
            OutputSink::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Stdout(out) => out.flush(),
            OutputSink::File(file) => file.flush(),
        }
    }
}
