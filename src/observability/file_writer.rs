//! Size-rotated log file.
//!
//! Lines are appended to one file. Once it grows past the size limit it is
//! shifted to `<name>.1`, older backups move up by one, and anything beyond
//! the retention count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Open handle plus the number of bytes already in the file.
#[derive(Debug, Default)]
struct Sink {
    file: Option<File>,
    written: u64,
}

/// Thread-safe rotating log file, usable as a `tracing-subscriber` writer.
///
/// The file is opened on the first write, so construction never fails.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    sink: Mutex<Sink>,
}

impl FileWriter {
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_limit(file_path, MAX_FILE_SIZE_BYTES)
    }

    pub(crate) fn with_limit(file_path: PathBuf, max_bytes: u64) -> Self {
        Self {
            file_path,
            max_bytes,
            sink: Mutex::new(Sink::default()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Sink>> {
        self.sink
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("log writer poisoned: {e}")))
    }

    fn append(&self, buf: &[u8]) -> io::Result<usize> {
        let mut sink = self.lock()?;

        if sink.file.is_some() && sink.written + buf.len() as u64 > self.max_bytes {
            sink.file = None;
            self.rotate()?;
        }

        if sink.file.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.file_path)?;
            sink.written = file.metadata().map(|m| m.len()).unwrap_or(0);
            sink.file = Some(file);
        }

        let Sink { file, written } = &mut *sink;
        let file = file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file unavailable"))?;
        file.write_all(buf)?;
        *written += buf.len() as u64;
        Ok(buf.len())
    }

    /// Shifts `<name>.N` to `<name>.N+1`, dropping the oldest, then moves the
    /// live file to `<name>.1`.
    fn rotate(&self) -> io::Result<()> {
        let oldest = self.backup_path(MAX_BACKUP_FILES);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..MAX_BACKUP_FILES).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        if self.file_path.exists() {
            fs::rename(&self.file_path, self.backup_path(1))?;
        }
        Ok(())
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.file_path.clone().into_os_string();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.lock()?.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a FileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_and_keeps_three_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.log");
        let writer = FileWriter::with_limit(path.clone(), 8);

        for line in ["line-1\n", "line-2\n", "line-3\n", "line-4\n", "line-5\n"] {
            (&writer).write_all(line.as_bytes()).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line-5\n");
        assert_eq!(fs::read_to_string(writer.backup_path(1)).unwrap(), "line-4\n");
        assert_eq!(fs::read_to_string(writer.backup_path(3)).unwrap(), "line-2\n");
        assert!(!writer.backup_path(4).exists());
    }

    #[test]
    fn appends_below_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.log");
        let writer = FileWriter::new(path.clone());

        (&writer).write_all(b"a\n").unwrap();
        (&writer).write_all(b"b\n").unwrap();
        (&writer).flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
    }
}
