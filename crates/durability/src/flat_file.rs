//! Line-oriented product file
//!
//! One encoded product per line, no header. Reading returns the raw lines;
//! decoding and the malformed-line policy belong to the store.
//!
//! # Crash Safety
//!
//! Saving truncates and overwrites the target, using the write-fsync-rename
//! pattern:
//! 1. Write all lines to a sibling temporary file (`.<name>.tmp`)
//! 2. fsync the temporary file
//! 3. Atomic rename over the target
//! 4. fsync the parent directory (unix)
//!
//! A reader therefore sees either the previous file or the complete new one.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use stockroom_core::Result;
use tracing::{debug, info};

/// Handle to the product file at a fixed path
#[derive(Debug, Clone)]
pub struct FlatFile {
    path: PathBuf,
}

impl FlatFile {
    /// Create a handle; nothing is touched on disk.
    pub fn new(path: impl AsRef<Path>) -> Self {
        FlatFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the product file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the product file exists as a regular file
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read every line of the file as raw bytes.
    ///
    /// A missing file yields no lines. `\n` and `\r\n` endings are both
    /// stripped. Lines are not checked for UTF-8 here, so one bad line
    /// cannot hide the others. Any other open or read failure is
    /// `Error::Io`.
    pub fn read_lines(&self) -> Result<Vec<Vec<u8>>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(target: "stockroom::file", path = %self.path.display(), "Product file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = BufReader::new(file);
        let mut lines = Vec::new();
        loop {
            let mut line = Vec::new();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if line.last() == Some(&b'\n') {
                line.pop();
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
            }
            lines.push(line);
        }

        debug!(target: "stockroom::file", path = %self.path.display(), lines = lines.len(), "Product file read");
        Ok(lines)
    }

    /// Path the file is moved to by [`FlatFile::back_up`]
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "products".into());
        name.push(".bak");
        self.parent_dir().join(name)
    }

    /// Rename the file to its backup path, replacing any earlier backup.
    ///
    /// Returns the backup path, or `None` when there is no file to keep.
    pub fn back_up(&self) -> Result<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }
        let backup = self.backup_path();
        std::fs::rename(&self.path, &backup)?;
        info!(target: "stockroom::file", path = %self.path.display(), backup = %backup.display(), "Product file backed up");
        Ok(Some(backup))
    }

    /// Replace the file with `lines`, one per line.
    ///
    /// Returns the number of lines written.
    pub fn write_lines<I, S>(&self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let temp_path = self.temp_path();
        let result = self.write_via_temp(&temp_path, lines);
        if result.is_err() {
            // Best effort: never leave a stale temp file next to the target
            let _ = std::fs::remove_file(&temp_path);
        }
        let count = result?;

        info!(target: "stockroom::file", path = %self.path.display(), lines = count, "Product file saved");
        Ok(count)
    }

    fn write_via_temp<I, S>(&self, temp_path: &Path, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Step 1: Write to temporary file
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(temp_path)?;
        let mut writer = BufWriter::new(file);

        let mut count = 0;
        for line in lines {
            writer.write_all(line.as_ref().as_bytes())?;
            writer.write_all(b"\n")?;
            count += 1;
        }

        // Step 2: fsync the file
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        drop(file);

        // Step 3: Atomic rename
        std::fs::rename(temp_path, &self.path)?;

        // Step 4: fsync parent directory
        #[cfg(unix)]
        {
            let dir = File::open(self.parent_dir())?;
            dir.sync_all()?;
        }

        Ok(count)
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "products".to_string());
        self.parent_dir().join(format!(".{}.tmp", name))
    }
}
