use std::path::{Path, PathBuf};

use eyre::Result;

/// How a generated file should reach its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Create parent directories and write the file.
    #[default]
    Persist,
    /// Leave the disk untouched; the caller surfaces the content instead.
    DryRun,
}

impl WriteMode {
    /// Pick the mode from a `--dry-run` style flag.
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::DryRun } else { Self::Persist }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRun)
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written to disk
    Written,
    /// File was only previewed (dry run)
    Previewed,
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to `mode`.
    ///
    /// I/O failures are returned as-is; nothing is retried.
    pub fn write(&self, mode: WriteMode) -> Result<WriteResult> {
        match mode {
            WriteMode::DryRun => {
                tracing::info!("[dry-run] Generate {}", self.path.display());
                Ok(WriteResult::Previewed)
            }
            WriteMode::Persist => {
                tracing::info!("Generate {}", self.path.display());
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models").join("user").join("user.ts");

        write_file(&path, "export class User {}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "export class User {}");
    }

    #[test]
    fn test_persist_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("post.ts");
        fs::write(&path, "stale").unwrap();

        let result = File::new(&path, "fresh").write(WriteMode::Persist).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_dry_run_leaves_disk_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("post.ts");

        let file = File::new(&path, "export class Post {}");
        let result = file.write(WriteMode::DryRun).unwrap();

        assert_eq!(result, WriteResult::Previewed);
        assert!(!file.exists());
        assert!(!temp.path().join("nested").exists());
    }

    #[test]
    fn test_write_error_propagates() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let file = File::new(blocker.join("user.ts"), "content");
        let err = file.write(WriteMode::Persist).unwrap_err();

        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_write_mode_from_flag() {
        assert_eq!(WriteMode::from_dry_run(true), WriteMode::DryRun);
        assert_eq!(WriteMode::from_dry_run(false), WriteMode::Persist);
        assert!(WriteMode::DryRun.is_dry_run());
    }
}
