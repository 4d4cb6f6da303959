//! File-system access used by the scaffolder
//!
//! Only reads and existence checks happen outside [`crate::scaffold::Materializer`]
//! and the stub publishing command; every write goes through [`Filesystem`].

use std::fs;
use std::io;
use std::path::Path;

/// File-system primitives
pub trait Filesystem {
    /// Whether a file or directory exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory; an existing directory is not an error
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn create_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Read a UTF-8 file
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write `contents` to `path`, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real file system
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        match fs::create_dir(path) {
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            other => other,
        }
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_dir_is_idempotent() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("widgets");
        let mut fs = LocalFilesystem;

        fs.create_dir(&path).unwrap();
        fs.create_dir(&path).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn test_create_dir_over_file_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("widgets");
        std::fs::write(&path, "not a directory").unwrap();

        let mut fs = LocalFilesystem;
        assert!(fs.create_dir(&path).is_err());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("InfoCard.vue");
        let mut fs = LocalFilesystem;

        fs.write(&path, "<template></template>").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "<template></template>");

        fs.write(&path, "replaced").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "replaced");
    }
}
