use super::traits::BookRepository;
use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Address book stored as a pretty-printed JSON array of records.
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    /// Create a repository backed by the file at `path`.
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the book file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Sibling file the book is written to before being renamed into place.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Best-effort removal of a temp file left by a failed save.
    fn remove_temp(temp: &Path) {
        match fs::remove_file(temp) {
            Ok(()) => debug!("Removed {}", temp.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Could not remove {}: {}", temp.display(), e),
        }
    }
}

impl BookRepository for JsonFileBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No address book at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(Self::io_error(&self.path, e)),
        };

        let book: AddressBook = serde_json::from_str(&data)?;
        info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Self::io_error(parent, e))?;
        }

        let json = serde_json::to_string_pretty(book)?;
        let temp = self.temp_path();
        let written = fs::write(&temp, json)
            .map_err(|e| Self::io_error(&temp, e))
            .and_then(|()| {
                debug!("Wrote {}", temp.display());
                fs::rename(&temp, &self.path).map_err(|e| Self::io_error(&self.path, e))
            });
        if let Err(e) = written {
            Self::remove_temp(&temp);
            return Err(e);
        }

        info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
