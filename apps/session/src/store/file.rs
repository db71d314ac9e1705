use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::Result;
use crate::store::SessionStore;

/// Keeps each key in `<dir>/<key>.json`.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// reader sees either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) the store directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!("Session store at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_stem}.json"))
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                warn!("Could not remove {}: {cleanup}", tmp.display());
            }
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("store");
        let store = FileStore::open(&dir).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_missing_key_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        assert_eq!(store.get("talentGenius_user").unwrap(), None);
    }

    #[test]
    fn test_value_survives_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        FileStore::open(tmp.path())
            .unwrap()
            .set("talentGenius_user", r#"{"id":"1"}"#)
            .unwrap();

        let reopened = FileStore::open(tmp.path()).unwrap();
        assert_eq!(
            reopened.get("talentGenius_user").unwrap().as_deref(),
            Some(r#"{"id":"1"}"#)
        );
        assert!(tmp.path().join("talentGenius_user.json").is_file());
        assert!(!tmp.path().join("talentGenius_user.json.tmp").exists());
    }

    #[test]
    fn test_failed_rename_leaves_no_temp_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        // A non-empty directory where the value file belongs makes the rename fail.
        let blocker = tmp.path().join("k.json");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "x").unwrap();

        assert!(store.set("k", "v").is_err());
        assert!(!tmp.path().join("k.json.tmp").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_key_cannot_escape_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        store.set("../evil", "v").unwrap();
        assert!(tmp.path().join("___evil.json").is_file());
        assert_eq!(store.get("../evil").unwrap().as_deref(), Some("v"));
    }
}
