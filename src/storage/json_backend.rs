use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::{FinanceError, Result},
    store::{FinanceSnapshot, FinanceStore, CURRENT_SCHEMA_VERSION},
};

use super::{FinanceRepository, Mutation};

const TMP_SUFFIX: &str = "tmp";

/// Keeps the whole finance state in a single pretty-printed JSON file.
///
/// Every write-through rewrites the file by staging to `<file>.tmp` and
/// renaming over the original.
#[derive(Debug, Clone)]
pub struct JsonRepository {
    path: PathBuf,
}

impl JsonRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save_snapshot(&self, snapshot: &FinanceSnapshot) -> Result<()> {
        save_snapshot_to_path(snapshot, &self.path)
    }
}

impl FinanceRepository for JsonRepository {
    fn load(&self) -> Result<Option<FinanceSnapshot>> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no finance data file yet");
            return Ok(None);
        }
        load_snapshot_from_path(&self.path).map(Some)
    }

    fn write_through(&self, mutation: &Mutation, store: &FinanceStore) -> Result<()> {
        tracing::trace!(
            collection = %mutation.collection,
            id = %mutation.id,
            op = %mutation.op,
            "persisting finance snapshot"
        );
        self.save_snapshot(&store.snapshot())
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}

/// Writes `snapshot` to `path` atomically.
pub fn save_snapshot_to_path(snapshot: &FinanceSnapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Reads a snapshot, rejecting schema versions newer than this build
/// understands and collections that repeat an id.
pub fn load_snapshot_from_path(path: &Path) -> Result<FinanceSnapshot> {
    let data = fs::read_to_string(path)?;
    let snapshot: FinanceSnapshot = serde_json::from_str(&data)?;
    if snapshot.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(FinanceError::UnsupportedSchema {
            found: snapshot.schema_version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }
    snapshot.ensure_unique_ids()?;
    Ok(snapshot)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/data/finance.json")),
            PathBuf::from("/data/finance.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("finance")), PathBuf::from("finance.tmp"));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempdir().unwrap();
        let repo = JsonRepository::new(dir.path().join("finance.json"));
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn newer_schema_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("finance.json");
        fs::write(&path, r#"{"schema_version": 99}"#).unwrap();
        let err = load_snapshot_from_path(&path).unwrap_err();
        assert!(matches!(
            err,
            FinanceError::UnsupportedSchema { found: 99, .. }
        ));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let repo = JsonRepository::new(dir.path().join("nested/deeper/finance.json"));
        repo.save_snapshot(&FinanceSnapshot::default()).unwrap();
        assert!(repo.path().exists());
        assert!(!tmp_path(repo.path()).exists());
    }
}
