use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::CollectorConfig;
use crate::schema::ChannelRecord;

/// ============================================================
/// SnapshotStore
/// ============================================================
///
/// Persists the accumulated collection state to disk.
///
/// Responsibilities:
/// - Rewrite `data.json` with every accumulated record
/// - Rewrite `names.json` with the extracted names
/// - Keep both files valid JSON at every point in time
///
/// Design constraints:
/// - Full rewrite per page, no append log and no diffing. The
///   data volume is small and a full snapshot keeps the files
///   trivially consistent after an aborted run.
/// - Writes go through a temp file plus rename in the target
///   directory, so a concurrent reader never observes a
///   truncated file.
///
pub struct SnapshotStore {
    data_path: PathBuf,
    names_path: PathBuf,
}

impl SnapshotStore {
    pub fn new(config: &CollectorConfig) -> Self {
        Self {
            data_path: config.data_path.clone(),
            names_path: config.names_path.clone(),
        }
    }

    /// Overwrites both snapshot files with the current state.
    ///
    /// CONTRACT:
    /// - `records` and `names` must be index-aligned; the caller
    ///   extends both from the same page in the same step.
    /// - Writing the same state twice produces byte-identical
    ///   files (2-space pretty printing, stable field order).
    ///
    /// Filesystem errors are fatal for the run: unlike a failed
    /// fetch, an unwritable snapshot leaves nothing worth
    /// continuing for.
    pub fn write(&self, records: &[ChannelRecord], names: &[String]) -> Result<()> {
        write_atomic(&self.data_path, &serde_json::to_string_pretty(records)?)?;
        write_atomic(&self.names_path, &serde_json::to_string_pretty(names)?)?;
        Ok(())
    }
}

/// Writes `content` to `path` via a `.tmp` sibling and rename.
///
/// The temp file lives in the same directory as the target, so
/// the final rename never crosses a filesystem boundary.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, content)
        .with_context(|| format!("writing snapshot {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("replacing snapshot {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> SnapshotStore {
        let config = CollectorConfig {
            data_path: dir.join("data.json"),
            names_path: dir.join("names.json"),
            ..CollectorConfig::default()
        };
        SnapshotStore::new(&config)
    }

    fn records(raw: &str) -> Vec<ChannelRecord> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn writes_pretty_two_space_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let recs = records(r#"[{"name": "Weather-01", "id": 1}]"#);
        store.write(&recs, &["Weather-01".to_string()]).unwrap();

        let data = fs::read_to_string(dir.path().join("data.json")).unwrap();
        assert_eq!(
            data,
            "[\n  {\n    \"name\": \"Weather-01\",\n    \"id\": 1\n  }\n]"
        );

        let names = fs::read_to_string(dir.path().join("names.json")).unwrap();
        assert_eq!(names, "[\n  \"Weather-01\"\n]");
    }

    #[test]
    fn repeated_writes_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let recs = records(r#"[{"name": "A", "id": 1}, {"name": "B", "id": 2}]"#);
        let names = vec!["A".to_string(), "B".to_string()];

        store.write(&recs, &names).unwrap();
        let first = fs::read(dir.path().join("data.json")).unwrap();

        store.write(&recs, &names).unwrap();
        let second = fs::read(dir.path().join("data.json")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn each_write_fully_replaces_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let big = records(r#"[{"id": 1}, {"id": 2}, {"id": 3}]"#);
        store
            .write(&big, &[String::new(), String::new(), String::new()])
            .unwrap();

        let small = records(r#"[{"id": 9}]"#);
        store.write(&small, &[String::new()]).unwrap();

        let data = fs::read_to_string(dir.path().join("data.json")).unwrap();
        let parsed: Vec<ChannelRecord> = serde_json::from_str(&data).unwrap();
        assert_eq!(parsed, small);
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.write(&[], &[]).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .filter(|n| n.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "stray temp files: {:?}", leftovers);
    }
}
