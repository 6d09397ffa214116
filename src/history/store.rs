use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

use super::types::UserRecord;

/// Repository boundary for per-user histories: load by key, save by key.
///
/// The grading core never touches storage directly; swapping the JSON file
/// store for something else only means another impl of this trait.
pub trait HistoryStore {
    fn load(&self, user: &str) -> Result<Option<UserRecord>>;
    fn save(&self, user: &str, record: &UserRecord) -> Result<()>;
}

/// Perform one read-modify-write cycle against the store.
///
/// This is the transactional unit for every mutation: a single load,
/// the closure's changes, and one atomic save. Fails if the user has no
/// profile yet.
pub fn update<S, F>(store: &S, user: &str, mutate: F) -> Result<UserRecord>
where
    S: HistoryStore + ?Sized,
    F: FnOnce(&mut UserRecord),
{
    let mut record = store
        .load(user)?
        .with_context(|| format!("No profile for '{}'. Run `fittrack init` first", user))?;
    mutate(&mut record);
    store.save(user, &record)?;
    Ok(record)
}

/// File-backed store: one pretty-printed JSON document per user under a
/// data directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of one user's document. Usernames are sanitized so they can't
    /// escape the data directory or produce invalid filenames.
    pub fn user_path(&self, user: &str) -> PathBuf {
        let safe: String = user
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).with_context(|| {
                format!("Failed to create data directory at {}", self.dir.display())
            })?;
        }
        Ok(())
    }

    fn read_record(path: &Path) -> Result<UserRecord> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open user data at {}", path.display()))?;
        let record: UserRecord =
            serde_json::from_reader(file).context("Failed to parse user data")?;

        if record.version != 1 {
            anyhow::bail!("Unsupported user data version: {}", record.version);
        }
        Ok(record)
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self, user: &str) -> Result<Option<UserRecord>> {
        let path = self.user_path(user);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(Self::read_record(&path)?))
    }

    /// Replaces the user's full history atomically, so an interrupted write
    /// never leaves a truncated document behind.
    fn save(&self, user: &str, record: &UserRecord) -> Result<()> {
        self.ensure_dir()?;
        let path = self.user_path(user);

        let mut file = AtomicWriteFile::open(&path)
            .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
        serde_json::to_writer_pretty(&mut file, record).context("Failed to serialize user data")?;
        file.commit().context("Failed to save user data")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::napfa::Gender;
    use std::env;

    fn temp_store(name: &str) -> JsonFileStore {
        let dir = env::temp_dir().join(format!("fittrack_test_{}", name));
        let _ = std::fs::remove_dir_all(&dir);
        JsonFileStore::new(dir)
    }

    #[test]
    fn test_load_missing_user_returns_none() {
        let store = temp_store("missing");
        assert!(store.load("nobody").unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = temp_store("roundtrip");
        let record = UserRecord::new("alex".to_string(), 14, Gender::Male);

        store.save("alex", &record).unwrap();
        let loaded = store.load("alex").unwrap().unwrap();

        assert_eq!(loaded, record);

        let _ = std::fs::remove_dir_all(store.dir);
    }

    #[test]
    fn test_update_mutates_and_persists() {
        let store = temp_store("update");
        store
            .save("alex", &UserRecord::new("alex".to_string(), 14, Gender::Male))
            .unwrap();

        let updated = update(&store, "alex", |record| {
            record.age = 15;
        })
        .unwrap();
        assert_eq!(updated.age, 15);

        let reloaded = store.load("alex").unwrap().unwrap();
        assert_eq!(reloaded.age, 15);

        let _ = std::fs::remove_dir_all(store.dir);
    }

    #[test]
    fn test_update_without_profile_fails() {
        let store = temp_store("noprofile");
        let result = update(&store, "ghost", |_| {});
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No profile"));
    }

    #[test]
    fn test_user_path_sanitizes_name() {
        let store = temp_store("sanitize");
        let path = store.user_path("../evil/user");
        let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(file_name, "___evil_user.json");
        assert_eq!(path.parent().unwrap(), store.dir);
    }
}
