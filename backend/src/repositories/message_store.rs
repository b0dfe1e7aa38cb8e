use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use chrono::Utc;
#[cfg(test)]
use mockall::automock;

use crate::models::message_models::{ContactMessage, NewContactMessage};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("message store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("message store is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only inbox for contact messages.
#[cfg_attr(test, automock)]
pub trait MessageStore: Send + Sync {
    fn append(&self, new_message: NewContactMessage) -> Result<ContactMessage, StoreError>;
    fn list(&self) -> Result<Vec<ContactMessage>, StoreError>;
}

/// Keeps every message in one pretty-printed JSON array and rewrites the
/// whole file on each append.
///
/// Appends are serialized through `write_lock`, so requests inside one
/// process never lose each other's writes. Two processes sharing the same
/// file still race (last writer wins); there is no file locking.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens the store, creating an empty array file if nothing is there yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, "[]")?;
            tracing::info!("Created empty message store at {}", path.display());
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<ContactMessage>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&data)?)
    }
}

impl MessageStore for JsonFileStore {
    fn append(&self, new_message: NewContactMessage) -> Result<ContactMessage, StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut messages = self.read_all()?;
        let now = Utc::now();
        let message = ContactMessage {
            id: next_id(&messages, now.timestamp_millis()),
            name: new_message.name,
            email: new_message.email,
            message: new_message.message,
            timestamp: now,
        };
        messages.push(message.clone());

        fs::write(&self.path, serde_json::to_string_pretty(&messages)?)?;
        Ok(message)
    }

    fn list(&self) -> Result<Vec<ContactMessage>, StoreError> {
        self.read_all()
    }
}

// millisecond clock, bumped past the largest id already stored
fn next_id(existing: &[ContactMessage], now_millis: i64) -> u64 {
    let now = now_millis.max(0) as u64;
    match existing.iter().map(|m| m.id).max() {
        Some(last) if last >= now => last + 1,
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn submission(name: &str) -> NewContactMessage {
        NewContactMessage {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            message: "hi".to_string(),
        }
    }

    #[test]
    fn open_creates_empty_array_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("messages.json");
        let store = JsonFileStore::open(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn open_keeps_existing_messages() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.json");
        fs::write(
            &path,
            r#"[{"id": 7, "name": "Ada", "email": "ada@example.com", "message": "hello", "timestamp": "2024-05-01T10:00:00Z"}]"#,
        )
        .unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        let messages = store.list().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, 7);
        assert_eq!(messages[0].name, "Ada");
    }

    #[test]
    fn append_assigns_unique_increasing_ids() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("messages.json")).unwrap();

        let ids: Vec<u64> = ["A", "B", "C", "D"]
            .iter()
            .map(|name| store.append(submission(name)).unwrap().id)
            .collect();

        assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {:?}", ids);
        assert_eq!(store.list().unwrap().len(), 4);
    }

    #[test]
    fn append_persists_pretty_json_with_iso_timestamp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.json");
        let store = JsonFileStore::open(&path).unwrap();
        store.append(submission("Grace")).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let stamp = value[0]["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
        assert_eq!(value[0]["name"], "Grace");
        assert!(value[0]["id"].is_u64());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.json");
        fs::write(&path, "{not json").unwrap();
        let store = JsonFileStore::open(&path).unwrap();

        assert!(matches!(store.list(), Err(StoreError::Json(_))));
        assert!(matches!(store.append(submission("A")), Err(StoreError::Json(_))));
    }

    #[test]
    fn concurrent_appends_in_one_process_are_all_kept() {
        let dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(JsonFileStore::open(dir.path().join("m.json")).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || store.append(submission(&format!("N{}", i))).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<u64> = store.list().unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 8);
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn next_id_moves_past_clock_collisions() {
        assert_eq!(next_id(&[], 1_000), 1_000);

        let existing = vec![ContactMessage {
            id: 1_000,
            name: "A".into(),
            email: "a@example.com".into(),
            message: "x".into(),
            timestamp: Utc::now(),
        }];
        assert_eq!(next_id(&existing, 1_000), 1_001);
        assert_eq!(next_id(&existing, 900), 1_001);
        assert_eq!(next_id(&existing, 5_000), 5_000);
    }
}
