use crate::errors::AppError;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::{collections::BTreeMap, fmt, path::Path};
use tokio::fs;
use tracing::{error, warn};

#[derive(Debug)]
pub struct StorageError(serde_json::Error);

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to encode stored value: {}", self.0)
    }
}

impl std::error::Error for StorageError {}

/// String-keyed JSON slots. Reads never fail: absent or mismatched values
/// fall back to the caller's default.
pub trait KeyValueStore {
    fn get_value(&self, key: &str) -> Option<&Value>;

    fn set_value(&mut self, key: &str, value: Value);

    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(value) = self.get_value(key) else {
            return default;
        };
        match serde_json::from_value::<T>(value.clone()) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("ignoring malformed value under {key}: {err}");
                default
            }
        }
    }

    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let encoded = serde_json::to_value(value).map_err(StorageError)?;
        self.set_value(key, encoded);
        Ok(())
    }
}

/// In-memory slots; serialized as a single JSON object on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct KvData {
    slots: BTreeMap<String, Value>,
}

impl KeyValueStore for KvData {
    fn get_value(&self, key: &str) -> Option<&Value> {
        self.slots.get(key)
    }

    fn set_value(&mut self, key: &str, value: Value) {
        self.slots.insert(key.to_string(), value);
    }
}

pub async fn load_data(path: &Path) -> KvData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                KvData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => KvData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            KvData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &KvData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_yields_default() {
        let data = KvData::default();
        let value: Vec<String> = data.get_or("missing", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn mismatched_shape_yields_default() {
        let mut data = KvData::default();
        data.set_value("count", Value::String("not a number".into()));
        assert_eq!(data.get_or("count", 7u32), 7);
    }

    #[test]
    fn set_then_get_typed() {
        let mut data = KvData::default();
        data.set("names", &vec!["a", "b"]).unwrap();
        let names: Vec<String> = data.get_or("names", Vec::new());
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn missing_file_loads_empty_and_persist_round_trips() {
        let mut path = std::env::temp_dir();
        path.push(format!("daily_ritual_storage_{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        assert_eq!(load_data(&path).await, KvData::default());

        let mut data = KvData::default();
        data.set("theme", &"dark").unwrap();
        persist_data(&path, &data).await.unwrap();
        assert_eq!(load_data(&path).await, data);

        let _ = std::fs::remove_file(&path);
    }
}
