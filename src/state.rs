use crate::panels::PanelRegistry;
use crate::storage::KvData;
use crate::store::RecordStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<RecordStore<KvData>>>,
    pub panels: Arc<Mutex<PanelRegistry>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: KvData) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(RecordStore::new(data))),
            panels: Arc::new(Mutex::new(PanelRegistry::default())),
        }
    }
}
