//! In-Memory Login Store

use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::import::read_logins;
use super::models::LoginRecord;
use super::{LoginStore, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryLoginStore {
    logins: RwLock<Vec<LoginRecord>>,
}

impl MemoryLoginStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logins(logins: Vec<LoginRecord>) -> Self {
        Self {
            logins: RwLock::new(logins),
        }
    }

    /// Load a store from a JSON export
    pub fn from_json_file(path: &Path) -> StoreResult<Self> {
        Ok(Self::with_logins(read_logins(path)?))
    }

    pub async fn add(&self, login: LoginRecord) {
        self.logins.write().await.push(login);
    }

    pub async fn len(&self) -> usize {
        self.logins.read().await.len()
    }
}

#[async_trait]
impl LoginStore for MemoryLoginStore {
    async fn get_all_logins(&self) -> StoreResult<Vec<LoginRecord>> {
        Ok(self.logins.read().await.clone())
    }

    async fn search_logins(&self, query: &str) -> StoreResult<Vec<LoginRecord>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.get_all_logins().await;
        }

        let logins = self.logins.read().await;
        Ok(logins.iter().filter(|l| l.matches(&needle)).cloned().collect())
    }
}
