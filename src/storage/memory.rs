// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-memory widget data storage.
//!
//! Backs tests and hosts that run without a persistence backend. Values are
//! stored as text; JSON goes through serde_json.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::model::WidgetId;

use super::{StorageError, WidgetDataStorage, WidgetDataStorageManager};

#[derive(Debug, Default)]
pub struct InMemoryWidgetDataStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl InMemoryWidgetDataStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.lock().await.clone()
    }

    async fn replace(&self, entries: BTreeMap<String, String>) {
        let mut guard = self.entries.lock().await;
        for (key, value) in entries {
            guard.insert(key, value);
        }
    }
}

#[async_trait]
impl WidgetDataStorage for InMemoryWidgetDataStorage {
    async fn get_text(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set_text(&self, key: &str, text: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .await
            .insert(key.to_owned(), text.to_owned());
        Ok(())
    }

    async fn get_json(&self, key: &str) -> Result<Option<Value>, StorageError> {
        match self.entries.lock().await.get(key) {
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|err| StorageError::Serialization {
                    message: err.to_string(),
                }),
            None => Ok(None),
        }
    }

    async fn set_json(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|err| StorageError::Serialization {
            message: err.to_string(),
        })?;
        self.entries.lock().await.insert(key.to_owned(), raw);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.entries.lock().await.clear();
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.entries.lock().await.keys().cloned().collect())
    }
}

/// Per-widget in-memory storages, created on first access.
#[derive(Debug, Default)]
pub struct InMemoryWidgetDataStorageManager {
    stores: std::sync::Mutex<BTreeMap<WidgetId, Arc<InMemoryWidgetDataStorage>>>,
}

impl InMemoryWidgetDataStorageManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self, widget_id: &WidgetId) -> Arc<InMemoryWidgetDataStorage> {
        self.stores
            .lock()
            .expect("widget storage registry lock poisoned")
            .entry(widget_id.clone())
            .or_default()
            .clone()
    }
}

#[async_trait]
impl WidgetDataStorageManager for InMemoryWidgetDataStorageManager {
    fn widget_storage(&self, widget_id: &WidgetId) -> Arc<dyn WidgetDataStorage> {
        self.storage(widget_id)
    }

    async fn copy_widget_data(&self, from: &WidgetId, to: &WidgetId) -> Result<(), StorageError> {
        let source = self.storage(from);
        let target = self.storage(to);
        let entries = source.snapshot().await;
        target.replace(entries).await;
        Ok(())
    }

    async fn delete_widget_data(&self, widget_id: &WidgetId) -> Result<(), StorageError> {
        let removed = self
            .stores
            .lock()
            .expect("widget storage registry lock poisoned")
            .remove(widget_id);
        if let Some(storage) = removed {
            storage.clear().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryWidgetDataStorageManager;
    use crate::model::WidgetId;
    use crate::storage::WidgetDataStorageManager;

    fn wgt(value: &str) -> WidgetId {
        WidgetId::new(value).expect("widget id")
    }

    #[tokio::test]
    async fn copy_widget_data_copies_every_key() {
        let manager = InMemoryWidgetDataStorageManager::new();
        let source = manager.widget_storage(&wgt("a"));
        source.set_text("note", "hello").await.expect("set note");
        source.set_text("extra", "data").await.expect("set extra");

        manager
            .copy_widget_data(&wgt("a"), &wgt("b"))
            .await
            .expect("copy");

        let target = manager.widget_storage(&wgt("b"));
        assert_eq!(
            target.get_text("note").await.expect("get note").as_deref(),
            Some("hello")
        );
        assert_eq!(
            target.get_text("extra").await.expect("get extra").as_deref(),
            Some("data")
        );
    }

    #[tokio::test]
    async fn delete_widget_data_clears_the_widget_storage() {
        let manager = InMemoryWidgetDataStorageManager::new();
        let storage = manager.widget_storage(&wgt("a"));
        storage.set_text("note", "hello").await.expect("set note");

        manager.delete_widget_data(&wgt("a")).await.expect("delete");

        let storage = manager.widget_storage(&wgt("a"));
        assert_eq!(storage.get_text("note").await.expect("get note"), None);
    }

    #[tokio::test]
    async fn json_round_trips_through_text_entries() {
        let manager = InMemoryWidgetDataStorageManager::new();
        let storage = manager.widget_storage(&wgt("a"));
        let value = serde_json::json!({ "a": 1, "b": ["x"] });

        storage.set_json("state", &value).await.expect("set json");
        assert_eq!(
            storage.get_json("state").await.expect("get json"),
            Some(value)
        );
    }
}
