// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Widget data storage ports.
//!
//! The persistence backend is an external collaborator; the core only
//! depends on these traits. Widget cloning copies a widget's stored data to
//! the clone's key space through [`WidgetDataStorageManager`].

pub mod debounce;
pub mod memory;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::model::WidgetId;

pub use debounce::DebouncedTextWriter;
pub use memory::{InMemoryWidgetDataStorage, InMemoryWidgetDataStorageManager};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Backend { message: String },
    Serialization { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend { message } => write!(f, "storage backend error: {message}"),
            Self::Serialization { message } => {
                write!(f, "storage serialization error: {message}")
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Key/value data storage scoped to one widget.
#[async_trait]
pub trait WidgetDataStorage: Send + Sync {
    async fn get_text(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set_text(&self, key: &str, text: &str) -> Result<(), StorageError>;

    async fn get_json(&self, key: &str) -> Result<Option<Value>, StorageError>;

    async fn set_json(&self, key: &str, value: &Value) -> Result<(), StorageError>;

    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    async fn clear(&self) -> Result<(), StorageError>;

    async fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// Hands out per-widget storages and moves whole widget key spaces.
#[async_trait]
pub trait WidgetDataStorageManager: Send + Sync {
    fn widget_storage(&self, widget_id: &WidgetId) -> Arc<dyn WidgetDataStorage>;

    /// Copies every key of `from`'s storage into `to`'s, overwriting.
    async fn copy_widget_data(&self, from: &WidgetId, to: &WidgetId) -> Result<(), StorageError>;

    async fn delete_widget_data(&self, widget_id: &WidgetId) -> Result<(), StorageError>;
}
