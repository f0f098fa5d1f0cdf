// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Note widget persistence.
//!
//! Rapid edits are coalesced: the latest text wins and is written once the
//! editor has been idle for [`NOTE_SAVE_DEBOUNCE`]. Registration of the
//! action bar and the context-menu factory happens after the stored note has
//! been loaded.

use std::sync::Arc;
use std::time::Duration;

use crate::shell::{ActionBarItem, ContextMenuItem, WidgetShellApi};
use crate::storage::{DebouncedTextWriter, WidgetDataStorage};

pub const NOTE_DATA_KEY: &str = "note";
pub const NOTE_SAVE_DEBOUNCE: Duration = Duration::from_millis(3000);
pub const NOTE_CONTEXT_ID: &str = "note-editor";

/// Storage/shell glue for one note widget instance.
pub struct NoteController {
    storage: Arc<dyn WidgetDataStorage>,
    shell: Arc<dyn WidgetShellApi>,
    writer: DebouncedTextWriter,
}

impl NoteController {
    /// Requires a running tokio runtime (spawns the debounced writer).
    pub fn new(storage: Arc<dyn WidgetDataStorage>, shell: Arc<dyn WidgetShellApi>) -> Self {
        let writer = DebouncedTextWriter::new(storage.clone(), NOTE_DATA_KEY, NOTE_SAVE_DEBOUNCE);
        Self {
            storage,
            shell,
            writer,
        }
    }

    /// Loads the stored note and registers the widget's shell surfaces.
    ///
    /// A failed read logs and degrades to an empty note.
    pub async fn load(&self) -> String {
        let note = match self.storage.get_text(NOTE_DATA_KEY).await {
            Ok(text) => text.unwrap_or_default(),
            Err(err) => {
                log::error!("loading note failed: {err}");
                String::new()
            }
        };

        self.shell.update_action_bar(action_bar_items());
        self.shell
            .set_context_menu_factory(Arc::new(context_menu_for));

        note
    }

    /// Schedules a debounced save of the edited text.
    pub fn note_changed(&self, text: impl Into<String>) {
        self.writer.push(text);
    }

    /// Writes any pending edit immediately.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }
}

fn action_bar_items() -> Vec<ActionBarItem> {
    vec![
        ActionBarItem {
            id: "copy-note".to_owned(),
            icon: "copy".to_owned(),
            title: "Copy Note".to_owned(),
            enabled: true,
        },
        ActionBarItem {
            id: "clear-note".to_owned(),
            icon: "trash".to_owned(),
            title: "Clear Note".to_owned(),
            enabled: true,
        },
    ]
}

fn context_menu_for(context_id: &str) -> Vec<ContextMenuItem> {
    if context_id != NOTE_CONTEXT_ID {
        return Vec::new();
    }
    vec![
        ContextMenuItem {
            id: "cut".to_owned(),
            title: "Cut".to_owned(),
            enabled: true,
        },
        ContextMenuItem {
            id: "copy".to_owned(),
            title: "Copy".to_owned(),
            enabled: true,
        },
        ContextMenuItem {
            id: "paste".to_owned(),
            title: "Paste".to_owned(),
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::{NoteController, NOTE_CONTEXT_ID, NOTE_DATA_KEY, NOTE_SAVE_DEBOUNCE};
    use crate::shell::{ActionBarItem, ContextMenuFactory, WidgetShellApi};
    use crate::storage::memory::InMemoryWidgetDataStorage;
    use crate::storage::WidgetDataStorage;

    #[derive(Default)]
    struct RecordingShell {
        action_bars: Mutex<Vec<Vec<ActionBarItem>>>,
        factory: Mutex<Option<ContextMenuFactory>>,
    }

    impl WidgetShellApi for RecordingShell {
        fn update_action_bar(&self, items: Vec<ActionBarItem>) {
            self.action_bars
                .lock()
                .expect("action bar lock")
                .push(items);
        }

        fn set_context_menu_factory(&self, factory: ContextMenuFactory) {
            *self.factory.lock().expect("factory lock") = Some(factory);
        }
    }

    #[tokio::test]
    async fn load_returns_stored_note_and_registers_shell_surfaces() {
        let storage = Arc::new(InMemoryWidgetDataStorage::new());
        storage
            .set_text(NOTE_DATA_KEY, "remember")
            .await
            .expect("seed note");
        let shell = Arc::new(RecordingShell::default());
        let controller = NoteController::new(storage, shell.clone());

        let note = controller.load().await;

        assert_eq!(note, "remember");
        assert_eq!(shell.action_bars.lock().expect("action bar lock").len(), 1);

        let factory = shell
            .factory
            .lock()
            .expect("factory lock")
            .clone()
            .expect("factory registered");
        assert!(!(*factory)(NOTE_CONTEXT_ID).is_empty());
        assert!((*factory)("somewhere-else").is_empty());
    }

    #[tokio::test]
    async fn load_degrades_to_empty_note_when_nothing_is_stored() {
        let storage = Arc::new(InMemoryWidgetDataStorage::new());
        let shell = Arc::new(RecordingShell::default());
        let controller = NoteController::new(storage, shell);

        assert_eq!(controller.load().await, "");
    }

    #[tokio::test(start_paused = true)]
    async fn edits_are_saved_after_the_debounce_interval() {
        let storage = Arc::new(InMemoryWidgetDataStorage::new());
        let shell = Arc::new(RecordingShell::default());
        let controller = NoteController::new(storage.clone(), shell);

        controller.note_changed("first");
        controller.note_changed("second");
        tokio::time::sleep(NOTE_SAVE_DEBOUNCE + Duration::from_millis(10)).await;

        assert_eq!(
            storage
                .get_text(NOTE_DATA_KEY)
                .await
                .expect("get note")
                .as_deref(),
            Some("second")
        );
    }
}
