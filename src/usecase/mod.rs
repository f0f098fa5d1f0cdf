// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! User-facing operations over the app store.
//!
//! Every use case follows the same discipline: read the snapshot once,
//! build the next state through sub-cases on a local clone, await external
//! side effects (storage copies, resource unloads), then write once. A use
//! case whose target does not resolve returns without writing, so the store
//! still holds the identical snapshot. Callers serialize invocations; there
//! is no internal queueing.

pub mod application_settings;
pub mod mem_saver;
pub mod project_manager;
pub mod project_switcher;
pub mod subs;
pub mod workflow_settings;
pub mod workflow_switcher;

pub use application_settings::ApplicationSettingsUseCases;
pub use mem_saver::DeactivateWorkflowUseCase;
pub use project_manager::ProjectManagerUseCases;
pub use project_switcher::SwitchProjectUseCase;
pub use workflow_settings::WorkflowSettingsUseCases;
pub use workflow_switcher::SwitchWorkflowUseCase;

use crate::model::WidgetId;
use crate::state::AppStore;

/// Marks a widget's content as loaded once its body finishes loading.
///
/// The widget then registers its action bar and context menu through the
/// shell port.
pub fn mark_widget_content_loaded(store: &AppStore, widget_id: &WidgetId) {
    let snapshot = store.get();
    if !snapshot.entities().widgets().contains(widget_id) {
        return;
    }
    if snapshot
        .ui()
        .widget_ui()
        .get(widget_id)
        .is_some_and(|ui| ui.content_loaded())
    {
        return;
    }

    let mut state = (*snapshot).clone();
    state.ui_mut().mark_widget_content_loaded(widget_id);
    store.set(state);
}
