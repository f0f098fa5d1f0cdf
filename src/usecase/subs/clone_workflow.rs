// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deep workflow cloning.
//!
//! Every widget referenced by the source layout is copied under a fresh id
//! and the layout references are remapped. Stored widget data is copied
//! through the storage port; a failed copy logs and the clone keeps the
//! widget with empty data (the commit never aborts half-way). Layout items
//! whose widget no longer resolves are dropped.

use crate::model::ids::generated_id;
use crate::model::{IdGenerator, Widget, WidgetLayoutItem, Workflow};
use crate::state::Entities;
use crate::storage::WidgetDataStorageManager;

/// Clones `workflow` and its widgets; returns the clone and the new widgets.
///
/// Suspends on the per-widget storage copy; the caller awaits completion
/// before touching the snapshot again.
pub async fn clone_workflow(
    workflow: &Workflow,
    entities: &Entities,
    ids: &dyn IdGenerator,
    storage: &dyn WidgetDataStorageManager,
) -> (Workflow, Vec<Widget>) {
    let mut clone = Workflow::new(generated_id(ids), workflow.settings().clone());
    let mut new_widgets = Vec::new();
    let mut new_layout = Vec::new();

    for item in workflow.layout() {
        let Some(widget) = entities.widgets().get_one(item.widget_id()) else {
            continue;
        };

        let new_widget = widget.duplicate_as(generated_id(ids));
        if let Err(err) = storage
            .copy_widget_data(widget.id(), new_widget.id())
            .await
        {
            log::error!(
                "copying widget data from {} to {} failed, keeping the clone empty: {err}",
                widget.id(),
                new_widget.id()
            );
        }

        new_layout.push(WidgetLayoutItem::new(
            generated_id(ids),
            new_widget.id().clone(),
            item.rect(),
        ));
        new_widgets.push(new_widget);
    }

    clone.set_layout(new_layout);
    (clone, new_widgets)
}
