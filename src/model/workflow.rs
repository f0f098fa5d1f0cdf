// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::collection::Entity;
use super::ids::{LayoutItemId, WidgetId, WorkflowId};
use super::project::generate_numbered_name;

/// User-editable workflow settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSettings {
    name: String,
}

impl WorkflowSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// Grid placement of a widget on a workflow, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// One widget slot on a workflow's layout.
///
/// `widget_id` is the reference the clone remap rewrites; every id placed
/// here must resolve in the widgets collection of the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetLayoutItem {
    id: LayoutItemId,
    widget_id: WidgetId,
    rect: LayoutRect,
}

impl WidgetLayoutItem {
    pub fn new(id: LayoutItemId, widget_id: WidgetId, rect: LayoutRect) -> Self {
        Self {
            id,
            widget_id,
            rect,
        }
    }

    pub fn id(&self) -> &LayoutItemId {
        &self.id
    }

    pub fn widget_id(&self) -> &WidgetId {
        &self.widget_id
    }

    pub fn rect(&self) -> LayoutRect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: LayoutRect) {
        self.rect = rect;
    }
}

/// A tab-like surface laying out widgets inside a project.
///
/// Ownership lives on the owning project's `workflow_ids` list; the workflow
/// itself stores no back-reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    id: WorkflowId,
    settings: WorkflowSettings,
    layout: Vec<WidgetLayoutItem>,
}

impl Workflow {
    pub fn new(id: WorkflowId, settings: WorkflowSettings) -> Self {
        Self {
            id,
            settings,
            layout: Vec::new(),
        }
    }

    pub fn id(&self) -> &WorkflowId {
        &self.id
    }

    pub fn settings(&self) -> &WorkflowSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: WorkflowSettings) {
        self.settings = settings;
    }

    pub fn layout(&self) -> &[WidgetLayoutItem] {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut Vec<WidgetLayoutItem> {
        &mut self.layout
    }

    pub fn set_layout(&mut self, layout: Vec<WidgetLayoutItem>) {
        self.layout = layout;
    }
}

impl Entity for Workflow {
    type Id = WorkflowId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// First "Workflow N" not present among `used_names`.
pub fn generate_workflow_name<S: AsRef<str>>(used_names: &[S]) -> String {
    generate_numbered_name("Workflow", used_names)
}
