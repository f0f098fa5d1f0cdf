// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Crate-private test fixtures.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::ids::{IdGenerator, LayoutItemId, ProjectId, WidgetId, WorkflowId};
use super::project::{Project, ProjectSettings};
use super::widget::{NoteSettings, Widget, WidgetCoreSettings, WidgetSettings};
use super::workflow::{LayoutRect, WidgetLayoutItem, Workflow, WorkflowSettings};
use crate::shell::WorkflowResources;
use crate::state::AppState;

pub(crate) fn prj_id(value: &str) -> ProjectId {
    ProjectId::new(value).expect("project id")
}

pub(crate) fn wfl_id(value: &str) -> WorkflowId {
    WorkflowId::new(value).expect("workflow id")
}

pub(crate) fn wgt_id(value: &str) -> WidgetId {
    WidgetId::new(value).expect("widget id")
}

pub(crate) fn fixture_project(id: &str) -> Project {
    Project::new(prj_id(id), ProjectSettings::new(id))
}

pub(crate) fn fixture_workflow(id: &str, name: &str) -> Workflow {
    Workflow::new(wfl_id(id), WorkflowSettings::new(name))
}

pub(crate) fn fixture_widget(id: &str) -> Widget {
    Widget::new(
        wgt_id(id),
        WidgetCoreSettings::new(id),
        WidgetSettings::Note(NoteSettings::default()),
    )
}

pub(crate) fn fixture_layout_item(item_id: &str, widget_id: &str) -> WidgetLayoutItem {
    WidgetLayoutItem::new(
        LayoutItemId::new(item_id).expect("layout item id"),
        wgt_id(widget_id),
        LayoutRect {
            x: 0,
            y: 0,
            w: 2,
            h: 2,
        },
    )
}

pub(crate) fn fixture_app_state() -> AppState {
    AppState::default()
}

/// Deterministic id source: `PREFIX-1`, `PREFIX-2`, ...
pub(crate) struct SeqIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SeqIdGenerator {
    pub(crate) fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            counter: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SeqIdGenerator {
    fn next_value(&self) -> String {
        let index = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{index}", self.prefix)
    }
}

/// Records every unload so tests can assert the side-effect order.
#[derive(Default)]
pub(crate) struct RecordingWorkflowResources {
    unloaded: Mutex<Vec<(ProjectId, WorkflowId)>>,
}

impl RecordingWorkflowResources {
    pub(crate) fn unloaded(&self) -> Vec<(ProjectId, WorkflowId)> {
        self.unloaded.lock().expect("unloaded lock").clone()
    }
}

#[async_trait]
impl WorkflowResources for RecordingWorkflowResources {
    async fn unload_workflow(&self, prj_id: &ProjectId, wfl_id: &WorkflowId) {
        self.unloaded
            .lock()
            .expect("unloaded lock")
            .push((prj_id.clone(), wfl_id.clone()));
    }
}
