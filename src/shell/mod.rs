// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Host-shell ports.
//!
//! The windowing host implements these; the core and the widget glue only
//! call them. Action-bar and context-menu registration happens once a
//! widget's content has finished loading.

use std::sync::Arc;

use async_trait::async_trait;

use crate::model::{ProjectId, WorkflowId};

/// One button on a widget's action bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBarItem {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub enabled: bool,
}

/// One entry of a widget's context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuItem {
    pub id: String,
    pub title: String,
    pub enabled: bool,
}

/// Builds the context menu for the context id under the pointer.
pub type ContextMenuFactory = Arc<dyn Fn(&str) -> Vec<ContextMenuItem> + Send + Sync>;

/// Per-widget registration surface offered by the host shell.
pub trait WidgetShellApi: Send + Sync {
    fn update_action_bar(&self, items: Vec<ActionBarItem>);

    fn set_context_menu_factory(&self, factory: ContextMenuFactory);
}

/// Releases the host-side resources of a workflow's widgets.
///
/// Called for every workflow MemSaver evicts or deactivates, before the
/// deactivated snapshot is committed, so observers never see a deactivated
/// workflow whose resources are still loaded.
#[async_trait]
pub trait WorkflowResources: Send + Sync {
    async fn unload_workflow(&self, prj_id: &ProjectId, wfl_id: &WorkflowId);
}

/// No-op resource controller for hosts that keep everything loaded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopWorkflowResources;

#[async_trait]
impl WorkflowResources for NoopWorkflowResources {
    async fn unload_workflow(&self, _prj_id: &ProjectId, _wfl_id: &WorkflowId) {}
}
