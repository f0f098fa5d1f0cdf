// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The single immutable application snapshot.
//!
//! Use cases clone the current snapshot, mutate the clone through the
//! accessors below, and publish it with one `AppStore::set`. Entity payloads
//! are shared between snapshots (see `model::collection`), so the clone is
//! cheap.

use std::collections::BTreeMap;

use crate::model::{EntityCollection, Project, ProjectId, Widget, WidgetId, Workflow};
use crate::state::app_config::AppConfig;
use crate::state::mem_saver::MemSaverState;
use crate::state::modal_screens::ModalScreensState;

/// All entity slices of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entities {
    projects: EntityCollection<Project>,
    workflows: EntityCollection<Workflow>,
    widgets: EntityCollection<Widget>,
}

impl Entities {
    pub fn projects(&self) -> &EntityCollection<Project> {
        &self.projects
    }

    pub fn projects_mut(&mut self) -> &mut EntityCollection<Project> {
        &mut self.projects
    }

    pub fn workflows(&self) -> &EntityCollection<Workflow> {
        &self.workflows
    }

    pub fn workflows_mut(&mut self) -> &mut EntityCollection<Workflow> {
        &mut self.workflows
    }

    pub fn widgets(&self) -> &EntityCollection<Widget> {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut EntityCollection<Widget> {
        &mut self.widgets
    }
}

/// Ordered project list of the switcher plus the current selection.
///
/// `current_project_id` must index into `project_ids`; use cases reconcile
/// it (first id, or none) before committing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectSwitcherState {
    project_ids: Vec<ProjectId>,
    current_project_id: Option<ProjectId>,
}

impl ProjectSwitcherState {
    pub fn project_ids(&self) -> &[ProjectId] {
        &self.project_ids
    }

    pub fn set_project_ids(&mut self, project_ids: Vec<ProjectId>) {
        self.project_ids = project_ids;
    }

    pub fn current_project_id(&self) -> Option<&ProjectId> {
        self.current_project_id.as_ref()
    }

    pub fn set_current_project_id(&mut self, project_id: Option<ProjectId>) {
        self.current_project_id = project_id;
    }
}

/// Ephemeral per-widget UI state; dies with the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetUiState {
    content_loaded: bool,
}

impl WidgetUiState {
    pub fn content_loaded(&self) -> bool {
        self.content_loaded
    }
}

/// Everything UI-facing that is not an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    app_config: AppConfig,
    project_switcher: ProjectSwitcherState,
    modal_screens: ModalScreensState,
    mem_saver: MemSaverState,
    widget_ui: BTreeMap<WidgetId, WidgetUiState>,
}

impl UiState {
    pub fn new(app_config: AppConfig) -> Self {
        let mem_saver = MemSaverState::new(app_config.mem_saver().clone());
        Self {
            app_config,
            project_switcher: ProjectSwitcherState::default(),
            modal_screens: ModalScreensState::default(),
            mem_saver,
            widget_ui: BTreeMap::new(),
        }
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.app_config
    }

    pub fn set_app_config(&mut self, app_config: AppConfig) {
        self.app_config = app_config;
    }

    pub fn project_switcher(&self) -> &ProjectSwitcherState {
        &self.project_switcher
    }

    pub fn project_switcher_mut(&mut self) -> &mut ProjectSwitcherState {
        &mut self.project_switcher
    }

    pub fn modal_screens(&self) -> &ModalScreensState {
        &self.modal_screens
    }

    pub fn modal_screens_mut(&mut self) -> &mut ModalScreensState {
        &mut self.modal_screens
    }

    pub fn mem_saver(&self) -> &MemSaverState {
        &self.mem_saver
    }

    pub fn mem_saver_mut(&mut self) -> &mut MemSaverState {
        &mut self.mem_saver
    }

    pub fn widget_ui(&self) -> &BTreeMap<WidgetId, WidgetUiState> {
        &self.widget_ui
    }

    pub fn mark_widget_content_loaded(&mut self, widget_id: &WidgetId) {
        self.widget_ui
            .entry(widget_id.clone())
            .or_default()
            .content_loaded = true;
    }

    pub fn remove_widget_ui<'a>(&mut self, widget_ids: impl IntoIterator<Item = &'a WidgetId>) {
        for widget_id in widget_ids {
            self.widget_ui.remove(widget_id);
        }
    }
}

/// The root immutable snapshot the [`crate::state::store::AppStore`] holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    entities: Entities,
    ui: UiState,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            entities: Entities::default(),
            ui: UiState::new(app_config),
        }
    }

    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut Entities {
        &mut self.entities
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
