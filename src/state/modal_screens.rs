// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Modal screen stack and per-screen draft data.
//!
//! Drafts hold the edits a modal accumulates before its commit use case
//! adopts them; closing a screen resets its draft to the initial state.

use std::collections::BTreeMap;

use crate::model::{EntityCollection, Project, ProjectId, Workflow};
use crate::state::app_config::AppConfig;

/// The modal screens the workspace shell can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalScreenId {
    About,
    ApplicationSettings,
    ProjectManager,
    WorkflowSettings,
}

/// Draft state of the Project Manager modal.
///
/// `None` fields mean the modal has not been initialized; the commit use case
/// only runs when every field is present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectManagerData {
    projects: Option<EntityCollection<Project>>,
    project_ids: Option<Vec<ProjectId>>,
    delete_project_ids: Option<BTreeMap<ProjectId, bool>>,
    duplicate_project_ids: Option<BTreeMap<ProjectId, ProjectId>>,
}

impl ProjectManagerData {
    pub fn projects(&self) -> Option<&EntityCollection<Project>> {
        self.projects.as_ref()
    }

    pub fn projects_mut(&mut self) -> Option<&mut EntityCollection<Project>> {
        self.projects.as_mut()
    }

    pub fn project_ids(&self) -> Option<&Vec<ProjectId>> {
        self.project_ids.as_ref()
    }

    pub fn project_ids_mut(&mut self) -> Option<&mut Vec<ProjectId>> {
        self.project_ids.as_mut()
    }

    pub fn delete_project_ids(&self) -> Option<&BTreeMap<ProjectId, bool>> {
        self.delete_project_ids.as_ref()
    }

    pub fn delete_project_ids_mut(&mut self) -> Option<&mut BTreeMap<ProjectId, bool>> {
        self.delete_project_ids.as_mut()
    }

    /// Duplicate mappings, keyed target id, valued source id.
    pub fn duplicate_project_ids(&self) -> Option<&BTreeMap<ProjectId, ProjectId>> {
        self.duplicate_project_ids.as_ref()
    }

    pub fn duplicate_project_ids_mut(&mut self) -> Option<&mut BTreeMap<ProjectId, ProjectId>> {
        self.duplicate_project_ids.as_mut()
    }

    pub fn seed(&mut self, projects: EntityCollection<Project>, project_ids: Vec<ProjectId>) {
        self.projects = Some(projects);
        self.project_ids = Some(project_ids);
        self.delete_project_ids = Some(BTreeMap::new());
        self.duplicate_project_ids = Some(BTreeMap::new());
    }
}

/// Draft state of the Workflow Settings modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkflowSettingsData {
    workflow: Option<Workflow>,
}

impl WorkflowSettingsData {
    pub fn workflow(&self) -> Option<&Workflow> {
        self.workflow.as_ref()
    }

    pub fn set_workflow(&mut self, workflow: Option<Workflow>) {
        self.workflow = workflow;
    }
}

/// Draft state of the Application Settings modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationSettingsData {
    app_config: Option<AppConfig>,
}

impl ApplicationSettingsData {
    pub fn app_config(&self) -> Option<&AppConfig> {
        self.app_config.as_ref()
    }

    pub fn set_app_config(&mut self, app_config: Option<AppConfig>) {
        self.app_config = app_config;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalScreensData {
    application_settings: ApplicationSettingsData,
    project_manager: ProjectManagerData,
    workflow_settings: WorkflowSettingsData,
}

impl ModalScreensData {
    pub fn application_settings(&self) -> &ApplicationSettingsData {
        &self.application_settings
    }

    pub fn application_settings_mut(&mut self) -> &mut ApplicationSettingsData {
        &mut self.application_settings
    }

    pub fn project_manager(&self) -> &ProjectManagerData {
        &self.project_manager
    }

    pub fn project_manager_mut(&mut self) -> &mut ProjectManagerData {
        &mut self.project_manager
    }

    pub fn workflow_settings(&self) -> &WorkflowSettingsData {
        &self.workflow_settings
    }

    pub fn workflow_settings_mut(&mut self) -> &mut WorkflowSettingsData {
        &mut self.workflow_settings
    }
}

/// Open modal screens (topmost last) plus their drafts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalScreensState {
    data: ModalScreensData,
    order: Vec<ModalScreenId>,
}

impl ModalScreensState {
    pub fn data(&self) -> &ModalScreensData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut ModalScreensData {
        &mut self.data
    }

    pub fn order(&self) -> &[ModalScreenId] {
        &self.order
    }

    pub fn top(&self) -> Option<ModalScreenId> {
        self.order.last().copied()
    }

    pub fn is_open(&self, id: ModalScreenId) -> bool {
        self.order.contains(&id)
    }

    /// Puts `id` on top of the stack; an already-open screen is raised.
    pub fn open(&mut self, id: ModalScreenId) {
        self.order.retain(|open| *open != id);
        self.order.push(id);
    }

    /// Removes `id` from the stack and resets its draft.
    pub fn close(&mut self, id: ModalScreenId) {
        self.order.retain(|open| *open != id);
        match id {
            ModalScreenId::About => {}
            ModalScreenId::ApplicationSettings => {
                self.data.application_settings = ApplicationSettingsData::default();
            }
            ModalScreenId::ProjectManager => {
                self.data.project_manager = ProjectManagerData::default();
            }
            ModalScreenId::WorkflowSettings => {
                self.data.workflow_settings = WorkflowSettingsData::default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ModalScreenId, ModalScreensState};
    use crate::model::{EntityCollection, Workflow, WorkflowId, WorkflowSettings};

    fn workflow(id: &str) -> Workflow {
        Workflow::new(
            WorkflowId::new(id).expect("workflow id"),
            WorkflowSettings::new("Workflow"),
        )
    }

    #[test]
    fn open_raises_an_already_open_screen() {
        let mut screens = ModalScreensState::default();
        screens.open(ModalScreenId::About);
        screens.open(ModalScreenId::WorkflowSettings);
        screens.open(ModalScreenId::About);

        assert_eq!(
            screens.order(),
            [ModalScreenId::WorkflowSettings, ModalScreenId::About]
        );
        assert_eq!(screens.top(), Some(ModalScreenId::About));
    }

    #[test]
    fn close_removes_the_screen_and_resets_its_draft() {
        let mut screens = ModalScreensState::default();
        screens.open(ModalScreenId::About);
        screens.open(ModalScreenId::WorkflowSettings);
        screens
            .data_mut()
            .workflow_settings_mut()
            .set_workflow(Some(workflow("W1")));

        screens.close(ModalScreenId::WorkflowSettings);

        assert_eq!(screens.order(), [ModalScreenId::About]);
        assert!(screens.data().workflow_settings().workflow().is_none());
    }

    #[test]
    fn close_resets_project_manager_draft() {
        let mut screens = ModalScreensState::default();
        screens.open(ModalScreenId::ProjectManager);
        screens
            .data_mut()
            .project_manager_mut()
            .seed(EntityCollection::new(), Vec::new());

        screens.close(ModalScreenId::ProjectManager);

        assert!(screens.data().project_manager().projects().is_none());
        assert!(!screens.is_open(ModalScreenId::ProjectManager));
    }
}
