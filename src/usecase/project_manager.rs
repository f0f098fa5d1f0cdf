// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Project Manager modal: draft editing and the commit.
//!
//! The modal edits a draft copy of the projects collection plus deletion
//! flags and duplicate mappings. Nothing touches the live entities until
//! `save_changes`, which adopts the draft and resolves deletions,
//! default-workflow creation, and duplication in one read-transform-write
//! cycle.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::model::ids::generated_id;
use crate::model::{
    generate_project_name, generate_workflow_name, id_index_on_list, IdGenerator, Project,
    ProjectId, ProjectSettings,
};
use crate::shell::WorkflowResources;
use crate::state::mem_saver::{deactivate_workflow, ActiveWorkflow};
use crate::state::{AppStore, ModalScreenId};
use crate::storage::WidgetDataStorageManager;
use crate::usecase::subs::{
    clone_workflow, create_workflow, delete_projects, set_current_project, set_current_workflow,
};

pub struct ProjectManagerUseCases {
    store: Arc<AppStore>,
    ids: Arc<dyn IdGenerator>,
    storage: Arc<dyn WidgetDataStorageManager>,
    resources: Arc<dyn WorkflowResources>,
}

impl ProjectManagerUseCases {
    pub fn new(
        store: Arc<AppStore>,
        ids: Arc<dyn IdGenerator>,
        storage: Arc<dyn WidgetDataStorageManager>,
        resources: Arc<dyn WorkflowResources>,
    ) -> Self {
        Self {
            store,
            ids,
            storage,
            resources,
        }
    }

    /// Opens the modal, seeding the draft from the live entities.
    pub fn open(&self) {
        let snapshot = self.store.get();
        let mut state = (*snapshot).clone();

        let projects = state.entities().projects().clone();
        let project_ids = state.ui().project_switcher().project_ids().to_vec();
        state
            .ui_mut()
            .modal_screens_mut()
            .data_mut()
            .project_manager_mut()
            .seed(projects, project_ids);
        state
            .ui_mut()
            .modal_screens_mut()
            .open(ModalScreenId::ProjectManager);

        self.store.set(state);
    }

    /// Discards the draft and closes the modal.
    pub fn close(&self) {
        let snapshot = self.store.get();
        let screens = snapshot.ui().modal_screens();
        if !screens.is_open(ModalScreenId::ProjectManager)
            && screens.data().project_manager().projects().is_none()
        {
            return;
        }

        let mut state = (*snapshot).clone();
        state
            .ui_mut()
            .modal_screens_mut()
            .close(ModalScreenId::ProjectManager);
        self.store.set(state);
    }

    /// Adds a new draft project named "Project N"; its default workflow is
    /// created at commit time.
    pub fn add_project(&self) -> Option<ProjectId> {
        let snapshot = self.store.get();
        let pm = snapshot.ui().modal_screens().data().project_manager();
        if pm.projects().is_none() || pm.project_ids().is_none() {
            return None;
        }

        let mut state = (*snapshot).clone();
        let pm = state
            .ui_mut()
            .modal_screens_mut()
            .data_mut()
            .project_manager_mut();

        let used_names: Vec<String> = pm
            .projects()
            .map(|projects| {
                projects
                    .iter()
                    .map(|project| project.settings().name().to_owned())
                    .collect()
            })
            .unwrap_or_default();
        let project = Project::new(
            generated_id(self.ids.as_ref()),
            ProjectSettings::new(generate_project_name(&used_names)),
        );
        let new_id = project.id().clone();

        if let Some(projects) = pm.projects_mut() {
            projects.add_one(project);
        }
        if let Some(list) = pm.project_ids_mut() {
            list.push(new_id.clone());
        }

        self.store.set(state);
        Some(new_id)
    }

    /// Flips the deletion mark of a draft project.
    pub fn toggle_deletion(&self, project_id: &ProjectId) {
        let snapshot = self.store.get();
        let pm = snapshot.ui().modal_screens().data().project_manager();
        let draft_has_project = pm
            .projects()
            .map_or(false, |projects| projects.contains(project_id));
        if pm.delete_project_ids().is_none() || !draft_has_project {
            return;
        }

        let mut state = (*snapshot).clone();
        if let Some(flags) = state
            .ui_mut()
            .modal_screens_mut()
            .data_mut()
            .project_manager_mut()
            .delete_project_ids_mut()
        {
            let entry = flags.entry(project_id.clone()).or_insert(false);
            *entry = !*entry;
        }
        self.store.set(state);
    }

    /// Registers a draft duplicate of `source_id`; workflows are cloned at
    /// commit time.
    pub fn duplicate_project(&self, source_id: &ProjectId) -> Option<ProjectId> {
        let snapshot = self.store.get();
        let pm = snapshot.ui().modal_screens().data().project_manager();
        let source = pm.projects()?.get_one(source_id)?.clone();
        pm.project_ids()?;
        pm.duplicate_project_ids()?;

        let mut state = (*snapshot).clone();
        let new_project = Project::new(
            generated_id(self.ids.as_ref()),
            ProjectSettings::new(format!("{} Copy", source.settings().name())),
        );
        let new_id = new_project.id().clone();

        let pm = state
            .ui_mut()
            .modal_screens_mut()
            .data_mut()
            .project_manager_mut();
        if let Some(projects) = pm.projects_mut() {
            projects.add_one(new_project);
        }
        if let Some(list) = pm.project_ids_mut() {
            list.push(new_id.clone());
        }
        if let Some(duplicates) = pm.duplicate_project_ids_mut() {
            duplicates.insert(new_id.clone(), source_id.clone());
        }

        self.store.set(state);
        Some(new_id)
    }

    /// Renames (or otherwise reconfigures) a draft project.
    pub fn update_project_settings(&self, project_id: &ProjectId, settings: ProjectSettings) {
        let snapshot = self.store.get();
        let pm = snapshot.ui().modal_screens().data().project_manager();
        let draft_has_project = pm
            .projects()
            .map_or(false, |projects| projects.contains(project_id));
        if !draft_has_project {
            return;
        }

        let mut state = (*snapshot).clone();
        if let Some(projects) = state
            .ui_mut()
            .modal_screens_mut()
            .data_mut()
            .project_manager_mut()
            .projects_mut()
        {
            projects.update_one(project_id, |project| project.set_settings(settings));
        }
        self.store.set(state);
    }

    /// Commits the draft: adopts the edited projects and switcher order,
    /// creates a default workflow for every newly added non-duplicate
    /// project, cascades deletions, clones duplicated projects' workflows,
    /// and reconciles the current project. One read, one write.
    pub async fn save_changes(&self) {
        let snapshot = self.store.get();
        let pm = snapshot.ui().modal_screens().data().project_manager();
        let (
            Some(draft_projects),
            Some(draft_project_ids),
            Some(delete_flags),
            Some(duplicate_map),
        ) = (
            pm.projects().cloned(),
            pm.project_ids().cloned(),
            pm.delete_project_ids().cloned(),
            pm.duplicate_project_ids().cloned(),
        )
        else {
            return;
        };

        let prev_projects = snapshot.entities().projects().clone();
        let mut state = (*snapshot).clone();
        let mut to_unload: Vec<ActiveWorkflow> = Vec::new();

        *state.entities_mut().projects_mut() = draft_projects;
        state
            .ui_mut()
            .project_switcher_mut()
            .set_project_ids(draft_project_ids.clone());
        state
            .ui_mut()
            .modal_screens_mut()
            .close(ModalScreenId::ProjectManager);

        // Newly added, non-duplicate projects start with one default workflow.
        for new_prj_id in &draft_project_ids {
            if prev_projects.get_one(new_prj_id).is_some()
                || duplicate_map.contains_key(new_prj_id)
                || state.entities().projects().get_one(new_prj_id).is_none()
            {
                continue;
            }

            let workflow =
                create_workflow(self.ids.as_ref(), generate_workflow_name::<&str>(&[]));
            let new_wfl_id = workflow.id().clone();
            state
                .entities_mut()
                .projects_mut()
                .update_one(new_prj_id, |project| {
                    project.set_workflow_ids(vec![new_wfl_id.clone()]);
                });
            state.entities_mut().workflows_mut().add_one(workflow);
            to_unload.extend(set_current_workflow(
                &mut state,
                new_prj_id,
                &new_wfl_id,
                false,
            ));
        }

        let project_ids_to_del: Vec<ProjectId> = delete_flags
            .iter()
            .filter(|(_, marked)| **marked)
            .map(|(id, _)| id.clone())
            .collect();
        if !project_ids_to_del.is_empty() {
            let outcome = delete_projects(
                &project_ids_to_del,
                state.ui().project_switcher().project_ids(),
                state.ui().project_switcher().current_project_id(),
                state.entities().projects(),
                state.entities().workflows(),
            );

            state
                .ui_mut()
                .project_switcher_mut()
                .set_project_ids(outcome.project_ids);
            state
                .entities_mut()
                .projects_mut()
                .remove_many(outcome.del_project_ids.iter());
            state
                .entities_mut()
                .widgets_mut()
                .remove_many(outcome.del_widget_ids.iter());
            state
                .entities_mut()
                .workflows_mut()
                .remove_many(outcome.del_workflow_ids.iter());
            state.ui_mut().remove_widget_ui(outcome.del_widget_ids.iter());

            to_unload.extend(set_current_project(&mut state, outcome.current_project_id));
            for wfl_id in &outcome.del_workflow_ids {
                to_unload.extend(deactivate_workflow(state.ui_mut().mem_saver_mut(), wfl_id));
            }
        }

        for (to_prj_id, from_prj_id) in &duplicate_map {
            let Some(from_project) = state.entities().projects().get_one(from_prj_id).cloned()
            else {
                continue;
            };
            if state.entities().projects().get_one(to_prj_id).is_none() {
                continue;
            }

            let mut new_workflow_ids = Vec::new();
            for wfl_id in from_project.workflow_ids() {
                let Some(workflow) = state.entities().workflows().get_one(wfl_id).cloned() else {
                    continue;
                };
                let (new_workflow, new_widgets) = clone_workflow(
                    &workflow,
                    state.entities(),
                    self.ids.as_ref(),
                    self.storage.as_ref(),
                )
                .await;
                new_workflow_ids.push(new_workflow.id().clone());
                state.entities_mut().workflows_mut().add_one(new_workflow);
                state.entities_mut().widgets_mut().add_many(new_widgets);
            }

            if let Some(first) = new_workflow_ids.first().cloned() {
                state
                    .entities_mut()
                    .projects_mut()
                    .update_one(to_prj_id, |project| {
                        let mut workflow_ids = project.workflow_ids().to_vec();
                        workflow_ids.extend(new_workflow_ids.iter().cloned());
                        project.set_workflow_ids(workflow_ids);
                        project.set_current_workflow_id(Some(first.clone()));
                    });
            }
        }

        let needs_fallback = match state.ui().project_switcher().current_project_id() {
            Some(current) => {
                id_index_on_list(state.ui().project_switcher().project_ids(), current).is_none()
            }
            None => true,
        };
        if needs_fallback {
            let first = state.ui().project_switcher().project_ids().first().cloned();
            to_unload.extend(set_current_project(&mut state, first));
        }

        let mut seen = BTreeSet::new();
        to_unload.retain(|entry| seen.insert((entry.prj_id.clone(), entry.wfl_id.clone())));
        for entry in &to_unload {
            self.resources
                .unload_workflow(&entry.prj_id, &entry.wfl_id)
                .await;
        }

        self.store.set(state);
    }
}
