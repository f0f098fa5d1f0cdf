// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Project deletion cascade.
//!
//! Pure traversal: computes which workflow and widget ids hang off the
//! deleted projects and how the switcher list/current selection change. The
//! caller removes the returned id-sets from the collections, which keeps the
//! traversal independently testable.

use std::collections::BTreeSet;

use crate::model::{
    EntityCollection, Project, ProjectId, WidgetId, Workflow, WorkflowId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteProjectsOutcome {
    /// Switcher list with the deleted ids removed, survivor order preserved.
    pub project_ids: Vec<ProjectId>,
    /// New current project: unchanged if it survives, otherwise the next
    /// survivor at the deleted position, else the previous one, else none.
    pub current_project_id: Option<ProjectId>,
    pub del_project_ids: Vec<ProjectId>,
    pub del_workflow_ids: Vec<WorkflowId>,
    pub del_widget_ids: Vec<WidgetId>,
}

pub fn delete_projects(
    project_ids_to_del: &[ProjectId],
    project_ids: &[ProjectId],
    current_project_id: Option<&ProjectId>,
    projects: &EntityCollection<Project>,
    workflows: &EntityCollection<Workflow>,
) -> DeleteProjectsOutcome {
    let del_set: BTreeSet<&ProjectId> = project_ids_to_del.iter().collect();

    let mut del_workflow_ids: Vec<WorkflowId> = Vec::new();
    for prj_id in &del_set {
        if let Some(project) = projects.get_one(prj_id) {
            del_workflow_ids.extend(project.workflow_ids().iter().cloned());
        }
    }

    let mut del_widget_ids: Vec<WidgetId> = Vec::new();
    for wfl_id in &del_workflow_ids {
        if let Some(workflow) = workflows.get_one(wfl_id) {
            del_widget_ids.extend(workflow.layout().iter().map(|item| item.widget_id().clone()));
        }
    }

    let surviving: Vec<ProjectId> = project_ids
        .iter()
        .filter(|id| !del_set.contains(id))
        .cloned()
        .collect();

    let current_project_id = match current_project_id {
        Some(current) if !del_set.contains(current) => Some(current.clone()),
        Some(current) => next_current_after_deletion(project_ids, &del_set, current),
        None => None,
    };

    DeleteProjectsOutcome {
        project_ids: surviving,
        current_project_id,
        del_project_ids: del_set.into_iter().cloned().collect(),
        del_workflow_ids,
        del_widget_ids,
    }
}

/// Scans forward from the deleted current position for a survivor, then
/// backward, on the original ordering.
fn next_current_after_deletion(
    project_ids: &[ProjectId],
    del_set: &BTreeSet<&ProjectId>,
    current: &ProjectId,
) -> Option<ProjectId> {
    let position = project_ids.iter().position(|id| id == current)?;

    let forward = project_ids[position..]
        .iter()
        .find(|id| !del_set.contains(id));
    if let Some(id) = forward {
        return Some(id.clone());
    }

    project_ids[..position]
        .iter()
        .rev()
        .find(|id| !del_set.contains(id))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::delete_projects;
    use crate::model::fixtures::{
        fixture_layout_item, fixture_project, fixture_workflow, prj_id, wfl_id, wgt_id,
    };
    use crate::model::EntityCollection;

    #[test]
    fn cascades_over_owned_workflows_and_their_widgets() {
        let mut p1 = fixture_project("P1");
        p1.set_workflow_ids(vec![wfl_id("W1"), wfl_id("W2")]);
        let p2 = fixture_project("P2");

        let mut w1 = fixture_workflow("W1", "Workflow 1");
        w1.set_layout(vec![
            fixture_layout_item("L1", "G1"),
            fixture_layout_item("L2", "G2"),
        ]);
        let w2 = fixture_workflow("W2", "Workflow 2");

        let projects = EntityCollection::from_entities([p1, p2]);
        let workflows = EntityCollection::from_entities([w1, w2]);

        let outcome = delete_projects(
            &[prj_id("P1")],
            &[prj_id("P1"), prj_id("P2")],
            Some(&prj_id("P2")),
            &projects,
            &workflows,
        );

        assert_eq!(outcome.project_ids, vec![prj_id("P2")]);
        assert_eq!(outcome.current_project_id, Some(prj_id("P2")));
        assert_eq!(outcome.del_project_ids, vec![prj_id("P1")]);
        assert_eq!(outcome.del_workflow_ids, vec![wfl_id("W1"), wfl_id("W2")]);
        assert_eq!(outcome.del_widget_ids, vec![wgt_id("G1"), wgt_id("G2")]);
    }

    #[test]
    fn deleted_current_project_falls_forward_to_the_next_survivor() {
        let projects = EntityCollection::from_entities([
            fixture_project("P1"),
            fixture_project("P2"),
            fixture_project("P3"),
        ]);
        let workflows = EntityCollection::new();

        let outcome = delete_projects(
            &[prj_id("P2")],
            &[prj_id("P1"), prj_id("P2"), prj_id("P3")],
            Some(&prj_id("P2")),
            &projects,
            &workflows,
        );

        assert_eq!(outcome.project_ids, vec![prj_id("P1"), prj_id("P3")]);
        assert_eq!(outcome.current_project_id, Some(prj_id("P3")));
    }

    #[test]
    fn deleted_current_project_falls_back_to_the_previous_survivor() {
        let projects = EntityCollection::from_entities([
            fixture_project("P1"),
            fixture_project("P2"),
            fixture_project("P3"),
        ]);
        let workflows = EntityCollection::new();

        let outcome = delete_projects(
            &[prj_id("P2"), prj_id("P3")],
            &[prj_id("P1"), prj_id("P2"), prj_id("P3")],
            Some(&prj_id("P3")),
            &projects,
            &workflows,
        );

        assert_eq!(outcome.project_ids, vec![prj_id("P1")]);
        assert_eq!(outcome.current_project_id, Some(prj_id("P1")));
    }

    #[test]
    fn deleting_every_project_leaves_no_current() {
        let projects =
            EntityCollection::from_entities([fixture_project("P1"), fixture_project("P2")]);
        let workflows = EntityCollection::new();

        let outcome = delete_projects(
            &[prj_id("P1"), prj_id("P2")],
            &[prj_id("P1"), prj_id("P2")],
            Some(&prj_id("P1")),
            &projects,
            &workflows,
        );

        assert!(outcome.project_ids.is_empty());
        assert_eq!(outcome.current_project_id, None);
    }

    #[test]
    fn unknown_ids_cascade_nothing() {
        let projects = EntityCollection::from_entities([fixture_project("P1")]);
        let workflows = EntityCollection::new();

        let outcome = delete_projects(
            &[prj_id("missing")],
            &[prj_id("P1")],
            Some(&prj_id("P1")),
            &projects,
            &workflows,
        );

        assert_eq!(outcome.project_ids, vec![prj_id("P1")]);
        assert_eq!(outcome.current_project_id, Some(prj_id("P1")));
        assert!(outcome.del_workflow_ids.is_empty());
        assert!(outcome.del_widget_ids.is_empty());
    }
}
