// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::ProjectId;
use crate::state::mem_saver::{activate_workflow, ActiveWorkflow};
use crate::state::AppState;

/// Selects `project_id` in the project switcher on the state builder.
///
/// The new current project's current workflow (if any) is activated in
/// MemSaver; the returned evictions are the caller's to unload before the
/// commit.
pub fn set_current_project(
    state: &mut AppState,
    project_id: Option<ProjectId>,
) -> Vec<ActiveWorkflow> {
    state
        .ui_mut()
        .project_switcher_mut()
        .set_current_project_id(project_id.clone());

    let Some(prj_id) = project_id else {
        return Vec::new();
    };
    let Some(current_workflow) = state
        .entities()
        .projects()
        .get_one(&prj_id)
        .and_then(|project| project.current_workflow_id().cloned())
    else {
        return Vec::new();
    };

    activate_workflow(state.ui_mut().mem_saver_mut(), prj_id, current_workflow)
}
