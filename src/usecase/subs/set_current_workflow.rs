// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{ProjectId, WorkflowId};
use crate::state::mem_saver::{activate_workflow, ActiveWorkflow};
use crate::state::AppState;

/// Makes `wfl_id` the current workflow of `prj_id` on the state builder.
///
/// With `activate`, the workflow is also marked active in MemSaver; the
/// returned entries are whatever that activation evicted, and the caller
/// unloads them before committing. A missing project leaves the state
/// untouched.
pub fn set_current_workflow(
    state: &mut AppState,
    prj_id: &ProjectId,
    wfl_id: &WorkflowId,
    activate: bool,
) -> Vec<ActiveWorkflow> {
    let updated = state
        .entities_mut()
        .projects_mut()
        .update_one(prj_id, |project| {
            project.set_current_workflow_id(Some(wfl_id.clone()));
        });
    if !updated || !activate {
        return Vec::new();
    }

    activate_workflow(state.ui_mut().mem_saver_mut(), prj_id.clone(), wfl_id.clone())
}
