// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use crate::model::{ProjectId, WorkflowId};
use crate::shell::WorkflowResources;
use crate::state::AppStore;
use crate::usecase::subs::set_current_workflow;

/// Switches the current workflow tab of a project.
pub struct SwitchWorkflowUseCase {
    store: Arc<AppStore>,
    resources: Arc<dyn WorkflowResources>,
}

impl SwitchWorkflowUseCase {
    pub fn new(store: Arc<AppStore>, resources: Arc<dyn WorkflowResources>) -> Self {
        Self { store, resources }
    }

    /// Makes `wfl_id` current in `prj_id` and activates it in MemSaver,
    /// unloading whatever that activation evicts.
    ///
    /// A stale project or workflow id, or a workflow that is already
    /// current, leaves the snapshot identical.
    pub async fn exec(&self, prj_id: &ProjectId, wfl_id: &WorkflowId) {
        let snapshot = self.store.get();
        let Some(project) = snapshot.entities().projects().get_one(prj_id) else {
            return;
        };
        if !snapshot.entities().workflows().contains(wfl_id) {
            return;
        }
        if project.current_workflow_id() == Some(wfl_id) {
            return;
        }

        let mut state = (*snapshot).clone();
        let evicted = set_current_workflow(&mut state, prj_id, wfl_id, true);
        for entry in &evicted {
            self.resources
                .unload_workflow(&entry.prj_id, &entry.wfl_id)
                .await;
        }
        self.store.set(state);
    }
}
