// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use crate::model::WorkflowId;
use crate::shell::WorkflowResources;
use crate::state::mem_saver::deactivate_workflow;
use crate::state::AppStore;

/// Deactivates one workflow: releases its resources and drops it from the
/// active list in a single commit, so observers never see the state removal
/// without the resource release.
pub struct DeactivateWorkflowUseCase {
    store: Arc<AppStore>,
    resources: Arc<dyn WorkflowResources>,
}

impl DeactivateWorkflowUseCase {
    pub fn new(store: Arc<AppStore>, resources: Arc<dyn WorkflowResources>) -> Self {
        Self { store, resources }
    }

    /// No-op (identical snapshot) when the workflow is not active.
    pub async fn exec(&self, workflow_id: &WorkflowId) {
        let snapshot = self.store.get();
        if !snapshot.ui().mem_saver().is_workflow_active(workflow_id) {
            return;
        }

        let mut state = (*snapshot).clone();
        let removed = deactivate_workflow(state.ui_mut().mem_saver_mut(), workflow_id);
        for entry in &removed {
            self.resources
                .unload_workflow(&entry.prj_id, &entry.wfl_id)
                .await;
        }
        self.store.set(state);
    }
}
