// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use crate::model::{id_index_on_list, ProjectId};
use crate::shell::WorkflowResources;
use crate::state::AppStore;
use crate::usecase::subs::set_current_project;

/// Switches the current project in the project switcher.
pub struct SwitchProjectUseCase {
    store: Arc<AppStore>,
    resources: Arc<dyn WorkflowResources>,
}

impl SwitchProjectUseCase {
    pub fn new(store: Arc<AppStore>, resources: Arc<dyn WorkflowResources>) -> Self {
        Self { store, resources }
    }

    /// Selects `project_id`; its current workflow gets activated in
    /// MemSaver, unloading whatever that evicts. Selecting the already
    /// current project or an id not on the switcher list leaves the
    /// snapshot identical.
    pub async fn exec(&self, project_id: &ProjectId) {
        let snapshot = self.store.get();
        let switcher = snapshot.ui().project_switcher();
        if switcher.current_project_id() == Some(project_id) {
            return;
        }
        if id_index_on_list(switcher.project_ids(), project_id).is_none() {
            return;
        }

        let mut state = (*snapshot).clone();
        let evicted = set_current_project(&mut state, Some(project_id.clone()));
        for entry in &evicted {
            self.resources
                .unload_workflow(&entry.prj_id, &entry.wfl_id)
                .await;
        }
        self.store.set(state);
    }
}
