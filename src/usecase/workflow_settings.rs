// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Workflow Settings modal.
//!
//! The modal edits a draft snapshot of one workflow; `save` writes the
//! draft's settings back onto the entity and resets the draft.

use std::sync::Arc;

use crate::model::{WorkflowId, WorkflowSettings};
use crate::state::{AppStore, ModalScreenId};

pub struct WorkflowSettingsUseCases {
    store: Arc<AppStore>,
}

impl WorkflowSettingsUseCases {
    pub fn new(store: Arc<AppStore>) -> Self {
        Self { store }
    }

    /// Opens the modal with a draft copy of `workflow_id`.
    ///
    /// A stale id leaves the snapshot identical.
    pub fn open(&self, workflow_id: &WorkflowId) {
        let snapshot = self.store.get();
        let Some(workflow) = snapshot.entities().workflows().get_one(workflow_id).cloned()
        else {
            return;
        };

        let mut state = (*snapshot).clone();
        state
            .ui_mut()
            .modal_screens_mut()
            .data_mut()
            .workflow_settings_mut()
            .set_workflow(Some(workflow));
        state
            .ui_mut()
            .modal_screens_mut()
            .open(ModalScreenId::WorkflowSettings);
        self.store.set(state);
    }

    /// Discards the draft and closes the modal.
    pub fn close(&self) {
        let snapshot = self.store.get();
        let screens = snapshot.ui().modal_screens();
        if !screens.is_open(ModalScreenId::WorkflowSettings)
            && screens.data().workflow_settings().workflow().is_none()
        {
            return;
        }

        let mut state = (*snapshot).clone();
        state
            .ui_mut()
            .modal_screens_mut()
            .close(ModalScreenId::WorkflowSettings);
        self.store.set(state);
    }

    /// Replaces the draft workflow's settings while the modal is open.
    pub fn update_draft(&self, settings: WorkflowSettings) {
        let snapshot = self.store.get();
        let Some(draft) = snapshot
            .ui()
            .modal_screens()
            .data()
            .workflow_settings()
            .workflow()
            .cloned()
        else {
            return;
        };

        let mut state = (*snapshot).clone();
        let mut draft = draft;
        draft.set_settings(settings);
        state
            .ui_mut()
            .modal_screens_mut()
            .data_mut()
            .workflow_settings_mut()
            .set_workflow(Some(draft));
        self.store.set(state);
    }

    /// Writes the draft's settings onto the workflow entity, resets the
    /// draft, and closes the modal. Without a draft the snapshot stays
    /// identical.
    pub fn save(&self) {
        let snapshot = self.store.get();
        let Some(draft) = snapshot
            .ui()
            .modal_screens()
            .data()
            .workflow_settings()
            .workflow()
            .cloned()
        else {
            return;
        };

        let mut state = (*snapshot).clone();
        state
            .entities_mut()
            .workflows_mut()
            .update_one(draft.id(), |workflow| {
                workflow.set_settings(draft.settings().clone());
            });
        state
            .ui_mut()
            .modal_screens_mut()
            .close(ModalScreenId::WorkflowSettings);
        self.store.set(state);
    }
}
