// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Application Settings modal.
//!
//! Commits replace the app configuration and re-sync the live MemSaver
//! policy; a lowered workflow limit evicts oldest-first and the evicted
//! workflows are unloaded before the commit.

use std::sync::Arc;

use crate::shell::WorkflowResources;
use crate::state::mem_saver::apply_config;
use crate::state::{AppConfig, AppStore, ModalScreenId};

pub struct ApplicationSettingsUseCases {
    store: Arc<AppStore>,
    resources: Arc<dyn WorkflowResources>,
}

impl ApplicationSettingsUseCases {
    pub fn new(store: Arc<AppStore>, resources: Arc<dyn WorkflowResources>) -> Self {
        Self { store, resources }
    }

    /// Opens the modal with a draft copy of the current configuration.
    pub fn open(&self) {
        let snapshot = self.store.get();
        let mut state = (*snapshot).clone();
        let draft = state.ui().app_config().clone();
        state
            .ui_mut()
            .modal_screens_mut()
            .data_mut()
            .application_settings_mut()
            .set_app_config(Some(draft));
        state
            .ui_mut()
            .modal_screens_mut()
            .open(ModalScreenId::ApplicationSettings);
        self.store.set(state);
    }

    /// Discards the draft and closes the modal.
    pub fn close(&self) {
        let snapshot = self.store.get();
        let screens = snapshot.ui().modal_screens();
        if !screens.is_open(ModalScreenId::ApplicationSettings)
            && screens.data().application_settings().app_config().is_none()
        {
            return;
        }

        let mut state = (*snapshot).clone();
        state
            .ui_mut()
            .modal_screens_mut()
            .close(ModalScreenId::ApplicationSettings);
        self.store.set(state);
    }

    /// Replaces the draft configuration while the modal is open.
    pub fn update_draft(&self, app_config: AppConfig) {
        let snapshot = self.store.get();
        if snapshot
            .ui()
            .modal_screens()
            .data()
            .application_settings()
            .app_config()
            .is_none()
        {
            return;
        }

        let mut state = (*snapshot).clone();
        state
            .ui_mut()
            .modal_screens_mut()
            .data_mut()
            .application_settings_mut()
            .set_app_config(Some(app_config));
        self.store.set(state);
    }

    /// Commits the draft configuration. Without a draft the snapshot stays
    /// identical.
    pub async fn save(&self) {
        let snapshot = self.store.get();
        let Some(draft) = snapshot
            .ui()
            .modal_screens()
            .data()
            .application_settings()
            .app_config()
            .cloned()
        else {
            return;
        };

        let mut state = (*snapshot).clone();
        let mem_saver_config = draft.mem_saver().clone();
        state.ui_mut().set_app_config(draft);
        let evicted = apply_config(state.ui_mut().mem_saver_mut(), mem_saver_config);
        state
            .ui_mut()
            .modal_screens_mut()
            .close(ModalScreenId::ApplicationSettings);

        for entry in &evicted {
            self.resources
                .unload_workflow(&entry.prj_id, &entry.wfl_id)
                .await;
        }
        self.store.set(state);
    }
}
