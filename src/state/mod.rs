// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Application state tree, store, and MemSaver policy.

pub mod app_config;
pub mod app_state;
pub mod mem_saver;
pub mod modal_screens;
pub mod store;

pub use app_config::AppConfig;
pub use app_state::{AppState, Entities, ProjectSwitcherState, UiState, WidgetUiState};
pub use mem_saver::{ActiveWorkflow, MemSaverConfig, MemSaverMode, MemSaverState};
pub use modal_screens::{
    ApplicationSettingsData, ModalScreenId, ModalScreensData, ModalScreensState,
    ProjectManagerData, WorkflowSettingsData,
};
pub use store::{AppStore, SubscriptionId};
