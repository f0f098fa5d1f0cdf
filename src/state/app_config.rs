// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::mem_saver::MemSaverConfig;

/// Process-wide application configuration.
///
/// Persisted by the host; `mem_saver` seeds the live MemSaver policy and is
/// re-synced into it when the application settings modal commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    main_hotkey: String,
    ui_theme: String,
    mem_saver: MemSaverConfig,
}

impl AppConfig {
    pub fn new(
        main_hotkey: impl Into<String>,
        ui_theme: impl Into<String>,
        mem_saver: MemSaverConfig,
    ) -> Self {
        Self {
            main_hotkey: main_hotkey.into(),
            ui_theme: ui_theme.into(),
            mem_saver,
        }
    }

    pub fn main_hotkey(&self) -> &str {
        &self.main_hotkey
    }

    pub fn set_main_hotkey(&mut self, main_hotkey: impl Into<String>) {
        self.main_hotkey = main_hotkey.into();
    }

    pub fn ui_theme(&self) -> &str {
        &self.ui_theme
    }

    pub fn set_ui_theme(&mut self, ui_theme: impl Into<String>) {
        self.ui_theme = ui_theme.into();
    }

    pub fn mem_saver(&self) -> &MemSaverConfig {
        &self.mem_saver
    }

    pub fn set_mem_saver(&mut self, mem_saver: MemSaverConfig) {
        self.mem_saver = mem_saver;
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            main_hotkey: "CmdOrCtrl+Shift+F".to_owned(),
            ui_theme: "dark".to_owned(),
            mem_saver: MemSaverConfig::default(),
        }
    }
}
