// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! MemSaver policy state.
//!
//! Tracks which workflows are active (resources loaded). Activation appends
//! at the tail; when the configured limit is exceeded the oldest entry is
//! evicted first. Callers own the resource-unload side effect for everything
//! these functions return as evicted/removed, and must perform it before
//! committing the snapshot.

use serde::{Deserialize, Serialize};

use crate::model::{ProjectId, WorkflowId};

/// MemSaver operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemSaverMode {
    /// Only the most recently activated workflows stay loaded.
    ExceptActive,
    /// Every workflow stays loaded; the active list is not tracked.
    Disabled,
}

/// Limit configuration for workflow activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemSaverConfig {
    mode: MemSaverMode,
    number_of_active_workflows: u32,
}

impl MemSaverConfig {
    pub fn new(mode: MemSaverMode, number_of_active_workflows: u32) -> Self {
        Self {
            mode,
            number_of_active_workflows,
        }
    }

    pub fn mode(&self) -> MemSaverMode {
        self.mode
    }

    pub fn number_of_active_workflows(&self) -> u32 {
        self.number_of_active_workflows
    }
}

impl Default for MemSaverConfig {
    fn default() -> Self {
        Self {
            mode: MemSaverMode::ExceptActive,
            number_of_active_workflows: 3,
        }
    }
}

/// One entry on the active-workflow list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveWorkflow {
    pub prj_id: ProjectId,
    pub wfl_id: WorkflowId,
}

/// Active-workflow tracking plus its live configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemSaverState {
    active_workflows: Vec<ActiveWorkflow>,
    config: MemSaverConfig,
}

impl MemSaverState {
    pub fn new(config: MemSaverConfig) -> Self {
        Self {
            active_workflows: Vec::new(),
            config,
        }
    }

    /// Most recently activated entries at the tail.
    pub fn active_workflows(&self) -> &[ActiveWorkflow] {
        &self.active_workflows
    }

    pub fn config(&self) -> &MemSaverConfig {
        &self.config
    }

    pub fn is_workflow_active(&self, wfl_id: &WorkflowId) -> bool {
        self.active_workflows
            .iter()
            .any(|entry| entry.wfl_id == *wfl_id)
    }
}

/// Marks `(prj_id, wfl_id)` active, returning the entries evicted to keep the
/// list within the configured limit.
///
/// No-op when the mode is disabled or the pair is already active.
pub fn activate_workflow(
    mem_saver: &mut MemSaverState,
    prj_id: ProjectId,
    wfl_id: WorkflowId,
) -> Vec<ActiveWorkflow> {
    if mem_saver.config.mode == MemSaverMode::Disabled {
        return Vec::new();
    }
    let already_active = mem_saver
        .active_workflows
        .iter()
        .any(|entry| entry.prj_id == prj_id && entry.wfl_id == wfl_id);
    if already_active {
        return Vec::new();
    }

    mem_saver.active_workflows.push(ActiveWorkflow { prj_id, wfl_id });
    enforce_limit(mem_saver)
}

/// Removes every entry for `wfl_id`, returning what was removed.
pub fn deactivate_workflow(
    mem_saver: &mut MemSaverState,
    wfl_id: &WorkflowId,
) -> Vec<ActiveWorkflow> {
    let mut removed = Vec::new();
    mem_saver.active_workflows.retain(|entry| {
        if entry.wfl_id == *wfl_id {
            removed.push(entry.clone());
            false
        } else {
            true
        }
    });
    removed
}

/// Replaces the live configuration.
///
/// Switching to disabled clears the list without evicting (everything stays
/// loaded); a lowered limit evicts oldest-first and returns the evictees.
pub fn apply_config(mem_saver: &mut MemSaverState, config: MemSaverConfig) -> Vec<ActiveWorkflow> {
    mem_saver.config = config;
    if mem_saver.config.mode == MemSaverMode::Disabled {
        mem_saver.active_workflows.clear();
        return Vec::new();
    }
    enforce_limit(mem_saver)
}

fn enforce_limit(mem_saver: &mut MemSaverState) -> Vec<ActiveWorkflow> {
    let limit = mem_saver.config.number_of_active_workflows as usize;
    let mut evicted = Vec::new();
    while mem_saver.active_workflows.len() > limit {
        evicted.push(mem_saver.active_workflows.remove(0));
    }
    evicted
}
