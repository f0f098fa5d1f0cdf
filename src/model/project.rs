// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::collection::Entity;
use super::ids::{ProjectId, WorkflowId};

/// User-editable project settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    name: String,
}

impl ProjectSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// A project owns its workflows by id reference, not by value.
///
/// Every id on `workflow_ids` must resolve in the workflows collection of the
/// same snapshot; deletion cascades keep that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    settings: ProjectSettings,
    workflow_ids: Vec<WorkflowId>,
    current_workflow_id: Option<WorkflowId>,
}

impl Project {
    pub fn new(id: ProjectId, settings: ProjectSettings) -> Self {
        Self {
            id,
            settings,
            workflow_ids: Vec::new(),
            current_workflow_id: None,
        }
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: ProjectSettings) {
        self.settings = settings;
    }

    pub fn workflow_ids(&self) -> &[WorkflowId] {
        &self.workflow_ids
    }

    pub fn set_workflow_ids(&mut self, workflow_ids: Vec<WorkflowId>) {
        self.workflow_ids = workflow_ids;
    }

    pub fn current_workflow_id(&self) -> Option<&WorkflowId> {
        self.current_workflow_id.as_ref()
    }

    pub fn set_current_workflow_id(&mut self, workflow_id: Option<WorkflowId>) {
        self.current_workflow_id = workflow_id;
    }
}

impl Entity for Project {
    type Id = ProjectId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// First "Project N" not present among `used_names`.
pub fn generate_project_name<S: AsRef<str>>(used_names: &[S]) -> String {
    generate_numbered_name("Project", used_names)
}

pub(crate) fn generate_numbered_name<S: AsRef<str>>(prefix: &str, used_names: &[S]) -> String {
    let mut index = 1usize;
    loop {
        let candidate = format!("{prefix} {index}");
        if !used_names.iter().any(|used| used.as_ref() == candidate) {
            return candidate;
        }
        index += 1;
    }
}
