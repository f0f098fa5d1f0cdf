// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::ids::generated_id;
use crate::model::{IdGenerator, Workflow, WorkflowSettings};

/// Builds a new, empty workflow under a fresh id.
pub fn create_workflow(ids: &dyn IdGenerator, name: impl Into<String>) -> Workflow {
    Workflow::new(generated_id(ids), WorkflowSettings::new(name))
}
