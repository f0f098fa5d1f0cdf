// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reusable sub-cases composed by the use cases.
//!
//! Each sub-case is one invariant-preserving step over a use-case-local
//! state builder (or over narrow inputs). None of them touch the store; the
//! composing use case reads once, applies the steps, and writes once.

pub mod clone_workflow;
pub mod create_workflow;
pub mod delete_projects;
pub mod set_current_project;
pub mod set_current_workflow;

pub use clone_workflow::clone_workflow;
pub use create_workflow::create_workflow;
pub use delete_projects::{delete_projects, DeleteProjectsOutcome};
pub use set_current_project::set_current_project;
pub use set_current_workflow::set_current_workflow;
