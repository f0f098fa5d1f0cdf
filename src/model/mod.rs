// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core entity model.
//!
//! Projects own workflows by id, workflows lay out widgets by id; collections
//! keep those references resolvable.

pub mod collection;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod project;
pub mod widget;
pub mod workflow;

pub use collection::{id_index_on_list, Entity, EntityCollection};
pub use ids::{
    Id, IdError, IdGenerator, LayoutItemId, ProjectId, UuidIdGenerator, WidgetId, WorkflowId,
};
pub use project::{generate_project_name, Project, ProjectSettings};
pub use widget::{
    NoteSettings, SessionPersistence, SessionScope, WebpageSettings, Widget, WidgetCoreSettings,
    WidgetKind, WidgetSettings,
};
pub use workflow::{
    generate_workflow_name, LayoutRect, WidgetLayoutItem, Workflow, WorkflowSettings,
};
