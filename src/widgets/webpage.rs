// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Webpage widget session scoping.

use crate::model::{ProjectId, SessionScope, WebpageSettings, WidgetId, WorkflowId};

/// The browsing-session partition key for a webpage widget.
///
/// Widgets with the same key share login/session data. The scope narrows the
/// sharing from the whole app down to a single widget; the persistence
/// prefix separates sessions that survive restarts from temporary ones.
pub fn session_partition(
    settings: &WebpageSettings,
    prj_id: &ProjectId,
    wfl_id: &WorkflowId,
    widget_id: &WidgetId,
) -> String {
    let prefix = settings.session_persist.as_str();
    match settings.session_scope {
        SessionScope::Application => format!("{prefix}:app"),
        SessionScope::Project => format!("{prefix}:prj:{prj_id}"),
        SessionScope::Workflow => format!("{prefix}:wfl:{wfl_id}"),
        SessionScope::Widget => format!("{prefix}:wgt:{widget_id}"),
    }
}
