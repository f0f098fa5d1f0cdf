// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Widget entities and per-kind settings.
//!
//! Settings cross the host boundary as JSON, so each settings type offers a
//! tolerant `from_value` (junk in, per-field defaults out) alongside a
//! canonical `to_value`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::collection::Entity;
use super::ids::WidgetId;

/// The kind of embedded app a widget runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Note,
    Webpage,
}

/// Settings shared by every widget kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetCoreSettings {
    name: String,
}

impl WidgetCoreSettings {
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

/// Kind-specific widget settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetSettings {
    Note(NoteSettings),
    Webpage(WebpageSettings),
}

impl WidgetSettings {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::Note(_) => WidgetKind::Note,
            Self::Webpage(_) => WidgetKind::Webpage,
        }
    }

    pub fn from_value(kind: WidgetKind, value: &Value) -> Self {
        match kind {
            WidgetKind::Note => Self::Note(NoteSettings::from_value(value)),
            WidgetKind::Webpage => Self::Webpage(WebpageSettings::from_value(value)),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Note(settings) => settings.to_value(),
            Self::Webpage(settings) => settings.to_value(),
        }
    }
}

/// Note widget settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoteSettings {
    pub markdown: bool,
    pub spell_check: bool,
}

impl NoteSettings {
    pub fn from_value(value: &Value) -> Self {
        Self {
            markdown: value
                .get("markdown")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            spell_check: value
                .get("spellCheck")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }

    pub fn to_value(&self) -> Value {
        json!({
            "markdown": self.markdown,
            "spellCheck": self.spell_check,
        })
    }
}

/// How long a webpage widget keeps its browsing session data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPersistence {
    #[default]
    Persistent,
    Temporary,
}

impl SessionPersistence {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Persistent => "persist",
            Self::Temporary => "temp",
        }
    }

    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("temp") => Self::Temporary,
            _ => Self::Persistent,
        }
    }
}

/// Which widgets share a webpage widget's browsing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionScope {
    Application,
    #[default]
    Project,
    Workflow,
    Widget,
}

impl SessionScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Application => "app",
            Self::Project => "prj",
            Self::Workflow => "wfl",
            Self::Widget => "wgt",
        }
    }

    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("app") => Self::Application,
            Some("wfl") => Self::Workflow,
            Some("wgt") => Self::Widget,
            _ => Self::Project,
        }
    }
}

/// Webpage widget settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WebpageSettings {
    /// Reload period in seconds; 0 disables auto-reload.
    pub auto_reload: u32,
    pub session_persist: SessionPersistence,
    pub session_scope: SessionScope,
    pub url: String,
    pub injected_css: String,
    pub injected_js: String,
}

impl WebpageSettings {
    pub fn from_value(value: &Value) -> Self {
        Self {
            auto_reload: value
                .get("autoReload")
                .and_then(Value::as_u64)
                .map(|seconds| u32::try_from(seconds).unwrap_or(u32::MAX))
                .unwrap_or(0),
            session_persist: SessionPersistence::from_value(value.get("sessionPersist")),
            session_scope: SessionScope::from_value(value.get("sessionScope")),
            url: string_field(value, "url"),
            injected_css: string_field(value, "injectedCSS"),
            injected_js: string_field(value, "injectedJS"),
        }
    }

    pub fn to_value(&self) -> Value {
        json!({
            "autoReload": self.auto_reload,
            "sessionPersist": self.session_persist.as_str(),
            "sessionScope": self.session_scope.as_str(),
            "url": self.url,
            "injectedCSS": self.injected_css,
            "injectedJS": self.injected_js,
        })
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_owned()
}

/// A small embedded app owned by exactly one workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    id: WidgetId,
    kind: WidgetKind,
    core_settings: WidgetCoreSettings,
    settings: WidgetSettings,
}

impl Widget {
    pub fn new(
        id: WidgetId,
        core_settings: WidgetCoreSettings,
        settings: WidgetSettings,
    ) -> Self {
        let kind = settings.kind();
        Self {
            id,
            kind,
            core_settings,
            settings,
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn core_settings(&self) -> &WidgetCoreSettings {
        &self.core_settings
    }

    pub fn set_core_settings(&mut self, core_settings: WidgetCoreSettings) {
        self.core_settings = core_settings;
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: WidgetSettings) {
        self.kind = settings.kind();
        self.settings = settings;
    }

    /// Deep copy under a fresh id, as used by the workflow clone remap.
    pub fn duplicate_as(&self, id: WidgetId) -> Self {
        Self {
            id,
            kind: self.kind,
            core_settings: self.core_settings.clone(),
            settings: self.settings.clone(),
        }
    }
}

impl Entity for Widget {
    type Id = WidgetId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{NoteSettings, SessionPersistence, SessionScope, WebpageSettings};

    #[test]
    fn webpage_settings_default_junk_fields() {
        let value = json!({
            "autoReload": "not-a-number",
            "sessionPersist": 42,
            "sessionScope": "bogus",
            "url": null,
        });

        let settings = WebpageSettings::from_value(&value);

        assert_eq!(settings.auto_reload, 0);
        assert_eq!(settings.session_persist, SessionPersistence::Persistent);
        assert_eq!(settings.session_scope, SessionScope::Project);
        assert_eq!(settings.url, "");
        assert_eq!(settings.injected_css, "");
        assert_eq!(settings.injected_js, "");
    }

    #[test]
    fn webpage_settings_round_trip_canonical_fields() {
        let value = json!({
            "autoReload": 30,
            "sessionPersist": "temp",
            "sessionScope": "wgt",
            "url": "https://example.com",
            "injectedCSS": "body{}",
            "injectedJS": "init();",
        });

        let settings = WebpageSettings::from_value(&value);
        assert_eq!(settings.auto_reload, 30);
        assert_eq!(settings.session_persist, SessionPersistence::Temporary);
        assert_eq!(settings.session_scope, SessionScope::Widget);
        assert_eq!(settings.to_value(), value);
    }

    #[test]
    fn note_settings_default_missing_fields() {
        let settings = NoteSettings::from_value(&json!({}));
        assert!(!settings.markdown);
        assert!(!settings.spell_check);

        let settings = NoteSettings::from_value(&json!({ "markdown": true }));
        assert!(settings.markdown);
    }
}
