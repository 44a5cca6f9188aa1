//! Tab width configuration
//!
//! Each kind of generator indents with its own width. Widths live in an explicit
//! [`TabSettings`] value handed to the generator rather than in a process-wide
//! store, so tests can build one inline. Settings can still be loaded from an
//! app-settings style key/value source where each generator kind owns one key
//! (`CSharpTabSize`, `SqlTabSize`, ...).

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Generator kind used to select an indentation width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabType {
    CSharp,
    Sql,
    JavaScript,
    Asp,
    Xml,
}

impl TabType {
    pub const ALL: [TabType; 5] = [
        TabType::CSharp,
        TabType::Sql,
        TabType::JavaScript,
        TabType::Asp,
        TabType::Xml,
    ];

    /// Name of the app setting holding this kind's tab width
    pub fn setting_key(self) -> &'static str {
        match self {
            TabType::CSharp => "CSharpTabSize",
            TabType::Sql => "SqlTabSize",
            TabType::JavaScript => "JavaScriptTabSize",
            TabType::Asp => "AspTabSize",
            TabType::Xml => "XmlTabSize",
        }
    }

    pub fn from_setting_key(key: &str) -> Option<TabType> {
        Self::ALL.into_iter().find(|t| t.setting_key() == key)
    }
}

impl fmt::Display for TabType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TabType::CSharp => "CSharp",
            TabType::Sql => "Sql",
            TabType::JavaScript => "JavaScript",
            TabType::Asp => "Asp",
            TabType::Xml => "Xml",
        };
        f.write_str(name)
    }
}

/// Tab widths per generator kind.
///
/// Widths are stored as configured; range checks happen when indentation is
/// rendered, so a configured width of 0 surfaces as an invalid-argument error
/// at that point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSettings {
    sizes: HashMap<TabType, i32>,
}

impl TabSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width for one generator kind
    pub fn with(mut self, tab_type: TabType, size: i32) -> Self {
        self.sizes.insert(tab_type, size);
        self
    }

    /// Build settings from app-settings style string pairs.
    ///
    /// Keys that do not name a [`TabType`] setting are ignored, since such
    /// stores usually carry unrelated entries. Values must parse as integers.
    pub fn from_app_settings<I, K, V>(settings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut sizes = HashMap::new();
        for (key, value) in settings {
            let key = key.as_ref();
            let Some(tab_type) = TabType::from_setting_key(key) else {
                tracing::trace!(key, "ignoring unrelated app setting");
                continue;
            };
            sizes.insert(tab_type, parse_size(key, value.as_ref())?);
        }
        Ok(Self { sizes })
    }

    /// Build settings from a JSON object keyed by setting name.
    ///
    /// Values may be integers or numeric strings:
    /// `{ "CSharpTabSize": 4, "SqlTabSize": "2" }`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let object: serde_json::Map<String, Value> = serde_json::from_str(json)?;

        let mut pairs = Vec::with_capacity(object.len());
        for (key, value) in object {
            if TabType::from_setting_key(&key).is_none() {
                tracing::trace!(key = %key, "ignoring unrelated setting");
                continue;
            }
            let raw = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                other => {
                    return Err(Error::MalformedTabSize {
                        key,
                        value: other.to_string(),
                    })
                }
            };
            pairs.push((key, raw));
        }

        Self::from_app_settings(pairs)
    }

    /// Configured width for a generator kind
    pub fn tab_size(&self, tab_type: TabType) -> Result<i32> {
        self.sizes
            .get(&tab_type)
            .copied()
            .ok_or_else(|| Error::MissingTabSize {
                key: tab_type.setting_key().to_string(),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

fn parse_size(key: &str, value: &str) -> Result<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| Error::MalformedTabSize {
            key: key.to_string(),
            value: value.to_string(),
        })
}
