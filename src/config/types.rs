//! Configuration types for acemask
//!
//! This module defines the configuration structure that can be loaded from
//! TOML files and/or environment variables.

use crate::ace::Ace;
use crate::error::{ConfigError, MaskError};
use crate::mask::{Mask, MaskValue};
use serde::Deserialize;
use tracing::warn;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AclConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Access control entries, in order
    pub entries: Vec<AceEntryConfig>,
}

impl AclConfig {
    /// Build every configured entry, stopping at the first invalid one
    pub fn build_entries(&self) -> Result<Vec<Ace>, ConfigError> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .build()
                    .inspect_err(|e| warn!(index, error = %e, "Rejected ACE entry"))
                    .map_err(|source| ConfigError::Entry { index, source })
            })
            .collect()
    }
}

/// One configured access control entry
///
/// Mask fields accept an integer, a name, or a list of either.
#[derive(Debug, Clone, Deserialize)]
pub struct AceEntryConfig {
    /// ACE type (default: allow)
    #[serde(rename = "type", default = "default_ace_type")]
    pub ace_type: MaskValue,

    /// Permissions
    #[serde(default)]
    pub access: Option<MaskValue>,

    /// Flags valid for the entry's type
    #[serde(default)]
    pub flags: Option<MaskValue>,

    /// Security identifier
    #[serde(default)]
    pub sid: Option<String>,

    /// Whether the SID names a group (ignored for special identifiers)
    #[serde(default)]
    pub group: bool,
}

fn default_ace_type() -> MaskValue {
    MaskValue::Name("allow".to_string())
}

impl AceEntryConfig {
    /// Build the entry
    pub fn build(&self) -> Result<Ace, MaskError> {
        let mut ace = Ace::new(self.ace_type.clone())?;

        if let Some(access) = &self.access {
            ace.access_mut().add(access.clone())?;
        }

        if let Some(flags) = &self.flags {
            ace.flag_mut().add(flags.clone())?;
        }

        if let Some(sid) = &self.sid {
            ace.set_sid(sid.as_str(), self.group);
        }

        Ok(ace)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::{AccessMask, AceType, FlagMask};

    #[test]
    fn test_default_config() {
        let config = AclConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.entries.is_empty());
    }

    #[test]
    fn test_deserialize_log_format() {
        let format: LogFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, LogFormat::Json);

        let format: LogFormat = serde_json::from_str(r#""pretty""#).unwrap();
        assert_eq!(format, LogFormat::Pretty);
    }

    #[test]
    fn test_entry_build() {
        let entry: AceEntryConfig = serde_json::from_str(
            r#"{"type": "deny", "access": ["view", 4], "flags": "inherit", "sid": "everyone"}"#,
        )
        .unwrap();

        let ace = entry.build().unwrap();
        assert_eq!(ace.ace_type(), AceType::Denied);
        assert_eq!(ace.access().get(), AccessMask::VIEW | AccessMask::MODIFY);
        assert_eq!(ace.flag().get(), FlagMask::INHERIT);
        assert_eq!(ace.sid().get(), Some("EVERYONE@"));
    }

    #[test]
    fn test_entry_defaults_to_allow() {
        let entry: AceEntryConfig = serde_json::from_str(r#"{"sid": "admins", "group": true}"#)
            .unwrap();

        let ace = entry.build().unwrap();
        assert_eq!(ace.ace_type(), AceType::Allowed);
        assert!(ace.is_group_sid());
    }

    #[test]
    fn test_build_entries_reports_index() {
        let config = AclConfig {
            entries: vec![
                serde_json::from_str(r#"{"access": "view"}"#).unwrap(),
                serde_json::from_str(r#"{"type": "audit", "flags": "inherit"}"#).unwrap(),
            ],
            ..Default::default()
        };

        let err = config.build_entries().unwrap_err();
        assert!(matches!(err, ConfigError::Entry { index: 1, .. }));
    }
}
