//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Binaries read the environment and hand the raw values to the
//! `*_from_env_value` helpers here; nothing in request handling touches process-wide state.

use crate::constants::{DEFAULT_NOTES_DATA_DIR, NOTES_DIR_NAME};
use crate::{NotesError, NotesResult};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which [`NoteStore`](crate::store::NoteStore) implementation backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    /// JSON documents under the data directory.
    File,
    /// Process memory; lost on restart.
    Memory,
}

impl FromStr for StoreKind {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StoreKind::File),
            "memory" => Ok(StoreKind::Memory),
            other => Err(NotesError::InvalidConfig(format!(
                "unknown store kind '{}' (expected 'file' or 'memory')",
                other
            ))),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
    store_kind: StoreKind,
    empty_list_is_error: bool,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::InvalidConfig`] if `data_dir` is empty.
    pub fn new(
        data_dir: PathBuf,
        store_kind: StoreKind,
        empty_list_is_error: bool,
    ) -> NotesResult<Self> {
        if data_dir.as_os_str().is_empty() {
            return Err(NotesError::InvalidConfig(
                "data directory cannot be empty".into(),
            ));
        }

        Ok(Self {
            data_dir,
            store_kind,
            empty_list_is_error,
        })
    }

    /// Build a configuration from raw environment values, applying defaults for absent ones.
    pub fn from_env_values(
        data_dir: Option<String>,
        store_kind: Option<String>,
        empty_list_is_error: Option<String>,
    ) -> NotesResult<Self> {
        let data_dir = non_blank(data_dir).unwrap_or_else(|| DEFAULT_NOTES_DATA_DIR.into());
        Self::new(
            PathBuf::from(data_dir),
            store_kind_from_env_value(store_kind)?,
            flag_from_env_value("NOTES_EMPTY_LIST_IS_ERROR", empty_list_is_error, true)?,
        )
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.data_dir.join(NOTES_DIR_NAME)
    }

    pub fn store_kind(&self) -> StoreKind {
        self.store_kind
    }

    /// Whether listing an empty collection is reported as an error rather than `[]`.
    pub fn empty_list_is_error(&self) -> bool {
        self.empty_list_is_error
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the store kind from an optional string value.
///
/// If `value` is `None` or blank, the file store is used.
pub fn store_kind_from_env_value(value: Option<String>) -> NotesResult<StoreKind> {
    non_blank(value)
        .map(|v| v.parse::<StoreKind>())
        .transpose()
        .map(|kind| kind.unwrap_or(StoreKind::File))
}

/// Parse a boolean flag, accepting `true/false`, `1/0`, `yes/no` and `on/off`.
///
/// If `value` is `None` or blank, `default` is returned. `name` is only used in the error.
pub fn flag_from_env_value(name: &str, value: Option<String>, default: bool) -> NotesResult<bool> {
    let Some(value) = non_blank(value) else {
        return Ok(default);
    };

    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(NotesError::InvalidConfig(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let cfg = CoreConfig::from_env_values(None, None, None).expect("defaults should work");

        assert_eq!(cfg.data_dir(), Path::new(DEFAULT_NOTES_DATA_DIR));
        assert_eq!(cfg.store_kind(), StoreKind::File);
        assert!(cfg.empty_list_is_error());
        assert_eq!(
            cfg.notes_dir(),
            Path::new(DEFAULT_NOTES_DATA_DIR).join(NOTES_DIR_NAME)
        );
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let cfg = CoreConfig::from_env_values(Some("  ".into()), Some("".into()), Some(" ".into()))
            .expect("blank values should use defaults");

        assert_eq!(cfg.data_dir(), Path::new(DEFAULT_NOTES_DATA_DIR));
        assert_eq!(cfg.store_kind(), StoreKind::File);
        assert!(cfg.empty_list_is_error());
    }

    #[test]
    fn test_explicit_values() {
        let cfg = CoreConfig::from_env_values(
            Some("/tmp/notes".into()),
            Some("Memory".into()),
            Some("off".into()),
        )
        .expect("explicit values should parse");

        assert_eq!(cfg.data_dir(), Path::new("/tmp/notes"));
        assert_eq!(cfg.store_kind(), StoreKind::Memory);
        assert!(!cfg.empty_list_is_error());
    }

    #[test]
    fn test_rejects_unknown_store_kind() {
        let err = store_kind_from_env_value(Some("mongo".into())).expect_err("should fail");

        assert!(matches!(err, NotesError::InvalidConfig(msg) if msg.contains("mongo")));
    }

    #[test]
    fn test_rejects_non_boolean_flag() {
        let err = flag_from_env_value("FLAG", Some("maybe".into()), true).expect_err("should fail");

        assert!(matches!(err, NotesError::InvalidConfig(msg) if msg.contains("FLAG")));
    }

    #[test]
    fn test_new_rejects_empty_data_dir() {
        let err = CoreConfig::new(PathBuf::new(), StoreKind::File, true).expect_err("should fail");

        assert!(matches!(err, NotesError::InvalidConfig(_)));
    }
}
