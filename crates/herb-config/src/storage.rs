//! Persistence substrate configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Sentinel value selecting the in-memory substrate (no persistence).
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory the file substrate keeps its data in.
    ///
    /// Empty = platform default (`<user data dir>/herbaria`).
    /// `":memory:"` = ephemeral in-memory substrate.
    #[serde(default)]
    pub data_dir: String,
}

impl StorageConfig {
    /// Whether the ephemeral in-memory substrate was requested.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.data_dir == IN_MEMORY
    }

    /// Resolve the on-disk data directory.
    ///
    /// Returns `None` for the in-memory substrate, or when no directory is
    /// configured and the platform exposes no user data dir (a
    /// non-interactive execution context) — callers degrade to the
    /// in-memory substrate in that case.
    #[must_use]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if self.is_in_memory() {
            return None;
        }
        if self.data_dir.is_empty() {
            return dirs::data_dir().map(|d| d.join("herbaria"));
        }
        Some(PathBuf::from(&self.data_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sentinel_resolves_to_none() {
        let config = StorageConfig {
            data_dir: IN_MEMORY.to_string(),
        };
        assert!(config.is_in_memory());
        assert!(config.resolved_dir().is_none());
    }

    #[test]
    fn explicit_dir_is_used_verbatim() {
        let config = StorageConfig {
            data_dir: "/tmp/herbaria-test".to_string(),
        };
        assert_eq!(
            config.resolved_dir(),
            Some(PathBuf::from("/tmp/herbaria-test"))
        );
    }

    #[test]
    fn empty_dir_falls_back_to_platform_default() {
        let config = StorageConfig::default();
        if let Some(dir) = config.resolved_dir() {
            assert!(dir.ends_with("herbaria"));
        }
    }
}
