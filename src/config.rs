//! Editor configuration loaded from TOML.
//!
//! Every key is optional; missing keys take the defaults below.
//!
//! ```toml
//! tab_stop = 8
//! quit_times = 3
//! message_timeout_secs = 5
//! show_welcome = true
//! ```

use crate::document::DEFAULT_TAB_STOP;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Widest tab stop accepted.
pub const MAX_TAB_STOP: usize = 16;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "kite.toml";

/// Configuration for an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Tab stop width for rendering.
    pub tab_stop: usize,
    /// Extra Ctrl-Q presses required to quit with unsaved changes.
    pub quit_times: u32,
    /// How long a status message stays visible.
    pub message_timeout_secs: u64,
    /// Show the version banner when the document is empty.
    pub show_welcome: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: DEFAULT_TAB_STOP,
            quit_times: 3,
            message_timeout_secs: 5,
            show_welcome: true,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Load from an explicit path, else from [`DEFAULT_CONFIG_FILE`] in
    /// `dir` if present, else the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::load(&fallback)
        } else {
            Ok(Self::default())
        }
    }

    /// Message lifetime as a [`Duration`].
    pub const fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.message_timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.tab_stop == 0 {
            return Err(Error::InvalidConfig("tab_stop must be at least 1"));
        }
        if self.tab_stop > MAX_TAB_STOP {
            return Err(Error::InvalidConfig("tab_stop must be at most 16"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.tab_stop, 8);
        assert_eq!(config.quit_times, 3);
        assert_eq!(config.message_timeout(), Duration::from_secs(5));
        assert!(config.show_welcome);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EditorConfig::from_toml_str("tab_stop = 4\n").unwrap();
        assert_eq!(config.tab_stop, 4);
        assert_eq!(config.quit_times, 3);
    }

    #[test]
    fn test_zero_tab_stop_rejected() {
        let err = EditorConfig::from_toml_str("tab_stop = 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_oversized_tab_stop_rejected() {
        assert_eq!(EditorConfig::from_toml_str("tab_stop = 16").unwrap().tab_stop, 16);
        let err = EditorConfig::from_toml_str("tab_stop = 17").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        let err = EditorConfig::from_toml_str("tab_stop = 4611686018427387904").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = EditorConfig::from_toml_str("tabstop = 4").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(EditorConfig::discover(None, dir.path()).unwrap(), EditorConfig::default());

        let mut file = std::fs::File::create(dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        writeln!(file, "show_welcome = false").unwrap();
        assert!(!EditorConfig::discover(None, dir.path()).unwrap().show_welcome);

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            EditorConfig::discover(Some(&missing), dir.path()),
            Err(Error::Open { .. })
        ));
    }
}
