//! Configuration management for acton-admin
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `ACTON_ADMIN_` prefix, `__` for nesting)
//! 2. `./admin.toml` (or an explicit file)
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # admin.toml
//! [templates]
//! template_dir = "./templates/admin"
//! theme = "default"
//!
//! [forms]
//! textarea_rows = 6
//! password_hash = "argon2"
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use acton_admin::config::AdminConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AdminConfig::load()?;
//! let theme = &config.templates.theme;
//! # Ok(())
//! # }
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Template lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Directory holding theme overrides (`<dir>/<theme>/column/text.html`)
    ///
    /// Falls back to `$XDG_CONFIG_HOME/acton-admin/templates` when unset.
    pub template_dir: Option<PathBuf>,

    /// Theme name
    pub theme: String,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            template_dir: None,
            theme: "default".to_string(),
        }
    }
}

/// How password fields treat submitted values before assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordHashing {
    /// Hash with Argon2id
    #[default]
    Argon2,
    /// Store as submitted
    None,
}

/// Form element defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Default number of textarea rows
    pub textarea_rows: u32,

    /// Default password treatment
    pub password_hash: PasswordHashing,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            textarea_rows: 10,
            password_hash: PasswordHashing::Argon2,
        }
    }
}

/// Complete acton-admin configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdminConfig {
    /// Template settings
    #[serde(default)]
    pub templates: TemplateSettings,

    /// Form settings
    #[serde(default)]
    pub forms: FormSettings,
}

impl AdminConfig {
    /// Load configuration from `./admin.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - `./admin.toml` exists but contains invalid TOML
    /// - Configuration values fail type conversion
    pub fn load() -> anyhow::Result<Self> {
        let local_config = PathBuf::from("./admin.toml");
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        let config = figment
            .merge(Env::prefixed("ACTON_ADMIN_").split("__").lowercase(true))
            .extract()?;
        tracing::debug!(?config, "loaded admin configuration");
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The file contains invalid TOML
    /// - Configuration values fail type conversion
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("ACTON_ADMIN_").split("__").lowercase(true))
            .extract()?;
        Ok(config)
    }

    /// XDG directory for user template overrides
    ///
    /// Returns `$XDG_CONFIG_HOME/acton-admin/templates` or
    /// `~/.config/acton-admin/templates` if not set.
    #[must_use]
    pub fn user_template_dir() -> Option<PathBuf> {
        let base = if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg)
        } else {
            dirs::home_dir()?.join(".config")
        };
        Some(base.join("acton-admin").join("templates"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AdminConfig::default();
        assert_eq!(config.templates.theme, "default");
        assert!(config.templates.template_dir.is_none());
        assert_eq!(config.forms.textarea_rows, 10);
        assert_eq!(config.forms.password_hash, PasswordHashing::Argon2);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            "[templates]\ntheme = \"dark\"\n\n[forms]\ntextarea_rows = 4\npassword_hash = \"none\""
        )
        .expect("write config");

        let config = AdminConfig::load_from(file.path()).expect("load config");
        assert_eq!(config.templates.theme, "dark");
        assert_eq!(config.forms.textarea_rows, 4);
        assert_eq!(config.forms.password_hash, PasswordHashing::None);
    }

    #[test]
    fn test_user_template_dir_resolution() {
        if let Some(path) = AdminConfig::user_template_dir() {
            assert!(path.to_string_lossy().contains("acton-admin"));
            assert!(path.ends_with("templates"));
        }
    }
}
