//! Template loader with theme resolution and reload support

use minijinja::{Environment, ErrorKind, Value};
use parking_lot::RwLock;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use super::{view_file, BUILTIN_TEMPLATES};
use crate::config::{AdminConfig, TemplateSettings};

/// Errors that can occur when loading or rendering templates
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file could not be read
    #[error("failed to read template '{0}': {1}")]
    ReadFailed(String, std::io::Error),

    /// No template exists for the view
    #[error("template not found: {0}")]
    NotFound(String),

    /// Template compilation or rendering failed
    #[error("template render error: {0}")]
    RenderError(#[from] minijinja::Error),
}

/// Thread-safe template environment for one theme
///
/// Cloning shares the underlying environment, so a reload is visible to
/// every clone.
#[derive(Debug, Clone)]
pub struct Templates {
    env: Arc<RwLock<Environment<'static>>>,
    theme_dir: Option<PathBuf>,
}

impl Templates {
    /// Templates with only the built-in defaults
    ///
    /// # Errors
    ///
    /// Returns error if a built-in template fails to compile.
    pub fn builtin() -> Result<Self, TemplateError> {
        Ok(Self {
            env: Arc::new(RwLock::new(Self::create_environment(None)?)),
            theme_dir: None,
        })
    }

    /// Templates for the configured theme
    ///
    /// # Errors
    ///
    /// Returns error if an override cannot be read or a template fails to compile.
    pub fn from_settings(settings: &TemplateSettings) -> Result<Self, TemplateError> {
        let theme_dir = settings
            .template_dir
            .clone()
            .or_else(AdminConfig::user_template_dir)
            .map(|dir| dir.join(&settings.theme));

        let env = Self::create_environment(theme_dir.as_ref())?;
        tracing::debug!(theme = %settings.theme, dir = ?theme_dir, "admin templates loaded");

        Ok(Self {
            env: Arc::new(RwLock::new(env)),
            theme_dir,
        })
    }

    fn create_environment(theme_dir: Option<&PathBuf>) -> Result<Environment<'static>, TemplateError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        for (name, builtin) in BUILTIN_TEMPLATES {
            let content = Self::load_template_content(name, theme_dir)?
                .unwrap_or_else(|| (*builtin).to_string());
            env.add_template_owned((*name).to_string(), content)?;
        }

        // Theme-only views (no built-in counterpart) are picked up too
        if let Some(dir) = theme_dir {
            for name in Self::extra_theme_templates(dir) {
                let path = dir.join(&name);
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| TemplateError::ReadFailed(name.clone(), e))?;
                env.add_template_owned(name, content)?;
            }
        }

        Ok(env)
    }

    fn load_template_content(
        name: &str,
        theme_dir: Option<&PathBuf>,
    ) -> Result<Option<String>, TemplateError> {
        let Some(dir) = theme_dir else {
            return Ok(None);
        };

        let path = dir.join(name);
        if !path.exists() {
            return Ok(None);
        }

        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| TemplateError::ReadFailed(name.to_string(), e))
    }

    fn extra_theme_templates(dir: &Path) -> Vec<String> {
        let mut found = Vec::new();
        let mut pending = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            let Ok(entries) = std::fs::read_dir(&current) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                    continue;
                }
                let Ok(relative) = path.strip_prefix(dir) else {
                    continue;
                };
                let name = relative.to_string_lossy().replace('\\', "/");
                let is_builtin = BUILTIN_TEMPLATES.iter().any(|(builtin, _)| *builtin == name);
                if name.ends_with(".html") && !is_builtin {
                    found.push(name);
                }
            }
        }

        found.sort();
        found
    }

    /// Whether a view can be rendered
    #[must_use]
    pub fn has_view(&self, view: &str) -> bool {
        self.env.read().get_template(&view_file(view)).is_ok()
    }

    /// Render a view with any serializable context
    ///
    /// Safe strings inside a map of [`Value`]s keep their markup.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] for unknown views, or a render error.
    pub fn render<S: Serialize>(&self, view: &str, ctx: S) -> Result<String, TemplateError> {
        let file = view_file(view);
        let env = self.env.read();
        let template = env.get_template(&file).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                TemplateError::NotFound(view.to_string())
            } else {
                TemplateError::RenderError(e)
            }
        })?;

        tracing::trace!(view, "rendering admin view");
        Ok(template.render(ctx)?)
    }

    /// Render a view with a JSON payload
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] for unknown views, or a render error.
    pub fn render_json(&self, view: &str, payload: &serde_json::Value) -> Result<String, TemplateError> {
        self.render(view, Value::from_serialize(payload))
    }

    /// Reload all templates from disk
    ///
    /// Creates a new environment and atomically swaps it with the current one.
    ///
    /// # Errors
    ///
    /// Returns error if templates cannot be reloaded.
    pub fn reload(&self) -> Result<(), TemplateError> {
        let new_env = Self::create_environment(self.theme_dir.as_ref())?;
        *self.env.write() = new_env;

        tracing::debug!("admin templates reloaded");
        Ok(())
    }

    /// Directory overrides are read from, if any
    #[must_use]
    pub const fn theme_dir(&self) -> Option<&PathBuf> {
        self.theme_dir.as_ref()
    }
}
