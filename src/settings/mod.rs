//! Settings loading and validation for the mirugai application.
//!
//! A [`Settings`] value is assembled from hard-coded defaults, an optional
//! `.env` file, and process environment variables, in that override order,
//! then every field is validated. A failed field aborts construction as a
//! whole; no partially valid value is handed out.

mod error;
mod validate;

pub use error::SettingsError;

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Validated application settings.
///
/// Constructed once at startup via [`Settings::load`] and treated as
/// read-only state for the rest of the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The name of the application.
    pub app_name: String,
    /// The tagline of the application.
    pub app_tagline: String,
    /// The root directory of the application.
    pub root_dir: PathBuf,
    /// The path to the application logo image.
    pub app_logo_image: PathBuf,
    /// The logging level (DEBUG, INFO, WARNING, ERROR, or CRITICAL).
    pub log_level: String,
}

impl Settings {
    /// Load settings using the default installation root and `<root>/.env`.
    pub fn load() -> Result<Self, SettingsError> {
        let root_dir = default_root_dir()?;
        let env_file = default_env_file(&root_dir);
        Self::load_with(&root_dir, &env_file)
    }

    /// Load settings with an explicit installation root and env-file path.
    ///
    /// Override order, lowest to highest priority: defaults, env file,
    /// process environment variables. Keys from both override sources are
    /// matched case-insensitively against the field names. A missing env
    /// file is tolerated with a warning; defaults and environment variables
    /// still apply.
    pub fn load_with(root_dir: &Path, env_file: &Path) -> Result<Self, SettingsError> {
        let mut draft = Draft::with_defaults(root_dir);

        if env_file.exists() {
            let pairs = dotenvy::from_path_iter(env_file).map_err(|source| {
                SettingsError::EnvFile {
                    path: env_file.to_path_buf(),
                    source,
                }
            })?;
            for item in pairs {
                let (key, value) = item.map_err(|source| SettingsError::EnvFile {
                    path: env_file.to_path_buf(),
                    source,
                })?;
                draft.apply(&key, &value);
            }
        } else {
            warn!("{} does not exist", env_file.display());
        }

        for (key, value) in env::vars() {
            draft.apply(&key, &value);
        }

        draft.into_settings()
    }
}

/// Resolve the default installation root: two directory levels above the
/// running executable, as an absolute path.
pub fn default_root_dir() -> Result<PathBuf, SettingsError> {
    let exe = env::current_exe()
        .and_then(|path| path.canonicalize())
        .map_err(SettingsError::RootDir)?;
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            SettingsError::RootDir(io::Error::other("executable path has no grandparent"))
        })
}

/// Default env-file location under the installation root.
pub fn default_env_file(root_dir: &Path) -> PathBuf {
    root_dir.join(".env")
}

/// Raw field values collected from defaults, the env file, and the process
/// environment, prior to validation.
#[derive(Debug)]
struct Draft {
    app_name: String,
    app_tagline: String,
    root_dir: PathBuf,
    app_logo_image: PathBuf,
    log_level: String,
}

impl Draft {
    fn with_defaults(root_dir: &Path) -> Self {
        Self {
            app_name: "mirugai".to_string(),
            app_tagline: "Let's make some clams".to_string(),
            root_dir: root_dir.to_path_buf(),
            // Anchored to the default root; a ROOT_DIR override does not
            // move the logo default.
            app_logo_image: root_dir.join("logo.jpg"),
            log_level: "INFO".to_string(),
        }
    }

    /// Apply one `KEY=VALUE` override if the key names a settings field.
    fn apply(&mut self, key: &str, value: &str) {
        if key.eq_ignore_ascii_case("app_name") {
            self.app_name = value.to_string();
        } else if key.eq_ignore_ascii_case("app_tagline") {
            self.app_tagline = value.to_string();
        } else if key.eq_ignore_ascii_case("root_dir") {
            self.root_dir = PathBuf::from(value);
        } else if key.eq_ignore_ascii_case("app_logo_image") {
            self.app_logo_image = PathBuf::from(value);
        } else if key.eq_ignore_ascii_case("log_level") {
            self.log_level = value.to_string();
        }
    }

    /// Run the field validators in field order, failing on the first
    /// violation.
    fn into_settings(self) -> Result<Settings, SettingsError> {
        validate::app_name_not_empty(&self.app_name).map_err(|message| {
            SettingsError::Validation {
                field: "app_name",
                message,
            }
        })?;
        validate::path_exists(&self.root_dir).map_err(|message| SettingsError::Validation {
            field: "root_dir",
            message,
        })?;
        validate::log_level_known(&self.log_level).map_err(|message| {
            SettingsError::Validation {
                field: "log_level",
                message,
            }
        })?;

        Ok(Settings {
            app_name: self.app_name,
            app_tagline: self.app_tagline,
            root_dir: self.root_dir,
            app_logo_image: self.app_logo_image,
            log_level: self.log_level,
        })
    }
}
