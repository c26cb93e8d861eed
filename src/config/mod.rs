//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the sidebar layout, the initial screen, theme preferences and
//! hotkey bindings.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, ShellHotkeys};

use crate::error::AppError;
use crate::sidebar::DEFAULT_DURATION_MS;
use crate::state::ScreenId;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/coop-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub sidebar_width: u16,
    pub animation_ms: u64,
    pub initial_screen: ScreenId,
    pub start_visible: bool,
    pub hotkeys: ShellHotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
    #[serde(default = "default_initial_screen")]
    pub initial_screen: ScreenId,
    #[serde(default = "default_start_visible")]
    pub start_visible: bool,
    #[serde(default)]
    pub hotkeys: ShellHotkeys,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_sidebar_width() -> u16 {
    28
}

fn default_animation_ms() -> u64 {
    DEFAULT_DURATION_MS
}

fn default_initial_screen() -> ScreenId {
    ScreenId::DashboardScreen
}

fn default_start_visible() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default values.
    ///
    pub fn new() -> Config {
        Config {
            file_path: None,
            theme_name: default_theme_name(),
            sidebar_width: default_sidebar_width(),
            animation_ms: default_animation_ms(),
            initial_screen: default_initial_screen(),
            start_visible: default_start_visible(),
            hotkeys: ShellHotkeys::default(),
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. If no file exists yet, write one with the default
    /// values at the default path or the custom path if provided.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        // Specify config file path
        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply(Config::parse(&contents)?);
        } else {
            self.save()?;
        }

        if self.sidebar_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sidebar_width",
                message: "must be at least 1".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Serialize the current configuration and write it to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let content = self.to_yaml()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the path of the loaded configuration file, if any.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    fn parse(contents: &str) -> Result<FileSpec, ConfigError> {
        serde_yaml::from_str(contents).map_err(|e| ConfigError::DeserializationFailed(e.to_string()))
    }

    fn to_yaml(&self) -> Result<String, ConfigError> {
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            sidebar_width: self.sidebar_width,
            animation_ms: self.animation_ms,
            initial_screen: self.initial_screen,
            start_visible: self.start_visible,
            hotkeys: self.hotkeys.clone(),
        };
        serde_yaml::to_string(&data).map_err(|e| ConfigError::SerializationFailed(e.to_string()))
    }

    fn apply(&mut self, data: FileSpec) {
        self.theme_name = data.theme_name;
        self.sidebar_width = data.sidebar_width;
        self.animation_ms = data.animation_ms;
        self.initial_screen = data.initial_screen;
        self.start_visible = data.start_visible;
        self.hotkeys = data.hotkeys;
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
