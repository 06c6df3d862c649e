//! Configuration management module.
//!
//! This module handles loading, saving, and managing the dashboard
//! configuration: the board elements, the feed API endpoint, and the theme
//! preference.

mod error;

pub use error::ConfigError;

use crate::board::Element;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/homedash-tui";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub title: String,
    pub api_url: String,
    pub api_token: Option<String>,
    pub theme_name: String,
    pub elements: Vec<Element>,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

fn default_title() -> String {
    "Dashboard".to_string()
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Config {
    /// Return a new empty instance.
    ///
    pub fn new() -> Config {
        Config {
            file_path: None,
            title: default_title(),
            api_url: default_api_url(),
            api_token: None,
            theme_name: default_theme_name(),
            elements: vec![],
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file is not an error: the board starts
    /// empty and the file is written on the first change.
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
        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        // If file exists, read the board and connection settings from it
        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.title = data.title;
            self.api_url = data.api_url;
            self.api_token = data.api_token;
            self.theme_name = data.theme_name;
            self.elements = data.elements;
        }

        Ok(())
    }

    /// Attempt to serialize the configuration data and write it to the disk,
    /// returning any unrecoverable errors.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        let data = FileSpec {
            title: self.title.clone(),
            api_url: self.api_url.clone(),
            api_token: self.api_token.clone(),
            theme_name: self.theme_name.clone(),
            elements: self.elements.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

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
