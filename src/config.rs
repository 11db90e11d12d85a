//! Process configuration.
//!
//! The document root is the single positional argument. Everything else has
//! a default and can be overridden from a YAML file named by the
//! `MICRO_HTTPD_CONFIG` environment variable.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::error::Failure;
use crate::http::line::MAX_LINE_LEN;
use crate::http::writer::CHUNK_SIZE;

/// Environment variable holding the path of the optional settings file.
pub const CONFIG_ENV: &str = "MICRO_HTTPD_CONFIG";

pub const DEFAULT_SERVER_NAME: &str = "micro_httpd";
pub const DEFAULT_SERVER_URL: &str = "https://github.com/socram8888/micro_httpd";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no directory specified")]
    MissingRoot,

    #[error("cannot read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid server_url: {0}")]
    ServerUrl(#[from] url::ParseError),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

impl From<&ConfigError> for Failure {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingRoot => Failure::no_directory(),
            _ => Failure::invalid_settings(),
        }
    }
}

/// Identity shown in the `Server` header and page footers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerInfo {
    pub name: String,
    pub url: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

/// Tunables read from the settings file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub server_name: String,
    pub server_url: String,
    /// Longest accepted request or header line, terminator excluded
    pub max_line_len: usize,
    /// Chunk size for copying file bodies
    pub chunk_size: usize,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_name: DEFAULT_SERVER_NAME.to_string(),
            server_url: DEFAULT_SERVER_URL.to_string(),
            max_line_len: MAX_LINE_LEN,
            chunk_size: CHUNK_SIZE,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_yaml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read { path, source })?;
        Self::from_yaml(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.server_url)?;
        if self.max_line_len == 0 {
            return Err(ConfigError::Zero("max_line_len"));
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::Zero("chunk_size"));
        }
        self.log_level
            .parse::<tracing::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))?;
        Ok(())
    }

    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    pub fn server_info(&self) -> ServerInfo {
        ServerInfo {
            name: self.server_name.clone(),
            url: self.server_url.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Directory the process serves from
    pub root: PathBuf,
    pub settings: Settings,
}

impl Config {
    /// Reads the command line and the `MICRO_HTTPD_CONFIG` file, if any.
    pub fn load() -> Result<Self, ConfigError> {
        let settings_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::from_args(std::env::args_os().skip(1), settings_path)
    }

    /// Builds a config from positional arguments (program name excluded).
    ///
    /// Anything other than exactly one argument is an error.
    pub fn from_args<I>(args: I, settings_path: Option<PathBuf>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let root = match (args.next(), args.next()) {
            (Some(root), None) => PathBuf::from(root),
            _ => return Err(ConfigError::MissingRoot),
        };

        let settings = match settings_path {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };

        Ok(Self { root, settings })
    }
}
