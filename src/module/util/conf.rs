//! Config Handler.

use serde::{Deserialize, Serialize};

/// Provides TOML config file handling.
pub mod toml {

    use super::DEFAULT_CONFIG;
    use crate::module::define;
    use std::fs::File;
    use std::io::prelude::*;
    use std::path::Path;

    /// Loads a configuration file from the given directory.
    /// If not found, generates a default config file.
    ///
    /// # Arguments
    ///
    /// * `dir` - The directory where the configuration file is located or should be created.
    ///
    pub fn load(dir: &str) -> super::Config {
        // Check if the config file exists
        let path = Path::new(dir).join(define::path::CONF_FILE);
        let exist: bool = path.is_file();

        if !exist {
            // Create the default config if it doesn't exist
            let config: super::Config = toml::from_str(DEFAULT_CONFIG).unwrap();
            let toml_str = toml::to_string(&config).unwrap();
            let mut file = File::create(&path).unwrap();
            file.write_all(toml_str.as_bytes()).unwrap();
        }

        // Load the config
        let conf_str: String = std::fs::read_to_string(&path).unwrap();
        let setting: Result<super::Config, toml::de::Error> = toml::from_str(&conf_str);

        match setting {
            Ok(conf) => conf,
            Err(e) => panic!("Failed to parse TOML: {}", e),
        }
    }

    /// Saves a configuration file to the given directory.
    ///
    /// # Arguments
    ///
    /// * `dir` - The directory where the configuration file should be saved.
    /// * `conf` - The configuration data to be saved.
    ///
    pub fn save(dir: &str, conf: &super::Config) {
        let toml_str = toml::to_string(conf).unwrap();
        let path = crate::module::util::path::join(&[dir, define::path::CONF_FILE]);
        let mut file = File::create(path).unwrap();
        file.write_all(toml_str.as_bytes()).unwrap();
    }
}

/// Represents the configuration data structure.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub system: System,
}

/// Represents system-related configuration parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct System {
    pub persistent_dir: String,
    pub ephemeral_dir: String,
    pub log_level: String,
}

// Default configuration data in TOML format
const DEFAULT_CONFIG: &str = r#"
[system]
  persistent_dir = '/data/photovault' # Directory for persistent data
  ephemeral_dir = '/run/user/1000/photovault' # Directory for ephemeral data
  log_level = 'INFO' # Log level (e.g., 'INFO', 'DEBUG')
"#;
