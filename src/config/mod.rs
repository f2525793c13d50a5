use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the session store (a JSON array file).
    pub store: String,
    /// Target duration used by `add` when none is given.
    #[serde(default = "default_target")]
    pub default_target: String,
    /// Whether store operations are appended to the operations log.
    #[serde(default = "default_log_operations")]
    pub log_operations: bool,
}

fn default_target() -> String {
    "5m".to_string()
}

fn default_log_operations() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            default_target: default_target(),
            log_operations: default_log_operations(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("walklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".walklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("walklog.conf")
    }

    /// Return the full path of the default session store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("sessions.json")
    }

    /// Return the full path of the operations log
    pub fn log_file() -> PathBuf {
        Self::config_dir().join("walklog.log")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A broken config file is reported and replaced by defaults rather
    /// than aborting the whole command.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!("Ignoring unreadable config file ({}): {}", path.display(), e));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!("Ignoring unreadable config file ({}): {}", path.display(), e));
                Self::default()
            }
        }
    }

    /// Initialize configuration and session store files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store name: user provided or default
        let store_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file()
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            default_target: default_target(),
            log_operations: default_log_operations(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty store file if not exists
        if !store_path.exists() {
            if let Some(parent) = store_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&store_path, "[]\n")?;
        }

        println!("✅ Session store: {:?}", store_path);

        Ok(())
    }
}
