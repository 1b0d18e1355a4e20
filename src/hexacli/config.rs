use std::env;
use std::path::PathBuf;

/// Environment variable naming the data file.
pub const DATA_FILE_ENV: &str = "HEXACLI_FILE";
const DEFAULT_DATA_FILE: &str = "./data.txt";

/// Process-wide settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl AppConfig {
    /// Resolve the data file: explicit flag, then `HEXACLI_FILE`, then `./data.txt`.
    pub fn resolve(file_flag: Option<PathBuf>) -> Self {
        Self::resolve_with(file_flag, env::var(DATA_FILE_ENV).ok())
    }

    /// Resolution with the environment value passed in, so it can be tested
    /// without touching the process environment.
    ///
    /// An empty environment value counts as unset. An explicit flag is taken
    /// as given, even when empty; the store rejects an empty path later.
    pub fn resolve_with(file_flag: Option<PathBuf>, env_value: Option<String>) -> Self {
        if let Some(path) = file_flag {
            return Self { data_file: path };
        }

        match env_value {
            Some(value) if !value.is_empty() => Self {
                data_file: PathBuf::from(value),
            },
            _ => Self::default(),
        }
    }
}
