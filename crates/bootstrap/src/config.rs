//! Bootstrap configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Where saved builds live.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BuildStore {
    /// Builds are lost when the process exits.
    #[default]
    Memory,
    /// One JSON file per build under this directory.
    Files(PathBuf),
}

/// Configuration required to assemble a [`planner_runtime::Planner`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Directory holding `items.ron`/`items.json` and an optional `config.toml`.
    pub content_dir: Option<PathBuf>,
    /// Explicit catalog file; takes precedence over `content_dir`.
    pub catalog_path: Option<PathBuf>,
    /// Explicit planner configuration; takes precedence over `content_dir`.
    pub config_path: Option<PathBuf>,
    pub build_store: BuildStore,
    pub event_buffer: usize,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            catalog_path: None,
            config_path: None,
            build_store: BuildStore::Memory,
            event_buffer: planner_runtime::EventBus::DEFAULT_CAPACITY,
        }
    }
}

impl BootstrapConfig {
    /// Construct configuration from process environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// Environment variables:
    /// - `PLANNER_CONTENT_DIR` - Directory with the item catalog and `config.toml`
    /// - `PLANNER_CATALOG` - Item catalog file (`.ron` or `.json`)
    /// - `PLANNER_CONFIG` - Planner configuration file (TOML)
    /// - `PLANNER_DATA_DIR` - Store builds as files in this directory
    /// - `PLANNER_PERSIST` - Store builds in the platform data directory (`true`/`1`/`yes`/`on`, default: off)
    /// - `PLANNER_EVENT_BUFFER` - Change-event buffer per topic (default: 64)
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let path = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        config.content_dir = path("PLANNER_CONTENT_DIR");
        config.catalog_path = path("PLANNER_CATALOG");
        config.config_path = path("PLANNER_CONFIG");

        if let Some(capacity) = parse::<usize>(lookup("PLANNER_EVENT_BUFFER")) {
            config.event_buffer = capacity.max(1);
        }

        config.build_store = if let Some(dir) = path("PLANNER_DATA_DIR") {
            BuildStore::Files(dir)
        } else if persist_requested(lookup("PLANNER_PERSIST")) {
            BuildStore::Files(default_build_dir())
        } else {
            BuildStore::Memory
        };

        config
    }

    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = Some(dir.into());
        self
    }

    pub fn with_build_store(mut self, store: BuildStore) -> Self {
        self.build_store = store;
        self
    }
}

/// Platform data directory for saved builds.
///
/// - macOS: `~/Library/Application Support/build-planner/builds`
/// - Linux: `~/.local/share/build-planner/builds` (or `$XDG_DATA_HOME`)
/// - Windows: `%APPDATA%\build-planner\builds`
/// - Fallback: `./save_data/builds`
pub fn default_build_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "build-planner")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join("builds")
}

/// `true`, `1`, `yes`, `on` (any case) or a bare `PLANNER_PERSIST=` enable persistence.
fn persist_requested(value: Option<String>) -> bool {
    let Some(value) = value else {
        return false;
    };
    let value = value.trim().to_ascii_lowercase();
    value.is_empty() || matches!(value.as_str(), "true" | "1" | "yes" | "on")
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
