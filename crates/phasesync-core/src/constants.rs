//! Shared constants for PhaseSync.

/// PhaseSync version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum file size in bytes for scanning (default: 1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// Default number of threads (0 = auto-detect).
pub const DEFAULT_THREADS: usize = 0;

/// Project-level config file name, looked up in the scanned root.
pub const PROJECT_CONFIG_FILE: &str = "phasesync.toml";

/// User-level config directory under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".phasesync";

/// Project-specific ignore file, gitignore syntax.
pub const IGNORE_FILE: &str = ".phasesyncignore";

/// Default location of the persisted symbol map, relative to the working directory.
pub const DEFAULT_SYMBOL_MAP_PATH: &str = "data/symbol_map.json";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "PHASESYNC_LOG";

/// Filter used when `PHASESYNC_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "phasesync=info";

/// Weight returned by phase lookups that find nothing.
pub const UNKNOWN_WEIGHT: &str = "0";

/// Source file extensions scanned when the config does not list any.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "py", "pyi", "rs", "ts", "tsx", "js", "jsx", "mjs", "go", "java", "kt", "rb", "php", "cs",
    "c", "h", "cpp", "hpp", "cc", "swift", "scala",
];
