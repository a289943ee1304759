mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem, parse_config,
};
pub use model::{CONFIG_VERSION, ChecksConfig, Config, ScannerConfig};
pub use validation::{build_exclude_set, validate_config_semantics};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
