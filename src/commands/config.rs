use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, parse_config};
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, UnexportedGuardError};

use super::context::{color_choice_to_mode, load_config};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            format!("Configuration is valid: {}\n", config.display())
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli.no_config)
        }
    };

    match result {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, declares
/// an unsupported version, or has an invalid exclude pattern.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(UnexportedGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|source| {
        UnexportedGuardError::FileRead {
            path: config_path.to_path_buf(),
            source,
        }
    })?;
    parse_config(&content)?;
    Ok(())
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let config = load_config(config_path, no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    if let Some(version) = &config.version {
        let _ = writeln!(output, "version = \"{version}\"\n");
    }

    output.push_str("[checks]\n");
    let checks = &config.checks;
    let _ = writeln!(output, "  skip_interfaces = {}", checks.skip_interfaces);
    let _ = writeln!(output, "  skip_types = {}", checks.skip_types);
    let _ = writeln!(output, "  skip_func_args = {}", checks.skip_func_args);
    let _ = writeln!(output, "  skip_func_returns = {}", checks.skip_func_returns);

    output.push_str("\n[scanner]\n");
    let _ = writeln!(output, "  exclude = {:?}", config.scanner.exclude);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
