use std::fs;

use crate::cli::InitArgs;
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, UnexportedGuardError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(UnexportedGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# unexported-guard configuration file

version = "1"

[checks]
# Never report a named type whose underlying type is an interface
skip_interfaces = false

# Do not check exported type declarations
skip_types = false

# Do not check parameters of exported functions and methods
skip_func_args = false

# Do not check results of exported functions and methods
skip_func_returns = false

[scanner]
# Manifests to ignore when walking directories (glob syntax,
# matched relative to each directory given on the command line)
exclude = [
    # "vendor/**",
    # "**/testdata/**",
]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
