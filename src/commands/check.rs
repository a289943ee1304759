use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::checker::{Checker, LeakChecker, ModuleReport};
use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::model::Module;
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, SarifFormatter,
    TextFormatter, count_diagnostics,
};
use crate::scanner::{DirectoryScanner, ManifestFilter, discover_manifests};
use crate::{EXIT_CONFIG_ERROR, EXIT_LEAKS_FOUND, EXIT_SUCCESS, Result, UnexportedGuardError};

use super::context::{color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs the leak check over every manifest named by `args`.
///
/// # Errors
/// Returns an error if configuration loading, manifest discovery or output
/// writing fails. Manifests that fail to load are reported on stderr and
/// reflected in the exit code instead.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);

    let manifests = collect_manifests(&args.paths, &config)?;
    let color_mode = color_choice_to_mode(cli.color);
    let errors = ErrorOutput::new(color_mode);
    if manifests.is_empty() && !cli.quiet {
        errors.print_warning("No module manifests found");
    }

    let checker = LeakChecker::new(config.checks);
    let outcome = check_manifests(&manifests, &checker);
    for failure in &outcome.failures {
        errors.print(failure);
    }

    let output = format_output(args.format, &outcome.reports, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    let diagnostics = count_diagnostics(&outcome.reports);
    tracing::info!(
        modules = outcome.reports.len(),
        failed = outcome.failures.len(),
        diagnostics,
        "check finished"
    );
    Ok(exit_code(diagnostics, outcome.failures.len(), args.warn_only))
}

/// Folds command-line switches into the loaded configuration.
///
/// Skip switches can only enable a skip; exclude patterns are appended.
pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    let checks = &mut config.checks;
    checks.skip_interfaces |= args.skip_interfaces;
    checks.skip_types |= args.skip_types;
    checks.skip_func_args |= args.skip_func_args;
    checks.skip_func_returns |= args.skip_func_returns;

    config.scanner.exclude.extend(args.exclude.iter().cloned());
}

pub(crate) fn collect_manifests(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let filter = ManifestFilter::new(&config.scanner.exclude)?;
    discover_manifests(paths, &DirectoryScanner::new(filter))
}

/// Reports for the manifests that loaded, and the errors of those that did not.
#[derive(Debug, Default)]
pub(crate) struct CheckOutcome {
    pub reports: Vec<ModuleReport>,
    pub failures: Vec<UnexportedGuardError>,
}

/// Loads and checks manifests in parallel. Reports and failures keep the
/// input order; a manifest that cannot be loaded does not stop the others.
pub(crate) fn check_manifests<C: Checker + Sync>(
    manifests: &[PathBuf],
    checker: &C,
) -> CheckOutcome {
    let results: Vec<Result<ModuleReport>> = manifests
        .par_iter()
        .map(|path| check_manifest(path, checker))
        .collect();

    let mut outcome = CheckOutcome::default();
    for (path, result) in manifests.iter().zip(results) {
        match result {
            Ok(report) => outcome.reports.push(report),
            Err(e) => {
                tracing::warn!(manifest = %path.display(), error = %e, "skipping manifest");
                outcome.failures.push(e);
            }
        }
    }
    outcome
}

fn check_manifest<C: Checker>(path: &Path, checker: &C) -> Result<ModuleReport> {
    let module = Module::load(path)?;
    let diagnostics = checker.check(&module);
    tracing::debug!(
        manifest = %path.display(),
        declarations = module.declarations.len(),
        diagnostics = diagnostics.len(),
        "checked module"
    );
    Ok(ModuleReport {
        source: path.to_path_buf(),
        module: module.module,
        declarations: module.declarations.len(),
        diagnostics,
    })
}

pub(crate) fn format_output(
    format: OutputFormat,
    reports: &[ModuleReport],
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
        OutputFormat::Sarif => SarifFormatter::new().format(reports),
    }
}

/// Unreadable manifests make the run incomplete, which outranks leaks.
pub(crate) const fn exit_code(diagnostics: usize, failures: usize, warn_only: bool) -> i32 {
    if failures > 0 {
        EXIT_CONFIG_ERROR
    } else if diagnostics > 0 && !warn_only {
        EXIT_LEAKS_FOUND
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
