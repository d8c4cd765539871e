//! Check command implementation.

use anyhow::{Context, Result};
use eclint_core::{
    Checker, FileReport, LintResult, Palette, Renderer, RuleBox, DEFAULT_SHOW_ERROR_QUANTITY,
};
use eclint_rules::{all_rules, rule_by_name};
use rayon::prelude::*;
use std::path::Path;

use crate::config_resolver::ConfigLocator;
use crate::editorconfig::Resolver;
use crate::{discovery, CheckArgs, EXIT_SUCCESS, EXIT_VIOLATIONS};

/// Runs the check command and returns the process exit code.
pub fn run(args: &CheckArgs, config_path: Option<&Path>) -> Result<u8> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let config = ConfigLocator::from_env(config_path).locate(&cwd).load()?;

    let show_error_quantity = if args.show_all_errors {
        None
    } else {
        Some(
            args.show_error_quantity
                .or(config.show_error_quantity)
                .unwrap_or(DEFAULT_SHOW_ERROR_QUANTITY),
        )
    };

    let rules = match &args.rules {
        Some(filter) => filter_rules(filter),
        None => all_rules(),
    };

    let mut builder = Checker::builder()
        .config(config)
        .excludes(args.exclude.iter().cloned())
        .rules(rules);
    if let Some(prefix) = &args.override_prefix {
        builder = builder.override_prefix(prefix.clone());
    }
    let checker = builder.build().context("Failed to build checker")?;

    let files = discovery::discover(&args.paths, &checker);
    tracing::info!(
        "Checking {} files with {} rules",
        files.len(),
        checker.rule_count()
    );

    let resolver = Resolver::new(&cwd);
    let result: LintResult = files
        .into_par_iter()
        .map(|path| match resolver.resolve(&path) {
            Ok(raw) => checker.check_file(&path, raw),
            Err(e) => {
                tracing::warn!("Cannot resolve settings for {}: {}", path.display(), e);
                FileReport::failed(path, e)
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect();

    let renderer = Renderer::new(Palette::new(args.color_mode()))
        .with_error_quantity(show_error_quantity)
        .with_summary(args.summary);
    super::output::print(&result, args.format, &renderer)?;

    tracing::info!(
        "Checked {} files: {} violations, {} failed",
        result.files_checked,
        result.violation_count(),
        result.failed_count()
    );

    Ok(if result.has_failures() {
        EXIT_VIOLATIONS
    } else {
        EXIT_SUCCESS
    })
}

fn filter_rules(filter: &str) -> Vec<RuleBox> {
    filter
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| {
            let rule = rule_by_name(name);
            if rule.is_none() {
                tracing::warn!("Unknown rule: {}", name);
            }
            rule
        })
        .collect()
}
