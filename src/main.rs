//! cfgaudit CLI binary entry point.
//! Resolves settings, runs the scan, and prints findings and diagnostics.
//! Always exits 0 once arguments parse; scan problems are reported, not fatal.

use cfgaudit::cli::Cli;
use cfgaudit::config::{self, CliOverrides};
use cfgaudit::{ignore, output, scan};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("cfgaudit={}", level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let overrides = CliOverrides {
        dirs: &cli.dirs,
        ignore: cli.ignore.as_deref(),
        json: cli.json,
        sort: cli.sort,
        skip_empty_ignore: cli.skip_empty_ignore,
    };
    let (eff, cfg_err) =
        config::resolve_effective(&overrides, cli.config.as_deref().map(Path::new), &cwd);
    if let Some(e) = cfg_err {
        eprintln!("{} {}", cfgaudit::utils::error_prefix(), e);
        eprintln!(
            "{} {}",
            cfgaudit::utils::note_prefix(),
            "Continuing with command-line flags and defaults."
        );
    }

    let (mut patterns, ignore_errors) = ignore::load_ignore_patterns(eff.ignore.as_deref());
    output::print_diagnostics(&ignore_errors, eff.output);
    if eff.skip_empty_ignore {
        patterns = ignore::drop_empty(patterns);
    }

    let (mut findings, scan_errors) = scan::run_scan(&eff.roots, &patterns);
    output::print_diagnostics(&scan_errors, eff.output);
    if eff.sort {
        scan::sort_findings(&mut findings);
    }

    if let Some(e) = output::print_findings(&findings, eff.output) {
        output::print_diagnostics(&[e], eff.output);
    }
}
