//! Configuration discovery and effective settings resolution.
//!
//! cfgaudit reads `cfgaudit.toml|yaml|yml` from the working directory, or
//! the file named by `--config`, and merges it with CLI flags to produce an
//! `Effective` config.
//! Defaults:
//! - `dirs`: `/etc/apache2`, `/etc/nginx`, `/etc/ssh`, `/etc/mysql`
//! - `ignore`: none
//! - `output`: `text`
//! - `sort`: false
//! - `skip_empty_ignore`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::ScanError;
use crate::output::OutputMode;
use crate::scan::DEFAULT_ROOTS;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: &[&str] = &["cfgaudit.toml", "cfgaudit.yaml", "cfgaudit.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `cfgaudit.toml|yaml`.
pub struct AuditConfig {
    #[serde(default)]
    pub dirs: Option<Vec<String>>,
    pub ignore: Option<String>,
    pub output: Option<OutputMode>,
    pub sort: Option<bool>,
    pub skip_empty_ignore: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the binary after applying precedence.
pub struct Effective {
    pub roots: Vec<PathBuf>,
    pub ignore: Option<PathBuf>,
    pub output: OutputMode,
    pub sort: bool,
    pub skip_empty_ignore: bool,
}

/// Flags as parsed from the command line; `None`/empty means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides<'a> {
    pub dirs: &'a [String],
    pub ignore: Option<&'a str>,
    pub json: bool,
    pub sort: bool,
    pub skip_empty_ignore: bool,
}

/// Find the first `cfgaudit.{toml,yaml,yml}` in `dir`.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_NAMES
        .iter()
        .map(|n| dir.join(n))
        .find(|p| p.is_file())
}

/// Parse a config file, choosing the format from its extension.
pub fn load_config(path: &Path) -> Result<AuditConfig, ScanError> {
    let err = |message: String| ScanError::Config {
        path: path.to_path_buf(),
        message,
    };
    let s = fs::read_to_string(path).map_err(|e| err(e.to_string()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&s).map_err(|e| err(e.to_string())),
        _ => toml::from_str(&s).map_err(|e| err(e.to_string())),
    }
}

/// Resolve `Effective` by merging CLI flags, the config file, and defaults.
///
/// `config_path` is the explicit `--config`; otherwise `cwd` is searched.
/// A config that fails to load is returned as an error next to a result
/// built from CLI flags and defaults only.
pub fn resolve_effective(
    cli: &CliOverrides<'_>,
    config_path: Option<&Path>,
    cwd: &Path,
) -> (Effective, Option<ScanError>) {
    let path = config_path
        .map(Path::to_path_buf)
        .or_else(|| discover_config(cwd));
    let (cfg, error) = match path {
        Some(p) => match load_config(&p) {
            Ok(cfg) => {
                tracing::debug!(path = %p.display(), "loaded config");
                (cfg, None)
            }
            Err(e) => (AuditConfig::default(), Some(e)),
        },
        None => (AuditConfig::default(), None),
    };

    let roots: Vec<PathBuf> = if !cli.dirs.is_empty() {
        cli.dirs.iter().map(PathBuf::from).collect()
    } else if let Some(dirs) = cfg.dirs.filter(|d| !d.is_empty()) {
        dirs.into_iter().map(PathBuf::from).collect()
    } else {
        DEFAULT_ROOTS.iter().map(PathBuf::from).collect()
    };

    let ignore = cli
        .ignore
        .map(str::to_string)
        .or(cfg.ignore)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);

    let output = if cli.json {
        OutputMode::Json
    } else {
        cfg.output.unwrap_or_default()
    };

    let effective = Effective {
        roots,
        ignore,
        output,
        sort: cli.sort || cfg.sort.unwrap_or(false),
        skip_empty_ignore: cli.skip_empty_ignore || cfg.skip_empty_ignore.unwrap_or(false),
    };
    (effective, error)
}
