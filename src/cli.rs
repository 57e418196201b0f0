//! CLI argument parsing via `clap`.

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "cfgaudit",
    version,
    about = "Flag insecure settings in web server, SSH, and database configs",
    long_about = "cfgaudit — walk directories for apache2.conf, nginx.conf, sshd_config and my.cnf, and report lines containing known insecure settings.\n\nScan and I/O errors are reported but never change the exit status.\n\nConfiguration precedence: CLI > cfgaudit.toml > defaults.",
    after_help = "Examples:\n  cfgaudit\n  cfgaudit --dir /etc/ssh --dir /srv/nginx\n  cfgaudit --dir ./fixtures --ignore audit-ignore.txt --json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(
        long = "dir",
        value_name = "PATH",
        action = ArgAction::Append,
        help = "Directory to scan (repeatable; default: /etc/apache2 /etc/nginx /etc/ssh /etc/mysql)"
    )]
    pub dirs: Vec<String>,
    #[arg(long, action = ArgAction::SetTrue, help = "Output results as a JSON array")]
    pub json: bool,
    #[arg(long, value_name = "PATH", help = "File of literal substrings; matching lines are not reported")]
    pub ignore: Option<String>,
    #[arg(long, action = ArgAction::SetTrue, help = "Sort findings by file then line before printing")]
    pub sort: bool,
    #[arg(long, action = ArgAction::SetTrue, help = "Drop blank lines from the ignore file instead of ignoring every line")]
    pub skip_empty_ignore: bool,
    #[arg(long, value_name = "PATH", help = "Config file (default: ./cfgaudit.{toml,yaml,yml} if present)")]
    pub config: Option<String>,
    #[arg(short, long, action = ArgAction::Count, help = "Log progress to stderr (-v info, -vv debug)")]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repeated_dirs_and_flags() {
        let cli = Cli::parse_from([
            "cfgaudit", "--dir", "/a", "--dir", "/b", "--json", "--ignore", "ign.txt", "-vv",
        ]);
        assert_eq!(cli.dirs, vec!["/a", "/b"]);
        assert!(cli.json);
        assert_eq!(cli.ignore.as_deref(), Some("ign.txt"));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.sort);
    }

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::parse_from(["cfgaudit"]);
        assert!(cli.dirs.is_empty());
        assert!(!cli.json);
        assert!(cli.ignore.is_none());
        assert!(cli.config.is_none());
    }
}
