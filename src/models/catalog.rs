//! Static rule catalog: recognized config filenames and the insecure
//! settings flagged in each.
//!
//! Matching is by plain string suffix on the full path, so
//! `/etc/nginx/sites/nginx.conf` matches `nginx.conf`. The table is
//! read-only for the lifetime of the process and shared freely across
//! scan workers.

use super::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A literal substring flagged with a severity.
pub struct ConfigPattern {
    pub pattern: &'static str,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Rules applying to files whose path ends with `filename`.
pub struct ConfigCheck {
    pub filename: &'static str,
    pub patterns: &'static [ConfigPattern],
}

const fn rule(pattern: &'static str, severity: Severity) -> ConfigPattern {
    ConfigPattern { pattern, severity }
}

pub static CATALOG: &[ConfigCheck] = &[
    ConfigCheck {
        filename: "apache2.conf",
        patterns: &[
            rule("ServerTokens OS", Severity::Medium),
            rule("ServerSignature On", Severity::Medium),
            rule("TraceEnable On", Severity::High),
            rule("AllowOverride All", Severity::Medium),
            rule("Options All", Severity::Medium),
        ],
    },
    ConfigCheck {
        filename: "nginx.conf",
        patterns: &[
            rule("server_tokens on", Severity::Medium),
            rule("autoindex on", Severity::Low),
            rule("ssl_protocols TLSv1 TLSv1.1", Severity::High),
        ],
    },
    ConfigCheck {
        filename: "sshd_config",
        patterns: &[
            rule("PermitRootLogin yes", Severity::High),
            rule("PasswordAuthentication yes", Severity::Medium),
            rule("X11Forwarding yes", Severity::Low),
            rule("PermitEmptyPasswords yes", Severity::High),
        ],
    },
    ConfigCheck {
        filename: "my.cnf",
        patterns: &[
            rule("skip-networking", Severity::Low),
            rule("bind-address = 0.0.0.0", Severity::Medium),
            rule("local-infile=1", Severity::Medium),
        ],
    },
];

/// Every catalog entry whose filename is a suffix of `path`, in catalog order.
pub fn matching_checks(path: &str) -> Vec<&'static ConfigCheck> {
    CATALOG
        .iter()
        .filter(|c| path.ends_with(c.filename))
        .collect()
}

/// Flattened pattern list of all checks matching `path`.
pub fn patterns_for(path: &str) -> Vec<ConfigPattern> {
    matching_checks(path)
        .into_iter()
        .flat_map(|c| c.patterns.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_match_on_nested_path() {
        let checks = matching_checks("/etc/nginx/sites/nginx.conf");
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].filename, "nginx.conf");
    }

    #[test]
    fn test_suffix_match_is_not_component_aware() {
        // plain string suffix, like the path comparison it models
        assert_eq!(matching_checks("/srv/old_sshd_config").len(), 1);
        assert!(matching_checks("/etc/ssh/sshd_config.bak").is_empty());
        assert!(matching_checks("/etc/ssh/ssh_config").is_empty());
    }

    #[test]
    fn test_patterns_for_keeps_catalog_order() {
        let pats: Vec<_> = patterns_for("/etc/ssh/sshd_config")
            .into_iter()
            .map(|p| p.pattern)
            .collect();
        assert_eq!(
            pats,
            vec![
                "PermitRootLogin yes",
                "PasswordAuthentication yes",
                "X11Forwarding yes",
                "PermitEmptyPasswords yes",
            ]
        );
    }

    #[test]
    fn test_catalog_filenames_are_unique() {
        let mut names: Vec<_> = CATALOG.iter().map(|c| c.filename).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), CATALOG.len());
    }
}
