//! Registry report
//!
//! A serializable snapshot of what a registry currently holds, for
//! diagnostics, admin surfaces, and configuration validation. Entries are
//! sorted so output is deterministic.

use std::fmt;

use serde::Serialize;

/// Snapshot of registered build keys and their policy kinds
#[derive(Debug, Clone, Serialize)]
pub struct RegistryReport {
    /// One entry per registered build key, sorted by key
    pub entries: Vec<ReportEntry>,
}

/// Report line for one build key
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// Display form of the build key
    pub build_key: String,
    /// Names of the installed policy kinds, sorted
    pub policy_kinds: Vec<String>,
}

impl fmt::Display for RegistryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registered build keys:")?;
        for entry in &self.entries {
            writeln!(f, "  - {}: {}", entry.build_key, entry.policy_kinds.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_keys_and_kinds() {
        let report = RegistryReport {
            entries: vec![ReportEntry {
                build_key: "Widget[\"primary\"]".to_string(),
                policy_kinds: vec!["ConstructorPolicy".to_string()],
            }],
        };
        let text = report.to_string();
        assert!(text.contains("Widget[\"primary\"]"));
        assert!(text.contains("ConstructorPolicy"));
    }
}
