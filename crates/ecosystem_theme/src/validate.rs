//! Applied-token sanity checks

use crate::root::RenderRoot;
use std::fmt;

/// Variables every theme must provide
pub const REQUIRED_TOKENS: [&str; 9] = [
    "--color-background",
    "--color-foreground",
    "--color-primary",
    "--color-primary-foreground",
    "--color-border",
    "--color-ring",
    "--font-heading",
    "--font-body",
    "--font-mono",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenIssue {
    Missing(&'static str),
    Malformed { name: &'static str, value: String },
}

impl fmt::Display for TokenIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenIssue::Missing(name) => write!(f, "{name} is not set"),
            TokenIssue::Malformed { name, value } => write!(f, "{name} has malformed value {value:?}"),
        }
    }
}

/// Re-read the required tokens from `root` and report problems
pub fn validate_root<R: RenderRoot + ?Sized>(root: &R) -> Vec<TokenIssue> {
    REQUIRED_TOKENS
        .iter()
        .filter_map(|&name| match root.computed_property(name) {
            None => Some(TokenIssue::Missing(name)),
            Some(value) if !looks_valid(name, &value) => Some(TokenIssue::Malformed { name, value }),
            Some(_) => None,
        })
        .collect()
}

fn looks_valid(name: &str, value: &str) -> bool {
    if name.starts_with("--color-") {
        ["#", "rgb", "hsl", "var("]
            .iter()
            .any(|prefix| value.starts_with(prefix))
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::root::StyleRoot;

    fn complete_root() -> StyleRoot {
        let mut root = StyleRoot::new();
        for name in REQUIRED_TOKENS {
            let value = if name.starts_with("--font-") { "Inter" } else { "#000000" };
            root.set_property(name, value);
        }
        root
    }

    #[test]
    fn test_complete_root_passes() {
        assert!(validate_root(&complete_root()).is_empty());
    }

    #[test]
    fn test_reports_missing_and_malformed() {
        let mut root = complete_root();
        root.remove_property("--font-mono");
        root.set_property("--color-ring", "blue");
        root.set_property("--color-border", "var(--color-input)");
        root.set_property("--color-primary", "rgba(0, 0, 0, 0.5)");

        assert_eq!(
            validate_root(&root),
            vec![
                TokenIssue::Malformed {
                    name: "--color-ring",
                    value: "blue".into()
                },
                TokenIssue::Missing("--font-mono"),
            ]
        );
    }
}
