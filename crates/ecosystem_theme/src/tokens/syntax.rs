//! Syntax highlighting and code block colors
//!
//! Shared by every theme; only the color mode selects a table.

use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxColors {
    pub keyword: String,
    pub string: String,
    pub function: String,
    pub comment: String,
    pub number: String,
    pub operator: String,
    pub variable: String,
}

impl SyntaxColors {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let [keyword, string, function, comment, number, operator, variable] = match mode {
            ThemeMode::Light => [
                "#7c3aed", "#15803d", "#2563eb", "#6b7280", "#c2410c", "#0f766e", "#1f2937",
            ],
            ThemeMode::Dark => [
                "#c4b5fd", "#86efac", "#93c5fd", "#9ca3af", "#fdba74", "#5eead4", "#e5e7eb",
            ],
        };
        Self {
            keyword: keyword.into(),
            string: string.into(),
            function: function.into(),
            comment: comment.into(),
            number: number.into(),
            operator: operator.into(),
            variable: variable.into(),
        }
    }

    pub fn css_vars(&self) -> [(&'static str, &str); 7] {
        [
            ("--syntax-keyword", &self.keyword),
            ("--syntax-string", &self.string),
            ("--syntax-function", &self.function),
            ("--syntax-comment", &self.comment),
            ("--syntax-number", &self.number),
            ("--syntax-operator", &self.operator),
            ("--syntax-variable", &self.variable),
        ]
    }
}

impl Default for SyntaxColors {
    fn default() -> Self {
        Self::for_mode(ThemeMode::Light)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeColors {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub line_number: String,
    pub highlight: String,
}

impl CodeColors {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let [background, foreground, border, line_number, highlight] = match mode {
            ThemeMode::Light => ["#f8fafc", "#1e293b", "#e2e8f0", "#94a3b8", "#eef2ff"],
            ThemeMode::Dark => ["#0b1120", "#e2e8f0", "#1e293b", "#475569", "#1e1b4b"],
        };
        Self {
            background: background.into(),
            foreground: foreground.into(),
            border: border.into(),
            line_number: line_number.into(),
            highlight: highlight.into(),
        }
    }

    pub fn css_vars(&self) -> [(&'static str, &str); 5] {
        [
            ("--code-background", &self.background),
            ("--code-foreground", &self.foreground),
            ("--code-border", &self.border),
            ("--code-line-number", &self.line_number),
            ("--code-highlight", &self.highlight),
        ]
    }
}

impl Default for CodeColors {
    fn default() -> Self {
        Self::for_mode(ThemeMode::Light)
    }
}
