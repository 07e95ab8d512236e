//! Font family bindings

use serde::{Deserialize, Serialize};

/// Heading, body and monospace font stacks
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FontTheme {
    pub heading: String,
    pub body: String,
    pub mono: String,
}

impl FontTheme {
    pub fn new(
        heading: impl Into<String>,
        body: impl Into<String>,
        mono: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
            mono: mono.into(),
        }
    }

    pub fn css_vars(&self) -> [(&'static str, &str); 3] {
        [
            ("--font-heading", &self.heading),
            ("--font-body", &self.body),
            ("--font-mono", &self.mono),
        ]
    }
}

impl Default for FontTheme {
    fn default() -> Self {
        Self::new(
            "\"Inter\", system-ui, sans-serif",
            "\"Inter\", system-ui, sans-serif",
            "\"JetBrains Mono\", ui-monospace, monospace",
        )
    }
}
