//! The surface theme variables are written to

use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

/// A style root: custom properties, attributes and classes
pub trait RenderRoot {
    fn set_property(&mut self, name: &str, value: &str);

    fn remove_property(&mut self, name: &str);

    fn set_attribute(&mut self, name: &str, value: &str);

    /// Add (`enabled`) or remove a class
    fn set_class(&mut self, class: &str, enabled: bool);

    /// The value a reader would observe for `name`
    fn computed_property(&self, name: &str) -> Option<String>;
}

impl<R: RenderRoot + ?Sized> RenderRoot for &mut R {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }

    fn remove_property(&mut self, name: &str) {
        (**self).remove_property(name);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        (**self).set_attribute(name, value);
    }

    fn set_class(&mut self, class: &str, enabled: bool) {
        (**self).set_class(class, enabled);
    }

    fn computed_property(&self, name: &str) -> Option<String> {
        (**self).computed_property(name)
    }
}

/// In-memory root that can render itself as a `:root { ... }` block
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleRoot {
    properties: IndexMap<String, String>,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

impl StyleRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Custom properties as a CSS rule
    pub fn css_block(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.properties {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl RenderRoot for StyleRoot {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.shift_remove(name);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn set_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }

    fn computed_property(&self, name: &str) -> Option<String> {
        self.property(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from)
    }
}
