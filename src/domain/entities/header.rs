use std::collections::{BTreeMap, BTreeSet};

/// One rendered column header. Decorators write the link and markers; the
/// label itself is never rewritten so a second pass sees the same input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: String,
    pub link: Option<String>,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub suffix: Option<String>,
}

impl HeaderCell {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn class_list(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Label as displayed, including any priority marker.
    pub fn display_label(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{} {suffix}", self.label),
            None => self.label.clone(),
        }
    }
}
