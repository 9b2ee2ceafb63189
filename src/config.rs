use serde::Deserialize;

use crate::error::Result;
use crate::infra::url::page_url::DEFAULT_ORDERING_PARAM;
use crate::ui::decorators::{ClassDecorator, SuffixDecorator};
use crate::usecase::ports::header::HeaderDecorator;

/// How sortable headers show their state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// CSS state classes plus a `sort_column` priority attribute.
    #[default]
    Classes,
    /// Priority number and arrow appended to the label.
    Suffix,
}

impl Presentation {
    pub fn decorator(self) -> Box<dyn HeaderDecorator> {
        match self {
            Presentation::Classes => Box::new(ClassDecorator),
            Presentation::Suffix => Box::new(SuffixDecorator),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SortHeaderConfig {
    pub presentation: Presentation,
    pub ordering_param: String,
}

impl Default for SortHeaderConfig {
    fn default() -> Self {
        Self {
            presentation: Presentation::default(),
            ordering_param: DEFAULT_ORDERING_PARAM.to_string(),
        }
    }
}

impl SortHeaderConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
