use url::{form_urlencoded, Url};

use crate::domain::entities::ordering::OrderingToken;
use crate::error::{Result, SortHeaderError};
use crate::usecase::ports::header::LinkSink;

pub const DEFAULT_ORDERING_PARAM: &str = "o";

/// The current page address. Links are built on a copy with only the
/// ordering parameter changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    url: Url,
    param: String,
}

impl PageUrl {
    pub fn parse(address: &str) -> Result<Self> {
        let url = Url::parse(address).map_err(|source| SortHeaderError::PageAddress {
            address: address.to_string(),
            source,
        })?;
        Ok(Self::new(url))
    }

    pub fn new(url: Url) -> Self {
        Self {
            url,
            param: DEFAULT_ORDERING_PARAM.to_string(),
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    /// Current value of the ordering parameter; empty when absent.
    pub fn ordering_token(&self) -> OrderingToken {
        self.url
            .query_pairs()
            .find(|(key, _)| key == self.param.as_str())
            .map(|(_, value)| OrderingToken::new(value.into_owned()))
            .unwrap_or_default()
    }

    /// Copy of the page address with the ordering parameter set to `token`.
    /// An existing parameter is replaced where it stands; otherwise it is
    /// appended. Every other query segment is copied through byte for byte.
    pub fn with_ordering(&self, token: &OrderingToken) -> Url {
        let ordering = format!(
            "{}={}",
            encode_component(&self.param),
            encode_component(token.as_str())
        );
        let mut segments = Vec::new();
        let mut replaced = false;
        let query = self.url.query().filter(|query| !query.is_empty());
        for segment in query.into_iter().flat_map(|query| query.split('&')) {
            if !self.is_ordering_segment(segment) {
                segments.push(segment.to_string());
            } else if !replaced {
                segments.push(ordering.clone());
                replaced = true;
            }
        }
        if !replaced {
            segments.push(ordering);
        }

        let mut url = self.url.clone();
        url.set_query(Some(&segments.join("&")));
        url
    }

    fn is_ordering_segment(&self, segment: &str) -> bool {
        form_urlencoded::parse(segment.as_bytes())
            .next()
            .is_some_and(|(key, _)| key == self.param.as_str())
    }
}

fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

impl LinkSink for PageUrl {
    fn link_for(&self, token: &OrderingToken) -> String {
        self.with_ordering(token).to_string()
    }
}
