//! Search results wiring
//!
//! What the results list does with user input: double-clicking a node and
//! re-running the search when the page changes.

use crate::{AppConfig, Formatter};
use serde::{Deserialize, Serialize};

/// Query language the formatted text is written in
pub const QUERY_LANGUAGE: &str = "afts";

pub const DEFAULT_MAX_ITEMS: u32 = 25;

/// A node in the result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_folder: bool,
}

/// What a double click on a result node asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeAction {
    NavigateToFolder(NodeEntry),
    ShowPreview(NodeEntry),
}

/// Folders are opened, everything else is previewed
#[must_use]
pub fn on_node_double_click(node: &NodeEntry) -> NodeAction {
    if node.is_folder {
        NodeAction::NavigateToFolder(node.clone())
    } else {
        NodeAction::ShowPreview(node.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub max_items: u32,
    pub skip_count: u32,
}

impl Paging {
    #[must_use]
    pub const fn new(max_items: u32, skip_count: u32) -> Self {
        Self {
            max_items,
            skip_count,
        }
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITEMS, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestQuery {
    pub query: String,
    pub language: String,
}

/// Request body handed to the search backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: RequestQuery,
    pub paging: Paging,
}

/// Holds the current search text and page, and rebuilds the request
/// whenever either changes
#[derive(Debug, Clone, Default)]
pub struct SearchQueryBuilder {
    formatter: Formatter,
    user_query: Option<String>,
    paging: Paging,
    last_request: Option<SearchRequest>,
}

impl SearchQueryBuilder {
    #[must_use]
    pub fn new(formatter: Formatter) -> Self {
        Self {
            formatter,
            ..Self::default()
        }
    }

    /// Fields are read from `config` once, here. Later config changes need a
    /// new builder.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Formatter::from_config(config))
    }

    /// Start a new search. Paging goes back to the first page.
    pub fn set_user_query(&mut self, text: impl Into<String>) {
        self.user_query = Some(text.into());
        self.paging.skip_count = 0;
    }

    #[must_use]
    pub const fn paging(&self) -> Paging {
        self.paging
    }

    #[must_use]
    pub const fn last_request(&self) -> Option<&SearchRequest> {
        self.last_request.as_ref()
    }

    /// Take the new page and run the search again
    pub fn on_pagination_changed(&mut self, paging: Paging) -> Option<&SearchRequest> {
        self.paging = paging;
        self.update()
    }

    /// Build the request for the current text and page.
    ///
    /// Returns `None`, and forgets the previous request, when the text does
    /// not format to a query.
    pub fn update(&mut self) -> Option<&SearchRequest> {
        let query = self.formatter.format(self.user_query.as_deref());
        self.last_request = query.map(|query| SearchRequest {
            query: RequestQuery {
                query,
                language: QUERY_LANGUAGE.to_string(),
            },
            paging: self.paging,
        });

        match &self.last_request {
            Some(request) => tracing::debug!(
                query = %request.query.query,
                max_items = request.paging.max_items,
                skip_count = request.paging.skip_count,
                "search request updated"
            ),
            None => tracing::debug!("no valid query, search request cleared"),
        }
        self.last_request.as_ref()
    }
}
