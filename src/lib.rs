//! ftsq: free text to full-text search queries
//!
//! ```
//! use ftsq::{FieldList, format_search_query};
//!
//! let fields = FieldList::new(["cm:name", "cm:title"]);
//! assert_eq!(
//!     format_search_query(Some("hello"), &fields).as_deref(),
//!     Some(r#"(cm:name:"hello*" OR cm:title:"hello*")"#)
//! );
//! assert_eq!(format_search_query(Some(""), &fields), None);
//! ```

pub use ftsq_ast::{FieldList, FtsqError, Query};
pub use ftsq_formatter::{
    AppConfig, Formatter, NodeAction, NodeEntry, Paging, SearchQueryBuilder, SearchRequest,
    format_search_query,
};
pub use ftsq_parser::Parser;
