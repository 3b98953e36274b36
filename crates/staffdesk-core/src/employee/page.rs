//! Paging and sorting types for the record list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumString};

use crate::error::StaffdeskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Server-side sort order in its URL form, `field,direction`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

impl FromStr for SortKey {
    type Err = StaffdeskError;

    /// Parses `field` or `field,asc|desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ',');
        let field = parts.next().unwrap_or_default().trim();
        if field.is_empty() {
            return Err(StaffdeskError::validation(format!("Invalid sort key: '{s}'")));
        }

        let direction = match parts.next().map(str::trim) {
            None | Some("") => SortDirection::Asc,
            Some(dir) => dir
                .parse()
                .map_err(|_| StaffdeskError::validation(format!("Invalid sort direction: '{dir}'")))?,
        };

        Ok(Self::new(field, direction))
    }
}

/// The query a single list request is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub search_term: String,
    pub sort_key: Option<SortKey>,
    pub page_index: usize,
    pub page_size: usize,
}

impl PageQuery {
    /// First page, no search, no sort.
    pub fn first(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort_key: None,
            page_index: 0,
            page_size,
        }
    }
}

/// One page of results as returned by the record API.
///
/// The wire format carries more bookkeeping (`totalElements`, `number`, ...);
/// only the items and the page count are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(rename = "content", default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_pages: usize) -> Self {
        Self { items, total_pages }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Whether `index` addresses an existing page.
    pub fn contains_page(&self, index: i64) -> bool {
        index >= 0 && (index as u64) < self.total_pages as u64
    }
}
