//! Shared query parameter types for API handlers.
//!
//! Query strings are deserialized here and converted into the validated
//! core types (`SearchFields`, `PageRequest`) before any repository code
//! runs; handlers never see raw pagination input.

use serde::Deserialize;

use moim_core::pagination::{PageRequest, SortDirection, SortField, SortSpec};
use moim_core::search::SearchFields;

/// Query parameters for the project listing endpoint
/// (`?type=&keyword=&page=&size=&sort=&direction=`).
///
/// `type` is the field-flag string (`"t"`, `"d"`, `"td"`); `sort` and
/// `direction` deserialize into the whitelisted enums, so an unknown sort
/// column is rejected as a 400 before reaching the repository.
#[derive(Debug, Deserialize)]
pub struct ProjectSearchParams {
    #[serde(rename = "type")]
    pub search_type: Option<String>,
    pub keyword: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<SortField>,
    pub direction: Option<SortDirection>,
}

impl ProjectSearchParams {
    /// Which project columns the keyword applies to.
    pub fn search_fields(&self) -> SearchFields {
        SearchFields::parse(self.search_type.as_deref())
    }

    /// Clamped page request; `direction` defaults to descending when a
    /// sort field is given without one.
    pub fn page_request(&self) -> PageRequest {
        let sort = self.sort.map(|field| SortSpec {
            field,
            direction: self.direction.unwrap_or(SortDirection::Desc),
        });
        PageRequest::new(self.page, self.size, sort)
    }
}
