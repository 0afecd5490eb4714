//! Client-side routes shared by the views and the form workflows.

pub const EMPLOYEE_LISTING: &str = "/";
pub const EMPLOYEE_NEW: &str = "/employees/new";
pub const SEARCH: &str = "/search";

pub fn employee_href(id: i64) -> String {
    format!("/employees/{id}")
}

pub fn employee_edit_href(id: i64) -> String {
    format!("/employees/{id}/edit")
}

/// The results view reads its text from the `query` parameter.
pub fn search_href(query: &str) -> String {
    match serde_urlencoded::to_string([("query", query)]) {
        Ok(encoded) => format!("{SEARCH}?{encoded}"),
        Err(e) => {
            log::warn!("failed to encode search query {query:?}: {e}");
            SEARCH.to_string()
        }
    }
}

pub fn search_heading(query: &str) -> String {
    format!("Search results for: \"{query}\"")
}
