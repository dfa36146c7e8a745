use crate::services::client::{CaseField, CaseQuery};

/// Mirrors the inputs' `required` attribute: every field non-empty.
/// Whitespace counts as a value, as it does for the browser.
pub fn validate_query_complete(query: &CaseQuery) -> bool {
    missing_fields(query).is_empty()
}

/// Fields left empty, in form order
pub fn missing_fields(query: &CaseQuery) -> Vec<CaseField> {
    CaseField::ALL
        .into_iter()
        .filter(|field| query.get(*field).is_empty())
        .collect()
}

/// Gets user-friendly validation message for the first empty field
pub fn get_query_validation_message(query: &CaseQuery) -> Option<String> {
    missing_fields(query)
        .first()
        .map(|field| format!("Please fill in {}", field.label()))
}
