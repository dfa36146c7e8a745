// Wire types for the case lookup backend
use serde::{Deserialize, Serialize};

/// Identifies a court case. Serialized as the body of `POST /api/fetch-case`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CaseQuery {
    pub case_type: String,
    pub case_number: String,
    pub case_year: String,
}

impl Default for CaseQuery {
    /// A known case, so the form can be submitted straight away
    fn default() -> Self {
        Self {
            case_type: "W.P.(C)".to_string(),
            case_number: "5595".to_string(),
            case_year: "2021".to_string(),
        }
    }
}

impl CaseQuery {
    pub fn new(
        case_type: impl Into<String>,
        case_number: impl Into<String>,
        case_year: impl Into<String>,
    ) -> Self {
        Self {
            case_type: case_type.into(),
            case_number: case_number.into(),
            case_year: case_year.into(),
        }
    }

    pub fn get(&self, field: CaseField) -> &str {
        match field {
            CaseField::CaseType => &self.case_type,
            CaseField::CaseNumber => &self.case_number,
            CaseField::CaseYear => &self.case_year,
        }
    }

    /// Overwrite one field, leaving the others untouched
    pub fn set(&mut self, field: CaseField, value: String) {
        match field {
            CaseField::CaseType => self.case_type = value,
            CaseField::CaseNumber => self.case_number = value,
            CaseField::CaseYear => self.case_year = value,
        }
    }
}

/// One of the three inputs of the lookup form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum CaseField {
    CaseType,
    CaseNumber,
    CaseYear,
}

impl CaseField {
    pub const ALL: [CaseField; 3] = [CaseField::CaseType, CaseField::CaseNumber, CaseField::CaseYear];

    /// Input `name`/`id`, identical to the JSON key
    pub fn name(&self) -> &'static str {
        match self {
            CaseField::CaseType => "case_type",
            CaseField::CaseNumber => "case_number",
            CaseField::CaseYear => "case_year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaseField::CaseType => "Case Type",
            CaseField::CaseNumber => "Case Number",
            CaseField::CaseYear => "Case Year",
        }
    }
}

/// Case details returned by the backend
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub party_names: String,
    pub filing_date: String,
    pub next_hearing_date: String,
    pub orders_link: String,
    #[serde(default)]
    pub orders: Vec<OrderEntry>,
}

/// A downloadable court order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderEntry {
    pub date: String,
    pub url: String,
}

/// Body of `GET /` on the backend
#[derive(Deserialize, Debug, Clone)]
pub struct WelcomeResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_only_touches_named_field() {
        let mut query = CaseQuery::default();
        query.set(CaseField::CaseNumber, "1234".to_string());

        assert_eq!(query.case_type, "W.P.(C)");
        assert_eq!(query.case_number, "1234");
        assert_eq!(query.case_year, "2021");
        assert_eq!(query.get(CaseField::CaseNumber), "1234");
    }


    #[test]
    fn test_query_serializes_with_wire_names() {
        let body = serde_json::to_value(CaseQuery::new("CRL.A.", "12", "2019")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "case_type": "CRL.A.",
                "case_number": "12",
                "case_year": "2019"
            })
        );
    }

    #[test]
    fn test_result_without_orders_key_has_no_orders() {
        let result: CaseResult = serde_json::from_str(
            r#"{
                "party_names": "A VS. B",
                "filing_date": "Year: 2021",
                "next_hearing_date": "Not found",
                "orders_link": "Not found"
            }"#,
        )
        .unwrap();
        assert!(result.orders.is_empty());
    }
}
