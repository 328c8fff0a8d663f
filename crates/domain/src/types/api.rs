//! Portal API envelope and request types
//!
//! The portal wraps every JSON payload in a `{ success, data, ... }`
//! envelope. These shapes mirror that contract; unwrapping them into domain
//! errors happens in the infrastructure layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_LIMIT;

/// Standard response envelope for single-payload endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Display name of the authenticated user, echoed by some endpoints
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response envelope for paginated list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<PageInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Pagination block returned by list endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of pages
    pub pages: u32,
    /// Total number of records across all pages
    pub total: u64,
}

/// Body for `POST /shift-exchange` and `POST /take-leave`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRequest {
    /// Date the request concerns
    pub date: NaiveDate,
    /// Exchange counterpart / covering member, if any
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub reason: String,
    pub handover_task: String,
    pub communicated_person: String,
}

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Query-string spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Query parameters for `GET /portal-tracker-log`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalLogQuery {
    pub page: u32,
    pub limit: u32,
    /// Field to sort by, server-side
    #[serde(default)]
    pub sort: Option<String>,
    pub order: SortOrder,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Default for PortalLogQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            sort: None,
            order: SortOrder::Asc,
            search: None,
            category: None,
        }
    }
}

impl PortalLogQuery {
    /// Key/value pairs for the request query string.
    ///
    /// Optional fields are omitted entirely rather than sent empty, matching
    /// what the portal's own UI sends.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("order", self.order.as_str().to_string()),
        ];
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_tolerates_missing_optionals() {
        let json = r#"{ "success": true, "data": [1, 2, 3] }"#;
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data, Some(vec![1, 2, 3]));
        assert!(resp.user.is_none());
        assert!(resp.message.is_none());
    }

    #[test]
    fn failure_envelope_carries_message() {
        let json = r#"{ "success": false, "message": "roster not uploaded yet" }"#;
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("roster not uploaded yet"));
    }

    #[test]
    fn query_pairs_skip_unset_fields() {
        let query = PortalLogQuery::default();
        let pairs = query.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "1".to_string()),
                ("limit", "20".to_string()),
                ("order", "asc".to_string()),
            ]
        );

        let query = PortalLogQuery {
            search: Some("siem".to_string()),
            category: Some("Monitoring".to_string()),
            sort: Some("portalName".to_string()),
            order: SortOrder::Desc,
            ..PortalLogQuery::default()
        };
        let pairs = query.to_query_pairs();
        assert!(pairs.contains(&("search", "siem".to_string())));
        assert!(pairs.contains(&("order", "desc".to_string())));
        assert!(pairs.contains(&("sort", "portalName".to_string())));
    }

    #[test]
    fn shift_request_serializes_camel_case() {
        let req = ShiftRequest {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            assigned_to: Some("sizan".to_string()),
            reason: "exam".to_string(),
            handover_task: "alert triage".to_string(),
            communicated_person: "shift lead".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("assignedTo"));
        assert!(json.contains("handoverTask"));
        assert!(json.contains("communicatedPerson"));
    }
}
