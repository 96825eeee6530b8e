//! Audit-log wire types.

use jiff::Timestamp;
use jiff::civil::Date;
use serde::Deserialize;

/// One audited backend action.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    /// Backend identifier.
    pub id: i64,
    /// Kind of entity the action touched.
    pub entity_type: String,
    /// Identifier of the touched entity.
    #[serde(default)]
    pub entity_id: Option<i64>,
    /// Action name (CREATE, UPDATE, ...).
    pub action: String,
    /// User who performed the action.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// When the action happened.
    pub timestamp: Timestamp,
    /// Extra detail the backend recorded.
    #[serde(default)]
    pub details: Option<String>,
}

/// One page of audit logs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogPage {
    /// Entries on this page.
    pub content: Vec<AuditLog>,
    /// Total entries across every page.
    pub total_elements: i64,
}

/// Filter and paging parameters for the audit-log listing.
#[derive(Debug, Clone, Default)]
pub struct AuditLogQuery {
    /// Zero-based page index.
    pub page: Option<u32>,
    /// Page size.
    pub size: Option<u32>,
    /// Restrict to one entity kind.
    pub entity_type: Option<String>,
    /// Restrict to one user's actions.
    pub user_id: Option<i64>,
    /// Restrict to one action name.
    pub action: Option<String>,
    /// Earliest day, inclusive.
    pub start_date: Option<Date>,
    /// Latest day, inclusive.
    pub end_date: Option<Date>,
}

impl AuditLogQuery {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();

        if let Some(page) = self.page {
            query.push(("page".to_owned(), page.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size".to_owned(), size.to_string()));
        }
        if let Some(entity_type) = &self.entity_type {
            query.push(("entityType".to_owned(), entity_type.clone()));
        }
        if let Some(user_id) = self.user_id {
            query.push(("userId".to_owned(), user_id.to_string()));
        }
        if let Some(action) = &self.action {
            query.push(("action".to_owned(), action.clone()));
        }
        if let Some(start_date) = self.start_date {
            query.push(("startDate".to_owned(), start_date.to_string()));
        }
        if let Some(end_date) = self.end_date {
            query.push(("endDate".to_owned(), end_date.to_string()));
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn page_parses_backend_field_names() -> TestResult {
        let page: AuditLogPage = serde_json::from_value(serde_json::json!({
            "content": [{
                "id": 11,
                "entityType": "LOAN",
                "entityId": 7,
                "action": "UPDATE",
                "userId": 2,
                "timestamp": "2026-08-01T09:30:00Z"
            }],
            "totalElements": 41
        }))?;

        assert_eq!(page.total_elements, 41);
        assert_eq!(page.content.len(), 1);

        Ok(())
    }

    #[test]
    fn only_set_filters_become_parameters() {
        let query = AuditLogQuery {
            page: Some(0),
            size: Some(25),
            entity_type: Some("LOAN".to_owned()),
            ..AuditLogQuery::default()
        };

        let pairs = query.to_query();

        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains(&("entityType".to_owned(), "LOAN".to_owned())));
    }
}
