//! Audit-log endpoints.

use crate::{
    error::ApiError,
    models::audit::{AuditLog, AuditLogPage, AuditLogQuery},
};

use super::ApiClient;

impl ApiClient {
    /// Fetch one page of audit logs matching the filter set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, query))]
    pub async fn audit_logs(&self, query: &AuditLogQuery) -> Result<AuditLogPage, ApiError> {
        self.get_query("/audit-logs", query.to_query()).await
    }

    /// Fetch one audit entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_audit_log(&self, id: i64) -> Result<AuditLog, ApiError> {
        self.get(&format!("/audit-logs/{id}")).await
    }

    /// Action names known to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn audit_log_actions(&self) -> Result<Vec<String>, ApiError> {
        self.get("/audit-logs/actions").await
    }

    /// Entity kinds known to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn audit_log_entity_types(&self) -> Result<Vec<String>, ApiError> {
        self.get("/audit-logs/entity-types").await
    }
}
