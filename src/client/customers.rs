//! Customer endpoints.

use crate::{
    error::ApiError,
    models::customers::{Customer, CustomerDraft, Supplier},
};

use super::ApiClient;

impl ApiClient {
    /// List every customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.get("/customers").await
    }

    /// Fetch one customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_customer(&self, id: i64) -> Result<Customer, ApiError> {
        self.get(&format!("/customers/{id}")).await
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_customer(&self, draft: &CustomerDraft) -> Result<Customer, ApiError> {
        self.post("/customers", draft).await
    }

    /// Update a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_customer(
        &self,
        id: i64,
        draft: &CustomerDraft,
    ) -> Result<Customer, ApiError> {
        self.put(&format!("/customers/{id}"), draft).await
    }

    /// Delete a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete_customer(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/customers/{id}")).await
    }

    /// Search customers by name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn search_customers(&self, name: &str) -> Result<Vec<Customer>, ApiError> {
        self.get_query(
            "/customers/search",
            vec![("name".to_owned(), name.to_owned())],
        )
        .await
    }

    /// List every supplier; offset jobs and expenses reference these.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_suppliers(&self) -> Result<Vec<Supplier>, ApiError> {
        self.get("/suppliers").await
    }
}
