//! Sublimation print-job and price-list endpoints.

use rust_decimal::Decimal;

use crate::{
    error::ApiError,
    models::prints::{SublimationPrice, SublimationPriceDraft, SublimationPrint, SublimationPrintDraft},
};

use super::ApiClient;

impl ApiClient {
    /// List every sublimation print job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_sublimation_prints(&self) -> Result<Vec<SublimationPrint>, ApiError> {
        self.get("/sublimation-prints").await
    }

    /// Fetch one sublimation print job by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_sublimation_print(&self, id: i64) -> Result<SublimationPrint, ApiError> {
        self.get(&format!("/sublimation-prints/{id}")).await
    }

    /// List one customer's sublimation print jobs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn sublimation_prints_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<SublimationPrint>, ApiError> {
        self.get(&format!("/sublimation-prints/customer/{customer_id}"))
            .await
    }

    /// Create a sublimation print job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_sublimation_print(
        &self,
        draft: &SublimationPrintDraft,
    ) -> Result<SublimationPrint, ApiError> {
        self.post("/sublimation-prints", draft).await
    }

    /// Update a sublimation print job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_sublimation_print(
        &self,
        id: i64,
        draft: &SublimationPrintDraft,
    ) -> Result<SublimationPrint, ApiError> {
        self.put(&format!("/sublimation-prints/{id}"), draft).await
    }

    /// Delete a sublimation print job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete_sublimation_print(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/sublimation-prints/{id}")).await
    }

    /// Product kinds known to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn sublimation_types(&self) -> Result<Vec<String>, ApiError> {
        self.get("/sublimation-prints/types").await
    }

    /// The unit price currently in force for a product kind.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn current_sublimation_price(
        &self,
        sublimation_type: &str,
    ) -> Result<Decimal, ApiError> {
        self.get(&format!(
            "/sublimation-prints/current-price/{sublimation_type}"
        ))
        .await
    }

    /// List the price entries currently in force.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn active_sublimation_prices(&self) -> Result<Vec<SublimationPrice>, ApiError> {
        self.get("/sublimation-prices/active").await
    }

    /// List every price entry, active or not.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_sublimation_prices(&self) -> Result<Vec<SublimationPrice>, ApiError> {
        self.get("/sublimation-prices").await
    }

    /// Fetch one price entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_sublimation_price(&self, id: i64) -> Result<SublimationPrice, ApiError> {
        self.get(&format!("/sublimation-prices/{id}")).await
    }

    /// Create a price entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_sublimation_price(
        &self,
        draft: &SublimationPriceDraft,
    ) -> Result<SublimationPrice, ApiError> {
        self.post("/sublimation-prices", draft).await
    }

    /// Update a price entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_sublimation_price(
        &self,
        id: i64,
        draft: &SublimationPriceDraft,
    ) -> Result<SublimationPrice, ApiError> {
        self.put(&format!("/sublimation-prices/{id}"), draft).await
    }

    /// Delete a price entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete_sublimation_price(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/sublimation-prices/{id}")).await
    }

    /// Put a price entry in force for its product kind.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn activate_sublimation_price(&self, id: i64) -> Result<SublimationPrice, ApiError> {
        self.put_query(&format!("/sublimation-prices/{id}/activate"), Vec::new())
            .await
    }

    /// Take a price entry out of force.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn deactivate_sublimation_price(
        &self,
        id: i64,
    ) -> Result<SublimationPrice, ApiError> {
        self.put_query(&format!("/sublimation-prices/{id}/deactivate"), Vec::new())
            .await
    }
}
