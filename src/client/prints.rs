//! Digital, offset, duplo and catch-all print-job endpoints.

use crate::{
    error::ApiError,
    models::prints::{
        DigitalPrint, DigitalPrintDraft, DuploPrint, DuploPrintDraft, OffsetPrint,
        OffsetPrintDraft, PaymentRecordDraft, PrintJob,
    },
};

use super::ApiClient;

impl ApiClient {
    /// List every digital print job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_digital_prints(&self) -> Result<Vec<DigitalPrint>, ApiError> {
        self.get("/digital-prints").await
    }

    /// Fetch one digital print job by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_digital_print(&self, id: i64) -> Result<DigitalPrint, ApiError> {
        self.get(&format!("/digital-prints/{id}")).await
    }

    /// Create a digital print job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_digital_print(
        &self,
        draft: &DigitalPrintDraft,
    ) -> Result<DigitalPrint, ApiError> {
        self.post("/digital-prints", draft).await
    }

    /// Update a digital print job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_digital_print(
        &self,
        id: i64,
        draft: &DigitalPrintDraft,
    ) -> Result<DigitalPrint, ApiError> {
        self.put(&format!("/digital-prints/{id}"), draft).await
    }

    /// Fetch one offset print job by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_offset_print(&self, id: i64) -> Result<OffsetPrint, ApiError> {
        self.get(&format!("/offset-prints/{id}")).await
    }

    /// Create an offset print job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_offset_print(
        &self,
        draft: &OffsetPrintDraft,
    ) -> Result<OffsetPrint, ApiError> {
        self.post("/offset-prints", draft).await
    }

    /// Update an offset print job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_offset_print(
        &self,
        id: i64,
        draft: &OffsetPrintDraft,
    ) -> Result<OffsetPrint, ApiError> {
        self.put(&format!("/offset-prints/{id}"), draft).await
    }

    /// List every duplo print job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_duplo_prints(&self) -> Result<Vec<DuploPrint>, ApiError> {
        self.get("/duplo-prints").await
    }

    /// Fetch one duplo print job by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_duplo_print(&self, id: i64) -> Result<DuploPrint, ApiError> {
        self.get(&format!("/duplo-prints/{id}")).await
    }

    /// Create a duplo print job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_duplo_print(&self, draft: &DuploPrintDraft) -> Result<DuploPrint, ApiError> {
        self.post("/duplo-prints", draft).await
    }

    /// Update a duplo print job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_duplo_print(
        &self,
        id: i64,
        draft: &DuploPrintDraft,
    ) -> Result<DuploPrint, ApiError> {
        self.put(&format!("/duplo-prints/{id}"), draft).await
    }

    /// List the catch-all print jobs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_print_jobs(&self) -> Result<Vec<PrintJob>, ApiError> {
        self.get("/print-jobs").await
    }

    /// Fetch one catch-all print job by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_print_job(&self, id: i64) -> Result<PrintJob, ApiError> {
        self.get(&format!("/print-jobs/{id}")).await
    }

    /// Record a payment received against a print job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn record_payment(
        &self,
        print_job_id: i64,
        draft: &PaymentRecordDraft,
    ) -> Result<PrintJob, ApiError> {
        self.post(&format!("/print-jobs/{print_job_id}/payments"), draft)
            .await
    }
}
