//! Record endpoints under `/unicorns`

use async_trait::async_trait;
use corral_core::{Record, RecordDraft};
use tracing::{debug, error};

use crate::error::Result;
use crate::{Registry, RegistryClient};

impl RegistryClient {
    fn records_url(&self) -> String {
        format!("{}/unicorns", self.base_url())
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/unicorns/{}", self.base_url(), id)
    }
}

#[async_trait]
impl Registry for RegistryClient {
    /// Fetch every record
    ///
    /// `GET /unicorns`
    async fn list(&self) -> Result<Vec<Record>> {
        debug!("fetching record list");
        let response = self.http().get(self.records_url()).send().await?;

        self.handle_response(response).await
    }

    /// Fetch one record by id
    ///
    /// `GET /unicorns/{id}`. Used to populate the edit form with
    /// server-authoritative data before editing.
    async fn get(&self, id: &str) -> Result<Record> {
        debug!(id, "fetching record");
        let response = self.http().get(self.record_url(id)).send().await?;

        self.handle_response(response).await
    }

    /// Create a record from a draft
    ///
    /// `POST /unicorns`. The body carries no id; the server assigns one
    /// and returns the stored record.
    async fn create(&self, draft: &RecordDraft) -> Result<Record> {
        debug!(name = %draft.name, "creating record");
        let response = self
            .http()
            .post(self.records_url())
            .json(draft)
            .send()
            .await
            .inspect_err(|e| error!("create request failed: {}", e))?;

        self.handle_response(response).await
    }

    /// Overwrite the record with the given id
    ///
    /// `PUT /unicorns/{id}`, returns the updated record.
    async fn update(&self, id: &str, draft: &RecordDraft) -> Result<Record> {
        debug!(id, "updating record");
        let response = self
            .http()
            .put(self.record_url(id))
            .json(draft)
            .send()
            .await
            .inspect_err(|e| error!("update request failed: {}", e))?;

        self.handle_response(response).await
    }

    /// Delete the record with the given id
    ///
    /// `DELETE /unicorns/{id}`. Callers drop the record from local
    /// state only after this returns success, so a failed delete never
    /// desynchronizes the list.
    async fn delete(&self, id: &str) -> Result<()> {
        debug!(id, "deleting record");
        let response = self
            .http()
            .delete(self.record_url(id))
            .send()
            .await
            .inspect_err(|e| error!("delete request failed: {}", e))?;

        self.handle_empty_response(response).await
    }
}
