//! Query dispatch and outcome application

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{project_track, AppModel, SearchApi, FETCH_ERROR_MESSAGE};
use super::AppController;

impl AppController {
    /// Submit the current input as a search.
    ///
    /// A blank query is dropped silently with no state change. Otherwise the
    /// model transitions to loading and the request runs in a background
    /// task, so the input stays editable while it is in flight. If the user
    /// submits again before this request resolves, the newer generation
    /// wins and this request's outcome is discarded.
    pub async fn submit_search(&self) {
        let (query, generation) = {
            let model = self.model.lock().await;
            let query = model.get_ui_state().await.search_query.trim().to_string();
            if query.is_empty() {
                tracing::debug!("Ignoring blank search submission");
                return;
            }
            let generation = model.begin_search(&query).await;
            (query, generation)
        };

        let model = self.model.clone();
        let client = self.client.clone();
        tokio::spawn(async move {
            run_search(model, client, query, generation).await;
        });
    }
}

/// Perform one dispatch and apply its outcome under the generation guard.
pub(crate) async fn run_search(
    model: Arc<Mutex<AppModel>>,
    client: Arc<dyn SearchApi>,
    query: String,
    generation: u64,
) {
    match client.search(&query).await {
        Ok(response) => {
            let tracks: Vec<_> = response
                .into_track_records()
                .iter()
                .map(project_track)
                .collect();
            tracing::info!(query = %query, count = tracks.len(), "Search completed");

            let applied = model
                .lock()
                .await
                .complete_search(generation, tracks)
                .await;
            if !applied {
                tracing::debug!(query = %query, generation, "Dropping superseded search result");
            }
        }
        Err(e) => {
            // Full detail stays in the log; the user sees one generic message.
            tracing::error!(query = %query, error = %e, "Search failed");

            let applied = model
                .lock()
                .await
                .fail_search(generation, FETCH_ERROR_MESSAGE.to_string())
                .await;
            if !applied {
                tracing::debug!(query = %query, generation, "Dropping superseded search failure");
            }
        }
    }
}
