// src/client/shares.rs

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

use crate::response::ApiResponse;
use crate::types::shares::{NewShare, Share, ShareEnvelope, ShareList};

use super::dispatch::{query_suffix, ClientCore, QueryOptions, NO_BODY};
use super::interface::SharesApi;

pub struct SharesClient {
    core: ClientCore,
}

impl SharesClient {
    pub(crate) fn new(core: ClientCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl SharesApi for SharesClient {
    async fn query_itwin_shares(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<Share>> {
        let path = format!("{itwin_id}/shares{}", query_suffix(query));
        tracing::debug!(target: "access_control::client::shares", %itwin_id, "Listing iTwin shares");
        self.core
            .request(access_token, Method::GET, &path, NO_BODY, &[], |body: ShareList| body.shares)
            .await
    }

    async fn get_itwin_share(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        share_id: Uuid,
    ) -> ApiResponse<Share> {
        let path = format!("{itwin_id}/shares/{share_id}");
        tracing::debug!(target: "access_control::client::shares", %itwin_id, %share_id, "Fetching iTwin share");
        self.core
            .request(access_token, Method::GET, &path, NO_BODY, &[], |body: ShareEnvelope| {
                body.share
            })
            .await
    }

    async fn create_itwin_share(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        share: &NewShare,
    ) -> ApiResponse<Share> {
        let path = format!("{itwin_id}/shares");
        tracing::debug!(target: "access_control::client::shares", %itwin_id, "Creating iTwin share");
        // Omitted fields default server-side; a past expiration yields 422.
        self.core
            .request(access_token, Method::POST, &path, Some(share), &[], |body: ShareEnvelope| {
                body.share
            })
            .await
    }

    async fn delete_itwin_share(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        share_id: Uuid,
    ) -> ApiResponse<()> {
        let path = format!("{itwin_id}/shares/{share_id}");
        tracing::debug!(target: "access_control::client::shares", %itwin_id, %share_id, "Deleting iTwin share");
        self.core
            .request(access_token, Method::DELETE, &path, NO_BODY, &[], |_: serde_json::Value| ())
            .await
    }
}
