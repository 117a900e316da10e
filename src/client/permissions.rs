// src/client/permissions.rs

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

use crate::response::ApiResponse;
use crate::types::permissions::PermissionList;

use super::dispatch::{ClientCore, NO_BODY};
use super::interface::PermissionsApi;

pub struct PermissionsClient {
    core: ClientCore,
}

impl PermissionsClient {
    pub(crate) fn new(core: ClientCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl PermissionsApi for PermissionsClient {
    async fn get_permissions(&self, access_token: &str) -> ApiResponse<Vec<String>> {
        tracing::debug!(target: "access_control::client::permissions", "Listing all permissions");
        self.core
            .request(access_token, Method::GET, "permissions", NO_BODY, &[], |body: PermissionList| {
                body.permissions
            })
            .await
    }

    async fn get_itwin_permissions(
        &self,
        access_token: &str,
        itwin_id: Uuid,
    ) -> ApiResponse<Vec<String>> {
        let path = format!("{itwin_id}/permissions");
        tracing::debug!(target: "access_control::client::permissions", %itwin_id, "Listing iTwin permissions");
        self.core
            .request(access_token, Method::GET, &path, NO_BODY, &[], |body: PermissionList| {
                body.permissions
            })
            .await
    }
}
