// src/client/roles.rs

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

use crate::response::ApiResponse;
use crate::types::roles::{NewRole, Role, RoleEnvelope, RoleList, RoleUpdate};

use super::dispatch::{query_suffix, ClientCore, QueryOptions, NO_BODY};
use super::interface::RolesApi;

pub struct RolesClient {
    core: ClientCore,
}

impl RolesClient {
    pub(crate) fn new(core: ClientCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl RolesApi for RolesClient {
    async fn get_itwin_roles(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<Role>> {
        let path = format!("{itwin_id}/roles{}", query_suffix(query));
        tracing::debug!(target: "access_control::client::roles", %itwin_id, "Listing iTwin roles");
        self.core
            .request(access_token, Method::GET, &path, NO_BODY, &[], |body: RoleList| body.roles)
            .await
    }

    async fn get_itwin_role(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        role_id: Uuid,
    ) -> ApiResponse<Role> {
        let path = format!("{itwin_id}/roles/{role_id}");
        tracing::debug!(target: "access_control::client::roles", %itwin_id, %role_id, "Fetching iTwin role");
        self.core
            .request(access_token, Method::GET, &path, NO_BODY, &[], |body: RoleEnvelope| body.role)
            .await
    }

    async fn create_itwin_role(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        role: &NewRole,
    ) -> ApiResponse<Role> {
        let path = format!("{itwin_id}/roles");
        tracing::debug!(target: "access_control::client::roles", %itwin_id, display_name = %role.display_name, "Creating iTwin role");
        self.core
            .request(access_token, Method::POST, &path, Some(role), &[], |body: RoleEnvelope| {
                body.role
            })
            .await
    }

    async fn update_itwin_role(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        role_id: Uuid,
        update: &RoleUpdate,
    ) -> ApiResponse<Role> {
        let path = format!("{itwin_id}/roles/{role_id}");
        tracing::debug!(target: "access_control::client::roles", %itwin_id, %role_id, "Updating iTwin role");
        self.core
            .request(access_token, Method::PATCH, &path, Some(update), &[], |body: RoleEnvelope| {
                body.role
            })
            .await
    }

    async fn delete_itwin_role(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        role_id: Uuid,
    ) -> ApiResponse<()> {
        let path = format!("{itwin_id}/roles/{role_id}");
        tracing::debug!(target: "access_control::client::roles", %itwin_id, %role_id, "Deleting iTwin role");
        self.core
            .request(access_token, Method::DELETE, &path, NO_BODY, &[], |_: serde_json::Value| ())
            .await
    }
}
