// src/client/groups.rs

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

use crate::response::ApiResponse;
use crate::types::groups::{Group, GroupEnvelope, GroupList, GroupUpdate, NewGroup};

use super::dispatch::{ClientCore, NO_BODY};
use super::interface::GroupsApi;

pub struct GroupsClient {
    core: ClientCore,
}

impl GroupsClient {
    pub(crate) fn new(core: ClientCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl GroupsApi for GroupsClient {
    async fn get_itwin_groups(
        &self,
        access_token: &str,
        itwin_id: Uuid,
    ) -> ApiResponse<Vec<Group>> {
        let path = format!("{itwin_id}/groups");
        tracing::debug!(target: "access_control::client::groups", %itwin_id, "Listing iTwin groups");
        self.core
            .request(access_token, Method::GET, &path, NO_BODY, &[], |body: GroupList| body.groups)
            .await
    }

    async fn get_itwin_group(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group_id: Uuid,
    ) -> ApiResponse<Group> {
        let path = format!("{itwin_id}/groups/{group_id}");
        tracing::debug!(target: "access_control::client::groups", %itwin_id, %group_id, "Fetching iTwin group");
        self.core
            .request(access_token, Method::GET, &path, NO_BODY, &[], |body: GroupEnvelope| {
                body.group
            })
            .await
    }

    async fn create_itwin_group(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group: &NewGroup,
    ) -> ApiResponse<Group> {
        let path = format!("{itwin_id}/groups");
        tracing::debug!(target: "access_control::client::groups", %itwin_id, name = %group.name, "Creating iTwin group");
        self.core
            .request(access_token, Method::POST, &path, Some(group), &[], |body: GroupEnvelope| {
                body.group
            })
            .await
    }

    async fn update_itwin_group(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group_id: Uuid,
        update: &GroupUpdate,
    ) -> ApiResponse<Group> {
        let path = format!("{itwin_id}/groups/{group_id}");
        tracing::debug!(target: "access_control::client::groups", %itwin_id, %group_id, "Updating iTwin group");
        self.core
            .request(access_token, Method::PATCH, &path, Some(update), &[], |body: GroupEnvelope| {
                body.group
            })
            .await
    }

    async fn delete_itwin_group(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group_id: Uuid,
    ) -> ApiResponse<()> {
        let path = format!("{itwin_id}/groups/{group_id}");
        tracing::debug!(target: "access_control::client::groups", %itwin_id, %group_id, "Deleting iTwin group");
        self.core
            .request(access_token, Method::DELETE, &path, NO_BODY, &[], |_: serde_json::Value| ())
            .await
    }
}
