// src/client/group_members.rs

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

use crate::response::ApiResponse;
use crate::types::members::{
    AddMembersBody, GroupMember, GroupMemberEnvelope, GroupMemberList, NewGroupMember, RoleIdsBody,
};

use super::dispatch::{query_suffix, ClientCore, QueryOptions, NO_BODY};
use super::interface::GroupMembersApi;

pub struct GroupMembersClient {
    core: ClientCore,
}

impl GroupMembersClient {
    pub(crate) fn new(core: ClientCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl GroupMembersApi for GroupMembersClient {
    async fn query_itwin_group_members(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<GroupMember>> {
        let path = format!("{itwin_id}/members/groups{}", query_suffix(query));
        tracing::debug!(target: "access_control::client::group_members", %itwin_id, "Listing iTwin group members");
        self.core
            .request(access_token, Method::GET, &path, NO_BODY, &[], |body: GroupMemberList| {
                body.members
            })
            .await
    }

    async fn get_itwin_group_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group_id: Uuid,
    ) -> ApiResponse<GroupMember> {
        let path = format!("{itwin_id}/members/groups/{group_id}");
        tracing::debug!(target: "access_control::client::group_members", %itwin_id, %group_id, "Fetching iTwin group member");
        self.core
            .request(access_token, Method::GET, &path, NO_BODY, &[], |body: GroupMemberEnvelope| {
                body.member
            })
            .await
    }

    async fn add_itwin_group_members(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        members: &[NewGroupMember],
    ) -> ApiResponse<Vec<GroupMember>> {
        let path = format!("{itwin_id}/members/groups");
        let body = AddMembersBody {
            members: members.to_vec(),
        };
        tracing::debug!(target: "access_control::client::group_members", %itwin_id, count = members.len(), "Adding iTwin group members");
        self.core
            .request(access_token, Method::POST, &path, Some(&body), &[], |body: GroupMemberList| {
                body.members
            })
            .await
    }

    async fn update_itwin_group_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group_id: Uuid,
        role_ids: Vec<Uuid>,
    ) -> ApiResponse<GroupMember> {
        let path = format!("{itwin_id}/members/groups/{group_id}");
        let body = RoleIdsBody { role_ids };
        tracing::debug!(target: "access_control::client::group_members", %itwin_id, %group_id, "Updating iTwin group member roles");
        self.core
            .request(access_token, Method::PATCH, &path, Some(&body), &[], |body: GroupMemberEnvelope| {
                body.member
            })
            .await
    }

    async fn remove_itwin_group_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group_id: Uuid,
    ) -> ApiResponse<()> {
        let path = format!("{itwin_id}/members/groups/{group_id}");
        tracing::debug!(target: "access_control::client::group_members", %itwin_id, %group_id, "Removing iTwin group member");
        self.core
            .request(access_token, Method::DELETE, &path, NO_BODY, &[], |_: serde_json::Value| ())
            .await
    }
}
