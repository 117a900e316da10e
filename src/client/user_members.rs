// src/client/user_members.rs

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

use crate::response::ApiResponse;
use crate::types::members::{
    AddMembersBody, AddedMembersAndInvitations, NewUserMember, RoleIdsBody, UserMember,
    UserMemberEnvelope, UserMemberList,
};

use super::dispatch::{query_suffix, ClientCore, QueryOptions, NO_BODY};
use super::interface::UserMembersApi;

pub struct UserMembersClient {
    core: ClientCore,
}

impl UserMembersClient {
    pub(crate) fn new(core: ClientCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl UserMembersApi for UserMembersClient {
    async fn query_itwin_user_members(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<UserMember>> {
        let path = format!("{itwin_id}/members/users{}", query_suffix(query));
        tracing::debug!(target: "access_control::client::user_members", %itwin_id, "Listing iTwin user members");
        self.core
            .request(access_token, Method::GET, &path, NO_BODY, &[], |body: UserMemberList| {
                body.members
            })
            .await
    }

    async fn get_itwin_user_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        member_id: Uuid,
    ) -> ApiResponse<UserMember> {
        let path = format!("{itwin_id}/members/users/{member_id}");
        tracing::debug!(target: "access_control::client::user_members", %itwin_id, %member_id, "Fetching iTwin user member");
        self.core
            .request(access_token, Method::GET, &path, NO_BODY, &[], |body: UserMemberEnvelope| {
                body.member
            })
            .await
    }

    async fn add_itwin_user_members(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        members: &[NewUserMember],
    ) -> ApiResponse<AddedMembersAndInvitations> {
        let path = format!("{itwin_id}/members/users");
        let body = AddMembersBody {
            members: members.to_vec(),
        };
        tracing::debug!(target: "access_control::client::user_members", %itwin_id, count = members.len(), "Adding iTwin user members");
        // The response is the partition itself, so no envelope unwrapping.
        self.core
            .request(
                access_token,
                Method::POST,
                &path,
                Some(&body),
                &[],
                |body: AddedMembersAndInvitations| body,
            )
            .await
    }

    async fn update_itwin_user_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        member_id: Uuid,
        role_ids: Vec<Uuid>,
    ) -> ApiResponse<UserMember> {
        let path = format!("{itwin_id}/members/users/{member_id}");
        let body = RoleIdsBody { role_ids };
        tracing::debug!(target: "access_control::client::user_members", %itwin_id, %member_id, "Updating iTwin user member roles");
        self.core
            .request(access_token, Method::PATCH, &path, Some(&body), &[], |body: UserMemberEnvelope| {
                body.member
            })
            .await
    }

    async fn remove_itwin_user_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        member_id: Uuid,
    ) -> ApiResponse<()> {
        let path = format!("{itwin_id}/members/users/{member_id}");
        tracing::debug!(target: "access_control::client::user_members", %itwin_id, %member_id, "Removing iTwin user member");
        self.core
            .request(access_token, Method::DELETE, &path, NO_BODY, &[], |_: serde_json::Value| ())
            .await
    }
}
