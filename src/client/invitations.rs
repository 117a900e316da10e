// src/client/invitations.rs

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

use crate::response::ApiResponse;
use crate::types::invitations::{
    GroupMemberInvitation, GroupMemberInvitationList, MemberInvitation, MemberInvitationList,
};

use super::dispatch::{query_suffix, ClientCore, QueryOptions, NO_BODY};
use super::interface::{GroupMemberInvitationsApi, MemberInvitationsApi};

pub struct MemberInvitationsClient {
    core: ClientCore,
}

impl MemberInvitationsClient {
    pub(crate) fn new(core: ClientCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl MemberInvitationsApi for MemberInvitationsClient {
    async fn query_itwin_member_invitations(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<MemberInvitation>> {
        let path = format!("{itwin_id}/members/invitations{}", query_suffix(query));
        tracing::debug!(target: "access_control::client::invitations", %itwin_id, "Listing iTwin member invitations");
        self.core
            .request(access_token, Method::GET, &path, NO_BODY, &[], |body: MemberInvitationList| {
                body.invitations
            })
            .await
    }

    async fn delete_itwin_member_invitation(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        invitation_id: Uuid,
    ) -> ApiResponse<()> {
        let path = format!("{itwin_id}/members/invitations/{invitation_id}");
        tracing::debug!(target: "access_control::client::invitations", %itwin_id, %invitation_id, "Deleting iTwin member invitation");
        self.core
            .request(access_token, Method::DELETE, &path, NO_BODY, &[], |_: serde_json::Value| ())
            .await
    }
}

pub struct GroupMemberInvitationsClient {
    core: ClientCore,
}

impl GroupMemberInvitationsClient {
    pub(crate) fn new(core: ClientCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl GroupMemberInvitationsApi for GroupMemberInvitationsClient {
    async fn query_itwin_group_member_invitations(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<GroupMemberInvitation>> {
        let path = format!("{itwin_id}/members/groups/invitations{}", query_suffix(query));
        tracing::debug!(target: "access_control::client::invitations", %itwin_id, "Listing iTwin group member invitations");
        self.core
            .request(
                access_token,
                Method::GET,
                &path,
                NO_BODY,
                &[],
                |body: GroupMemberInvitationList| body.invitations,
            )
            .await
    }

    async fn delete_itwin_group_member_invitation(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        invitation_id: Uuid,
    ) -> ApiResponse<()> {
        let path = format!("{itwin_id}/members/groups/invitations/{invitation_id}");
        tracing::debug!(target: "access_control::client::invitations", %itwin_id, %invitation_id, "Deleting iTwin group member invitation");
        self.core
            .request(access_token, Method::DELETE, &path, NO_BODY, &[], |_: serde_json::Value| ())
            .await
    }
}
