// src/client/owner_members.rs

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

use crate::response::ApiResponse;
use crate::types::members::{AddedOwnerResult, NewOwnerMember, OwnerMember, OwnerMemberList};

use super::dispatch::{query_suffix, ClientCore, QueryOptions, NO_BODY};
use super::interface::OwnerMembersApi;

pub struct OwnerMembersClient {
    core: ClientCore,
}

impl OwnerMembersClient {
    pub(crate) fn new(core: ClientCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl OwnerMembersApi for OwnerMembersClient {
    async fn query_itwin_owner_members(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<OwnerMember>> {
        let path = format!("{itwin_id}/members/owners{}", query_suffix(query));
        tracing::debug!(target: "access_control::client::owner_members", %itwin_id, "Listing iTwin owners");
        self.core
            .request(access_token, Method::GET, &path, NO_BODY, &[], |body: OwnerMemberList| {
                body.members
            })
            .await
    }

    async fn add_itwin_owner_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        owner: &NewOwnerMember,
    ) -> ApiResponse<AddedOwnerResult> {
        let path = format!("{itwin_id}/members/owners");
        tracing::debug!(target: "access_control::client::owner_members", %itwin_id, email = %owner.email, "Adding iTwin owner");
        // Whole body is the result: `{member}` for internal users,
        // `{invitation}` for external ones.
        self.core
            .request(access_token, Method::POST, &path, Some(owner), &[], |body: AddedOwnerResult| {
                body
            })
            .await
    }

    async fn remove_itwin_owner_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        member_id: Uuid,
    ) -> ApiResponse<()> {
        let path = format!("{itwin_id}/members/owners/{member_id}");
        tracing::debug!(target: "access_control::client::owner_members", %itwin_id, %member_id, "Removing iTwin owner");
        self.core
            .request(access_token, Method::DELETE, &path, NO_BODY, &[], |_: serde_json::Value| ())
            .await
    }
}
