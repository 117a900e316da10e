// src/client/interface.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::response::ApiResponse;
use crate::types::{
    AddedMembersAndInvitations, AddedOwnerResult, Group, GroupMember, GroupMemberInvitation,
    GroupUpdate, Job, JobResultMode, MemberInvitation, NewGroup, NewGroupMember, NewJob,
    NewOwnerMember, NewRole, NewShare, NewUserMember, OwnerMember, Role, RoleUpdate, Share,
    UserMember,
};

use super::dispatch::QueryOptions;

// Traits abstracting each sub-client so consumers can mock individual
// resources in tests. Every method takes the caller-supplied bearer token;
// the client never acquires or refreshes tokens itself.

#[async_trait]
pub trait PermissionsApi: Send + Sync {
    /// All permissions the service knows about.
    async fn get_permissions(&self, access_token: &str) -> ApiResponse<Vec<String>>;
    /// Permissions the caller holds on one iTwin.
    async fn get_itwin_permissions(
        &self,
        access_token: &str,
        itwin_id: Uuid,
    ) -> ApiResponse<Vec<String>>;
}

#[async_trait]
pub trait RolesApi: Send + Sync {
    async fn get_itwin_roles(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<Role>>;
    async fn get_itwin_role(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        role_id: Uuid,
    ) -> ApiResponse<Role>;
    async fn create_itwin_role(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        role: &NewRole,
    ) -> ApiResponse<Role>;
    async fn update_itwin_role(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        role_id: Uuid,
        update: &RoleUpdate,
    ) -> ApiResponse<Role>;
    async fn delete_itwin_role(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        role_id: Uuid,
    ) -> ApiResponse<()>;
}

#[async_trait]
pub trait GroupsApi: Send + Sync {
    async fn get_itwin_groups(
        &self,
        access_token: &str,
        itwin_id: Uuid,
    ) -> ApiResponse<Vec<Group>>;
    async fn get_itwin_group(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group_id: Uuid,
    ) -> ApiResponse<Group>;
    async fn create_itwin_group(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group: &NewGroup,
    ) -> ApiResponse<Group>;
    async fn update_itwin_group(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group_id: Uuid,
        update: &GroupUpdate,
    ) -> ApiResponse<Group>;
    async fn delete_itwin_group(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group_id: Uuid,
    ) -> ApiResponse<()>;
}

#[async_trait]
pub trait UserMembersApi: Send + Sync {
    async fn query_itwin_user_members(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<UserMember>>;
    async fn get_itwin_user_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        member_id: Uuid,
    ) -> ApiResponse<UserMember>;
    /// The server partitions the new members into immediate members
    /// (internal users) and invitations (external users).
    async fn add_itwin_user_members(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        members: &[NewUserMember],
    ) -> ApiResponse<AddedMembersAndInvitations>;
    async fn update_itwin_user_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        member_id: Uuid,
        role_ids: Vec<Uuid>,
    ) -> ApiResponse<UserMember>;
    async fn remove_itwin_user_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        member_id: Uuid,
    ) -> ApiResponse<()>;
}

#[async_trait]
pub trait GroupMembersApi: Send + Sync {
    async fn query_itwin_group_members(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<GroupMember>>;
    async fn get_itwin_group_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group_id: Uuid,
    ) -> ApiResponse<GroupMember>;
    async fn add_itwin_group_members(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        members: &[NewGroupMember],
    ) -> ApiResponse<Vec<GroupMember>>;
    async fn update_itwin_group_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group_id: Uuid,
        role_ids: Vec<Uuid>,
    ) -> ApiResponse<GroupMember>;
    async fn remove_itwin_group_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        group_id: Uuid,
    ) -> ApiResponse<()>;
}

#[async_trait]
pub trait OwnerMembersApi: Send + Sync {
    async fn query_itwin_owner_members(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<OwnerMember>>;
    /// Yields either an immediate member or an invitation, decided
    /// server-side.
    async fn add_itwin_owner_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        owner: &NewOwnerMember,
    ) -> ApiResponse<AddedOwnerResult>;
    async fn remove_itwin_owner_member(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        member_id: Uuid,
    ) -> ApiResponse<()>;
}

#[async_trait]
pub trait MemberInvitationsApi: Send + Sync {
    async fn query_itwin_member_invitations(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<MemberInvitation>>;
    async fn delete_itwin_member_invitation(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        invitation_id: Uuid,
    ) -> ApiResponse<()>;
}

#[async_trait]
pub trait GroupMemberInvitationsApi: Send + Sync {
    async fn query_itwin_group_member_invitations(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<GroupMemberInvitation>>;
    async fn delete_itwin_group_member_invitation(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        invitation_id: Uuid,
    ) -> ApiResponse<()>;
}

#[async_trait]
pub trait JobsApi: Send + Sync {
    async fn create_itwin_job(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        job: &NewJob,
    ) -> ApiResponse<Job>;
    /// `result_mode` drives the `prefer: return=<mode>` header;
    /// `Representation` additionally surfaces the job's `error` field.
    async fn get_itwin_job(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        job_id: Uuid,
        result_mode: JobResultMode,
    ) -> ApiResponse<Job>;
}

#[async_trait]
pub trait SharesApi: Send + Sync {
    async fn query_itwin_shares(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        query: Option<QueryOptions>,
    ) -> ApiResponse<Vec<Share>>;
    async fn get_itwin_share(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        share_id: Uuid,
    ) -> ApiResponse<Share>;
    async fn create_itwin_share(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        share: &NewShare,
    ) -> ApiResponse<Share>;
    async fn delete_itwin_share(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        share_id: Uuid,
    ) -> ApiResponse<()>;
}
