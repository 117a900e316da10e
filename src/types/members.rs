// src/types/members.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invitations::MemberInvitation;
use super::roles::Role;

/// An individual user holding roles on an iTwin.
///
/// Identity fields are nullable: the service keeps membership rows for
/// identities deleted upstream ("missing users") and returns them with
/// `email`/`givenName`/`surname` null. The client passes these through
/// unfiltered; consumers must handle them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMember {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// An iTwin owner. Owners hold no roles; ownership itself is the grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerMember {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
}

/// A group granted roles on an iTwin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub id: Uuid,
    pub group_name: String,
    #[serde(default)]
    pub group_description: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserMember {
    pub email: String,
    pub role_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroupMember {
    pub group_id: Uuid,
    pub role_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOwnerMember {
    pub email: String,
}

/// Response to adding user members. The server, not the client, partitions
/// the request into immediate members (internal users) and pending
/// invitations (external users); both halves arrive in one response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedMembersAndInvitations {
    #[serde(default)]
    pub members: Vec<UserMember>,
    #[serde(default)]
    pub invitations: Vec<MemberInvitation>,
}

/// Response to adding an owner: either an immediate member or a pending
/// invitation, decided server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedOwnerResult {
    #[serde(default)]
    pub member: Option<OwnerMember>,
    #[serde(default)]
    pub invitation: Option<MemberInvitation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserMemberList {
    pub(crate) members: Vec<UserMember>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserMemberEnvelope {
    pub(crate) member: UserMember,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroupMemberList {
    pub(crate) members: Vec<GroupMember>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroupMemberEnvelope {
    pub(crate) member: GroupMember,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnerMemberList {
    pub(crate) members: Vec<OwnerMember>,
}

// Request bodies for the add/update member endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct AddMembersBody<T> {
    pub(crate) members: Vec<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoleIdsBody {
    pub(crate) role_ids: Vec<Uuid>,
}
