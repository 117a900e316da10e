// src/types/invitations.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::roles::Role;

/// A pending invitation for an external user to join an iTwin with roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInvitation {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub invited_by_email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// A pending invitation for an external user to join a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMemberInvitation {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub invited_by_email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub group: Option<GroupRef>,
}

/// Minimal reference to the group an invitation targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MemberInvitationList {
    pub(crate) invitations: Vec<MemberInvitation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroupMemberInvitationList {
    pub(crate) invitations: Vec<GroupMemberInvitation>,
}
