// src/types/groups.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named collection of users that can be granted roles as a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<GroupUserInfo>,
    #[serde(default)]
    pub ims_groups: Vec<String>,
}

/// A user listed inside a group. Identity fields are nullable: the service
/// keeps membership rows for identities deleted upstream ("missing users")
/// and the client passes them through unfiltered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUserInfo {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
    pub name: String,
    pub description: String,
}

/// Partial update; `members` takes user emails, `ims_groups` IMS group names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ims_groups: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroupList {
    pub(crate) groups: Vec<Group>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroupEnvelope {
    pub(crate) group: Group,
}
