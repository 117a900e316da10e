// src/types/roles.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A role scoped to one iTwin, granting a set of permission strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: Uuid,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    pub display_name: String,
    pub description: String,
}

/// Partial update; omitted fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

// Wire envelopes the service wraps role payloads in.
#[derive(Debug, Deserialize)]
pub(crate) struct RoleList {
    pub(crate) roles: Vec<Role>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RoleEnvelope {
    pub(crate) role: Role,
}
