// src/types/permissions.rs

use serde::Deserialize;

// Permissions are plain strings on the wire: `{"permissions": ["..."]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct PermissionList {
    pub(crate) permissions: Vec<String>,
}
