// src/types/shares.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A time-limited share of an iTwin under a named contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    pub id: Uuid,
    pub share_contract: String,
    pub expiration: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Share creation body. Both fields are optional; the server fills in
/// defaults (`shareContract: "Default"` and a non-null expiration) for
/// whatever is omitted. A past expiration is rejected with 422.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShare {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_contract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShareList {
    pub(crate) shares: Vec<Share>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShareEnvelope {
    pub(crate) share: Share,
}
