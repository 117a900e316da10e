// src/types/jobs.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An asynchronous bulk member-operation job.
///
/// `error` is populated only when the job was fetched in
/// [`JobResultMode::Representation`]; in `Minimal` mode the service omits
/// the field entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Vec<JobError>>,
}

/// Server-defined job states, passed through unchanged. Values the client
/// does not know about deserialize to `Unknown` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Queued,
    Active,
    Completed,
    PartialCompleted,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Controls the `prefer: return=<mode>` header on job retrieval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobResultMode {
    #[default]
    Minimal,
    Representation,
}

impl JobResultMode {
    pub(crate) fn prefer_header(self) -> &'static str {
        match self {
            Self::Minimal => "return=minimal",
            Self::Representation => "return=representation",
        }
    }
}

/// Bulk member operations submitted as one job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_members: Option<Vec<super::members::NewUserMember>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_members: Option<Vec<MemberRoleAssignment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_members: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRoleAssignment {
    pub member_id: Uuid,
    pub role_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobEnvelope {
    pub(crate) job: Job,
}
