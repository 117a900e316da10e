// src/client/jobs.rs

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

use crate::response::ApiResponse;
use crate::types::jobs::{Job, JobEnvelope, JobResultMode, NewJob};

use super::dispatch::{ClientCore, NO_BODY};
use super::interface::JobsApi;

pub struct JobsClient {
    core: ClientCore,
}

impl JobsClient {
    pub(crate) fn new(core: ClientCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl JobsApi for JobsClient {
    async fn create_itwin_job(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        job: &NewJob,
    ) -> ApiResponse<Job> {
        let path = format!("{itwin_id}/jobs");
        tracing::debug!(target: "access_control::client::jobs", %itwin_id, "Creating iTwin member job");
        self.core
            .request(access_token, Method::POST, &path, Some(job), &[], |body: JobEnvelope| {
                body.job
            })
            .await
    }

    async fn get_itwin_job(
        &self,
        access_token: &str,
        itwin_id: Uuid,
        job_id: Uuid,
        result_mode: JobResultMode,
    ) -> ApiResponse<Job> {
        let path = format!("{itwin_id}/jobs/{job_id}");
        tracing::debug!(target: "access_control::client::jobs", %itwin_id, %job_id, ?result_mode, "Fetching iTwin member job");
        self.core
            .request(
                access_token,
                Method::GET,
                &path,
                NO_BODY,
                &[("prefer", result_mode.prefer_header())],
                |body: JobEnvelope| body.job,
            )
            .await
    }
}
