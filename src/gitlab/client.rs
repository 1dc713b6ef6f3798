use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::auth::Token;
use crate::error::{Result, SchedLensError};

/// One page per listing is all the exporter ever reads.
const PER_PAGE: u32 = 100;

#[derive(Debug)]
pub struct GitLabClient {
    client: Client,
    api_base: String,
    token: Token,
}

#[derive(Debug, Deserialize)]
pub struct Project {
    pub id: u64,
    pub path_with_namespace: String,
}

#[derive(Debug, Deserialize)]
pub struct PipelineSchedule {
    pub id: u64,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ScheduledPipeline {
    pub status: String,
}

impl GitLabClient {
    pub fn new(api_base: &str, token: Token) -> Result<Self> {
        let client = Client::builder()
            .user_agent("schedlens/0.1.0")
            .build()
            .map_err(|e| SchedLensError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Url::parse(api_base)
            .map_err(|e| SchedLensError::ConfigError(format!("Invalid API base URL: {e}")))?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_owned(),
            token,
        })
    }

    /// List the projects visible to the token. Single page, bounded size.
    pub async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let url = format!("{}/projects", self.api_base);
        self.fetch_list(&url, true).await
    }

    /// List the pipeline schedules of one project.
    pub async fn fetch_pipeline_schedules(&self, project_id: u64) -> Result<Vec<PipelineSchedule>> {
        let url = format!("{}/projects/{project_id}/pipeline_schedules", self.api_base);
        self.fetch_list(&url, false).await
    }

    /// List the pipelines a schedule has triggered. Single page, bounded size.
    pub async fn fetch_schedule_pipelines(
        &self,
        project_id: u64,
        schedule_id: u64,
    ) -> Result<Vec<ScheduledPipeline>> {
        let url = format!(
            "{}/projects/{project_id}/pipeline_schedules/{schedule_id}/pipelines",
            self.api_base
        );
        self.fetch_list(&url, true).await
    }

    async fn fetch_list<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        paged: bool,
    ) -> Result<Vec<T>> {
        let mut request = self
            .client
            .get(url)
            .header("PRIVATE-TOKEN", self.token.as_str());
        if paged {
            request = request.query(&[("per_page", PER_PAGE)]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SchedLensError::ApiError(format!("{status} {body}")));
        }

        let items = response.json::<Vec<T>>().await?;
        Ok(items)
    }
}
