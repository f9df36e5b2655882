//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PrFilter, PullRequest, RepoConfig};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// Page size for list requests (GitHub maximum)
const PER_PAGE: u8 = 100;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: RepoConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, config: RepoConfig) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(ref api_url) = config.api_url {
            builder = builder
                .base_uri(api_url.trim_end_matches('/'))
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client, config })
    }
}

/// Helper to convert octocrab PR to our `PullRequest` type
fn pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        html_url: pr
            .html_url
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        base_ref: pr.base.ref_field.clone(),
        head_ref: pr.head.ref_field.clone(),
        body: pr.body.clone(),
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn list_open_prs(&self, filter: &PrFilter) -> Result<Vec<PullRequest>> {
        debug!(%filter, "listing open PRs");
        let pulls = self.client.pulls(&self.config.owner, &self.config.repo);
        let builder = pulls
            .list()
            .state(octocrab::params::State::Open)
            .per_page(PER_PAGE);

        // GitHub only honours head filters in `owner:branch` form
        let builder = match filter {
            PrFilter::Head(branch) => builder.head(format!("{}:{branch}", self.config.owner)),
            PrFilter::Base(branch) => builder.base(branch.as_str()),
        };

        let first_page = builder.send().await?;
        let prs = self.client.all_pages(first_page).await?;

        let result: Vec<PullRequest> = prs.iter().map(pr_from_octocrab).collect();
        debug!(%filter, count = result.len(), "listed open PRs");
        Ok(result)
    }

    async fn update_pr_body(&self, number: u64, body: &str) -> Result<()> {
        debug!(pr_number = number, "updating PR body");
        self.client
            .pulls(&self.config.owner, &self.config.repo)
            .update(number)
            .body(body)
            .send()
            .await?;
        debug!(pr_number = number, "updated PR body");
        Ok(())
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}
