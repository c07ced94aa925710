use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;

use crate::http::HttpClient;

use super::repo::GitHubRepo;
use super::types::Release;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetReleases: Send + Sync {
    async fn get_latest_release(&self, repo: &GitHubRepo) -> Result<Release>;
    async fn get_release_by_tag(&self, repo: &GitHubRepo, tag: &str) -> Result<Release>;
    fn api_url(&self) -> &str;
}

pub struct GitHub {
    pub http_client: HttpClient,
    pub api_url: String,
}

impl GitHub {
    pub fn new(http_client: HttpClient, api_url: Option<String>) -> Self {
        let api_url = api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            http_client,
            api_url,
        }
    }
}

#[async_trait]
impl GetReleases for GitHub {
    #[tracing::instrument(skip(self))]
    async fn get_latest_release(&self, repo: &GitHubRepo) -> Result<Release> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url, repo.owner, repo.repo
        );
        debug!("Fetching latest release from {}...", url);

        self.http_client
            .get_json(&url)
            .await
            .with_context(|| format!("Failed to fetch the latest release of {}", repo))
    }

    #[tracing::instrument(skip(self))]
    async fn get_release_by_tag(&self, repo: &GitHubRepo, tag: &str) -> Result<Release> {
        let url = format!(
            "{}/repos/{}/{}/releases/tags/{}",
            self.api_url, repo.owner, repo.repo, tag
        );
        debug!("Fetching release {} from {}...", tag, url);

        self.http_client
            .get_json(&url)
            .await
            .with_context(|| format!("Failed to fetch release '{}' of {}", tag, repo))
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }
}
