use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{
    github::{GetReleases, GitHub, GitHubRepo},
    http::HttpClient,
    runtime::Runtime,
    wheel::{DEFAULT_DOWNLOAD_URL, DEFAULT_REPO, HostOverrides, ReleaseLocation, SystemProbe},
};

/// Settings collected from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigOptions {
    pub repo: String,
    pub download_url: Option<String>,
    pub api_url: Option<String>,
    pub overrides: HostOverrides,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO.to_string(),
            download_url: None,
            api_url: None,
            overrides: HostOverrides::default(),
        }
    }
}

pub struct Config<R: Runtime, G: GetReleases> {
    pub runtime: R,
    pub github: G,
    pub http_client: HttpClient,
    pub repo: GitHubRepo,
    pub location: ReleaseLocation,
    pub overrides: HostOverrides,
}

impl<R: Runtime> Config<R, GitHub> {
    pub fn new(runtime: R, options: ConfigOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Ok(token) = runtime.env_var("GITHUB_TOKEN") {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using GITHUB_TOKEN for authentication: {}", mask_token(&token));
        }

        let client = Client::builder()
            .user_agent(concat!("ai-wheel/", env!("AI_WHEEL_BUILD_VERSION")))
            .default_headers(headers)
            .build()?;

        let http_client = HttpClient::new(client);
        let github = GitHub::new(http_client.clone(), options.api_url.clone());

        Self::with_github(runtime, github, http_client, options)
    }
}

impl<R: Runtime, G: GetReleases> Config<R, G> {
    /// Assemble a config around an existing GitHub client.
    pub fn with_github(
        runtime: R,
        github: G,
        http_client: HttpClient,
        options: ConfigOptions,
    ) -> Result<Self> {
        let repo = options.repo.parse::<GitHubRepo>()?;
        let location = ReleaseLocation::new(
            options.download_url.as_deref().unwrap_or(DEFAULT_DOWNLOAD_URL),
            &repo.to_string(),
        );

        Ok(Self {
            runtime,
            github,
            http_client,
            repo,
            location,
            overrides: options.overrides,
        })
    }

    pub fn probe(&self) -> SystemProbe<'_, R> {
        SystemProbe::new(&self.runtime, self.overrides.clone())
    }
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*********".to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
