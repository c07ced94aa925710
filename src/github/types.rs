use serde::Deserialize;

/// A file attached to a GitHub release.
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    pub size: u64,
    pub browser_download_url: String,
}

/// A GitHub release, trimmed to the fields wheel lookup needs.
#[derive(Deserialize, Debug, PartialEq, Clone, Default)]
pub struct Release {
    pub tag_name: String,
    pub name: Option<String>,
    pub published_at: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    pub fn find_asset(&self, name: &str) -> Option<&ReleaseAsset> {
        self.assets.iter().find(|a| a.name == name)
    }

    /// Names of the `.whl` assets, in release order.
    pub fn wheel_names(&self) -> Vec<&str> {
        self.assets
            .iter()
            .map(|a| a.name.as_str())
            .filter(|n| n.ends_with(".whl"))
            .collect()
    }
}
