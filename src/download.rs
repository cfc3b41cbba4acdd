use crate::error::{FontpackError, Result};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// One successfully installed font asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledAsset {
    pub family: String,
    pub variant: String,
    pub file_name: String,
}

/// Fetches a remote asset into a local file
pub trait AssetFetcher {
    /// Stream the body at `url` into `dest`, creating or truncating it
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Deterministic asset file name for a (family, variant) pair
#[must_use]
pub fn asset_file_name(family: &str, variant: &str) -> String {
    format!("{family}_{variant}.woff2")
}

/// Download one variant into the target directory.
///
/// The directory must already exist; the orchestrator creates it before
/// any installs.
pub fn install_asset(
    fetcher: &dyn AssetFetcher,
    family: &str,
    variant: &str,
    url: &str,
    dir: &Path,
) -> Result<InstalledAsset> {
    let file_name = asset_file_name(family, variant);
    let dest = dir.join(&file_name);

    println!("Downloading {family} ({variant}) -> {}", dest.display());
    fetcher.fetch(url, &dest)?;

    Ok(InstalledAsset {
        family: family.to_string(),
        variant: variant.to_string(),
        file_name,
    })
}

/// HTTP asset fetcher built on a blocking reqwest client
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self { client })
    }
}

impl AssetFetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let mut response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FontpackError::Download {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut file = fs::File::create(dest)?;
        response.copy_to(&mut file)?;
        Ok(())
    }
}
