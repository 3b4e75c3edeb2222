// file: src/assets/provisioner.rs
// description: makes sure the parser jars exist locally, downloading missing ones
// reference: https://docs.rs/reqwest

use crate::config::{AssetConfig, AssetsConfig};
use crate::error::{DepParseError, Result};
use crate::pipeline::progress::DownloadProgress;
use futures::StreamExt;
use reqwest::Client;
use sha2::{Digest, Sha256};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub path: PathBuf,
    pub url: String,
    pub sha256: Option<String>,
}

impl Asset {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            url: url.into(),
            sha256: None,
        }
    }

    pub fn from_config(name: &str, config: &AssetConfig) -> Self {
        Self {
            name: name.to_string(),
            path: config.path.clone(),
            url: config.url.clone(),
            sha256: config.sha256.as_ref().map(|digest| digest.to_lowercase()),
        }
    }

    /// The parser jar followed by the models jar.
    pub fn from_assets_config(config: &AssetsConfig) -> Vec<Self> {
        vec![
            Self::from_config("parser jar", &config.parser_jar),
            Self::from_config("models jar", &config.models_jar),
        ]
    }

    fn partial_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".part");
        PathBuf::from(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    Present,
    Downloaded { bytes: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub name: String,
    pub path: PathBuf,
    pub status: AssetStatus,
}

pub struct AssetProvisioner {
    client: Client,
    force: bool,
    show_progress: bool,
    colored: bool,
}

impl AssetProvisioner {
    pub fn new(force: bool) -> Self {
        Self {
            client: Client::new(),
            force,
            show_progress: false,
            colored: false,
        }
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_progress(mut self, colored: bool) -> Self {
        self.show_progress = true;
        self.colored = colored;
        self
    }

    /// Every returned path exists once this succeeds. Assets already on
    /// disk are not fetched unless the provisioner was built with `force`.
    pub async fn ensure(&self, assets: &[Asset]) -> Result<Vec<ProvisionReport>> {
        let mut reports = Vec::with_capacity(assets.len());
        for asset in assets {
            reports.push(self.ensure_one(asset).await?);
        }
        Ok(reports)
    }

    async fn ensure_one(&self, asset: &Asset) -> Result<ProvisionReport> {
        let present = fs::try_exists(&asset.path)
            .await
            .map_err(|e| DepParseError::file(&asset.path, e))?;

        let status = if present && !self.force {
            info!("{} present at {}", asset.name, asset.path.display());
            AssetStatus::Present
        } else {
            if present {
                warn!("Re-downloading {} over {}", asset.name, asset.path.display());
            }
            let bytes = self.download(asset).await?;
            AssetStatus::Downloaded { bytes }
        };

        Ok(ProvisionReport {
            name: asset.name.clone(),
            path: asset.path.clone(),
            status,
        })
    }

    async fn download(&self, asset: &Asset) -> Result<u64> {
        info!("Downloading {} from {}", asset.name, asset.url);

        if let Some(parent) = asset.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DepParseError::file(parent, e))?;
        }

        let response = self
            .client
            .get(&asset.url)
            .send()
            .await
            .map_err(|source| DepParseError::Download {
                url: asset.url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(DepParseError::HttpStatus {
                url: asset.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let progress = if self.show_progress {
            DownloadProgress::new(&asset.name, response.content_length(), self.colored)
        } else {
            DownloadProgress::hidden()
        };

        let partial = asset.partial_path();
        let written = match self.write_body(asset, response, &partial, &progress).await {
            Ok(bytes) => bytes,
            Err(e) => {
                progress.finish();
                if let Err(cleanup) = fs::remove_file(&partial).await {
                    debug!("Could not remove {}: {}", partial.display(), cleanup);
                }
                return Err(e);
            }
        };
        progress.finish();

        fs::rename(&partial, &asset.path)
            .await
            .map_err(|e| DepParseError::file(&asset.path, e))?;

        info!(
            "Downloaded {} ({} bytes in {:.2}s)",
            asset.name,
            written,
            progress.elapsed().as_secs_f64()
        );
        Ok(written)
    }

    async fn write_body(
        &self,
        asset: &Asset,
        response: reqwest::Response,
        partial: &Path,
        progress: &DownloadProgress,
    ) -> Result<u64> {
        let mut file = File::create(partial)
            .await
            .map_err(|e| DepParseError::file(partial, e))?;
        let mut hasher = Sha256::new();
        let mut written = 0u64;
        let mut body = response.bytes_stream();

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|source| DepParseError::Download {
                url: asset.url.clone(),
                source,
            })?;
            file.write_all(&chunk)
                .await
                .map_err(|e| DepParseError::file(partial, e))?;
            hasher.update(&chunk);
            written += chunk.len() as u64;
            progress.advance(chunk.len() as u64);
        }

        file.flush()
            .await
            .map_err(|e| DepParseError::file(partial, e))?;
        file.sync_all()
            .await
            .map_err(|e| DepParseError::file(partial, e))?;

        if let Some(expected) = &asset.sha256 {
            let actual = format!("{:x}", hasher.finalize());
            if &actual != expected {
                return Err(DepParseError::Checksum {
                    path: asset.path.clone(),
                    expected: expected.clone(),
                    actual,
                });
            }
            debug!("Checksum verified for {}", asset.name);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_assets_from_config() {
        let config = Config::default_config();
        let assets = Asset::from_assets_config(&config.assets);
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].path, PathBuf::from("assets/stanford-parser.jar"));
        assert!(assets[1].url.ends_with("stanford-parser-3.9.1-models.jar"));
    }

    #[test]
    fn test_partial_path() {
        let asset = Asset::new("parser jar", "assets/stanford-parser.jar", "http://example.com");
        assert_eq!(
            asset.partial_path(),
            PathBuf::from("assets/stanford-parser.jar.part")
        );
    }

    #[test]
    fn test_checksum_is_lowercased() {
        let mut config = Config::default_config();
        config.assets.parser_jar.sha256 = Some("AB".repeat(32));
        let assets = Asset::from_assets_config(&config.assets);
        assert_eq!(assets[0].sha256, Some("ab".repeat(32)));
    }
}
