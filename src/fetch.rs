//! Retrieval of UniMorph datasets from GitHub
//!
//! Every UniMorph language lives in its own repository of the `unimorph`
//! GitHub organization, named after the language code.

use crate::{languages::LanguageCode, progress::ProgressReport, Result};
use anyhow::Context;
use log::{debug, info};
use reqwest::Response;
use serde::Deserialize;
use std::{collections::BTreeSet, path::Path};
use tokio::{fs, process::Command};

/// Source of dataset repositories
///
/// Implementations are the only writers of the dataset root.
pub trait Fetcher {
    /// Download the dataset of a language into `<root>/<language>`
    async fn ensure_fetched(&self, language: &LanguageCode, root: &Path) -> Result<()>;

    /// Codes of all languages that can be downloaded
    async fn list_available_languages(&self) -> Result<BTreeSet<LanguageCode>>;
}

/// GitHub organization hosting the datasets
const ORGANIZATION: &str = "unimorph";

/// Number of repositories per page of GitHub's repository listing
const REPOS_PER_PAGE: usize = 100;

/// [`Fetcher`] that clones the UniMorph GitHub repositories
#[derive(Clone, Debug)]
pub struct GitHub {
    /// HTTP client for GitHub API queries
    client: reqwest::Client,

    /// Progress report for long-running operations
    report: ProgressReport,
}
//
impl GitHub {
    /// Prepare to talk to GitHub
    pub fn new(report: ProgressReport) -> Result<Self> {
        // GitHub rejects API requests that come without a User-Agent
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("setting up the HTTP client")?;
        Ok(Self { client, report })
    }
}
//
impl Fetcher for GitHub {
    async fn ensure_fetched(&self, language: &LanguageCode, root: &Path) -> Result<()> {
        fs::create_dir_all(root)
            .await
            .with_context(|| format!("creating dataset root {}", root.display()))?;
        let url = format!("https://github.com/{ORGANIZATION}/{language}.git");
        info!(
            "Downloading {ORGANIZATION}/{language} to {}",
            root.join(language).display()
        );
        let status = {
            let _tracker = self.report.spinner(format!("Cloning {url}"));
            Command::new("git")
                .arg("clone")
                .arg("--quiet")
                .arg(&url)
                .arg(language.as_str())
                .current_dir(root)
                // Missing repositories must fail instead of asking for credentials
                .env("GIT_TERMINAL_PROMPT", "0")
                .status()
                .await
                .context("running git clone")?
        };
        anyhow::ensure!(status.success(), "git clone of {url} failed ({status})");
        Ok(())
    }

    async fn list_available_languages(&self) -> Result<BTreeSet<LanguageCode>> {
        let tracker = self.report.spinner("Listing UniMorph datasets");
        let mut languages = BTreeSet::new();
        for page in 1.. {
            let url = format!(
                "https://api.github.com/orgs/{ORGANIZATION}/repos?per_page={REPOS_PER_PAGE}&page={page}"
            );
            let context = || format!("listing repositories from {url}");
            debug!("Querying {url}");
            let repositories = self
                .client
                .get(&url)
                .send()
                .await
                .and_then(Response::error_for_status)
                .with_context(context)?
                .json::<Vec<Repository>>()
                .await
                .with_context(context)?;
            let last_page = repositories.len() < REPOS_PER_PAGE;
            languages.extend(
                repositories
                    .into_iter()
                    .filter(|repo| LanguageCode::is_repository_name(&repo.name))
                    .filter_map(|repo| LanguageCode::new(&repo.name).ok()),
            );
            tracker.set_message(format!("{} languages found", languages.len()));
            if last_page {
                break;
            }
        }
        Ok(languages)
    }
}

/// Repository from GitHub's organization repository listing
#[derive(Debug, Deserialize)]
struct Repository {
    /// Repository name, which is a language code for dataset repositories
    name: Box<str>,
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// [`Fetcher`] that writes fixture files instead of downloading
    #[derive(Debug, Default)]
    pub struct FixtureFetcher {
        /// Files (name, contents) written into the language directory
        files: Vec<(&'static str, &'static str)>,

        /// Truth that fetching should fail
        fail: bool,

        /// Number of `ensure_fetched` calls so far
        calls: AtomicUsize,
    }
    //
    impl FixtureFetcher {
        /// Fetcher that writes some files into the language directory
        pub fn with_files(files: Vec<(&'static str, &'static str)>) -> Self {
            Self {
                files,
                ..Self::default()
            }
        }

        /// Fetcher that always fails
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        /// Number of download attempts so far
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::Relaxed)
        }
    }
    //
    impl Fetcher for FixtureFetcher {
        async fn ensure_fetched(&self, language: &LanguageCode, root: &Path) -> Result<()> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            anyhow::ensure!(!self.fail, "network is unreachable");
            let dir = root.join(language);
            fs::create_dir_all(&dir).await?;
            for (name, contents) in &self.files {
                fs::write(dir.join(name), contents).await?;
            }
            Ok(())
        }

        async fn list_available_languages(&self) -> Result<BTreeSet<LanguageCode>> {
            anyhow::ensure!(!self.fail, "network is unreachable");
            Ok(["deu", "eng"]
                .into_iter()
                .map(|code| LanguageCode::new(code).unwrap())
                .collect())
        }
    }
}
