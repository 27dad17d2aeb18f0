//! Location and loading of dataset files
//!
//! Depending on its size and age, a language repository stores each data kind
//! in one of several file layouts. These are probed in a fixed order, and the
//! first layout which has files wins:
//!
//! 1. `<lang><suffix>`
//! 2. `<lang><suffix>.tsv`
//! 3. `<lang><suffix>.1`, `<lang><suffix>.2`, ... up to the first missing part

use super::{DataKind, RecordSet};
use crate::{
    error::{self, Error},
    fetch::Fetcher,
    languages::{self, LanguageCode},
    tsv,
};
use log::debug;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File layout of a data kind within a language directory
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Layout {
    /// Single file named after the language and data kind
    Bare,

    /// Single file with an extra `.tsv` extension
    Tsv,

    /// Numbered parts of a file that was too large for one piece
    SplitParts,
}
//
impl Layout {
    /// Layouts in order of precedence
    const ALL: [Self; 3] = [Self::Bare, Self::Tsv, Self::SplitParts];

    /// Find the files of a dataset with this layout
    ///
    /// `base` is the layout-independent file path, e.g. `<dir>/fin.derivations`.
    /// Returns the files in load order, which is empty if the layout does not
    /// apply.
    async fn locate(self, base: &Path) -> error::Result<Vec<PathBuf>> {
        match self {
            Self::Bare => Ok(existing(base.to_owned()).await?.into_iter().collect()),
            Self::Tsv => Ok(existing(with_extension(base, "tsv")).await?.into_iter().collect()),
            Self::SplitParts => {
                let mut parts = Vec::new();
                for index in 1.. {
                    match existing(with_extension(base, index)).await? {
                        Some(part) => parts.push(part),
                        None => break,
                    }
                }
                Ok(parts)
            }
        }
    }
}

/// Append an extension to a path, keeping any extension it already has
fn with_extension(base: &Path, extension: impl std::fmt::Display) -> PathBuf {
    let mut path = base.as_os_str().to_owned();
    path.push(format!(".{extension}"));
    path.into()
}

/// Pass a path through if something exists there
async fn existing(path: PathBuf) -> error::Result<Option<PathBuf>> {
    match fs::try_exists(&path).await {
        Ok(true) => Ok(Some(path)),
        Ok(false) => Ok(None),
        Err(e) => Err(Error::io(&path, e)),
    }
}

/// Mechanism to turn a (language, data kind) pair into records
///
/// The dataset root is only read from, except when a language's directory is
/// missing or empty, in which case the [`Fetcher`] is asked to populate it.
#[derive(Debug)]
pub struct Resolver<F> {
    /// Directory holding one subdirectory per language
    root: Box<Path>,

    /// Source of missing datasets
    fetcher: F,
}
//
impl<F: Fetcher> Resolver<F> {
    /// Set up a resolver over a certain dataset root
    pub fn new(root: impl Into<Box<Path>>, fetcher: F) -> Self {
        Self {
            root: root.into(),
            fetcher,
        }
    }

    /// Source of missing datasets
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Directory where a language's dataset is stored
    pub fn language_dir(&self, language: &LanguageCode) -> PathBuf {
        self.root.join(language)
    }

    /// Make sure that a language's dataset is present locally
    ///
    /// Presence means that the language directory exists and is not empty.
    /// Otherwise the fetcher is asked for the dataset, and fails with
    /// [`Error::Fetch`] if it does not manage to populate the directory.
    pub async fn download(&self, language: &LanguageCode) -> error::Result<PathBuf> {
        let dir = self.language_dir(language);
        if languages::is_populated(&dir).await? {
            return Ok(dir);
        }
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| Error::io(&dir, e))?;
        let fetch_error = |source| Error::Fetch {
            language: language.as_str().into(),
            source,
        };
        self.fetcher
            .ensure_fetched(language, &self.root)
            .await
            .map_err(fetch_error)?;
        if !languages::is_populated(&dir).await? {
            return Err(fetch_error(anyhow::format_err!(
                "{} is still empty after download",
                dir.display()
            )));
        }
        Ok(dir)
    }

    /// Load the records of one data kind for one language
    ///
    /// Returns `None` if the language has no file of this data kind, which is
    /// common (many languages have no derivations, for example).
    pub async fn resolve(
        &self,
        language: &LanguageCode,
        kind: DataKind,
    ) -> error::Result<Option<RecordSet>> {
        let dir = self.download(language).await?;
        let base = dir.join(format!("{language}{}", kind.suffix()));
        for layout in Layout::ALL {
            let paths = layout.locate(&base).await?;
            if paths.is_empty() {
                continue;
            }
            debug!("Loading {language} {kind} from {paths:?}");
            let mut records = Vec::new();
            for path in &paths {
                records.extend(tsv::read_records(path, kind).await?);
            }
            let records = RecordSet::new(kind, records);
            debug!("Loaded {} {language} {kind} records", records.len());
            return Ok(Some(records));
        }
        debug!("Language {language} lacks file {}", base.display());
        Ok(None)
    }
}
