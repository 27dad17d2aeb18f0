//! UniMorph language codes and locally cached languages

use crate::error::{self, Error};
use dialoguer::FuzzySelect;
use std::{
    fmt::{self, Display},
    io::ErrorKind,
    path::Path,
};
use tokio::fs;

/// 3-letter ISO 639-3 language code, used as the dataset namespace
///
/// Only the length is checked. Whether the code designates a real language is
/// left to the dataset repositories.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LanguageCode(Box<str>);
//
impl LanguageCode {
    /// Validate a user-provided language code
    pub fn new(code: &str) -> error::Result<Self> {
        if code.chars().count() == 3 {
            Ok(Self(code.into()))
        } else {
            Err(Error::InvalidCode(code.into()))
        }
    }

    /// Textual form of the code
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Truth that a dataset repository name looks like a language code
    pub fn is_repository_name(name: &str) -> bool {
        name.len() == 3 && name.bytes().all(|b| b.is_ascii_lowercase())
    }
}
//
impl Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
//
impl AsRef<Path> for LanguageCode {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

/// Truth that a language directory exists and has at least one entry
///
/// This does not check that the directory contents make any sense.
pub async fn is_populated(dir: &Path) -> error::Result<bool> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(Error::io(dir, e)),
    };
    let first = entries.next_entry().await.map_err(|e| Error::io(dir, e))?;
    Ok(first.is_some())
}

/// Languages whose dataset is already present under the dataset root
pub async fn cached(root: &Path) -> error::Result<Vec<LanguageCode>> {
    let mut entries = match fs::read_dir(root).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io(root, e)),
    };
    let mut languages = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| Error::io(root, e))? {
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        let Ok(language) = LanguageCode::new(&name) else {
            continue;
        };
        if is_populated(&entry.path()).await? {
            languages.push(language);
        }
    }
    languages.sort();
    Ok(languages)
}

/// Ask the user to pick one of the locally cached languages
pub fn prompt(choices: &[LanguageCode]) -> anyhow::Result<LanguageCode> {
    anyhow::ensure!(
        !choices.is_empty(),
        "no dataset has been downloaded yet, please specify a --language"
    );
    let language_idx = FuzzySelect::new()
        .with_prompt("Which language should I use?")
        .items(choices)
        .default(0)
        .max_length(usize::MAX)
        .interact()?;
    Ok(choices[language_idx].clone())
}
