//! Program configuration

use crate::{Args, Result};
use anyhow::Context;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Final process configuration
///
/// This is the result of combining digested [`Args`] with the user's
/// environment. Please refer to [`Args`] to know more about common fields.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// Directory that holds one dataset directory per language
    pub root: Box<Path>,

    /// Truth that informative output should be suppressed
    pub quiet: bool,
}
//
impl Config {
    /// Determine process configuration from CLI arguments
    pub(crate) fn new(args: &Args) -> Result<Self> {
        let root = match &args.root {
            Some(root) => root.clone(),
            None => default_root()?,
        };
        Ok(Self {
            root: root.into(),
            quiet: args.quiet,
        })
    }
}

/// Dataset location when no other was specified: `~/.unimorph`
fn default_root() -> Result<PathBuf> {
    let dirs = BaseDirs::new().context("determining the user's home directory")?;
    Ok(dirs.home_dir().join(".unimorph"))
}
