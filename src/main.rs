//! Command-line access to the UniMorph morphological datasets, whose general
//! documentation you can find at <https://unimorph.github.io>.
//!
//! Each language's dataset is downloaded from GitHub on first use, then kept
//! in a local directory for later queries.

mod citation;
mod config;
mod dataset;
mod error;
mod fetch;
mod languages;
mod progress;
mod query;
mod tsv;

use crate::{
    config::Config,
    dataset::{resolver::Resolver, DataKind},
    fetch::{Fetcher, GitHub},
    languages::LanguageCode,
    progress::ProgressReport,
    query::{AnalysisMode, Language},
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter, Stdout};

/// Annotated morphology in the world's languages
///
/// Quick usage:
///
///   analyze a text: cat spanish.txt | unimorph analyze -l spa
///
///   download datasets: cat iso-codes.txt | xargs -I@ unimorph download -l @
#[derive(Parser, Debug)]
#[command(version, author)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Suppress informative output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Directory where datasets are stored
    ///
    /// Defaults to a ".unimorph" directory in your home directory.
    #[arg(long, env = "UNIMORPH", global = true)]
    root: Option<PathBuf>,
}

/// Operation to be carried out
#[derive(Subcommand, Debug)]
enum Command {
    /// Download the dataset of a language, unless it is already present
    Download {
        /// 3-letter ISO 639-3 code of the language
        #[arg(short, long)]
        language: Box<str>,
    },

    /// List the languages that have a dataset
    List {
        /// Only list languages whose dataset was already downloaded
        #[arg(long)]
        local: bool,
    },

    /// Show how to cite UniMorph
    Citation,

    /// Show the inflected forms of a lemma
    Inflect {
        #[command(flatten)]
        language: LanguageArg,

        /// Lemma to be inflected
        #[arg(short, long)]
        word: Box<str>,

        /// Only show forms with this exact feature bundle, e.g. "V;PST"
        #[arg(long)]
        features: Option<Box<str>>,
    },

    /// Show the derived forms of a lemma
    Derive {
        #[command(flatten)]
        language: LanguageArg,

        /// Lemma to be derived from
        #[arg(short, long)]
        word: Box<str>,

        /// Only show derivations with this exact morph, e.g. "-er"
        #[arg(long)]
        morph: Option<Box<str>>,
    },

    /// Show the known analyses of a word form
    Analyze {
        #[command(flatten)]
        language: LanguageArg,

        /// Word form to be analyzed
        ///
        /// If not specified, every whitespace-separated word from stdin will
        /// be analyzed in turn.
        #[arg(short, long)]
        word: Option<Box<str>>,

        /// Kinds of analyses to be shown
        #[arg(long, value_enum, default_value_t)]
        mode: AnalysisMode,
    },

    /// Show the known segmentations of a word form
    Segment {
        #[command(flatten)]
        language: LanguageArg,

        /// Word form to be segmented, read from stdin if not specified
        #[arg(short, long)]
        word: Option<Box<str>>,
    },

    /// Show every record of one kind of data
    Dump {
        #[command(flatten)]
        language: LanguageArg,

        /// Kind of data to be shown
        #[arg(value_enum)]
        kind: DataKind,
    },
}

/// Language selection of query commands
#[derive(clap::Args, Debug)]
struct LanguageArg {
    /// 3-letter ISO 639-3 code of the language, e.g. "spa"
    ///
    /// Will interactively prompt for a downloaded language if not specified.
    #[arg(short, long)]
    language: Option<Box<str>>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Decode CLI arguments
    let args = Args::parse();

    // Set up logging
    setup_logging(args.quiet).context("setting up logging")?;

    // Set up dataset access
    let config = Config::new(&args)?;
    let report = if config.quiet {
        ProgressReport::hidden()
    } else {
        ProgressReport::new()
    };
    let resolver = Resolver::new(config.root.clone(), GitHub::new(report)?);

    // Carry out the requested operation
    let mut stdout = BufWriter::new(tokio::io::stdout());
    match args.command {
        Command::Download { language } => {
            let language = LanguageCode::new(&language)?;
            let dir = resolver.download(&language).await?;
            info!("The {language} dataset is available in {}", dir.display());
        }
        Command::List { local } => {
            let languages = if local {
                languages::cached(&config.root).await?
            } else {
                let available = resolver.fetcher().list_available_languages().await?;
                available.into_iter().collect()
            };
            for language in languages {
                stdout.write_all(format!("{language}\n").as_bytes()).await?;
            }
        }
        Command::Citation => {
            stdout.write_all(citation::CITATION.as_bytes()).await?;
        }
        Command::Inflect {
            language,
            word,
            features,
        } => {
            let mut language = open_language(language, resolver, &config).await?;
            let forms = language.inflect(&word, features.as_deref()).await?;
            stdout.write_all(forms.to_string().as_bytes()).await?;
        }
        Command::Derive {
            language,
            word,
            morph,
        } => {
            let mut language = open_language(language, resolver, &config).await?;
            let forms = language.derive(&word, morph.as_deref()).await?;
            stdout.write_all(forms.to_string().as_bytes()).await?;
        }
        Command::Analyze {
            language,
            word,
            mode,
        } => {
            let mut language = open_language(language, resolver, &config).await?;
            analyze(&mut language, word.as_deref(), mode, &mut stdout).await?;
        }
        Command::Segment { language, word } => {
            let mut language = open_language(language, resolver, &config).await?;
            analyze(&mut language, word.as_deref(), AnalysisMode::Segment, &mut stdout).await?;
        }
        Command::Dump { language, kind } => {
            let mut language = open_language(language, resolver, &config).await?;
            let code = language.code().clone();
            match language.records(kind).await? {
                Some(records) => stdout.write_all(records.to_string().as_bytes()).await?,
                None => warn!("The {code} dataset has no {kind}"),
            }
        }
    }
    stdout.flush().await?;
    Ok(())
}

/// Use anyhow for Result type erasure
pub use anyhow::Result;

/// Start a query session for the user-selected language
async fn open_language(
    language: LanguageArg,
    resolver: Resolver<GitHub>,
    config: &Config,
) -> Result<Language<GitHub>> {
    let code = match language.language {
        Some(code) => code,
        None => {
            let cached = languages::cached(&config.root)
                .await
                .context("looking up downloaded languages")?;
            languages::prompt(&cached)?.as_str().into()
        }
    };
    Ok(Language::new(&code, resolver)?)
}

/// Analyze one word, or every word from stdin
async fn analyze(
    language: &mut Language<GitHub>,
    word: Option<&str>,
    mode: AnalysisMode,
    stdout: &mut BufWriter<Stdout>,
) -> Result<()> {
    if let Some(word) = word {
        let analyses = language.analyze(word, mode).await?;
        stdout.write_all(analyses.as_bytes()).await?;
        return Ok(());
    }
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading words from stdin")? {
        for word in line.split_whitespace() {
            let analyses = language.analyze(word, mode).await?;
            stdout.write_all(analyses.as_bytes()).await?;
        }
    }
    Ok(())
}

/// Set up logging
///
/// Logs go to stderr, so that stdout only carries query results. Warnings are
/// shown even in quiet mode.
fn setup_logging(quiet: bool) -> std::result::Result<(), log::SetLoggerError> {
    let verbosity = if quiet {
        1
    } else if cfg!(feature = "log-trace") {
        4
    } else if cfg!(debug_assertions) {
        3
    } else {
        2
    };
    stderrlog::new()
        .module(module_path!())
        .verbosity(verbosity)
        .init()
}
