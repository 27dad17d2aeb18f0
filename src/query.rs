//! Morphological lookups against one language's datasets

use crate::{
    dataset::{resolver::Resolver, Column, DataKind, RecordSet},
    error::{self, Error},
    fetch::Fetcher,
    languages::LanguageCode,
};
use log::warn;
use std::collections::HashMap;

/// Selection of the data kinds that [`Language::analyze`] looks into
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, clap::ValueEnum)]
pub enum AnalysisMode {
    /// Inflections only
    Plain,

    /// Segmentations only
    Segment,

    /// Derivations only
    Derivations,

    /// Segmentations, then inflections, then derivations
    #[default]
    All,
}
//
impl AnalysisMode {
    /// Data kinds to be looked up, in output order
    fn kinds(self) -> &'static [DataKind] {
        use DataKind::*;
        match self {
            Self::Plain => &[Inflections],
            Self::Segment => &[Segmentations],
            Self::Derivations => &[Derivations],
            Self::All => &[Segmentations, Inflections, Derivations],
        }
    }
}

/// Query session over one language's datasets
///
/// Each data kind is loaded the first time it is needed, then kept for the
/// rest of the session. Changes to the dataset files are not picked up until
/// a new session is started.
#[derive(Debug)]
pub struct Language<F> {
    /// Language being queried
    code: LanguageCode,

    /// Source of the dataset files
    resolver: Resolver<F>,

    /// Data kinds loaded so far, `None` if the language does not have them
    data: HashMap<DataKind, Option<RecordSet>>,
}
//
impl<F: Fetcher> Language<F> {
    /// Start a query session
    ///
    /// Fails with [`Error::InvalidCode`] if the code does not have exactly 3
    /// characters. No I/O is performed until the first query.
    pub fn new(code: &str, resolver: Resolver<F>) -> error::Result<Self> {
        Ok(Self {
            code: LanguageCode::new(code)?,
            resolver,
            data: HashMap::new(),
        })
    }

    /// Language being queried
    pub fn code(&self) -> &LanguageCode {
        &self.code
    }

    /// All records of one data kind, or `None` if the language lacks it
    ///
    /// If the dataset cannot be downloaded, the language is treated as lacking
    /// the data kind. Malformed dataset files are reported as errors.
    pub async fn records(&mut self, kind: DataKind) -> error::Result<Option<&RecordSet>> {
        if !self.data.contains_key(&kind) {
            let records = match self.resolver.resolve(&self.code, kind).await {
                Ok(records) => records,
                Err(Error::Fetch { language, source }) => {
                    warn!(
                        "Could not fetch the {language} dataset ({source:#}), \
                         proceeding without {kind}"
                    );
                    None
                }
                Err(e) => return Err(e),
            };
            self.data.insert(kind, records);
        }
        Ok(self.data[&kind].as_ref())
    }

    /// Inflected forms of a lemma, optionally restricted to a feature bundle
    pub async fn inflect(
        &mut self,
        lemma: &str,
        features: Option<&str>,
    ) -> error::Result<RecordSet> {
        self.lookup_lemma(DataKind::Inflections, lemma, Column::Features, features)
            .await
    }

    /// Derived forms of a lemma, optionally restricted to a derivational morph
    pub async fn derive(
        &mut self,
        lemma: &str,
        morph: Option<&str>,
    ) -> error::Result<RecordSet> {
        self.lookup_lemma(DataKind::Derivations, lemma, Column::Morph, morph)
            .await
    }

    /// Known analyses of a word form, as headerless TSV
    ///
    /// Data kinds that the language lacks contribute nothing to the output.
    pub async fn analyze(&mut self, form: &str, mode: AnalysisMode) -> error::Result<String> {
        let mut output = String::new();
        for &kind in mode.kinds() {
            if let Some(records) = self.records(kind).await? {
                output.push_str(&records.matching(&[(Column::Form, form)]).to_string());
            }
        }
        Ok(output)
    }

    /// Records of a data kind with a certain lemma and optional extra criterion
    async fn lookup_lemma(
        &mut self,
        kind: DataKind,
        lemma: &str,
        column: Column,
        value: Option<&str>,
    ) -> error::Result<RecordSet> {
        let Some(records) = self.records(kind).await? else {
            return Ok(RecordSet::empty(kind));
        };
        let mut criteria = vec![(Column::Lemma, lemma)];
        criteria.extend(value.map(|value| (column, value)));
        Ok(records.matching(&criteria))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dataset::Record, fetch::testing::FixtureFetcher};
    use std::path::Path;
    use tempfile::TempDir;

    const INFLECTIONS: &str = "run\trunning\tV;PRS\nrun\tran\tV;PST\nrunner\trunners\tN;PL\n";
    const DERIVATIONS: &str = "run\trunner\tN\t-er\nrun\trerun\tV\tre-\nrunner\trunners\tN\t-s\n";
    const SEGMENTATIONS: &str = "run\tran\tV;PST\tran\nrun\trunning\tV;PRS\trunn|ing\n";

    /// Dataset root where "eng" has some data files
    fn fixture_root(files: &[(&str, &str)]) -> TempDir {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("eng");
        std::fs::create_dir(&dir).unwrap();
        for (name, contents) in files {
            std::fs::write(dir.join(name), contents).unwrap();
        }
        root
    }

    fn english(root: &TempDir) -> Language<FixtureFetcher> {
        Language::new("eng", Resolver::new(root.path(), FixtureFetcher::failing())).unwrap()
    }

    #[test]
    fn invalid_codes_are_rejected_before_io() {
        for code in ["", "e", "en", "engl"] {
            let resolver = Resolver::new(Path::new("/nonexistent"), FixtureFetcher::failing());
            let err = Language::new(code, resolver).unwrap_err();
            assert!(matches!(err, Error::InvalidCode(_)), "{err:?}");
        }
        let resolver = Resolver::new(Path::new("/nonexistent"), FixtureFetcher::failing());
        assert_eq!(Language::new("x1_", resolver).unwrap().code().as_str(), "x1_");
    }

    #[tokio::test]
    async fn inflect_by_lemma_and_features() {
        let root = fixture_root(&[("eng", INFLECTIONS)]);
        let mut eng = english(&root);
        let all = eng.inflect("run", None).await.unwrap();
        assert_eq!(
            all.records(),
            &[
                Record::from_iter(["run", "running", "V;PRS"]),
                Record::from_iter(["run", "ran", "V;PST"]),
            ]
        );
        let past = eng.inflect("run", Some("V;PST")).await.unwrap();
        assert_eq!(past.records(), &[Record::from_iter(["run", "ran", "V;PST"])]);
        assert!(eng.inflect("run", Some("PST")).await.unwrap().is_empty());
        assert!(eng.inflect("ran", None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn derive_by_lemma_and_morph() {
        let root = fixture_root(&[("eng", INFLECTIONS), ("eng.derivations", DERIVATIONS)]);
        let mut eng = english(&root);
        assert_eq!(eng.derive("run", None).await.unwrap().len(), 2);
        let er = eng.derive("run", Some("-er")).await.unwrap();
        assert_eq!(er.to_string(), "run\trunner\tN\t-er\n");
    }

    #[tokio::test]
    async fn absent_kinds_yield_empty_results() {
        let root = fixture_root(&[("README.md", "# eng\n")]);
        let mut eng = english(&root);
        let inflections = eng.inflect("run", None).await.unwrap();
        assert!(inflections.is_empty());
        assert_eq!(inflections.kind(), DataKind::Inflections);
        assert!(eng.derive("run", Some("-er")).await.unwrap().is_empty());
        for mode in [
            AnalysisMode::Plain,
            AnalysisMode::Segment,
            AnalysisMode::Derivations,
            AnalysisMode::All,
        ] {
            assert_eq!(eng.analyze("ran", mode).await.unwrap(), "");
        }
    }

    #[tokio::test]
    async fn analyze_modes() {
        let root = fixture_root(&[
            ("eng", INFLECTIONS),
            ("eng.derivations", DERIVATIONS),
            ("eng.segmentations", SEGMENTATIONS),
        ]);
        let mut eng = english(&root);
        assert_eq!(
            eng.analyze("runners", AnalysisMode::Plain).await.unwrap(),
            "runner\trunners\tN;PL\n"
        );
        assert_eq!(
            eng.analyze("runners", AnalysisMode::Derivations).await.unwrap(),
            "runner\trunners\tN\t-s\n"
        );
        assert_eq!(
            eng.analyze("running", AnalysisMode::Segment).await.unwrap(),
            "run\trunning\tV;PRS\trunn|ing\n"
        );
        assert_eq!(
            eng.analyze("runners", AnalysisMode::All).await.unwrap(),
            "runner\trunners\tN;PL\nrunner\trunners\tN\t-s\n"
        );
        assert_eq!(
            eng.analyze("ran", AnalysisMode::default()).await.unwrap(),
            "run\tran\tV;PST\tran\nrun\tran\tV;PST\n"
        );
    }

    #[tokio::test]
    async fn analyze_all_with_inflections_only_matches_plain() {
        let root = fixture_root(&[("eng", INFLECTIONS)]);
        let mut eng = english(&root);
        for form in ["running", "ran", "runners", "walked"] {
            assert_eq!(
                eng.analyze(form, AnalysisMode::All).await.unwrap(),
                eng.analyze(form, AnalysisMode::Plain).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn data_is_loaded_once_per_session() {
        let root = fixture_root(&[("eng", INFLECTIONS)]);
        let mut eng = english(&root);
        assert_eq!(eng.inflect("run", None).await.unwrap().len(), 2);
        std::fs::write(root.path().join("eng").join("eng"), "").unwrap();
        assert_eq!(eng.inflect("run", None).await.unwrap().len(), 2);
        assert_eq!(eng.records(DataKind::Inflections).await.unwrap().unwrap().len(), 3);

        // A new session sees the new file contents
        let mut eng = english(&root);
        assert_eq!(eng.records(DataKind::Inflections).await.unwrap().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn fetch_failures_degrade_to_absence() {
        let root = TempDir::new().unwrap();
        let mut eng = english(&root);
        assert!(eng.inflect("run", None).await.unwrap().is_empty());
        assert_eq!(eng.analyze("ran", AnalysisMode::All).await.unwrap(), "");
        assert!(eng.records(DataKind::Derivations).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn parse_errors_propagate() {
        let root = fixture_root(&[("eng", "run\tran\n")]);
        let mut eng = english(&root);
        let err = eng.inflect("run", None).await.unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "{err:?}");
        let err = eng.analyze("ran", AnalysisMode::All).await.unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "{err:?}");
    }
}
