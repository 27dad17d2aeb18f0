//! In-memory representation of UniMorph datasets
//!
//! Each language repository provides up to three kinds of data, stored as
//! headerless TSV files whose columns are fixed by the data kind.

pub mod resolver;

use std::fmt::{self, Display};

/// Category of morphological annotation
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, clap::ValueEnum)]
pub enum DataKind {
    /// Inflected forms of lemmas, with their feature bundles
    Inflections,

    /// Derived forms of lemmas
    Derivations,

    /// Inflected forms with their morpheme segmentation
    Segmentations,
}
//
impl DataKind {
    /// Suffix appended to the language code in dataset file names
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Inflections => "",
            Self::Derivations => ".derivations",
            Self::Segmentations => ".segmentations",
        }
    }

    /// Columns of the dataset files, in file order
    pub fn columns(self) -> &'static [Column] {
        use Column::*;
        match self {
            Self::Inflections => &[Lemma, Form, Features],
            Self::Derivations => &[Lemma, Form, Pos, Morph],
            Self::Segmentations => &[Lemma, Form, Features, Segmentation],
        }
    }

    /// Position of a column within this data kind's records, if present
    pub fn position(self, column: Column) -> Option<usize> {
        self.columns().iter().position(|&c| c == column)
    }
}
//
impl Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Inflections => "inflections",
            Self::Derivations => "derivations",
            Self::Segmentations => "segmentations",
        };
        f.write_str(name)
    }
}

/// Column of a dataset file
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Column {
    Lemma,
    Form,
    Features,
    Pos,
    Morph,
    Segmentation,
}

/// Row of a dataset file
///
/// Always holds exactly as many fields as its data kind has columns.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Record(Box<[Box<str>]>);
//
impl Record {
    /// Fields of this record, in column order
    pub fn fields(&self) -> &[Box<str>] {
        &self.0
    }
}
//
impl<S: Into<Box<str>>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Ordered records of one data kind for one language
///
/// Records are kept in file order, with split files concatenated in part
/// order. A data kind that a language does not have is represented by the
/// absence of a `RecordSet`, not by an empty one.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RecordSet {
    /// Data kind that determines the record schema
    kind: DataKind,

    /// Records in file order
    records: Vec<Record>,
}
//
impl RecordSet {
    /// Set up a record set with no records
    pub fn empty(kind: DataKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
        }
    }

    /// Wrap records which are known to match the data kind's schema
    pub(crate) fn new(kind: DataKind, records: Vec<Record>) -> Self {
        debug_assert!(records
            .iter()
            .all(|record| record.fields().len() == kind.columns().len()));
        Self { kind, records }
    }

    /// Data kind of these records
    pub fn kind(&self) -> DataKind {
        self.kind
    }

    /// Records in file order
    pub fn records(&self) -> &[Record] {
        &self.records[..]
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Truth that there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose fields exactly match all the provided column values
    ///
    /// Record order is preserved. Every filtered column must belong to this
    /// record set's data kind.
    pub fn matching(&self, criteria: &[(Column, &str)]) -> Self {
        let criteria = criteria
            .iter()
            .map(|&(column, value)| {
                let position = self.kind.position(column).unwrap_or_else(|| {
                    panic!("{} records have no {column:?} column", self.kind)
                });
                (position, value)
            })
            .collect::<Vec<_>>();
        let records = self
            .records
            .iter()
            .filter(|record| {
                criteria
                    .iter()
                    .all(|&(position, value)| &*record.fields()[position] == value)
            })
            .cloned()
            .collect();
        Self {
            kind: self.kind,
            records,
        }
    }
}
//
/// Headerless TSV rendering, one newline-terminated line per record
impl Display for RecordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            let mut fields = record.fields().iter();
            if let Some(first) = fields.next() {
                f.write_str(first)?;
            }
            for field in fields {
                write!(f, "\t{field}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
