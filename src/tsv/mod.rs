//! Parsing of UniMorph TSV files

use crate::{
    dataset::{DataKind, Record},
    error::{self, Error},
};
use csv_async::AsyncReaderBuilder;
use futures::stream::StreamExt;
use std::path::Path;
use tokio::fs::File;

/// Read all records from a dataset file
///
/// Files have no header row and no quoting: every byte between two tabs
/// belongs to the field. Rows whose field count does not match the data
/// kind's schema are rejected.
pub async fn read_records(path: &Path, kind: DataKind) -> error::Result<Vec<Record>> {
    let file = File::open(path).await.map_err(|e| Error::io(path, e))?;
    let mut rows = AsyncReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .create_reader(file)
        .into_records();

    let num_columns = kind.columns().len();
    let mut records = Vec::new();
    while let Some(row) = rows.next().await {
        let row = row.map_err(|e| Error::parse(path, e.to_string()))?;
        if row.len() != num_columns {
            let line = row.position().map_or(0, |pos| pos.line());
            return Err(Error::parse(
                path,
                format!(
                    "line {line} has {} fields, but {kind} records have {num_columns}",
                    row.len()
                ),
            ));
        }
        records.push(row.iter().collect());
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn reads_rows_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("eng.segmentations");
        std::fs::write(
            &path,
            "run\trunning\tV;V.PTCP;PRS\trun|ning\n\"q\"\tq's\tN\tq|'s\r\n",
        )
        .unwrap();
        let records = read_records(&path, DataKind::Segmentations).await.unwrap();
        assert_eq!(
            records,
            [
                Record::from_iter(["run", "running", "V;V.PTCP;PRS", "run|ning"]),
                Record::from_iter(["\"q\"", "q's", "N", "q|'s"]),
            ]
        );
    }

    #[tokio::test]
    async fn empty_file_has_no_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("eng");
        std::fs::write(&path, "").unwrap();
        assert!(read_records(&path, DataKind::Inflections).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn wrong_field_count_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("eng");
        for contents in [
            "run\tran\tV;PST\nwalk\twalked\n",
            "run\tran\tV;PST\textra\n",
            "run\tran\n",
        ] {
            std::fs::write(&path, contents).unwrap();
            let err = read_records(&path, DataKind::Inflections).await.unwrap_err();
            assert!(matches!(err, Error::Parse { .. }), "{err:?}");
        }
    }
}
