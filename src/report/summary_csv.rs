//! `metric,value` CSV persistence of a [`Summary`].

use crate::report::error::ReportError;
use crate::stats::summary::Summary;
use log::info;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

fn ensure_parent_dir(path: &Path) -> Result<(), ReportError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| ReportError::CreateDir(parent.to_path_buf(), e)),
        _ => Ok(()),
    }
}

impl Summary {
    /// Summary rows as a two-column `metric`/`value` frame. Undefined values are null.
    pub fn to_frame(&self) -> Result<DataFrame, ReportError> {
        let (metrics, values): (Vec<String>, Vec<Option<f64>>) = self.rows().into_iter().unzip();
        Ok(df!(
            "metric" => metrics,
            "value" => values
        )?)
    }

    /// Writes the summary to `path` as CSV, creating missing parent directories.
    ///
    /// Undefined statistics are written as empty cells.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;
        let mut frame = self.to_frame()?;
        let mut file =
            File::create(path).map_err(|e| ReportError::Write(path.to_path_buf(), e))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut frame)?;
        info!("Saved summary to {:?}", path);
        Ok(())
    }
}

/// Reads back a file written by [`Summary::write_csv`] as `(metric, value)` rows.
pub fn read_summary_csv(path: impl AsRef<Path>) -> Result<Vec<(String, Option<f64>)>, ReportError> {
    let path = path.as_ref();
    let read_error = |e| ReportError::Read(path.to_path_buf(), e);
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(read_error)?
        .finish()
        .map_err(read_error)?;
    let metrics = frame
        .column("metric")
        .and_then(|c| c.str())
        .map_err(read_error)?;
    let values = frame
        .column("value")
        .and_then(|c| c.str())
        .map_err(read_error)?;
    Ok(metrics
        .into_iter()
        .zip(values)
        .map(|(metric, value)| {
            (
                metric.unwrap_or_default().to_string(),
                value.and_then(|v| v.trim().parse::<f64>().ok()),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_summary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("summary_tavg.csv");
        let summary = Summary::compute(&[1.0, 2.0, f64::NAN, 3.0, 10.0]);

        summary.write_csv(&path).unwrap();
        let rows = read_summary_csv(&path).unwrap();

        let expected = summary.rows();
        assert_eq!(rows.len(), expected.len());
        for ((metric, value), (want_metric, want_value)) in rows.iter().zip(&expected) {
            assert_eq!(metric, want_metric);
            match (value, want_value) {
                (Some(v), Some(w)) => assert_abs_diff_eq!(*v, *w, epsilon = 1e-9),
                (None, None) => {}
                other => panic!("{}: {:?}", metric, other),
            }
        }
        assert_eq!(rows[0], ("count".to_string(), Some(4.0)));
        assert_eq!(rows[1], ("missing".to_string(), Some(1.0)));
        assert_eq!(rows.last().unwrap().0, "psd_peak_freq");
    }

    #[test]
    fn test_undefined_values_are_empty_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("constant.csv");
        Summary::compute(&[2.0, 2.0, 2.0]).write_csv(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("metric,value"));
        assert!(text.lines().any(|l| l == "skew,"));

        let rows = read_summary_csv(&path).unwrap();
        let skew = rows.iter().find(|(m, _)| m == "skew").unwrap();
        assert_eq!(skew.1, None);
    }

    #[test]
    fn test_empty_summary_has_two_rows() {
        let frame = Summary::compute(&[]).to_frame().unwrap();
        assert_eq!(frame.height(), 2);
    }
}
