//! Reads a daily station export (CSV with a header row) into [`DailyObservations`].
//!
//! Every column is read as text and converted here, so a stray non-numeric
//! cell only blanks that value instead of failing the whole file.

use crate::dataset::error::DatasetError;
use crate::dataset::observations::DailyObservations;
use crate::types::observation::DailyObservation;
use crate::types::variable::Variable;
use chrono::NaiveDate;
use log::{info, warn};
use polars::prelude::*;
use std::path::Path;

/// Column names accepted for the observation date, in order of preference.
pub const DATE_COLUMNS: [&str; 2] = ["time", "date"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Loads a station CSV file.
///
/// The date is read from a `time` or `date` column (`YYYY-MM-DD`). Each
/// [`Variable`] column is parsed as a float; empty or unparsable cells become
/// missing values, and absent columns are logged and read as all-missing.
///
/// # Errors
///
/// Returns [`DatasetError::CsvRead`] if the file cannot be opened or parsed as CSV.
pub fn load_observations(path: impl AsRef<Path>) -> Result<DailyObservations, DatasetError> {
    let path = path.as_ref();
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| DatasetError::CsvRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| DatasetError::CsvRead(path.to_path_buf(), e))?;
    info!(
        "Read {} rows and {} columns from {:?}",
        frame.height(),
        frame.width(),
        path
    );
    DailyObservations::from_frame(&frame)
}

fn column_error(column: &str) -> impl FnOnce(PolarsError) -> DatasetError + '_ {
    move |source| DatasetError::ColumnOperation {
        column: column.to_string(),
        source,
    }
}

fn parse_cell(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|s| s.trim().parse::<f64>().ok())
}

fn read_dates(frame: &DataFrame) -> Result<Vec<Option<NaiveDate>>, DatasetError> {
    let Some(name) = DATE_COLUMNS.into_iter().find(|c| frame.column(c).is_ok()) else {
        warn!(
            "No date column ({}) found, observations will be undated",
            DATE_COLUMNS.join(" or ")
        );
        return Ok(vec![None; frame.height()]);
    };
    let column = frame
        .column(name)
        .and_then(|c| c.cast(&DataType::String))
        .map_err(column_error(name))?;
    let dates = column.str().map_err(column_error(name))?;
    Ok(dates
        .into_iter()
        .map(|cell| cell.and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()))
        .collect())
}

fn read_values(frame: &DataFrame, variable: Variable) -> Result<Vec<Option<f64>>, DatasetError> {
    let name = variable.column_name();
    let Ok(column) = frame.column(name) else {
        warn!("Column '{}' not found, treating it as missing", name);
        return Ok(vec![None; frame.height()]);
    };
    if column.dtype() == &DataType::String {
        let cells = column.str().map_err(column_error(name))?;
        return Ok(cells.into_iter().map(parse_cell).collect());
    }
    let column = column
        .cast(&DataType::Float64)
        .map_err(column_error(name))?;
    let cells = column.f64().map_err(column_error(name))?;
    Ok(cells.into_iter().collect())
}

impl DailyObservations {
    /// Builds observations from an in-memory frame with the station schema.
    pub fn from_frame(frame: &DataFrame) -> Result<Self, DatasetError> {
        let dates = read_dates(frame)?;
        let mut records: Vec<DailyObservation> = dates
            .into_iter()
            .map(|date| DailyObservation {
                date,
                ..Default::default()
            })
            .collect();
        for variable in Variable::ALL {
            for (record, value) in records.iter_mut().zip(read_values(frame, variable)?) {
                record.set(variable, value);
            }
        }
        let undated = records.iter().filter(|r| r.date.is_none()).count();
        if undated > 0 {
            warn!("{} of {} rows have no valid date", undated, records.len());
        }
        Ok(DailyObservations::new(records))
    }
}

/// Strictly converts text cells to floats, failing on the first non-numeric cell.
///
/// # Examples
///
/// ```
/// use station_noise::parse_values;
///
/// assert_eq!(parse_values(&["1.5", " 2 "]).unwrap(), vec![1.5, 2.0]);
/// assert!(parse_values(&["1.5", "n/a"]).is_err());
/// ```
pub fn parse_values(cells: &[&str]) -> Result<Vec<f64>, DatasetError> {
    cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            cell.trim()
                .parse::<f64>()
                .map_err(|source| DatasetError::NumericConversion {
                    index,
                    value: cell.to_string(),
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
time,tavg,tmin,tmax,prcp,snow,wdir,wspd,wpgt,pres,tsun
2023-01-01,4.2,1.0,7.3,0.0,,250,12.5,40.7,1021.3,120
2023-01-02,-1.5,-4.0,2.1,3.2,10,,8.1,,1018.0,
not-a-date,2.0,,,,,,,,,
2023-01-04,abc,0.5,3.0,0.0,0,180,5.0,20.0,1015.5,300
";

    fn write_sample(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_sample_file() {
        let file = write_sample(SAMPLE);
        let observations = load_observations(file.path()).unwrap();
        assert_eq!(observations.len(), 4);

        let first = &observations.records()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2023, 1, 1));
        assert_eq!(first.get(Variable::Tavg), Some(4.2));
        assert_eq!(first.get(Variable::Snow), None);
        assert_eq!(first.get(Variable::Tsun), Some(120.0));

        let second = &observations.records()[1];
        assert_eq!(second.get(Variable::Tmin), Some(-4.0));
        assert_eq!(second.get(Variable::Wpgt), None);

        assert_eq!(observations.records()[2].date, None);
        assert_eq!(observations.records()[3].get(Variable::Tavg), None);
    }

    #[test]
    fn test_missing_columns_read_as_missing() {
        let file = write_sample("date,tavg\n2023-05-01,12.0\n2023-05-02,13.5\n");
        let observations = load_observations(file.path()).unwrap();
        assert_eq!(observations.len(), 2);
        assert_eq!(observations.records()[1].get(Variable::Tavg), Some(13.5));
        assert!(observations
            .records()
            .iter()
            .all(|r| r.get(Variable::Pres).is_none()));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_observations("/definitely/not/here.csv");
        assert!(matches!(result, Err(DatasetError::CsvRead(_, _))));
    }

    #[test]
    fn test_from_typed_frame() {
        let frame = df!(
            "date" => &["2022-03-01", "2022-03-02"],
            "tavg" => &[Some(1.5), None],
            "tsun" => &[Some(60i64), Some(0i64)]
        )
        .unwrap();
        let observations = DailyObservations::from_frame(&frame).unwrap();
        assert_eq!(observations.records()[0].get(Variable::Tavg), Some(1.5));
        assert_eq!(observations.records()[1].get(Variable::Tavg), None);
        assert_eq!(observations.records()[0].get(Variable::Tsun), Some(60.0));
    }

    #[test]
    fn test_parse_values_reports_position() {
        match parse_values(&["1", "2", "three"]) {
            Err(DatasetError::NumericConversion { index, value, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(value, "three");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
