//! Cleaned-Series Export

use crate::error::RecordingError;
use accel_series::Series;
use std::path::Path;
use tracing::info;

/// Write a series as CSV with an `X,Y,Z` header row and no index column
pub fn save_series(path: &Path, series: &Series) -> Result<(), RecordingError> {
    let write_err = |source: csv::Error| RecordingError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    writer.write_record(["X", "Y", "Z"]).map_err(write_err)?;
    for sample in series.iter() {
        writer
            .write_record([
                sample.x.to_string(),
                sample.y.to_string(),
                sample.z.to_string(),
            ])
            .map_err(write_err)?;
    }
    writer.flush().map_err(|e| write_err(e.into()))?;

    info!("saved {} samples to {}", series.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{load_series, SchemaKind};
    use accel_series::Sample;

    #[test]
    fn test_saved_series_reloads_under_named_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned.csv");

        let series: Series = [
            Sample::new(1.5, -2.0, 0.25),
            Sample::new(0.0, 3.0, -4.75),
        ]
        .into_iter()
        .collect();

        save_series(&path, &series).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("X,Y,Z\n"));

        let reloaded = load_series(&path).unwrap();
        assert_eq!(reloaded.schema, SchemaKind::Named);
        assert_eq!(reloaded.series, series);
    }

    #[test]
    fn test_unwritable_destination() {
        let series = Series::new();
        let err = save_series(Path::new("/nonexistent/dir/out.csv"), &series).unwrap_err();
        assert!(matches!(err, RecordingError::Write { .. }));
    }
}
