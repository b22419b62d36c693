//! Channel Normalization for Raw Recordings

use crate::error::RecordingError;
use accel_series::{Sample, Series};
use csv::StringRecord;
use std::path::Path;
use tracing::{debug, info};

/// How the three channels were located in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// A header row named the `X`, `Y`, `Z` columns
    Named,
    /// No header; the last three columns are X, Y, Z in order
    Positional,
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaKind::Named => f.write_str("named X/Y/Z header"),
            SchemaKind::Positional => f.write_str("positional (last three columns)"),
        }
    }
}

/// A recording reduced to three numeric channels
#[derive(Debug, Clone)]
pub struct NormalizedRecording {
    /// Parsed samples, one per surviving row
    pub series: Series,
    /// Which schema branch resolved the channels
    pub schema: SchemaKind,
    /// Data rows examined (header row excluded in named mode)
    pub rows_seen: usize,
    /// Rows discarded because a channel value failed numeric coercion
    pub rows_dropped: usize,
}

/// Where each channel's value sits within a record
enum ColumnMap {
    /// Fixed indices resolved from a named header
    Fixed([usize; 3]),
    /// The final three fields of each row, whatever its width
    LastThree,
}

/// Load a raw recording and normalize it to three numeric channels.
///
/// Two schema shapes are accepted. If the first row's trimmed cells include
/// the exact labels `X`, `Y` and `Z`, those columns are used and any extra
/// columns (timestamps, counters) are ignored. Otherwise every row is data
/// and the last three columns are taken as X, Y, Z in order. A stray
/// header-like first row simply fails numeric coercion and is dropped with
/// the other unparseable rows, which are counted rather than treated as
/// errors.
pub fn load_series(path: &Path) -> Result<NormalizedRecording, RecordingError> {
    // Read everything up front; the file handle does not outlive this call.
    let records = read_records(path)?;
    if records.is_empty() {
        return Err(RecordingError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    let (schema, columns, data) = match resolve_named_header(&records[0]) {
        Some(indices) => {
            debug!(
                "resolved named header: X/Y/Z at columns {}/{}/{}",
                indices[0], indices[1], indices[2]
            );
            (SchemaKind::Named, ColumnMap::Fixed(indices), &records[1..])
        }
        None => (SchemaKind::Positional, ColumnMap::LastThree, &records[..]),
    };

    let mut series = Series::with_capacity(data.len());
    let mut rows_dropped = 0usize;
    let mut max_width = 0usize;

    for record in data {
        max_width = max_width.max(record.len());
        match parse_sample(record, &columns) {
            Some(sample) => series.push(sample),
            None => rows_dropped += 1,
        }
    }

    if series.is_empty() {
        if schema == SchemaKind::Positional && max_width < 3 {
            return Err(RecordingError::UnresolvableSchema {
                path: path.to_path_buf(),
                reason: format!("widest row has {max_width} column(s), need 3"),
            });
        }
        return Err(RecordingError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    info!(
        "loaded {} samples from {} via {} ({} of {} rows dropped)",
        series.len(),
        path.display(),
        schema,
        rows_dropped,
        data.len()
    );

    Ok(NormalizedRecording {
        series,
        schema,
        rows_seen: data.len(),
        rows_dropped,
    })
}

fn read_records(path: &Path) -> Result<Vec<StringRecord>, RecordingError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| open_error(path, e))?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| RecordingError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        records.push(record);
    }
    Ok(records)
}

fn open_error(path: &Path, source: csv::Error) -> RecordingError {
    match source.kind() {
        csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            RecordingError::SourceNotFound {
                path: path.to_path_buf(),
            }
        }
        _ => RecordingError::Read {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Find `X`, `Y`, `Z` among the first row's cells
fn resolve_named_header(first: &StringRecord) -> Option<[usize; 3]> {
    let find = |label: &str| first.iter().position(|field| field == label);
    Some([find("X")?, find("Y")?, find("Z")?])
}

/// Coerce one record to a sample; `None` drops the whole row.
///
/// All three channel values must parse as finite floats. `NaN`-valued cells
/// count as coercion failures, as do infinities: neither can flow through
/// the downstream statistics.
fn parse_sample(record: &StringRecord, columns: &ColumnMap) -> Option<Sample> {
    let fields: [&str; 3] = match columns {
        ColumnMap::Fixed(indices) => [
            record.get(indices[0])?,
            record.get(indices[1])?,
            record.get(indices[2])?,
        ],
        ColumnMap::LastThree => {
            let n = record.len();
            if n < 3 {
                return None;
            }
            [&record[n - 3], &record[n - 2], &record[n - 1]]
        }
    };

    let mut values = [0.0f64; 3];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = field.parse::<f64>().ok().filter(|v| v.is_finite())?;
    }
    Some(Sample::new(values[0], values[1], values[2]))
}
