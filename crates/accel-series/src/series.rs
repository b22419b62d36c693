//! Column-Major Series Storage

use crate::{Channel, Sample};

/// 3-axis time series stored as three equal-length columns.
///
/// Samples are addressed by index; time is implicit (index / sampling rate).
/// The equal-length invariant is preserved by construction: samples enter
/// whole via [`push`](Series::push) and leave whole via
/// [`truncate`](Series::truncate), and mutable channel access hands out
/// slices that cannot change length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl Series {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty series with room for `capacity` samples per channel
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
        }
    }

    /// Append one sample to the end of all three columns
    pub fn push(&mut self, sample: Sample) {
        self.x.push(sample.x);
        self.y.push(sample.y);
        self.z.push(sample.z);
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the series holds no samples
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Keep only the first `len` samples (no-op when `len >= self.len()`)
    pub fn truncate(&mut self, len: usize) {
        self.x.truncate(len);
        self.y.truncate(len);
        self.z.truncate(len);
    }

    /// Read access to one channel's column
    pub fn channel(&self, channel: Channel) -> &[f64] {
        match channel {
            Channel::X => &self.x,
            Channel::Y => &self.y,
            Channel::Z => &self.z,
        }
    }

    /// Write access to one channel's column (length cannot change)
    pub fn channel_mut(&mut self, channel: Channel) -> &mut [f64] {
        match channel {
            Channel::X => &mut self.x,
            Channel::Y => &mut self.y,
            Channel::Z => &mut self.z,
        }
    }

    /// Sample at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<Sample> {
        if index < self.len() {
            Some(Sample {
                x: self.x[index],
                y: self.y[index],
                z: self.z[index],
            })
        } else {
            None
        }
    }

    /// Iterate samples in time order
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).map(|i| Sample {
            x: self.x[i],
            y: self.y[i],
            z: self.z[i],
        })
    }
}

impl FromIterator<Sample> for Series {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut series = Series::new();
        for sample in iter {
            series.push(sample);
        }
        series
    }
}
