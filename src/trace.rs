//! The trace data model and its header-consistency hook.
//!
//! A [`Trace`] is one continuous, evenly-sampled time series plus descriptive
//! metadata. Some header fields are independent (`delta`, `b`, orientation,
//! coordinates) and some are purely derived from the sample data (`npts`,
//! `e`, `depmax`, `depmin`, `depmen`).
//!
//! # Header Fields
//!
//! | Field | Kind | Meaning |
//! |-------|------|---------|
//! | `delta` | independent | sampling interval in seconds |
//! | `b` | independent | time of first sample |
//! | `e` | derived | time of last sample, `b + delta * (npts - 1)` |
//! | `npts` | derived | sample count |
//! | `depmax`/`depmin`/`depmen` | derived | max/min/mean of the samples |
//! | `cmpaz`/`cmpinc` | independent | sensor azimuth/inclination in degrees |
//! | `kcmpnm` | independent | component name, regenerated by rotation |
//! | `stla`..`baz` | independent | station/event geometry, opaque here |
//!
//! Every mutating operation ends by calling [`Trace::update_headers`], which
//! restores the derived fields from the current samples. The invariants that
//! hold after every operation returns:
//!
//! - `npts == samples.len()`
//! - `e == b + delta * (npts - 1)`
//! - `depmax == max(samples)`, `depmin == min(samples)`,
//!   `depmen == mean(samples)`

use crate::error::{Result, TraceError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One evenly-sampled seismic time series with headers.
///
/// Sample data and headers are public: callers may mutate `samples` directly,
/// but must then restore consistency through [`Trace::update_headers`]. The
/// operations in [`crate::ops`] do this as their final step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trace {
    /// Sample values, length `npts`.
    pub samples: Vec<f64>,

    /// Sample count, always `samples.len()` after an operation returns.
    pub npts: usize,

    /// Sampling interval in seconds, positive.
    pub delta: f64,

    /// Time of the first sample, relative to an external origin.
    pub b: f64,

    /// Time of the last sample, `b + delta * (npts - 1)`.
    pub e: f64,

    /// Maximum sample value.
    pub depmax: f64,

    /// Minimum sample value.
    pub depmin: f64,

    /// Mean sample value.
    pub depmen: f64,

    /// Component azimuth in degrees, `[0, 360)`.
    pub cmpaz: f64,

    /// Component inclination in degrees.
    pub cmpinc: f64,

    /// Component name.
    pub kcmpnm: String,

    /// Station latitude.
    pub stla: Option<f64>,

    /// Station longitude.
    pub stlo: Option<f64>,

    /// Event latitude.
    pub evla: Option<f64>,

    /// Event longitude.
    pub evlo: Option<f64>,

    /// Back-azimuth from station to event, degrees.
    pub baz: Option<f64>,
}

impl Trace {
    /// Build a trace from samples, a sampling interval, and a begin time.
    ///
    /// Derived headers are computed immediately, so the returned trace
    /// already satisfies the header invariants. Orientation and coordinate
    /// headers start neutral and are set by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::InvalidArgument`] for a non-positive or
    /// non-finite `delta` and [`TraceError::InvalidState`] for an empty
    /// sample array.
    pub fn new(samples: Vec<f64>, delta: f64, b: f64) -> Result<Self> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(TraceError::invalid_argument(format!(
                "sampling interval must be positive, got {delta}"
            )));
        }

        let mut trace = Self {
            samples,
            npts: 0,
            delta,
            b,
            e: b,
            depmax: 0.0,
            depmin: 0.0,
            depmen: 0.0,
            cmpaz: 0.0,
            cmpinc: 0.0,
            kcmpnm: String::new(),
            stla: None,
            stlo: None,
            evla: None,
            evlo: None,
            baz: None,
        };
        trace.update_headers()?;
        Ok(trace)
    }

    /// Recompute every derived header from the current sample data.
    ///
    /// This is the consistency hook invoked as the final step of every
    /// mutating operation: `npts` from the sample count, `e` from `b`,
    /// `delta` and `npts`, and `depmax`/`depmin`/`depmen` from the values.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::InvalidState`] when the trace has no samples.
    pub fn update_headers(&mut self) -> Result<()> {
        if self.samples.is_empty() {
            return Err(TraceError::invalid_state(
                "cannot derive headers for a trace with no samples",
            ));
        }

        self.npts = self.samples.len();
        self.e = self.b + self.delta * (self.npts - 1) as f64;

        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;
        let mut sum = 0.0;
        for &v in &self.samples {
            max = max.max(v);
            min = min.min(v);
            sum += v;
        }
        self.depmax = max;
        self.depmin = min;
        self.depmen = sum / self.npts as f64;

        Ok(())
    }

    /// Time of the `i`-th sample.
    #[must_use]
    pub fn time_at(&self, i: usize) -> f64 {
        self.b + self.delta * i as f64
    }

    /// The trace's own time vector, `b + i * delta` for each sample.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        (0..self.samples.len()).map(|i| self.time_at(i)).collect()
    }
}

/// Recompute derived headers for every trace in a list.
///
/// # Errors
///
/// Fails on the first trace with no samples; earlier traces in the list keep
/// their refreshed headers (list forms are not atomic).
pub fn update_headers_all(traces: &mut [Trace]) -> Result<()> {
    for trace in traces {
        trace.update_headers()?;
    }
    Ok(())
}

/// Derive a component name from an azimuth in degrees.
///
/// Azimuths within half a degree of a cardinal direction map to the
/// single-letter name; anything else becomes the rounded integer degree
/// string (e.g. `"123"`).
#[must_use]
pub fn component_name(cmpaz: f64) -> String {
    let az = cmpaz.rem_euclid(360.0);
    for (cardinal, name) in [(0.0, "N"), (90.0, "E"), (180.0, "S"), (270.0, "W")] {
        let dist = (az - cardinal).abs().min(360.0 - (az - cardinal).abs());
        if dist < 0.5 {
            return name.to_string();
        }
    }
    format!("{}", az.round() as i64 % 360)
}
