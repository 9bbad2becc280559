//! Spline resampling onto a new uniform time grid.

use crate::error::{Result, TraceError};
use crate::math::spline::QuadraticSpline;
use crate::trace::Trace;

/// Target specification for [`interpolate`].
///
/// Exactly one of the three fields must be set. The constructors build the
/// three valid shapes; the fields stay public so callers translating foreign
/// parameter sets can fill them directly.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResampleSpec {
    /// Target sample count over the unchanged time span.
    pub npts: Option<usize>,

    /// Target sampling interval in seconds.
    pub delta: Option<f64>,

    /// Integer densification factor: `n` new intervals per old interval.
    pub factor: Option<usize>,
}

impl ResampleSpec {
    /// Resample to a fixed number of points.
    #[must_use]
    pub const fn with_npts(npts: usize) -> Self {
        Self {
            npts: Some(npts),
            delta: None,
            factor: None,
        }
    }

    /// Resample to a fixed sampling interval.
    #[must_use]
    pub const fn with_delta(delta: f64) -> Self {
        Self {
            npts: None,
            delta: Some(delta),
            factor: None,
        }
    }

    /// Densify by an integer factor.
    #[must_use]
    pub const fn with_factor(factor: usize) -> Self {
        Self {
            npts: None,
            delta: None,
            factor: Some(factor),
        }
    }
}

/// Resample a trace by fitting a quadratic spline through its
/// `(time, sample)` pairs and evaluating on a new uniform grid.
///
/// The time span `[b, e]` is preserved for the `npts` and `factor` targets;
/// a `delta` target keeps `b` and ends at the last new sample that fits
/// inside the span.
///
/// # Errors
///
/// - [`TraceError::MissingArgument`] when no target is set.
/// - [`TraceError::InvalidArgument`] when more than one target is set, for a
///   target of fewer than 2 points, a zero factor, a non-positive new delta,
///   or a new delta not smaller than the trace span.
pub fn interpolate(trace: &mut Trace, spec: &ResampleSpec) -> Result<()> {
    let span = trace.e - trace.b;
    let (new_npts, new_delta) = resolve_target(spec, span, trace.samples.len())?;

    let spline = QuadraticSpline::fit(&trace.times(), &trace.samples)?;
    let grid: Vec<f64> = (0..new_npts)
        .map(|i| trace.b + new_delta * i as f64)
        .collect();

    trace.samples = spline.eval_many(&grid);
    trace.delta = new_delta;
    trace.update_headers()
}

/// Resample every trace to the same target.
///
/// # Errors
///
/// Fails on the first erroring element; earlier elements stay resampled.
pub fn interpolate_all(traces: &mut [Trace], spec: &ResampleSpec) -> Result<()> {
    for trace in traces {
        interpolate(trace, spec)?;
    }
    Ok(())
}

/// Turn a spec into a concrete `(npts, delta)` pair for a trace span.
fn resolve_target(spec: &ResampleSpec, span: f64, old_npts: usize) -> Result<(usize, f64)> {
    let given = usize::from(spec.npts.is_some())
        + usize::from(spec.delta.is_some())
        + usize::from(spec.factor.is_some());
    if given == 0 {
        return Err(TraceError::missing_argument(
            "resample target (npts, delta, or factor)",
        ));
    }
    if given > 1 {
        return Err(TraceError::invalid_argument(
            "resample target must be exactly one of npts, delta, or factor",
        ));
    }

    if let Some(npts) = spec.npts {
        if npts < 2 {
            return Err(TraceError::invalid_argument(format!(
                "resample target of {npts} points cannot define a sampling interval"
            )));
        }
        return Ok((npts, span / (npts - 1) as f64));
    }

    if let Some(delta) = spec.delta {
        if delta <= 0.0 {
            return Err(TraceError::invalid_argument(format!(
                "resample interval must be positive, got {delta}"
            )));
        }
        if delta >= span {
            return Err(TraceError::invalid_argument(format!(
                "resample interval {delta} leaves fewer than 2 points in a span of {span}"
            )));
        }
        let npts = (span / delta).floor() as usize + 1;
        return Ok((npts, delta));
    }

    let factor = spec.factor.unwrap_or(0);
    if factor == 0 {
        return Err(TraceError::invalid_argument(
            "resample factor must be at least 1",
        ));
    }
    if old_npts < 2 {
        return Err(TraceError::invalid_argument(
            "cannot resample a single-sample trace",
        ));
    }
    let npts = (old_npts - 1) * factor + 1;
    Ok((npts, span / (npts - 1) as f64))
}
