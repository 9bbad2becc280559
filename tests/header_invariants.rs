//! Header-consistency and scenario tests.
//!
//! Every operation must leave a trace whose derived headers match its sample
//! data. These tests run each operation against generated traces and verify
//! the invariants plus the documented edge-case scenarios.

use approx::assert_relative_eq;
use std::f64::consts::PI;
use trace_dsp::{
    add, cut, differentiate, divide, envelope, fft, integrate, interpolate, multiply, remove_mean,
    remove_trend, reverse, rotate_through, taper, time_shift, Quadrature, ResampleSpec, TaperForm,
    Trace, TraceError,
};

// =============================================================================
// TRACE GENERATORS
// =============================================================================

/// Sine plus ramp plus offset, so every statistic is nontrivial.
fn busy_trace(n: usize, delta: f64) -> Trace {
    let samples: Vec<f64> = (0..n)
        .map(|i| {
            let t = delta * i as f64;
            (2.0 * PI * 2.0 * t).sin() + 0.1 * t - 3.0
        })
        .collect();
    Trace::new(samples, delta, 0.0).unwrap()
}

fn index_trace(n: usize) -> Trace {
    Trace::new((1..=n).map(|i| i as f64).collect(), 1.0, 0.0).unwrap()
}

fn orthogonal_pair(n: usize) -> (Trace, Trace) {
    let mut north = busy_trace(n, 0.5);
    let mut east = busy_trace(n, 0.5);
    east.samples.reverse();
    east.update_headers().unwrap();
    north.cmpaz = 0.0;
    east.cmpaz = 90.0;
    (north, east)
}

fn assert_headers_consistent(trace: &Trace) {
    assert_eq!(trace.npts, trace.samples.len());
    assert_relative_eq!(
        trace.e,
        trace.b + trace.delta * (trace.npts - 1) as f64,
        epsilon = 1e-12
    );

    let max = trace
        .samples
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let min = trace.samples.iter().copied().fold(f64::INFINITY, f64::min);
    let mean = trace.samples.iter().sum::<f64>() / trace.npts as f64;
    assert_relative_eq!(trace.depmax, max);
    assert_relative_eq!(trace.depmin, min);
    assert_relative_eq!(trace.depmen, mean, epsilon = 1e-12);
}

// =============================================================================
// INVARIANTS AFTER EVERY OPERATION
// =============================================================================

#[test]
fn headers_hold_after_every_mutating_operation() {
    let checks: Vec<(&str, Box<dyn Fn(&mut Trace) -> Result<(), TraceError>>)> = vec![
        ("add", Box::new(|t| add(t, 1.5))),
        ("multiply", Box::new(|t| multiply(t, -0.5))),
        ("divide", Box::new(|t| divide(t, 4.0))),
        ("cut", Box::new(|t| cut(t, 1.0, 5.0))),
        ("differentiate2", Box::new(|t| differentiate(t, 2))),
        ("differentiate3", Box::new(|t| differentiate(t, 3))),
        ("differentiate5", Box::new(|t| differentiate(t, 5))),
        (
            "integrate_trap",
            Box::new(|t| integrate(t, Quadrature::Trapezium)),
        ),
        (
            "integrate_rect",
            Box::new(|t| integrate(t, Quadrature::Rectangle)),
        ),
        (
            "interpolate",
            Box::new(|t| interpolate(t, &ResampleSpec::with_npts(57))),
        ),
        ("envelope", Box::new(envelope)),
        ("remove_mean", Box::new(remove_mean)),
        ("remove_trend", Box::new(remove_trend)),
        (
            "taper",
            Box::new(|t| taper(t, TaperForm::Hamming, 0.2)),
        ),
        ("time_shift", Box::new(|t| time_shift(t, 3.0, false))),
        ("reverse", Box::new(reverse)),
    ];

    for (name, op) in checks {
        let mut trace = busy_trace(80, 0.25);
        op(&mut trace).unwrap_or_else(|e| panic!("{name} failed: {e}"));
        assert_headers_consistent(&trace);
    }
}

#[test]
fn headers_hold_after_rotation_for_both_traces() {
    let (mut north, mut east) = orthogonal_pair(64);
    rotate_through(&mut north, &mut east, 123.0).unwrap();
    assert_headers_consistent(&north);
    assert_headers_consistent(&east);
}

// =============================================================================
// EDGE-CASE SCENARIOS
// =============================================================================

#[test]
fn cut_scenario_ten_samples() {
    // npts=10, delta=1, b=0 (so e=9); cut(2, 5) keeps 1-based indices 3..6.
    let mut trace = index_trace(10);
    cut(&mut trace, 2.0, 5.0).unwrap();

    assert_eq!(trace.npts, 4);
    assert_relative_eq!(trace.b, 2.0);
    assert_relative_eq!(trace.e, 5.0);
    assert_eq!(trace.samples, vec![3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn identity_cut_is_noop_on_samples() {
    let mut trace = busy_trace(50, 0.1);
    let original = trace.samples.clone();
    let (b, e) = (trace.b, trace.e);

    cut(&mut trace, b, e).unwrap();
    assert_eq!(trace.samples, original);
}

#[test]
fn differentiate_scenario_five_zeros() {
    let mut trace = Trace::new(vec![0.0; 5], 1.0, 0.0).unwrap();
    differentiate(&mut trace, 2).unwrap();

    assert_eq!(trace.npts, 4);
    assert_relative_eq!(trace.b, 0.5);
    assert!(trace.samples.iter().all(|&v| v == 0.0));
}

#[test]
fn constant_trace_has_zero_derivative_for_all_stencils() {
    for npoints in [2, 3, 5] {
        let mut trace = Trace::new(vec![7.5; 20], 0.1, 2.0).unwrap();
        differentiate(&mut trace, npoints).unwrap();
        for &d in &trace.samples {
            assert_relative_eq!(d, 0.0, epsilon = 1e-10);
        }
    }
}

#[test]
fn taper_width_range_boundaries() {
    for good in [1e-9, 0.25, 0.5] {
        let mut trace = busy_trace(40, 0.5);
        taper(&mut trace, TaperForm::Hanning, good).unwrap();
    }
    for bad in [0.0, -0.25, 0.5 + 1e-9, 2.0] {
        let mut trace = busy_trace(40, 0.5);
        assert!(matches!(
            taper(&mut trace, TaperForm::Hanning, bad),
            Err(TraceError::InvalidArgument(_))
        ));
    }
}

#[test]
fn spike_rotation_scenario() {
    // Unit ground motion along azimuth 55 recorded on north/east components;
    // rotating the frame by 55 degrees isolates the spike on trace 1.
    let theta: f64 = 55.0_f64.to_radians();
    let mut n_samples = vec![0.0; 32];
    let mut e_samples = vec![0.0; 32];
    n_samples[10] = theta.cos();
    e_samples[10] = theta.sin();

    let mut north = Trace::new(n_samples, 0.01, 0.0).unwrap();
    let mut east = Trace::new(e_samples, 0.01, 0.0).unwrap();
    north.cmpaz = 0.0;
    east.cmpaz = 90.0;

    rotate_through(&mut north, &mut east, 55.0).unwrap();

    assert_relative_eq!(north.samples[10], 1.0, epsilon = 1e-12);
    for &v in &east.samples {
        assert_relative_eq!(v, 0.0, epsilon = 1e-12);
    }
}

// =============================================================================
// NON-MUTATING OPERATIONS
// =============================================================================

#[test]
fn fft_leaves_trace_untouched_and_sizes_bins() {
    let trace = busy_trace(100, 0.25);
    let before = trace.clone();

    let spectrum = fft(&trace).unwrap();
    assert_eq!(trace, before);
    assert_eq!(spectrum.frequencies.len(), 51);
    assert_eq!(spectrum.coefficients.len(), 51);
    // Bin spacing 1/(npts*delta) = 0.04 Hz.
    assert_relative_eq!(spectrum.frequencies[0], 0.04, epsilon = 1e-12);
}
