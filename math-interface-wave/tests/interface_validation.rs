//! Interface Wave Validation Tests
//!
//! Checks the derived field against continuity at the interface, the
//! matched-media special case, an independent hand derivation and the
//! amplitude bounds. Generates JSON output for visualization.

use approx::assert_abs_diff_eq;
use directories::ProjectDirs;
use math_audio_interface_wave::{
    AnimationConfig, FrameSampler, FrameSet, WaveParams, WaveSolver, save_frames_json,
};
use ndarray::Array1;
use std::path::PathBuf;

/// Get output directory using the directories crate
fn get_output_dir() -> PathBuf {
    let proj_dirs = ProjectDirs::from("org", "spinorama", "math-audio")
        .expect("Failed to determine project directories");

    let output_dir = proj_dirs.cache_dir().join("interface-wave");

    std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");

    output_dir
}

/// B and C from the two continuity conditions, solved by hand:
///
/// value:  1 + C = B
/// slope:  k1 (1 - C) = k2 B
fn hand_coefficients(k1: f64, k2: f64) -> (f64, f64) {
    // [ 1  -1 ] [B]   [ 1]
    // [k2  k1 ] [C] = [k1]
    let det = k1 + k2;
    let b = (k1 + k1) / det;
    let c = (k1 - k2) / det;
    (b, c)
}

const PARAMETER_SETS: [(f64, f64, f64); 5] = [
    (1.0, 2.1, 4.0),
    (2.0, 0.5, 1.0),
    (0.3, 3.7, 9.0),
    (4.0, 4.0, 2.0),
    (1.5, 0.2, -3.0),
];

const TIMES: [f64; 5] = [0.0, 0.13, 0.5, 1.7, 12.25];

#[test]
fn test_value_continuity_at_interface() {
    let solver = WaveSolver::new().unwrap();

    for &(k1, k2, omega) in &PARAMETER_SETS {
        let params = WaveParams::new(k1, k2, omega);
        for &t in &TIMES {
            let from_left = solver.left_branch(0.0, t, &params);
            let at_interface = solver.evaluate(0.0, t, k1, k2, omega);
            assert_abs_diff_eq!(from_left, at_interface, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_slope_continuity_at_interface() {
    let solver = WaveSolver::new().unwrap();
    let h = 1e-6;

    for &(k1, k2, omega) in &PARAMETER_SETS {
        let params = WaveParams::new(k1, k2, omega);
        for &t in &TIMES {
            let left_slope =
                (solver.left_branch(0.0, t, &params) - solver.left_branch(-h, t, &params)) / h;
            let right_slope =
                (solver.right_branch(h, t, &params) - solver.right_branch(0.0, t, &params)) / h;
            assert_abs_diff_eq!(left_slope, right_slope, epsilon = 1e-4);
        }
    }
}

#[test]
fn test_slope_matches_analytic_derivative() {
    // d/dx at 0: left k1 (1 - C) sin(ωt), right k2 B sin(ωt)
    let solver = WaveSolver::new().unwrap();
    let (k1, k2, omega, t) = (1.0, 2.1, 4.0, 0.3);
    let params = WaveParams::new(k1, k2, omega);
    let (b, c) = hand_coefficients(k1, k2);
    let h = 1e-6;

    let numeric =
        (solver.right_branch(h, t, &params) - solver.right_branch(-h, t, &params)) / (2.0 * h);
    assert_abs_diff_eq!(numeric, k2 * b * (omega * t).sin(), epsilon = 1e-8);
    assert_abs_diff_eq!(numeric, k1 * (1.0 - c) * (omega * t).sin(), epsilon = 1e-8);
}

#[test]
fn test_determinism() {
    let solver = WaveSolver::new().unwrap();
    let x: Vec<f64> = (0..301).map(|i| -5.0 + i as f64 * (10.0 / 300.0)).collect();

    let first = solver.evaluate(&x, 0.42, 1.0, 2.1, 4.0);
    let second = solver.evaluate(&x, 0.42, 1.0, 2.1, 4.0);
    assert_eq!(first, second);

    // A second, independently built solver agrees bit for bit
    let other = WaveSolver::new().unwrap();
    assert_eq!(first, other.evaluate(&x, 0.42, 1.0, 2.1, 4.0));
}

#[test]
fn test_shape_preservation() {
    let solver = WaveSolver::new().unwrap();

    for n in [0usize, 1, 2, 17, 301] {
        let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.1 - 0.8).collect();
        let y = solver.evaluate(&x, 0.0, 1.0, 2.1, 4.0);
        assert_eq!(y.len(), n);
        for (i, &xi) in x.iter().enumerate() {
            assert_eq!(y[i], solver.evaluate(xi, 0.0, 1.0, 2.1, 4.0));
        }

        let arr = Array1::from(x);
        assert_eq!(solver.evaluate(&arr, 0.0, 1.0, 2.1, 4.0).len(), n);
    }
}

#[test]
fn test_matched_media_is_pure_transmission() {
    let solver = WaveSolver::new().unwrap();

    for &k in &[0.5, 1.0, 2.1, 7.3] {
        let c = solver.coefficients(k, k);
        assert_abs_diff_eq!(c.transmission, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(c.reflection, 0.0, epsilon = 1e-15);

        for &t in &TIMES {
            for i in 0..101 {
                let x = -5.0 + i as f64 * 0.1;
                let y = solver.evaluate(x, t, k, k, 4.0);
                assert_abs_diff_eq!(y, (k * x - 4.0 * t).cos(), epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn test_concrete_scenario() {
    let solver = WaveSolver::new().unwrap();
    let (k1, k2, omega, t) = (1.0, 2.1, 4.0, 0.0);
    let (b, c) = hand_coefficients(k1, k2);

    assert_abs_diff_eq!(b, 2.0 / 3.1, epsilon = 1e-15);
    assert_abs_diff_eq!(c, -1.1 / 3.1, epsilon = 1e-15);

    let expected = [
        (k1 * -5.0 - omega * t).cos() + c * (k1 * -5.0 + omega * t).cos(),
        b * (k2 * 0.0 - omega * t).cos(),
        b * (k2 * 5.0 - omega * t).cos(),
    ];
    let got = solver.evaluate([-5.0, 0.0, 5.0], t, k1, k2, omega);

    for (g, e) in got.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*g, *e, epsilon = 1e-9);
    }

    // Same numbers spelled out
    assert_abs_diff_eq!(got[0], (1.0 + c) * 5.0_f64.cos(), epsilon = 1e-9);
    assert_abs_diff_eq!(got[1], 0.645_161_290_322_580_6, epsilon = 1e-9);
    assert_abs_diff_eq!(got[2], (2.0 / 3.1) * 10.5_f64.cos(), epsilon = 1e-9);
}

#[test]
fn test_amplitude_bounds() {
    let solver = WaveSolver::new().unwrap();
    let x = Array1::linspace(-5.0, 5.0, 301);

    // Matched media: never above the unit incident amplitude
    for &t in &TIMES {
        let y = solver.evaluate(&x, t, 1.3, 1.3, 4.0);
        assert!(y.iter().all(|v| v.abs() <= 1.0 + 1e-12));
    }

    // Mismatched media: interference bounded by 1 + |C|, transmission by |B|
    for &(k1, k2, omega) in &PARAMETER_SETS {
        let coeffs = solver.coefficients(k1, k2);
        let left_bound = 1.0 + coeffs.reflection.abs();
        let right_bound = coeffs.transmission.abs();

        for &t in &TIMES {
            let y = solver.evaluate(&x, t, k1, k2, omega);
            for (xi, yi) in x.iter().zip(y.iter()) {
                if *xi < 0.0 {
                    assert!(yi.abs() <= left_bound + 1e-12, "x={} y={}", xi, yi);
                } else {
                    assert!(yi.abs() <= right_bound + 1e-12, "x={} y={}", xi, yi);
                }
            }
        }
    }
}

#[test]
fn test_left_side_can_exceed_unit_amplitude() {
    // Incident and reflected crests coincide where k1 x + ω t and
    // k1 x - ω t are both multiples of 2π with C > 0.
    let solver = WaveSolver::new().unwrap();
    let (k1, k2) = (3.0, 1.0);
    let c = solver.coefficients(k1, k2).reflection;
    assert!(c > 0.0);

    let x = -2.0 * std::f64::consts::PI / k1;
    let y = solver.evaluate(x, 0.0, k1, k2, 1.0);
    assert!(y > 1.0);
    assert_abs_diff_eq!(y, 1.0 + c, epsilon = 1e-12);
}

#[test]
fn test_concurrent_evaluation() {
    let solver = WaveSolver::new().unwrap();
    let x: Vec<f64> = (0..1000).map(|i| -5.0 + i as f64 * 0.01).collect();
    let reference = solver.evaluate(&x, 1.0, 1.0, 2.1, 4.0);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| solver.evaluate(&x, 1.0, 1.0, 2.1, 4.0)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    });
}

#[test]
fn test_animation_frames_json() {
    let output_dir = get_output_dir();

    let config = AnimationConfig {
        num_frames: 25,
        ..Default::default()
    };
    let config_path = output_dir.join("animation_config.json");
    config.to_file(&config_path).unwrap();
    let loaded = AnimationConfig::from_file(&config_path).unwrap();
    assert_eq!(loaded, config);

    let solver = WaveSolver::new().unwrap();
    let sampler = FrameSampler::new(&solver, loaded).unwrap();
    let frames = sampler.sample_all();
    let coefficients = solver.coefficients(1.0, 2.1);
    let frame_set = FrameSet::new(&sampler, coefficients, frames);

    let output_path = output_dir.join("frames_k1_1.0_k2_2.1.json");
    save_frames_json(&output_path, &frame_set).unwrap();

    let reloaded = FrameSet::from_file(&output_path).unwrap();
    assert_eq!(reloaded.frames.len(), 25);
    assert_eq!(reloaded.x.len(), 301);
    assert_eq!(reloaded.coefficients, coefficients);
    assert!(reloaded.peak_displacement() <= 1.0 + coefficients.reflection.abs() + 1e-12);

    // Shortest-decimal output must read back bit for bit
    for (saved, loaded) in frame_set.frames.iter().zip(&reloaded.frames) {
        assert_eq!(saved.time, loaded.time);
        assert_eq!(saved.displacement, loaded.displacement);
    }
    assert_eq!(reloaded, frame_set);
}
