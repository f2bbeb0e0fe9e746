use ndarray::array;
use num_complex::Complex64;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::rngs::mock::StepRng;

use qce_rs::circuit::Circuit;
use qce_rs::easybuild::{bell_circuit, ghz_circuit, uniform_circuit};
use qce_rs::error::SimError;
use qce_rs::gate::Gate;
use qce_rs::measure::{counts, measure, measure_shots, probs, sample_index};
use qce_rs::state::State;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-10
}

#[test]
fn test_probs_zero_state() {
    let p = probs(&State::zero_state(2));
    assert_eq!(p.len(), 4);
    assert!(approx_eq(p[0], 1.0));
    assert!(approx_eq(p[1] + p[2] + p[3], 0.0));
}

#[test]
fn test_probs_complex_amplitudes() {
    let state = State::new(1, array![Complex64::new(0.0, 0.6), Complex64::new(-0.8, 0.0)]).unwrap();
    let p = probs(&state);
    assert!(approx_eq(p[0], 0.36));
    assert!(approx_eq(p[1], 0.64));
}

#[test]
fn test_probs_bell_state() {
    let state = bell_circuit().unwrap().run();
    let p = probs(&state);
    assert!(approx_eq(p[0], 0.5));
    assert!(approx_eq(p[1], 0.0));
    assert!(approx_eq(p[2], 0.0));
    assert!(approx_eq(p[3], 0.5));
}

#[test]
fn test_measure_deterministic() {
    let circuit = Circuit::with_gates(3, vec![Gate::X(0), Gate::X(2)]).unwrap();
    let state = circuit.run();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        // qubits 0 and 2 set -> index 5 -> "101"
        assert_eq!(circuit.measure(&state, &mut rng).unwrap(), "101");
    }
}

#[test]
fn test_measure_label_is_zero_padded() {
    let circuit = Circuit::new(4).unwrap();
    let state = circuit.run();
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(circuit.measure(&state, &mut rng).unwrap(), "0000");
}

#[test]
fn test_measure_width_mismatch() {
    let circuit = Circuit::new(2).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        circuit.measure(&State::zero_state(1), &mut rng).unwrap_err(),
        SimError::QubitCountMismatch { expected: 2, actual: 1 }
    );
}

#[test]
fn test_measure_all_zero_vector_falls_back() {
    let state = State::new(2, ndarray::Array1::zeros(4)).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(measure(&state, &mut rng), "00");
}

#[test]
fn test_measure_superposition_statistics() {
    let circuit = Circuit::with_gates(1, vec![Gate::H(0)]).unwrap();
    let state = circuit.run();

    let mut rng = StdRng::seed_from_u64(12345);
    let mut count_0 = 0;
    let mut count_1 = 0;
    for _ in 0..1000 {
        match circuit.measure(&state, &mut rng).unwrap().as_str() {
            "0" => count_0 += 1,
            "1" => count_1 += 1,
            other => panic!("unexpected label {}", other),
        }
    }

    // Should be roughly 50-50 (within statistical fluctuation)
    assert!(count_0 > 400 && count_0 < 600);
    assert!(count_1 > 400 && count_1 < 600);
}

#[test]
fn test_measure_always_valid_label() {
    let state = uniform_circuit(3).unwrap().run();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let label = measure(&state, &mut rng);
        assert_eq!(label.len(), 3);
        assert!(label.chars().all(|ch| ch == '0' || ch == '1'));
    }
}

#[test]
fn test_ghz_only_all_equal_outcomes() {
    let state = ghz_circuit(4).unwrap().run();
    let mut rng = StdRng::seed_from_u64(8);
    let hist = counts(&state, 500, &mut rng);
    assert!(hist.keys().all(|k| k == "0000" || k == "1111"));
    assert_eq!(hist.values().sum::<usize>(), 500);
    assert!(hist["0000"] > 200 && hist["1111"] > 200);
}

#[test]
fn test_measure_shots_same_seed_same_outcomes() {
    let state = uniform_circuit(3).unwrap().run();
    let a = measure_shots(&state, 50, &mut StdRng::seed_from_u64(5));
    let b = measure_shots(&state, 50, &mut StdRng::seed_from_u64(5));
    assert_eq!(a, b);
    assert!(a.iter().all(|&i| i < 8));
}

#[test]
fn test_sample_index_unnormalized_distribution() {
    // weights 1:3, total 4
    let mut rng = StdRng::seed_from_u64(2);
    let hits = (0..4000)
        .filter(|_| sample_index(&[1.0, 3.0], &mut rng) == 1)
        .count();
    assert!(hits > 2800 && hits < 3200, "hits = {}", hits);
}

#[test]
fn test_sample_index_skips_zero_weight_at_r_zero() {
    // StepRng::new(0, 0) draws exactly 0.0
    let mut rng = StepRng::new(0, 0);
    assert_eq!(sample_index(&[0.0, 1.0], &mut rng), 1);
    assert_eq!(sample_index(&[0.0, 0.0, 0.5, 0.5], &mut rng), 2);
}

#[test]
fn test_sample_index_non_finite_total_falls_back() {
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(sample_index(&[f64::NAN, 1.0], &mut rng), 0);
    assert_eq!(sample_index(&[1.0, f64::INFINITY], &mut rng), 0);
}
