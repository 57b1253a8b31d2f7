use ndarray::{Array1, Array2};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Noisy non-linear regression data with three features in [-2, 2).
pub fn setup_data_synthetic(n: usize, seed: u64) -> (Array2<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x: Array2<f64> = Array2::from_shape_fn((n, 3), |_| rng.gen_range(-2.0..2.0));
    let y = x
        .rows()
        .into_iter()
        .map(|row| row[0] + 0.5 * row[1].powi(2) - row[2].sin() + rng.gen_range(-0.1..0.1))
        .collect();
    (x, y)
}

pub fn setup_data_hardcoded() -> (Array2<f64>, Array1<f64>) {
    let x = Array2::from_shape_vec(
        (8, 2),
        vec![
            0.1, 1.0, 0.2, 0.9, 0.3, 0.8, 0.4, 0.7, 1.1, 0.6, 1.2, 0.5, 1.3, 0.4, 1.4, 0.3,
        ],
    )
    .expect("shape matches data");
    let y = Array1::from_vec(vec![0.5, 0.5, 0.5, 0.5, 1.5, 1.5, 1.5, 1.5]);
    (x, y)
}
