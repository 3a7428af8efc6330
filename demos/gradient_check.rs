use linreg_lab::{Dataset, Matrix, Vector};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Finite Difference Gradient Check ===\n");

    let mut rng = StdRng::seed_from_u64(42);
    let dist = Uniform::new(-1.0, 1.0);

    let dataset = Dataset::new(
        Matrix::random_using((100, 4), dist, &mut rng),
        Vector::random_using(100, dist, &mut rng),
    )?;
    let w = Vector::random_using(dataset.n_features(), dist, &mut rng);
    let b = 0.5;
    println!("Dataset: {} samples, {} features", dataset.n_samples(), dataset.n_features());

    let (dj_db, dj_dw) = dataset.gradient(&w, b)?;
    let eps = 1e-5;

    for j in 0..w.len() {
        let mut w_plus = w.clone();
        let mut w_minus = w.clone();
        w_plus[j] += eps;
        w_minus[j] -= eps;
        let numeric = (dataset.cost(&w_plus, b)? - dataset.cost(&w_minus, b)?) / (2.0 * eps);
        println!(
            "dj_dw[{}]: analytic={:.8}, numeric={:.8}, diff={:.2e}",
            j,
            dj_dw[j],
            numeric,
            (dj_dw[j] - numeric).abs()
        );
    }

    let numeric = (dataset.cost(&w, b + eps)? - dataset.cost(&w, b - eps)?) / (2.0 * eps);
    println!(
        "dj_db:    analytic={:.8}, numeric={:.8}, diff={:.2e}",
        dj_db,
        numeric,
        (dj_db - numeric).abs()
    );

    Ok(())
}
