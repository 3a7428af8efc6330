use linreg_lab::{
    Dataset, compute_cost, compute_cost_matrix, compute_gradient, compute_gradient_matrix,
};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Cost and Gradient Example ===\n");

    // Four examples with two features each
    let x = array![[1.0, 1.0], [1.0, 2.0], [2.0, 2.0], [2.0, 3.0]];
    let y = array![6.0, 8.0, 9.0, 11.0];
    let w = array![1.0, 1.0];
    let b = 0.0;

    println!("X: {:?}", x);
    println!("y: {:?}", y);
    println!("w: {:?}, b: {}\n", w, b);

    let cost_matrix = compute_cost_matrix(&x, &y, &w, b, true)?;
    let cost_loop = compute_cost(&x, &y, &w, b)?;
    println!("\nCost (vectorized): {:.4}", cost_matrix);
    println!("Cost (loop):       {:.4}", cost_loop);

    let (dj_db, dj_dw) = compute_gradient_matrix(&x, &y, &w, b)?;
    println!("\nGradient (vectorized): dj_db={:.4}, dj_dw={:?}", dj_db, dj_dw);
    let (dj_db, dj_dw) = compute_gradient(&x, &y, &w, b)?;
    println!("Gradient (loop):       dj_db={:.4}, dj_dw={:?}", dj_db, dj_dw);

    // Parameters that fit the data exactly: y = x1 + 2*x2 + 3
    let dataset = Dataset::new(x, y)?;
    let w_fit = array![1.0, 2.0];
    println!("\nCost at w={:?}, b=3: {:.4}", w_fit, dataset.cost(&w_fit, 3.0)?);

    // Shape errors are reported, not broadcast
    let bad_w = array![1.0, 1.0, 1.0];
    if let Err(e) = dataset.cost(&bad_w, 0.0) {
        println!("Mismatched weights: {}", e);
    }

    Ok(())
}
