//! Runs each of the four operations once, first with floating point and then
//! exactly, on the textbook single-qubit literals.
//!
//! `RUST_LOG=debug cargo run --example qubit_basics` also shows the library's
//! diagnostics.

use num_complex::Complex;
use num_traits::One;
use qubit_kit::{Backend, Exact, Matrix, Numeric, QubitError, Symbolic};
use std::f64::consts::FRAC_1_SQRT_2;

fn run<B: Backend>(
    backend: &B,
    alpha: B::Scalar,
    beta: B::Scalar,
    hadamard: &Matrix<B::Scalar>,
) -> Result<(), QubitError> {
    println!("\n--- {} back-end ---", backend.name());

    println!("Is valid qubit: {}", backend.is_valid_state(&alpha, &beta));

    let qubit_0 = Matrix::basis_ket(2, 0)?;
    let qubit_1 = Matrix::basis_ket(2, 1)?;
    let tensor_result = backend.tensor_product(&[qubit_0.clone(), qubit_1])?;
    println!("Tensor product of |0> and |1>: {}", tensor_result);

    println!("Is Hadamard gate unitary: {}", backend.is_unitary(hadamard)?);

    let applied_result = backend.apply_operator(hadamard, &qubit_0)?;
    println!("Result of applying Hadamard gate to |0>: {}", applied_result);
    Ok(())
}

fn main() -> Result<(), QubitError> {
    env_logger::init();
    println!("--- qubit-kit Example: validity, tensor, unitarity, application ---");

    // Numeric: alpha = 1/√2, beta = i/√2
    let c = |re: f64, im: f64| Complex::new(re, im);
    let hadamard = Matrix::from_rows(vec![
        vec![c(1.0, 0.0), c(1.0, 0.0)],
        vec![c(1.0, 0.0), c(-1.0, 0.0)],
    ])?
    .scale(&c(FRAC_1_SQRT_2, 0.0));
    run(&Numeric::new(), c(FRAC_1_SQRT_2, 0.0), c(0.0, FRAC_1_SQRT_2), &hadamard)?;

    // Symbolic: the same literals, held exactly
    let r = Exact::frac_1_sqrt_2();
    let exact_hadamard = Matrix::from_rows(vec![
        vec![Exact::one(), Exact::one()],
        vec![Exact::one(), -Exact::one()],
    ])?
    .scale(&r);
    run(&Symbolic::new(), r.clone(), Exact::i() * r, &exact_hadamard)?;

    Ok(())
}
