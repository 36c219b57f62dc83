/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use thiserror::Error;

use super::Transpose;

/// Computes a matrix-matrix product with a naive triple loop.
///
/// This is the ground truth the accelerated backend is validated against.
#[allow(clippy::too_many_arguments)]
pub(super) fn dgemm_naive(
    atranspose: Transpose,
    btranspose: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    b: &[f64],
    beta: Option<f64>,
    c: &mut [f64],
) {
    let beta: f64 = beta.unwrap_or(0.0);

    for i in 0..m {
        for j in 0..n {
            let mut temp = 0.0;
            for l in 0..k {
                let a_val = match atranspose {
                    Transpose::None => a[(i * k) + l],
                    Transpose::Ordinary => a[(l * m) + i],
                };
                let b_val = match btranspose {
                    Transpose::None => b[(n * l) + j],
                    Transpose::Ordinary => b[(j * k) + l],
                };
                temp += a_val * b_val;
            }
            c[i * n + j] = alpha * temp + beta * c[i * n + j];
        }
    }
}

/// A fixed test-problem for GEMM with a hand-computed expected result.
#[derive(Debug)]
pub(crate) struct TestProblem {
    atranspose: Transpose,
    btranspose: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: f64,
    a: Vec<f64>,
    b: Vec<f64>,
    beta: Option<f64>,
    c: Vec<f64>,
    expected: Vec<f64>,
}

#[derive(Debug, Error)]
#[error("mismatch in test problem. got {:?}, expected {:?}", got, expected)]
pub(crate) struct ReferenceError {
    got: Vec<f64>,
    expected: Vec<f64>,
}

pub(crate) trait GemmFunction:
    Fn(Transpose, Transpose, usize, usize, usize, f64, &[f64], &[f64], Option<f64>, &mut [f64])
{
}
impl<F> GemmFunction for F where
    F: Fn(Transpose, Transpose, usize, usize, usize, f64, &[f64], &[f64], Option<f64>, &mut [f64])
{
}

impl TestProblem {
    pub(crate) fn check<F: GemmFunction>(&self, f: F) -> Result<(), ReferenceError> {
        let mut result = self.c.clone();
        f(
            self.atranspose,
            self.btranspose,
            self.m,
            self.n,
            self.k,
            self.alpha,
            &self.a,
            &self.b,
            self.beta,
            &mut result,
        );

        if result == self.expected {
            Ok(())
        } else {
            Err(ReferenceError {
                got: result,
                expected: self.expected.clone(),
            })
        }
    }
}

/// A small set of hand-computed problems to sanity check the API contract: placement of
/// `m`/`n`/`k`, transposition handling, and `beta` accumulation.
pub(crate) fn test_dgemm_problems() -> Vec<TestProblem> {
    // Matrix A (2x3):
    //  1  2  3
    //  4  5  6
    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let at = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];

    // Matrix B (3x2):
    //  7   8
    //  9  10
    // 11  12
    let b = vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
    let bt = vec![7.0, 9.0, 11.0, 8.0, 10.0, 12.0];

    // A * B:
    //  58  64
    // 139 154
    let ab = vec![58.0, 64.0, 139.0, 154.0];

    // Destination seed:
    let c = vec![1.0, -1.0, 2.0, -2.0];

    vec![
        // Overwrite, no transposes.
        TestProblem {
            atranspose: Transpose::None,
            btranspose: Transpose::None,
            m: 2,
            n: 2,
            k: 3,
            alpha: 1.0,
            a: a.clone(),
            b: b.clone(),
            beta: None,
            c: c.clone(),
            expected: ab.clone(),
        },
        // Transposed left-hand side.
        TestProblem {
            atranspose: Transpose::Ordinary,
            btranspose: Transpose::None,
            m: 2,
            n: 2,
            k: 3,
            alpha: 1.0,
            a: at.clone(),
            b: b.clone(),
            beta: None,
            c: c.clone(),
            expected: ab.clone(),
        },
        // Transposed right-hand side.
        TestProblem {
            atranspose: Transpose::None,
            btranspose: Transpose::Ordinary,
            m: 2,
            n: 2,
            k: 3,
            alpha: 1.0,
            a: a.clone(),
            b: bt.clone(),
            beta: None,
            c: c.clone(),
            expected: ab.clone(),
        },
        // Both transposed.
        TestProblem {
            atranspose: Transpose::Ordinary,
            btranspose: Transpose::Ordinary,
            m: 2,
            n: 2,
            k: 3,
            alpha: 1.0,
            a: at,
            b: bt,
            beta: None,
            c: c.clone(),
            expected: ab,
        },
        // Accumulate: 2 * C + (-1) * A * B.
        TestProblem {
            atranspose: Transpose::None,
            btranspose: Transpose::None,
            m: 2,
            n: 2,
            k: 3,
            alpha: -1.0,
            a,
            b,
            beta: Some(2.0),
            c,
            expected: vec![-56.0, -66.0, -135.0, -158.0],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_implementation() {
        let problems = test_dgemm_problems();
        for (i, problem) in problems.iter().enumerate() {
            let result = problem.check(dgemm_naive);
            if let Err(err) = result {
                panic!("{} on iteration {}. Problem: {:?}", err, i, problem);
            }
        }
    }
}
