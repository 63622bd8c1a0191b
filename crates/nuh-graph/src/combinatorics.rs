//! Small floating point combinatorics used by the uniformizer.

/// Returns `n!` as a float.
pub fn factorial(n: usize) -> f64 {
    (2..=n).fold(1.0, |acc, i| acc * i as f64)
}

/// Returns the binomial coefficient `C(n, k)` as a float, zero when `k > n`.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Returns `k! / m!` for `k <= m` without forming either factorial.
pub fn factorial_ratio(k: usize, m: usize) -> f64 {
    debug_assert!(k <= m);
    (k + 1..=m).fold(1.0, |acc, i| acc / i as f64)
}
