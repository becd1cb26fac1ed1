//! Kullback–Leibler divergence in base 2.
//!
//! D_KL(P‖Q) = Σ p_i * log2(p_i / q_i) over categories where p_i > 0.
//! Asymmetric: measures how P diverges from the reference Q, in bits.

/// Compute D_KL(P‖Q) over two index-aligned probability vectors.
///
/// Categories with p_i = 0 contribute nothing. A category with p_i > 0
/// and q_i = 0 has no finite divergence; the result is `f64::INFINITY`.
/// Identical distributions yield exactly 0.0.
pub fn kl_divergence(p: &[f64], q: &[f64]) -> f64 {
    debug_assert_eq!(p.len(), q.len());

    p.iter()
        .zip(q)
        .map(|(&pi, &qi)| {
            if pi <= 0.0 {
                0.0
            } else if qi <= 0.0 {
                f64::INFINITY
            } else {
                pi * (pi / qi).log2()
            }
        })
        .sum()
}
