//! Deviation-sequence kernels
//!
//! Every homogeneity statistic is an extremum (or sum) over a sequence
//! indexed by the split point `k`. These functions produce those sequences
//! in one linear pass each; the statistics module picks the extremum.
//!
//! All functions expect a clean (NaN-free) series of length `n >= 2`.

use crate::types::SegmentMeans;
use homogeneity_core::utils::{argmax, average_ranks, mean};

/// Pettitt rank deviations `U_k = 2·Σ_{i≤k} r_i − k·(n+1)` for `k = 1..n-1`
///
/// Ranks are mid-ranks, so ties share the average of their positions.
pub fn rank_deviations(data: &[f64]) -> Vec<f64> {
    let n = data.len();
    let ranks = average_ranks(data);
    let mut rank_sum = 0.0;

    ranks[..n - 1]
        .iter()
        .enumerate()
        .map(|(i, &r)| {
            rank_sum += r;
            let k = (i + 1) as f64;
            2.0 * rank_sum - k * (n as f64 + 1.0)
        })
        .collect()
}

/// SNHT mean-shift sequence `T_k = k·z1² + (n−k)·z2²` for `k = 1..n-1`
///
/// `z1` and `z2` are the standardized means of the segments before and after
/// `k`, standardized by `std_dev` (the sample standard deviation).
pub fn snht_deviations(data: &[f64], std_dev: f64) -> Vec<f64> {
    let n = data.len();
    let mu = mean(data);

    // Sums of the trailing segments x[k..n], built from the right
    let mut tail_sums = vec![0.0; n];
    let mut acc = 0.0;
    for i in (1..n).rev() {
        acc += data[i];
        tail_sums[i] = acc;
    }

    let mut head_sum = 0.0;
    (1..n)
        .map(|k| {
            head_sum += data[k - 1];
            let before = k as f64;
            let after = (n - k) as f64;
            let z1 = ((head_sum - before * mu) / std_dev) / before;
            let z2 = ((tail_sums[k] - after * mu) / std_dev) / after;
            before * z1 * z1 + after * z2 * z2
        })
        .collect()
}

/// Cumulative deviations from the mean `S_k = Σ_{i≤k} (x_i − x̄)` for `k = 1..n`
///
/// `S_n` is zero up to rounding.
pub fn cumulative_deviations(data: &[f64]) -> Vec<f64> {
    let mu = mean(data);
    let mut running = 0.0;

    data.iter()
        .enumerate()
        .map(|(i, &x)| {
            running += x;
            running - (i + 1) as f64 * mu
        })
        .collect()
}

/// 1-based position of the largest `|S_k|`, first occurrence on ties
pub fn max_abs_location(deviations: &[f64]) -> Option<usize> {
    let magnitudes: Vec<f64> = deviations.iter().map(|s| s.abs()).collect();
    argmax(&magnitudes).map(|i| i + 1)
}

/// Means of `data[..location]` and `data[location..]`
///
/// A segment that is empty yields a NaN mean.
pub fn segment_means(data: &[f64], location: usize) -> SegmentMeans {
    let split = location.min(data.len());
    let (before, after) = data.split_at(split);
    SegmentMeans {
        mu1: mean(before),
        mu2: mean(after),
    }
}
