//! Utility functions for working with data slices

use statrs::statistics::{Data, OrderStatistics, RankTieBreaker};

/// Calculate the mean of a slice
///
/// Returns NaN for empty slices.
///
/// # Examples
///
/// ```rust
/// use homogeneity_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sum of squared deviations from `center`
fn sum_of_squares(data: &[f64], center: f64) -> f64 {
    data.iter()
        .map(|&x| {
            let diff = x - center;
            diff * diff
        })
        .sum()
}

/// Calculate the sample standard deviation (divisor `n - 1`)
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use homogeneity_core::utils::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    (sum_of_squares(data, m) / (data.len() - 1) as f64).sqrt()
}

/// Calculate the population standard deviation (divisor `n`)
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use homogeneity_core::utils::population_std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = population_std_dev(&data);
/// assert!((sd - std::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
pub fn population_std_dev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    (sum_of_squares(data, m) / data.len() as f64).sqrt()
}

/// Assign 1-based ranks, giving tied values the average of their ranks
///
/// Input must not contain NaN.
///
/// # Examples
///
/// ```rust
/// use homogeneity_core::utils::average_ranks;
///
/// assert_eq!(average_ranks(&[10.0, 30.0, 20.0, 30.0]), vec![1.0, 3.5, 2.0, 3.5]);
/// ```
pub fn average_ranks(data: &[f64]) -> Vec<f64> {
    Data::new(data.to_vec()).ranks(RankTieBreaker::Average)
}

/// Index of the largest value, first occurrence on ties
///
/// Returns `None` for empty slices.
///
/// # Examples
///
/// ```rust
/// use homogeneity_core::utils::argmax;
///
/// assert_eq!(argmax(&[1.0, 5.0, 2.0, 5.0]), Some(1));
/// assert_eq!(argmax(&[]), None);
/// ```
pub fn argmax(data: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &x) in data.iter().enumerate() {
        match best {
            Some((_, current)) if x <= current => {}
            _ => best = Some((i, x)),
        }
    }
    best.map(|(i, _)| i)
}

/// Largest and smallest value of a slice
///
/// Returns `None` for empty slices.
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let first = *data.first()?;
    Some(
        data.iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[-10.0, 10.0]), 0.0);
        assert_eq!(mean(&[42.0]), 42.0);
    }

    #[test]
    fn test_mean_empty() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_std_dev_basic() {
        // Variance = 10 / 4 = 2.5
        assert_relative_eq!(std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.5f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_std_dev_short_slices() {
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(std_dev(&[42.0]), 0.0);
    }

    #[test]
    fn test_population_std_dev_basic() {
        // Variance = 10 / 5 = 2
        assert_relative_eq!(
            population_std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            std::f64::consts::SQRT_2,
            epsilon = 1e-12
        );
        assert_eq!(population_std_dev(&[7.0]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    #[test]
    fn test_sample_and_population_differ() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_std_dev(&data), 2.0, epsilon = 1e-12);
        assert_relative_eq!(std_dev(&data), (32.0f64 / 7.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_identical_values() {
        let data = [5.0, 5.0, 5.0, 5.0];
        assert_eq!(std_dev(&data), 0.0);
        assert_eq!(population_std_dev(&data), 0.0);
    }

    #[test]
    fn test_average_ranks_no_ties() {
        assert_eq!(average_ranks(&[3.0, 1.0, 2.0]), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_average_ranks_ties() {
        assert_eq!(
            average_ranks(&[0.0, 0.0, 0.0, 4.0, 1.0]),
            vec![2.0, 2.0, 2.0, 5.0, 4.0]
        );
        assert_eq!(average_ranks(&[2.0, 2.0]), vec![1.5, 1.5]);
    }

    #[test]
    fn test_average_ranks_sum() {
        let data = [5.0, 3.0, 5.0, 1.0, 3.0, 3.0, 8.0];
        let n = data.len() as f64;
        let total: f64 = average_ranks(&data).iter().sum();
        assert_relative_eq!(total, n * (n + 1.0) / 2.0);
    }

    #[test]
    fn test_average_ranks_signed_zero() {
        assert_eq!(average_ranks(&[-0.0, 0.0, 1.0]), vec![1.5, 1.5, 3.0]);
    }

    #[test]
    fn test_average_ranks_keep_input_order() {
        let data = [5.0, -1.0, 5.0, 2.0, 5.0, -1.0];
        assert_eq!(average_ranks(&data), vec![5.0, 1.5, 5.0, 3.0, 5.0, 1.5]);
        assert!(average_ranks(&[]).is_empty());
    }

    #[test]
    fn test_argmax_first_occurrence() {
        assert_eq!(argmax(&[3.0, 1.0, 3.0]), Some(0));
        assert_eq!(argmax(&[-1.0, -0.5, -0.5]), Some(1));
        assert_eq!(argmax(&[2.0]), Some(0));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[3.0, -1.0, 7.0, 2.0]), Some((-1.0, 7.0)));
        assert_eq!(min_max(&[4.0]), Some((4.0, 4.0)));
        assert_eq!(min_max(&[]), None);
    }
}
