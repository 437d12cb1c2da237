// src/sums/partial_sums.rs

use num::Zero;

/// Running sums: `output[i]` is the sum of `seq[0..=i]`.
///
/// # Examples
/// ```
/// use ntkit::sums::partial_sums::compute_partial_sums;
///
/// assert_eq!(compute_partial_sums(&[1, 1, 1, 1]), vec![1, 2, 3, 4]);
/// assert!(compute_partial_sums::<i64>(&[]).is_empty());
/// ```
pub fn compute_partial_sums<T: Zero + Clone>(seq: &[T]) -> Vec<T> {
    seq.iter()
        .scan(T::zero(), |partial_sum, elem| {
            *partial_sum = partial_sum.clone() + elem.clone();
            Some(partial_sum.clone())
        })
        .collect()
}

/// Summatory values `F(x) = f(1) + ... + f(x)` for `x = 1..=len`.
pub fn summatory<T, F>(len: u64, fun: F) -> Vec<T>
where
    T: Zero + Clone,
    F: FnMut(u64) -> T,
{
    let values: Vec<T> = (1..=len).map(fun).collect();
    compute_partial_sums(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;

    #[test]
    fn test_partial_sums() {
        assert_eq!(compute_partial_sums(&[1, 1, 1, 1]), vec![1, 2, 3, 4]);
        assert_eq!(compute_partial_sums(&[5, -2, 0, 7]), vec![5, 3, 3, 10]);
        assert_eq!(compute_partial_sums(&[9]), vec![9]);
    }

    #[test]
    fn test_empty() {
        assert!(compute_partial_sums::<i64>(&[]).is_empty());
    }

    #[test]
    fn test_complex() {
        let seq = [Complex::new(1, 1), Complex::new(2, -1), Complex::new(0, 3)];
        assert_eq!(
            compute_partial_sums(&seq),
            vec![Complex::new(1, 1), Complex::new(3, 0), Complex::new(3, 3)]
        );
    }

    #[test]
    fn test_summatory() {
        assert_eq!(summatory(5, |x| x), vec![1, 3, 6, 10, 15]);
        assert!(summatory(0, |x| x).is_empty());
    }
}
