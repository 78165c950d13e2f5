use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TriangularError {
    #[error("triangular number of {n} does not fit in u64")]
    Overflow { n: u64 },
}

/// Largest `n` whose triangular number fits in `u64`.
pub const MAX_TRIANGULAR_INPUT: u64 = 6_074_000_999;

/// The `n`-th triangular number, `n(n+1)/2`.
///
/// Overflows (panicking in debug builds) for `n` above [`MAX_TRIANGULAR_INPUT`].
pub fn triangular(n: u64) -> u64 {
    let (a, b) = halved_factors(n, n + 1);
    a * b
}

pub fn checked_triangular(n: u64) -> Result<u64, TriangularError> {
    let next = n.checked_add(1).ok_or(TriangularError::Overflow { n })?;
    let (a, b) = halved_factors(n, next);
    a.checked_mul(b).ok_or(TriangularError::Overflow { n })
}

/// Halves the even one of two consecutive integers, so their product only overflows
/// when the triangular number itself does.
fn halved_factors(n: u64, next: u64) -> (u64, u64) {
    if n % 2 == 0 {
        (n / 2, next)
    } else {
        (n, next / 2)
    }
}
