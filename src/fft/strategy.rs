/// Sizes below this are always computed with the direct transform.
pub const DIRECT_LIMIT: usize = 16;

/// The algorithm the dispatcher uses for a given transform length.
///
/// The decision is a pure function of the length and is recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// O(N²) direct evaluation, used for `N < 16`.
    Direct,
    /// Iterative radix-2 Cooley-Tukey, used for powers of two.
    Radix2,
    /// Chirp-z convolution through power-of-two transforms, used for primes.
    Bluestein,
    /// Cooley-Tukey split `N = radix · (N / radix)` with twiddle factors, used when
    /// no coprime split exists.
    MixedRadix {
        /// Largest divisor of `N` that is at most `⌊√N⌋`.
        radix: usize,
    },
    /// Prime-factor split `N = n1 · n2` with `gcd(n1, n2) = 1`.
    GoodThomas { n1: usize, n2: usize },
}

impl Strategy {
    /// Classifies a transform length.
    ///
    /// The first factor is the largest divisor not above `⌊√N⌋`. Shared factors with the
    /// cofactor are absorbed into it until both are coprime; if nothing is left of the
    /// cofactor, the length is a chain of shared prime powers and is handled with the
    /// mixed-radix split (radix = the first factor found).
    pub fn for_len(len: usize) -> Self {
        assert!(len > 0, "Transform length must not be zero");

        if len < DIRECT_LIMIT {
            return Strategy::Direct;
        }
        if len.is_power_of_two() {
            return Strategy::Radix2;
        }

        let radix = largest_divisor_below_sqrt(len);
        if radix == 1 {
            return Strategy::Bluestein;
        }

        let mut n1 = radix;
        let mut n2 = len / n1;
        loop {
            let shared = gcd(n1, n2);
            if shared == 1 {
                break;
            }
            n1 *= shared;
            n2 = len / n1;
        }

        if n2 == 1 {
            Strategy::MixedRadix { radix }
        } else {
            Strategy::GoodThomas { n1, n2 }
        }
    }
}

/// Largest `d ≤ ⌊√n⌋` dividing `n`, found by descending trial division.
pub(crate) fn largest_divisor_below_sqrt(n: usize) -> usize {
    let mut divisor = n.isqrt();
    while n % divisor != 0 {
        divisor -= 1;
    }
    divisor
}

pub(crate) fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns `(x, y)` with `a·x + b·y = gcd(a, b)`.
pub(crate) fn extended_euclid(a: i64, b: i64) -> (i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1, 0);
    let (mut old_y, mut y) = (0, 1);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_x, x) = (x, old_x - quotient * x);
        (old_y, y) = (y, old_y - quotient * y);
    }

    (old_x, old_y)
}

/// CRT coefficients `(i_n1, i_n2)` with `n1·i_n1 ≡ 1 (mod n2)` and `n2·i_n2 ≡ 1 (mod n1)`,
/// both reduced to non-negative residues.
pub(crate) fn crt_coefficients(n1: usize, n2: usize) -> (usize, usize) {
    assert_eq!(gcd(n1, n2), 1, "Factors {n1} and {n2} are not coprime");

    let (x, y) = extended_euclid(n1 as i64, n2 as i64);
    (
        x.rem_euclid(n2 as i64) as usize,
        y.rem_euclid(n1 as i64) as usize,
    )
}
