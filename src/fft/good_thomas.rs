use super::{Direction, strategy::crt_coefficients, transform, transpose::transpose};
use crate::Complex64;

/// Good-Thomas prime-factor transform for `N = n1 · n2` with `gcd(n1, n2) = 1`.
///
/// The Ruritanian input map and the CRT output map turn the transform into an `n1 × n2`
/// two-dimensional one, so no twiddle factors are needed between the row and column passes.
pub(crate) fn good_thomas(
    direction: Direction,
    n1: usize,
    n2: usize,
    input: &mut [Complex64],
    output: &mut [Complex64],
) {
    let n = input.len();
    assert_eq!(n1 * n2, n, "Factors {n1}x{n2} do not multiply to {n}");
    let (i_n1, i_n2) = crt_coefficients(n1, n2);

    for (row_index, row) in output.chunks_exact_mut(n2).enumerate() {
        for (column, x) in row.iter_mut().enumerate() {
            *x = input[(row_index * n2 + column * n1) % n];
        }
    }

    for (row, spectrum) in output.chunks_exact_mut(n2).zip(input.chunks_exact_mut(n2)) {
        transform(direction, row, spectrum);
    }

    transpose(input, output, n2, n1);

    for (column, spectrum) in output.chunks_exact_mut(n1).zip(input.chunks_exact_mut(n1)) {
        transform(direction, column, spectrum);
    }

    for (k2, column) in input.chunks_exact(n1).enumerate() {
        let offset2 = ((k2 * i_n1) % n2) * n1;
        for (k1, &x) in column.iter().enumerate() {
            let offset1 = ((k1 * i_n2) % n1) * n2;
            output[(offset1 + offset2) % n] = x;
        }
    }
}
