const BLOCK_SIZE: usize = 16;

/// Transpose a row-major `height × width` matrix out-of-place into a `width × height` one.
///
/// `output[column * height + row] = input[row * width + column]`
///
/// Works on square tiles so both the reads and the writes of a tile stay within a few
/// cache lines. The stride regroupings of the composite transforms are transposes:
/// gathering every `r`-th element into `r` contiguous groups is `transpose(_, _, r, n / r)`.
pub fn transpose<T: Copy>(input: &[T], output: &mut [T], width: usize, height: usize) {
    assert_eq!(input.len(), output.len());
    assert_eq!(width.checked_mul(height), Some(input.len()));

    for row_start in (0..height).step_by(BLOCK_SIZE) {
        let row_end = (row_start + BLOCK_SIZE).min(height);

        for col_start in (0..width).step_by(BLOCK_SIZE) {
            let col_end = (col_start + BLOCK_SIZE).min(width);

            for row in row_start..row_end {
                let input_row = &input[row * width..(row + 1) * width];
                for column in col_start..col_end {
                    output[column * height + row] = input_row[column];
                }
            }
        }
    }
}
