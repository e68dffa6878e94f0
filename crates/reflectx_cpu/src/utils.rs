/// Maps an output coordinate along one padded axis to its source
/// coordinate, reflecting across both boundaries without repeating the
/// edge element: coordinate `n - 1` maps to itself, `n` maps to `n - 2`,
/// `-1` (one step left of the data) maps to `1`.
///
/// Coordinates that land inside `[0, n)` after removing `pad_before` are
/// returned unchanged. The loop form stays correct for any overshoot,
/// though callers enforce `pad < n`, under which a single reflection per
/// boundary suffices. Requires `n > 1` whenever a reflection is needed.
#[inline]
pub fn reflect_index(out_pos: usize, dim_size: usize, pad_before: usize) -> usize {
    let n = dim_size as isize;
    let mut pos = out_pos as isize - pad_before as isize;

    while pos < 0 || pos >= n {
        if pos < 0 {
            // Reflect at 0
            pos = -pos;
        } else {
            // Reflect at (dim_size - 1)
            pos = 2 * (n - 1) - pos;
        }
    }

    pos as usize
}
