use crate::grid::MAX_TILE;

/// Slide a single line toward index 0.
///
/// Zeros are squeezed out, then equal neighbours merge into one tile of twice
/// the value. A tile produced by a merge does not merge again in the same
/// call, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]` and `[4, 4, 8, 0]` becomes
/// `[8, 8, 0, 0]`. The returned flag is true iff any position changed.
///
/// Tiles of [`MAX_TILE`] stay where they land, so the sum of the line never
/// changes.
pub fn reduce_line(row: &[u32]) -> (Vec<u32>, bool) {
    let mut out = Vec::with_capacity(row.len());
    // whether out's last tile came from a merge during this call
    let mut last_merged = false;

    for &tile in row.iter().filter(|t| **t != 0) {
        match out.last_mut() {
            Some(prev) if merges(*prev, tile) && !last_merged => {
                *prev *= 2;
                last_merged = true;
            }
            _ => {
                out.push(tile);
                last_merged = false;
            }
        }
    }
    out.resize(row.len(), 0);

    let changed = out.as_slice() != row;
    (out, changed)
}

/// Whether two neighbouring cells combine into one tile.
pub fn merges(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

/// True if sliding the line toward index 0 would move or merge anything.
pub fn can_reduce(row: &[u32]) -> bool {
    // index 0 is the edge being swiped toward
    row.windows(2)
        .any(|w| (w[0] == 0 && w[1] != 0) || merges(w[0], w[1]))
}
