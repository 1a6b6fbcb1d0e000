//! Conversions between linear grid indices and `(x, y)` coordinates.
//!
//! Grids are stored row-major, so `index = y * width + x`. Coordinates are
//! signed because a walk may step one cell past an edge before being
//! bounds-checked. All functions assume `width > 0`.

/// Split a linear index into `(x, y)`.
#[must_use]
pub fn index_to_pos(width: usize, index: usize) -> (isize, isize) {
    debug_assert!(width > 0, "index_to_pos: width must be positive");
    ((index % width) as isize, (index / width) as isize)
}

/// Join `(x, y)` back into a linear index.
///
/// Callers check [`in_bounds`] first; negative coordinates are never passed.
#[must_use]
pub fn pos_to_index(width: usize, x: isize, y: isize) -> usize {
    debug_assert!(x >= 0 && y >= 0, "pos_to_index: ({x}, {y}) is negative");
    (y as usize) * width + (x as usize)
}

#[must_use]
pub fn in_bounds(x: isize, y: isize, width: usize, height: usize) -> bool {
    x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height
}
