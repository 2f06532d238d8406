//! Grid triangulation.

/// Yields the triangles of a `grid_x` × `grid_y` vertex grid whose first
/// vertex sits at `offset` in the shared buffer.
///
/// Each cell with corners `a` (current), `b` (next row), `c` (next row, next
/// column) and `d` (next column) produces `(a, b, d)` then `(b, c, d)`.
pub fn triangulate_grid(grid_x: u32, grid_y: u32, offset: u32) -> impl Iterator<Item = [u32; 3]> {
    let row = grid_x + 1;
    (0..grid_y).flat_map(move |iy| {
        (0..grid_x).flat_map(move |ix| {
            let a = offset + ix + row * iy;
            let b = offset + ix + row * (iy + 1);
            let c = offset + (ix + 1) + row * (iy + 1);
            let d = offset + (ix + 1) + row * iy;
            [[a, b, d], [b, c, d]]
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell() {
        let tris: Vec<_> = triangulate_grid(1, 1, 0).collect();
        assert_eq!(tris, vec![[0, 2, 1], [2, 3, 1]]);
    }

    #[test]
    fn test_offset_applies_to_every_index() {
        let tris: Vec<_> = triangulate_grid(1, 1, 24).collect();
        assert_eq!(tris, vec![[24, 26, 25], [26, 27, 25]]);
    }

    #[test]
    fn test_scanline_order() {
        // 2x2 grid, 3 vertices per row.
        let tris: Vec<_> = triangulate_grid(2, 2, 0).collect();
        assert_eq!(tris.len(), 8);
        assert_eq!(tris[0], [0, 3, 1]);
        assert_eq!(tris[1], [3, 4, 1]);
        assert_eq!(tris[2], [1, 4, 2]);
        assert_eq!(tris[4], [3, 6, 4]);
        assert_eq!(tris[7], [7, 8, 5]);
    }

    #[test]
    fn test_indices_stay_in_block() {
        let (gx, gy, offset) = (5u32, 3u32, 100u32);
        let vertex_count = (gx + 1) * (gy + 1);
        for tri in triangulate_grid(gx, gy, offset) {
            for i in tri {
                assert!(i >= offset && i < offset + vertex_count);
            }
        }
        assert_eq!(triangulate_grid(gx, gy, offset).count(), (gx * gy * 2) as usize);
    }
}
