//! Fixed gradient vectors assigned to lattice corners.

/// Gradient vectors for 2D: the twelve cube-edge midpoints projected onto
/// the XY plane.
pub const GRAD2: [[i8; 2]; 12] = [
    [1, 1],
    [-1, 1],
    [1, -1],
    [-1, -1],
    [1, 0],
    [-1, 0],
    [1, 0],
    [-1, 0],
    [0, 1],
    [0, -1],
    [0, 1],
    [0, -1],
];

/// Gradient vectors for 3D: midpoints of the twelve edges of a cube.
pub const GRAD3: [[i8; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grad2_matches_grad3_projection() {
        for (g2, g3) in GRAD2.iter().zip(GRAD3.iter()) {
            assert_eq!(g2[0], g3[0]);
            assert_eq!(g2[1], g3[1]);
        }
    }

    #[test]
    fn test_grad3_edges_have_one_zero() {
        for g in GRAD3.iter() {
            assert_eq!(g.iter().filter(|&&c| c == 0).count(), 1);
        }
    }
}
