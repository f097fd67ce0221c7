//! Structural legality checks for a cube configuration
//!
//! These catch impossible color strings (typos, missing stickers, a corner
//! painted with two opposite colors) before any search starts. They do not
//! check permutation or orientation parity.

use super::{COLORS, Cube, CubeError, FACES, STICKERS};

/// Corner pieces as (face, spot) triples
const CORNERS: [[(usize, usize); 3]; 8] = [
    [(0, 0), (1, 2), (4, 6)],
    [(0, 6), (1, 8), (5, 0)],
    [(0, 2), (4, 8), (3, 0)],
    [(0, 8), (5, 2), (3, 6)],
    [(2, 0), (3, 2), (4, 2)],
    [(2, 2), (4, 0), (1, 0)],
    [(2, 6), (3, 8), (5, 8)],
    [(2, 8), (1, 6), (5, 6)],
];

/// Edge pieces as (face, spot) pairs
const EDGES: [[(usize, usize); 2]; 12] = [
    [(0, 1), (4, 7)],
    [(0, 5), (3, 3)],
    [(0, 7), (5, 1)],
    [(0, 3), (1, 5)],
    [(1, 1), (4, 3)],
    [(4, 5), (3, 1)],
    [(3, 7), (5, 5)],
    [(5, 3), (1, 7)],
    [(2, 1), (4, 1)],
    [(2, 5), (1, 3)],
    [(2, 7), (5, 7)],
    [(2, 3), (3, 5)],
];

/// Faces that sit opposite each other
const OPPOSITE_FACES: [(usize, usize); 3] = [(0, 2), (1, 3), (4, 5)];

/// Run every structural check, returning the first failure
pub fn validate(cube: &Cube) -> Result<(), CubeError> {
    check_centers(cube)?;
    check_color_counts(cube)?;
    let opposite = opposite_colors(cube);
    check_corners(cube, &opposite)?;
    check_edges(cube, &opposite)?;
    Ok(())
}

fn check_centers(cube: &Cube) -> Result<(), CubeError> {
    let mut seen = [false; COLORS as usize];
    for face in 0..FACES {
        let color = cube.center(face) as usize;
        if seen[color] {
            return Err(CubeError::DuplicateCenters);
        }
        seen[color] = true;
    }
    Ok(())
}

fn check_color_counts(cube: &Cube) -> Result<(), CubeError> {
    let mut counts = [0usize; COLORS as usize];
    for face in 0..FACES {
        for spot in 0..STICKERS {
            counts[cube.get(face, spot) as usize] += 1;
        }
    }
    if counts.iter().all(|&n| n == STICKERS) {
        Ok(())
    } else {
        Err(CubeError::IncorrectColorCount)
    }
}

/// Map each color to the color of the opposite center
fn opposite_colors(cube: &Cube) -> [u8; COLORS as usize] {
    let mut opposite = [0u8; COLORS as usize];
    for (a, b) in OPPOSITE_FACES {
        let (ca, cb) = (cube.center(a), cube.center(b));
        opposite[ca as usize] = cb;
        opposite[cb as usize] = ca;
    }
    opposite
}

fn check_corners(cube: &Cube, opposite: &[u8; COLORS as usize]) -> Result<(), CubeError> {
    let mut counts = [0usize; COLORS as usize];
    for corner in CORNERS {
        let [a, b, c] = corner.map(|(face, spot)| cube.get(face, spot));
        let distinct = a != b && b != c && a != c;
        let adjacent = opposite[a as usize] != b
            && opposite[a as usize] != c
            && opposite[b as usize] != c;
        if !distinct || !adjacent {
            return Err(CubeError::IncorrectCorners);
        }
        for color in [a, b, c] {
            counts[color as usize] += 1;
        }
    }
    if counts.iter().all(|&n| n == 4) {
        Ok(())
    } else {
        Err(CubeError::IncorrectCorners)
    }
}

fn check_edges(cube: &Cube, opposite: &[u8; COLORS as usize]) -> Result<(), CubeError> {
    let mut counts = [0usize; COLORS as usize];
    for edge in EDGES {
        let [a, b] = edge.map(|(face, spot)| cube.get(face, spot));
        if a == b || opposite[a as usize] == b {
            return Err(CubeError::IncorrectEdges);
        }
        counts[a as usize] += 1;
        counts[b as usize] += 1;
    }
    if counts.iter().all(|&n| n == 4) {
        Ok(())
    } else {
        Err(CubeError::IncorrectEdges)
    }
}
