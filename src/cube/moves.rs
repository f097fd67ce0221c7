//! Move descriptors and the fixed move catalogs consumed by the search
//!
//! Two label conventions are supported:
//! - face turns in official notation (`R`, `R'`, `R2`), space-delimited
//! - layered slides in letter+depth notation (`R0`, `C1`, `u1`), concatenated
//!
//! Every move knows its label (through `Display`) and its algebraic inverse.

use super::{Cube, Face};
use rand::Rng;
use std::fmt;

/// Direction of a face turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Double,
}

/// Layered slide families
///
/// `Right`/`Left` shift horizontal rows (dragging the up face), `Up`/`Down`
/// roll vertical columns (dragging the left face), and `Clockwise`/
/// `CounterClockwise` turn levels parallel to the front face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slide {
    Right,
    Left,
    Up,
    Down,
    Clockwise,
    CounterClockwise,
    DoubleRight,
    DoubleUp,
    DoubleClockwise,
}

impl Slide {
    pub fn letter(self) -> char {
        match self {
            Slide::Right => 'R',
            Slide::Left => 'L',
            Slide::Up => 'U',
            Slide::Down => 'D',
            Slide::Clockwise => 'C',
            Slide::CounterClockwise => 'T',
            Slide::DoubleRight => 'r',
            Slide::DoubleUp => 'u',
            Slide::DoubleClockwise => 'c',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(Slide::Right),
            'L' => Some(Slide::Left),
            'U' => Some(Slide::Up),
            'D' => Some(Slide::Down),
            'C' => Some(Slide::Clockwise),
            'T' => Some(Slide::CounterClockwise),
            'r' => Some(Slide::DoubleRight),
            'u' => Some(Slide::DoubleUp),
            'c' => Some(Slide::DoubleClockwise),
            _ => None,
        }
    }

    fn inverse(self) -> Self {
        match self {
            Slide::Right => Slide::Left,
            Slide::Left => Slide::Right,
            Slide::Up => Slide::Down,
            Slide::Down => Slide::Up,
            Slide::Clockwise => Slide::CounterClockwise,
            Slide::CounterClockwise => Slide::Clockwise,
            double => double,
        }
    }
}

/// Deepest layer index a slide may reach on a 3x3x3 cube
pub const MAX_LAYER: u8 = 1;

/// A single transition of the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Face turn in official notation
    Face(Face, Turn),
    /// Slide of layers `0..=depth`
    Slide(Slide, u8),
}

impl Move {
    /// The move that undoes this one
    pub fn inverse(self) -> Move {
        match self {
            Move::Face(face, Turn::Clockwise) => Move::Face(face, Turn::CounterClockwise),
            Move::Face(face, Turn::CounterClockwise) => Move::Face(face, Turn::Clockwise),
            Move::Face(face, Turn::Double) => Move::Face(face, Turn::Double),
            Move::Slide(slide, depth) => Move::Slide(slide.inverse(), depth),
        }
    }

    /// True for single quarter turns (which have order four)
    pub fn is_quarter_turn(self) -> bool {
        match self {
            Move::Face(_, turn) => turn != Turn::Double,
            Move::Slide(slide, _) => !matches!(
                slide,
                Slide::DoubleRight | Slide::DoubleUp | Slide::DoubleClockwise
            ),
        }
    }

    pub(super) fn apply_to(self, cube: &mut Cube) {
        match self {
            Move::Face(face, Turn::Double) => {
                turn_face(cube, face, true);
                turn_face(cube, face, true);
            }
            Move::Face(face, turn) => turn_face(cube, face, turn == Turn::Clockwise),
            Move::Slide(slide, depth) => {
                let layers = 0..=depth as usize;
                match slide {
                    Slide::Right => slide_right(cube, layers),
                    Slide::Left => {
                        for row in layers {
                            cube.rotate_row_left(row);
                        }
                        cube.rotate_face_counter_clockwise(Face::Up.index());
                    }
                    Slide::Up => slide_up(cube, layers),
                    Slide::Down => {
                        for column in layers {
                            cube.rotate_column_down(column);
                        }
                        cube.rotate_face_clockwise(Face::Left.index());
                    }
                    Slide::Clockwise => slide_clockwise(cube, layers),
                    Slide::CounterClockwise => {
                        for level in layers {
                            cube.rotate_level_counter_clockwise(level);
                        }
                        cube.rotate_face_counter_clockwise(Face::Front.index());
                    }
                    Slide::DoubleRight => {
                        slide_right(cube, layers.clone());
                        slide_right(cube, layers);
                    }
                    Slide::DoubleUp => {
                        slide_up(cube, layers.clone());
                        slide_up(cube, layers);
                    }
                    Slide::DoubleClockwise => {
                        slide_clockwise(cube, layers.clone());
                        slide_clockwise(cube, layers);
                    }
                }
            }
        }
    }
}

fn turn_face(cube: &mut Cube, face: Face, clockwise: bool) {
    if clockwise {
        cube.rotate_face_clockwise(face.index());
    } else {
        cube.rotate_face_counter_clockwise(face.index());
    }
    match (face, clockwise) {
        (Face::Right, true) => cube.rotate_column_up(2),
        (Face::Right, false) => cube.rotate_column_down(2),
        (Face::Left, true) => cube.rotate_column_down(0),
        (Face::Left, false) => cube.rotate_column_up(0),
        (Face::Up, true) => cube.rotate_row_right(0),
        (Face::Up, false) => cube.rotate_row_left(0),
        (Face::Down, true) => cube.rotate_row_left(2),
        (Face::Down, false) => cube.rotate_row_right(2),
        (Face::Front, true) => cube.rotate_level_clockwise(0),
        (Face::Front, false) => cube.rotate_level_counter_clockwise(0),
        (Face::Back, true) => cube.rotate_level_counter_clockwise(2),
        (Face::Back, false) => cube.rotate_level_clockwise(2),
    }
}

fn slide_right(cube: &mut Cube, layers: std::ops::RangeInclusive<usize>) {
    for row in layers {
        cube.rotate_row_right(row);
    }
    cube.rotate_face_clockwise(Face::Up.index());
}

fn slide_up(cube: &mut Cube, layers: std::ops::RangeInclusive<usize>) {
    for column in layers {
        cube.rotate_column_up(column);
    }
    cube.rotate_face_counter_clockwise(Face::Left.index());
}

fn slide_clockwise(cube: &mut Cube, layers: std::ops::RangeInclusive<usize>) {
    for level in layers {
        cube.rotate_level_clockwise(level);
    }
    cube.rotate_face_clockwise(Face::Front.index());
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Face(face, Turn::Clockwise) => write!(f, "{}", face.letter()),
            Move::Face(face, Turn::CounterClockwise) => write!(f, "{}'", face.letter()),
            Move::Face(face, Turn::Double) => write!(f, "{}2", face.letter()),
            Move::Slide(slide, depth) => write!(f, "{}{}", slide.letter(), depth),
        }
    }
}

const fn face(face: Face, turn: Turn) -> Move {
    Move::Face(face, turn)
}

const fn slide(slide: Slide, depth: u8) -> Move {
    Move::Slide(slide, depth)
}

const OFFICIAL: [Move; 18] = {
    use Face::*;
    use Turn::*;
    [
        face(Right, Clockwise),
        face(Right, CounterClockwise),
        face(Left, Clockwise),
        face(Left, CounterClockwise),
        face(Up, Clockwise),
        face(Up, CounterClockwise),
        face(Down, Clockwise),
        face(Down, CounterClockwise),
        face(Front, Clockwise),
        face(Front, CounterClockwise),
        face(Back, Clockwise),
        face(Back, CounterClockwise),
        face(Right, Double),
        face(Left, Double),
        face(Up, Double),
        face(Down, Double),
        face(Front, Double),
        face(Back, Double),
    ]
};

const LAYERED: [Move; 18] = {
    use Slide::*;
    [
        slide(Right, 0),
        slide(Right, 1),
        slide(Left, 0),
        slide(Left, 1),
        slide(Up, 0),
        slide(Up, 1),
        slide(Down, 0),
        slide(Down, 1),
        slide(Clockwise, 0),
        slide(Clockwise, 1),
        slide(CounterClockwise, 0),
        slide(CounterClockwise, 1),
        slide(DoubleRight, 0),
        slide(DoubleRight, 1),
        slide(DoubleUp, 0),
        slide(DoubleUp, 1),
        slide(DoubleClockwise, 0),
        slide(DoubleClockwise, 1),
    ]
};

/// A fixed, ordered move catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveSet {
    /// Face turns: quarter turns, their inverses, then double turns
    #[default]
    Official,
    /// Row/column/level slides at depth 0 and 1, then double slides
    Layered,
}

impl MoveSet {
    /// Every move of the catalog in enumeration order
    pub fn moves(self) -> &'static [Move] {
        match self {
            MoveSet::Official => &OFFICIAL,
            MoveSet::Layered => &LAYERED,
        }
    }

    /// Delimiter placed between labels when printing a sequence
    pub fn separator(self) -> &'static str {
        match self {
            MoveSet::Official => " ",
            MoveSet::Layered => "",
        }
    }

    pub fn contains(self, mv: Move) -> bool {
        self.moves().contains(&mv)
    }

    /// Draw `length` moves from the catalog, never following a move with its
    /// own inverse.
    pub fn random_sequence<R: Rng>(self, rng: &mut R, length: usize) -> Vec<Move> {
        let moves = self.moves();
        let mut sequence: Vec<Move> = Vec::with_capacity(length);
        while sequence.len() < length {
            let mv = moves[rng.random_range(0..moves.len())];
            if sequence.last().is_some_and(|prev| prev.inverse() == mv) {
                continue;
            }
            sequence.push(mv);
        }
        sequence
    }

    /// True if no move of the catalog moves a center sticker.
    ///
    /// Depth-1 slides drag the middle layer, centers included, so a layered
    /// scramble can end up with its centers rotated.
    pub fn fixes_centers(self) -> bool {
        match self {
            MoveSet::Official => true,
            MoveSet::Layered => false,
        }
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveSet::Official => write!(f, "official"),
            MoveSet::Layered => write!(f, "layered"),
        }
    }
}

impl std::str::FromStr for MoveSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "official" | "face" | "faces" => Ok(MoveSet::Official),
            "layered" | "layer" | "slides" => Ok(MoveSet::Layered),
            _ => Err(format!(
                "Unknown move set: '{}'. Valid options: official, layered",
                s
            )),
        }
    }
}

/// Format a move sequence with the catalog's delimiter
pub fn format_sequence(moves: &[Move], set: MoveSet) -> String {
    moves
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(set.separator())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrambled() -> Cube {
        let mut cube = Cube::solved();
        for &mv in &[
            face(Face::Right, Turn::Clockwise),
            face(Face::Up, Turn::Double),
            slide(Slide::Clockwise, 1),
            face(Face::Back, Turn::CounterClockwise),
            slide(Slide::DoubleUp, 0),
        ] {
            cube.apply(mv);
        }
        cube
    }

    #[test]
    fn test_move_inversion() {
        let start = scrambled();
        for set in [MoveSet::Official, MoveSet::Layered] {
            for &mv in set.moves() {
                let mut cube = start;
                cube.apply(mv);
                cube.apply(mv.inverse());
                assert_eq!(cube, start, "{} then {}", mv, mv.inverse());
                assert!(set.contains(mv.inverse()));
            }
        }
    }

    #[test]
    fn test_quadruple_identity() {
        let start = scrambled();
        for set in [MoveSet::Official, MoveSet::Layered] {
            for &mv in set.moves().iter().filter(|mv| mv.is_quarter_turn()) {
                let mut cube = start;
                for _ in 0..4 {
                    cube.apply(mv);
                }
                assert_eq!(cube, start, "four turns of {}", mv);
            }
        }
    }

    #[test]
    fn test_double_is_two_quarters() {
        let start = scrambled();
        for face_ in Face::ALL {
            let mut doubled = start;
            doubled.apply(face(face_, Turn::Double));
            let mut twice = start;
            twice.apply(face(face_, Turn::Clockwise));
            twice.apply(face(face_, Turn::Clockwise));
            assert_eq!(doubled, twice);
        }
    }

    #[test]
    fn test_every_move_changes_the_cube() {
        let start = Cube::solved();
        for set in [MoveSet::Official, MoveSet::Layered] {
            for &mv in set.moves() {
                let (next, _) = start.turned(mv);
                assert_ne!(next, start, "{} is a no-op", mv);
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(face(Face::Right, Turn::Clockwise).to_string(), "R");
        assert_eq!(face(Face::Back, Turn::CounterClockwise).to_string(), "B'");
        assert_eq!(face(Face::Down, Turn::Double).to_string(), "D2");
        assert_eq!(slide(Slide::CounterClockwise, 1).to_string(), "T1");
        assert_eq!(slide(Slide::DoubleUp, 0).to_string(), "u0");

        let seq = [slide(Slide::Right, 1), slide(Slide::Up, 0)];
        assert_eq!(format_sequence(&seq, MoveSet::Layered), "R1U0");
        let seq = [face(Face::Right, Turn::Clockwise), face(Face::Up, Turn::CounterClockwise)];
        assert_eq!(format_sequence(&seq, MoveSet::Official), "R U'");
    }

    #[test]
    fn test_catalogs_are_distinct() {
        for set in [MoveSet::Official, MoveSet::Layered] {
            let moves = set.moves();
            assert_eq!(moves.len(), 18);
            for (i, a) in moves.iter().enumerate() {
                for b in &moves[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_fixes_centers() {
        let start = Cube::solved();
        let centers = |cube: &Cube| -> Vec<u8> { (0..6).map(|f| cube.center(f)).collect() };
        for set in [MoveSet::Official, MoveSet::Layered] {
            let moved = set
                .moves()
                .iter()
                .any(|&mv| centers(&start.turned(mv).0) != centers(&start));
            assert_eq!(moved, !set.fixes_centers(), "{}", set);
        }
    }

    #[test]
    fn test_random_sequence() {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        for set in [MoveSet::Official, MoveSet::Layered] {
            let first = set.random_sequence(&mut ChaCha8Rng::seed_from_u64(7), 25);
            let second = set.random_sequence(&mut ChaCha8Rng::seed_from_u64(7), 25);
            assert_eq!(first.len(), 25);
            assert_eq!(first, second);
            assert!(first.iter().all(|&mv| set.contains(mv)));
            assert!(first.windows(2).all(|w| w[1] != w[0].inverse()));
        }
        assert!(MoveSet::Official
            .random_sequence(&mut ChaCha8Rng::seed_from_u64(1), 0)
            .is_empty());
    }

    #[test]
    fn test_move_set_from_str() {
        assert_eq!("official".parse::<MoveSet>(), Ok(MoveSet::Official));
        assert_eq!("Layered".parse::<MoveSet>(), Ok(MoveSet::Layered));
        assert!("diagonal".parse::<MoveSet>().is_err());
    }
}
