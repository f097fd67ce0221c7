//! Packed 3x3x3 cube configuration and its transformation engine
//!
//! A [`Cube`] stores six faces of nine stickers each. Every sticker is a color
//! in `0..=5` packed into three bits of a `u32`, so a whole configuration is
//! 24 bytes and trivially `Copy`. Face order follows the color-string format:
//! front, left, back, right, up, down. Stickers within a face are row-major.
//!
//! The search engine never looks inside a cube: it works on [`CubeState`]
//! fingerprints and asks the cube to apply moves and report whether it is
//! solved.

pub mod moves;
mod rotation;
pub mod validate;

pub use moves::{Move, MoveSet, Slide, Turn};
pub use validate::validate;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of faces on the cube
pub const FACES: usize = 6;
/// Stickers per face
pub const STICKERS: usize = 9;
/// Number of distinct sticker colors
pub const COLORS: u8 = 6;

const STICKER_BITS: u32 = 3;
const STICKER_MASK: u32 = 0b111;
/// Bits of a packed face that may be set (9 stickers x 3 bits)
const FACE_MASK: u32 = (1 << (STICKER_BITS * STICKERS as u32)) - 1;

/// Errors raised while building or validating a cube configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("The cube has an incorrect number of stickers: expected 54, got {0}")]
    IncorrectLength(usize),
    #[error("Invalid sticker '{found}' at position {index}: colors must be digits 0-5")]
    InvalidSticker { index: usize, found: char },
    #[error("Center stickers must all be different colors")]
    DuplicateCenters,
    #[error("There must be 9 stickers of each color")]
    IncorrectColorCount,
    #[error("The corner pieces are impossible")]
    IncorrectCorners,
    #[error("The edge pieces are impossible")]
    IncorrectEdges,
    #[error("Malformed packed state on face {face}: {bits:#x}")]
    MalformedState { face: usize, bits: u32 },
}

/// A cube face, indexed in color-string order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Front,
    Left,
    Back,
    Right,
    Up,
    Down,
}

impl Face {
    pub const ALL: [Face; FACES] = [
        Face::Front,
        Face::Left,
        Face::Back,
        Face::Right,
        Face::Up,
        Face::Down,
    ];

    /// Position of this face in the packed state
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter name used by face-turn notation
    pub fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Left => 'L',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Up => 'U',
            Face::Down => 'D',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'F' => Some(Face::Front),
            'L' => Some(Face::Left),
            'B' => Some(Face::Back),
            'R' => Some(Face::Right),
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            _ => None,
        }
    }
}

/// Fixed-size fingerprint of a [`Cube`], used as a map key by the search.
///
/// Two cubes are equal iff their fingerprints are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CubeState([u32; FACES]);

impl CubeState {
    /// Build a fingerprint from raw packed faces.
    ///
    /// No validation happens here; [`Cube::from_state`] rejects malformed input.
    pub fn from_raw(faces: [u32; FACES]) -> Self {
        CubeState(faces)
    }

    pub fn raw(&self) -> [u32; FACES] {
        self.0
    }
}

/// A full cube configuration
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    faces: [u32; FACES],
}

impl Cube {
    /// The reference solved cube: face `i` is colored `i`.
    pub fn solved() -> Self {
        let mut cube = Cube { faces: [0; FACES] };
        for face in 0..FACES {
            cube.fill_face(face, face as u8);
        }
        cube
    }

    /// Rebuild a cube from its fingerprint.
    ///
    /// Fails if any sticker holds a color outside `0..=5` or stray high bits
    /// are set, which can only happen through a corrupted fingerprint.
    pub fn from_state(state: CubeState) -> Result<Self, CubeError> {
        for (face, &bits) in state.0.iter().enumerate() {
            let stray = bits & !FACE_MASK != 0;
            let bad_color = (0..STICKERS)
                .any(|spot| ((bits >> (STICKER_BITS * spot as u32)) & STICKER_MASK) >= COLORS as u32);
            if stray || bad_color {
                return Err(CubeError::MalformedState { face, bits });
            }
        }
        Ok(Cube { faces: state.0 })
    }

    pub fn state(&self) -> CubeState {
        CubeState(self.faces)
    }

    /// Color of a sticker
    pub fn get(&self, face: usize, spot: usize) -> u8 {
        ((self.faces[face] >> (STICKER_BITS * spot as u32)) & STICKER_MASK) as u8
    }

    pub(crate) fn set(&mut self, face: usize, spot: usize, color: u8) {
        let shift = STICKER_BITS * spot as u32;
        self.faces[face] = (self.faces[face] & !(STICKER_MASK << shift)) | ((color as u32) << shift);
    }

    fn fill_face(&mut self, face: usize, color: u8) {
        for spot in 0..STICKERS {
            self.set(face, spot, color);
        }
    }

    pub fn center(&self, face: usize) -> u8 {
        self.get(face, 4)
    }

    /// The solved configuration matching this cube's centers.
    ///
    /// This is the goal the search works towards: every face filled with the
    /// color of its center sticker.
    pub fn solved_state(&self) -> Cube {
        let mut goal = *self;
        for face in 0..FACES {
            goal.fill_face(face, self.center(face));
        }
        goal
    }

    /// True when every face shows a single color
    pub fn is_solved(&self) -> bool {
        (0..FACES).all(|face| {
            let first = self.get(face, 0);
            (1..STICKERS).all(|spot| self.get(face, spot) == first)
        })
    }

    /// Apply a move in place
    pub fn apply(&mut self, mv: Move) {
        mv.apply_to(self);
    }

    /// Apply a sequence of moves in order
    pub fn apply_all(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply(mv);
        }
    }

    /// Apply a move to a copy, returning the new cube and whether it is solved
    pub fn turned(&self, mv: Move) -> (Cube, bool) {
        let mut next = *self;
        next.apply(mv);
        let solved = next.is_solved();
        (next, solved)
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

impl FromStr for Cube {
    type Err = CubeError;

    /// Parse a 54-digit color string: front, left, back, right, up, down.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let count = s.chars().count();
        if count != FACES * STICKERS {
            return Err(CubeError::IncorrectLength(count));
        }
        let mut cube = Cube { faces: [0; FACES] };
        for (index, ch) in s.chars().enumerate() {
            let color = ch
                .to_digit(10)
                .filter(|&d| d < COLORS as u32)
                .ok_or(CubeError::InvalidSticker { index, found: ch })?;
            cube.set(index / STICKERS, index % STICKERS, color as u8);
        }
        Ok(cube)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in 0..FACES {
            for spot in 0..STICKERS {
                write!(f, "{}", self.get(face, spot))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cube({})", self)
    }
}
