//! Move-string parser for both label conventions
//!
//! Official notation is a face letter optionally followed by `'` (counter
//! clockwise) or `2` (double turn): `R U' F2`. Layered notation is a slide
//! letter followed by its depth: `R1U0L0C1L0`. Whitespace between moves is
//! accepted but never required.

use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

use crate::cube::moves::MAX_LAYER;
use crate::cube::{Cube, Face, Move, MoveSet, Slide, Turn};

/// Error raised while reading a move string, with the byte offset of the
/// offending character
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("unknown move '{found}' at position {position} for the {move_set} move set")]
    UnknownMove {
        position: usize,
        found: char,
        move_set: MoveSet,
    },
    #[error("move at position {position} needs a layer between 0 and {max}, found {found}")]
    InvalidLayer {
        position: usize,
        found: String,
        max: u8,
    },
}

type Chars<'a> = Peekable<CharIndices<'a>>;

/// Parse a move string in the given convention
pub fn parse_moves(input: &str, move_set: MoveSet) -> Result<Vec<Move>, NotationError> {
    let mut chars = input.char_indices().peekable();
    let mut moves = Vec::new();

    while let Some((position, ch)) = chars.next() {
        if ch.is_whitespace() || ch == ',' {
            continue;
        }
        let mv = match move_set {
            MoveSet::Official => parse_face_turn(position, ch, &mut chars)?,
            MoveSet::Layered => parse_slide(position, ch, &mut chars)?,
        };
        moves.push(mv);
    }

    Ok(moves)
}

fn parse_face_turn(
    position: usize,
    ch: char,
    chars: &mut Chars<'_>,
) -> Result<Move, NotationError> {
    let face = Face::from_letter(ch).ok_or(NotationError::UnknownMove {
        position,
        found: ch,
        move_set: MoveSet::Official,
    })?;
    let turn = match chars.peek() {
        Some((_, '\'')) => {
            chars.next();
            Turn::CounterClockwise
        }
        Some((_, '2')) => {
            chars.next();
            Turn::Double
        }
        _ => Turn::Clockwise,
    };
    Ok(Move::Face(face, turn))
}

fn parse_slide(
    position: usize,
    ch: char,
    chars: &mut Chars<'_>,
) -> Result<Move, NotationError> {
    let slide = Slide::from_letter(ch).ok_or(NotationError::UnknownMove {
        position,
        found: ch,
        move_set: MoveSet::Layered,
    })?;
    let depth = match chars.next() {
        Some((_, digit)) => digit
            .to_digit(10)
            .filter(|&d| d <= MAX_LAYER as u32)
            .ok_or_else(|| NotationError::InvalidLayer {
                position,
                found: format!("'{}'", digit),
                max: MAX_LAYER,
            })?,
        None => {
            return Err(NotationError::InvalidLayer {
                position,
                found: "end of input".to_string(),
                max: MAX_LAYER,
            });
        }
    };
    Ok(Move::Slide(slide, depth as u8))
}

/// Parse `input` and apply every move to `cube`, returning the moves applied.
///
/// The cube is left untouched if parsing fails.
pub fn replay(
    cube: &mut Cube,
    input: &str,
    move_set: MoveSet,
) -> Result<Vec<Move>, NotationError> {
    let moves = parse_moves(input, move_set)?;
    cube.apply_all(&moves);
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::moves::format_sequence;

    #[test]
    fn test_parse_official() {
        let moves = parse_moves("R U' F2 B", MoveSet::Official).unwrap();
        assert_eq!(
            moves,
            vec![
                Move::Face(Face::Right, Turn::Clockwise),
                Move::Face(Face::Up, Turn::CounterClockwise),
                Move::Face(Face::Front, Turn::Double),
                Move::Face(Face::Back, Turn::Clockwise),
            ]
        );

        // Spaces are optional
        assert_eq!(parse_moves("RU'F2B", MoveSet::Official).unwrap(), moves);
    }

    #[test]
    fn test_parse_layered() {
        let moves = parse_moves("R1U0L0C1L0", MoveSet::Layered).unwrap();
        assert_eq!(moves.len(), 5);
        assert_eq!(moves[0], Move::Slide(Slide::Right, 1));
        assert_eq!(moves[3], Move::Slide(Slide::Clockwise, 1));
        assert_eq!(format_sequence(&moves, MoveSet::Layered), "R1U0L0C1L0");

        assert_eq!(
            parse_moves("u1 c0 T1", MoveSet::Layered).unwrap(),
            vec![
                Move::Slide(Slide::DoubleUp, 1),
                Move::Slide(Slide::DoubleClockwise, 0),
                Move::Slide(Slide::CounterClockwise, 1),
            ]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_moves("", MoveSet::Official).unwrap().is_empty());
        assert!(parse_moves("   ", MoveSet::Layered).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_move() {
        assert_eq!(
            parse_moves("R X", MoveSet::Official),
            Err(NotationError::UnknownMove {
                position: 2,
                found: 'X',
                move_set: MoveSet::Official,
            })
        );
        // Official letters that are not slides
        assert!(matches!(
            parse_moves("F0", MoveSet::Layered),
            Err(NotationError::UnknownMove { found: 'F', .. })
        ));
    }

    #[test]
    fn test_invalid_layer() {
        assert!(matches!(
            parse_moves("R2", MoveSet::Layered),
            Err(NotationError::InvalidLayer { position: 0, .. })
        ));
        assert!(matches!(
            parse_moves("R1U", MoveSet::Layered),
            Err(NotationError::InvalidLayer { position: 2, .. })
        ));
    }

    #[test]
    fn test_replay_and_undo() {
        for (input, set) in [
            ("R U L F L", MoveSet::Official),
            ("R1U0L0C1L0", MoveSet::Layered),
        ] {
            let mut cube = Cube::solved();
            let moves = replay(&mut cube, input, set).unwrap();
            assert!(!cube.is_solved());

            let undo: Vec<Move> = moves.iter().rev().map(|mv| mv.inverse()).collect();
            cube.apply_all(&undo);
            assert!(cube.is_solved());
        }
    }

    #[test]
    fn test_replay_failure_leaves_cube() {
        let mut cube = Cube::solved();
        assert!(replay(&mut cube, "R U Q", MoveSet::Official).is_err());
        assert!(cube.is_solved());
    }
}
