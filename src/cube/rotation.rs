//! Sticker permutations that make up every move
//!
//! Faces 0..=3 form the horizontal ring (front, left, back, right), while
//! columns run through front, up, back and down. The back face is viewed
//! from behind, so columns crossing it are mirrored and reversed.

use super::{Cube, STICKERS};

type Line = [u8; 3];

/// Sticker sources for a clockwise face rotation: `new[i] = old[CW[i]]`
const CLOCKWISE: [usize; STICKERS] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
const COUNTER_CLOCKWISE: [usize; STICKERS] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

const FRONT: usize = 0;
const LEFT: usize = 1;
const BACK: usize = 2;
const RIGHT: usize = 3;
const UP: usize = 4;
const DOWN: usize = 5;

fn reversed(mut line: Line) -> Line {
    line.swap(0, 2);
    line
}

impl Cube {
    fn row(&self, face: usize, row: usize) -> Line {
        [
            self.get(face, row * 3),
            self.get(face, row * 3 + 1),
            self.get(face, row * 3 + 2),
        ]
    }

    fn set_row(&mut self, face: usize, row: usize, line: Line) {
        for (i, color) in line.into_iter().enumerate() {
            self.set(face, row * 3 + i, color);
        }
    }

    fn column(&self, face: usize, column: usize) -> Line {
        [
            self.get(face, column),
            self.get(face, 3 + column),
            self.get(face, 6 + column),
        ]
    }

    fn set_column(&mut self, face: usize, column: usize, line: Line) {
        for (i, color) in line.into_iter().enumerate() {
            self.set(face, 3 * i + column, color);
        }
    }

    fn permute_face(&mut self, face: usize, sources: &[usize; STICKERS]) {
        let old: [u8; STICKERS] = std::array::from_fn(|spot| self.get(face, spot));
        for (spot, &from) in sources.iter().enumerate() {
            self.set(face, spot, old[from]);
        }
    }

    pub(super) fn rotate_face_clockwise(&mut self, face: usize) {
        self.permute_face(face, &CLOCKWISE);
    }

    pub(super) fn rotate_face_counter_clockwise(&mut self, face: usize) {
        self.permute_face(face, &COUNTER_CLOCKWISE);
    }

    /// Shift one row of the horizontal ring one face to the right
    pub(super) fn rotate_row_right(&mut self, row: usize) {
        let last = self.row(RIGHT, row);
        for face in (FRONT + 1..=RIGHT).rev() {
            let moved = self.row(face - 1, row);
            self.set_row(face, row, moved);
        }
        self.set_row(FRONT, row, last);
    }

    pub(super) fn rotate_row_left(&mut self, row: usize) {
        let first = self.row(FRONT, row);
        for face in FRONT..RIGHT {
            let moved = self.row(face + 1, row);
            self.set_row(face, row, moved);
        }
        self.set_row(RIGHT, row, first);
    }

    /// Roll one column of front/up/back/down upwards
    pub(super) fn rotate_column_up(&mut self, column: usize) {
        let mirror = 2 - column;
        let last = self.column(FRONT, column);
        let from_down = self.column(DOWN, column);
        self.set_column(FRONT, column, from_down);
        let from_back = reversed(self.column(BACK, mirror));
        self.set_column(DOWN, column, from_back);
        let from_up = reversed(self.column(UP, column));
        self.set_column(BACK, mirror, from_up);
        self.set_column(UP, column, last);
    }

    pub(super) fn rotate_column_down(&mut self, column: usize) {
        let mirror = 2 - column;
        let last = self.column(DOWN, column);
        let from_front = self.column(FRONT, column);
        self.set_column(DOWN, column, from_front);
        let from_up = self.column(UP, column);
        self.set_column(FRONT, column, from_up);
        let from_back = reversed(self.column(BACK, mirror));
        self.set_column(UP, column, from_back);
        self.set_column(BACK, mirror, reversed(last));
    }

    /// Turn the ring around the front-back axis at `level` (0 = front layer)
    pub(super) fn rotate_level_clockwise(&mut self, level: usize) {
        let mirror = 2 - level;
        let last = self.column(LEFT, mirror);
        let from_down = self.row(DOWN, level);
        self.set_column(LEFT, mirror, from_down);
        let from_right = reversed(self.column(RIGHT, level));
        self.set_row(DOWN, level, from_right);
        let from_up = self.row(UP, mirror);
        self.set_column(RIGHT, level, from_up);
        self.set_row(UP, mirror, reversed(last));
    }

    pub(super) fn rotate_level_counter_clockwise(&mut self, level: usize) {
        let mirror = 2 - level;
        let last = self.column(LEFT, mirror);
        let from_up = reversed(self.row(UP, mirror));
        self.set_column(LEFT, mirror, from_up);
        let from_right = self.column(RIGHT, level);
        self.set_row(UP, mirror, from_right);
        let from_down = reversed(self.row(DOWN, level));
        self.set_column(RIGHT, level, from_down);
        self.set_row(DOWN, level, last);
    }
}
