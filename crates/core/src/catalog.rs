//! Piece catalog - template shapes and their colors
//!
//! Templates are const data. Spawning copies a template into the active piece;
//! rotation always produces a fresh [`Shape`], so the templates never change.

use crate::shape::Shape;
use crate::types::{PieceKind, Rgb};

/// Number of catalog entries
pub const CATALOG_SIZE: usize = 8;

const I: Shape = Shape::parse(&["####"]);

const T: Shape = Shape::parse(&[
    "###", //
    ".#.",
]);

const L: Shape = Shape::parse(&[
    "###", //
    "#..",
]);

const J: Shape = Shape::parse(&[
    "###", //
    "..#",
]);

const O: Shape = Shape::parse(&[
    "##", //
    "##",
]);

const S: Shape = Shape::parse(&[
    ".##", //
    "##.",
]);

const Z: Shape = Shape::parse(&[
    "##.", //
    ".##",
]);

const FORK: Shape = Shape::parse(&[
    ".#.", //
    ".#.",
    ".#.",
    ".#.",
    "#.#",
]);

/// Block colors, indexed like [`PieceKind::ALL`].
///
/// The last two entries are both white.
pub const BLOCK_COLORS: [Rgb; CATALOG_SIZE] = [
    Rgb::new(0xFF, 0x00, 0x00),
    Rgb::new(0x00, 0xFF, 0x00),
    Rgb::new(0x00, 0x00, 0xFF),
    Rgb::new(0xFF, 0xFF, 0x00),
    Rgb::new(0xFF, 0x00, 0xFF),
    Rgb::new(0x00, 0xFF, 0xFF),
    Rgb::new(0xFF, 0xFF, 0xFF),
    Rgb::new(0xFF, 0xFF, 0xFF),
];

/// Get the spawn-orientation template for a piece kind
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I,
        PieceKind::T => T,
        PieceKind::L => L,
        PieceKind::J => J,
        PieceKind::O => O,
        PieceKind::S => S,
        PieceKind::Z => Z,
        PieceKind::Fork => FORK,
    }
}

/// Get the color assigned to a piece kind
pub fn color(kind: PieceKind) -> Rgb {
    BLOCK_COLORS[kind.index()]
}

/// Look up a catalog entry by index
pub fn kind_at(index: usize) -> Option<PieceKind> {
    PieceKind::ALL.get(index).copied()
}
