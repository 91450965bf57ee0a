//! Board tests - clearing and locking through the public API

use blockfall::core::{Board, Shape};
use blockfall::types::{Cell, Rgb, BOARD_COLS, BOARD_ROWS};

const RED: Rgb = Rgb::new(255, 0, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_COLS as i8 {
        board.set(x, y, Some(RED));
    }
}

fn assert_dimensions(board: &Board) {
    let grid = board.to_cells();
    assert_eq!(grid.len(), BOARD_ROWS as usize);
    assert!(grid.iter().all(|row| row.len() == BOARD_COLS as usize));
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_COLS);
    assert_eq!(board.height(), BOARD_ROWS);
    for y in 0..BOARD_ROWS as i8 {
        for x in 0..BOARD_COLS as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_COLS as i8, 0), None);
    assert_eq!(board.get(0, BOARD_ROWS as i8), None);
}

#[test]
fn test_clear_on_empty_board_is_noop() {
    let mut board = Board::new();
    assert!(board.clear_completed_rows().is_empty());
    assert_eq!(board, Board::new());
}

#[test]
fn test_clear_bottom_row_shifts_everything_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    board.set(3, 18, Some(BLUE));
    board.set(7, 10, Some(BLUE));

    let cleared = board.clear_completed_rows();
    assert_eq!(cleared.as_slice(), &[19]);
    assert_eq!(board.get(3, 19), Some(Some(BLUE)));
    assert_eq!(board.get(7, 11), Some(Some(BLUE)));
    assert_eq!(board.filled_count(), 2);
    assert!(board.row(0).iter().all(|c| c.is_none()));
    assert_dimensions(&board);
}

#[test]
fn test_clear_four_rows_leaves_four_empty_rows_on_top() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y);
    }
    board.set(0, 15, Some(BLUE));

    assert_eq!(board.clear_completed_rows().len(), 4);
    for y in 0..4 {
        assert!(board.row(y).iter().all(|c| c.is_none()));
    }
    assert_eq!(board.get(0, 19), Some(Some(BLUE)));
    assert_dimensions(&board);
}

#[test]
fn test_clear_is_idempotent() {
    let mut board = Board::new();
    fill_row(&mut board, 12);
    fill_row(&mut board, 19);
    board.set(4, 13, Some(BLUE));
    board.set(5, 5, Some(BLUE));

    board.clear_completed_rows();
    let once = board.clone();
    assert!(board.clear_completed_rows().is_empty());
    assert_eq!(board, once);
}

#[test]
fn test_non_full_rows_keep_relative_order() {
    let mut board = Board::new();
    let marker = |i: u8| Some(Rgb::new(i, i, i));
    // Interleave full rows with single-cell marker rows.
    for y in 10..20 {
        if y % 2 == 0 {
            fill_row(&mut board, y);
        } else {
            board.set(0, y, marker(y as u8));
        }
    }

    let cleared = board.clear_completed_rows();
    assert_eq!(cleared.len(), 5);

    let survivors: Vec<Cell> = (0..BOARD_ROWS as i8)
        .filter_map(|y| board.get(0, y).flatten().map(Some))
        .collect();
    assert_eq!(
        survivors,
        vec![marker(11), marker(13), marker(15), marker(17), marker(19)]
    );
    // Survivors are packed against the floor.
    assert_eq!(board.get(0, 15), Some(marker(11)));
    assert_eq!(board.get(0, 19), Some(marker(19)));
}

#[test]
fn test_lock_piece_writes_only_occupied_cells() {
    let mut board = Board::new();
    let t = Shape::parse(&["###", ".#."]);
    board.lock_piece(&t, 2, 5, BLUE);

    assert_eq!(board.filled_count(), 4);
    assert!(board.is_occupied(2, 5));
    assert!(board.is_occupied(3, 5));
    assert!(board.is_occupied(4, 5));
    assert!(board.is_occupied(3, 6));
    assert!(!board.is_occupied(2, 6));
    assert!(!board.is_occupied(4, 6));
}

#[test]
fn test_top_row_detection() {
    let mut board = Board::new();
    assert!(!board.is_top_row_occupied());
    board.set(9, 0, Some(RED));
    assert!(board.is_top_row_occupied());
}
