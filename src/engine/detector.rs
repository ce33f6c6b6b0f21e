use std::collections::HashSet;

use crate::engine::models::{BingoLine, BingoSquare, LineKind};
use crate::engine::board::{BOARD_DIM, BOARD_SIZE};

/// Scan `board` for the first fully-marked line.
///
/// Priority is fixed: rows 0-4 top to bottom, then columns 0-4 left to
/// right, then the main diagonal (index 0), then the anti-diagonal
/// (index 1). A line is complete when all five of its cells are marked; the
/// free space counts as always marked. Returns `None` for any board that is
/// not exactly 25 cells (no game active).
///
/// Pure: retains nothing between calls. The caller keeps the first line it
/// ever receives for the session.
pub fn find_winning_line(board: &[BingoSquare]) -> Option<BingoLine> {
    if board.len() != BOARD_SIZE {
        return None;
    }

    let dim = BOARD_DIM as u32;
    let complete = |ids: &[u32]| ids.iter().all(|&id| board[id as usize].is_marked);

    for row in 0..dim {
        let ids: Vec<u32> = (0..dim).map(|col| row * dim + col).collect();
        if complete(&ids) {
            return Some(BingoLine { kind: LineKind::Row, index: row, squares: ids });
        }
    }

    for col in 0..dim {
        let ids: Vec<u32> = (0..dim).map(|row| row * dim + col).collect();
        if complete(&ids) {
            return Some(BingoLine { kind: LineKind::Column, index: col, squares: ids });
        }
    }

    let main: Vec<u32> = (0..dim).map(|i| i * dim + i).collect();
    if complete(&main) {
        return Some(BingoLine { kind: LineKind::Diagonal, index: 0, squares: main });
    }

    let anti: Vec<u32> = (0..dim).map(|i| i * dim + (dim - 1 - i)).collect();
    if complete(&anti) {
        return Some(BingoLine { kind: LineKind::Diagonal, index: 1, squares: anti });
    }

    None
}

/// The square ids of the retained line, for highlighting. Empty when no line
/// is retained.
pub fn winning_square_ids(line: Option<&BingoLine>) -> HashSet<u32> {
    match line {
        Some(line) => line.squares.iter().copied().collect(),
        None => HashSet::new(),
    }
}
