//! Chronological position stack: `make_move`/`undo`/`redo`, null-move skip,
//! and the bit-exact move application that derives one `Position` from
//! another.
//!
//! Positions are never mutated after construction. Applying a move produces
//! a new `Position`; the history owns every position ever reached on the
//! current branch so `undo` needs no inverse computation — it just moves
//! the cursor back to a position already sitting in the vector.

use crate::bitboard::square_bit;
use crate::fen;
use crate::position::Position;
use crate::types::{CastlingRights, Color, Move, MoveFlags, Piece, PieceType, Square};
use crate::zobrist;

/// An append-only vector of `Position`s with a current-ply cursor. Index
/// `cursor` names the live position; entries after it are a redo buffer,
/// dropped the next time a move is made.
#[derive(Clone, Debug)]
pub struct GameHistory {
    positions: Vec<Position>,
    cursor: usize,
}

impl GameHistory {
    #[must_use]
    pub fn new(start: Position) -> Self {
        GameHistory {
            positions: vec![start],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn start_position() -> Self {
        GameHistory::new(Position::start_position())
    }

    /// The position at the current ply.
    #[must_use]
    pub fn current(&self) -> &Position {
        &self.positions[self.cursor]
    }

    /// Current-ply index; also the number of moves made since the root.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.cursor
    }

    /// Apply `mv` to the current position, truncating any redo tail.
    ///
    /// `mv` is expected to come from `current().legal_moves()`; applying an
    /// illegal move produces a position with undefined (but not unsafe)
    /// derived state, since `apply_move` trusts its input.
    pub fn make_move(&mut self, mv: Move) -> &Position {
        let next = apply_move(self.current(), mv);
        self.positions.truncate(self.cursor + 1);
        self.positions.push(next);
        self.cursor += 1;
        self.current()
    }

    /// Null move: flip side to move without moving a piece. Clears the
    /// en-passant target; leaves the half-move clock untouched.
    pub fn skip_turn(&mut self) -> &Position {
        let next = apply_null_move(self.current());
        self.positions.truncate(self.cursor + 1);
        self.positions.push(next);
        self.cursor += 1;
        self.current()
    }

    /// Move the cursor back one ply. No-op at ply 0; callers can observe
    /// `ply()` to detect it.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor forward one ply, into the redo tail. No-op if there
    /// is no redo tail (the last move wasn't undone, or was overwritten by
    /// a subsequent `make_move`).
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.positions.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

fn castling_bits_for_king(color: Color) -> CastlingRights {
    match color {
        Color::White => CastlingRights::WHITE_KINGSIDE | CastlingRights::WHITE_QUEENSIDE,
        Color::Black => CastlingRights::BLACK_KINGSIDE | CastlingRights::BLACK_QUEENSIDE,
    }
}

/// Which castling right is lost when the rook on `square` moves or is
/// captured, if `square` is one of the four starting rook squares.
fn castling_bit_for_rook_square(square: Square) -> Option<CastlingRights> {
    match square.index() {
        0 => Some(CastlingRights::WHITE_QUEENSIDE),
        7 => Some(CastlingRights::WHITE_KINGSIDE),
        56 => Some(CastlingRights::BLACK_QUEENSIDE),
        63 => Some(CastlingRights::BLACK_KINGSIDE),
        _ => None,
    }
}

/// The rook's `(from, to)` squares for a castle move already known to land
/// on `king_to`.
fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    match king_to.index() {
        6 => (Square::new(7), Square::new(5)),   // white kingside: h1 -> f1
        2 => (Square::new(0), Square::new(3)),   // white queenside: a1 -> d1
        62 => (Square::new(63), Square::new(61)), // black kingside: h8 -> f8
        58 => (Square::new(56), Square::new(59)), // black queenside: a8 -> d8
        _ => unreachable!("castling move destination must be g1/c1/g8/c8"),
    }
}

/// Derive the position that results from playing `mv` in `pos`, applying
/// every side effect bit-exactly: promotion, en-passant capture, the
/// castling rook jump, castling-rights updates (king/rook moves and rook
/// captures), the en-passant target, the half-move clock, the full-move
/// counter, and the incremental Zobrist hash. Recomputes the attackers
/// mask and legal move list for the result.
#[must_use]
pub(crate) fn apply_move(pos: &Position, mv: Move) -> Position {
    #[cfg(feature = "logging")]
    log::trace!("applying move {mv} at ply hash {:016x}", pos.hash());

    let us = pos.side_to_move();
    let them = us.opposite();
    let moving_piece = pos
        .piece_at(mv.from)
        .expect("a legal move's origin square holds the moving piece");

    let mut next = pos.clone();
    let mut hash = pos.hash();

    next.remove_piece(moving_piece, mv.from);
    hash ^= zobrist::piece_key(moving_piece, mv.from);

    let captured = if mv.flags.contains(MoveFlags::EN_PASSANT) {
        let captured_square = match us {
            Color::White => Square::new(mv.to.index() as u8 - 8),
            Color::Black => Square::new(mv.to.index() as u8 + 8),
        };
        Some((Piece::new(PieceType::Pawn, them), captured_square))
    } else if mv.flags.contains(MoveFlags::CAPTURE) {
        pos.piece_at(mv.to).map(|piece| (piece, mv.to))
    } else {
        None
    };
    if let Some((piece, square)) = captured {
        next.remove_piece(piece, square);
        hash ^= zobrist::piece_key(piece, square);
    }

    let placed_piece = match mv.promotion() {
        Some(promo_kind) => Piece::new(promo_kind, us),
        None => moving_piece,
    };
    next.set_piece(placed_piece, mv.to);
    hash ^= zobrist::piece_key(placed_piece, mv.to);

    if mv.flags.contains(MoveFlags::CASTLING) {
        let rook = Piece::new(PieceType::Rook, us);
        let (rook_from, rook_to) = castling_rook_squares(mv.to);
        next.remove_piece(rook, rook_from);
        hash ^= zobrist::piece_key(rook, rook_from);
        next.set_piece(rook, rook_to);
        hash ^= zobrist::piece_key(rook, rook_to);
    }

    let mut lost_rights = CastlingRights::empty();
    if moving_piece.kind == PieceType::King {
        lost_rights |= castling_bits_for_king(us);
    }
    if let Some(bit) = castling_bit_for_rook_square(mv.from) {
        lost_rights |= bit;
    }
    if let Some((piece, square)) = captured {
        if piece.kind == PieceType::Rook {
            if let Some(bit) = castling_bit_for_rook_square(square) {
                lost_rights |= bit;
            }
        }
    }
    let new_rights = next.castling_rights & !lost_rights;
    hash ^= zobrist::castling_rights_key(pos.castling_rights);
    hash ^= zobrist::castling_rights_key(new_rights);
    next.castling_rights = new_rights;

    if let Some(ep) = pos.en_passant_target() {
        hash ^= zobrist::en_passant_file_key(ep.file());
    }
    let new_ep = if mv.flags.contains(MoveFlags::PAWN_DOUBLE) {
        let rank = (mv.from.rank() + mv.to.rank()) / 2;
        Square::from_rank_file(rank, mv.from.file())
    } else {
        Square::INVALID
    };
    next.en_passant_target = new_ep;
    if new_ep.is_valid() {
        hash ^= zobrist::en_passant_file_key(new_ep.file());
    }

    next.halfmove_clock = if moving_piece.kind == PieceType::Pawn || captured.is_some() {
        0
    } else {
        pos.halfmove_clock + 1
    };
    next.fullmove_number = pos.fullmove_number + if us == Color::Black { 1 } else { 0 };

    hash ^= zobrist::side_to_move_key();
    next.side_to_move = them;
    next.hash = hash;

    next.refresh_derived();
    next
}

/// Derive the null-move position: side to move flips, the en-passant target
/// clears, the half-move clock is unchanged.
#[must_use]
pub(crate) fn apply_null_move(pos: &Position) -> Position {
    let mut next = pos.clone();
    let mut hash = pos.hash();

    if let Some(ep) = pos.en_passant_target() {
        hash ^= zobrist::en_passant_file_key(ep.file());
    }
    next.en_passant_target = Square::INVALID;

    hash ^= zobrist::side_to_move_key();
    next.side_to_move = pos.side_to_move().opposite();
    next.hash = hash;

    next.refresh_derived();
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_move_then_undo_restores_equal_position() {
        let mut history = GameHistory::start_position();
        let before = history.current().clone();
        let mv = before.create_move("e2e4");
        assert!(mv.is_valid());
        history.make_move(mv);
        assert_eq!(history.ply(), 1);
        history.undo();
        assert_eq!(history.ply(), 0);
        assert_eq!(history.current(), &before);
        assert_eq!(history.current().hash(), before.hash());
    }

    #[test]
    fn redo_replays_the_undone_move() {
        let mut history = GameHistory::start_position();
        let mv = history.current().create_move("e2e4");
        history.make_move(mv);
        let after = history.current().clone();
        history.undo();
        history.redo();
        assert_eq!(history.current(), &after);
    }

    #[test]
    fn make_move_after_undo_truncates_redo_tail() {
        let mut history = GameHistory::start_position();
        let e4 = history.current().create_move("e2e4");
        history.make_move(e4);
        history.undo();
        let d4 = history.current().create_move("d2d4");
        history.make_move(d4);
        assert!(!history.redo());
    }

    #[test]
    fn undo_at_root_is_a_no_op() {
        let mut history = GameHistory::start_position();
        assert!(!history.undo());
        assert_eq!(history.ply(), 0);
    }

    #[test]
    fn incremental_hash_matches_from_scratch_recomputation() {
        let mut history = GameHistory::start_position();
        for notation in ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"] {
            let mv = history.current().create_move(notation);
            assert!(mv.is_valid(), "{notation} should be legal");
            history.make_move(mv);
            let pos = history.current();
            assert_eq!(pos.hash(), fen::hash_from_scratch(pos));
        }
    }

    #[test]
    fn castling_clears_both_rights_for_that_side() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mv = pos.create_move("e1g1");
        assert!(mv.is_valid());
        let after = apply_move(&pos, mv);
        assert!(!after.castling_rights().contains(CastlingRights::WHITE_KINGSIDE));
        assert!(!after.castling_rights().contains(CastlingRights::WHITE_QUEENSIDE));
        assert!(after.castling_rights().contains(CastlingRights::BLACK_KINGSIDE));
        assert_eq!(after.piece_at(Square::new(5)), Some(Piece::new(PieceType::Rook, Color::White)));
    }

    #[test]
    fn rook_capture_on_home_square_clears_that_right() {
        let pos = Position::from_fen("4k2r/8/8/8/8/8/8/R3K2N w KQk - 0 1").unwrap();
        let mv = Move::new(Square::new(7), Square::new(63), MoveFlags::CAPTURE);
        let after = apply_move(&pos, mv);
        assert!(!after.castling_rights().contains(CastlingRights::BLACK_KINGSIDE));
    }

    #[test]
    fn double_push_sets_en_passant_file() {
        let pos = Position::start_position();
        let mv = pos.create_move("e2e4");
        let after = apply_move(&pos, mv);
        assert_eq!(after.en_passant_target(), Some(Square::from_rank_file(2, 4)));
    }

    #[test]
    fn skip_turn_flips_side_and_clears_en_passant() {
        let pos = Position::start_position();
        let after_push = apply_move(&pos, pos.create_move("e2e4"));
        assert!(after_push.en_passant_target().is_some());
        let after_null = apply_null_move(&after_push);
        assert_eq!(after_null.side_to_move(), Color::White);
        assert_eq!(after_null.en_passant_target(), None);
        assert_eq!(after_null.halfmove_clock(), after_push.halfmove_clock());
    }
}
