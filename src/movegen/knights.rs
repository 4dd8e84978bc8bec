use crate::bitboard::{iter_squares, square_bit, KNIGHT_MOVES};
use crate::position::Position;
use crate::types::{Move, MoveFlags, Piece, PieceType};

pub(super) fn generate(pos: &Position, out: &mut Vec<Move>) {
    let us = pos.side_to_move();
    let own = pos.color_bitboard(us);
    let enemy = pos.color_bitboard(us.opposite());

    for from in iter_squares(pos.piece_bitboard(Piece::new(PieceType::Knight, us))) {
        let targets = KNIGHT_MOVES[from.index()] & !own;
        for to in iter_squares(targets) {
            let flags = if enemy & square_bit(to) != 0 {
                MoveFlags::CAPTURE
            } else {
                MoveFlags::empty()
            };
            out.push(Move::new(from, to, flags));
        }
    }
}
