use crate::bitboard::{bishop_attacks, iter_squares, queen_attacks, rook_attacks, square_bit, Bitboard};
use crate::position::Position;
use crate::types::{Move, MoveFlags, Piece, PieceType, Square};

type AttackFn = fn(Square, Bitboard) -> Bitboard;

const SLIDERS: [(PieceType, AttackFn); 3] = [
    (PieceType::Bishop, bishop_attacks),
    (PieceType::Rook, rook_attacks),
    (PieceType::Queen, queen_attacks),
];

pub(super) fn generate(pos: &Position, out: &mut Vec<Move>) {
    let us = pos.side_to_move();
    let own = pos.color_bitboard(us);
    let enemy = pos.color_bitboard(us.opposite());
    let occupied = pos.occupied_all();

    for (kind, attacks_fn) in SLIDERS {
        for from in iter_squares(pos.piece_bitboard(Piece::new(kind, us))) {
            let targets = attacks_fn(from, occupied) & !own;
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
}
