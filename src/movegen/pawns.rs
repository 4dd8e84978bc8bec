use crate::bitboard::{iter_squares, square_bit, PAWN_ADVANCE, PAWN_CAPTURE};
use crate::position::Position;
use crate::types::{Color, Move, MoveFlags, Piece, PieceType, Square};

pub(super) fn generate(pos: &Position, out: &mut Vec<Move>) {
    let us = pos.side_to_move();
    let pawns = pos.piece_bitboard(Piece::new(PieceType::Pawn, us));
    let occupied = pos.occupied_all();
    let empty = !occupied;
    let enemy = pos.color_bitboard(us.opposite());
    let promotion_rank = match us {
        Color::White => 7,
        Color::Black => 0,
    };
    let double_push_rank = match us {
        Color::White => 1,
        Color::Black => 6,
    };

    for from in iter_squares(pawns) {
        let single_push = PAWN_ADVANCE[us.index() * 64 + from.index()] & empty;
        for to in iter_squares(single_push) {
            emit(from, to, MoveFlags::PAWN_ADVANCE, to.rank() == promotion_rank, out);
        }

        if from.rank() == double_push_rank && single_push != 0 {
            let double_rank = if us == Color::White { from.rank() + 2 } else { from.rank() - 2 };
            let to = Square::from_rank_file(double_rank, from.file());
            if empty & square_bit(to) != 0 {
                out.push(Move::new(from, to, MoveFlags::PAWN_ADVANCE | MoveFlags::PAWN_DOUBLE));
            }
        }

        let captures = PAWN_CAPTURE[us.index() * 64 + from.index()] & enemy;
        for to in iter_squares(captures) {
            emit(from, to, MoveFlags::CAPTURE, to.rank() == promotion_rank, out);
        }

        if let Some(ep) = pos.en_passant_target() {
            if PAWN_CAPTURE[us.index() * 64 + from.index()] & square_bit(ep) != 0 {
                out.push(Move::new(from, ep, MoveFlags::CAPTURE | MoveFlags::EN_PASSANT));
            }
        }
    }
}

fn emit(from: Square, to: Square, base: MoveFlags, is_promotion: bool, out: &mut Vec<Move>) {
    if is_promotion {
        for kind in PieceType::PROMOTION_CHOICES {
            out.push(Move::new(from, to, base | MoveFlags::for_promotion(kind)));
        }
    } else {
        out.push(Move::new(from, to, base));
    }
}
