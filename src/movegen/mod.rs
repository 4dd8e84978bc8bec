//! Pseudo-legal move generation per piece type, plus the attackers mask and
//! the post-move legality filter that turns pseudo-legal moves into legal
//! ones.

mod castling;
mod kings;
mod knights;
mod pawns;
mod sliders;

use crate::bitboard::{bishop_attacks, iter_squares, rook_attacks, square_bit, Bitboard};
use crate::position::Position;
use crate::types::{Color, Move, MoveFlags, Piece, PieceType, Square};

/// Bitboards for one side's six piece types, indexed by [`PieceType::index`].
type SideBitboards = [Bitboard; 6];

fn side_bitboards(pos: &Position, color: Color) -> SideBitboards {
    let mut bb = [0u64; 6];
    for kind in PieceType::ALL {
        bb[kind.index()] = pos.piece_bitboard(Piece::new(kind, color));
    }
    bb
}

/// Every square `color` attacks given the blocker set `occupied`. Does not
/// know about pins or check; this is a raw attack union.
fn attacks_from(bb: &SideBitboards, color: Color, occupied: Bitboard) -> Bitboard {
    let mut attacks = 0u64;
    for sq in iter_squares(bb[PieceType::Pawn.index()]) {
        attacks |= crate::bitboard::PAWN_CAPTURE[color.index() * 64 + sq.index()];
    }
    for sq in iter_squares(bb[PieceType::Knight.index()]) {
        attacks |= crate::bitboard::KNIGHT_MOVES[sq.index()];
    }
    for sq in iter_squares(bb[PieceType::King.index()]) {
        attacks |= crate::bitboard::KING_MOVES[sq.index()];
    }
    let diagonal = bb[PieceType::Bishop.index()] | bb[PieceType::Queen.index()];
    for sq in iter_squares(diagonal) {
        attacks |= bishop_attacks(sq, occupied);
    }
    let straight = bb[PieceType::Rook.index()] | bb[PieceType::Queen.index()];
    for sq in iter_squares(straight) {
        attacks |= rook_attacks(sq, occupied);
    }
    attacks
}

/// Squares attacked by `attacker_color`, with the defending king excluded
/// from the blocker set so that sliding checks project through it — a king
/// may never step to a square that's only safe because it is itself
/// blocking the ray.
pub(crate) fn attackers_mask(pos: &Position, attacker_color: Color) -> Bitboard {
    let bb = side_bitboards(pos, attacker_color);
    let defending_king = pos.piece_bitboard(Piece::new(PieceType::King, attacker_color.opposite()));
    let blockers = pos.occupied_all() & !defending_king;
    attacks_from(&bb, attacker_color, blockers)
}

/// Whether `mv`, played from `pos`, leaves the mover's own king attacked.
///
/// Covers all four cases from the legality filter uniformly: the attacker's
/// piece bitboards have the captured piece's square cleared (a no-op for
/// non-captures), blockers reflect `from` vacated and `to` occupied, and the
/// king square tested is `mv.to` when the king itself is the piece moving.
/// This also resolves double check correctly without any special-casing: a
/// move that fails to deal with both checkers still leaves at least one of
/// them attacking the recomputed king square. Castling is checked for safety
/// at generation time (origin, transit, and destination squares must all be
/// unattacked) and is unconditionally legal here.
fn leaves_king_safe(pos: &Position, mv: &Move) -> bool {
    if mv.flags.contains(MoveFlags::CASTLING) {
        return true;
    }

    let us = pos.side_to_move();
    let them = us.opposite();

    let captured_square = if mv.flags.contains(MoveFlags::EN_PASSANT) {
        Some(match us {
            Color::White => Square::new(mv.to.index() as u8 - 8),
            Color::Black => Square::new(mv.to.index() as u8 + 8),
        })
    } else if mv.flags.contains(MoveFlags::CAPTURE) {
        Some(mv.to)
    } else {
        None
    };

    let mut attacker_bb = side_bitboards(pos, them);
    if let Some(sq) = captured_square {
        let bit = square_bit(sq);
        for bb in &mut attacker_bb {
            *bb &= !bit;
        }
    }

    let mut blockers = pos.occupied_all();
    blockers &= !square_bit(mv.from);
    blockers |= square_bit(mv.to);
    if let Some(sq) = captured_square {
        blockers &= !square_bit(sq);
    }

    let attacks = attacks_from(&attacker_bb, them, blockers);

    let king_square = if mv.from == pos.king_square(us) {
        mv.to
    } else {
        pos.king_square(us)
    };
    attacks & square_bit(king_square) == 0
}

/// Every fully legal move from `pos`.
pub(crate) fn generate_legal_moves(pos: &Position) -> Vec<Move> {
    let mut pseudo = Vec::new();
    pawns::generate(pos, &mut pseudo);
    knights::generate(pos, &mut pseudo);
    sliders::generate(pos, &mut pseudo);
    kings::generate(pos, &mut pseudo);
    pseudo.retain(|mv| leaves_king_safe(pos, mv));
    pseudo
}
