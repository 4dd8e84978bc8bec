//! Zobrist hashing for chess positions.
//!
//! Provides an incrementally-updatable 64-bit position hash for the
//! transposition table, formed by XOR-ing random constants selected by
//! piece placement, side to move, castling rights, and en-passant file.

use std::sync::LazyLock;

use rand::prelude::*;

use crate::types::{CastlingRights, Color, Piece, Square};

struct ZobristKeys {
    /// `piece_keys[piece.index()][square.index()]`
    piece_keys: [[u64; 64]; 12],
    black_to_move: u64,
    /// one key per castling-right bit, indexed by its bit position (0..4)
    castling_keys: [u64; 4],
    /// one key per en-passant file (0..8)
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed: the transposition table and incremental-hash tests
        // depend on hashes being reproducible across runs.
        let mut rng = StdRng::seed_from_u64(1_234_567_890u64);

        let mut piece_keys = [[0u64; 64]; 12];
        for piece in &mut piece_keys {
            for key in piece.iter_mut() {
                *key = rng.gen();
            }
        }

        let black_to_move = rng.gen();

        let mut castling_keys = [0u64; 4];
        for key in &mut castling_keys {
            *key = rng.gen();
        }

        let mut en_passant_keys = [0u64; 8];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move,
            castling_keys,
            en_passant_keys,
        }
    }
}

static ZOBRIST: LazyLock<ZobristKeys> = LazyLock::new(ZobristKeys::new);

#[inline]
#[must_use]
pub fn piece_key(piece: Piece, square: Square) -> u64 {
    ZOBRIST.piece_keys[piece.index()][square.index()]
}

#[inline]
#[must_use]
pub fn side_to_move_key() -> u64 {
    ZOBRIST.black_to_move
}

#[inline]
#[must_use]
pub fn castling_key(bit: u32) -> u64 {
    ZOBRIST.castling_keys[bit as usize]
}

/// XOR of the keys for every set bit in `rights`.
#[must_use]
pub fn castling_rights_key(rights: CastlingRights) -> u64 {
    let mut hash = 0u64;
    let mut bits = rights.bits();
    while bits != 0 {
        let bit = bits.trailing_zeros();
        hash ^= castling_key(bit);
        bits &= bits - 1;
    }
    hash
}

#[inline]
#[must_use]
pub fn en_passant_file_key(file: usize) -> u64 {
    ZOBRIST.en_passant_keys[file]
}

/// Side-to-move component: zero for White, [`side_to_move_key`] for Black.
#[must_use]
pub fn side_key(color: Color) -> u64 {
    match color {
        Color::White => 0,
        Color::Black => side_to_move_key(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceType;

    #[test]
    fn piece_keys_are_distinct_per_square() {
        let piece = Piece::new(PieceType::Knight, Color::White);
        let a = piece_key(piece, Square::new(3));
        let b = piece_key(piece, Square::new(4));
        assert_ne!(a, b);
    }

    #[test]
    fn keys_are_deterministic_across_calls() {
        let piece = Piece::new(PieceType::Queen, Color::Black);
        let sq = Square::new(40);
        assert_eq!(piece_key(piece, sq), piece_key(piece, sq));
    }

    #[test]
    fn castling_rights_key_is_xor_of_individual_bits() {
        let combo = CastlingRights::WHITE_KINGSIDE | CastlingRights::BLACK_QUEENSIDE;
        let expected = castling_key(0) ^ castling_key(3);
        assert_eq!(castling_rights_key(combo), expected);
    }
}
