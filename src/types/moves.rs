use std::fmt;
use std::ops::BitOr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{PieceType, Square};

/// Flags describing the special effects of a move, packed one bit each into
/// a `u16`. Multiple flags may combine, e.g. `Capture | QueenPromo`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveFlags(u16);

impl MoveFlags {
    pub const PAWN_ADVANCE: MoveFlags = MoveFlags(1 << 0);
    pub const PAWN_DOUBLE: MoveFlags = MoveFlags(1 << 1);
    pub const CAPTURE: MoveFlags = MoveFlags(1 << 2);
    pub const EN_PASSANT: MoveFlags = MoveFlags(1 << 3);
    pub const CASTLING: MoveFlags = MoveFlags(1 << 4);
    pub const KNIGHT_PROMO: MoveFlags = MoveFlags(1 << 5);
    pub const BISHOP_PROMO: MoveFlags = MoveFlags(1 << 6);
    pub const ROOK_PROMO: MoveFlags = MoveFlags(1 << 7);
    pub const QUEEN_PROMO: MoveFlags = MoveFlags(1 << 8);

    const PROMO_FLAGS: u16 = Self::KNIGHT_PROMO.0 | Self::BISHOP_PROMO.0 | Self::ROOK_PROMO.0 | Self::QUEEN_PROMO.0;

    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        MoveFlags(0)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn intersects(self, other: MoveFlags) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn for_promotion(kind: PieceType) -> MoveFlags {
        match kind {
            PieceType::Knight => MoveFlags::KNIGHT_PROMO,
            PieceType::Bishop => MoveFlags::BISHOP_PROMO,
            PieceType::Rook => MoveFlags::ROOK_PROMO,
            PieceType::Queen => MoveFlags::QUEEN_PROMO,
            _ => MoveFlags::empty(),
        }
    }

    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.0 & Self::PROMO_FLAGS != 0
    }

    #[must_use]
    pub const fn promotion_piece(self) -> Option<PieceType> {
        if self.contains(MoveFlags::QUEEN_PROMO) {
            Some(PieceType::Queen)
        } else if self.contains(MoveFlags::ROOK_PROMO) {
            Some(PieceType::Rook)
        } else if self.contains(MoveFlags::BISHOP_PROMO) {
            Some(PieceType::Bishop)
        } else if self.contains(MoveFlags::KNIGHT_PROMO) {
            Some(PieceType::Knight)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.intersects(MoveFlags(MoveFlags::CAPTURE.0 | MoveFlags::EN_PASSANT.0))
    }
}

impl BitOr for MoveFlags {
    type Output = MoveFlags;

    #[inline]
    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | rhs.0)
    }
}

/// A single move: origin, destination, and the flags describing its effect.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub flags: MoveFlags,
}

impl Move {
    /// Out-of-band sentinel returned when a move cannot be resolved.
    pub const INVALID: Move = Move {
        from: Square::INVALID,
        to: Square::INVALID,
        flags: MoveFlags::empty(),
    };

    #[must_use]
    pub const fn new(from: Square, to: Square, flags: MoveFlags) -> Self {
        Move { from, to, flags }
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.from.is_valid() && self.to.is_valid()
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceType> {
        self.flags.promotion_piece()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.promotion_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sentinel_round_trips() {
        assert!(!Move::INVALID.is_valid());
        assert_eq!(Move::INVALID.to_string(), "0000");
    }

    #[test]
    fn display_includes_promotion_suffix() {
        let m = Move::new(
            Square::from_rank_file(6, 4),
            Square::from_rank_file(7, 4),
            MoveFlags::PAWN_ADVANCE | MoveFlags::QUEEN_PROMO,
        );
        assert_eq!(m.to_string(), "e7e8q");
    }

    #[test]
    fn combined_flags_report_capture_and_promotion() {
        let flags = MoveFlags::CAPTURE | MoveFlags::QUEEN_PROMO;
        assert!(flags.is_capture());
        assert!(flags.is_promotion());
        assert_eq!(flags.promotion_piece(), Some(PieceType::Queen));
    }
}
