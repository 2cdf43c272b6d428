//! Team, piece type, and piece value types.

use std::fmt;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::White => 0,
            Team::Black => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "WHITE"),
            Team::Black => write!(f, "BLACK"),
        }
    }
}

/// The six piece kinds. Team is carried separately by [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::Pawn,
    ];

    /// Upper-case name, as used by the textual board and `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            PieceType::King => "KING",
            PieceType::Queen => "QUEEN",
            PieceType::Bishop => "BISHOP",
            PieceType::Knight => "KNIGHT",
            PieceType::Rook => "ROOK",
            PieceType::Pawn => "PAWN",
        }
    }

    /// Board-text letter. The king is `G` so it does not collide with the
    /// knight, which keeps the first letter of its name.
    pub const fn short_code(self) -> char {
        match self {
            PieceType::King => 'G',
            PieceType::Queen => 'Q',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'K',
            PieceType::Rook => 'R',
            PieceType::Pawn => 'P',
        }
    }

    pub fn from_short_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'G' => Some(PieceType::King),
            'Q' => Some(PieceType::Queen),
            'B' => Some(PieceType::Bishop),
            'K' => Some(PieceType::Knight),
            'R' => Some(PieceType::Rook),
            'P' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A (team, type) pair. Two pieces with the same team and type are
/// interchangeable; a piece never knows where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub team: Team,
    pub piece_type: PieceType,
}

impl Piece {
    #[inline]
    pub const fn new(team: Team, piece_type: PieceType) -> Self {
        Self { team, piece_type }
    }

    #[inline]
    pub fn is_enemy(&self, other: &Piece) -> bool {
        self.team != other.team
    }

    /// Upper-case for White, lower-case for Black.
    pub fn short_code(&self) -> char {
        let code = self.piece_type.short_code();
        match self.team {
            Team::White => code,
            Team::Black => code.to_ascii_lowercase(),
        }
    }

    pub fn from_short_code(code: char) -> Option<Self> {
        let team = if code.is_ascii_uppercase() {
            Team::White
        } else if code.is_ascii_lowercase() {
            Team::Black
        } else {
            return None;
        };
        PieceType::from_short_code(code).map(|piece_type| Piece::new(team, piece_type))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.team, self.piece_type)
    }
}
