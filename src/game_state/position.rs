//! Board coordinates and compass directions.
//!
//! Rows run 1..=8 from White's back rank upwards; columns run 1..=8 from the
//! a-file to the h-file. A `Position` can only be built on the board, so every
//! value of the type is valid.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{FIRST_COLUMN, FIRST_ROW, LAST_COLUMN, LAST_ROW};
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

/// One of the eight compass steps. North is towards row 8, East towards
/// column 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// (row delta, column delta) of a single step.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (-1, 1),
            Direction::South => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (1, -1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let (d_row, d_column) = self.delta();
        d_row != 0 && d_column != 0
    }
}

/// A square on the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Fails with `InvalidArgument` unless both coordinates are in 1..=8.
    pub fn new(row: u8, column: u8) -> ChessResult<Self> {
        if !(FIRST_ROW..=LAST_ROW).contains(&row) {
            return Err(ChessErrors::InvalidArgument(format!("invalid row {row}")));
        }
        if !(FIRST_COLUMN..=LAST_COLUMN).contains(&column) {
            return Err(ChessErrors::InvalidArgument(format!(
                "invalid column {column}"
            )));
        }
        Ok(Self { row, column })
    }

    #[inline]
    pub const fn row(&self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn column(&self) -> u8 {
        self.column
    }

    /// File letter, `'a'` for column 1.
    #[inline]
    pub fn file(&self) -> char {
        char::from(b'a' + (self.column - FIRST_COLUMN))
    }

    /// Rank number, identical to the row.
    #[inline]
    pub const fn rank(&self) -> u8 {
        self.row
    }

    /// The adjacent position one step in `direction`, or `None` off the edge.
    pub fn neighbor(&self, direction: Direction) -> Option<Position> {
        let (d_row, d_column) = direction.delta();
        let row = self.row.checked_add_signed(d_row)?;
        let column = self.column.checked_add_signed(d_column)?;
        Position::new(row, column).ok()
    }

    /// Follows `directions` one step at a time.
    ///
    /// Returns `Ok(None)` as soon as a step leaves the board, even if later
    /// steps would have come back on. An empty path is an `InvalidArgument`.
    pub fn neighbor_path(&self, directions: &[Direction]) -> ChessResult<Option<Position>> {
        if directions.is_empty() {
            return Err(ChessErrors::InvalidArgument(
                "neighbor path needs at least one direction".to_owned(),
            ));
        }

        let mut current = *self;
        for direction in directions {
            match current.neighbor(*direction) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// All 64 positions, row 1 first, columns left to right.
    pub fn all() -> impl Iterator<Item = Position> {
        (FIRST_ROW..=LAST_ROW)
            .flat_map(|row| (FIRST_COLUMN..=LAST_COLUMN).map(move |column| Position { row, column }))
    }

    /// Algebraic name such as `e4`.
    pub fn to_algebraic(&self) -> String {
        position_to_algebraic(self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

/// Parses algebraic names like `e4` (file is case-insensitive).
impl FromStr for Position {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_position(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    fn pos(row: u8, column: u8) -> Position {
        Position::new(row, column).unwrap()
    }

    #[test_case(0, 1)]
    #[test_case(9, 1)]
    #[test_case(1, 0)]
    #[test_case(1, 9)]
    #[test_case(0, 0)]
    #[test_case(255, 4)]
    fn out_of_range_is_invalid_argument(row: u8, column: u8) {
        assert!(matches!(
            Position::new(row, column),
            Err(ChessErrors::InvalidArgument(_))
        ));
    }

    #[test]
    fn every_on_board_coordinate_constructs() {
        assert_eq!(Position::all().count(), 64);
        for p in Position::all() {
            assert_eq!(Position::new(p.row(), p.column()), Ok(p));
        }
    }

    #[test]
    fn equality_and_hash_follow_coordinates() {
        let mut set = HashSet::new();
        set.insert(pos(5, 2));
        assert!(set.contains(&pos(5, 2)));
        assert!(!set.contains(&pos(5, 3)));
        assert_ne!(pos(4, 2), pos(5, 2));
    }

    #[test_case(Direction::North, Some((5, 4)))]
    #[test_case(Direction::NorthEast, Some((5, 5)))]
    #[test_case(Direction::East, Some((4, 5)))]
    #[test_case(Direction::SouthEast, Some((3, 5)))]
    #[test_case(Direction::South, Some((3, 4)))]
    #[test_case(Direction::SouthWest, Some((3, 3)))]
    #[test_case(Direction::West, Some((4, 3)))]
    #[test_case(Direction::NorthWest, Some((5, 3)))]
    fn neighbor_from_centre(direction: Direction, expected: Option<(u8, u8)>) {
        let expected = expected.map(|(row, column)| pos(row, column));
        assert_eq!(pos(4, 4).neighbor(direction), expected);
    }

    #[test]
    fn neighbor_off_the_edge_is_none() {
        assert_eq!(pos(8, 1).neighbor(Direction::North), None);
        assert_eq!(pos(8, 1).neighbor(Direction::NorthWest), None);
        assert_eq!(pos(8, 1).neighbor(Direction::West), None);
        assert_eq!(pos(1, 8).neighbor(Direction::South), None);
        assert_eq!(pos(1, 8).neighbor(Direction::SouthEast), None);
        assert_eq!(pos(1, 8).neighbor(Direction::East), None);
    }

    #[test]
    fn neighbor_is_geometrically_adjacent_and_reversible() {
        for p in Position::all() {
            for direction in Direction::ALL {
                let Some(next) = p.neighbor(direction) else {
                    continue;
                };
                let (d_row, d_column) = direction.delta();
                assert_eq!(next.row() as i8 - p.row() as i8, d_row);
                assert_eq!(next.column() as i8 - p.column() as i8, d_column);
                assert_eq!(next.neighbor(direction.opposite()), Some(p));
            }
        }
    }

    #[test]
    fn neighbor_path_composes_steps() {
        let knight_jump = [Direction::North, Direction::North, Direction::East];
        assert_eq!(pos(1, 2).neighbor_path(&knight_jump), Ok(Some(pos(3, 3))));
    }

    #[test]
    fn neighbor_path_short_circuits_off_board() {
        // West leaves the board before East would bring it back.
        let path = [Direction::West, Direction::East];
        assert_eq!(pos(4, 1).neighbor_path(&path), Ok(None));
    }

    #[test]
    fn empty_neighbor_path_is_invalid_argument() {
        assert!(matches!(
            pos(4, 4).neighbor_path(&[]),
            Err(ChessErrors::InvalidArgument(_))
        ));
    }

    #[test]
    fn display_and_algebraic() {
        let e4 = pos(4, 5);
        assert_eq!(e4.to_string(), "(4,5)");
        assert_eq!(e4.to_algebraic(), "e4");
        assert_eq!(e4.file(), 'e');
        assert_eq!(e4.rank(), 4);
        assert_eq!("e4".parse::<Position>(), Ok(e4));
        assert_eq!("E4".parse::<Position>(), Ok(e4));
    }

    #[test]
    fn diagonal_classification() {
        assert_eq!(
            Direction::ALL.iter().filter(|d| d.is_diagonal()).count(),
            4
        );
        assert!(Direction::DIAGONAL.iter().all(|d| d.is_diagonal()));
        assert!(Direction::ORTHOGONAL.iter().all(|d| !d.is_diagonal()));
    }
}
