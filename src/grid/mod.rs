use std::{fmt, fs, path::Path};

use log::info;

use crate::errors::MazeError;
use crate::geometry::Position;


pub const WALL: char = 'X';
pub const START: char = 'A';
pub const END: char = 'B';


/// Classification of a single maze cell
/// Open cells keep their original symbol so the maze can be redrawn verbatim
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Open(char),
    Wall,
    Start,
    End,
}

impl Cell {

    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            WALL => Cell::Wall,
            START => Cell::Start,
            END => Cell::End,
            other => Cell::Open(other),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Open(c) => *c,
            Cell::Wall => WALL,
            Cell::Start => START,
            Cell::End => END,
        }
    }

    /// Start and end are walkable, only walls block movement
    pub fn is_walkable(&self) -> bool {
        !matches!(self, Cell::Wall)
    }
}


/// Immutable rectangular maze with exactly one start and one end
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    rows: usize,
    cols: usize,
    start: Position,
    end: Position,
}

impl Grid {

    /// Parse a maze from text, one row per line
    /// `X` is a wall, `A` the start, `B` the end, any other character is open floor
    pub fn parse(source: &str) -> Result<Self, MazeError> {
        let mut cells: Vec<Vec<Cell>> = Vec::new();
        let mut start: Option<Position> = None;
        let mut end: Option<Position> = None;

        for (row, line) in source.lines().enumerate() {
            let mut cell_row = Vec::with_capacity(line.len());

            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol);
                let pos = Position::new(row, col);

                // Duplicate markers are rejected rather than silently overwritten
                match cell {
                    Cell::Start => {
                        if let Some(first) = start {
                            return Err(MazeError::DuplicateStart { first, second: pos });
                        }
                        start = Some(pos);
                    }
                    Cell::End => {
                        if let Some(first) = end {
                            return Err(MazeError::DuplicateEnd { first, second: pos });
                        }
                        end = Some(pos);
                    }
                    _ => {}
                }
                cell_row.push(cell);
            }

            if let Some(first) = cells.first() {
                if first.len() != cell_row.len() {
                    return Err(MazeError::Ragged {
                        row,
                        expected: first.len(),
                        found: cell_row.len(),
                    });
                }
            }
            cells.push(cell_row);
        }

        if cells.is_empty() {
            return Err(MazeError::Empty);
        }
        let start = start.ok_or(MazeError::MissingStart)?;
        let end = end.ok_or(MazeError::MissingEnd)?;

        let rows = cells.len();
        let cols = cells[0].len();

        Ok(Self { cells, rows, cols, start, end })
    }

    /// Read and parse a maze file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let grid = Self::parse(&source)?;
        info!(
            "loaded maze {} ({} x {}), start {}, end {}",
            path.display(), grid.rows, grid.cols, grid.start, grid.end
        );
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Cell at a position, `None` when out of bounds
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Row-major iteration over every cell and its position
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, cell)| (Position::new(r, c), *cell))
        })
    }

    /// True if the position is in bounds and not a wall
    pub fn is_valid(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|cell| cell.is_walkable())
    }

    /// Walkable orthogonal neighbors in order up, down, left, right
    /// This order is the tie-break for every search algorithm
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.orthogonal()
            .into_iter()
            .flatten()
            .filter(move |n| self.is_valid(*n))
    }

    /// Manhattan distance from a position to the end cell
    pub fn distance_to_end(&self, pos: Position) -> usize {
        pos.manhattan(&self.end)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_small_maze() {
        let grid = Grid::parse("A  \n X \n  B").unwrap();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.start(), Position::new(0, 0));
        assert_eq!(grid.end(), Position::new(2, 2));
        assert_eq!(grid.cell(Position::new(1, 1)), Some(Cell::Wall));
        assert_eq!(grid.cell(Position::new(0, 1)), Some(Cell::Open(' ')));
        assert_eq!(grid.cell(Position::new(3, 0)), None);
    }

    #[test]
    fn test_trailing_newline_is_ignored() {
        let grid = Grid::parse("AB\n..\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.to_string(), "AB\n..");
    }

    #[test]
    fn test_display_reproduces_source() {
        let source = "XXXXX\nA.+ X\nX X B\nXXXXX";
        let grid = Grid::parse(source).unwrap();
        assert_eq!(grid.to_string(), source);
    }

    #[test]
    fn test_neighbors_fixed_order() {
        let grid = Grid::parse("   \n A \n  B").unwrap();
        let neighbors: Vec<_> = grid.neighbors(Position::new(1, 1)).collect();

        assert_eq!(neighbors, vec![
            Position::new(0, 1), // up
            Position::new(2, 1), // down
            Position::new(1, 0), // left
            Position::new(1, 2), // right
        ]);
    }

    #[test]
    fn test_neighbors_filtered_by_walls_and_bounds() {
        let grid = Grid::parse("AX\n B").unwrap();
        let neighbors: Vec<_> = grid.neighbors(Position::new(0, 0)).collect();
        assert_eq!(neighbors, vec![Position::new(1, 0)]);

        // start and end are walkable
        assert!(grid.is_valid(grid.start()));
        assert!(grid.is_valid(grid.end()));
        assert!(!grid.is_valid(Position::new(0, 1)));
        assert!(!grid.is_valid(Position::new(0, 5)));
    }

    #[test]
    fn test_rejects_empty_source() {
        assert!(matches!(Grid::parse(""), Err(MazeError::Empty)));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let result = Grid::parse("A  \n \n  B");
        assert!(matches!(
            result,
            Err(MazeError::Ragged { row: 1, expected: 3, found: 1 })
        ));
    }

    #[test]
    fn test_rejects_missing_markers() {
        assert!(matches!(Grid::parse("  B"), Err(MazeError::MissingStart)));
        assert!(matches!(Grid::parse("A  "), Err(MazeError::MissingEnd)));
    }

    #[test]
    fn test_rejects_duplicate_markers() {
        let result = Grid::parse("A A\n  B");
        match result {
            Err(MazeError::DuplicateStart { first, second }) => {
                assert_eq!(first, Position::new(0, 0));
                assert_eq!(second, Position::new(0, 2));
            }
            other => panic!("expected DuplicateStart, got {other:?}"),
        }

        assert!(matches!(Grid::parse("AB\nB "), Err(MazeError::DuplicateEnd { .. })));
    }

    #[test]
    fn test_distance_to_end() {
        let grid = Grid::parse("A  \n   \n  B").unwrap();
        assert_eq!(grid.distance_to_end(grid.start()), 4);
        assert_eq!(grid.distance_to_end(grid.end()), 0);
    }
}
