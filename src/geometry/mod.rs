use std::fmt;
use num_traits::Num;


/// Manhattan distance
/// Works for unsigned coordinates as well, the difference is always taken largest minus smallest
pub fn manhattan_distance<T>(r1: T, c1: T, r2: T, c2: T) -> T
where
    T: Num + Copy + PartialOrd,
    {
    abs_diff(r1, r2) + abs_diff(c1, c2)
}

fn abs_diff<T>(a: T, b: T) -> T
where
    T: Num + Copy + PartialOrd,
{
    if a > b { a - b } else { b - a }
}


/// Cell coordinate on a grid, (row, column) with row 0 at the top
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another position
    pub fn manhattan(&self, other: &Position) -> usize {
        manhattan_distance(self.row, self.col, other.row, other.col)
    }

    /// The four orthogonal neighbors in fixed order: up, down, left, right
    /// Neighbors that would fall off the top or left edge are `None`
    pub fn orthogonal(&self) -> [Option<Position>; 4] {
        [
            self.row.checked_sub(1).map(|r| Position::new(r, self.col)),
            self.row.checked_add(1).map(|r| Position::new(r, self.col)),
            self.col.checked_sub(1).map(|c| Position::new(self.row, c)),
            self.col.checked_add(1).map(|c| Position::new(self.row, c)),
        ]
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
