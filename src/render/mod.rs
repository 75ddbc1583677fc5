use std::fmt;

use rustc_hash::FxHashSet;

use crate::geometry::Position;
use crate::graph_algos::SearchResult;
use crate::grid::{Cell, Grid};


/// Symbols used for search state overlays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Markers {
    pub path: char,
    pub explored: char,
    pub current: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            path: '·',
            explored: '░',
            current: '◉',
        }
    }
}


/// What a single cell shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Cell(Cell), // original symbol
    Path,
    Explored,
    Current,
}


/// Renderable view of a grid with search state laid over it
/// Start and end always show literally, then the current node, the path, explored
/// nodes and finally the original symbol
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    rows: Vec<Vec<Glyph>>,
    markers: Markers,
}

impl Snapshot {

    pub fn new(
        grid: &Grid,
        path: Option<&[Position]>,
        visited: &[Position],
        current: Option<Position>,
        markers: Markers,
    ) -> Self {
        let path_set: FxHashSet<Position> = path.unwrap_or_default().iter().copied().collect();
        let visited_set: FxHashSet<Position> = visited.iter().copied().collect();

        let mut rows: Vec<Vec<Glyph>> = vec![Vec::with_capacity(grid.cols()); grid.rows()];
        for (pos, cell) in grid.iter() {
            let glyph = match cell {
                Cell::Start | Cell::End => Glyph::Cell(cell),
                _ if current == Some(pos) => Glyph::Current,
                _ if path_set.contains(&pos) => Glyph::Path,
                _ if visited_set.contains(&pos) => Glyph::Explored,
                _ => Glyph::Cell(cell),
            };
            rows[pos.row].push(glyph);
        }

        Self { rows, markers }
    }

    /// The maze as loaded, no overlays
    pub fn plain(grid: &Grid) -> Self {
        Self::new(grid, None, &[], None, Markers::default())
    }

    /// Final state of a finished search
    pub fn of_result(grid: &Grid, result: &SearchResult, markers: Markers) -> Self {
        Self::new(grid, result.path.as_deref(), &result.visited_order, None, markers)
    }

    /// Intermediate state shown while a search is being animated
    pub fn in_progress(grid: &Grid, visited: &[Position], current: Position, markers: Markers) -> Self {
        Self::new(grid, None, visited, Some(current), markers)
    }

    pub fn glyph(&self, pos: Position) -> Option<Glyph> {
        self.rows.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    pub fn symbol(&self, glyph: Glyph) -> char {
        match glyph {
            Glyph::Cell(cell) => cell.symbol(),
            Glyph::Path => self.markers.path,
            Glyph::Explored => self.markers.explored,
            Glyph::Current => self.markers.current,
        }
    }

    /// Rows as strings, one per grid row
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows
            .iter()
            .map(|row| row.iter().map(|glyph| self.symbol(*glyph)).collect())
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}
