//! Shortest and valid path discovery on 2D grid mazes.
//!
//! A maze is plain text: `X` walls, `A` the start, `B` the end, anything else
//! open floor. Four search strategies share one engine and differ only in how
//! they order their frontier:
//!
//! - **Breadth-first** ([`Algorithm::Bfs`]), fewest moves
//! - **Depth-first** ([`Algorithm::Dfs`]), no optimality guarantee
//! - **A\*** ([`Algorithm::AStar`]) with the Manhattan heuristic, fewest moves
//! - **Greedy best-first** ([`Algorithm::Greedy`]), heuristic only
//!
//! ```
//! use mazepath::{Algorithm, Grid};
//!
//! let grid = Grid::parse("A  \n X \n  B").unwrap();
//! let result = Algorithm::Bfs.run(&grid);
//! assert_eq!(result.path_len(), Some(5));
//! ```

pub mod errors;
pub mod geometry;
pub mod grid;
pub mod graph_algos;
pub mod render;
pub mod report;
pub mod config;
pub mod animation;

pub use config::RunConfig;
pub use errors::{MazeError, SearchError, UnknownAlgorithm};
pub use geometry::Position;
pub use graph_algos::{run_algorithm, Algorithm, SearchResult, StepObserver};
pub use grid::{Cell, Grid};
pub use render::{Glyph, Markers, Snapshot};
