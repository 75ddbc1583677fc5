use crate::geometry::Position;
use crate::graph_algos::Algorithm;
use thiserror::Error;


/// Structural problems with a maze source. Fatal to loading, never retried.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("unable to read maze: {0}")]
    Io(#[from] std::io::Error),

    #[error("maze has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("maze must contain a start cell 'A'")]
    MissingStart,

    #[error("maze must contain an end cell 'B'")]
    MissingEnd,

    #[error("maze contains more than one start cell: {first} and {second}")]
    DuplicateStart { first: Position, second: Position },

    #[error("maze contains more than one end cell: {first} and {second}")]
    DuplicateEnd { first: Position, second: Position },
}


/// Outcomes of an observed search that did not produce a result.
/// An unreachable end is not an error, it is a `SearchResult` without a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{algorithm} interrupted after {nodes_explored} expansions")]
    Interrupted { algorithm: Algorithm, nodes_explored: usize },
}


/// Algorithm name that is not one of bfs, dfs, astar, greedy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}', expected one of bfs, dfs, astar, greedy")]
pub struct UnknownAlgorithm(pub String);
