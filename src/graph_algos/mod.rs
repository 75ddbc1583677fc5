pub mod bfs;
pub mod dfs;
pub mod a_star;
pub mod greedy;
mod frontier;
mod shortest_path;

use std::{
    fmt,
    ops::ControlFlow,
    str::FromStr,
    time::{Duration, Instant},
};

use indexmap::{IndexMap, map::Entry::{Occupied, Vacant}};
use log::{debug, trace};
use rustc_hash::{FxBuildHasher, FxHashSet};

use shortest_path::shortest_path;

use crate::errors::{SearchError, UnknownAlgorithm};
use crate::geometry::Position;
use crate::grid::Grid;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
/// Insertion order doubles as the node id, hashing is rustc_hash for speed
pub type GraphNodeMap<N, C> = IndexMap<N, (usize, C), FxBuildHasher>;


/// Hook invoked once per frontier pop, after the node is counted and before the goal check
/// A* also reports outdated heap entries, with the visited order unchanged
/// Returning `ControlFlow::Break` interrupts the search
/// Blocking inside the hook stalls the search, which is how animation is paced
pub trait StepObserver {
    fn on_step(&mut self, current: Position, visited: &[Position]) -> ControlFlow<()>;
}

impl<F> StepObserver for F
where
    F: FnMut(Position, &[Position]) -> ControlFlow<()>,
{
    fn on_step(&mut self, current: Position, visited: &[Position]) -> ControlFlow<()> {
        self(current, visited)
    }
}

/// Observer that never interrupts
struct Unobserved;

impl StepObserver for Unobserved {
    fn on_step(&mut self, _current: Position, _visited: &[Position]) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}


/// The four frontier policies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    AStar,
    Greedy,
}

impl Algorithm {

    pub const ALL: [Algorithm; 4] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar, Algorithm::Greedy];

    /// Short name accepted by `FromStr`
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::AStar => "astar",
            Algorithm::Greedy => "greedy",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth-First Search (BFS)",
            Algorithm::Dfs => "Depth-First Search (DFS)",
            Algorithm::AStar => "A* Search",
            Algorithm::Greedy => "Greedy Best-First Search",
        }
    }

    /// Run to completion without observation
    pub fn run(&self, grid: &Grid) -> SearchResult {
        match self.run_observed(grid, &mut Unobserved) {
            Ok(result) => result,
            Err(err) => unreachable!("unobserved search stopped early: {err}"),
        }
    }

    /// Run, invoking the observer after every frontier pop
    pub fn run_observed<O>(&self, grid: &Grid, observer: &mut O) -> Result<SearchResult, SearchError>
    where
        O: StepObserver + ?Sized,
    {
        match self {
            Algorithm::Bfs => bfs::breadth_first(grid, observer),
            Algorithm::Dfs => dfs::depth_first(grid, observer),
            Algorithm::AStar => a_star::a_star(grid, observer),
            Algorithm::Greedy => greedy::greedy_best_first(grid, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.key() == key)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}


/// Run an algorithm, observing it only when animating
/// Without animation the observer is never invoked and the run cannot be interrupted
pub fn run_algorithm(
    algorithm: Algorithm,
    grid: &Grid,
    animate: bool,
    observer: Option<&mut dyn StepObserver>,
) -> Result<SearchResult, SearchError> {
    match observer {
        Some(observer) if animate => algorithm.run_observed(grid, observer),
        _ => Ok(algorithm.run(grid)),
    }
}


/// Outcome of one search
/// `path` is `None` when the end is unreachable, which is a normal result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub path: Option<Vec<Position>>,
    pub visited_order: Vec<Position>, // expansion order
    pub nodes_explored: usize,
    pub elapsed: Duration,
}

impl SearchResult {

    /// Number of positions on the path, start and end included
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }

    /// Number of moves on the path
    pub fn edge_count(&self) -> Option<usize> {
        self.path_len().map(|n| n.saturating_sub(1))
    }

    /// Expanded positions that are not on the path, in expansion order
    pub fn explored_off_path(&self) -> Vec<Position> {
        let on_path: FxHashSet<Position> = self.path.iter().flatten().copied().collect();
        self.visited_order
            .iter()
            .filter(|pos| !on_path.contains(pos))
            .copied()
            .collect()
    }

    /// Same path, exploration order and expansion count, timing ignored
    pub fn same_trace(&self, other: &SearchResult) -> bool {
        self.path == other.path
            && self.visited_order == other.visited_order
            && self.nodes_explored == other.nodes_explored
    }
}


/// Bookkeeping shared by every algorithm
/// Discovered nodes live in the node map with their parent link and cost,
/// the path is rebuilt from parent links once the goal is popped
pub(crate) struct SearchState {
    algorithm: Algorithm,
    node_map: GraphNodeMap<Position, usize>,
    visited_order: Vec<Position>,
    nodes_explored: usize,
    started: Instant,
}

pub(crate) const START_INDEX: usize = 0;

impl SearchState {

    pub fn new(algorithm: Algorithm, start: Position) -> Self {
        debug!("{algorithm}: starting search from {start}");
        let mut node_map: GraphNodeMap<Position, usize> = GraphNodeMap::default();
        // for the start node, parent_index is set to usize::MAX to indicate it has no parent
        node_map.insert(start, (usize::MAX, 0));
        Self {
            algorithm,
            node_map,
            visited_order: Vec::new(),
            nodes_explored: 0,
            started: Instant::now(),
        }
    }

    /// Count an expansion and report it to the observer
    pub fn expand<O>(&mut self, current: Position, observer: &mut O) -> Result<(), SearchError>
    where
        O: StepObserver + ?Sized,
    {
        self.nodes_explored += 1;
        self.visited_order.push(current);
        trace!("{}: expanding {current} (#{})", self.algorithm, self.nodes_explored);
        self.notify(current, observer)
    }

    /// Count a pop of an outdated frontier entry
    /// The node was already expanded at a lower cost, so the visited order is left alone
    pub fn revisit<O>(&mut self, current: Position, observer: &mut O) -> Result<(), SearchError>
    where
        O: StepObserver + ?Sized,
    {
        self.nodes_explored += 1;
        trace!("{}: outdated entry for {current} (#{})", self.algorithm, self.nodes_explored);
        self.notify(current, observer)
    }

    fn notify<O>(&self, current: Position, observer: &mut O) -> Result<(), SearchError>
    where
        O: StepObserver + ?Sized,
    {
        match observer.on_step(current, &self.visited_order) {
            ControlFlow::Continue(()) => Ok(()),
            ControlFlow::Break(()) => {
                debug!("{}: interrupted after {} expansions", self.algorithm, self.nodes_explored);
                Err(SearchError::Interrupted {
                    algorithm: self.algorithm,
                    nodes_explored: self.nodes_explored,
                })
            }
        }
    }

    /// Record a node the first time it is seen
    /// Returns its index, or None if it was already discovered
    pub fn discover(&mut self, node: Position, parent_index: usize, cost: usize) -> Option<usize> {
        match self.node_map.entry(node) {
            Vacant(e) => {
                let index = e.index();
                e.insert((parent_index, cost));
                Some(index)
            }
            Occupied(_) => None,
        }
    }

    /// Record a node if it is new or reached with a strictly smaller cost
    /// Returns its index when the frontier should receive a new entry
    pub fn relax(&mut self, node: Position, parent_index: usize, cost: usize) -> Option<usize> {
        match self.node_map.entry(node) {
            Vacant(e) => {
                let index = e.index();
                e.insert((parent_index, cost));
                Some(index)
            }
            Occupied(mut e) => {
                if e.get().1 > cost {
                    // We've found a better path to this node
                    let index = e.index();
                    e.insert((parent_index, cost));
                    Some(index)
                } else {
                    None
                }
            }
        }
    }

    /// Best known cost for a discovered node
    pub fn best_cost(&self, index: usize) -> Option<usize> {
        self.node_map.get_index(index).map(|(_, &(_, cost))| cost)
    }

    /// Stop the clock and build the result, rebuilding the path if the goal was reached
    pub fn finish(self, goal_index: Option<usize>) -> SearchResult {
        let elapsed = self.started.elapsed();
        let path = goal_index.and_then(|index| shortest_path(&self.node_map, index));

        match &path {
            Some(path) => debug!(
                "{}: found path of {} nodes, {} expansions in {:?}",
                self.algorithm, path.len(), self.nodes_explored, elapsed
            ),
            None => debug!(
                "{}: no path, {} expansions in {:?}",
                self.algorithm, self.nodes_explored, elapsed
            ),
        }

        SearchResult {
            algorithm: self.algorithm,
            path,
            visited_order: self.visited_order,
            nodes_explored: self.nodes_explored,
            elapsed,
        }
    }
}
