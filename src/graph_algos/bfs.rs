use std::collections::VecDeque;

use super::{Algorithm, SearchResult, SearchState, StepObserver, START_INDEX};
use crate::errors::SearchError;
use crate::geometry::Position;
use crate::grid::Grid;


/// Breadth-First Search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// Frontier is a FIFO queue, nodes are marked visited when enqueued so each reachable
/// node is queued exactly once and the first time the end is dequeued the path has the
/// fewest possible moves
pub fn breadth_first<O>(grid: &Grid, observer: &mut O) -> Result<SearchResult, SearchError>
where
    O: StepObserver + ?Sized,
{
    let mut state = SearchState::new(Algorithm::Bfs, grid.start());

    // (index in node map, position, depth)
    let mut queue: VecDeque<(usize, Position, usize)> = VecDeque::from([(START_INDEX, grid.start(), 0)]);

    while let Some((index, current, depth)) = queue.pop_front() {
        state.expand(current, observer)?;

        if current == grid.end() {
            return Ok(state.finish(Some(index)));
        }

        for neighbor in grid.neighbors(current) {
            if let Some(neighbor_index) = state.discover(neighbor, index, depth + 1) {
                queue.push_back((neighbor_index, neighbor, depth + 1));
            }
        }
    }

    Ok(state.finish(None))
}
