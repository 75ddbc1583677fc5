use super::{Algorithm, SearchResult, SearchState, StepObserver, START_INDEX};
use crate::errors::SearchError;
use crate::geometry::Position;
use crate::grid::Grid;


/// Depth-First Search
/// https://en.wikipedia.org/wiki/Depth-first_search
/// Frontier is a LIFO stack, nodes are marked visited when pushed
/// Neighbors are pushed up, down, left, right so they pop in reverse: right first
/// No optimality guarantee, the path depends only on neighbor order and stack discipline
pub fn depth_first<O>(grid: &Grid, observer: &mut O) -> Result<SearchResult, SearchError>
where
    O: StepObserver + ?Sized,
{
    let mut state = SearchState::new(Algorithm::Dfs, grid.start());

    // (index in node map, position, depth)
    let mut stack: Vec<(usize, Position, usize)> = vec![(START_INDEX, grid.start(), 0)];

    while let Some((index, current, depth)) = stack.pop() {
        state.expand(current, observer)?;

        if current == grid.end() {
            return Ok(state.finish(Some(index)));
        }

        for neighbor in grid.neighbors(current) {
            if let Some(neighbor_index) = state.discover(neighbor, index, depth + 1) {
                stack.push((neighbor_index, neighbor, depth + 1));
            }
        }
    }

    Ok(state.finish(None))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn positions(cells: &[(usize, usize)]) -> Vec<Position> {
        cells.iter().copied().map(Position::from).collect()
    }

    #[test]
    fn test_dfs_prefers_last_pushed_neighbor() {
        let grid = Grid::parse("A  \n X \n  B").unwrap();
        let result = Algorithm::Dfs.run(&grid);

        // right is pushed last so it is explored first
        assert_eq!(result.visited_order, positions(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]));
        assert_eq!(result.path.unwrap(), positions(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]));
        assert_eq!(result.nodes_explored, 5);
    }

    #[test]
    fn test_dfs_path_not_necessarily_shortest() {
        // Open room: DFS runs right along the top row, then snakes down
        let grid = Grid::parse("A  \n   \nB  ").unwrap();
        let dfs = Algorithm::Dfs.run(&grid);
        let bfs = Algorithm::Bfs.run(&grid);

        assert_eq!(bfs.edge_count(), Some(2));
        assert_eq!(dfs.path.unwrap(), positions(&[
            (0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0),
        ]));
    }

    #[test]
    fn test_dfs_unreachable_covers_component() {
        let grid = Grid::parse("A X\n  X\nXXB").unwrap();
        let result = Algorithm::Dfs.run(&grid);

        assert_eq!(result.path, None);
        assert_eq!(result.nodes_explored, 4);
        let mut visited = result.visited_order.clone();
        visited.sort();
        assert_eq!(visited, positions(&[(0, 0), (0, 1), (1, 0), (1, 1)]));
    }
}
