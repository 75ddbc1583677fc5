use super::frontier::PriorityFrontier;
use super::{Algorithm, SearchResult, SearchState, StepObserver, START_INDEX};
use crate::errors::SearchError;
use crate::grid::Grid;


/// Greedy Best-First Search
/// https://en.wikipedia.org/wiki/Best-first_search
/// Frontier is ordered only by the Manhattan distance to the end, ties first-in first-out
/// Nodes are marked visited when pushed and never reconsidered, so no optimality guarantee
pub fn greedy_best_first<O>(grid: &Grid, observer: &mut O) -> Result<SearchResult, SearchError>
where
    O: StepObserver + ?Sized,
{
    let mut state = SearchState::new(Algorithm::Greedy, grid.start());
    let mut open_list: PriorityFrontier<usize> = PriorityFrontier::with_start(START_INDEX, grid.start());

    while let Some(node) = open_list.pop() {
        let current = node.position;
        state.expand(current, observer)?;

        if current == grid.end() {
            return Ok(state.finish(Some(node.index)));
        }

        for neighbor in grid.neighbors(current) {
            if let Some(neighbor_index) = state.discover(neighbor, node.index, node.cost + 1) {
                open_list.push(grid.distance_to_end(neighbor), neighbor_index, neighbor, node.cost + 1);
            }
        }
    }

    Ok(state.finish(None))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    fn positions(cells: &[(usize, usize)]) -> Vec<Position> {
        cells.iter().copied().map(Position::from).collect()
    }

    #[test]
    fn test_greedy_heads_straight_for_end() {
        let grid = Grid::parse("A    \n     \n    B").unwrap();
        let result = Algorithm::Greedy.run(&grid);

        // down and right tie at every step, down was pushed first
        assert_eq!(result.path.unwrap(), positions(&[
            (0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (2, 3), (2, 4),
        ]));
        assert_eq!(result.nodes_explored, 7);
    }

    #[test]
    fn test_greedy_path_never_shorter_than_bfs() {
        // The wall hides the end, the only way round is over the top
        let source = [
            "      ",
            " XXXX ",
            " X  X ",
            "AX  XB",
            " X    ",
        ].join("\n");
        let grid = Grid::parse(&source).unwrap();
        let greedy = Algorithm::Greedy.run(&grid);
        let bfs = Algorithm::Bfs.run(&grid);

        assert!(greedy.path.is_some());
        assert_eq!(bfs.edge_count(), Some(11));
        assert!(greedy.edge_count() >= bfs.edge_count());
    }

    #[test]
    fn test_greedy_unreachable() {
        let grid = Grid::parse("A X\n  X\nXXB").unwrap();
        let result = Algorithm::Greedy.run(&grid);

        assert_eq!(result.path, None);
        assert_eq!(result.nodes_explored, 4);
    }
}
