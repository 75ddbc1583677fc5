use super::frontier::PriorityFrontier;
use super::{Algorithm, SearchResult, SearchState, StepObserver, START_INDEX};
use crate::errors::SearchError;
use crate::grid::Grid;


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Frontier is ordered by f = g + h, g being the number of moves from the start and h
/// the Manhattan distance to the end, ties broken first-in first-out
/// The node map stores the best g per position, a node is pushed again only when
/// reached with a strictly smaller g, and popping the outdated entry still counts
/// as an explored node
/// Manhattan distance never overestimates on a 4-connected unit-cost grid, so the
/// first time the end is popped the path is optimal
pub fn a_star<O>(grid: &Grid, observer: &mut O) -> Result<SearchResult, SearchError>
where
    O: StepObserver + ?Sized,
{
    let mut state = SearchState::new(Algorithm::AStar, grid.start());

    // Open List
    // Nodes that need to be evaluated, implemented as priority queue
    let mut open_list: PriorityFrontier<usize> = PriorityFrontier::with_start(START_INDEX, grid.start());

    while let Some(node) = open_list.pop() {

        // If the cost of the entry is higher than the best cost, the pop still counts
        // This implies we've already found a better path to this node,
        // and its neighbors were relaxed from that cheaper entry
        if state.best_cost(node.index).is_some_and(|best| node.cost > best) {
            state.revisit(node.position, observer)?;
            continue;
        }

        let current = node.position;
        state.expand(current, observer)?;

        if current == grid.end() {
            return Ok(state.finish(Some(node.index)));
        }

        let new_cost = node.cost + 1;
        for neighbor in grid.neighbors(current) {
            if let Some(neighbor_index) = state.relax(neighbor, node.index, new_cost) {
                let f_cost = new_cost + grid.distance_to_end(neighbor);
                open_list.push(f_cost, neighbor_index, neighbor, new_cost);
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
    fn test_a_star_around_center_wall() {
        let grid = Grid::parse("A  \n X \n  B").unwrap();
        let result = Algorithm::AStar.run(&grid);

        // f is 4 everywhere on both routes, FIFO tie-break follows the down branch first
        assert_eq!(result.path.unwrap(), positions(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]));
        assert_eq!(result.visited_order, positions(&[(0, 0), (1, 0), (0, 1), (2, 0), (0, 2), (2, 1), (1, 2), (2, 2)]));
    }

    #[test]
    fn test_a_star_stays_between_start_and_end() {
        let grid = Grid::parse(" A   \n     \n    B").unwrap();
        let result = Algorithm::AStar.run(&grid);

        assert_eq!(result.edge_count(), Some(5));
        // only nodes on some optimal path are expanded, the column behind the start is never popped
        assert!(result.visited_order.iter().all(|p| p.manhattan(&grid.start()) + p.manhattan(&grid.end()) == 5));
        assert!(!result.visited_order.contains(&Position::new(0, 0)));
    }

    #[test]
    fn test_a_star_matches_bfs_length_with_detour() {
        let source = [
            "A    X    ",
            "XXXX X XX ",
            "     X  X ",
            " XXXXXX X ",
            "        XB",
        ].join("\n");
        let grid = Grid::parse(&source).unwrap();
        let a_star = Algorithm::AStar.run(&grid);
        let bfs = Algorithm::Bfs.run(&grid);

        assert!(a_star.path.is_some());
        assert_eq!(a_star.edge_count(), bfs.edge_count());
    }

    #[test]
    fn test_a_star_counts_outdated_entries() {
        let source = [
            "XX XB",
            "    X",
            " XX  ",
            "     ",
            "A XX ",
            "X    ",
        ].join("\n");
        let grid = Grid::parse(&source).unwrap();
        let result = Algorithm::AStar.run(&grid);

        // (5, 4) is first reached through (4, 4) and later more cheaply through (5, 3)
        assert_eq!(result.path, None);
        assert_eq!(result.visited_order.len(), 20);
        assert_eq!(result.nodes_explored, 21);

        let unique: std::collections::HashSet<_> = result.visited_order.iter().collect();
        assert_eq!(unique.len(), result.visited_order.len());
    }

    #[test]
    fn test_a_star_outdated_entry_before_goal() {
        let source = [
            "X X    ",
            "X    X ",
            " A X X ",
            "     X ",
            "   XX B",
        ].join("\n");
        let grid = Grid::parse(&source).unwrap();
        let result = Algorithm::AStar.run(&grid);

        assert_eq!(result.edge_count(), Some(11));
        assert_eq!(result.edge_count(), Algorithm::Bfs.run(&grid).edge_count());
        assert_eq!(result.nodes_explored, result.visited_order.len() + 1);
        assert_eq!(result.nodes_explored, 26);
        // (1, 4) is improved from g 6 to g 4 after its first entry was pushed

        // the outdated pop is reported to the observer with the visited order unchanged
        let mut frames: Vec<usize> = Vec::new();
        let mut observer = |_current: Position, visited: &[Position]| {
            frames.push(visited.len());
            std::ops::ControlFlow::Continue(())
        };
        let observed = Algorithm::AStar.run_observed(&grid, &mut observer).unwrap();
        assert!(observed.same_trace(&result));
        assert_eq!(frames.len(), result.nodes_explored);
        assert_eq!(frames.windows(2).filter(|w| w[0] == w[1]).count(), 1);
    }

    #[test]
    fn test_a_star_unreachable() {
        let grid = Grid::parse("A X\n  X\nXXB").unwrap();
        let result = Algorithm::AStar.run(&grid);

        assert_eq!(result.path, None);
        assert_eq!(result.nodes_explored, 4);
    }
}
