//! Plain-text statistics and legend for finished searches

use crate::graph_algos::SearchResult;
use crate::render::Markers;


const RULE_WIDTH: usize = 78;

/// Header and separator of the statistics table
pub fn table_header() -> String {
    format!(
        "{:<30} | {:<12} | {:<15} | {:<12}\n{}",
        "Algorithm", "Path Length", "Nodes Explored", "Time (s)", "-".repeat(RULE_WIDTH)
    )
}

/// One table row, path length counts nodes including start and end
pub fn table_row(result: &SearchResult) -> String {
    let path_len = result
        .path_len()
        .map_or_else(|| "No path".to_string(), |n| n.to_string());
    format!(
        "{:<30} | {:<12} | {:<15} | {:.6}",
        result.algorithm.name(),
        path_len,
        result.nodes_explored,
        result.elapsed.as_secs_f64()
    )
}

/// Full table for a set of results, in the order given
pub fn stats_table(results: &[SearchResult]) -> String {
    let mut out = table_header();
    for result in results {
        out.push('\n');
        out.push_str(&table_row(result));
    }
    out
}

/// Explanation of the symbols in a rendered maze
pub fn legend(markers: &Markers) -> String {
    format!(
        "Legend:\n  A = Start point\n  B = End point\n  {path} = Final solution path\n  \
         {explored} = Explored nodes (not in final path)\n  X = Walls\n    = Unexplored walkable areas",
        path = markers.path,
        explored = markers.explored,
    )
}

/// Boxed title shown above an animated maze
pub fn title_box(title: &str) -> String {
    format!(
        "╔{bar}╗\n║ {title:^56} ║\n╚{bar}╝",
        bar = "═".repeat(58)
    )
}
