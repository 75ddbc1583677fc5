use std::time::Duration;

use crate::graph_algos::Algorithm;
use crate::render::Markers;


/// Animation pause between expansions when none is given
pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);


/// Everything a solving session needs, passed explicitly to each run
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub algorithms: Vec<Algorithm>, // run in this order
    pub animate: bool,
    pub delay: Duration, // pause after each animated expansion
    pub markers: Markers,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            animate: false,
            delay: DEFAULT_DELAY,
            markers: Markers::default(),
        }
    }
}

impl RunConfig {

    /// More than one algorithm selected, results are shown side by side
    pub fn is_comparison(&self) -> bool {
        self.algorithms.len() > 1
    }
}
