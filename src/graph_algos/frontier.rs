use std::{cmp::Ordering, collections::BinaryHeap};

use num_traits::Zero;

use crate::geometry::Position;


/// Entry on a best-first frontier
/// Ordered by key, then by insertion order so equal keys pop first-in first-out
#[derive(Debug)]
pub(crate) struct Node<K> {
    pub key: K, // priority, smaller pops first
    order: usize, // insertion counter, tie-break among equal keys
    pub index: usize, // index in the node map
    pub position: Position,
    pub cost: usize, // edge count from the start when pushed
}

impl<K: Ord> Ord for Node<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, reverse both keys
        other.key.cmp(&self.key)
            .then_with(|| other.order.cmp(&self.order))
    }
}
impl<K: Ord> PartialOrd for Node<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<K: Ord> PartialEq for Node<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<K: Ord> Eq for Node<K> {}


/// Min-priority queue with deterministic tie-breaking
pub(crate) struct PriorityFrontier<K> {
    heap: BinaryHeap<Node<K>>,
    counter: usize,
}

impl<K: Zero + Ord + Copy> PriorityFrontier<K> {

    /// Frontier seeded with the start node at key zero
    pub fn with_start(index: usize, position: Position) -> Self {
        let mut heap = BinaryHeap::new();
        heap.push(Node {
            key: K::zero(),
            order: 0,
            index,
            position,
            cost: 0,
        });
        Self { heap, counter: 0 }
    }

    pub fn push(&mut self, key: K, index: usize, position: Position, cost: usize) {
        self.counter += 1;
        self.heap.push(Node {
            key,
            order: self.counter,
            index,
            position,
            cost,
        });
    }

    pub fn pop(&mut self) -> Option<Node<K>> {
        self.heap.pop()
    }
}
