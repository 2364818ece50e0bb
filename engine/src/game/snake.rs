use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Snake body, head first. A `HashSet` mirror of the segments keeps
/// occupancy lookups O(1); the two collections are updated together.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(start: Point) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        body.push_back(start);
        body_set.insert(start);
        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }

    /// Prepends the new head without removing the tail (food was eaten).
    pub fn grow(&mut self, new_head: Point) {
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
    }

    /// Prepends the new head and vacates the tail (regular move).
    pub fn advance(&mut self, new_head: Point) {
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);
    }

    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }
}
