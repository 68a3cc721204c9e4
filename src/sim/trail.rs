//! Bounded position history per ball
//!
//! Feeds both trail rendering (oldest to newest) and release-velocity
//! estimation (newest backwards). A trail always holds at least one point.

use std::collections::VecDeque;

use glam::Vec2;

/// Fixed-capacity FIFO of recent positions, newest at the top
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    /// Create a trail seeded with a single point
    pub fn new(seed: Vec2, capacity: usize) -> Self {
        assert!(capacity > 0, "trail capacity must be positive");
        let mut points = VecDeque::with_capacity(capacity);
        points.push_back(seed);
        Self { points, capacity }
    }

    /// Append a point, evicting the oldest once over capacity
    pub fn push(&mut self, point: Vec2) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Drop all history and restart from `point`
    pub fn reset(&mut self, point: Vec2) {
        self.points.clear();
        self.points.push_back(point);
    }

    /// Most recent point
    pub fn top(&self) -> Vec2 {
        // Never empty: construction seeds a point and reset() re-seeds one
        self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Oldest to newest (drawing order)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Vec2> + ExactSizeIterator + '_ {
        self.points.iter().copied()
    }

    /// Newest to oldest (trajectory weighting order)
    pub fn iter_recent(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().rev().copied()
    }

    /// Displacements between consecutive points, newest segment first
    pub fn recent_segments(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.iter_recent()
            .zip(self.iter_recent().skip(1))
            .map(|(newer, older)| newer - older)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_trail_has_seed() {
        let trail = Trail::new(Vec2::new(3.0, 4.0), 30);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.top(), Vec2::new(3.0, 4.0));
        assert!(!trail.is_empty());
    }

    #[test]
    fn test_eviction_is_fifo() {
        let mut trail = Trail::new(Vec2::new(0.0, 0.0), 3);
        for i in 1..=3 {
            trail.push(Vec2::new(i as f32, 0.0));
        }
        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
        assert_eq!(trail.top(), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_reset_leaves_single_point() {
        let mut trail = Trail::new(Vec2::ZERO, 5);
        trail.push(Vec2::ONE);
        trail.push(Vec2::splat(2.0));
        trail.reset(Vec2::new(9.0, 9.0));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.top(), Vec2::new(9.0, 9.0));
        assert_eq!(trail.recent_segments().count(), 0);
    }

    #[test]
    fn test_recent_segments_order() {
        let mut trail = Trail::new(Vec2::ZERO, 10);
        trail.push(Vec2::new(1.0, 0.0));
        trail.push(Vec2::new(3.0, 0.0));
        let segs: Vec<Vec2> = trail.recent_segments().collect();
        assert_eq!(segs, vec![Vec2::new(2.0, 0.0), Vec2::new(1.0, 0.0)]);
    }

    proptest! {
        #[test]
        fn prop_keeps_newest_points(capacity in 1usize..40, extra in 0usize..60) {
            let mut trail = Trail::new(Vec2::ZERO, capacity);
            let total = capacity + extra;
            for i in 1..=total {
                trail.push(Vec2::new(i as f32, -(i as f32)));
            }
            prop_assert_eq!(trail.len(), capacity);
            let expected: Vec<f32> = ((total + 1 - capacity)..=total).map(|i| i as f32).collect();
            let actual: Vec<f32> = trail.iter().map(|p| p.x).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
