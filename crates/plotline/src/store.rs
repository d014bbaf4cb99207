//! Polyline working set with soft deletion.
//!
//! The store is a fixed backing array plus a parallel availability
//! bitset. Consuming a polyline only flips its bit — physical removal
//! happens in bulk via [`PolylineStore::compact`], which the spatial
//! index calls when it rebuilds its search trees.

use crate::types::Polyline;

/// Owns the working set of polylines for one algorithm run.
///
/// Positions are stable between compactions: `take(i)` tombstones slot
/// `i` without shifting the others. After [`compact`](Self::compact)
/// all prior positions are invalid and the remaining polylines are
/// renumbered from zero.
#[derive(Debug)]
pub struct PolylineStore {
    lines: Vec<Polyline>,
    available: Vec<bool>,
    live: usize,
}

impl PolylineStore {
    /// Create a store over the given polylines, all initially available.
    #[must_use]
    pub fn new(lines: Vec<Polyline>) -> Self {
        let live = lines.len();
        let available = vec![true; live];
        Self {
            lines,
            available,
            live,
        }
    }

    /// Number of still-available polylines.
    #[must_use]
    pub const fn live(&self) -> usize {
        self.live
    }

    /// Returns `true` if no polyline is still available.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total number of slots, tombstoned ones included.
    #[must_use]
    pub const fn slots(&self) -> usize {
        self.lines.len()
    }

    /// Whether slot `idx` holds an available polyline.
    #[must_use]
    pub fn is_available(&self, idx: usize) -> bool {
        self.available.get(idx).copied().unwrap_or(false)
    }

    /// Borrow the polyline in slot `idx` regardless of availability.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Polyline> {
        self.lines.get(idx)
    }

    /// Tombstone slot `idx` and take its polyline out.
    ///
    /// Returns `None` if the slot is out of range or already taken.
    pub fn take(&mut self, idx: usize) -> Option<Polyline> {
        if !self.is_available(idx) {
            return None;
        }
        self.available[idx] = false;
        self.live -= 1;
        Some(std::mem::take(&mut self.lines[idx]))
    }

    /// Take the polyline in the lowest-numbered available slot.
    ///
    /// This is the deterministic seed pick used by chain building.
    pub fn take_front(&mut self) -> Option<Polyline> {
        let idx = self.available.iter().position(|&a| a)?;
        self.take(idx)
    }

    /// Drop all tombstoned slots and renumber the survivors from zero.
    ///
    /// Every position handed out before this call is invalid afterwards.
    pub fn compact(&mut self) {
        if self.live == self.lines.len() {
            return;
        }
        let mut keep = self.available.iter();
        self.lines
            .retain(|_| keep.next().copied().unwrap_or(false));
        self.available.clear();
        self.available.resize(self.lines.len(), true);
        self.live = self.lines.len();
    }

    /// Iterate over `(slot, polyline)` pairs for the available entries.
    pub fn iter_available(&self) -> impl Iterator<Item = (usize, &Polyline)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.is_available(i))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn line(x: f64) -> Polyline {
        Polyline::new(vec![Point::new(x, 0.0), Point::new(x + 1.0, 0.0)])
    }

    #[test]
    fn new_store_all_available() {
        let store = PolylineStore::new(vec![line(0.0), line(10.0)]);
        assert_eq!(store.live(), 2);
        assert!(store.is_available(0));
        assert!(store.is_available(1));
    }

    #[test]
    fn take_tombstones_without_shifting() {
        let mut store = PolylineStore::new(vec![line(0.0), line(10.0), line(20.0)]);
        let taken = store.take(1).unwrap();
        assert_eq!(taken.first(), Some(&Point::new(10.0, 0.0)));
        assert_eq!(store.live(), 2);
        assert_eq!(store.slots(), 3);
        assert!(!store.is_available(1));
        // Neighbors keep their positions.
        assert_eq!(store.get(2).unwrap().first(), Some(&Point::new(20.0, 0.0)));
    }

    #[test]
    fn double_take_returns_none() {
        let mut store = PolylineStore::new(vec![line(0.0)]);
        assert!(store.take(0).is_some());
        assert!(store.take(0).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn take_front_picks_lowest_available() {
        let mut store = PolylineStore::new(vec![line(0.0), line(10.0), line(20.0)]);
        store.take(0);
        let next = store.take_front().unwrap();
        assert_eq!(next.first(), Some(&Point::new(10.0, 0.0)));
    }

    #[test]
    fn compact_renumbers_survivors() {
        let mut store = PolylineStore::new(vec![line(0.0), line(10.0), line(20.0)]);
        store.take(0);
        store.take(2);
        store.compact();
        assert_eq!(store.slots(), 1);
        assert_eq!(store.live(), 1);
        assert_eq!(store.get(0).unwrap().first(), Some(&Point::new(10.0, 0.0)));
    }

    #[test]
    fn iter_available_skips_tombstones() {
        let mut store = PolylineStore::new(vec![line(0.0), line(10.0), line(20.0)]);
        store.take(1);
        let slots: Vec<usize> = store.iter_available().map(|(i, _)| i).collect();
        assert_eq!(slots, vec![0, 2]);
    }
}
