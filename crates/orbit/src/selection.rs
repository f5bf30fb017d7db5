use crate::error::OrbitError;
use std::num::NonZeroUsize;

/// Result of a selection change. `from == to` when nothing moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Which of `count` items is active. The index is always in range and wraps on rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    count: NonZeroUsize,
}

impl Selection {
    pub fn new(count: usize) -> Result<Self, OrbitError> {
        let count = NonZeroUsize::new(count).ok_or(OrbitError::Empty)?;
        Ok(Self { index: 0, count })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> NonZeroUsize {
        self.count
    }

    pub fn rotate_forward(&mut self) -> Transition {
        self.move_to((self.index + 1) % self.count.get())
    }

    pub fn rotate_backward(&mut self) -> Transition {
        let n = self.count.get();
        self.move_to((self.index + n - 1) % n)
    }

    pub fn select(&mut self, index: usize) -> Result<Transition, OrbitError> {
        if index >= self.count.get() {
            return Err(OrbitError::OutOfRange {
                index,
                count: self.count.get(),
            });
        }
        Ok(self.move_to(index))
    }

    fn move_to(&mut self, index: usize) -> Transition {
        let transition = Transition {
            from: self.index,
            to: index,
        };
        self.index = index;
        log::debug!("selection {} -> {}", transition.from, transition.to);
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(Selection::new(0), Err(OrbitError::Empty));
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Selection::new(5).unwrap().index(), 0);
    }

    #[test]
    fn test_forward_then_backward_round_trips() {
        for count in 1..=7 {
            for start in 0..count {
                let mut sel = Selection::new(count).unwrap();
                sel.select(start).unwrap();
                sel.rotate_forward();
                sel.rotate_backward();
                assert_eq!(sel.index(), start);
            }
        }
    }

    #[test]
    fn test_full_turn_is_identity() {
        for count in 1..=7 {
            let mut sel = Selection::new(count).unwrap();
            sel.select(count - 1).unwrap();
            for _ in 0..count {
                sel.rotate_forward();
            }
            assert_eq!(sel.index(), count - 1);
        }
    }

    #[test]
    fn test_rotate_forward_scenario() {
        let mut sel = Selection::new(5).unwrap();
        let t = sel.rotate_forward();
        assert_eq!(t, Transition { from: 0, to: 1 });
        assert_eq!(sel.index(), 1);
    }

    #[test]
    fn test_rotate_backward_wraps() {
        let mut sel = Selection::new(5).unwrap();
        sel.rotate_backward();
        assert_eq!(sel.index(), 4);
    }

    #[test]
    fn test_select_direct() {
        let mut sel = Selection::new(5).unwrap();
        sel.rotate_forward();
        let t = sel.select(3).unwrap();
        assert_eq!(t, Transition { from: 1, to: 3 });
        assert_eq!(sel.index(), 3);
        assert!(!sel.select(3).unwrap().changed());
    }

    #[test]
    fn test_select_out_of_range_is_rejected() {
        let mut sel = Selection::new(5).unwrap();
        sel.select(2).unwrap();
        assert_eq!(
            sel.select(5),
            Err(OrbitError::OutOfRange { index: 5, count: 5 })
        );
        assert_eq!(sel.index(), 2);
    }

    #[test]
    fn test_single_item_never_moves() {
        let mut sel = Selection::new(1).unwrap();
        assert!(!sel.rotate_forward().changed());
        assert!(!sel.rotate_backward().changed());
        assert_eq!(sel.index(), 0);
    }
}
