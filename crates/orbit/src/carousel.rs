use crate::error::OrbitError;
use crate::item::Item;
use crate::layout::{self, Offset};
use crate::selection::{Selection, Transition};
use strum::Display as StrumDisplay;

/// How an item is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// Large, centered, with the full label set.
    Featured,
    /// Small, on the ring, with title and date only.
    Peripheral,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub index: usize,
    pub slot: usize,
    pub is_active: bool,
    pub variant: Variant,
    pub offset: Offset,
    pub item: &'a Item,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout<'a> {
    pub featured: Placement<'a>,
    pub ring: Vec<Placement<'a>>,
}

/// A fixed sequence of items with one of them active.
#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<Item>,
    selection: Selection,
}

impl Carousel {
    pub fn new(items: Vec<Item>) -> Result<Self, OrbitError> {
        let selection = Selection::new(items.len())?;
        Ok(Self { items, selection })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false, a carousel cannot be built without items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.selection.index()
    }

    pub fn active_item(&self) -> &Item {
        &self.items[self.selection.index()]
    }

    pub fn rotate_forward(&mut self) -> Transition {
        self.selection.rotate_forward()
    }

    pub fn rotate_backward(&mut self) -> Transition {
        self.selection.rotate_backward()
    }

    pub fn select(&mut self, index: usize) -> Result<Transition, OrbitError> {
        self.selection.select(index)
    }

    pub fn slot_of(&self, index: usize) -> Result<usize, OrbitError> {
        let count = self.selection.count();
        if index >= count.get() {
            return Err(OrbitError::OutOfRange {
                index,
                count: count.get(),
            });
        }
        Ok(layout::slot(index, self.selection.index(), count))
    }

    pub fn featured(&self) -> Placement<'_> {
        let index = self.selection.index();
        Placement {
            index,
            slot: 0,
            is_active: true,
            variant: Variant::Featured,
            offset: Offset::ZERO,
            item: &self.items[index],
        }
    }

    /// Ring placements in item order.
    pub fn ring(&self, radius: f64) -> Vec<Placement<'_>> {
        let count = self.selection.count();
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let slot = layout::slot(index, self.selection.index(), count);
                Placement {
                    index,
                    slot,
                    is_active: slot == 0,
                    variant: Variant::Peripheral,
                    offset: layout::offset(slot, count, radius),
                    item,
                }
            })
            .collect()
    }

    pub fn layout(&self, radius: f64) -> Layout<'_> {
        Layout {
            featured: self.featured(),
            ring: self.ring(radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(count: usize) -> Carousel {
        let items = (0..count)
            .map(|i| Item::new(format!("Item {i}"), "2024", None, "Role"))
            .collect();
        Carousel::new(items).unwrap()
    }

    #[test]
    fn test_empty_carousel_is_rejected() {
        assert_eq!(Carousel::new(Vec::new()).unwrap_err(), OrbitError::Empty);
    }

    #[test]
    fn test_exactly_one_active_on_ring() {
        let mut carousel = sample(5);
        for _ in 0..5 {
            let ring = carousel.ring(270.0);
            let active: Vec<_> = ring.iter().filter(|p| p.is_active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].index, carousel.active_index());
            assert_eq!(active[0].slot, 0);
            carousel.rotate_forward();
        }
    }

    #[test]
    fn test_featured_is_centered_active_item() {
        let mut carousel = sample(5);
        carousel.select(3).unwrap();
        let featured = carousel.featured();
        assert_eq!(featured.variant, Variant::Featured);
        assert_eq!(featured.offset, Offset::ZERO);
        assert_eq!(featured.item.title.as_str(), "Item 3");
    }

    #[test]
    fn test_rotation_reslots_every_item() {
        let mut carousel = sample(5);
        carousel.rotate_forward();
        let ring = carousel.ring(270.0);
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(ring[0].slot, 4);
        assert_eq!(ring[2].slot, 1);
        assert!(ring.iter().all(|p| p.variant == Variant::Peripheral));
    }

    #[test]
    fn test_active_ring_item_sits_on_top() {
        let mut carousel = sample(3);
        carousel.rotate_backward();
        let layout = carousel.layout(100.0);
        let top = layout.ring[carousel.active_index()].offset;
        assert!(top.x.abs() < 1e-9);
        assert!((top.y + 100.0).abs() < 1e-9);
        assert_eq!(layout.featured.index, 2);
    }

    #[test]
    fn test_select_out_of_range_keeps_layout() {
        let mut carousel = sample(5);
        carousel.select(1).unwrap();
        assert!(carousel.select(7).is_err());
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn test_slot_of_rejects_unknown_index() {
        let mut carousel = sample(4);
        carousel.rotate_forward();
        assert_eq!(carousel.slot_of(1), Ok(0));
        assert_eq!(carousel.slot_of(0), Ok(3));
        assert_eq!(
            carousel.slot_of(4),
            Err(OrbitError::OutOfRange { index: 4, count: 4 })
        );
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Featured.to_string(), "featured");
        assert_eq!(Variant::Peripheral.to_string(), "peripheral");
    }
}
