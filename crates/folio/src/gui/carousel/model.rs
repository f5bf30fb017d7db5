use super::{FEATURED_RADIUS, HOVER_SCALE, LOGO_SIZE, PERIPHERAL_RADIUS, Point};
use crate::config::Config;
use crate::gui::motion;
use gdk_pixbuf::Pixbuf;
use orbit::{Carousel, Item, Offset, OrbitError, RadiusPolicy, Transition, Variant};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemGeometry {
    pub index: usize,
    pub center: Point,
    pub radius: f64,
    pub scale: f64,
    pub is_active: bool,
    pub variant: Variant,
}

impl ItemGeometry {
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance(point) <= self.radius
    }
}

/// Offsets the ring is easing away from.
#[derive(Debug, Clone)]
struct Animation {
    from: Vec<Offset>,
    started_at: Option<i64>,
    progress: f64,
}

pub struct CarouselState {
    pub carousel: Carousel,
    pub logos: Vec<Option<Pixbuf>>,
    pub policy: RadiusPolicy,
    pub center: Point,
    pub area_width: f64,
    pub viewport_width: f64,
    pub hover_index: Option<usize>,
    transition: Duration,
    animation: Option<Animation>,
}

impl CarouselState {
    pub fn new(
        carousel: Carousel,
        logos: Vec<Option<Pixbuf>>,
        policy: RadiusPolicy,
        transition: Duration,
    ) -> Self {
        Self {
            carousel,
            logos,
            policy,
            center: Point::default(),
            area_width: 0.0,
            viewport_width: 0.0,
            hover_index: None,
            transition,
            animation: None,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, OrbitError> {
        let carousel = config.carousel()?;
        let logos = config
            .experiences
            .items
            .iter()
            .map(|e| e.logo.as_deref().and_then(load_logo))
            .collect();
        Ok(Self::new(
            carousel,
            logos,
            config.layout.radius_policy(),
            config.layout.transition(),
        ))
    }

    /// Swaps in freshly loaded content. The active item resets to the first one.
    pub fn replace(&mut self, other: CarouselState) {
        self.carousel = other.carousel;
        self.logos = other.logos;
        self.policy = other.policy;
        self.transition = other.transition;
        self.hover_index = None;
        self.animation = None;
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.carousel.items().get(index)
    }

    pub fn logo(&self, index: usize) -> Option<&Pixbuf> {
        self.logos.get(index).and_then(Option::as_ref)
    }

    pub fn set_viewport(&mut self, width: f64) {
        self.viewport_width = width;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.area_width = width;
        self.center = Point::new(width / 2.0, height / 2.0);
    }

    /// Side of the square the ring needs at `viewport_width`, hovered items included.
    pub fn extent_for(&self, viewport_width: f64) -> f64 {
        let radius = self.policy.radius_for(viewport_width);
        let scale = self.policy.scale_for(viewport_width);
        let ring = radius + PERIPHERAL_RADIUS * scale * HOVER_SCALE;
        2.0 * ring.max(FEATURED_RADIUS * scale)
    }

    /// Shrinks the ring when the area is narrower than its extent.
    fn fit(&self) -> f64 {
        let extent = self.extent_for(self.viewport_width);
        if self.area_width > 0.0 && self.area_width < extent {
            self.area_width / extent
        } else {
            1.0
        }
    }

    pub fn radius(&self) -> f64 {
        self.policy.radius_for(self.viewport_width) * self.fit()
    }

    pub fn scale(&self) -> f64 {
        self.policy.scale_for(self.viewport_width) * self.fit()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn rotate_forward(&mut self) -> Transition {
        let from = self.current_offsets();
        let transition = self.carousel.rotate_forward();
        self.begin(transition, from);
        transition
    }

    pub fn rotate_backward(&mut self) -> Transition {
        let from = self.current_offsets();
        let transition = self.carousel.rotate_backward();
        self.begin(transition, from);
        transition
    }

    pub fn select(&mut self, index: usize) -> Result<Transition, OrbitError> {
        let from = self.current_offsets();
        let transition = self.carousel.select(index)?;
        self.begin(transition, from);
        Ok(transition)
    }

    fn begin(&mut self, transition: Transition, from: Vec<Offset>) {
        if transition.changed() {
            self.animation = Some(Animation {
                from,
                started_at: None,
                progress: 0.0,
            });
        }
    }

    /// Moves the running animation to `frame_time` (microseconds). Returns whether it is
    /// still running.
    pub fn advance(&mut self, frame_time: i64) -> bool {
        let duration = self.transition.as_secs_f64();
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };

        let started_at = *animation.started_at.get_or_insert(frame_time);
        let elapsed = motion::micros_to_secs(frame_time - started_at);
        animation.progress = motion::progress(elapsed, duration);

        if animation.progress >= 1.0 {
            self.animation = None;
            return false;
        }
        true
    }

    fn target_offsets(&self) -> Vec<Offset> {
        self.carousel
            .ring(self.radius())
            .into_iter()
            .map(|p| p.offset)
            .collect()
    }

    /// Ring offsets as currently painted, mid-animation included.
    pub fn current_offsets(&self) -> Vec<Offset> {
        let target = self.target_offsets();
        match &self.animation {
            Some(animation) if animation.from.len() == target.len() => {
                let t = motion::ease_in_out(animation.progress);
                animation
                    .from
                    .iter()
                    .zip(&target)
                    .map(|(from, to)| from.lerp(*to, t))
                    .collect()
            }
            _ => target,
        }
    }

    pub fn featured_geometry(&self) -> ItemGeometry {
        let scale = self.scale();
        ItemGeometry {
            index: self.carousel.active_index(),
            center: self.center,
            radius: FEATURED_RADIUS * scale,
            scale,
            is_active: true,
            variant: Variant::Featured,
        }
    }

    /// Ring geometries in paint order.
    pub fn ring_geometries(&self) -> Vec<ItemGeometry> {
        let scale = self.scale();
        let active = self.carousel.active_index();
        self.current_offsets()
            .into_iter()
            .enumerate()
            .map(|(index, offset)| {
                let hover = if self.hover_index == Some(index) {
                    HOVER_SCALE
                } else {
                    1.0
                };
                ItemGeometry {
                    index,
                    center: Point::new(self.center.x + offset.x, self.center.y + offset.y),
                    radius: PERIPHERAL_RADIUS * scale * hover,
                    scale: scale * hover,
                    is_active: index == active,
                    variant: Variant::Peripheral,
                }
            })
            .collect()
    }

    /// The ring item under `point`, topmost first. The featured circle never matches.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.ring_geometries()
            .iter()
            .rev()
            .find(|g| g.contains(point))
            .map(|g| g.index)
    }

    /// Returns whether the hovered item changed.
    pub fn update_cursor(&mut self, cursor: Option<Point>) -> bool {
        let hovered = cursor.and_then(|p| self.hit_test(p));
        let changed = hovered != self.hover_index;
        self.hover_index = hovered;
        changed
    }
}

fn load_logo(path: &Path) -> Option<Pixbuf> {
    (!path.as_os_str().is_empty())
        .then(|| Pixbuf::from_file_at_scale(path, LOGO_SIZE, LOGO_SIZE, true).ok())?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(count: usize) -> CarouselState {
        let items = (0..count)
            .map(|i| Item::new(format!("Item {i}"), "2024", None, "Role"))
            .collect();
        let mut state = CarouselState::new(
            Carousel::new(items).unwrap(),
            vec![None; count],
            RadiusPolicy::default(),
            Duration::from_millis(500),
        );
        state.set_viewport(1280.0);
        let side = state.extent_for(1280.0);
        state.resize(1000.0, side);
        state
    }

    #[test]
    fn test_click_on_peripheral_selects_it() {
        let mut state = state(5);
        let target = state.ring_geometries()[2];
        assert_eq!(state.hit_test(target.center), Some(2));

        state.select(2).unwrap();
        assert_eq!(state.carousel.active_index(), 2);
    }

    #[test]
    fn test_click_on_center_hits_nothing() {
        let state = state(5);
        assert_eq!(state.hit_test(state.center), None);
        assert_eq!(state.hit_test(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_active_item_sits_at_top_of_ring() {
        let state = state(5);
        let top = state.ring_geometries()[0];
        assert!(top.is_active);
        assert!((top.center.x - state.center.x).abs() < 1e-9);
        assert!((top.center.y - (state.center.y - 270.0)).abs() < 1e-9);
    }

    #[test]
    fn test_ring_fits_inside_area() {
        for width in [1280.0, 700.0, 660.0, 500.0] {
            let mut state = state(5);
            state.set_viewport(width);
            let area_width = width.min(1000.0);
            let area_height = state.extent_for(width).ceil();
            state.resize(area_width, area_height);

            for hovered in 0..5 {
                state.hover_index = Some(hovered);
                let mut all = state.ring_geometries();
                all.push(state.featured_geometry());
                for g in all {
                    let eps = 1e-9;
                    assert!(g.center.x - g.radius >= -eps, "width {width}: {g:?}");
                    assert!(g.center.y - g.radius >= -eps, "width {width}: {g:?}");
                    assert!(g.center.x + g.radius <= area_width + eps, "width {width}: {g:?}");
                    assert!(g.center.y + g.radius <= area_height + eps, "width {width}: {g:?}");
                }
            }
        }
    }

    #[test]
    fn test_narrow_area_scales_ring_down() {
        let mut state = state(5);
        state.set_viewport(700.0);
        state.resize(700.0, 708.0);
        assert!(state.radius() < 270.0);
        let outer = state.radius() + PERIPHERAL_RADIUS * state.scale() * HOVER_SCALE;
        assert!((outer - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_compact_viewport_shrinks_ring() {
        let mut state = state(5);
        state.set_viewport(500.0);
        assert_eq!(state.radius(), 170.0);
        let featured = state.featured_geometry();
        assert!((featured.radius - FEATURED_RADIUS * 170.0 / 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_animation_eases_to_target() {
        let mut state = state(5);
        let before = state.current_offsets();
        state.rotate_forward();
        assert!(state.is_animating());

        // First frame pins the start time.
        assert!(state.advance(1_000_000));
        assert_eq!(state.current_offsets(), before);

        assert!(state.advance(1_250_000));
        let mid = state.current_offsets();
        assert_ne!(mid, before);

        assert!(!state.advance(1_500_000));
        assert!(!state.is_animating());
        assert_eq!(state.current_offsets(), state.target_offsets());
    }

    #[test]
    fn test_noop_selection_does_not_animate() {
        let mut state = state(5);
        state.select(0).unwrap();
        assert!(!state.is_animating());
        assert!(!state.advance(10));
    }

    #[test]
    fn test_out_of_range_select_is_refused() {
        let mut state = state(3);
        assert!(state.select(3).is_err());
        assert!(!state.is_animating());
        assert_eq!(state.carousel.active_index(), 0);
    }

    #[test]
    fn test_hover_tracks_cursor() {
        let mut state = state(5);
        let target = state.ring_geometries()[3].center;
        assert!(state.update_cursor(Some(target)));
        assert_eq!(state.hover_index, Some(3));
        assert!(!state.update_cursor(Some(target)));
        assert!(state.update_cursor(None));
        assert_eq!(state.hover_index, None);
    }
}
