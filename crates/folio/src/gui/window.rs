use crate::gui::motion;
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::Cell;

pub const DEFAULT_WIDTH: i32 = 1280;
pub const DEFAULT_HEIGHT: i32 = 900;
pub const STACK_TRANSITION_MS: u32 = 300;
/// The nav bar shows once the hero's bottom edge is above this line.
pub const NAV_TRIGGER: f64 = 500.0;
const SCROLL_DURATION: f64 = 0.45;

/// Vertical position of `widget` inside `content`.
pub fn offset_in(
    widget: &impl IsA<gtk::Widget>,
    content: &impl IsA<gtk::Widget>,
) -> Option<f64> {
    widget
        .translate_coordinates(content, 0.0, 0.0)
        .map(|(_, y)| y)
}

/// Bottom edge of `widget` relative to the top of the visible area.
pub fn visible_bottom(
    widget: &impl IsA<gtk::Widget>,
    content: &impl IsA<gtk::Widget>,
    scroller: &gtk::ScrolledWindow,
) -> Option<f64> {
    let top = offset_in(widget, content)?;
    Some(top + widget.height() as f64 - scroller.vadjustment().value())
}

pub fn nav_visible(hero_bottom: f64) -> bool {
    hero_bottom < NAV_TRIGGER
}

/// Eases the scroller's vertical position to `target`.
pub fn smooth_scroll(scroller: &gtk::ScrolledWindow, target: f64) {
    let adjustment = scroller.vadjustment();
    let max = (adjustment.upper() - adjustment.page_size()).max(adjustment.lower());
    let target = target.clamp(adjustment.lower(), max);
    let from = adjustment.value();

    let start = Cell::new(None::<i64>);
    scroller.add_tick_callback(move |_, clock| {
        let now = clock.frame_time();
        let started = start.get().unwrap_or(now);
        start.set(Some(started));

        let p = motion::progress(motion::micros_to_secs(now - started), SCROLL_DURATION);
        adjustment.set_value(from + (target - from) * motion::ease_in_out(p));

        if p >= 1.0 {
            glib::ControlFlow::Break
        } else {
            glib::ControlFlow::Continue
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_trigger() {
        assert!(!nav_visible(900.0));
        assert!(!nav_visible(NAV_TRIGGER));
        assert!(nav_visible(499.0));
        assert!(nav_visible(-20.0));
    }
}
