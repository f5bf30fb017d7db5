use crate::config::ExperienceConfig;
use crate::gui::motion;
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::Cell;

/// Horizontal distance an entry slides while fading in.
const SLIDE: f64 = 20.0;

/// Narrow-viewport replacement for the carousel: every experience in order on a vertical line.
pub fn populate(container: &gtk::Box, items: &[ExperienceConfig]) {
    super::clear(container);

    let line = gtk::Box::new(gtk::Orientation::Vertical, 0);
    line.add_css_class("folio-timeline-line");
    line.set_margin_start(8);
    line.set_margin_top(12);
    line.set_margin_bottom(12);

    let entries = gtk::Box::new(gtk::Orientation::Vertical, 32);
    entries.set_hexpand(true);
    for (index, experience) in items.iter().enumerate() {
        entries.append(&entry(index, experience));
    }

    container.append(&line);
    container.append(&entries);
}

fn entry(index: usize, experience: &ExperienceConfig) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 12);

    let dot = gtk::Label::new(Some("●"));
    dot.add_css_class("folio-timeline-dot");
    dot.set_valign(gtk::Align::Start);
    dot.set_margin_top(8);
    row.append(&dot);

    let card = gtk::Box::new(gtk::Orientation::Vertical, 4);
    card.add_css_class("folio-timeline-entry");
    card.set_hexpand(true);

    let date = gtk::Label::new(Some(&experience.date));
    date.add_css_class("folio-muted");
    date.set_halign(gtk::Align::Start);
    card.append(&date);

    let role = gtk::Label::new(Some(&experience.role));
    role.add_css_class("folio-card-title");
    role.set_halign(gtk::Align::Start);
    card.append(&role);

    let title = gtk::Label::new(Some(&experience.title));
    title.set_halign(gtk::Align::Start);
    card.append(&title);

    if let Some(description) = &experience.description {
        let label = super::muted(description);
        label.set_halign(gtk::Align::Start);
        label.set_xalign(0.0);
        card.append(&label);
    }
    row.append(&card);

    slide_in(&row, index);
    row
}

fn slide_in(row: &gtk::Box, index: usize) {
    row.set_opacity(0.0);
    row.set_margin_start(SLIDE as i32);
    let start = Cell::new(None::<i64>);
    row.add_tick_callback(move |row, clock| {
        let now = clock.frame_time();
        let started = start.get().unwrap_or(now);
        start.set(Some(started));

        let p = motion::stagger_progress(motion::micros_to_secs(now - started), index);
        row.set_opacity(p);
        row.set_margin_start(motion::slide_offset(p, SLIDE).round() as i32);

        if p >= 1.0 {
            glib::ControlFlow::Break
        } else {
            glib::ControlFlow::Continue
        }
    });
}
