use super::{heading, muted};
use crate::config::{ProjectConfig, ProjectsSection};
use gtk::prelude::*;
use gtk4 as gtk;

const IMAGE_RATIO: f32 = 16.0 / 7.0;

pub fn populate(container: &gtk::Box, section: &ProjectsSection) {
    super::clear(container);
    container.set_spacing(16);

    let title = heading(&section.heading);
    title.set_halign(gtk::Align::Start);
    container.append(&title);

    let intro = muted(&section.intro);
    intro.set_halign(gtk::Align::Start);
    intro.set_margin_bottom(32);
    container.append(&intro);

    let grid = gtk::FlowBox::new();
    grid.set_homogeneous(true);
    grid.set_max_children_per_line(2);
    grid.set_min_children_per_line(1);
    grid.set_column_spacing(24);
    grid.set_row_spacing(24);
    grid.set_selection_mode(gtk::SelectionMode::None);

    for project in &section.items {
        grid.insert(&card(project), -1);
    }
    container.append(&grid);
}

fn card(project: &ProjectConfig) -> gtk::Box {
    let card = gtk::Box::new(gtk::Orientation::Vertical, 0);
    card.add_css_class("folio-card");
    card.set_overflow(gtk::Overflow::Hidden);

    let frame = gtk::AspectFrame::new(0.5, 0.5, IMAGE_RATIO, false);
    if project.image.exists() {
        let picture = gtk::Picture::for_filename(&project.image);
        picture.set_can_shrink(true);
        picture.set_alternative_text(Some(&project.alt));
        frame.set_child(Some(&picture));
    } else {
        let placeholder = gtk::Box::new(gtk::Orientation::Vertical, 0);
        placeholder.add_css_class("folio-image-placeholder");
        placeholder.set_size_request(-1, 160);
        placeholder.set_tooltip_text(Some(&project.alt));
        frame.set_child(Some(&placeholder));
    }
    card.append(&frame);

    let body = gtk::Box::new(gtk::Orientation::Vertical, 4);
    body.add_css_class("folio-card-body");
    body.set_vexpand(true);

    let title = gtk::Label::new(Some(&project.title));
    title.add_css_class("folio-card-title");
    title.set_halign(gtk::Align::Start);
    body.append(&title);

    let description = muted(&project.description);
    description.set_halign(gtk::Align::Start);
    description.set_xalign(0.0);
    body.append(&description);

    card.append(&body);
    card
}
