use super::{Section, muted};
use crate::config::{LinkConfig, LinkKind, Profile};
use crate::gui::motion::{self, BOUNCE_AMPLITUDE};
use gtk::prelude::*;
use gtk4 as gtk;
use std::rc::Rc;

pub type Navigate = Rc<dyn Fn(Section)>;

/// Fills `container` with the banner: in-page nav, name, tagline, links and the scroll hint.
pub fn populate(
    container: &gtk::Box,
    profile: &Profile,
    links: &[LinkConfig],
    navigate: Navigate,
) {
    super::clear(container);
    container.set_valign(gtk::Align::Center);
    container.set_spacing(24);

    container.append(&nav_row(links, &navigate));
    container.append(&name_row(profile));

    let tagline = gtk::Label::new(Some(&profile.tagline));
    tagline.add_css_class("folio-tagline");
    container.append(&tagline);

    if !profile.status.is_empty() {
        container.append(&status_row(profile));
    }

    let socials: Vec<_> = links.iter().filter(|l| l.kind != LinkKind::Resume).collect();
    if !socials.is_empty() {
        let row = gtk::Box::new(gtk::Orientation::Horizontal, 24);
        row.set_halign(gtk::Align::Center);
        for link in socials {
            row.append(&link_button(link));
        }
        container.append(&row);
    }

    container.append(&scroll_hint(navigate));
}

fn nav_row(links: &[LinkConfig], navigate: &Navigate) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 32);
    row.set_halign(gtk::Align::Center);

    for section in [Section::Projects, Section::Experiences] {
        let button = gtk::Button::with_label(&section.to_string());
        button.add_css_class("flat");
        button.add_css_class("folio-muted");
        let navigate = navigate.clone();
        button.connect_clicked(move |_| navigate(section));
        row.append(&button);
    }

    if let Some(resume) = links.iter().find(|l| l.kind == LinkKind::Resume) {
        let button = gtk::LinkButton::with_label(&resume.uri, &resume.label());
        button.add_css_class("folio-resume");
        row.append(&button);
    }
    row
}

fn name_row(profile: &Profile) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 16);
    row.set_halign(gtk::Align::Center);

    let name = gtk::Label::new(Some(&profile.name));
    name.add_css_class("folio-hero-name");
    row.append(&name);

    if let Some(avatar) = profile.avatar.as_ref().filter(|p| p.exists()) {
        let picture = gtk::Picture::for_filename(avatar);
        picture.set_size_request(64, 64);
        picture.set_can_shrink(true);
        row.append(&picture);
    }
    row
}

fn status_row(profile: &Profile) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    row.set_halign(gtk::Align::Center);
    row.append(&muted(&profile.status));

    if let Some(highlight) = &profile.status_highlight {
        let label = gtk::Label::new(Some(highlight));
        label.add_css_class("folio-highlight");
        row.append(&label);
    }
    row
}

fn link_button(link: &LinkConfig) -> gtk::LinkButton {
    let button = gtk::LinkButton::new(&link.uri);
    let content = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    if let Some(icon) = link.kind.icon_name() {
        content.append(&gtk::Image::from_icon_name(icon));
    }
    content.append(&gtk::Label::new(Some(&link.label())));
    button.set_child(Some(&content));
    button.set_tooltip_text(Some(&link.uri));
    button
}

fn scroll_hint(navigate: Navigate) -> gtk::Button {
    let button = gtk::Button::from_icon_name("go-down-symbolic");
    button.add_css_class("flat");
    button.add_css_class("circular");
    button.set_halign(gtk::Align::Center);
    button.set_margin_top(48);
    button.connect_clicked(move |_| navigate(Section::Projects));

    let amplitude = BOUNCE_AMPLITUDE;
    let start = std::cell::Cell::new(None::<i64>);
    button.add_tick_callback(move |button, clock| {
        let now = clock.frame_time();
        let started = start.get().unwrap_or(now);
        start.set(Some(started));

        let lift = motion::bounce_offset(motion::micros_to_secs(now - started), amplitude);
        // keep the total height fixed so only the arrow moves
        button.set_margin_bottom(lift.round() as i32);
        button.set_margin_top(48 + (amplitude - lift).round() as i32);
        glib::ControlFlow::Continue
    });
    button
}
