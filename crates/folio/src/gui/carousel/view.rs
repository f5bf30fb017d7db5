use super::model::{CarouselState, ItemGeometry};
use super::LOGO_SIZE;
use crate::gui::theme::{rgba, ThemeColors};
use cairo::{Context, FontSlant, FontWeight, LinearGradient};
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use orbit::{Item, Variant};
use palette::Srgba;
use std::f64::consts::PI;

/// Share of a circle's diameter that text may use.
const TEXT_WIDTH_FACTOR: f64 = 0.8;
const LINE_SPACING: f64 = 1.35;

struct TextLine {
    text: String,
    size: f64,
    weight: FontWeight,
    color: Srgba<f64>,
}

struct ItemRenderer<'a> {
    item: &'a Item,
    logo: Option<&'a Pixbuf>,
    geometry: &'a ItemGeometry,
}

impl<'a> ItemRenderer<'a> {
    fn new(item: &'a Item, logo: Option<&'a Pixbuf>, geometry: &'a ItemGeometry) -> Self {
        Self {
            item,
            logo,
            geometry,
        }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_circle(cr, colors)?;
        match self.geometry.variant {
            Variant::Featured => self.draw_featured(cr, colors),
            Variant::Peripheral => self.draw_peripheral(cr, colors),
        }
    }

    fn draw_circle(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let g = self.geometry;
        cr.new_path();
        cr.arc(g.center.x, g.center.y, g.radius, 0.0, 2.0 * PI);

        if g.variant == Variant::Peripheral && g.is_active {
            let gradient = LinearGradient::new(
                g.center.x - g.radius,
                g.center.y,
                g.center.x + g.radius,
                g.center.y,
            );
            let (r, gr, b, a) = rgba(colors.active_start);
            gradient.add_color_stop_rgba(0.0, r, gr, b, a);
            let (r, gr, b, a) = rgba(colors.active_end);
            gradient.add_color_stop_rgba(1.0, r, gr, b, a);
            cr.set_source(&gradient)?;
        } else {
            let color = match g.variant {
                Variant::Featured => colors.featured,
                Variant::Peripheral => colors.peripheral,
            };
            let (r, gr, b, a) = rgba(color);
            cr.set_source_rgba(r, gr, b, a);
        }
        cr.fill()
    }

    fn draw_featured(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let s = self.geometry.scale;
        let max_width = self.geometry.radius * 2.0 * TEXT_WIDTH_FACTOR;

        let mut lines = Vec::new();
        push_wrapped(
            cr,
            &mut lines,
            self.item.title.as_str(),
            20.0 * s,
            FontWeight::Bold,
            colors.title,
            max_width,
        )?;
        push_wrapped(
            cr,
            &mut lines,
            self.item.role.as_str(),
            14.0 * s,
            FontWeight::Normal,
            colors.label,
            max_width,
        )?;
        push_wrapped(
            cr,
            &mut lines,
            self.item.date.as_str(),
            13.0 * s,
            FontWeight::Normal,
            colors.muted,
            max_width,
        )?;
        if let Some(description) = &self.item.description {
            push_wrapped(
                cr,
                &mut lines,
                description.as_str(),
                13.0 * s,
                FontWeight::Normal,
                colors.muted,
                max_width,
            )?;
        }

        let logo_block = if self.logo.is_some() {
            (LOGO_SIZE as f64 + 16.0) * s
        } else {
            0.0
        };
        let text_height: f64 = lines.iter().map(|l| l.size * LINE_SPACING).sum();
        let top = self.geometry.center.y - (logo_block + text_height) / 2.0;

        if let Some(logo) = self.logo {
            self.draw_logo(cr, logo, top, colors)?;
        }
        draw_lines(cr, &lines, self.geometry.center.x, top + logo_block)
    }

    fn draw_peripheral(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let s = self.geometry.scale;
        let max_width = self.geometry.radius * 2.0 * TEXT_WIDTH_FACTOR;

        let mut lines = Vec::new();
        push_wrapped(
            cr,
            &mut lines,
            self.item.title.as_str(),
            14.0 * s,
            FontWeight::Bold,
            colors.title,
            max_width,
        )?;
        push_wrapped(
            cr,
            &mut lines,
            self.item.date.as_str(),
            12.0 * s,
            FontWeight::Normal,
            colors.label,
            max_width,
        )?;

        let text_height: f64 = lines.iter().map(|l| l.size * LINE_SPACING).sum();
        draw_lines(
            cr,
            &lines,
            self.geometry.center.x,
            self.geometry.center.y - text_height / 2.0,
        )
    }

    fn draw_logo(
        &self,
        cr: &Context,
        pixbuf: &Pixbuf,
        top: f64,
        colors: &ThemeColors,
    ) -> Result<(), cairo::Error> {
        let s = self.geometry.scale;
        let side = LOGO_SIZE as f64 * s;
        let x = self.geometry.center.x - side / 2.0;

        let (r, g, b, a) = rgba(colors.logo_backdrop);
        cr.set_source_rgba(r, g, b, a);
        cr.rectangle(x, top, side, side);
        cr.fill()?;

        // fit logo inside the backdrop with a small margin
        let inner = side * 0.75;
        let icon_scale = inner / pixbuf.width().max(pixbuf.height()).max(1) as f64;
        let (iw, ih) = (
            pixbuf.width() as f64 * icon_scale,
            pixbuf.height() as f64 * icon_scale,
        );

        cr.save()?;
        cr.translate(self.geometry.center.x - iw / 2.0, top + (side - ih) / 2.0);
        cr.scale(icon_scale, icon_scale);
        cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
        cr.paint()?;
        cr.restore()
    }
}

fn select_font(cr: &Context, size: f64, weight: FontWeight) {
    cr.select_font_face("Sans", FontSlant::Normal, weight);
    cr.set_font_size(size);
}

fn text_width(cr: &Context, text: &str) -> Result<f64, cairo::Error> {
    Ok(cr.text_extents(text)?.x_advance())
}

/// Greedy word wrap against the current font.
fn wrap(cr: &Context, text: &str, max_width: f64) -> Result<Vec<String>, cairo::Error> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if !current.is_empty() && text_width(cr, &candidate)? > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}

fn push_wrapped(
    cr: &Context,
    lines: &mut Vec<TextLine>,
    text: &str,
    size: f64,
    weight: FontWeight,
    color: Srgba<f64>,
    max_width: f64,
) -> Result<(), cairo::Error> {
    select_font(cr, size, weight);
    lines.extend(wrap(cr, text, max_width)?.into_iter().map(|text| TextLine {
        text,
        size,
        weight,
        color,
    }));
    Ok(())
}

fn draw_lines(
    cr: &Context,
    lines: &[TextLine],
    center_x: f64,
    top: f64,
) -> Result<(), cairo::Error> {
    let mut y = top;
    for line in lines {
        let height = line.size * LINE_SPACING;
        select_font(cr, line.size, line.weight);
        let (r, g, b, a) = rgba(line.color);
        cr.set_source_rgba(r, g, b, a);

        let width = text_width(cr, &line.text)?;
        // baseline sits a little below the middle of the line box
        cr.move_to(center_x - width / 2.0, y + height / 2.0 + line.size * 0.35);
        cr.show_text(&line.text)?;
        y += height;
    }
    Ok(())
}

pub fn draw(
    cr: &Context,
    state: &CarouselState,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let featured = state.featured_geometry();
    if let Some(item) = state.item(featured.index) {
        ItemRenderer::new(item, state.logo(featured.index), &featured).draw(cr, colors)?;
    }

    for geometry in state.ring_geometries() {
        if let Some(item) = state.item(geometry.index) {
            ItemRenderer::new(item, None, &geometry).draw(cr, colors)?;
        }
    }
    Ok(())
}
