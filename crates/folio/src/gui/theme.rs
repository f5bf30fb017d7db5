use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub featured: Srgba<f64>,
    pub peripheral: Srgba<f64>,
    pub active_start: Srgba<f64>,
    pub active_end: Srgba<f64>,
    pub title: Srgba<f64>,
    pub label: Srgba<f64>,
    pub muted: Srgba<f64>,
    pub logo_backdrop: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            featured: Self::lookup_color(
                context,
                "folio_featured_color",
                Srgba::new(0.094, 0.094, 0.106, 0.9),
                None,
            ),
            peripheral: Self::lookup_color(
                context,
                "folio_peripheral_color",
                Srgba::new(0.153, 0.153, 0.165, 0.9),
                None,
            ),
            active_start: Self::lookup_color(
                context,
                "folio_active_start_color",
                Srgba::new(0.090, 0.145, 0.329, 1.0),
                None,
            ),
            active_end: Self::lookup_color(
                context,
                "folio_active_end_color",
                Srgba::new(0.216, 0.188, 0.639, 1.0),
                None,
            ),
            title: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                Some(1.0),
            ),
            label: Srgba::new(0.820, 0.835, 0.859, 1.0),
            muted: Srgba::new(0.612, 0.639, 0.686, 1.0),
            logo_backdrop: Srgba::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

const CSS: &str = "
@define-color folio_featured_color rgba(24, 24, 27, 0.9);
@define-color folio_peripheral_color rgba(39, 39, 42, 0.9);
@define-color folio_active_start_color #172554;
@define-color folio_active_end_color #3730a3;

.folio-window {
    background-color: black;
    color: white;
}

.folio-hero-name {
    font-size: 64px;
    font-weight: bold;
}

.folio-tagline {
    font-size: 20px;
    color: #d1d5db;
}

.folio-muted {
    color: #9ca3af;
}

.folio-highlight {
    color: #60a5fa;
}

.folio-heading {
    font-size: 36px;
    font-weight: bold;
}

.folio-resume {
    border: 1px dashed #4b5563;
    border-radius: 0;
}

.folio-nav {
    background-color: rgba(0, 0, 0, 0.8);
    padding: 8px 16px;
}

.folio-card {
    border: 1px solid #1f2937;
    border-radius: 16px;
    background-color: black;
}

.folio-card-body {
    padding: 16px;
    background-color: rgba(30, 39, 97, 0.8);
    border-radius: 0 0 16px 16px;
}

.folio-card-title {
    font-size: 20px;
    font-weight: 600;
}

.folio-image-placeholder {
    background-color: #18181b;
    border-radius: 16px 16px 0 0;
}

.folio-carousel-button {
    background-color: rgba(39, 39, 42, 0.8);
    color: #e4e4e7;
    border-radius: 9999px;
}

.folio-timeline-entry {
    background-color: rgba(24, 24, 27, 0.5);
    border: 1px solid #1f2937;
    border-radius: 8px;
    padding: 16px;
}

.folio-timeline-dot {
    color: #3b82f6;
}

.folio-timeline-line {
    background-color: #374151;
    min-width: 2px;
}
";

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    provider.load_from_data(CSS);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

/// Splits a color into cairo's component order.
pub fn rgba(color: Srgba<f64>) -> (f64, f64, f64, f64) {
    color.into_components()
}
