use clap::Parser;
use folio::config::{self, Config};
use folio::gui::app::{AppInit, AppModel};
use folio::gui::carousel::CarouselState;
use folio::gui::sections::Section;
use folio::sys::runtime;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    /// Content file to show (defaults to the per-user config file)
    #[arg(short = 'c', long)]
    content: Option<PathBuf>,

    /// Section to scroll to once the page has loaded
    #[arg(short = 's', long)]
    section: Option<Section>,

    /// Write the bundled content to the content file and exit
    #[arg(long)]
    init: bool,

    /// Print the carousel placements for every rotation step and exit
    #[arg(long)]
    dump_layout: bool,

    /// Viewport width used by --dump-layout
    #[arg(long, default_value_t = 1280.0)]
    width: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.content {
        Some(path) => std::path::absolute(path)?,
        None => config::get_config_path()?,
    };

    if cli.init {
        config::write_default_config(&config_path)?;
        println!("{}", config_path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);

    if cli.dump_layout {
        return dump_layout(&config, cli.width);
    }

    let carousel = CarouselState::from_config(&config)?;
    log::info!(
        "Showing {} experiences and {} projects",
        config.experiences.items.len(),
        config.projects.items.len()
    );

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(
        config_path.clone(),
        config.layout.loading_delay(),
        tx,
    );

    let app = RelmApp::new("org.folio.folio").with_args(Vec::new());

    app.run::<AppModel>(AppInit {
        config,
        config_path,
        carousel,
        start_section: cli.section,
        events: rx,
    });
    Ok(())
}

fn dump_layout(config: &Config, width: f64) -> anyhow::Result<()> {
    let mut carousel = config.carousel()?;
    let radius = config.layout.radius_policy().radius_for(width);
    println!("width {width}, radius {radius}");

    for _ in 0..carousel.len() {
        let layout = carousel.layout(radius);
        println!(
            "{} #{} {}",
            layout.featured.variant, layout.featured.index, layout.featured.item.title
        );
        for p in &layout.ring {
            println!(
                "  {} #{} slot {} ({:8.2}, {:8.2}){} {}",
                p.variant,
                p.index,
                p.slot,
                p.offset.x,
                p.offset.y,
                if p.is_active { " *" } else { "  " },
                p.item.title
            );
        }
        carousel.rotate_forward();
    }
    Ok(())
}
