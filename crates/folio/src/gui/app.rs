use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::carousel::{self, CarouselState, Point};
use crate::gui::sections::{self, Section, hero, projects, timeline};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

pub struct AppInit {
    pub config: Config,
    pub config_path: PathBuf,
    pub carousel: CarouselState,
    pub start_section: Option<Section>,
    pub events: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    pub config: Config,
    pub config_path: PathBuf,
    pub carousel: Rc<RefCell<CarouselState>>,
    pub loaded: bool,
    pub nav_visible: bool,
    pending_section: Option<Section>,
    navigate: hero::Navigate,
    pub scroller: gtk::ScrolledWindow,
    pub content: gtk::Box,
    pub hero: gtk::Box,
    pub projects: gtk::Box,
    pub experiences: gtk::Box,
    pub experiences_header: gtk::Box,
    pub carousel_overlay: gtk::Overlay,
    pub drawing_area: gtk::DrawingArea,
    pub timeline: gtk::Box,
    pub nav: gtk::Revealer,
}

#[derive(Debug)]
pub enum AppMsg {
    ContentReady,
    ContentReload,
    Navigate(Section),
    Scrolled,
    Resize(f64),
    RotateForward,
    RotateBackward,
    CarouselClick(Point),
    CarouselHover(Option<Point>),
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ContentReady => AppMsg::ContentReady,
            AppEvent::ContentReload => AppMsg::ContentReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            #[watch]
            set_title: Some(model.config.profile.name.as_str()),
            set_default_width: window::DEFAULT_WIDTH,
            set_default_height: window::DEFAULT_HEIGHT,
            add_css_class: "folio-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Left {
                        sender.input(AppMsg::RotateForward);
                        return glib::Propagation::Stop;
                    }
                    if key == gtk::gdk::Key::Right {
                        sender.input(AppMsg::RotateBackward);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "overlay"]
            gtk::Overlay {
                #[name = "stack"]
                gtk::Stack {
                    set_transition_type: gtk::StackTransitionType::Crossfade,
                    set_transition_duration: window::STACK_TRANSITION_MS,
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            config,
            config_path,
            carousel,
            start_section,
            events,
        } = init;

        theme::load_css();

        let navigate: hero::Navigate = {
            let sender = sender.clone();
            Rc::new(move |section: Section| sender.input(AppMsg::Navigate(section)))
        };

        let hero = gtk::Box::new(gtk::Orientation::Vertical, 0);
        hero.set_size_request(-1, window::DEFAULT_HEIGHT);

        let projects = gtk::Box::new(gtk::Orientation::Vertical, 0);
        set_section_margins(&projects, 80);

        let experiences_header = gtk::Box::new(gtk::Orientation::Vertical, 16);
        experiences_header.set_margin_bottom(64);

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_content_height(area_height(&carousel, window::DEFAULT_WIDTH as f64));

        let carousel_overlay = gtk::Overlay::new();
        carousel_overlay.set_child(Some(&drawing_area));
        carousel_overlay.add_overlay(&rotate_button(
            "go-previous-symbolic",
            gtk::Align::Start,
            sender.clone(),
            || AppMsg::RotateForward,
        ));
        carousel_overlay.add_overlay(&rotate_button(
            "go-next-symbolic",
            gtk::Align::End,
            sender.clone(),
            || AppMsg::RotateBackward,
        ));

        let timeline = gtk::Box::new(gtk::Orientation::Horizontal, 16);
        timeline.set_visible(false);

        let experiences = gtk::Box::new(gtk::Orientation::Vertical, 0);
        set_section_margins(&experiences, 128);
        experiences.append(&experiences_header);
        experiences.append(&carousel_overlay);
        experiences.append(&timeline);

        let content = gtk::Box::new(gtk::Orientation::Vertical, 0);
        content.set_margin_start(16);
        content.set_margin_end(16);
        content.append(&hero);
        content.append(&projects);
        content.append(&experiences);

        let scroller = gtk::ScrolledWindow::new();
        scroller.set_hscrollbar_policy(gtk::PolicyType::Never);
        scroller.set_vexpand(true);
        scroller.set_child(Some(&content));

        let nav = nav_bar(&navigate);

        let model = AppModel {
            config,
            config_path,
            carousel: Rc::new(RefCell::new(carousel)),
            loaded: false,
            nav_visible: false,
            pending_section: start_section,
            navigate,
            scroller,
            content,
            hero,
            projects,
            experiences,
            experiences_header,
            carousel_overlay,
            drawing_area,
            timeline,
            nav,
        };

        let widgets = view_output!();

        widgets.stack.add_named(&loading_page(), Some("loading"));
        widgets.stack.add_named(&model.scroller, Some("content"));
        widgets.stack.set_visible_child_name("loading");
        widgets.overlay.add_overlay(&model.nav);

        model.populate();
        model.connect_carousel(&sender);

        {
            let sender = sender.clone();
            model
                .scroller
                .vadjustment()
                .connect_value_changed(move |_| sender.input(AppMsg::Scrolled));
        }
        {
            let sender = sender.clone();
            model
                .scroller
                .hadjustment()
                .connect_page_size_notify(move |adj| {
                    sender.input(AppMsg::Resize(adj.page_size()));
                });
        }

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = events.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::ContentReady => {
                if self.loaded {
                    return;
                }
                self.loaded = true;
                if let Some(stack) = self.scroller.parent().and_downcast::<gtk::Stack>() {
                    stack.set_visible_child_name("content");
                }
                if let Some(section) = self.pending_section.take() {
                    // wait for the cross-fade so the page has been laid out
                    glib::timeout_add_local_once(
                        Duration::from_millis(window::STACK_TRANSITION_MS as u64),
                        move || sender.input(AppMsg::Navigate(section)),
                    );
                }
            }
            AppMsg::ContentReload => {
                let reloaded = config::load_config(&self.config_path)
                    .and_then(|c| Ok((CarouselState::from_config(&c)?, c)));
                match reloaded {
                    Ok((state, new_config)) => {
                        self.carousel.borrow_mut().replace(state);
                        self.config = new_config;
                        self.populate();
                        self.apply_viewport(self.scroller.hadjustment().page_size());
                        log::info!("Content reloaded");
                    }
                    Err(e) => log::error!("Failed to reload content: {}", e),
                }
            }
            AppMsg::Navigate(section) => self.scroll_to(section),
            AppMsg::Scrolled => {
                let visible = window::visible_bottom(&self.hero, &self.content, &self.scroller)
                    .is_some_and(window::nav_visible);
                if visible != self.nav_visible {
                    self.nav_visible = visible;
                    self.nav.set_reveal_child(visible);
                    self.nav.set_can_target(visible);
                }
            }
            AppMsg::Resize(width) => self.apply_viewport(width),
            AppMsg::RotateForward => {
                let transition = self.carousel.borrow_mut().rotate_forward();
                if transition.changed() {
                    self.animate_carousel();
                }
            }
            AppMsg::RotateBackward => {
                let transition = self.carousel.borrow_mut().rotate_backward();
                if transition.changed() {
                    self.animate_carousel();
                }
            }
            AppMsg::CarouselClick(point) => {
                let hit = self.carousel.borrow().hit_test(point);
                let Some(index) = hit else {
                    return;
                };
                let selected = self.carousel.borrow_mut().select(index);
                match selected {
                    Ok(transition) if transition.changed() => self.animate_carousel(),
                    Ok(_) => {}
                    Err(e) => log::error!("Rejected carousel selection: {}", e),
                }
            }
            AppMsg::CarouselHover(cursor) => {
                if self.carousel.borrow_mut().update_cursor(cursor) {
                    let hovering = self.carousel.borrow().hover_index.is_some();
                    self.drawing_area
                        .set_cursor_from_name(hovering.then_some("pointer"));
                    self.drawing_area.queue_draw();
                }
            }
        }
    }
}

impl AppModel {
    fn populate(&self) {
        hero::populate(
            &self.hero,
            &self.config.profile,
            &self.config.links,
            self.navigate.clone(),
        );
        projects::populate(&self.projects, &self.config.projects);

        sections::clear(&self.experiences_header);
        self.experiences_header
            .append(&sections::heading(&self.config.experiences.heading));
        self.experiences_header
            .append(&sections::muted(&self.config.experiences.intro));

        timeline::populate(&self.timeline, &self.config.experiences.items);
        self.drawing_area.queue_draw();
    }

    fn connect_carousel(&self, sender: &ComponentSender<Self>) {
        let state_draw = self.carousel.clone();
        self.drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let colors = ThemeColors::from_context(&drawing_area.style_context());
                state_draw
                    .borrow_mut()
                    .resize(width as f64, height as f64);
                if let Err(e) = carousel::draw(cr, &state_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let click = gtk::GestureClick::new();
        {
            let sender = sender.clone();
            click.connect_released(move |_, _, x, y| {
                sender.input(AppMsg::CarouselClick(Point::new(x, y)));
            });
        }
        self.drawing_area.add_controller(click);

        let motion = gtk::EventControllerMotion::new();
        {
            let sender = sender.clone();
            motion.connect_motion(move |_, x, y| {
                sender.input(AppMsg::CarouselHover(Some(Point::new(x, y))));
            });
        }
        {
            let sender = sender.clone();
            motion.connect_leave(move |_| sender.input(AppMsg::CarouselHover(None)));
        }
        self.drawing_area.add_controller(motion);
    }

    fn apply_viewport(&self, width: f64) {
        if width <= 0.0 {
            return;
        }
        self.carousel.borrow_mut().set_viewport(width);

        let use_timeline = self.config.layout.use_timeline(width);
        self.carousel_overlay.set_visible(!use_timeline);
        self.timeline.set_visible(use_timeline);

        self.drawing_area
            .set_content_height(area_height(&self.carousel.borrow(), width));
        self.drawing_area.queue_draw();
    }

    fn animate_carousel(&self) {
        let state = self.carousel.clone();
        self.drawing_area.add_tick_callback(move |area, clock| {
            let running = state.borrow_mut().advance(clock.frame_time());
            area.queue_draw();
            if running {
                glib::ControlFlow::Continue
            } else {
                glib::ControlFlow::Break
            }
        });
    }

    fn scroll_to(&self, section: Section) {
        let target = match section {
            Section::Home => Some(0.0),
            Section::Projects => window::offset_in(&self.projects, &self.content),
            Section::Experiences => window::offset_in(&self.experiences, &self.content),
        };
        match target {
            Some(y) => window::smooth_scroll(&self.scroller, y),
            None => log::error!("Cannot locate the {} section", section),
        }
    }
}

fn area_height(state: &CarouselState, viewport_width: f64) -> i32 {
    state.extent_for(viewport_width).ceil() as i32
}

fn set_section_margins(section: &gtk::Box, vertical: i32) {
    section.set_margin_top(vertical);
    section.set_margin_bottom(vertical);
    section.set_halign(gtk::Align::Fill);
}

fn rotate_button(
    icon: &str,
    halign: gtk::Align,
    sender: ComponentSender<AppModel>,
    msg: impl Fn() -> AppMsg + 'static,
) -> gtk::Button {
    let button = gtk::Button::from_icon_name(icon);
    button.add_css_class("folio-carousel-button");
    button.add_css_class("circular");
    button.set_halign(halign);
    button.set_valign(gtk::Align::Center);
    button.set_margin_start(8);
    button.set_margin_end(8);
    button.connect_clicked(move |_| sender.input(msg()));
    button
}

fn loading_page() -> gtk::Box {
    let page = gtk::Box::new(gtk::Orientation::Vertical, 12);
    page.set_valign(gtk::Align::Center);
    page.set_halign(gtk::Align::Center);

    let spinner = gtk::Spinner::new();
    spinner.set_spinning(true);
    spinner.set_size_request(48, 48);
    page.append(&spinner);
    page.append(&sections::muted("Loading…"));
    page
}

fn nav_bar(navigate: &hero::Navigate) -> gtk::Revealer {
    let bar = gtk::Box::new(gtk::Orientation::Horizontal, 24);
    bar.add_css_class("folio-nav");
    bar.set_halign(gtk::Align::Fill);

    let spacer = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    spacer.set_hexpand(true);
    bar.append(&spacer);

    for section in [Section::Home, Section::Projects, Section::Experiences] {
        let button = gtk::Button::with_label(&section.to_string());
        button.add_css_class("flat");
        button.add_css_class("folio-muted");
        let navigate = navigate.clone();
        button.connect_clicked(move |_| navigate(section));
        bar.append(&button);
    }

    let revealer = gtk::Revealer::new();
    revealer.set_transition_type(gtk::RevealerTransitionType::Crossfade);
    revealer.set_transition_duration(300);
    revealer.set_valign(gtk::Align::Start);
    revealer.set_can_target(false);
    revealer.set_child(Some(&bar));
    revealer
}
