use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use orbit::{Carousel, Item, OrbitError, RadiusPolicy};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    #[strum(to_string = "Resume", serialize = "cv")]
    Resume,
    #[strum(to_string = "GitHub", serialize = "gh")]
    Github,
    #[strum(to_string = "LinkedIn", serialize = "li")]
    Linkedin,
    #[strum(to_string = "Email", serialize = "mail")]
    Email,
}

impl LinkKind {
    pub fn icon_name(&self) -> Option<&'static str> {
        match self {
            Self::Resume => None,
            Self::Github | Self::Linkedin => Some("web-browser-symbolic"),
            Self::Email => Some("mail-unread-symbolic"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkConfig {
    pub kind: LinkKind,
    pub uri: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl LinkConfig {
    pub fn label(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.kind.to_string())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: Option<PathBuf>,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_highlight: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectConfig {
    pub title: String,
    pub description: String,
    pub image: PathBuf,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectsSection {
    #[serde(default = "default_projects_heading")]
    pub heading: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub items: Vec<ProjectConfig>,
}

impl Default for ProjectsSection {
    fn default() -> Self {
        Self {
            heading: default_projects_heading(),
            intro: String::new(),
            items: Vec::new(),
        }
    }
}

fn default_projects_heading() -> String {
    "Projects".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExperienceConfig {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    pub role: String,
    #[serde(default)]
    pub logo: Option<PathBuf>,
}

impl From<&ExperienceConfig> for Item {
    fn from(cfg: &ExperienceConfig) -> Self {
        Item::new(
            cfg.title.clone(),
            cfg.date.clone(),
            cfg.description.clone(),
            cfg.role.clone(),
        )
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExperiencesSection {
    #[serde(default = "default_experiences_heading")]
    pub heading: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub items: Vec<ExperienceConfig>,
}

impl Default for ExperiencesSection {
    fn default() -> Self {
        Self {
            heading: default_experiences_heading(),
            intro: String::new(),
            items: Vec::new(),
        }
    }
}

fn default_experiences_heading() -> String {
    "Experiences".to_string()
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub orbit_radius: f64,
    pub compact_radius: f64,
    pub compact_below: f64,
    pub timeline_below: f64,
    pub transition_ms: u64,
    pub loading_delay_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let policy = RadiusPolicy::default();
        Self {
            orbit_radius: policy.orbit,
            compact_radius: policy.compact,
            compact_below: policy.compact_below,
            timeline_below: 480.0,
            transition_ms: 500,
            loading_delay_ms: 600,
        }
    }
}

impl LayoutConfig {
    pub fn radius_policy(&self) -> RadiusPolicy {
        RadiusPolicy {
            orbit: self.orbit_radius,
            compact: self.compact_radius,
            compact_below: self.compact_below,
        }
    }

    pub fn use_timeline(&self, viewport_width: f64) -> bool {
        viewport_width < self.timeline_below
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
    #[serde(default)]
    pub projects: ProjectsSection,
    #[serde(default)]
    pub experiences: ExperiencesSection,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Config {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let s = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        let cfg: Config = s.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Bundled content as if it sat in `base`.
    pub fn bundled(base: &Path) -> Self {
        Self::from_toml(DEFAULT_CONFIG)
            .map(|cfg| cfg.resolve_paths(base))
            .unwrap_or_else(|e| {
                log::error!("Bundled content is invalid: {}", e);
                Self::default()
            })
    }

    pub fn carousel(&self) -> Result<Carousel, OrbitError> {
        Carousel::new(self.experiences.items.iter().map(Item::from).collect())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.carousel()?;
        Ok(())
    }

    /// Makes relative image, logo and avatar paths relative to `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        if let Some(avatar) = self.profile.avatar.as_mut() {
            resolve(avatar);
        }
        self.projects
            .items
            .iter_mut()
            .for_each(|p| resolve(&mut p.image));
        self.experiences
            .items
            .iter_mut()
            .filter_map(|e| e.logo.as_mut())
            .for_each(resolve);
        self
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("Invalid content: {0}")]
    Content(#[from] OrbitError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "folio", "folio").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix("FOLIO")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn content_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

fn build(
    file: impl config::Source + Send + Sync + 'static,
    env: config::Environment,
    base: &Path,
) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    let cfg: Config = s.try_deserialize()?;
    cfg.validate()?;
    Ok(cfg.resolve_paths(base))
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    load_config_with(path, env_source())
}

fn load_config_with(path: &Path, env: config::Environment) -> Result<Config, ConfigError> {
    build(
        config::File::from(path).required(false),
        env,
        content_dir(path),
    )
}

/// Bundled content with environment overrides applied, placed as if written to `path`.
fn load_bundled_with(path: &Path, env: config::Environment) -> Config {
    build(
        config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml),
        env,
        content_dir(path),
    )
    .unwrap_or_else(|e| {
        log::error!("Environment overrides rejected: {}", e);
        Config::bundled(content_dir(path))
    })
}

/// Loads the content file at `path`, falling back to the bundled content when the file is
/// missing or unusable.
pub fn load_or_default(path: &Path) -> Config {
    load_or_default_with(path, env_source)
}

fn load_or_default_with(path: &Path, env: impl Fn() -> config::Environment) -> Config {
    if !path.exists() {
        log::info!(
            "No content file at {}, using bundled content",
            path.display()
        );
        return load_bundled_with(path, env());
    }

    match load_config_with(path, env()) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load {}: {}", path.display(), e);
            load_bundled_with(path, env())
        }
    }
}

pub fn write_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

/// Absolute content path and the directory to watch for it. Watch events carry absolute
/// paths.
fn watch_target(config_path: &Path) -> std::io::Result<(PathBuf, PathBuf)> {
    let config_path = std::path::absolute(config_path)?;
    let config_dir = content_dir(&config_path).to_path_buf();
    Ok((config_path, config_dir))
}

pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let (config_path, config_dir) = match watch_target(&config_path) {
        Ok(target) => target,
        Err(e) => {
            log::error!("Failed to resolve {}: {}", config_path.display(), e);
            return;
        }
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create content directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch content directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ContentReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_parses() {
        let cfg = Config::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(cfg.profile.name, "Arpan Roy");
        assert_eq!(cfg.experiences.items.len(), 5);
        assert_eq!(cfg.projects.items.len(), 4);
        assert_eq!(cfg.links.len(), 4);
        assert_eq!(cfg.layout.orbit_radius, 270.0);
        assert_eq!(cfg.layout.transition_ms, 500);
    }

    #[test]
    fn test_bundled_carousel_starts_at_first_experience() {
        let carousel = Config::bundled(Path::new(".")).carousel().unwrap();
        assert_eq!(carousel.len(), 5);
        assert_eq!(
            carousel.active_item().title.as_str(),
            "Waterloo Aerial Robotics Group"
        );
    }

    #[test]
    fn test_empty_experiences_are_rejected() {
        let err = Config::from_toml("[profile]\nname = \"Nobody\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Content(OrbitError::Empty)));
    }

    #[test]
    fn test_layout_defaults_fill_missing_keys() {
        let src = r#"
            [[experiences.items]]
            title = "Solo"
            date = "2024"
            role = "Builder"

            [layout]
            orbit_radius = 300.0
        "#;
        let cfg = Config::from_toml(src).unwrap();
        assert_eq!(cfg.layout.orbit_radius, 300.0);
        assert_eq!(cfg.layout.compact_radius, 170.0);
        assert_eq!(cfg.experiences.heading, "Experiences");
        assert!(cfg.layout.use_timeline(400.0));
        assert!(!cfg.layout.use_timeline(480.0));
        assert_eq!(cfg.layout.radius_policy().radius_for(1000.0), 300.0);
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env_source().source(Some(map))
    }

    #[test]
    fn test_relative_paths_resolve_against_base() {
        let cfg = Config::bundled(Path::new("/srv/folio"));
        assert_eq!(
            cfg.projects.items[0].image,
            PathBuf::from("/srv/folio/images/nn-visualizer.png")
        );
    }

    #[test]
    fn test_missing_file_keeps_env_overrides() {
        let path = Path::new("/nonexistent/folio/config.toml");
        let cfg = load_or_default_with(path, || env(&[("FOLIO_LAYOUT__ORBIT_RADIUS", "300")]));
        assert_eq!(cfg.layout.orbit_radius, 300.0);
        assert_eq!(cfg.experiences.items.len(), 5);
        assert_eq!(
            cfg.projects.items[0].image,
            PathBuf::from("/nonexistent/folio/images/nn-visualizer.png")
        );
    }

    #[test]
    fn test_missing_file_without_overrides_is_bundled() {
        let path = Path::new("/nonexistent/folio/config.toml");
        let cfg = load_or_default_with(path, || env(&[]));
        assert_eq!(cfg.layout.orbit_radius, 270.0);
        assert_eq!(cfg.profile.name, "Arpan Roy");
    }

    #[test]
    fn test_bare_file_name_resolves_against_working_dir() {
        assert_eq!(content_dir(Path::new("portfolio.toml")), Path::new("."));
        assert_eq!(content_dir(Path::new("/srv/folio/c.toml")), Path::new("/srv/folio"));
    }

    #[test]
    fn test_relative_content_path_is_watched_absolutely() {
        let (file, dir) = watch_target(Path::new("portfolio.toml")).unwrap();
        assert!(file.is_absolute());
        assert!(dir.is_absolute());
        assert_eq!(file.parent(), Some(dir.as_path()));
        assert_eq!(file.file_name().and_then(|n| n.to_str()), Some("portfolio.toml"));
        assert_eq!(file, std::env::current_dir().unwrap().join("portfolio.toml"));
    }

    #[test]
    fn test_link_kind_deserialization() {
        let cases = vec![
            ("\"github\"", LinkKind::Github),
            ("\"GitHub\"", LinkKind::Github),
            ("\"gh\"", LinkKind::Github),
            ("\"EMAIL\"", LinkKind::Email),
            ("\"mail\"", LinkKind::Email),
            ("\"cv\"", LinkKind::Resume),
            ("\"linkedin\"", LinkKind::Linkedin),
        ];

        for (json, expected) in cases {
            let deserialized: LinkKind = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_link_label_falls_back_to_kind() {
        let link = LinkConfig {
            kind: LinkKind::Linkedin,
            uri: "https://example.org".into(),
            label: None,
        };
        assert_eq!(link.label(), "LinkedIn");
    }
}
