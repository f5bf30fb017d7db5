pub mod hero;
pub mod projects;
pub mod timeline;

use gtk::prelude::*;
use gtk4 as gtk;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

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
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[strum(to_string = "Home", serialize = "hero")]
    Home,
    Projects,
    Experiences,
}

/// Removes every child of `container`.
pub fn clear(container: &gtk::Box) {
    while let Some(child) = container.first_child() {
        container.remove(&child);
    }
}

pub fn heading(text: &str) -> gtk::Label {
    let label = gtk::Label::new(Some(text));
    label.add_css_class("folio-heading");
    label
}

pub fn muted(text: &str) -> gtk::Label {
    let label = gtk::Label::new(Some(text));
    label.add_css_class("folio-muted");
    label.set_wrap(true);
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_section_deserialization() {
        let cases = vec![
            ("\"home\"", Section::Home),
            ("\"Hero\"", Section::Home),
            ("\"PROJECTS\"", Section::Projects),
            ("\"experiences\"", Section::Experiences),
        ];

        for (json, expected) in cases {
            let deserialized: Section = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_nav_order() {
        let order: Vec<_> = Section::iter().map(|s| s.to_string()).collect();
        assert_eq!(order, ["Home", "Projects", "Experiences"]);
    }
}
