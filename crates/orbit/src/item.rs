use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Title(String);

crate::impl_label_newtype!(Title);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct DateRange(String);

crate::impl_label_newtype!(DateRange);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Role(String);

crate::impl_label_newtype!(Role);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Description(String);

crate::impl_label_newtype!(Description);

/// One entry of the carousel. The title doubles as its stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: Title,
    pub date: DateRange,
    #[serde(default)]
    pub description: Option<Description>,
    pub role: Role,
}

impl Item {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        description: Option<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            title: Title::new(title),
            date: DateRange::new(date),
            description: description.map(Description::new),
            role: Role::new(role),
        }
    }
}
