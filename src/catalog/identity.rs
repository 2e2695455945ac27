use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::catalog::CatalogError;

/// Household area grouping checklist items.
///
/// The variant order is the declaration order of the catalog; `Category::ALL`
/// and every listing API follow it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    Door,
    Entryway,
    LivingRoom,
    Bedroom,
    Study,
    Kitchen,
    DiningRoom,
    Bathroom,
    Overall,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Door,
        Category::Entryway,
        Category::LivingRoom,
        Category::Bedroom,
        Category::Study,
        Category::Kitchen,
        Category::DiningRoom,
        Category::Bathroom,
        Category::Overall,
    ];

    /// Key used in localization paths and catalog documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Door => "door",
            Category::Entryway => "entryway",
            Category::LivingRoom => "livingRoom",
            Category::Bedroom => "bedroom",
            Category::Study => "study",
            Category::Kitchen => "kitchen",
            Category::DiningRoom => "diningRoom",
            Category::Bathroom => "bathroom",
            Category::Overall => "overall",
        }
    }

    /// Resolve a category key, or `None` when it is not one of the fixed areas.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::from_key(key).ok_or_else(|| CatalogError::CategoryNotFound(key.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
