//! Declarative catalog of wall, opening, and furniture kinds, plus the
//! site's area classification scheme.
//!
//! The catalog is a lookup table: drawing tools reference kinds by code
//! and read their defaults from here. The geometric contracts never
//! depend on which kinds exist.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A wall/separator kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallKind {
    pub code: String,
    pub name: String,
    /// Rendered thickness in pixels.
    pub thickness: f64,
    /// Separators (virtual room dividers) do not block openings.
    #[serde(default)]
    pub is_separator: bool,
}

/// A door/window kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningKind {
    pub code: String,
    pub name: String,
    pub default_length: f64,
    /// Doors carry a swing orientation; windows do not.
    #[serde(default)]
    pub is_door: bool,
}

/// A furniture/fixture kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemKind {
    pub code: String,
    pub name: String,
    pub default_width: f64,
    pub default_length: f64,
}

/// The full kind table for one editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    walls: BTreeMap<String, WallKind>,
    openings: BTreeMap<String, OpeningKind>,
    items: BTreeMap<String, ItemKind>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A minimal built-in catalog, used when the session has not fetched
    /// a site-specific one.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register_wall(WallKind {
            code: "wall".into(),
            name: "Wall".into(),
            thickness: 20.0,
            is_separator: false,
        });
        catalog.register_wall(WallKind {
            code: "separator".into(),
            name: "Separator".into(),
            thickness: 2.0,
            is_separator: true,
        });
        catalog.register_opening(OpeningKind {
            code: "door".into(),
            name: "Door".into(),
            default_length: 80.0,
            is_door: true,
        });
        catalog.register_opening(OpeningKind {
            code: "window".into(),
            name: "Window".into(),
            default_length: 100.0,
            is_door: false,
        });
        catalog.register_item(ItemKind {
            code: "desk".into(),
            name: "Desk".into(),
            default_width: 80.0,
            default_length: 160.0,
        });
        catalog
    }

    pub fn register_wall(&mut self, kind: WallKind) {
        self.walls.insert(kind.code.clone(), kind);
    }

    pub fn register_opening(&mut self, kind: OpeningKind) {
        self.openings.insert(kind.code.clone(), kind);
    }

    pub fn register_item(&mut self, kind: ItemKind) {
        self.items.insert(kind.code.clone(), kind);
    }

    pub fn wall(&self, code: &str) -> Option<&WallKind> {
        self.walls.get(code)
    }

    pub fn opening(&self, code: &str) -> Option<&OpeningKind> {
        self.openings.get(code)
    }

    pub fn item(&self, code: &str) -> Option<&ItemKind> {
        self.items.get(code)
    }

    pub fn walls(&self) -> impl Iterator<Item = &WallKind> {
        self.walls.values()
    }

    pub fn openings(&self) -> impl Iterator<Item = &OpeningKind> {
        self.openings.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemKind> {
        self.items.values()
    }
}

/// One assignable area type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaClass {
    pub code: String,
    pub label: String,
}

/// The classification scheme fetched per site; areas pick from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationScheme {
    pub classes: Vec<AreaClass>,
}

impl ClassificationScheme {
    pub fn contains(&self, code: &str) -> bool {
        self.classes.iter().any(|c| c.code == code)
    }
}
