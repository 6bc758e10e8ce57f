//! Typed element identifiers.
//!
//! Every keyed collection in the scene graph uses its own id newtype so
//! that a hole id can never be handed to a line lookup. Ids are random
//! v4 UUIDs; they are `Ord` so ordered collections iterate, snap
//! tie-breaking resolves, and content hashing runs deterministically.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! element_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

element_id!(
    /// Identifier of a layer within a scene.
    LayerId
);
element_id!(
    /// Identifier of a vertex in a layer's line graph.
    VertexId
);
element_id!(
    /// Identifier of a line (wall or separator).
    LineId
);
element_id!(
    /// Identifier of a hole (door or window) placed along a line.
    HoleId
);
element_id!(
    /// Identifier of a free-standing item (furniture, fixture).
    ItemId
);
element_id!(
    /// Identifier of a derived area (room).
    AreaId
);
element_id!(
    /// Identifier of a floorplan (one plan per floor).
    PlanId
);
