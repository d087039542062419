//! Entity kind discriminator for spatial sensing.

use std::fmt;

/// What a sensed entity is, as far as navigation cares.
///
/// The core never sees the host's entity handles or components — only a kind
/// and a world position, reported by the host-owned
/// `SpatialSensor` (see `nav-grid`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    /// A moving hazard.  Drives occupancy marking and danger checks.
    Threat,
    /// A collectible goal tile.
    Pickup,
    /// The terminal goal (level exit, finish line).
    Exit,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Threat => "threat",
            EntityKind::Pickup => "pickup",
            EntityKind::Exit => "exit",
        };
        f.write_str(s)
    }
}
