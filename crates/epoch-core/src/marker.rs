//! Marker handles.

use serde::{Deserialize, Serialize};

/// Opaque identifier a map surface returns when it places a marker.
///
/// Handles are only meaningful to the surface that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerHandle(pub u64);
