//! Data exchanged with the host modeling tool.
//!
//! These shapes are the one versioned contract between the host and the
//! flattening core. Keys match the host's JSON (`outer_loop` on the way in,
//! `outerLoop` on the way out) so existing hosts keep working.

use crate::float_types::Real;
use crate::units::Units;
use geo::Coord;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Version of the [`ModelData`] / [`Face`] / [`Face2d`] / [`UserPrefs`] contract.
pub const CONTRACT_VERSION: u32 = 1;

const fn contract_version() -> u32 {
    CONTRACT_VERSION
}

/// A planar face as read from the host: unit normal, outer boundary and holes.
///
/// Loops are closed implicitly; the first vertex is not repeated at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub normal: Vector3<Real>,
    pub outer_loop: Vec<Point3<Real>>,
    #[serde(default)]
    pub other_loops: Vec<Vec<Point3<Real>>>,
}

impl Face {
    pub fn new(
        normal: Vector3<Real>,
        outer_loop: Vec<Point3<Real>>,
        other_loops: Vec<Vec<Point3<Real>>>,
    ) -> Self {
        Self {
            normal,
            outer_loop,
            other_loops,
        }
    }
}

/// A flattened face in positive XY space, in inches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Face2d {
    pub outer_loop: Vec<Coord<Real>>,
    #[serde(default)]
    pub other_loops: Vec<Vec<Coord<Real>>>,
}

impl Face2d {
    pub fn new(outer_loop: Vec<Coord<Real>>, other_loops: Vec<Vec<Coord<Real>>>) -> Self {
        Self {
            outer_loop,
            other_loops,
        }
    }

    /// Outer loop followed by every hole loop.
    pub fn loops(&self) -> impl Iterator<Item = &[Coord<Real>]> {
        std::iter::once(self.outer_loop.as_slice()).chain(self.other_loops.iter().map(Vec::as_slice))
    }

    /// Largest x and y of the outer loop, measured from the origin.
    ///
    /// A normalized face starts at (0, 0), so this is its bounding width and height.
    pub fn width_height(&self) -> (Real, Real) {
        self.outer_loop
            .iter()
            .fold((0.0, 0.0), |(w, h), p| (w.max(p.x), h.max(p.y)))
    }
}

/// Saved user choices. Every field is optional; absent fields use defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_export_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_multi_file: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite_files: Option<bool>,
}

impl UserPrefs {
    /// Parse a preferences blob, falling back to defaults when it is malformed.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(prefs) => prefs,
            Err(err) => {
                tracing::warn!(%err, "ignoring unreadable user preferences");
                Self::default()
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn use_multi_file(&self) -> bool {
        self.use_multi_file.unwrap_or(false)
    }

    pub fn overwrite_files(&self) -> bool {
        self.overwrite_files.unwrap_or(false)
    }
}

/// Everything the host sends for one export session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelData {
    #[serde(default = "contract_version")]
    pub version: u32,
    pub units: Units,
    pub faces: Vec<Face>,
    /// Opaque preferences blob, passed through untouched.
    #[serde(default = "empty_prefs_json")]
    pub user_prefs_json: String,
    /// Path separators of the host OS. The alternate separator is `null` on
    /// hosts that have none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_separators: Vec<Option<String>>,
}

fn empty_prefs_json() -> String {
    "{}".to_string()
}

impl ModelData {
    pub fn new(units: Units, faces: Vec<Face>) -> Self {
        Self {
            version: CONTRACT_VERSION,
            units,
            faces,
            user_prefs_json: empty_prefs_json(),
            file_separators: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parsed view of [`ModelData::user_prefs_json`]; the blob itself is left as is.
    pub fn user_prefs(&self) -> UserPrefs {
        UserPrefs::from_json(&self.user_prefs_json)
    }
}
