//! Flatten planar faces of a 3D model into 2D outlines for laser cutting.
//!
//! Each face is turned so its normal points along `(0, 0, -1)`, projected to 2D,
//! rotated in-plane to the orientation with the smallest bounding box, shifted
//! into positive coordinates, and finally written out as an SVG whose
//! dimensions are physically accurate in the chosen display unit.
//!
//! ```
//! use laserface::face::Face;
//! use laserface::flatten::flatten_face;
//! use laserface::io::svg::SvgBuilder;
//! use laserface::units::Units;
//! use nalgebra::{Point3, Vector3};
//!
//! let face = Face::new(
//!     Vector3::z(),
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(1.0, 1.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     vec![],
//! );
//! let flat = flatten_face(&face, 0).unwrap();
//!
//! let mut svg = SvgBuilder::new(Units::Millimeter);
//! svg.add_face(&flat.face).unwrap();
//! assert!(svg.to_xml().contains("mm\""));
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to flatten many faces at once
//! - **wasm**: JavaScript bindings for webview hosts

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod bridge;
pub mod calipers;
pub mod errors;
pub mod export;
pub mod face;
pub mod flatten;
pub mod float_types;
pub mod io;
pub mod offset;
pub mod project;
pub mod rotation;
pub mod units;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ValidationError;
pub use face::{Face, Face2d, ModelData, UserPrefs};
pub use flatten::{FlattenedFace, flatten_face, flatten_faces};
pub use io::IoError;
pub use io::svg::SvgBuilder;
pub use units::Units;
