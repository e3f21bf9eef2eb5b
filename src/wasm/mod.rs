//! JavaScript bindings for hosts that run the UI in a webview.
//!
//! Everything crosses the boundary as JSON strings, in the same shapes as
//! [`crate::face`] and [`crate::bridge`].

use crate::export::render_document;
use crate::face::{Face, Face2d};
use crate::flatten::flatten_faces;
use crate::io::svg::SvgOptions;
use crate::units::Units;
use wasm_bindgen::prelude::*;

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Flatten a JSON array of host faces into a JSON array of `Face2d`.
#[wasm_bindgen(js_name = flattenFaces)]
pub fn flatten_faces_json(faces_json: &str) -> Result<String, JsValue> {
    let faces: Vec<Face> = serde_json::from_str(faces_json).map_err(to_js_error)?;
    let flat: Vec<Face2d> = flatten_faces(&faces)
        .map_err(to_js_error)?
        .into_iter()
        .map(|f| f.face)
        .collect();
    serde_json::to_string(&flat).map_err(to_js_error)
}

/// Render a JSON array of `Face2d` as one SVG document in the given unit index.
#[wasm_bindgen(js_name = renderSvg)]
pub fn render_svg_json(units: i32, faces_json: &str) -> Result<String, JsValue> {
    let units = Units::from_index(i64::from(units)).map_err(to_js_error)?;
    let faces: Vec<Face2d> = serde_json::from_str(faces_json).map_err(to_js_error)?;
    render_document(&faces, units, &SvgOptions::default()).map_err(to_js_error)
}

/// Format a length given in inches in the given unit index, e.g. `25.400mm`.
#[wasm_bindgen(js_name = formatLength)]
pub fn format_length(units: i32, inches: f64, fraction_digits: usize) -> Result<String, JsValue> {
    let units = Units::from_index(i64::from(units)).map_err(to_js_error)?;
    Ok(units.format_inches(inches as crate::float_types::Real, fraction_digits))
}
