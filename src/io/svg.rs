//! SVG document builder for laser cutting.
//!
//! Width, height, the viewBox and all path coordinates are in inches, the host's
//! native unit. Only the document-level `width` and `height` attributes are
//! converted to the display unit, which is what makes the output physically
//! accurate when opened in a cutter's software.

use crate::errors::ValidationError;
use crate::face::Face2d;
use crate::float_types::Real;
use crate::units::Units;
use geo::Coord;
use svg::Document;
use svg::Node;
use svg::node::element::{Element, Group, Path};

const XML_HEADER: &str = r#"<?xml version="1.0" standalone="no"?>"#;
const SVG_DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;

/// Presentation settings for generated documents.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Digits after the decimal point for every number written.
    pub fraction_digits: usize,
    pub stroke_color: String,
    /// Physical stroke width; converted to inches for the `stroke-width` attribute.
    pub stroke_width_mm: Real,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            fraction_digits: 8,
            stroke_color: "#ff0000".to_string(),
            stroke_width_mm: 0.1,
        }
    }
}

/// Accumulates flattened faces into one SVG document.
///
/// Built once per export: `new`, any number of [`SvgBuilder::add_face`], then
/// [`SvgBuilder::to_xml`]. The canvas grows to the largest face added and never
/// shrinks; earlier faces are never moved.
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    units: Units,
    options: SvgOptions,
    width: Real,
    height: Real,
    groups: Vec<Group>,
}

impl SvgBuilder {
    pub fn new(units: Units) -> Self {
        Self::with_options(units, SvgOptions::default())
    }

    pub fn with_options(units: Units, options: SvgOptions) -> Self {
        Self {
            units,
            options,
            width: 0.0,
            height: 0.0,
            groups: Vec::new(),
        }
    }

    pub const fn units(&self) -> Units {
        self.units
    }

    /// Canvas width in inches.
    pub const fn width(&self) -> Real {
        self.width
    }

    /// Canvas height in inches.
    pub const fn height(&self) -> Real {
        self.height
    }

    pub fn face_count(&self) -> usize {
        self.groups.len()
    }

    fn fixed(&self, n: Real) -> String {
        format!("{:.*}", self.options.fraction_digits, n)
    }

    /// Stroke width in inches, from the configured physical width in millimeters.
    pub fn stroke_width(&self) -> Real {
        Units::Millimeter.to_inches(self.options.stroke_width_mm)
    }

    /// Path data for one closed loop: `M` to the first vertex, `L` to the rest, `Z`.
    pub fn path_data(&self, points: &[Coord<Real>]) -> String {
        let mut d = String::new();
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            d.push(if i == 0 { 'M' } else { 'L' });
            d.push_str(&self.fixed(p.x));
            d.push(',');
            d.push_str(&self.fixed(p.y));
        }
        d.push_str(" Z");
        d
    }

    /// Add one face as a group with one path per loop (outer first, then holes).
    pub fn add_face(&mut self, face: &Face2d) -> Result<(), ValidationError> {
        if face.outer_loop.is_empty() {
            return Err(ValidationError::EmptyOuterLoop {
                face: self.groups.len(),
            });
        }

        let (width, height) = face.width_height();
        if width > self.width || height > self.height {
            self.width = self.width.max(width);
            self.height = self.height.max(height);
            tracing::debug!(width = self.width, height = self.height, "grew canvas");
        }

        let stroke_width = self.fixed(self.stroke_width());
        let mut group = Group::new();
        for points in face.loops() {
            let path = Path::new()
                .set("d", self.path_data(points))
                .set("stroke", self.options.stroke_color.as_str())
                .set("stroke-width", stroke_width.as_str())
                .set("fill", "none");
            group = group.add(path);
        }
        self.groups.push(group);
        Ok(())
    }

    /// Build the SVG element tree.
    pub fn to_document(&self) -> Document {
        let digits = self.options.fraction_digits;

        let mut named_view = Element::new("sodipodi:namedview");
        named_view.assign("inkscape:document-units", self.units.suffix());

        let mut document = Document::new()
            .set("xmlns:sodipodi", "http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd")
            .set("xmlns:inkscape", "http://www.inkscape.org/namespaces/inkscape")
            .set("version", "1.1")
            .set("width", self.units.format_inches(self.width, digits))
            .set("height", self.units.format_inches(self.height, digits))
            .set(
                "viewBox",
                format!("0 0 {} {}", self.fixed(self.width), self.fixed(self.height)),
            )
            .add(named_view);

        for group in &self.groups {
            document = document.add(group.clone());
        }
        document
    }

    /// Serialize to a complete SVG file, XML declaration and doctype included.
    pub fn to_xml(&self) -> String {
        format!("{XML_HEADER}\n{SVG_DOCTYPE}\n{}\n", self.to_document())
    }
}
