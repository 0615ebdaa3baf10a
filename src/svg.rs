//! Serialises a [Surface] into a standalone SVG document.
//!
//! The view box is laid out in metres, with the y axis flipped so that positive y points up the
//! page. Stroke widths and marker sizes are given in points and scaled as though the surface
//! were printed `figure_width_inches` wide.

use std::fmt::{Display, Formatter, Write};
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::coords::Point;
use crate::surface::{Colour, MarkerStyle, Shape, Stroke, Primitive, Surface};

pub const POINTS_PER_INCH: f64 = 72.0;

const ARROW_HEAD_LENGTH: f64 = 6.0;
const ARROW_HEAD_HALF_WIDTH: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    pub pixels_per_metre: f64,
    pub figure_width_inches: f64,
}
impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            pixels_per_metre: 10.0,
            figure_width_inches: 12.0,
        }
    }
}

/// A coordinate or length, printed to millimetre precision without trailing zeros.
struct Num(f64);

impl Display for Num {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let formatted = format!("{:.3}", self.0);
        let trimmed = if formatted.contains('.') {
            formatted.trim_end_matches('0').trim_end_matches('.')
        } else {
            &formatted
        };
        if trimmed == "-0" {
            write!(f, "0")
        } else {
            write!(f, "{trimmed}")
        }
    }
}

struct Scene {
    metres_per_point: f64,
    out: String,
}
impl Scene {
    fn points(&self, points: impl IntoIterator<Item = Point>) -> String {
        let mut attr = String::new();
        for (index, point) in points.into_iter().enumerate() {
            if index > 0 {
                attr.push(' ');
            }
            // infallible for String
            let _ = write!(attr, "{},{}", Num(point.x), Num(-point.y));
        }
        attr
    }

    fn stroke_attrs(&self, stroke: &Stroke) -> String {
        let mut attrs = format!(
            r#"fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round""#,
            stroke.colour.0,
            Num(stroke.width * self.metres_per_point)
        );
        if stroke.opacity < 1.0 {
            let _ = write!(attrs, r#" stroke-opacity="{}""#, Num(stroke.opacity));
        }
        attrs
    }

    fn polyline(&mut self, points: impl IntoIterator<Item = Point>, stroke: &Stroke) {
        let points = self.points(points);
        let attrs = self.stroke_attrs(stroke);
        let _ = writeln!(self.out, r#"<polyline points="{points}" {attrs}/>"#);
    }

    fn markers(&mut self, points: &[Point], style: &MarkerStyle) {
        let size = style.size * self.metres_per_point;
        let opacity = if style.opacity < 1.0 {
            format!(r#" fill-opacity="{}""#, Num(style.opacity))
        } else {
            String::new()
        };
        for point in points {
            let _ = match style.shape {
                Shape::Circle => writeln!(
                    self.out,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}"{opacity}/>"#,
                    Num(point.x),
                    Num(-point.y),
                    Num(size / 2.0),
                    style.colour.0
                ),
                Shape::Square => writeln!(
                    self.out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{opacity}/>"#,
                    Num(point.x - size / 2.0),
                    Num(-point.y - size / 2.0),
                    Num(size),
                    Num(size),
                    style.colour.0
                ),
            };
        }
    }

    /// A shaft with an open head at `to`. A zero-length arrow has no direction and draws nothing.
    fn arrow(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let length = from.distance(&to);
        if length == 0.0 {
            return;
        }
        let (dx, dy) = ((to.x - from.x) / length, (to.y - from.y) / length);
        let back = ARROW_HEAD_LENGTH * self.metres_per_point;
        let side = ARROW_HEAD_HALF_WIDTH * self.metres_per_point;
        let base = Point::new(to.x - dx * back, to.y - dy * back);
        let head = [
            Point::new(base.x - dy * side, base.y + dx * side),
            to,
            Point::new(base.x + dy * side, base.y - dx * side),
        ];
        self.polyline([from, to], stroke);
        self.polyline(head, stroke);
    }
}

pub fn render(surface: &Surface, options: &SvgOptions) -> String {
    let extent = surface.extent();
    let mut scene = Scene {
        metres_per_point: extent.width() / (options.figure_width_inches * POINTS_PER_INCH),
        out: String::new(),
    };
    let _ = writeln!(
        scene.out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
        Num((extent.width() * options.pixels_per_metre).round()),
        Num((extent.height() * options.pixels_per_metre).round()),
        Num(extent.x_min),
        Num(-extent.y_max),
        Num(extent.width()),
        Num(extent.height())
    );
    let Colour(background) = surface.background();
    let _ = writeln!(
        scene.out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{background}"/>"#,
        Num(extent.x_min),
        Num(-extent.y_max),
        Num(extent.width()),
        Num(extent.height())
    );
    for primitive in surface.primitives() {
        match primitive {
            Primitive::Polyline { points, stroke } => scene.polyline(points.iter().copied(), stroke),
            Primitive::Markers { points, style } => scene.markers(points, style),
            Primitive::Arrow { from, to, stroke } => scene.arrow(*from, *to, stroke),
        }
    }
    scene.out.push_str("</svg>\n");
    scene.out
}

pub fn write_to_file(path: impl AsRef<Path>, surface: &Surface, options: &SvgOptions) -> Result<(), io::Error> {
    let path = path.as_ref();
    let document = render(surface, options);
    fs::write(path, &document)?;
    debug!(
        "wrote {} primitives ({} bytes) to {path:?}",
        surface.primitives().len(),
        document.len()
    );
    Ok(())
}
