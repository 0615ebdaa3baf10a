//! Draws a football pitch, to scale, onto a fresh [Surface]. Markings are specified in yards
//! and converted to metres; the field itself is sized by [FieldDimen].

use crate::config::{FieldDimen, PitchConfig, METRES_PER_YARD};
use crate::coords::Point;
use crate::surface::{MarkerStyle, Shape, Stroke, Surface};

/// Points sampled along every arc.
pub const ARC_SAMPLES: usize = 50;

/// Post markers are drawn at this size for the default marker size of 20.
const POST_SIZE_PER_MARKER: f64 = 6.0 / 20.0;

/// Pitch markings, in metres.
#[derive(Debug, Clone, PartialEq)]
pub struct Markings {
    pub half_length: f64,
    pub half_width: f64,
    pub goal_line_width: f64,
    pub box_width: f64,
    pub box_length: f64,
    pub area_width: f64,
    pub area_length: f64,
    pub penalty_spot: f64,
    pub corner_radius: f64,
    /// Half-extent of the D along the goal line direction.
    pub d_length: f64,
    pub d_radius: f64,
    /// Distance of the D's centre from the goal line.
    pub d_pos: f64,
    pub centre_circle_radius: f64,
}

impl From<&FieldDimen> for Markings {
    fn from(field: &FieldDimen) -> Self {
        Self {
            half_length: field.half_length(),
            half_width: field.half_width(),
            goal_line_width: 8.0 * METRES_PER_YARD,
            box_width: 20.0 * METRES_PER_YARD,
            box_length: 6.0 * METRES_PER_YARD,
            area_width: 44.0 * METRES_PER_YARD,
            area_length: 18.0 * METRES_PER_YARD,
            penalty_spot: 12.0 * METRES_PER_YARD,
            corner_radius: METRES_PER_YARD,
            d_length: 8.0 * METRES_PER_YARD,
            d_radius: 10.0 * METRES_PER_YARD,
            d_pos: 12.0 * METRES_PER_YARD,
            centre_circle_radius: 10.0 * METRES_PER_YARD,
        }
    }
}

/// `samples` evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, samples: usize) -> impl Iterator<Item = f64> {
    let step = if samples > 1 {
        (end - start) / (samples - 1) as f64
    } else {
        0.0
    };
    (0..samples).map(move |index| {
        if index + 1 == samples && samples > 1 {
            end
        } else {
            start + step * index as f64
        }
    })
}

/// The x offset of a circle of the given radius at height `y`, clamped at the tangent.
#[inline]
fn chord_offset(radius: f64, y: f64) -> f64 {
    (radius * radius - y * y).max(0.0).sqrt()
}

/// Renders the pitch described by `config`. The returned surface spans the field plus the
/// configured border, and can be drawn on further by the caller.
pub fn draw(config: &PitchConfig) -> Surface {
    let palette = config.colour_scheme.palette();
    let m = Markings::from(&config.field);
    let line = Stroke::solid(palette.line, config.line_width);
    let spot = MarkerStyle::from_area(Shape::Circle, palette.line, config.marker_size);
    let post = MarkerStyle::new(
        Shape::Square,
        palette.spot,
        config.marker_size * POST_SIZE_PER_MARKER,
    );

    let mut surface = Surface::new(config.extent(), palette.background);

    // half-way line and centre mark
    surface
        .segment(Point::new(0.0, -m.half_width), Point::new(0.0, m.half_width), line)
        .markers([Point::new(0.0, 0.0)], spot);

    // centre circle
    let radius = m.centre_circle_radius;
    for sign in [1.0, -1.0] {
        surface.polyline(
            linspace(-radius, radius, ARC_SAMPLES).map(|y| Point::new(sign * chord_offset(radius, y), y)),
            line,
        );
    }

    for s in [-1.0, 1.0] {
        let goal_line = s * m.half_length;

        // boundary
        surface
            .segment(
                Point::new(-m.half_length, s * m.half_width),
                Point::new(m.half_length, s * m.half_width),
                line,
            )
            .segment(
                Point::new(goal_line, -m.half_width),
                Point::new(goal_line, m.half_width),
                line,
            );

        // goal mouth and posts
        let posts = [
            Point::new(goal_line, -m.goal_line_width / 2.0),
            Point::new(goal_line, m.goal_line_width / 2.0),
        ];
        surface
            .segment(posts[0], posts[1], Stroke::solid(palette.spot, config.line_width))
            .markers(posts, post);

        // six-yard box, then penalty area
        for (width, length) in [(m.box_width, m.box_length), (m.area_width, m.area_length)] {
            let inner = goal_line - s * length;
            surface.polyline(
                [
                    Point::new(goal_line, width / 2.0),
                    Point::new(inner, width / 2.0),
                    Point::new(inner, -width / 2.0),
                    Point::new(goal_line, -width / 2.0),
                ],
                line,
            );
        }

        // penalty spot
        surface.markers([Point::new(goal_line - s * m.penalty_spot, 0.0)], spot);

        // corner arcs
        let radius = m.corner_radius;
        for corner in [-1.0, 1.0] {
            surface.polyline(
                linspace(0.0, radius, ARC_SAMPLES).map(|y| {
                    Point::new(
                        goal_line - s * chord_offset(radius, y),
                        corner * (m.half_width - y),
                    )
                }),
                line,
            );
        }

        // the D
        surface.polyline(
            linspace(-m.d_length, m.d_length, ARC_SAMPLES)
                .map(|y| Point::new(goal_line - s * (chord_offset(m.d_radius, y) + m.d_pos), y)),
            line,
        );
    }

    surface
}
