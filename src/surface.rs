//! A backend-agnostic drawing surface in metric pitch coordinates. The pitch renderer produces
//! one; callers overlay events and traces onto it; a backend such as [svg](crate::svg)
//! serialises it.

use crate::coords::Point;

/// A named or hex colour, in any syntax the output backend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour(pub &'static str);

impl Colour {
    pub const RED: Colour = Colour("red");
}

/// The visible region of a surface, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}
impl Extent {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn contains(&self, point: &Point) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub colour: Colour,
    /// In points.
    pub width: f64,
    pub opacity: f64,
}
impl Stroke {
    pub fn solid(colour: Colour, width: f64) -> Self {
        Self {
            colour,
            width,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub shape: Shape,
    pub colour: Colour,
    /// Diameter (or side) in points.
    pub size: f64,
    pub opacity: f64,
}
impl MarkerStyle {
    pub fn new(shape: Shape, colour: Colour, size: f64) -> Self {
        Self {
            shape,
            colour,
            size,
            opacity: 1.0,
        }
    }

    /// Sizes a marker from a scatter-style area in square points.
    pub fn from_area(shape: Shape, colour: Colour, area: f64) -> Self {
        Self::new(shape, colour, area.sqrt())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Polyline { points: Vec<Point>, stroke: Stroke },
    Markers { points: Vec<Point>, style: MarkerStyle },
    Arrow { from: Point, to: Point, stroke: Stroke },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    extent: Extent,
    background: Colour,
    primitives: Vec<Primitive>,
}
impl Surface {
    pub fn new(extent: Extent, background: Colour) -> Self {
        Self {
            extent,
            background,
            primitives: vec![],
        }
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn background(&self) -> Colour {
        self.background
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn push(&mut self, primitive: Primitive) -> &mut Self {
        self.primitives.push(primitive);
        self
    }

    /// Draws a connected line through `points`. Fewer than two points draw nothing.
    pub fn polyline(&mut self, points: impl IntoIterator<Item = Point>, stroke: Stroke) -> &mut Self {
        let points = points.into_iter().collect::<Vec<_>>();
        if points.len() >= 2 {
            self.push(Primitive::Polyline { points, stroke });
        }
        self
    }

    pub fn segment(&mut self, from: Point, to: Point, stroke: Stroke) -> &mut Self {
        self.polyline([from, to], stroke)
    }

    pub fn markers(&mut self, points: impl IntoIterator<Item = Point>, style: MarkerStyle) -> &mut Self {
        let points = points.into_iter().collect::<Vec<_>>();
        if !points.is_empty() {
            self.push(Primitive::Markers { points, style });
        }
        self
    }

    pub fn arrow(&mut self, from: Point, to: Point, stroke: Stroke) -> &mut Self {
        self.push(Primitive::Arrow { from, to, stroke })
    }
}
