//! Concrete closed shapes: circle, rectangle, polygon and line
//!
//! Each shape seeds its geometry attributes first and then folds in the
//! caller's styling. Geometry keys always win over styling of the same name.

use crate::attribute::{AttributeSet, AttributeValue, Number, Styling};
use crate::renderer::ClosedElement;

/// A 2D coordinate pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: Number,
    pub y: Number,
}

impl Point {
    pub fn new(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl<X: Into<Number>, Y: Into<Number>> From<(X, Y)> for Point {
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x, y)
    }
}

/// A width and height pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: Number,
    pub height: Number,
}

impl Size {
    pub fn new(width: impl Into<Number>, height: impl Into<Number>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }
}

impl<W: Into<Number>, H: Into<Number>> From<(W, H)> for Size {
    fn from((width, height): (W, H)) -> Self {
        Self::new(width, height)
    }
}

/// `<circle>` with `cx`, `cy` and `r`
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    attributes: AttributeSet,
}

impl Circle {
    pub fn new(
        cx: impl Into<Number>,
        cy: impl Into<Number>,
        r: impl Into<Number>,
        styling: Styling,
    ) -> Self {
        let geometry = [
            ("cx", AttributeValue::from(cx.into())),
            ("cy", AttributeValue::from(cy.into())),
            ("r", AttributeValue::from(r.into())),
        ];
        Self {
            attributes: AttributeSet::with_geometry(geometry, &styling),
        }
    }
}

impl ClosedElement for Circle {
    fn tag_prefix(&self) -> &'static str {
        "<circle "
    }

    fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }
}

/// `<rect>` with `x`, `y`, `width` and `height`
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    attributes: AttributeSet,
}

impl Rectangle {
    pub fn new(position: impl Into<Point>, dimension: impl Into<Size>, styling: Styling) -> Self {
        let position = position.into();
        let dimension = dimension.into();
        let geometry = [
            ("x", AttributeValue::from(position.x)),
            ("y", AttributeValue::from(position.y)),
            ("width", AttributeValue::from(dimension.width)),
            ("height", AttributeValue::from(dimension.height)),
        ];
        Self {
            attributes: AttributeSet::with_geometry(geometry, &styling),
        }
    }
}

impl ClosedElement for Rectangle {
    fn tag_prefix(&self) -> &'static str {
        "<rect "
    }

    fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }
}

/// `<polygon>` with a `points` list
///
/// An empty point list renders `points=""`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    attributes: AttributeSet,
}

impl Polygon {
    pub fn new<P: Into<Point>>(points: impl IntoIterator<Item = P>, styling: Styling) -> Self {
        let points = points
            .into_iter()
            .map(|p| {
                let p = p.into();
                format!("{},{}", p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        let geometry = [("points", AttributeValue::Text(points))];
        Self {
            attributes: AttributeSet::with_geometry(geometry, &styling),
        }
    }
}

impl ClosedElement for Polygon {
    fn tag_prefix(&self) -> &'static str {
        "<polygon "
    }

    fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }
}

/// `<line>` with `x1`, `y1`, `x2` and `y2`
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    attributes: AttributeSet,
}

impl Line {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>, styling: Styling) -> Self {
        let start = start.into();
        let end = end.into();
        let geometry = [
            ("x1", AttributeValue::from(start.x)),
            ("y1", AttributeValue::from(start.y)),
            ("x2", AttributeValue::from(end.x)),
            ("y2", AttributeValue::from(end.y)),
        ];
        Self {
            attributes: AttributeSet::with_geometry(geometry, &styling),
        }
    }
}

impl ClosedElement for Line {
    fn tag_prefix(&self) -> &'static str {
        "<line "
    }

    fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }
}
