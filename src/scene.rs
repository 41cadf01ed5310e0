//! Scene files: graphics described in TOML
//!
//! A scene is an ordered array of `[[shape]]` tables plus an optional
//! `[render]` table:
//!
//! ```toml
//! [render]
//! escape_attributes = true
//!
//! [[shape]]
//! kind = "circle"
//! cx = 50
//! cy = 50
//! r = 5
//! stroke = "red"
//! stroke_width = 2
//! ```
//!
//! Keys other than `kind` and the shape's geometry fields are styling and go
//! through the usual attribute ingestion, so unsupported values are dropped.

use std::io::Write;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::attribute::{Number, Styling};
use crate::error::{Error, SceneError};
use crate::graphic::Graphic;
use crate::renderer::{Element, RenderConfig};
use crate::shapes::{Circle, Line, Point, Polygon, Rectangle};

/// A graphic together with the configuration it should be rendered with
#[derive(Debug, Default)]
pub struct Scene {
    pub config: RenderConfig,
    pub graphic: Graphic,
}

/// TOML structure for deserializing scenes
#[derive(Deserialize)]
struct TomlScene {
    #[serde(default)]
    render: RenderConfig,
    #[serde(default, rename = "shape")]
    shapes: Vec<toml::Table>,
}

/// Shape kinds recognised in scene files, with their geometry fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeKind {
    Circle,
    Rect,
    Polygon,
    Line,
}

impl ShapeKind {
    fn parse(kind: &str) -> Option<Self> {
        match kind {
            "circle" => Some(Self::Circle),
            "rect" => Some(Self::Rect),
            "polygon" => Some(Self::Polygon),
            "line" => Some(Self::Line),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rect => "rect",
            Self::Polygon => "polygon",
            Self::Line => "line",
        }
    }

    fn geometry_fields(self) -> &'static [&'static str] {
        match self {
            Self::Circle => &["cx", "cy", "r"],
            Self::Rect => &["position", "dimension"],
            Self::Polygon => &["points"],
            Self::Line => &["start", "end"],
        }
    }
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let parsed: TomlScene = toml::from_str(content)?;

        let mut graphic = Graphic::new();
        for (index, table) in parsed.shapes.iter().enumerate() {
            graphic.add_boxed(build_shape(index, table)?);
        }
        debug!(shapes = graphic.len(); "Scene loaded");

        Ok(Scene {
            config: parsed.render,
            graphic,
        })
    }

    /// The demonstration scene: one circle, rectangle, polygon and line
    pub fn sample() -> Self {
        let mut graphic = Graphic::new();
        graphic.add(Circle::new(
            50,
            50,
            5,
            Styling::new()
                .with("stroke", "red")
                .with("stroke_width", 2)
                .with("fill", "white"),
        ));
        graphic.add(Rectangle::new(
            (5, 5),
            (40, 10),
            Styling::new()
                .with("stroke", "red")
                .with("stroke_width", 2)
                .with("fill", "white"),
        ));
        graphic.add(Polygon::new(
            [(5, 5), (4, 1), (9, 2)],
            Styling::new()
                .with("fill", "red")
                .with("stroke", "black")
                .with("stroke_width", 2),
        ));
        graphic.add(Line::new(
            (0, 0),
            (50, 50),
            Styling::new().with("stroke", "blue").with("stroke_width", 2),
        ));

        Scene {
            config: RenderConfig::default(),
            graphic,
        }
    }

    /// Render the scene's graphic with the scene's configuration
    pub fn render(&self) -> String {
        self.graphic.finalize_with(&self.config)
    }

    /// Write the rendered scene to `sink`, then flush
    pub fn save<W: Write>(&self, sink: &mut W) -> Result<(), Error> {
        self.graphic.save_with(sink, &self.config)
    }
}

fn build_shape(index: usize, table: &toml::Table) -> Result<Box<dyn Element>, SceneError> {
    let kind = match table.get("kind") {
        Some(toml::Value::String(kind)) => ShapeKind::parse(kind).ok_or_else(|| {
            SceneError::UnknownKind {
                index,
                kind: kind.clone(),
            }
        })?,
        Some(other) => {
            return Err(SceneError::UnknownKind {
                index,
                kind: other.to_string(),
            })
        }
        None => return Err(SceneError::MissingKind { index }),
    };

    let fields = Fields { index, kind, table };
    let styling: Styling = table
        .iter()
        .filter(|(key, _)| key.as_str() != "kind" && !kind.geometry_fields().contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let shape: Box<dyn Element> = match kind {
        ShapeKind::Circle => Box::new(Circle::new(
            fields.number("cx")?,
            fields.number("cy")?,
            fields.number("r")?,
            styling,
        )),
        ShapeKind::Rect => Box::new(Rectangle::new(
            fields.pair("position")?,
            fields.pair("dimension")?,
            styling,
        )),
        ShapeKind::Polygon => Box::new(Polygon::new(fields.points("points")?, styling)),
        ShapeKind::Line => Box::new(Line::new(
            fields.pair("start")?,
            fields.pair("end")?,
            styling,
        )),
    };
    Ok(shape)
}

/// Typed access to one shape table's geometry fields
struct Fields<'a> {
    index: usize,
    kind: ShapeKind,
    table: &'a toml::Table,
}

impl Fields<'_> {
    fn get(&self, field: &'static str) -> Result<&toml::Value, SceneError> {
        self.table.get(field).ok_or(SceneError::MissingField {
            index: self.index,
            kind: self.kind.name(),
            field,
        })
    }

    fn invalid(&self, field: &'static str, reason: impl Into<String>) -> SceneError {
        SceneError::InvalidGeometry {
            index: self.index,
            kind: self.kind.name(),
            field,
            reason: reason.into(),
        }
    }

    fn number(&self, field: &'static str) -> Result<Number, SceneError> {
        let value = self.get(field)?;
        as_number(value).ok_or_else(|| {
            self.invalid(field, format!("expected a number, found {}", value.type_str()))
        })
    }

    fn pair(&self, field: &'static str) -> Result<(Number, Number), SceneError> {
        as_pair(self.get(field)?).ok_or_else(|| self.invalid(field, "expected [x, y]"))
    }

    fn points(&self, field: &'static str) -> Result<Vec<Point>, SceneError> {
        let toml::Value::Array(items) = self.get(field)? else {
            return Err(self.invalid(field, "expected an array of [x, y] pairs"));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                as_pair(item)
                    .map(Point::from)
                    .ok_or_else(|| self.invalid(field, format!("point {} is not [x, y]", i)))
            })
            .collect()
    }
}

fn as_number(value: &toml::Value) -> Option<Number> {
    match value {
        toml::Value::Integer(n) => Some(Number::Integer(*n)),
        toml::Value::Float(n) => Some(Number::Float(*n)),
        _ => None,
    }
}

fn as_pair(value: &toml::Value) -> Option<(Number, Number)> {
    match value.as_array()?.as_slice() {
        [x, y] => Some((as_number(x)?, as_number(y)?)),
        _ => None,
    }
}
