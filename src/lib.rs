//! SVG Graphic - a small object model for building SVG markup
//!
//! Shapes collect free-form attributes and render as self-closing tags; a
//! [`Graphic`] owns an ordered list of shapes and renders the whole
//! document as a single string.
//!
//! # Example
//!
//! ```rust
//! use svg_graphic::{Circle, Element, Graphic, Styling};
//!
//! let mut graphic = Graphic::new();
//! graphic.add(Circle::new(
//!     50,
//!     50,
//!     5,
//!     Styling::new()
//!         .with("stroke", "red")
//!         .with("stroke_width", 2)
//!         .with("fill", "white"),
//! ));
//!
//! assert_eq!(
//!     graphic.finalize(),
//!     r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1"><circle cx="50" cy="50" r="5" stroke="red" stroke-width="2" fill="white" /></svg>"#
//! );
//! ```

pub mod attribute;
pub mod error;
pub mod graphic;
pub mod renderer;
pub mod scene;
pub mod shapes;

pub use attribute::{AttributeSet, AttributeValue, Number, Styling};
pub use error::{Error, SceneError};
pub use graphic::Graphic;
pub use renderer::{ClosedElement, Element, OpenElement, RenderConfig};
pub use scene::Scene;
pub use shapes::{Circle, Line, Point, Polygon, Rectangle, Size};
