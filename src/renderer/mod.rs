//! Markup rendering for elements
//!
//! Closed elements render as one self-closing tag; open elements render
//! their prefix, every child in order, and their suffix.

pub mod config;
pub mod element;

pub use config::RenderConfig;
pub use element::{ClosedElement, Element, OpenElement};
