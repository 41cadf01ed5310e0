//! The `<svg>` document root

use std::borrow::Cow;
use std::io::Write;

use log::{debug, info};

use crate::error::Error;
use crate::renderer::{Element, OpenElement, RenderConfig};

/// Opening tag of every graphic, declaring the SVG namespace and version
pub const SVG_PREFIX: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;

/// Closing tag of every graphic
pub const SVG_SUFFIX: &str = "</svg>";

/// An SVG document owning an ordered list of child elements
///
/// Output is a single line with no XML declaration and no whitespace
/// between tags.
#[derive(Debug)]
pub struct Graphic {
    root: OpenElement,
}

impl Default for Graphic {
    fn default() -> Self {
        Self::new()
    }
}

impl Graphic {
    /// Create an empty graphic
    pub fn new() -> Self {
        Self {
            root: OpenElement::with_tags(SVG_PREFIX, SVG_SUFFIX),
        }
    }

    /// Append an element; children render in insertion order
    pub fn add(&mut self, element: impl Element + 'static) {
        self.root.add(element);
    }

    /// Append an already boxed element
    pub fn add_boxed(&mut self, element: Box<dyn Element>) {
        self.root.add_boxed(element);
    }

    /// Remove the element at `index`; out-of-bounds indices are ignored
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Element>> {
        self.root.remove(index)
    }

    pub fn children(&self) -> &[Box<dyn Element>] {
        self.root.children()
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Render the document and write it to `sink`, then flush
    pub fn save<W: Write>(&self, sink: &mut W) -> Result<(), Error> {
        self.save_with(sink, &RenderConfig::default())
    }

    /// Render the document with `config` and write it to `sink`, then flush
    ///
    /// The document is fully rendered before anything is written.
    pub fn save_with<W: Write>(&self, sink: &mut W, config: &RenderConfig) -> Result<(), Error> {
        let svg = self.finalize_with(config);
        debug!(bytes = svg.len(), children = self.len(); "Writing graphic");
        sink.write_all(svg.as_bytes())?;
        sink.flush()?;
        info!(bytes = svg.len(); "Graphic saved");
        Ok(())
    }
}

impl Element for Graphic {
    fn prefix(&self) -> &str {
        self.root.prefix()
    }

    fn suffix(&self, config: &RenderConfig) -> Cow<'_, str> {
        self.root.suffix(config)
    }

    fn write_markup(&self, out: &mut String, config: &RenderConfig) {
        self.root.write_markup(out, config);
    }
}
