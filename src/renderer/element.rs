//! Element rendering capabilities

use std::borrow::Cow;
use std::fmt;

use log::debug;

use crate::attribute::AttributeSet;

use super::RenderConfig;

/// Anything that can be rendered to a markup fragment
pub trait Element: fmt::Debug {
    /// Opening markup, emitted before attributes or children
    fn prefix(&self) -> &str {
        ""
    }

    /// Closing markup, emitted after attributes or children
    fn suffix(&self, _config: &RenderConfig) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    /// Append the complete markup for this element and its subtree
    fn write_markup(&self, out: &mut String, config: &RenderConfig);

    /// Render the complete markup with the given configuration
    fn finalize_with(&self, config: &RenderConfig) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, config);
        out
    }

    /// Render the complete markup with the default configuration
    fn finalize(&self) -> String {
        self.finalize_with(&RenderConfig::default())
    }
}

/// A leaf element rendered as a single self-closing tag
///
/// Implementors supply the tag opening (for example `"<circle "`) and their
/// attributes; the [`Element`] implementation is provided.
pub trait ClosedElement: fmt::Debug {
    fn tag_prefix(&self) -> &'static str;

    fn attributes(&self) -> &AttributeSet;
}

impl<T: ClosedElement> Element for T {
    fn prefix(&self) -> &str {
        self.tag_prefix()
    }

    fn suffix(&self, config: &RenderConfig) -> Cow<'_, str> {
        let mut out = String::new();
        self.attributes()
            .write_markup(&mut out, config.escape_attributes);
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str("/>");
        Cow::Owned(out)
    }

    fn write_markup(&self, out: &mut String, config: &RenderConfig) {
        out.push_str(self.prefix());
        out.push_str(&self.suffix(config));
    }
}

/// A container element holding an ordered sequence of children
///
/// Children render in insertion order between the prefix and suffix.
#[derive(Debug, Default)]
pub struct OpenElement {
    prefix: Cow<'static, str>,
    suffix: Cow<'static, str>,
    children: Vec<Box<dyn Element>>,
}

impl OpenElement {
    /// Create a container with empty prefix and suffix
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container wrapped in the given opening and closing markup
    pub fn with_tags(
        prefix: impl Into<Cow<'static, str>>,
        suffix: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            children: Vec::new(),
        }
    }

    /// Append a child to the end of the sequence
    pub fn add(&mut self, child: impl Element + 'static) {
        self.add_boxed(Box::new(child));
    }

    /// Append an already boxed child to the end of the sequence
    pub fn add_boxed(&mut self, child: Box<dyn Element>) {
        self.children.push(child);
        debug!(children = self.children.len(); "Added child element");
    }

    /// Remove the child at `index`, returning it
    ///
    /// Out-of-bounds indices leave the sequence untouched and return `None`.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Element>> {
        if index >= self.children.len() {
            debug!(index, children = self.children.len(); "Ignoring out-of-bounds remove");
            return None;
        }
        let child = self.children.remove(index);
        debug!(index, children = self.children.len(); "Removed child element");
        Some(child)
    }

    pub fn children(&self) -> &[Box<dyn Element>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Element for OpenElement {
    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn suffix(&self, _config: &RenderConfig) -> Cow<'_, str> {
        Cow::Borrowed(self.suffix.as_ref())
    }

    fn write_markup(&self, out: &mut String, config: &RenderConfig) {
        out.push_str(self.prefix());
        for child in &self.children {
            child.write_markup(out, config);
        }
        out.push_str(&self.suffix(config));
    }
}
