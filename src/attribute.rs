//! Attribute values and the ordered attribute store shared by every element

use std::fmt;

use indexmap::IndexMap;
use log::trace;

/// A numeric attribute value that remembers whether it was integral
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            // Integral floats keep a trailing ".0" so they stay distinguishable from integers
            Number::Float(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{:.1}", n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! impl_number_from {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_number_from!(Integer as i64: i8, i16, i32, i64, u8, u16, u32);
impl_number_from!(Float as f64: f32, f64);

/// A value stored in an [`AttributeSet`]
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Number(Number),
    Text(String),
}

impl AttributeValue {
    /// Convert a raw configuration value, keeping only numbers and strings
    pub fn from_raw(value: &toml::Value) -> Option<Self> {
        match value {
            toml::Value::Integer(n) => Some(Self::Number(Number::Integer(*n))),
            toml::Value::Float(n) => Some(Self::Number(Number::Float(*n))),
            toml::Value::String(s) => Some(Self::Text(s.clone())),
            toml::Value::Boolean(_)
            | toml::Value::Datetime(_)
            | toml::Value::Array(_)
            | toml::Value::Table(_) => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Number(n) => fmt::Display::fmt(n, f),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<Number> for AttributeValue {
    fn from(value: Number) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

macro_rules! impl_attribute_value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    AttributeValue::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_attribute_value_from_number!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

/// Free-form styling attributes supplied by the caller, in the order given
///
/// Values are kept raw until ingestion; anything that is not a number or a
/// string is discarded when the owning element is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Styling {
    entries: Vec<(String, toml::Value)>,
}

impl Styling {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a styling attribute
    pub fn with(mut self, name: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &toml::Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, toml::Value)> for Styling {
    fn from_iter<I: IntoIterator<Item = (K, toml::Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl From<toml::Table> for Styling {
    fn from(table: toml::Table) -> Self {
        table.into_iter().collect()
    }
}

/// Insertion-ordered mapping from hyphenated attribute names to values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    entries: IndexMap<String, AttributeValue>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from geometry attributes followed by caller styling
    ///
    /// Geometry keys are inserted first and cannot be overridden by styling
    /// entries that normalize to the same name.
    pub fn with_geometry(
        geometry: impl IntoIterator<Item = (&'static str, AttributeValue)>,
        styling: &Styling,
    ) -> Self {
        let mut set = Self::new();
        for (name, value) in geometry {
            set.insert(name, value);
        }
        let geometry_len = set.len();

        for (name, raw) in styling.iter() {
            let name = normalize_name(name);
            if set.entries.get_index_of(&name).is_some_and(|i| i < geometry_len) {
                trace!(name = name.as_str(); "Ignoring styling attribute shadowing geometry");
                continue;
            }
            match AttributeValue::from_raw(raw) {
                Some(value) => {
                    set.entries.insert(name, value);
                }
                None => {
                    trace!(name = name.as_str(), kind = raw.type_str(); "Dropping attribute with unsupported value");
                }
            }
        }
        set
    }

    /// Insert an attribute, normalizing underscores in the name to hyphens
    ///
    /// An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, name: &str, value: impl Into<AttributeValue>) {
        self.entries.insert(normalize_name(name), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize as space-separated `name="value"` tokens
    pub fn write_markup(&self, out: &mut String, escape: bool) {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(name);
            out.push_str("=\"");
            match value {
                AttributeValue::Text(s) if escape => out.push_str(&escape_xml(s)),
                _ => out.push_str(&value.to_string()),
            }
            out.push('"');
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.replace('_', "-")
}

/// Escape XML special characters
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(set: &AttributeSet, escape: bool) -> String {
        let mut out = String::new();
        set.write_markup(&mut out, escape);
        out
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::from(50).to_string(), "50");
        assert_eq!(Number::from(-3i64).to_string(), "-3");
        assert_eq!(Number::from(2.0).to_string(), "2.0");
        assert_eq!(Number::from(0.5).to_string(), "0.5");
        assert_eq!(Number::from(1.25f32).to_string(), "1.25");
    }

    #[test]
    fn test_underscores_become_hyphens() {
        let styling = Styling::new().with("stroke_width", 2).with("font_family", "serif");
        let set = AttributeSet::with_geometry([], &styling);
        assert_eq!(set.get("stroke-width"), Some(&AttributeValue::from(2)));
        assert_eq!(
            set.get("font-family"),
            Some(&AttributeValue::Text("serif".to_string()))
        );
        assert!(set.get("stroke_width").is_none());
    }

    #[test]
    fn test_unsupported_values_are_dropped() {
        let mut nested = toml::Table::new();
        nested.insert("a".to_string(), toml::Value::Integer(1));
        let styling = Styling::new()
            .with("fill", "red")
            .with("nested", nested)
            .with("list", vec![1i64, 2])
            .with("visible", true)
            .with("opacity", 0.5);

        let set = AttributeSet::with_geometry([], &styling);
        let names: Vec<_> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["fill", "opacity"]);
    }

    #[test]
    fn test_geometry_wins_over_styling() {
        let styling = Styling::new().with("fill", "blue").with("cx", 99).with("r", 1);
        let set = AttributeSet::with_geometry(
            [("cx", AttributeValue::from(1)), ("r", AttributeValue::from(2))],
            &styling,
        );
        assert_eq!(render(&set, false), r#"cx="1" r="2" fill="blue""#);
    }

    #[test]
    fn test_duplicate_styling_keeps_first_position() {
        let styling = Styling::new()
            .with("fill", "red")
            .with("stroke", "black")
            .with("fill", "green");
        let set = AttributeSet::with_geometry([], &styling);
        assert_eq!(render(&set, false), r#"fill="green" stroke="black""#);
    }

    #[test]
    fn test_styling_from_table_keeps_order() {
        let table: toml::Table = toml::from_str("stroke = \"red\"\nfill = \"blue\"\nopacity = 1")
            .expect("Should parse");
        let set = AttributeSet::with_geometry([], &Styling::from(table));
        assert_eq!(render(&set, false), r#"stroke="red" fill="blue" opacity="1""#);
    }

    #[test]
    fn test_empty_set_renders_nothing() {
        assert_eq!(render(&AttributeSet::new(), false), "");
    }

    #[test]
    fn test_text_is_verbatim_unless_escaping() {
        let mut set = AttributeSet::new();
        set.insert("title", r#"a "b" & <c>"#);
        assert_eq!(render(&set, false), r#"title="a "b" & <c>""#);
        assert_eq!(
            render(&set, true),
            r#"title="a &quot;b&quot; &amp; &lt;c&gt;""#
        );
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }
}
