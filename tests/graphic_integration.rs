//! Integration tests for building and saving graphics

use std::io::{self, Write};

use pretty_assertions::assert_eq;
use svg_graphic::{Circle, Element, Error, Graphic, Line, Polygon, Rectangle, Scene, Styling};

fn styled_circle() -> Circle {
    Circle::new(
        50,
        50,
        5,
        Styling::new()
            .with("stroke", "red")
            .with("stroke_width", 2)
            .with("fill", "white"),
    )
}

#[test]
fn test_single_circle_document() {
    let mut graphic = Graphic::new();
    graphic.add(styled_circle());

    assert_eq!(
        graphic.finalize(),
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1"><circle cx="50" cy="50" r="5" stroke="red" stroke-width="2" fill="white" /></svg>"#
    );
}

#[test]
fn test_empty_document() {
    assert_eq!(
        Graphic::new().finalize(),
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1"></svg>"#
    );
}

#[test]
fn test_sample_document() {
    insta::assert_snapshot!(
        Scene::sample().render(),
        @r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1"><circle cx="50" cy="50" r="5" stroke="red" stroke-width="2" fill="white" /><rect x="5" y="5" width="40" height="10" stroke="red" stroke-width="2" fill="white" /><polygon points="5,5 4,1 9,2" fill="red" stroke="black" stroke-width="2" /><line x1="0" y1="0" x2="50" y2="50" stroke="blue" stroke-width="2" /></svg>"#
    );
}

#[test]
fn test_finalize_is_idempotent() {
    let graphic = Scene::sample().graphic;
    assert_eq!(graphic.finalize(), graphic.finalize());
}

#[test]
fn test_add_then_remove_restores_document() {
    let mut graphic = Graphic::new();
    graphic.add(styled_circle());
    graphic.add(Rectangle::new((5, 5), (40, 10), Styling::new()));
    let before = graphic.finalize();

    graphic.add(Line::new((0, 0), (1, 1), Styling::new()));
    let removed = graphic.remove(graphic.len() - 1);
    assert!(removed.is_some());
    assert_eq!(graphic.finalize(), before);
}

#[test]
fn test_remove_from_middle_keeps_order() {
    let mut graphic = Graphic::new();
    graphic.add(Circle::new(1, 1, 1, Styling::new()));
    graphic.add(Circle::new(2, 2, 2, Styling::new()));
    graphic.add(Circle::new(3, 3, 3, Styling::new()));

    graphic.remove(1);
    assert_eq!(
        graphic.finalize(),
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1"><circle cx="1" cy="1" r="1" /><circle cx="3" cy="3" r="3" /></svg>"#
    );
}

#[test]
fn test_out_of_bounds_remove_is_ignored() {
    let mut graphic = Scene::sample().graphic;
    let before = graphic.finalize();

    assert!(graphic.remove(graphic.len()).is_none());
    assert!(graphic.remove(100).is_none());
    assert_eq!(graphic.len(), 4);
    assert_eq!(graphic.finalize(), before);
}

#[test]
fn test_unsupported_styling_is_absent() {
    let mut nested = toml::Table::new();
    nested.insert("inner".to_string(), toml::Value::from("x"));
    let polygon = Polygon::new(
        [(0, 0), (1, 0), (1, 1)],
        Styling::new()
            .with("fill", "red")
            .with("marker", nested)
            .with("dash_array", vec![1i64, 2]),
    );

    let markup = polygon.finalize();
    assert_eq!(markup, r#"<polygon points="0,0 1,0 1,1" fill="red" />"#);
    assert!(!markup.contains("marker"));
    assert!(!markup.contains("dash-array"));
}

#[test]
fn test_text_values_are_verbatim_by_default() {
    let mut graphic = Graphic::new();
    graphic.add(Circle::new(0, 0, 1, Styling::new().with("title", r#"say "hi""#)));
    assert!(graphic.finalize().contains(r#"title="say "hi"""#));
}

#[test]
fn test_save_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out.svg");
    let mut graphic = Graphic::new();
    graphic.add(styled_circle());

    let mut file = std::fs::File::create(&path).expect("create");
    graphic.save(&mut file).expect("Should save");

    let written = std::fs::read_to_string(&path).expect("read");
    assert_eq!(written, graphic.finalize());
}

/// A sink that fails on write or flush
struct FailingSink {
    fail_on_write: bool,
    written: Vec<u8>,
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_on_write {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "flush failed"))
    }
}

#[test]
fn test_write_failure_propagates() {
    let mut sink = FailingSink {
        fail_on_write: true,
        written: Vec::new(),
    };
    let err = Graphic::new().save(&mut sink).unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.to_string() == "disk full"));
    assert!(sink.written.is_empty());
}

#[test]
fn test_flush_failure_propagates() {
    let mut sink = FailingSink {
        fail_on_write: false,
        written: Vec::new(),
    };
    let err = Graphic::new().save(&mut sink).unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.to_string() == "flush failed"));
    assert_eq!(sink.written, Graphic::new().finalize().into_bytes());
}
