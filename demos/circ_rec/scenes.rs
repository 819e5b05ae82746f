//! Scene dispatcher: the starting layouts of the interactive circle /
//! rectangle / triangle demos.

use planix::geometry::{Circle, Shape};
use planix::math::{Point2, Vector2};
use planix::operations::creation::{MakeIsosceles, MakeRectangle};
use planix::Result;

/// A named shape in a scene.
pub struct Entry {
    pub label: String,
    pub shape: Shape,
}

pub const SCENES: &[&str] = &["rect_rect", "tri_tri", "mixed"];

/// Builds the scene registered under `name`.
pub fn build(name: &str) -> Option<Result<Vec<Entry>>> {
    match name {
        "rect_rect" => Some(rect_rect()),
        "tri_tri" => Some(tri_tri()),
        "mixed" => Some(mixed(600.0, 400.0)),
        _ => None,
    }
}

fn rect(label: &str, center: (f64, f64), u: (f64, f64), size: f64) -> Result<Entry> {
    let poly = MakeRectangle::new(Point2::new(center.0, center.1), Vector2::new(u.0, u.1), size)
        .execute()?;
    Ok(Entry {
        label: label.to_owned(),
        shape: poly.into(),
    })
}

fn tri(label: &str, base: (f64, f64), apex: (f64, f64)) -> Result<Entry> {
    let poly = MakeIsosceles::new(Point2::new(base.0, base.1), Point2::new(apex.0, apex.1))
        .execute()?;
    Ok(Entry {
        label: label.to_owned(),
        shape: poly.into(),
    })
}

fn circle(label: &str, center: (f64, f64), u: (f64, f64)) -> Result<Entry> {
    let radius = Vector2::new(u.0, u.1).norm();
    let circle = Circle::new(Point2::new(center.0, center.1), radius)?;
    Ok(Entry {
        label: label.to_owned(),
        shape: circle.into(),
    })
}

fn rect_rect() -> Result<Vec<Entry>> {
    Ok(vec![
        rect("r0", (100.0, 250.0), (50.0, 0.0), 40.0)?,
        rect("r1", (400.0, 250.0), (0.0, 40.0), 50.0)?,
        rect("r2", (300.0, 150.0), (0.0, 40.0), 50.0)?,
        rect("r3", (100.0, 50.0), (0.0, 40.0), 50.0)?,
        rect("r4", (200.0, 350.0), (0.0, 40.0), 50.0)?,
    ])
}

fn tri_tri() -> Result<Vec<Entry>> {
    Ok(vec![
        tri("t0", (270.0, 350.0), (300.0, 200.0))?,
        tri("t1", (100.0, 50.0), (50.0, 20.0))?,
        tri("t2", (250.0, 150.0), (150.0, 100.0))?,
    ])
}

fn mixed(w: f64, h: f64) -> Result<Vec<Entry>> {
    let s = w.min(h);
    Ok(vec![
        rect("r0", (0.2 * w, 0.5 * h), (0.1 * s, 0.0), 0.08 * s)?,
        rect("r1", (0.8 * w, 0.5 * h), (0.0, 0.08 * s), 0.1 * s)?,
        rect("r2", (0.6 * w, 0.3 * h), (0.0, 0.08 * s), 0.1 * s)?,
        tri("t0", (0.54 * w, 0.7 * h), (0.6 * w, 0.4 * h))?,
        tri("t1", (0.2 * w, 0.1 * h), (0.1 * w, 0.04 * h))?,
        tri("t2", (0.5 * w, 0.3 * h), (0.3 * w, 0.2 * h))?,
        circle("c0", (0.6 * w, 0.5 * h), (0.08 * s, 0.0))?,
        circle("c1", (0.2 * w, 0.3 * h), (0.1 * s, 0.0))?,
        circle("c2", (0.4 * w, 0.7 * h), (0.14 * s, 0.0))?,
    ])
}
