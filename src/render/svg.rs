//! SVG tour drawing.

use std::io::Write;

use crate::error::{Error, Result};
use crate::models::{Point, Tour};

const PADDING: f64 = 20.0;

/// Draws the closed tour as an SVG document: one line per tour edge, a
/// circle per city, the visiting step number beside each city, and the
/// title in the top-left corner.
///
/// Coordinates are shifted by a fixed padding so cities near the origin
/// stay inside the canvas.
pub fn write_tour_svg(
    points: &[Point],
    tour: &Tour,
    title: &str,
    writer: &mut impl Write,
) -> Result<()> {
    if tour.len() != points.len() {
        return Err(Error::invalid_input(format!(
            "tour covers {} cities but {} points were given",
            tour.len(),
            points.len()
        )));
    }

    let shifted: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.x + PADDING, p.y + PADDING))
        .collect();
    let width = shifted.iter().map(|&(x, _)| x).fold(0.0, f64::max) + PADDING;
    let height = shifted.iter().map(|&(_, y)| y).fold(0.0, f64::max) + PADDING;

    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}">"#
    )?;
    writeln!(writer, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;

    let cities = tour.cities();
    let n = cities.len();
    for i in 0..n {
        let (x1, y1) = shifted[cities[i]];
        let (x2, y2) = shifted[cities[(i + 1) % n]];
        writeln!(
            writer,
            r#"  <line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="black"/>"#
        )?;
    }

    for (step, &city) in cities.iter().enumerate() {
        let (x, y) = shifted[city];
        writeln!(
            writer,
            r##"  <circle cx="{x:.2}" cy="{y:.2}" r="5" fill="#c4c4c4" stroke="black"/>"##
        )?;
        writeln!(
            writer,
            r##"  <text x="{:.2}" y="{:.2}" font-size="10" fill="#202020">{step}</text>"##,
            x + 7.0,
            y - 5.0
        )?;
    }

    writeln!(
        writer,
        r#"  <text x="2" y="12" font-size="12">{}</text>"#,
        escape(title)
    )?;
    writeln!(writer, "</svg>")?;
    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
