//! Tour rendering.

mod svg;

pub use svg::write_tour_svg;
