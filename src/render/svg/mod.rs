//! SVG output for maps and legends.

mod document;
mod legend;
mod path;
mod writer;

pub(crate) use legend::{legend_to_svg, write_legend};
pub(crate) use path::multipolygon_to_path;
pub(crate) use writer::{write_svg_footer, write_svg_header, SvgStringWriter, SvgWriter};
