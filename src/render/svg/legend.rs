use std::io::Write;

use anyhow::Result;

use super::{write_svg_footer, SvgStringWriter};
use crate::{region::{escape_html, format_number}, scale::Legend, theme::FontSpec};

/// Gradient swatch and tick labels, positioned at the legend's own origin.
pub(crate) fn write_legend<W: Write>(writer: &mut W, legend: &Legend, font: &FontSpec) -> Result<()> {
    let gradient = escape_html(&legend.gradient_id());

    writeln!(writer, r#"<defs><linearGradient id="{gradient}" x1="0%" x2="100%">"#)?;
    for (offset, color) in legend.stops() {
        writeln!(writer, r#"<stop offset="{}%" stop-color="{}"/>"#, format_number(offset), escape_html(color))?;
    }
    writeln!(writer, "</linearGradient></defs>")?;

    writeln!(writer, r#"<rect x="{x}" y="0" width="{w}" height="{h}" style="fill:url(#{gradient});stroke:#aaa"/>"#,
        x = Legend::SWATCH_X,
        w = legend.swatch_width(),
        h = Legend::SWATCH_HEIGHT,
    )?;

    let [low, high] = legend.ticks();
    let y = Legend::SWATCH_HEIGHT + font.size + 2.0;
    let family = escape_html(&font.family);
    writeln!(writer, r##"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" text-anchor="start" fill="#111">{label}</text>"##,
        x = Legend::SWATCH_X,
        size = font.size,
        label = format_number(low),
    )?;
    writeln!(writer, r##"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" text-anchor="end" fill="#111">{label}</text>"##,
        x = Legend::SWATCH_X + legend.swatch_width(),
        size = font.size,
        label = format_number(high),
    )?;

    Ok(())
}

/// Standalone legend document.
pub(crate) fn legend_to_svg(legend: &Legend, font: &FontSpec) -> Result<String> {
    let mut writer = SvgStringWriter::new();
    writeln!(writer, r#"<svg xmlns="http://www.w3.org/2000/svg" id="{id}" width="{w}" height="{h}">"#,
        id = escape_html(legend.id()),
        w = Legend::WIDTH,
        h = Legend::HEIGHT,
    )?;
    write_legend(&mut writer, legend, font)?;
    write_svg_footer(&mut writer)?;
    writer.into_string()
}
