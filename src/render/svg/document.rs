use std::{io::Write, path::Path};

use anyhow::Result;

use super::{legend_to_svg, write_legend, write_svg_footer, write_svg_header, SvgStringWriter, SvgWriter};
use crate::{
    region::{escape_html, format_number, RegionProfile},
    render::BaseMap,
    scale::Legend,
};

const STYLES: &str = r##"<defs>
<style>
    .region { cursor: pointer; vector-effect: non-scaling-stroke; }
    .region:hover { fill-opacity: 0.85; }
    .label { pointer-events: none; }
</style>
</defs>"##;

impl<P: RegionProfile> BaseMap<P> {
    /// Map, labels, dev markers and legend as one SVG document.
    pub fn to_svg(&self) -> Result<String> {
        let mut writer = SvgStringWriter::new();
        self.write_to(&mut writer)?;
        writer.into_string()
    }

    /// Write the SVG document to `path`.
    pub fn write_svg(&self, path: &Path) -> Result<()> {
        let mut writer = SvgWriter::new(path)?;
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// The legend on its own, outside any map transform.
    pub fn legend_svg(&self) -> Result<String> {
        legend_to_svg(&self.legend, &self.font)
    }

    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_svg_header(writer, self.width, self.height, &self.aria_label)?;
        writeln!(writer, "{STYLES}")?;

        writeln!(writer, r#"<g class="map-group" transform="{}">"#, self.transform.to_svg())?;

        for region in &self.regions {
            let name = escape_html(region.display_name());
            let value = region.value
                .map(|v| format!(r#" data-value="{}""#, format_number(v)))
                .unwrap_or_default();
            let focus = if region.focused { r#" data-focused="true""# } else { "" };
            writeln!(writer,
                r#"<path class="region" fill-rule="evenodd" d="{d}" fill="{fill}" stroke="{stroke}" stroke-width="{sw}" data-name="{name}" data-key="{key}"{value}{focus} role="button" tabindex="0"/>"#,
                d = region.path,
                fill = escape_html(&region.fill),
                stroke = escape_html(&region.stroke),
                sw = format_number(region.stroke_width),
                key = escape_html(&region.key),
            )?;
        }

        if self.show_labels {
            let family = escape_html(&self.font.family);
            for region in &self.regions {
                let Some(at) = region.label_at else { continue };
                writeln!(writer,
                    r##"<text class="label" x="{x:.3}" y="{y:.3}" font-family="{family}" font-size="{size}" text-anchor="middle" fill="#111">{name}</text>"##,
                    x = at.x,
                    y = at.y,
                    size = self.font.size,
                    name = escape_html(region.display_name()),
                )?;
            }
        }

        if self.dev_mode {
            for centroid in self.regions.iter().filter_map(|r| r.centroid) {
                writeln!(writer, r#"<circle class="centroid" cx="{:.3}" cy="{:.3}" r="3" fill="red"/>"#, centroid.x, centroid.y)?;
            }
        }

        writeln!(writer, "</g>")?;

        writeln!(writer, r#"<g class="legend" id="{id}" transform="translate({x},{y})">"#,
            id = escape_html(self.legend.id()),
            x = format_number(self.width - Legend::WIDTH),
            y = format_number(self.height - Legend::HEIGHT),
        )?;
        write_legend(writer, &self.legend, &self.font)?;
        writeln!(writer, "</g>")?;

        write_svg_footer(writer)
    }
}
