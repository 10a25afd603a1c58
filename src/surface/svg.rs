use std::fmt::Write as _;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::render::{LegendModel, RegionOverlay, RenderSurface};

/// Rendering surface that draws the attached overlay and legend to an
/// SVG document. Lon/lat coordinates are fit to the requested width with
/// a plain equirectangular projection (Y down); hover tooltips use SVG
/// `<title>` elements.
#[derive(Debug)]
pub struct SvgSurface {
    width: f64,
    margin: f64,
    overlay: Option<RegionOverlay>,
    legend: Option<LegendModel>,
    years: Vec<u16>,
    active_year: Option<u16>,
    year_control_visible: bool,
    messages: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: f64, margin: f64) -> Self {
        Self {
            width,
            margin,
            overlay: None,
            legend: None,
            years: Vec::new(),
            active_year: None,
            year_control_visible: false,
            messages: Vec::new(),
        }
    }

    pub fn overlay(&self) -> Option<&RegionOverlay> {
        self.overlay.as_ref()
    }

    pub fn legend(&self) -> Option<&LegendModel> {
        self.legend.as_ref()
    }

    pub fn year_control_visible(&self) -> bool {
        self.year_control_visible
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Render the current overlay and legend to an SVG string.
    pub fn to_svg(&self) -> Result<String> {
        let overlay = self
            .overlay
            .as_ref()
            .ok_or_else(|| anyhow!("[to_svg] No overlay attached; nothing to draw"))?;

        let bounds = Bounds::over(overlay)
            .ok_or_else(|| anyhow!("[to_svg] Overlay has no coordinates; nothing to draw"))?;

        let margin = self.margin;
        let scale = (self.width - 2.0 * margin) / bounds.width();
        let height = bounds.height() * scale + 2.0 * margin;

        // lon/lat -> SVG coords (Y down)
        let project = move |lon: f64, lat: f64| -> (f64, f64) {
            let x = margin + (lon - bounds.min_x) * scale;
            let y = margin + (bounds.max_y - lat) * scale;
            (x, y)
        };

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            self.width, height, self.width, height
        )?;

        for region in &overlay.regions {
            let Some(path) = path_string(&region.geometry, &project) else {
                continue;
            };
            let style = &region.style;
            writeln!(
                svg,
                r#"<path fill-rule="evenodd" style="fill:{};fill-opacity:{};stroke:{};stroke-width:{};stroke-dasharray:{};opacity:{}" d="{path}"><title>{}</title></path>"#,
                style.fill_color,
                style.fill_opacity,
                style.stroke_color,
                style.stroke_weight,
                style.dash_pattern,
                style.opacity,
                escape_text(&region.tooltip),
            )?;
        }

        if let Some(legend) = &self.legend {
            self.write_legend(&mut svg, legend, height)?;
        }

        if self.year_control_visible {
            if let Some(year) = self.active_year {
                writeln!(
                    svg,
                    r#"<text x="{:.0}" y="{:.0}" font-size="13" font-family="sans-serif">Year: {year}</text>"#,
                    self.margin + 4.0,
                    self.margin + 16.0
                )?;
            }
        }

        writeln!(svg, "</svg>")?;
        Ok(svg)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_svg()?)?;
        Ok(())
    }

    fn write_legend(&self, svg: &mut String, legend: &LegendModel, height: f64) -> Result<()> {
        let row = 16.0;
        let box_w = 150.0;
        let box_h = (legend.entries.len() as f64 + 1.5) * row;
        let x = self.width - box_w - self.margin;
        let y = height - box_h - self.margin;

        writeln!(
            svg,
            r##"<rect x="{x:.0}" y="{y:.0}" width="{box_w:.0}" height="{box_h:.0}" fill="white" fill-opacity="0.85" stroke="#999"/>"##
        )?;
        writeln!(
            svg,
            r#"<text x="{:.0}" y="{:.0}" font-size="13" font-weight="bold" font-family="sans-serif">{}</text>"#,
            x + 6.0,
            y + row,
            escape_text(legend.title)
        )?;
        for (i, entry) in legend.entries.iter().enumerate() {
            let ey = y + (i as f64 + 1.6) * row;
            writeln!(
                svg,
                r#"<rect x="{:.0}" y="{:.0}" width="12" height="12" fill="{}"/>"#,
                x + 6.0,
                ey,
                entry.color
            )?;
            writeln!(
                svg,
                r#"<text x="{:.0}" y="{:.0}" font-size="12" font-family="sans-serif">{}</text>"#,
                x + 24.0,
                ey + 10.0,
                escape_text(&entry.range_label)
            )?;
        }
        Ok(())
    }
}

impl RenderSurface for SvgSurface {
    fn attach_overlay(&mut self, overlay: &RegionOverlay) {
        self.overlay = Some(overlay.clone());
    }

    fn detach_overlay(&mut self) {
        self.overlay = None;
    }

    fn attach_legend(&mut self, legend: &LegendModel) {
        self.legend = Some(legend.clone());
    }

    fn detach_legend(&mut self) {
        self.legend = None;
    }

    fn set_year_control(&mut self, visible: bool, years: &[u16], active: Option<u16>) {
        self.year_control_visible = visible;
        self.years = years.to_vec();
        self.active_year = active;
    }

    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    fn over(overlay: &RegionOverlay) -> Option<Self> {
        let mut bounds: Option<Bounds> = None;
        for region in &overlay.regions {
            for ring in rings(&region.geometry) {
                for (x, y) in ring_coords(ring) {
                    let b = bounds.get_or_insert(Bounds {
                        min_x: x,
                        min_y: y,
                        max_x: x,
                        max_y: y,
                    });
                    b.min_x = b.min_x.min(x);
                    b.min_y = b.min_y.min(y);
                    b.max_x = b.max_x.max(x);
                    b.max_y = b.max_y.max(y);
                }
            }
        }
        bounds.filter(|b| b.width() > 0.0 && b.height() > 0.0)
    }

    fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// All linear rings of a Polygon or MultiPolygon geometry value.
fn rings(geometry: &Value) -> Vec<&Value> {
    let coords = match geometry.get("type").and_then(Value::as_str) {
        Some("Polygon") => geometry.get("coordinates").and_then(Value::as_array),
        Some("MultiPolygon") => {
            let polygons = geometry.get("coordinates").and_then(Value::as_array);
            return polygons
                .map(|ps| {
                    ps.iter()
                        .filter_map(Value::as_array)
                        .flat_map(|rings| rings.iter())
                        .collect()
                })
                .unwrap_or_default();
        }
        _ => None,
    };
    coords.map(|rings| rings.iter().collect()).unwrap_or_default()
}

fn ring_coords(ring: &Value) -> impl Iterator<Item = (f64, f64)> + '_ {
    ring.as_array()
        .map(|points| points.as_slice())
        .unwrap_or_default()
        .iter()
        .filter_map(|point| {
            let p = point.as_array()?;
            Some((p.first()?.as_f64()?, p.get(1)?.as_f64()?))
        })
}

/// Build the `d` attribute for one region; holes render via even-odd.
fn path_string(geometry: &Value, project: &impl Fn(f64, f64) -> (f64, f64)) -> Option<String> {
    let mut d = String::new();
    for ring in rings(geometry) {
        let mut first = true;
        for (lon, lat) in ring_coords(ring) {
            let (x, y) = project(lon, lat);
            if first {
                let _ = write!(d, "M{x:.2} {y:.2}");
                first = false;
            } else {
                let _ = write!(d, " L{x:.2} {y:.2}");
            }
        }
        if !first {
            d.push_str(" Z ");
        }
    }
    if d.is_empty() {
        None
    } else {
        Some(d.trim_end().to_string())
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::render::{RegionRender, RegionStyle};
    use serde_json::json;

    fn square(name: &str, x0: f64) -> RegionRender {
        RegionRender {
            name: name.to_string(),
            geometry: json!({
                "type": "Polygon",
                "coordinates": [[[x0, 27.0], [x0 + 0.5, 27.0], [x0 + 0.5, 27.5], [x0, 27.0]]]
            }),
            style: RegionStyle::choropleth(Color("#FEB24C")),
            tooltip: format!("{name}\nTotal Population: 3,000"),
            value: Some(3000.0),
        }
    }

    #[test]
    fn draws_one_path_per_region() {
        let mut surface = SvgSurface::new(600.0, 10.0);
        surface.attach_overlay(&RegionOverlay {
            regions: vec![square("Paro", 89.0), square("Haa", 90.0)],
        });
        let svg = surface.to_svg().unwrap();
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("fill:#FEB24C"));
        assert!(svg.contains("<title>Paro\nTotal Population: 3,000</title>"));
    }

    #[test]
    fn empty_surface_refuses_to_draw() {
        let surface = SvgSurface::new(600.0, 10.0);
        assert!(surface.to_svg().is_err());
    }

    #[test]
    fn multipolygon_rings_are_collected() {
        let geometry = json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                [[[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 2.0]]]
            ]
        });
        assert_eq!(rings(&geometry).len(), 2);
    }
}
