use crate::trackplot::{Color, Glyph, Legend, Track, TrackPlot};
use quick_xml::escape::escape;
use std::path::Path;

const FONT_SIZE: u32 = 14;
const LEGEND_SWATCH_GAP: f64 = 6.0;

pub fn generate_string(plot: &TrackPlot) -> String {
    let mut generator = Generator::new(&plot.font_family);
    generator.generate(plot);
    generator.finish()
}

pub fn render_from_string(svg_content: &str, path: &Path) -> Result<(), String> {
    std::fs::write(path, svg_content).map_err(|e| e.to_string())
}

struct Generator {
    font_family: String,
    lines: Vec<String>,
}

impl Generator {
    fn new(font_family: &str) -> Self {
        Self {
            font_family: escape(font_family).into_owned(),
            lines: Vec::new(),
        }
    }

    fn generate(&mut self, plot: &TrackPlot) {
        self.start_svg(plot.width, plot.height);
        self.add_background();

        for track in &plot.tracks {
            self.plot_track(track);
        }

        self.plot_legend(&plot.legend);
        self.end_svg();
    }

    fn finish(self) -> String {
        let mut svg = self.lines.join("\n");
        svg.push('\n');
        svg
    }

    fn plot_track(&mut self, track: &Track) {
        for glyph in &track.glyphs {
            match glyph {
                Glyph::Label {
                    xpos,
                    ypos,
                    text,
                    color,
                } => self.add_text((*xpos as f64, *ypos as f64), text, color),
                Glyph::HLine {
                    xpos,
                    ypos,
                    width,
                    color,
                    stroke,
                } => self.add_hline((*xpos as f64, *ypos as f64), *width as f64, color, *stroke),
                Glyph::Rect {
                    xpos,
                    ypos,
                    width,
                    height,
                    color,
                    opacity,
                } => self.add_rect(
                    (*xpos as f64, *ypos as f64),
                    (*width as f64, *height as f64),
                    color,
                    *opacity,
                ),
            }
        }
    }

    fn plot_legend(&mut self, legend: &Legend) {
        let x = legend.xpos as f64;
        let row_height = legend.row_height as f64;
        let swatch = row_height * 0.75;
        let mut y = legend.ypos as f64;
        for (label, color) in &legend.labels {
            self.add_rect((x, y), (swatch, swatch), color, 1.0);
            self.add_text((x + swatch + LEGEND_SWATCH_GAP, y + swatch - 1.0), label, "#000000");
            y += row_height;
        }
    }

    fn add_rect(&mut self, pos: (f64, f64), dims: (f64, f64), color: &Color, opacity: f64) {
        let (x, y) = pos;
        let (w, h) = dims;

        let pos = format!("x=\"{}\" y=\"{}\"", x, y);
        let dim = format!("height=\"{}\" width=\"{}\"", h, w);
        let style = format!("fill=\"{}\" stroke=\"{}\" stroke-width=\"0\"", color, color);

        let rect = format!("<rect {} {} {} opacity=\"{}\" />", pos, dim, style, opacity);
        self.lines.push(rect);
    }

    fn add_hline(&mut self, pos: (f64, f64), width: f64, color: &Color, stroke: f64) {
        let (x1, y1) = pos;
        let x2 = x1 + width;
        let y2 = y1;

        let x1y1 = format!("x1=\"{}\" y1=\"{}\"", x1, y1);
        let x2y2 = format!("x2=\"{}\" y2=\"{}\"", x2, y2);
        let style = format!("stroke=\"{}\" stroke-width=\"{}\"", color, stroke);

        let line = format!("<line {} {} {} />", x1y1, x2y2, style);
        self.lines.push(line);
    }

    fn add_text(&mut self, pos: (f64, f64), text: &str, color: &str) {
        let point = format!("x=\"{}\" y=\"{}\"", pos.0, pos.1);
        let height = format!("font-size=\"{}px\"", FONT_SIZE);
        let style = format!(
            "font-family=\"{}\" font-weight=\"bold\" fill=\"{}\"",
            self.font_family, color
        );
        let line = format!("<text {} {} {} >{}</text>", point, style, height, escape(text));
        self.lines.push(line);
    }

    fn start_svg(&mut self, width: u32, height: u32) {
        self.lines.push(r#"<?xml version="1.0"?>"#.to_string());
        let line = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink""#;
        self.lines
            .push(format!("{} width=\"{}\" height=\"{}\">", line, width, height));
    }

    fn end_svg(&mut self) {
        self.lines.push("</svg>".to_string());
    }

    fn add_background(&mut self) {
        self.lines
            .push(r#"<rect width="100%" height="100%" fill="white"/>"#.to_string());
    }
}
