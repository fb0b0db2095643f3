// A thin Rust wrapper to handle SVG tags and render chart primitives to SVG
// markup.

use std::fmt::{self, Write};

use crate::{
    color::color_to_hex,
    layout::{LayoutConfig, Primitive, Viewport},
};

// ----------------------------------------------------------------------------
//
//
// Rust representation and rendering of SVG tags.
//
//
// ----------------------------------------------------------------------------

/// Attributes are kept ordered so rendering is reproducible.
pub type Params = std::collections::BTreeMap<String, String>;

pub trait RenderTag: fmt::Debug {
    fn render(&self, buf: &mut String) -> fmt::Result;
}

impl<T> RenderTag for Tag<T>
where
    T: Identifier + fmt::Debug,
{
    fn render(&self, buf: &mut String) -> fmt::Result {
        write!(buf, "<{}", self.kind.identifier())?;
        for (k, v) in self.parameters.iter() {
            write!(buf, " {k}=\"{}\"", escape(v))?;
        }
        if !self.style.is_empty() {
            let style: Vec<String> = self.style.iter().map(|(k, v)| format!("{k}:{v}")).collect();
            write!(buf, " style=\"{}\"", escape(&style.join(";")))?;
        }
        if !self.closing {
            return write!(buf, " />");
        }
        write!(buf, ">")?;
        for c in self.children.iter() {
            c.render(buf)?;
        }
        write!(buf, "</{}>", self.kind.identifier())
    }
}

/// Text content of a tag.
#[derive(Debug)]
struct TextNode(String);

impl RenderTag for TextNode {
    fn render(&self, buf: &mut String) -> fmt::Result {
        buf.push_str(&escape(&self.0));
        Ok(())
    }
}

pub fn render(svg_tag: &Tag<Svg>) -> String {
    let mut raw_svg = String::new();
    // Writing into a String cannot fail.
    let _ = svg_tag.render(&mut raw_svg);
    raw_svg
}

#[derive(Debug)]
pub struct Tag<T>
where
    T: fmt::Debug,
{
    parameters: Params,
    style: Params,
    children: Vec<Box<dyn RenderTag>>,
    closing: bool,
    kind: T,
}

impl<T> Tag<T>
where
    T: fmt::Debug,
{
    fn with_kind(kind: T, parameters: Params, style: Option<Params>, closing: bool) -> Self {
        Self {
            parameters,
            style: style.unwrap_or_default(),
            children: Vec::new(),
            closing,
            kind,
        }
    }

    pub fn add_child(&mut self, child: impl RenderTag + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn add_children(&mut self, children: Vec<Box<dyn RenderTag>>) {
        self.children.extend(children);
    }
}

// ----------------------------------------------------------------------------
//
//
// Creation of `new` tags.
//
//
// ----------------------------------------------------------------------------

impl Tag<Svg> {
    pub fn new(width: f64, height: f64, style: Option<Params>) -> Self {
        let parameters = params(&[
            ("width", format!("{width}")),
            ("height", format!("{height}")),
            ("viewBox", format!("0 0 {width} {height}")),
            ("xmlns", "http://www.w3.org/2000/svg".to_string()),
        ]);
        Self::with_kind(Svg {}, parameters, style, true)
    }
}

impl Tag<Rect> {
    pub fn new(x: f64, y: f64, width: f64, height: f64, style: Option<Params>) -> Self {
        let parameters = params(&[
            ("x", format!("{x}")),
            ("y", format!("{y}")),
            ("width", format!("{width}")),
            ("height", format!("{height}")),
        ]);
        Self::with_kind(Rect {}, parameters, style, false)
    }
}

impl Tag<Text> {
    pub fn new(x: f64, y: f64, text: &str, style: Option<Params>) -> Self {
        let parameters = params(&[("x", format!("{x}")), ("y", format!("{y}"))]);
        let mut res = Self::with_kind(Text {}, parameters, style, true);
        res.add_child(TextNode(text.to_string()));
        res
    }
}

impl Tag<Line> {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, style: Option<Params>) -> Self {
        let parameters = params(&[
            ("x1", format!("{x1}")),
            ("y1", format!("{y1}")),
            ("x2", format!("{x2}")),
            ("y2", format!("{y2}")),
            ("stroke", stroke.to_string()),
        ]);
        Self::with_kind(Line {}, parameters, style, false)
    }
}

// ----------------------------------------------------------------------------
//
//
// SVG tag kinds and their str representation (`identifier`)
//
//
// ----------------------------------------------------------------------------

#[derive(Debug)]
pub struct Svg {}
#[derive(Debug)]
pub struct Rect {}
#[derive(Debug)]
pub struct Text {}
#[derive(Debug)]
pub struct Line {}

pub trait Identifier {
    fn identifier(&self) -> &'static str;
}

impl Identifier for Svg {
    fn identifier(&self) -> &'static str {
        "svg"
    }
}

impl Identifier for Rect {
    fn identifier(&self) -> &'static str {
        "rect"
    }
}

impl Identifier for Text {
    fn identifier(&self) -> &'static str {
        "text"
    }
}

impl Identifier for Line {
    fn identifier(&self) -> &'static str {
        "line"
    }
}

// ----------------------------------------------------------------------------
//
//
// Chart rendering
//
//
// ----------------------------------------------------------------------------

const GRID_COLOR: &str = "#000000";
const FONT_SIZE: &str = "10px";

/// Render a chart laid out by `ChartLayout` to a standalone SVG document.
/// Series colors are looked up in the palette of `config`, cycling for
/// color indices past its end.
pub fn render_chart(viewport: Viewport, primitives: &[Primitive], config: &LayoutConfig) -> String {
    let mut root = Tag::<Svg>::new(viewport.width, viewport.height, None);
    root.add_child(Tag::<Rect>::new(
        0.0,
        0.0,
        viewport.width,
        viewport.height,
        opts(&[("fill", "white")]),
    ));

    let text_style = [("font-family", "sans-serif"), ("font-size", FONT_SIZE)];
    let mut children: Vec<Box<dyn RenderTag>> = Vec::with_capacity(primitives.len());
    for primitive in primitives {
        let tag: Box<dyn RenderTag> = match primitive {
            Primitive::GridLine { x0, y0, x1, y1 } => {
                Box::new(Tag::<Line>::new(*x0, *y0, *x1, *y1, GRID_COLOR, None))
            }
            Primitive::YearLabel { text, x, y } => {
                Box::new(Tag::<Text>::new(*x, *y, text, opts(&text_style)))
            }
            Primitive::Segment {
                x0,
                y0,
                x1,
                y1,
                color_index,
            } => {
                let color = color_to_hex(config.color_for(*color_index));
                Box::new(Tag::<Line>::new(*x0, *y0, *x1, *y1, &color, None))
            }
            Primitive::PointLabel {
                text,
                x,
                y,
                color_index,
            } => {
                let color = color_to_hex(config.color_for(*color_index));
                let mut style = text_style.to_vec();
                style.push(("fill", color.as_str()));
                Box::new(Tag::<Text>::new(*x, *y, text, opts(&style)))
            }
        };
        children.push(tag);
    }
    root.add_children(children);
    log::debug!("rendered {} primitives to svg", primitives.len());
    render(&root)
}

// ----------------------------------------------------------------------------
//
//
// Helpers
//
//
// ----------------------------------------------------------------------------

pub fn opts(items: &[(&str, &str)]) -> Option<Params> {
    Some(
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn params(items: &[(&str, String)]) -> Params {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for chr in raw.chars() {
        match chr {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(chr),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use rank_data::RankRecord;

    use super::*;
    use crate::layout::ChartLayout;

    #[test]
    fn test_render_tags() {
        let mut svg = Tag::<Svg>::new(400.0, 300.0, None);
        let rect = Tag::<Rect>::new(0.0, 0.0, 400.0, 300.0, opts(&[("fill", "red")]));
        let text = Tag::<Text>::new(200.0, 150.0, "This is a <Test>.", None);
        svg.add_child(rect);
        svg.add_child(text);

        let raw = render(&svg);
        assert_eq!(
            raw,
            "<svg height=\"300\" viewBox=\"0 0 400 300\" width=\"400\" \
             xmlns=\"http://www.w3.org/2000/svg\">\
             <rect height=\"300\" width=\"400\" x=\"0\" y=\"0\" style=\"fill:red\" />\
             <text x=\"200\" y=\"150\">This is a &lt;Test&gt;.</text></svg>"
        );
    }

    #[test]
    fn test_render_chart() {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = LayoutConfig::default();
        let layout = ChartLayout::new(config.clone());
        let viewport = Viewport::new(1100.0, 500.0);
        let records = [
            RankRecord::from_line("Jean 1 5 0 10 0 0 0 0 0 0 0").unwrap(),
            RankRecord::from_line("Eric 1 2 0 0 0 0 0 0 0 0 0").unwrap(),
        ];
        let primitives = layout.compute(viewport, &records);
        let raw = render_chart(viewport, &primitives, &config);

        assert!(raw.starts_with("<svg "));
        assert!(raw.ends_with("</svg>"));
        // 12 grid lines + 2 * 10 segments.
        assert_eq!(raw.matches("<line ").count(), 32);
        // 11 year labels + 2 * 11 point labels.
        assert_eq!(raw.matches("<text ").count(), 33);
        assert_eq!(raw.matches("stroke=\"#ff0000\"").count(), 10);
        assert_eq!(raw.matches("stroke=\"#0000ff\"").count(), 10);
        assert!(raw.contains(">1900</text>"));
        assert!(raw.contains(">*</text>"));

        // Same input, same document.
        assert_eq!(raw, render_chart(viewport, &primitives, &config));
    }

    #[test]
    fn test_render_chart_wraps_color_index() {
        let config = LayoutConfig::default();
        let primitives = [
            Primitive::Segment {
                x0: 0.0,
                y0: 0.0,
                x1: 10.0,
                y1: 10.0,
                color_index: 5,
            },
            Primitive::PointLabel {
                text: "7".to_string(),
                x: 0.0,
                y: 0.0,
                color_index: 4,
            },
        ];
        let raw = render_chart(Viewport::new(100.0, 100.0), &primitives, &config);
        assert!(raw.contains("stroke=\"#0000ff\""));
        assert!(raw.contains("fill:#ff0000"));
    }
}
