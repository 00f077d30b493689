// File: crates/tsview-render-skia/src/text.rs
// Summary: Tick/legend label shaping with Skia textlayout (monospace-first font stack).

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use tsview_core::Rgb;

const FAMILIES: &[&str] = &["Fira Code", "Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

/// Wide enough that single-line labels never wrap.
const LAYOUT_WIDTH: f32 = 10_000.0;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn style(size: f32, color: Rgb) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(to_skia(color));
        ts.set_font_families(FAMILIES);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: Rgb) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(LAYOUT_WIDTH);
        paragraph
    }

    /// Longest line width and total height, rounded up to whole pixels.
    pub fn measure(&self, text: &str, size: f32) -> (i32, i32) {
        let p = self.layout(text, size, Rgb::BLACK);
        (p.longest_line().ceil() as i32, p.height().ceil() as i32)
    }

    /// Paint with the paragraph's top-left corner at `(x, y)`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: Rgb) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (x, y));
    }
}

pub fn to_skia(c: Rgb) -> skia::Color {
    let (r, g, b) = c.rgb();
    skia::Color::from_rgb(r, g, b)
}
