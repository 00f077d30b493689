// File: crates/tsview-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: renders sessions to RGBA8 buffers and PNG files.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use tsview_core::{FrameStats, Session, ViewerError, ViewerResult};

pub mod target;
pub mod text;

pub use target::SkiaTarget;
pub use text::TextShaper;

/// Tightly packed, unpremultiplied RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

impl RgbaFrame {
    /// Pixel at `(x, y)` as `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride + x as usize * 4;
        self.pixels.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Pack as `0x00RRGGBB` words for softbuffer-style presenters.
    pub fn to_xrgb(&self) -> Vec<u32> {
        self.pixels
            .chunks_exact(4)
            .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
            .collect()
    }

    pub fn encode_png(&self) -> ViewerResult<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| ViewerError::Raster("pixel buffer does not match frame size".to_string()))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .map_err(|e| ViewerError::Raster(e.to_string()))?;
        Ok(bytes)
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ViewerResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.encode_png()?)?;
        Ok(())
    }
}

/// Owns a CPU raster surface and the text shaper; reused across frames.
pub struct Rasterizer {
    surface: skia::Surface,
    shaper: TextShaper,
    width: i32,
    height: i32,
}

impl Rasterizer {
    pub fn new(width: i32, height: i32) -> ViewerResult<Self> {
        let surface = make_surface(width, height)?;
        Ok(Self { surface, shaper: TextShaper::new(), width, height })
    }

    pub fn size(&self) -> (i32, i32) { (self.width, self.height) }

    /// Recreate the surface when the requested size changes.
    pub fn resize(&mut self, width: i32, height: i32) -> ViewerResult<()> {
        if (width, height) != (self.width, self.height) {
            self.surface = make_surface(width, height)?;
            self.width = width;
            self.height = height;
        }
        Ok(())
    }

    /// Draw one complete frame of `session`.
    pub fn render(&mut self, session: &Session) -> FrameStats {
        let canvas = self.surface.canvas();
        let mut target = SkiaTarget::new(canvas, &self.shaper, self.width, self.height);
        session.render(&mut target)
    }

    pub fn read_rgba8(&mut self) -> ViewerResult<RgbaFrame> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ViewerError::Raster("read_pixels failed".to_string()));
        }
        Ok(RgbaFrame { pixels, width: self.width as u32, height: self.height as u32, stride })
    }
}

fn make_surface(width: i32, height: i32) -> ViewerResult<skia::Surface> {
    if width <= 0 || height <= 0 {
        return Err(ViewerError::InvalidTarget { width, height });
    }
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| ViewerError::Raster("failed to create raster surface".to_string()))
}

/// One-shot render of `session` at its natural frame size.
pub fn render_to_rgba8(session: &Session) -> ViewerResult<RgbaFrame> {
    let (w, h) = session.frame_size();
    let mut raster = Rasterizer::new(w, h)?;
    let stats = raster.render(session);
    debug!(?stats, width = w, height = h, "rasterized frame");
    raster.read_rgba8()
}

/// Render `session` and write it as a PNG at `path`.
pub fn render_to_png(session: &Session, path: impl AsRef<Path>) -> ViewerResult<()> {
    render_to_rgba8(session)?.write_png(path)
}
