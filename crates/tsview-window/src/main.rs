// File: crates/tsview-window/src/main.rs
// Summary: Interactive viewer: keyboard-driven pan/zoom and theme picker, rendered on the CPU and presented with softbuffer.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tsview_core::{InputController, Key, Outcome, Session, TimeTable, ViewerConfig};
use tsview_render_skia::Rasterizer;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    let _ = tsview_core::telemetry::init_default_tracing();

    let mut args = std::env::args().skip(1);
    let table_path = PathBuf::from(args.next().context("usage: tsview-window <table.csv> [config.json]")?);
    let config = match args.next() {
        Some(p) => ViewerConfig::load(&p).with_context(|| format!("loading config '{p}'"))?,
        None => ViewerConfig::default(),
    };

    let table = TimeTable::load_csv(&table_path)
        .with_context(|| format!("failed to load table '{}'", table_path.display()))?;
    info!(rows = table.len(), columns = table.names().len(), "table loaded");

    let mut session = Session::new(table, &config)?;
    let (fw, fh) = session.frame_size();
    let mut raster = Rasterizer::new(fw, fh)?;
    let frame_interval = Duration::from_secs_f64(1.0 / f64::from(config.fps_cap.max(1)));

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(format!("tsview: {}", table_path.display()))
        .with_inner_size(winit::dpi::PhysicalSize::new(fw as u32, fh as u32))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut input = InputController::new();
    let mut dirty = true;
    let mut last_frame: Option<Instant> = None;

    event_loop.run(move |event, _, cf| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                // Printable keys arrive as characters; named keys via key codes.
                WindowEvent::ReceivedCharacter(c) if !c.is_control() => {
                    input.push_key(Key::Char(c));
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(code), .. },
                    ..
                } => {
                    if let Some(key) = named_key(code) {
                        input.push_key(key);
                    }
                }
                WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => dirty = true,
                _ => {}
            },
            Event::MainEventsCleared => {
                match input.drain_into(&mut session) {
                    Outcome::Quit => {
                        *cf = ControlFlow::Exit;
                        return;
                    }
                    Outcome::Redraw => dirty = true,
                    Outcome::Unchanged => {}
                }
                if !dirty {
                    *cf = ControlFlow::Wait;
                    return;
                }
                let now = Instant::now();
                match last_frame.map(|t| t + frame_interval) {
                    Some(next) if next > now => *cf = ControlFlow::WaitUntil(next),
                    _ => {
                        window.request_redraw();
                        *cf = ControlFlow::Wait;
                    }
                }
            }
            Event::RedrawRequested(_) => {
                let stats = raster.render(&session);
                let frame = match raster.read_rgba8() {
                    Ok(f) => f,
                    Err(e) => {
                        error!(error = %e, "frame readback failed");
                        *cf = ControlFlow::Exit;
                        return;
                    }
                };
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    warn!(error = %e, "surface resize failed");
                    return;
                }
                let mut buffer = match surface.buffer_mut() {
                    Ok(b) => b,
                    Err(e) => {
                        warn!(error = %e, "buffer unavailable");
                        return;
                    }
                };
                blit(&frame.to_xrgb(), frame.width as usize, frame.height as usize, &mut buffer, size.width as usize);
                if let Err(e) = buffer.present() {
                    warn!(error = %e, "present failed");
                }
                tracing::trace!(?stats, "frame presented");
                dirty = false;
                last_frame = Some(Instant::now());
            }
            _ => {}
        }
    });
}

fn named_key(code: VirtualKeyCode) -> Option<Key> {
    match code {
        VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => Some(Key::Enter),
        VirtualKeyCode::Escape => Some(Key::Escape),
        VirtualKeyCode::Left => Some(Key::Left),
        VirtualKeyCode::Right => Some(Key::Right),
        VirtualKeyCode::Up => Some(Key::Up),
        VirtualKeyCode::Down => Some(Key::Down),
        _ => None,
    }
}

/// Copy a `src_w x src_h` frame into a window buffer `dst_w` pixels wide,
/// clipping whichever side is larger.
fn blit(src: &[u32], src_w: usize, src_h: usize, dst: &mut [u32], dst_w: usize) {
    if dst_w == 0 {
        return;
    }
    let dst_h = dst.len() / dst_w;
    let cols = src_w.min(dst_w);
    for y in 0..src_h.min(dst_h) {
        dst[y * dst_w..y * dst_w + cols].copy_from_slice(&src[y * src_w..y * src_w + cols]);
    }
}
