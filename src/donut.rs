//! Rotating 3D donut (torus) rendered as ASCII art.
//!
//! `render_frame` is the fused sampler/rasterizer; `run` owns the
//! rotation state and paces the animation.

use crate::framebuffer::{glyph_for_luminance, FrameBuffer};
use crate::geometry::{surface_point, RenderContext, Rotation};
use crate::terminal::Terminal;
use std::f32::consts::TAU;
use std::io;
use std::time::Duration;

// Animation constants
const ANGLE_STEP: f32 = 0.01;
const FRAME_DELAY: Duration = Duration::from_millis(10);

/// Rasterize one frame of the torus at rotation angles `a` and `b`.
///
/// Sweeps the full parametric surface; samples that face away from the
/// light or project off screen are dropped, and the depth test keeps the
/// nearest sample per cell.
pub fn render_frame(ctx: &RenderContext, a: f32, b: f32, frame: &mut FrameBuffer) {
    let rot = Rotation::new(a, b);

    let mut theta = 0.0f32;
    while theta < TAU {
        let mut phi = 0.0f32;
        while phi < TAU {
            let p = surface_point(ctx, &rot, theta, phi);
            // Back-facing samples are also hidden from the camera in this
            // single-light model, so skip them outright.
            if p.luminance > 0.0 {
                frame.plot(p.col, p.row, p.inv_depth, glyph_for_luminance(p.luminance));
            }
            phi += ctx.phi_step;
        }
        theta += ctx.theta_step;
    }
}

/// Run the animation until a key is pressed.
pub fn run(term: &mut Terminal) -> io::Result<()> {
    let (width, height) = term.size();
    let ctx = RenderContext::new(width as usize, height as usize);
    let mut frame = FrameBuffer::new(ctx.width, ctx.height);

    // One angle drives both rotation axes in lockstep; the rasterizer
    // itself takes them independently.
    let mut angle: f32 = 0.0;

    loop {
        if term.key_pressed()? {
            break;
        }

        frame.reset();
        render_frame(&ctx, angle, angle, &mut frame);
        term.draw(&frame)?;

        angle += ANGLE_STEP;
        if angle >= TAU {
            angle -= TAU;
        }
        term.sleep(FRAME_DELAY);
    }

    Ok(())
}
