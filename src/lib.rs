//! Rotating 3D torus rendered as animated ASCII art in the terminal.
//!
//! The render core is a per-frame pipeline: sweep the parametric torus
//! surface, rotate and project each sample, resolve visibility with a
//! z-buffer, and map luminance onto a glyph ramp. The `terminal` module
//! wraps the crossterm session the animation draws into.

pub mod donut;
pub mod framebuffer;
pub mod geometry;
pub mod terminal;

pub use framebuffer::FrameBuffer;
pub use geometry::RenderContext;
pub use terminal::Terminal;
