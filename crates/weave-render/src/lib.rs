//! # weave-render
//!
//! Pluggable presentation layer for Weave.
//!
//! Provides a `Renderer` trait with a `HeadlessRenderer` stub and a
//! `JsonFrameExporter` that writes point positions and stick endpoints per
//! frame, for playback in an external 2D viewer.

pub mod json_exporter;
pub mod renderer;
pub use json_exporter::{AnimationData, FrameData, JsonFrameExporter};
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
