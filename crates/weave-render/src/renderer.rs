//! Renderer trait and HeadlessRenderer stub.
//!
//! The renderer is handed a frame between steps, never during one, so it
//! always sees a fully relaxed cloth.

use weave_math::Vec2;
use weave_mesh::ClothMesh;
use weave_solver::Simulation;
use weave_types::WeaveResult;

/// A single render frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Steps completed when the frame was taken.
    pub step: u64,
    /// Point positions, row-major.
    pub positions: Vec<Vec2>,
}

impl RenderFrame {
    pub fn new(step: u64, positions: Vec<Vec2>) -> Self {
        Self { step, positions }
    }

    /// Captures the current state of a simulation.
    pub fn capture(sim: &Simulation) -> Self {
        Self::new(sim.step_count(), sim.positions())
    }
}

/// Trait for presenting simulation output.
///
/// # Implementations
/// - [`HeadlessRenderer`]: Discards frames (benchmarks, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter): Frame sequence as JSON
pub trait Renderer: Send {
    /// Initialize the renderer with the cloth topology.
    fn init(&mut self, mesh: &ClothMesh) -> WeaveResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame) -> WeaveResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> WeaveResult<()>;

    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer: counts frames and drops them.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u32,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _mesh: &ClothMesh) -> WeaveResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame) -> WeaveResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> WeaveResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
