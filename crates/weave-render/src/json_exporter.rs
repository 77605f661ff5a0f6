//! JSON frame exporter: writes per-frame cloth data for visual inspection.
//!
//! Topology (stick endpoints and pinned flags) is written once; each frame
//! carries only the interleaved positions. The whole animation is
//! serialized on `finalize()`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use weave_math::{to_array, Bounds2};
use weave_mesh::ClothMesh;
use weave_types::{WeaveError, WeaveResult};

use crate::renderer::{RenderFrame, Renderer};

/// A single frame of captured positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameData {
    pub step: u64,
    /// Interleaved `[x0, y0, x1, y1, ...]`.
    pub positions: Vec<f32>,
}

/// Complete animation data as written to disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationData {
    pub rows: usize,
    pub cols: usize,
    pub point_count: usize,
    pub pinned: Vec<bool>,
    /// One `[a, b]` pair per stick, in emission order.
    pub sticks: Vec<[u32; 2]>,
    /// Box covering every submitted frame, for fitting the view.
    pub bounds: Option<Bounds2>,
    pub frames: Vec<FrameData>,
}

/// Exports simulation frames to a JSON file.
///
/// ```text
/// let mut exporter = JsonFrameExporter::new("frames.json");
/// exporter.init(sim.mesh())?;
/// // ... submit_frame() after each step ...
/// exporter.finalize()?;
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    data: AnimationData,
}

impl JsonFrameExporter {
    /// Creates an exporter that will write to `output_path`.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            data: AnimationData::default(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Reads an animation written by `finalize`.
    pub fn load(path: impl AsRef<Path>) -> WeaveResult<AnimationData> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| WeaveError::Serialization(format!("JSON parse failed: {e}")))
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, mesh: &ClothMesh) -> WeaveResult<()> {
        self.data = AnimationData {
            rows: mesh.rows(),
            cols: mesh.cols(),
            point_count: mesh.point_count(),
            pinned: mesh.points().iter().map(|p| p.pinned).collect(),
            sticks: mesh.sticks().iter().map(|s| [s.a.0, s.b.0]).collect(),
            bounds: None,
            frames: Vec::new(),
        };
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> WeaveResult<()> {
        if frame.positions.len() != self.data.point_count {
            return Err(WeaveError::InvalidTopology(format!(
                "frame has {} points, exporter was initialized with {}",
                frame.positions.len(),
                self.data.point_count
            )));
        }
        if let Some(frame_bounds) = Bounds2::from_points(frame.positions.iter().copied()) {
            self.data.bounds = Some(match self.data.bounds {
                Some(b) => b.union(frame_bounds),
                None => frame_bounds,
            });
        }
        let positions = frame.positions.iter().flat_map(|&p| to_array(p)).collect();
        self.data.frames.push(FrameData {
            step: frame.step,
            positions,
        });
        Ok(())
    }

    fn finalize(&mut self) -> WeaveResult<()> {
        let json = serde_json::to_string(&self.data)
            .map_err(|e| WeaveError::Serialization(format!("JSON serialization failed: {e}")))?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.data.frames.len() as u32
    }
}
