//! Frame-by-frame GIF animation of a walk

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, WalkError};
use crate::io::image::{END, START, WalkCanvas};
use crate::spatial::{Point, Walk};
use image::Frame;

/// Replays a walk one step per frame
///
/// All frames share the canvas of the complete walk so the view does not
/// move while the walk grows. Each frame shows the path so far, the start
/// marker and an end marker on the current head.
pub struct WalkAnimation {
    walk: Walk,
    scale: u32,
}

impl WalkAnimation {
    /// Prepare an animation of `walk` rendered at `scale` pixels per lattice unit
    pub const fn new(walk: Walk, scale: u32) -> Self {
        Self { walk, scale }
    }

    /// Number of frames a full export produces before skipping
    ///
    /// One frame per point plus the held final frame.
    pub const fn frame_count(&self) -> usize {
        self.walk.len() + 1
    }

    /// Export the animation as a GIF with automatic frame skipping
    ///
    /// Automatically skips frames if the requested frame rate exceeds viewer
    /// capabilities. For example, a 5ms delay (200 FPS) against a 20ms viewer
    /// minimum keeps every 4th frame to maintain the apparent animation speed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The walk has no points or cannot be rendered at this scale
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1))
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor as usize)?;

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| WalkError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| WalkError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| WalkError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    /// Render the frames that `export_gif` would encode
    ///
    /// # Errors
    ///
    /// Returns an error if the walk has no points or cannot be rendered at this scale
    pub fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Result<Vec<Frame>> {
        let skip_factor = skip_factor.max(1);
        let mut path = WalkCanvas::for_walk(&self.walk, self.scale)?;
        let mut frames = Vec::with_capacity(self.frame_count().div_ceil(skip_factor) + 1);

        let points = self.walk.points();
        for (index, point) in points.iter().enumerate() {
            if let Some(previous) = index.checked_sub(1).and_then(|i| points.get(i)) {
                path.draw_segment(*previous, *point);
            }

            let is_last = index + 1 == points.len();
            if index % skip_factor == 0 || is_last {
                frames.push(self.render_frame(&path, *point, delay_ms));
            }
        }

        // Final frame displays longer for better visibility
        if let Some(last_frame_img) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms * FINAL_FRAME_HOLD, 1),
            ));
        }

        Ok(frames)
    }

    fn render_frame(&self, path: &WalkCanvas, head: Point, delay_ms: u32) -> Frame {
        let mut canvas = path.clone();
        canvas.mark(self.walk.start(), START);
        canvas.mark(head, END);

        Frame::from_parts(
            canvas.to_image(),
            0,
            0,
            image::Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}
