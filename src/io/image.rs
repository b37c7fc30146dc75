//! PNG rendering of walks on a cropped, scaled canvas

use crate::io::configuration::{
    BACKGROUND_COLOR, CANVAS_MARGIN, END_COLOR, MAX_CANVAS_DIMENSION, PATH_COLOR, START_COLOR,
};
use crate::io::error::{Result, WalkError, invalid_parameter};
use crate::spatial::{Bounds, Point, Walk};
use image::{Rgba, RgbaImage};
use ndarray::Array2;

/// Pixel class of an untouched canvas cell
pub const BACKGROUND: u8 = 0;
/// Pixel class of a walk segment
pub const PATH: u8 = 1;
/// Pixel class of the start marker
pub const START: u8 = 2;
/// Pixel class of the end marker
pub const END: u8 = 3;

const PALETTE: [[u8; 4]; 4] = [BACKGROUND_COLOR, PATH_COLOR, START_COLOR, END_COLOR];

/// Raster of pixel classes covering a walk's bounding box plus margin
///
/// Lattice y grows upwards while image rows grow downwards, so rows are
/// flipped when mapping points to pixels.
#[derive(Clone, Debug)]
pub struct WalkCanvas {
    pixels: Array2<u8>,
    bounds: Bounds,
    scale: u32,
}

impl WalkCanvas {
    /// Create a blank canvas large enough for every point of `walk`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The walk has no points
    /// - `scale` is zero
    /// - The canvas would exceed the maximum dimension
    pub fn for_walk(walk: &Walk, scale: u32) -> Result<Self> {
        let bounds = walk.bounds().ok_or(WalkError::InvalidWalk {
            reason: "A walk without points cannot be rendered".to_string(),
        })?;
        if scale == 0 {
            return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
        }

        let width = canvas_side(bounds.width(), scale);
        let height = canvas_side(bounds.height(), scale);
        match (width, height) {
            (Some(w), Some(h)) if w <= MAX_CANVAS_DIMENSION && h <= MAX_CANVAS_DIMENSION => {
                Ok(Self {
                    pixels: Array2::from_elem((h as usize, w as usize), BACKGROUND),
                    bounds,
                    scale,
                })
            }
            _ => Err(invalid_parameter(
                "scale",
                &scale,
                &format!("canvas for this walk would exceed {MAX_CANVAS_DIMENSION} pixels"),
            )),
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.ncols() as u32
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.nrows() as u32
    }

    /// Pixel class at image coordinates, if inside the canvas
    pub fn class_at(&self, x: u32, y: u32) -> Option<u8> {
        self.pixels.get([y as usize, x as usize]).copied()
    }

    /// Image coordinates `[row, col]` of a lattice point
    fn pixel_of(&self, point: Point) -> Option<[usize; 2]> {
        let col = i64::from(point.x) - i64::from(self.bounds.min.x) + i64::from(CANVAS_MARGIN);
        let row = i64::from(self.bounds.max.y) - i64::from(point.y) + i64::from(CANVAS_MARGIN);
        let scale = i64::from(self.scale);
        let row = usize::try_from(row * scale).ok()?;
        let col = usize::try_from(col * scale).ok()?;
        (row < self.pixels.nrows() && col < self.pixels.ncols()).then_some([row, col])
    }

    /// Draw the straight segment between two lattice points
    pub fn draw_segment(&mut self, from: Point, to: Point) {
        let (Some([r0, c0]), Some([r1, c1])) = (self.pixel_of(from), self.pixel_of(to)) else {
            return;
        };
        let (r0, c0, r1, c1) = (r0 as i64, c0 as i64, r1 as i64, c1 as i64);
        let length = (r1 - r0).abs().max((c1 - c0).abs()).max(1);

        for t in 0..=length {
            let row = r0 + (r1 - r0) * t / length;
            let col = c0 + (c1 - c0) * t / length;
            if let Some(pixel) = self.pixels.get_mut([row as usize, col as usize]) {
                *pixel = PATH;
            }
        }
    }

    /// Draw every segment of `walk`
    pub fn draw_path(&mut self, walk: &Walk) {
        for pair in walk.points().windows(2) {
            if let [from, to] = pair {
                self.draw_segment(*from, *to);
            }
        }
    }

    /// Stamp a square marker of the given class centred on a lattice point
    pub fn mark(&mut self, point: Point, class: u8) {
        let Some([row, col]) = self.pixel_of(point) else {
            return;
        };
        let half = (self.scale / 3).max(1) as usize;

        for r in row.saturating_sub(half)..=row + half {
            for c in col.saturating_sub(half)..=col + half {
                if let Some(pixel) = self.pixels.get_mut([r, c]) {
                    *pixel = class;
                }
            }
        }
    }

    /// Draw a complete walk with start and end markers
    pub fn draw_walk(&mut self, walk: &Walk) {
        self.draw_path(walk);
        self.mark(walk.start(), START);
        self.mark(walk.end(), END);
    }

    /// Convert pixel classes to colours
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let class = self.class_at(x, y).unwrap_or(BACKGROUND);
            Rgba(
                PALETTE
                    .get(class as usize)
                    .copied()
                    .unwrap_or(BACKGROUND_COLOR),
            )
        })
    }
}

/// Pixel length of a canvas side covering `cells` lattice columns or rows
fn canvas_side(cells: u32, scale: u32) -> Option<u32> {
    cells
        .checked_sub(1)?
        .checked_add(2 * CANVAS_MARGIN)?
        .checked_mul(scale)?
        .checked_add(1)
}

/// Render a walk to a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The walk cannot be rendered at this scale
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_walk_as_png(walk: &Walk, scale: u32, output_path: &str) -> Result<()> {
    let mut canvas = WalkCanvas::for_walk(walk, scale)?;
    canvas.draw_walk(walk);
    let img = canvas.to_image();

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| WalkError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| WalkError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
