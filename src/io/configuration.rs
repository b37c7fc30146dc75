//! Algorithm constants and runtime configuration defaults

// Generation limits
/// Largest accepted walk length, keeps every reachable coordinate inside `i32`
pub const MAX_WALK_LENGTH: usize = 1_000_000;

/// Longest walk whose visited set uses a dense bit grid
///
/// Covers rejection sampling and the dimerization base case; myopic walks
/// usually trap long before filling a larger grid.
pub const MAX_DENSE_VISITED_RADIUS: usize = 64;

/// Walks at or below this length are built directly by the myopic generator
pub const DIMERIZATION_BASE_CASE_LENGTH: usize = 3;

// Rejection sampling becomes impractically slow beyond this length
/// Longest walk rejection sampling is expected to handle
pub const REJECTION_PRACTICAL_LENGTH: usize = 10;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of steps per walk
pub const DEFAULT_LENGTH: usize = 80;

/// Default number of walks per run
pub const DEFAULT_COUNT: usize = 1;

/// Default cap on whole-walk attempts for the retrying generators
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

/// Default number of samples drawn by the estimators
pub const DEFAULT_TRIALS: usize = 1000;

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

// Rendering settings
/// Pixels per lattice unit
pub const DEFAULT_SCALE: u32 = 8;
/// Empty lattice units around the walk's bounding box
pub const CANVAS_MARGIN: u32 = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum rendered image side in pixels
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

// Figure colours
/// Figure background
pub const BACKGROUND_COLOR: [u8; 4] = [169, 169, 169, 255];
/// Walk segments
pub const PATH_COLOR: [u8; 4] = [0, 0, 255, 255];
/// Marker on the first point
pub const START_COLOR: [u8; 4] = [0, 128, 0, 255];
/// Marker on the last point
pub const END_COLOR: [u8; 4] = [255, 0, 0, 255];

// Animation settings
/// Delay between GIF animation frames (30 frames per second)
pub const GIF_FRAME_DELAY_MS: u32 = 33;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Multiplier applied to the frame delay of the held final frame
pub const FINAL_FRAME_HOLD: u32 = 25;

// Output settings
/// Suffix added to animation filenames
pub const ANIMATION_SUFFIX: &str = "_animation";
