//! Terminal progress for a batch of walks processed one after another

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Processing step of a single walk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Drawing the walk from its generator
    Generating,
    /// Writing the PNG
    Rendering,
    /// Encoding the GIF
    Animating,
}

impl Stage {
    /// Message shown next to the walk bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Generating => "generating",
            Self::Rendering => "rendering",
            Self::Animating => "animating",
        }
    }

    /// Stages finished before this one starts
    const fn completed(self) -> u64 {
        match self {
            Self::Generating => 0,
            Self::Rendering => 1,
            Self::Animating => 2,
        }
    }
}

/// Progress display for a batch of walks
///
/// Walks are processed sequentially, so a single bar follows the current
/// walk through its stages. Batches of more than one walk add a bar
/// counting finished walks.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    walk_bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static WALK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Walks: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        let multi_progress = MultiProgress::new();
        let walk_bar = ProgressBar::new(0);
        walk_bar.set_style(WALK_STYLE.clone());

        Self {
            multi_progress,
            batch_bar: None,
            walk_bar,
        }
    }

    /// Attach the bars for a batch of `walk_count` walks
    pub fn initialize(&mut self, walk_count: usize) {
        if walk_count > 1 {
            let batch_bar = ProgressBar::new(walk_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
        self.walk_bar = self.multi_progress.add(self.walk_bar.clone());
    }

    /// Point the walk bar at a new walk with `stages` stages
    pub fn start_walk(&self, label: &str, stages: usize) {
        self.walk_bar.set_length(stages as u64);
        self.walk_bar.set_prefix(label.to_string());
        self.enter(Stage::Generating);
    }

    /// Show that the current walk has moved on to `stage`
    pub fn enter(&self, stage: Stage) {
        self.walk_bar.set_position(stage.completed());
        self.walk_bar.set_message(stage.label());
    }

    /// Fill the walk bar and count the walk as finished
    pub fn complete_walk(&self) {
        if let Some(length) = self.walk_bar.length() {
            self.walk_bar.set_position(length);
        }
        self.walk_bar.set_message("done");

        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All walks generated");
        }
        self.walk_bar.finish_and_clear();
        let _ = self.multi_progress.clear();
    }
}
