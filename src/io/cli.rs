//! Command-line interface for generating, rendering and analysing walks

use crate::algorithm::dimerization::Dimerization;
use crate::algorithm::generator::{Algorithm, Generation, RetryLimit};
use crate::algorithm::myopic::MyopicGenerator;
use crate::algorithm::rejection::RejectionSampler;
use crate::algorithm::simple::SimpleRandomWalk;
use crate::algorithm::source::RandomSelector;
use crate::analysis::statistics::{
    DistanceEstimate, estimate_end_to_end, estimate_rejection_cost, estimate_trap_rate,
};
use crate::io::configuration::{
    ANIMATION_SUFFIX, DEFAULT_COUNT, DEFAULT_LENGTH, DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_DIR,
    DEFAULT_SCALE, DEFAULT_SEED, DEFAULT_TRIALS, GIF_FRAME_DELAY_MS, REJECTION_PRACTICAL_LENGTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_walk_as_png;
use crate::io::progress::{ProgressManager, Stage};
use crate::io::visualization::WalkAnimation;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sawgen")]
#[command(
    author,
    version,
    about = "Generate self-avoiding walks on the square lattice"
)]
/// Command-line arguments for the walk generation tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Generation algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::Dimerization)]
    pub algorithm: Algorithm,

    /// Number of steps per walk
    #[arg(short = 'n', long, default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of walks to generate
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Directory receiving rendered walks
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Also export each walk as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Pixels per lattice unit in rendered images
    #[arg(short = 'z', long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Attempt cap for retrying generators (0 retries forever)
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Run Monte-Carlo estimates for the chosen algorithm
    #[arg(short = 'A', long)]
    pub analysis: bool,

    /// Samples drawn per estimate
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Retry limit requested on the command line
    pub const fn retry_limit(&self) -> RetryLimit {
        if self.max_attempts == 0 {
            RetryLimit::unbounded()
        } else {
            RetryLimit::at_most(self.max_attempts)
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Number of progress stages per walk
    pub const fn stages(&self) -> usize {
        if self.visualize { 3 } else { 2 }
    }
}

/// Orchestrates generation, rendering and analysis of a batch of walks
pub struct WalkProcessor {
    cli: Cli,
    selector: RandomSelector,
    progress_manager: Option<ProgressManager>,
}

impl WalkProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let selector = RandomSelector::new(cli.seed);

        Self {
            cli,
            selector,
            progress_manager,
        }
    }

    /// Generate and render walks according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid, generation fails, or
    /// output cannot be written
    pub fn process(&mut self) -> Result<Vec<Generation>> {
        self.validate()?;
        self.warn_if_impractical();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut generations = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            generations.push(self.process_walk(index)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        if self.cli.analysis {
            self.run_analysis()?;
        }

        Ok(generations)
    }

    fn validate(&self) -> Result<()> {
        if self.cli.scale == 0 {
            return Err(invalid_parameter(
                "scale",
                &self.cli.scale,
                &"must be at least 1",
            ));
        }
        if self.cli.analysis && self.cli.trials == 0 {
            return Err(invalid_parameter(
                "trials",
                &self.cli.trials,
                &"must be at least 1",
            ));
        }
        Ok(())
    }

    // Allow print for user feedback on a slow configuration
    #[allow(clippy::print_stderr)]
    fn warn_if_impractical(&self) {
        if self.cli.algorithm == Algorithm::Rejection
            && self.cli.length > REJECTION_PRACTICAL_LENGTH
            && !self.cli.quiet
        {
            eprintln!(
                "Warning: rejection sampling is only practical up to length {REJECTION_PRACTICAL_LENGTH}; \
                 length {} may take very long (consider --algorithm dimerization)",
                self.cli.length
            );
        }
    }

    // Allow print for user feedback on trapped walks
    #[allow(clippy::print_stderr)]
    fn process_walk(&mut self, index: usize) -> Result<Generation> {
        let stem = self.walk_stem(index);

        if let Some(ref pm) = self.progress_manager {
            pm.start_walk(&stem, self.cli.stages());
        }

        let generation =
            self.cli
                .algorithm
                .run(self.cli.length, self.cli.retry_limit(), &mut self.selector)?;

        if generation.stuck && !self.cli.quiet {
            eprintln!(
                "{stem}: trapped at step {} of {}",
                generation.steps, self.cli.length
            );
        }

        if let Some(ref pm) = self.progress_manager {
            pm.enter(Stage::Rendering);
        }

        let png_path = self.cli.output.join(format!("{stem}.png"));
        export_walk_as_png(&generation.walk, self.cli.scale, path_str(&png_path)?)?;

        if self.cli.visualize {
            if let Some(ref pm) = self.progress_manager {
                pm.enter(Stage::Animating);
            }

            let gif_path = self.cli.output.join(format!("{stem}{ANIMATION_SUFFIX}.gif"));
            WalkAnimation::new(generation.walk.clone(), self.cli.scale)
                .export_gif(path_str(&gif_path)?, GIF_FRAME_DELAY_MS)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_walk();
        }

        Ok(generation)
    }

    /// File stem `<algorithm>_n<length>_<index>` shared by a walk's outputs
    pub fn walk_stem(&self, index: usize) -> String {
        let width = self.cli.count.saturating_sub(1).max(1).to_string().len();
        format!(
            "{}_n{}_{index:0width$}",
            self.cli.algorithm.name(),
            self.cli.length
        )
    }

    // Allow print for the analysis report, which is the requested output
    #[allow(clippy::print_stdout)]
    fn run_analysis(&mut self) -> Result<()> {
        let length = self.cli.length;
        let trials = self.cli.trials;
        let limit = self.cli.retry_limit();

        println!(
            "{} walks, length {length}, {trials} trials",
            self.cli.algorithm.name()
        );

        match self.cli.algorithm {
            Algorithm::Simple => {
                let estimate =
                    estimate_end_to_end(&SimpleRandomWalk, length, trials, &mut self.selector)?;
                println!("{}", describe_distance(&estimate));
            }
            Algorithm::Myopic => {
                let estimate =
                    estimate_trap_rate(&MyopicGenerator, length, trials, &mut self.selector)?;
                println!(
                    "trapped: {}/{} ({:.2}%)",
                    estimate.trapped,
                    estimate.trials,
                    estimate.rate() * 100.0
                );
                if let Some(mean) = estimate.mean_trapped_steps {
                    println!("mean trap step: {mean:.1}");
                }
            }
            Algorithm::Rejection => {
                let sampler = RejectionSampler::new(limit);
                let cost = estimate_rejection_cost(&sampler, length, trials, &mut self.selector)?;
                println!(
                    "attempts per walk: mean {:.2}, max {}",
                    cost.mean_attempts, cost.max_attempts
                );
                let estimate = estimate_end_to_end(&sampler, length, trials, &mut self.selector)?;
                println!("{}", describe_distance(&estimate));
            }
            Algorithm::Dimerization => {
                let estimate = estimate_end_to_end(
                    &Dimerization::new(limit),
                    length,
                    trials,
                    &mut self.selector,
                )?;
                println!("{}", describe_distance(&estimate));
            }
        }

        Ok(())
    }
}

fn describe_distance(estimate: &DistanceEstimate) -> String {
    let exponent = estimate
        .apparent_exponent()
        .map_or_else(|| "n/a".to_string(), |nu| format!("{nu:.3}"));
    format!(
        "mean squared end-to-end distance: {:.2} ± {:.2} (apparent exponent {exponent})",
        estimate.mean_squared, estimate.standard_error
    )
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| crate::io::error::io_error("Invalid output path"))
}
