//! Tests for command-line parsing, output naming and batch processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use sawgen::WalkError;
    use sawgen::algorithm::generator::{Algorithm, RetryLimit};
    use sawgen::io::cli::{Cli, WalkProcessor};
    use sawgen::io::configuration::{
        DEFAULT_COUNT, DEFAULT_LENGTH, DEFAULT_MAX_ATTEMPTS, DEFAULT_SCALE, DEFAULT_SEED,
        DEFAULT_TRIALS,
    };
    use std::path::PathBuf;

    // Tests CLI parsing with no arguments uses defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.algorithm, Algorithm::Dimerization);
        assert_eq!(cli.length, DEFAULT_LENGTH);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.count, DEFAULT_COUNT);
        assert_eq!(cli.output, PathBuf::from("output"));
        assert_eq!(cli.scale, DEFAULT_SCALE);
        assert_eq!(cli.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(cli.trials, DEFAULT_TRIALS);
        assert!(!cli.visualize);
        assert!(!cli.analysis);
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with all available long arguments
    // Verified by renaming an argument
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--algorithm",
            "myopic",
            "--length",
            "250",
            "--seed",
            "7",
            "--count",
            "3",
            "--output",
            "walks",
            "--visualize",
            "--scale",
            "4",
            "--max-attempts",
            "10",
            "--analysis",
            "--trials",
            "50",
            "--quiet",
        ]);

        assert_eq!(cli.algorithm, Algorithm::Myopic);
        assert_eq!(cli.length, 250);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.count, 3);
        assert_eq!(cli.output, PathBuf::from("walks"));
        assert!(cli.visualize);
        assert_eq!(cli.scale, 4);
        assert_eq!(cli.max_attempts, 10);
        assert!(cli.analysis);
        assert_eq!(cli.trials, 50);
        assert!(cli.quiet);
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "program", "-a", "rejection", "-n", "8", "-s", "99", "-c", "2", "-z", "3", "-m",
            "0", "-A", "-t", "5", "-q", "-v",
        ]);

        assert_eq!(cli.algorithm, Algorithm::Rejection);
        assert_eq!(cli.length, 8);
        assert_eq!(cli.seed, 99);
        assert_eq!(cli.count, 2);
        assert_eq!(cli.scale, 3);
        assert_eq!(cli.max_attempts, 0);
        assert!(cli.analysis);
        assert_eq!(cli.trials, 5);
        assert!(cli.quiet);
        assert!(cli.visualize);
    }

    // Tests unknown algorithm names are rejected
    // Verified by accepting arbitrary strings
    #[test]
    fn test_cli_rejects_unknown_algorithm() {
        assert!(Cli::try_parse_from(["program", "--algorithm", "pivot"]).is_err());
    }

    // Tests zero max attempts means unbounded retries
    // Verified by mapping zero to a cap of zero
    #[test]
    fn test_retry_limit() {
        let unbounded = Cli::parse_from(["program", "-m", "0"]);
        assert_eq!(unbounded.retry_limit(), RetryLimit::unbounded());

        let capped = Cli::parse_from(["program", "-m", "12"]);
        assert_eq!(capped.retry_limit(), RetryLimit::at_most(12));
    }

    // Tests progress display and stage counts follow the flags
    // Verified by inverting quiet flag logic
    #[test]
    fn test_progress_flags() {
        let cli = Cli::parse_from(["program"]);
        assert!(cli.should_show_progress());
        assert_eq!(cli.stages(), 2);

        let cli = Cli::parse_from(["program", "--quiet", "--visualize"]);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.stages(), 3);
    }

    // Tests walk stems are zero padded to the batch size
    // Verified by padding to a fixed width
    #[test]
    fn test_walk_stem_padding() {
        let single = WalkProcessor::new(Cli::parse_from(["program", "-a", "simple", "-n", "5"]));
        assert_eq!(single.walk_stem(0), "simple_n5_0");

        let batch = WalkProcessor::new(Cli::parse_from(["program", "-n", "40", "-c", "12"]));
        assert_eq!(batch.walk_stem(3), "dimerization_n40_03");
        assert_eq!(batch.walk_stem(11), "dimerization_n40_11");
    }

    // Tests processing writes one PNG and one GIF per walk
    // Verified by skipping the animation export
    #[test]
    fn test_process_writes_outputs() {
        let Ok(temp_dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be available");
        };
        let output = temp_dir.path().join("walks");
        let Some(output_arg) = output.to_str() else {
            unreachable!("temporary path should be UTF-8");
        };

        let cli = Cli::parse_from([
            "program", "-n", "12", "-c", "2", "-z", "2", "-v", "-q", "-o", output_arg,
        ]);
        let mut processor = WalkProcessor::new(cli);

        let Ok(generations) = processor.process() else {
            unreachable!("processing into a temporary directory should succeed");
        };

        assert_eq!(generations.len(), 2);
        for (index, generation) in generations.iter().enumerate() {
            assert_eq!(generation.walk.len(), 13);
            assert!(generation.walk.is_self_avoiding());

            let stem = processor.walk_stem(index);
            assert!(output.join(format!("{stem}.png")).exists());
            assert!(output.join(format!("{stem}_animation.gif")).exists());
        }
    }

    // Tests equal seeds reproduce equal batches
    // Verified by seeding each walk from entropy
    #[test]
    fn test_process_is_reproducible() {
        let Ok(temp_dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be available");
        };
        let Some(output_arg) = temp_dir.path().to_str() else {
            unreachable!("temporary path should be UTF-8");
        };
        let args = ["program", "-n", "30", "-c", "3", "-s", "5", "-q", "-o", output_arg];

        let first = WalkProcessor::new(Cli::parse_from(args)).process().ok();
        let second = WalkProcessor::new(Cli::parse_from(args)).process().ok();

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    // Tests a zero scale is rejected before anything is generated
    // Verified by removing the scale validation
    #[test]
    fn test_process_rejects_zero_scale() {
        let Ok(temp_dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be available");
        };
        let output = temp_dir.path().join("unused");
        let Some(output_arg) = output.to_str() else {
            unreachable!("temporary path should be UTF-8");
        };

        let cli = Cli::parse_from(["program", "-z", "0", "-q", "-o", output_arg]);
        let result = WalkProcessor::new(cli).process();

        assert!(matches!(
            result,
            Err(WalkError::InvalidParameter {
                parameter: "scale",
                ..
            })
        ));
        assert!(!output.exists());
    }

    // Tests the retry cap surfaces from the processor
    // Verified by ignoring the max attempts argument
    #[test]
    fn test_process_surfaces_retry_limit() {
        let Ok(temp_dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be available");
        };
        let Some(output_arg) = temp_dir.path().to_str() else {
            unreachable!("temporary path should be UTF-8");
        };

        // One attempt at a 60-step rejection walk essentially never succeeds
        let cli = Cli::parse_from([
            "program", "-a", "rejection", "-n", "60", "-m", "1", "-q", "-o", output_arg,
        ]);
        assert!(matches!(
            WalkProcessor::new(cli).process(),
            Err(WalkError::RetriesExceeded { attempts: 1, .. })
        ));
    }
}
