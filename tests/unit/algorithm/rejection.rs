//! Tests for global restart-on-collision sampling

#[cfg(test)]
mod tests {
    use sawgen::WalkError;
    use sawgen::algorithm::generator::{RetryLimit, WalkGenerator};
    use sawgen::algorithm::rejection::RejectionSampler;
    use sawgen::algorithm::source::{RandomSelector, ScriptedSource};
    use sawgen::spatial::{Point, Walk, is_saw};

    // Tests a collision discards the attempt and restarts at the origin
    // Verified by continuing growth after the collision
    #[test]
    fn test_collision_restarts_from_origin() {
        // East then West collides with the origin; East then North succeeds
        let mut source = ScriptedSource::new([0, 2, 0, 1]);
        let sampler = RejectionSampler::new(RetryLimit::unbounded());

        let Ok((walk, attempts)) = sampler.generate_counted(2, &mut source) else {
            unreachable!("second attempt should succeed");
        };

        assert_eq!(attempts, 2);
        assert_eq!(
            walk,
            Walk::from_points(vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)])
        );
        assert_eq!(source.remaining(), 0);
    }

    // Tests a collision with an earlier point, not just the previous one
    // Verified by only checking the point two steps back
    #[test]
    fn test_detects_loop_closure() {
        // E, N, W, S returns to the origin on the fourth step
        let mut source = ScriptedSource::new([0, 1, 2, 3, 0, 0, 0, 0]);
        let sampler = RejectionSampler::default();

        let Ok((walk, attempts)) = sampler.generate_counted(4, &mut source) else {
            unreachable!("straight second attempt should succeed");
        };

        assert_eq!(attempts, 2);
        assert_eq!(walk.end(), Point::new(4, 0));
    }

    // Tests the attempt cap surfaces a distinct error
    // Verified by retrying past the cap
    #[test]
    fn test_retry_limit_exceeded() {
        let mut source = ScriptedSource::new([0, 2, 0, 2, 0, 2]);
        let sampler = RejectionSampler::new(RetryLimit::at_most(2));

        let result = sampler.generate_counted(2, &mut source);

        assert!(matches!(
            result,
            Err(WalkError::RetriesExceeded {
                length: 2,
                attempts: 2,
                ..
            })
        ));
        assert_eq!(source.remaining(), 2);
    }

    // Tests accepted walks are full length and self-avoiding across seeds
    // Verified by accepting the first attempt unconditionally
    #[test]
    fn test_walks_are_self_avoiding() {
        let sampler = RejectionSampler::default();
        for seed in 0..30 {
            let mut selector = RandomSelector::new(seed);
            let Ok(walk) = sampler.generate(8, &mut selector) else {
                unreachable!("unbounded sampling terminates for short walks");
            };
            assert_eq!(walk.len(), 9);
            assert!(walk.is_rooted());
            assert!(walk.has_unit_steps());
            assert!(is_saw(&walk, 8));
        }
    }

    // Tests the zero-length walk needs one attempt and no draws
    // Verified by starting the attempt counter at zero
    #[test]
    fn test_zero_length() {
        let mut source = ScriptedSource::default();
        let result = RejectionSampler::default().generate_counted(0, &mut source);
        assert_eq!(result.ok(), Some((Walk::new(), 1)));
    }
}
