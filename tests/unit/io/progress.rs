//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use identicon::io::progress::ProgressManager;

    // Tests the full lifecycle for a single input without a bar
    // Verified by unconditionally unwrapping the bar
    #[test]
    fn test_single_input_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);

        pm.start_input("hoyups");
        pm.complete_input();
        pm.finish();
    }

    // Tests a multi-input batch drives the bar through every input
    // Verified by finishing the bar before the last input
    #[test]
    fn test_batch_lifecycle() {
        let mut pm = ProgressManager::default();
        pm.initialize(3);

        for input in ["a", "b", "c"] {
            pm.start_input(input);
            pm.complete_input();
        }
        pm.finish();
    }

    // Tests an empty batch is handled
    // Verified by creating a zero-length bar
    #[test]
    fn test_empty_batch() {
        let mut pm = ProgressManager::new();
        pm.initialize(0);
        pm.finish();
    }
}
