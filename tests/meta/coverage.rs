//! Keeps `tests/unit` in step with `src` and the crate's test targets in place

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Files that wire modules together rather than hold testable code
    const SRC_ROOTS: [&str; 2] = ["lib.rs", "main.rs"];
    // Target roots that only declare the mirrored test modules
    const UNIT_ROOTS: [&str; 1] = ["main.rs"];

    fn rust_files(dir: &Path, base: &Path, out: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                rust_files(&path, base, out)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(|e| io::Error::other(e.to_string()))?;
                out.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(())
    }

    fn testable(dir: &str, roots: &[&str]) -> BTreeSet<String> {
        let mut files = BTreeSet::new();
        rust_files(Path::new(dir), Path::new(dir), &mut files)
            .unwrap_or_else(|error| unreachable!("Failed to scan {dir}: {error}"));
        files
            .into_iter()
            .filter(|file| !roots.contains(&file.as_str()) && !file.ends_with("mod.rs"))
            .collect()
    }

    // Tests every source module has a unit test file at the same path
    // Verified by deleting tests/unit/pipeline/filter.rs
    #[test]
    fn test_src_and_unit_tests_mirror() {
        let src = testable("src", &SRC_ROOTS);
        let unit = testable("tests/unit", &UNIT_ROOTS);

        let missing: Vec<_> = src.difference(&unit).collect();
        let orphaned: Vec<_> = unit.difference(&src).collect();

        assert!(missing.is_empty(), "Source files without unit tests: {missing:?}");
        assert!(orphaned.is_empty(), "Unit tests without source files: {orphaned:?}");
    }

    // Tests every unit test file declares at least one test
    // Verified by emptying tests/unit/io/logging.rs
    #[test]
    fn test_unit_files_contain_tests() {
        let empty: Vec<String> = testable("tests/unit", &UNIT_ROOTS)
            .into_iter()
            .filter(|file| {
                fs::read_to_string(Path::new("tests/unit").join(file))
                    .map_or(true, |content| !content.contains("#[test]"))
            })
            .collect();

        assert!(empty.is_empty(), "Unit test files without tests: {empty:?}");
    }

    // Tests the end-to-end suite and benchmark targets exist
    // Verified by renaming tests/pipeline.rs
    #[test]
    fn test_test_targets_present() {
        for target in ["tests/unit/main.rs", "tests/pipeline.rs", "benches/generation.rs"] {
            assert!(Path::new(target).is_file(), "Missing target: {target}");
        }

        let pipeline = fs::read_to_string("tests/pipeline.rs").unwrap_or_default();
        assert!(pipeline.contains("#[test]"));
    }
}
