use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Asset file suffix the reconciler is allowed to touch
pub const ASSET_SUFFIX: &str = ".woff2";

/// Compute which existing asset files should be deleted.
///
/// Only names ending in `.woff2` are considered; the target directory may
/// be shared with other asset kinds, which are never touched.
#[must_use]
pub fn stale(existing: &[String], wanted: &HashSet<String>) -> Vec<String> {
    existing
        .iter()
        .filter(|name| name.ends_with(ASSET_SUFFIX))
        .filter(|name| !wanted.contains(*name))
        .cloned()
        .collect()
}

/// Delete asset files in `dir` that are not in the wanted set.
///
/// Best effort: listing or deletion failures are logged and never abort
/// the run.
pub fn run(dir: &Path, wanted: &HashSet<String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to list {} for cleanup: {e}", dir.display());
            return;
        }
    };

    let existing: Vec<String> = entries
        .flatten()
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();

    for name in stale(&existing, wanted) {
        let path = dir.join(&name);
        tracing::info!("Removing unreferenced font file: {}", path.display());
        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!("Failed to remove {}: {e}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn wanted(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn existing(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_stale_ignores_other_suffixes() {
        let deletions = stale(
            &existing(&["readme.txt", "logo.svg", "Roboto_regular.woff2"]),
            &wanted(&["Roboto_regular.woff2"]),
        );
        assert!(deletions.is_empty());
    }

    #[test]
    fn test_stale_selects_unwanted_assets() {
        let deletions = stale(
            &existing(&[
                "Roboto_regular.woff2",
                "Roboto_300.woff2",
                "Lato_italic.woff2",
            ]),
            &wanted(&["Roboto_regular.woff2"]),
        );
        assert_eq!(deletions.len(), 2);
        assert!(deletions.contains(&"Roboto_300.woff2".to_string()));
        assert!(deletions.contains(&"Lato_italic.woff2".to_string()));
    }

    #[test]
    fn test_stale_empty_wanted_deletes_all_assets() {
        let deletions = stale(
            &existing(&["a.woff2", "b.woff2", "c.css"]),
            &HashSet::new(),
        );
        assert_eq!(deletions, vec!["a.woff2".to_string(), "b.woff2".to_string()]);
    }

    #[test]
    fn test_run_deletes_stale_and_keeps_rest() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Roboto_regular.woff2"), "keep").unwrap();
        fs::write(tmp.path().join("Roboto_300.woff2"), "stale").unwrap();
        fs::write(tmp.path().join("fonts.css"), "not an asset").unwrap();

        run(tmp.path(), &wanted(&["Roboto_regular.woff2"]));

        assert!(tmp.path().join("Roboto_regular.woff2").exists());
        assert!(!tmp.path().join("Roboto_300.woff2").exists());
        assert!(tmp.path().join("fonts.css").exists());
    }

    #[test]
    fn test_run_missing_dir_does_not_panic() {
        let tmp = TempDir::new().unwrap();
        run(&tmp.path().join("nonexistent"), &HashSet::new());
    }
}
