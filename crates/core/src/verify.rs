use std::path::Path;

/// Model components every complete download must contain.
pub const REQUIRED_COMPONENTS: [&str; 3] = ["vae", "transformer", "scheduler"];

/// True only if every required component directory exists under `cache_dir`
/// and holds a `config.json`. Read-only; short-circuits on the first miss.
pub fn verify_components(cache_dir: &Path) -> bool {
    for component in REQUIRED_COMPONENTS {
        let component_path = cache_dir.join(component);

        if !component_path.exists() {
            return false;
        }

        if !component_path.join("config.json").exists() {
            return false;
        }
    }

    true
}

/// Components failing the check, for the warning message.
pub fn missing_components(cache_dir: &Path) -> Vec<&'static str> {
    REQUIRED_COMPONENTS
        .iter()
        .filter(|component| {
            let component_path = cache_dir.join(component);
            !component_path.join("config.json").exists()
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn populate_component(root: &Path, name: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.json"), "{}").unwrap();
    }

    fn complete_cache() -> TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for component in REQUIRED_COMPONENTS {
            populate_component(tmp.path(), component);
        }
        tmp
    }

    #[test]
    fn all_components_present_verifies() {
        let tmp = complete_cache();
        assert!(verify_components(tmp.path()));
        assert!(missing_components(tmp.path()).is_empty());
    }

    #[test]
    fn missing_component_directory_fails() {
        let tmp = complete_cache();
        fs::remove_dir_all(tmp.path().join("scheduler")).unwrap();

        assert!(!verify_components(tmp.path()));
        assert_eq!(missing_components(tmp.path()), vec!["scheduler"]);
    }

    #[test]
    fn component_without_config_fails() {
        let tmp = complete_cache();
        fs::remove_file(tmp.path().join("transformer").join("config.json")).unwrap();

        assert!(!verify_components(tmp.path()));
        assert_eq!(missing_components(tmp.path()), vec!["transformer"]);
    }

    #[test]
    fn empty_cache_reports_everything_missing() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!verify_components(tmp.path()));
        assert_eq!(missing_components(tmp.path()), REQUIRED_COMPONENTS.to_vec());
    }
}
