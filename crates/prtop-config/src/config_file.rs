use std::{
    env,
    path::{Path, PathBuf},
};

const CONFIG_FILE: &str = ".prtop.toml";

/// Paths searched for a config file, in priority order
///
/// 1. `.prtop.toml` in the current working directory
/// 2. `.prtop.toml` in the home directory
/// 3. `config.toml` in the platform config directory
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];

    if let Some(home) = env::var_os("HOME") {
        candidates.push(PathBuf::from(home).join(CONFIG_FILE));
    }

    if let Ok(path) = crate::paths::app_config_path() {
        candidates.push(path);
    }

    candidates
}

/// Load config file content from the first candidate that can be read
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    read_first(&config_file_candidates())
}

fn read_first(candidates: &[PathBuf]) -> Option<String> {
    candidates.iter().find_map(|path| read(path))
}

fn read(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    log::debug!("Loaded config from {}", path.display());
    Some(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("prtop-config-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_first_readable_candidate_wins() {
        let dir = scratch_dir("first");
        let missing = dir.join("missing.toml");
        let second = dir.join("second.toml");
        let third = dir.join("third.toml");
        std::fs::write(&second, "hide_skipped = false").unwrap();
        std::fs::write(&third, "hide_skipped = true").unwrap();

        let content = read_first(&[missing, second, third]);

        assert_eq!(content.as_deref(), Some("hide_skipped = false"));
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_no_candidates_found() {
        let dir = scratch_dir("none");
        assert_eq!(read_first(&[dir.join("a.toml"), dir.join("b.toml")]), None);
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_cwd_file_is_searched_first() {
        let candidates = config_file_candidates();
        assert_eq!(candidates[0], PathBuf::from(CONFIG_FILE));
    }
}
