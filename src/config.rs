//! Runtime configuration read from the environment and command line.

use std::path::PathBuf;

pub const DEFAULT_SAVE_PATH: &str = "loopy-progress.json";

/// Which session the binary runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Play,
    Editor,
}

impl Mode {
    /// `--editor` anywhere in the arguments selects the editor.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if args.into_iter().any(|a| a.as_ref() == "--editor") {
            Mode::Editor
        } else {
            Mode::Play
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Progress file
    pub save_path: PathBuf,
    /// JSON level pack replacing the built-in levels
    pub levels_path: Option<PathBuf>,
    /// Scramble seed; taken from the clock when unset
    pub seed: Option<u32>,
    /// Log file; logging is off when unset
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Play,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            levels_path: None,
            seed: None,
            log_path: None,
        }
    }
}

impl Config {
    /// Create from `LOOPY_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let save_path = non_empty("LOOPY_SAVE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH));
        let levels_path = non_empty("LOOPY_LEVELS").map(PathBuf::from);
        let seed = non_empty("LOOPY_SEED").and_then(|s| s.parse().ok());
        let log_path = non_empty("LOOPY_LOG_PATH").map(PathBuf::from);

        Self {
            mode: Mode::Play,
            save_path,
            levels_path,
            seed,
            log_path,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("LOOPY_SAVE_PATH", "/tmp/save.json"),
            ("LOOPY_LEVELS", "levels.json"),
            ("LOOPY_SEED", "42"),
            ("LOOPY_LOG_PATH", " loopy.log "),
        ]));
        assert_eq!(config.save_path, PathBuf::from("/tmp/save.json"));
        assert_eq!(config.levels_path, Some(PathBuf::from("levels.json")));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path, Some(PathBuf::from("loopy.log")));
    }

    #[test]
    fn blank_and_malformed_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("LOOPY_SAVE_PATH", "   "),
            ("LOOPY_SEED", "-3"),
            ("LOOPY_LOG_PATH", ""),
        ]));
        assert_eq!(config.save_path, PathBuf::from(DEFAULT_SAVE_PATH));
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn editor_flag_selects_mode() {
        assert_eq!(Mode::from_args(["loopy", "--editor"]), Mode::Editor);
        assert_eq!(Mode::from_args(["loopy"]), Mode::Play);
        assert_eq!(
            Config::default().with_mode(Mode::Editor).mode,
            Mode::Editor
        );
    }
}
