use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wordwrap::Config;

/// A scratch directory with an input file already written.
pub struct Workspace {
    pub dir: TempDir,
    pub config: Config,
}

impl Workspace {
    pub fn with_input(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let config = Config {
            input_file: dir.path().join("input.txt"),
            output_file: dir.path().join("output.txt"),
            ..Config::default()
        };
        fs::write(&config.input_file, content).unwrap();
        Self { dir, config }
    }

    /// Same as `with_input` but the input file is never created.
    #[allow(dead_code)]
    pub fn without_input() -> Self {
        let ws = Self::with_input("");
        fs::remove_file(&ws.config.input_file).unwrap();
        ws
    }

    pub fn output(&self) -> String {
        fs::read_to_string(&self.config.output_file).unwrap()
    }

    #[allow(dead_code)]
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Asserts no line is wider than `limit` chars.
#[allow(dead_code)]
pub fn assert_within_limit(wrapped: &str, limit: usize) {
    for line in wrapped.lines() {
        assert!(
            line.chars().count() <= limit,
            "line {line:?} is wider than {limit}"
        );
    }
}
