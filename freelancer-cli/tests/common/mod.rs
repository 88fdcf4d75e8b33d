/// Common test utilities for CLI integration tests
///
/// Each context owns a fresh temporary data directory, so tests can run in
/// parallel without sharing state.

use clap::Parser;
use freelancer_cli::{Cli, CliResult};
use freelancer_shared::config::StoreConfig;
use freelancer_shared::store::LoadPolicy;
use tempfile::TempDir;

/// Test context holding an isolated data directory
pub struct TestContext {
    pub dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config(&self) -> StoreConfig {
        StoreConfig {
            data_dir: self.dir.path().to_path_buf(),
            load_policy: LoadPolicy::Lenient,
        }
    }

    /// Runs `freelancer <args>` and returns what it printed
    pub fn run(&self, args: &[&str]) -> CliResult<String> {
        let cli = Cli::try_parse_from(std::iter::once("freelancer").chain(args.iter().copied()))
            .expect("Arguments should parse");

        let mut out = Vec::new();
        freelancer_cli::run(cli, &self.config(), &mut out)?;
        Ok(String::from_utf8(out).expect("Output should be UTF-8"))
    }

    /// Like [`TestContext::run`] but fails the test on error
    pub fn ok(&self, args: &[&str]) -> String {
        match self.run(args) {
            Ok(output) => output,
            Err(e) => panic!("`freelancer {}` failed: {}", args.join(" "), e),
        }
    }
}
