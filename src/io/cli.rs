//! Command-line interface for rendering identicons from seed strings

use crate::io::configuration::DEFAULT_OUTPUT_DIR;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::render_to_file;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "identicon")]
#[command(
    author,
    version,
    about = "Generate GitHub-style identicons from arbitrary strings"
)]
/// Command-line arguments for the identicon tool
pub struct Cli {
    /// Seed strings; each produces `<seed>.png`
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Directory that receives the generated images
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every pipeline stage
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Renders every input of a batch independently, in order
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render all inputs and return the written paths
    ///
    /// Existing files are overwritten. Processing stops at the first failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory is not a directory or any
    /// identicon cannot be generated or written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        self.validate_output_dir()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.inputs.len());
        }

        let mut written = Vec::with_capacity(self.cli.inputs.len());
        for input in &self.cli.inputs {
            if let Some(ref pm) = self.progress_manager {
                pm.start_input(input);
            }

            let path = render_to_file(input, &self.cli.output_dir).inspect_err(|e| {
                tracing::error!(input = input.as_str(), error = %e, "failed to render identicon");
            })?;
            written.push(path);

            if let Some(ref pm) = self.progress_manager {
                pm.complete_input();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn validate_output_dir(&self) -> Result<()> {
        let dir = &self.cli.output_dir;
        if dir.exists() && !dir.is_dir() {
            return Err(invalid_parameter(
                "output_dir",
                &dir.display(),
                &"exists and is not a directory",
            ));
        }
        Ok(())
    }
}
