//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG_ERROR, EXIT_FATAL};
use clap::Args;
use std::fs;
use std::path::Path;

/// Commented sample configuration
pub const SAMPLE_CONFIG: &str = r#"# PII Tagger Configuration File

[application]
log_level = "info"  # trace | debug | info | warn | error

[scanner]
# Built-in pattern library:
#   medical | education | financial | legal
#   education_prompt | legal_prompt
#   medical_verification | financial_verification
domain = "medical"

# Custom TOML pattern library replacing the built-in one
# pattern_library = "patterns/custom.toml"

# Force case handling; leave unset to keep the library's own setting
# case_insensitive = true

order = "registry"  # registry | position
parallel = true

[report]
max_samples = 15
# output_dir = "${PII_TAGGER_REPORT_DIR}"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly | never
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "pii-tagger.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing PII tagger configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        match fs::write(&self.output, SAMPLE_CONFIG) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} and choose a domain", self.output);
                println!("  2. Validate configuration: pii-tagger validate-config");
                println!("  3. Tag records: pii-tagger scan records.txt > tagged.jsonl");
                println!("  4. Summarize: pii-tagger report tagged.jsonl");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }
}
