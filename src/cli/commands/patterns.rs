//! Patterns command implementation
//!
//! Lists the categories of the active registry in scan order.

use super::{load_or_default, EXIT_CONFIG_ERROR};
use crate::detection::patterns::{Domain, PatternRegistry, RecognizerKind};
use crate::detection::TaggingEngine;
use clap::Args;

/// Arguments for the patterns command
#[derive(Args, Debug)]
pub struct PatternsArgs {
    /// Override the configured domain
    #[arg(short, long)]
    pub domain: Option<Domain>,

    /// Print each recognizer's regular expression
    #[arg(long)]
    pub show_patterns: bool,
}

impl PatternsArgs {
    /// Execute the patterns command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut config = match load_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };
        if let Some(domain) = self.domain {
            config.scanner.domain = domain;
        }

        let engine = match TaggingEngine::new(&config.scanner) {
            Ok(engine) => engine,
            Err(e) => {
                println!("❌ Failed to build pattern registry");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        print!(
            "{}",
            describe_registry(engine.domain(), engine.scanner().registry(), self.show_patterns)
        );
        Ok(0)
    }
}

fn describe_registry(domain: Domain, registry: &PatternRegistry, show_patterns: bool) -> String {
    let mut output = format!(
        "🔎 {} categories for domain '{}' ({})\n\n",
        registry.len(),
        domain,
        if registry.is_case_insensitive() {
            "case-insensitive"
        } else {
            "case-sensitive"
        }
    );

    for (i, recognizer) in registry.recognizers().iter().enumerate() {
        let kind = match recognizer.kind {
            RecognizerKind::Pattern => "pattern".to_string(),
            RecognizerKind::Vocabulary { terms } => format!("vocabulary, {terms} terms"),
        };
        output.push_str(&format!("  {:>2}. {:28} {}\n", i + 1, recognizer.category, kind));
        if show_patterns {
            output.push_str(&format!("      {}\n", recognizer.pattern()));
        }
    }

    output
}
