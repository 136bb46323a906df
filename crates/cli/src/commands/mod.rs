//! CLI commands

pub mod classify;
pub mod course;
pub mod report;
pub mod validate;

use crate::output::OutputFormat;
use gpa_engine_application::{ConstraintValidator, MessageSelector};
use gpa_engine_common::EngineConfig;

/// Context passed to all commands
pub struct CommandContext {
    pub config: EngineConfig,
    pub format: OutputFormat,
    pub seed: Option<u64>,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(config: EngineConfig, format: OutputFormat, seed: Option<u64>) -> Self {
        Self {
            config,
            format,
            seed,
        }
    }

    /// Message selector, reproducible when a seed was given
    pub fn selector(&self) -> MessageSelector {
        match self.seed {
            Some(seed) => MessageSelector::seeded(seed),
            None => MessageSelector::from_entropy(),
        }
    }

    /// Constraint checker for the configured policy
    pub fn constraints(&self) -> ConstraintValidator {
        ConstraintValidator::new(self.config.policy.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_context_is_reproducible() {
        let ctx = CommandContext::new(EngineConfig::default(), OutputFormat::Json, Some(9));
        assert_eq!(ctx.selector().select(3.0), ctx.selector().select(3.0));
    }

    #[test]
    fn test_constraints_follow_config() {
        let mut config = EngineConfig::default();
        config.policy.max_semester_units = 20;
        let ctx = CommandContext::new(config, OutputFormat::Table, None);
        assert_eq!(ctx.constraints().policy().max_semester_units, 20);
    }
}
