use crate::types::error::BumpError;
use crate::utils::path::PathResolution;
use crate::utils::semver::Component;
use serde::Serialize;

pub const DEFAULT_ENTRY: &str = "version";

/// Options controlling a single bump call.
#[derive(Debug, Clone, Default)]
pub struct BumpOptions {
    /// JSON key holding the version value; empty falls back to `"version"`.
    pub entry: String,
    /// Increment MAJOR by this amount (resets MINOR and PATCH to 0).
    pub major: Option<u64>,
    /// Increment MINOR by this amount (resets PATCH to 0).
    pub minor: Option<u64>,
    /// Increment PATCH by this amount.
    pub patch: Option<u64>,
    /// Literal replacement value; bypasses numeric bumping entirely.
    pub replace: Option<String>,
    /// How the filename argument is resolved to a path.
    pub resolution: PathResolution,
}

/// The single action derived from a set of options.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpMode {
    Replace(String),
    Increment(Component, u64),
}

impl BumpOptions {
    /// Resolves the entry name, defaulting to `"version"`.
    pub fn entry_name(&self) -> &str {
        if self.entry.is_empty() {
            DEFAULT_ENTRY
        } else {
            &self.entry
        }
    }

    /// Collapses the options into the one action to perform.
    ///
    /// Replace wins over any numeric increment; increments are honored in
    /// major > minor > patch precedence. With nothing set at all the call
    /// defaults to a patch bump of 1. An empty replacement or an explicit
    /// zero increment is a configuration error.
    pub fn mode(&self) -> Result<BumpMode, BumpError> {
        if let Some(replace) = &self.replace {
            if replace.is_empty() {
                return Err(BumpError::Config(
                    "replacement value must not be empty".into(),
                ));
            }
            return Ok(BumpMode::Replace(replace.clone()));
        }

        let increments = [
            (Component::Major, self.major),
            (Component::Minor, self.minor),
            (Component::Patch, self.patch),
        ];
        for (component, amount) in increments {
            if let Some(amount) = amount {
                if amount == 0 {
                    return Err(BumpError::Config(format!(
                        "{} increment must be positive",
                        component
                    )));
                }
                return Ok(BumpMode::Increment(component, amount));
            }
        }

        Ok(BumpMode::Increment(Component::Patch, 1))
    }
}

/// Before/after values reported by a successful bump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BumpOutcome {
    pub original: String,
    pub updated: String,
}
