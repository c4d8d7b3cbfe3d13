use crate::types::bump::{BumpMode, BumpOptions, BumpOutcome};
use crate::types::error::BumpError;
use crate::utils::logger::{LogLevel, Logger};
use crate::utils::path::resolve_input_path;
use crate::utils::semver::VersionTriple;
use serde_json::Value;
use std::fs;

/// Bumps the version entry of a JSON file and reports the change.
///
/// ### Parameters
/// - `filename`: path to the JSON file, resolved per `options.resolution`.
/// - `options`: which entry to touch and how to change it.
///
/// The record is read fresh from disk on every call and the whole file is
/// overwritten in place once the new value is known; nothing is written on
/// any error path. A version that is not in MAJOR.MINOR.PATCH form is padded
/// with zeros and reported as a warning, not an error.
pub fn bump(filename: &str, options: &BumpOptions) -> Result<BumpOutcome, BumpError> {
    let mode = options.mode()?;
    let path = resolve_input_path(filename, options.resolution);
    let display = path.to_string_lossy().into_owned();

    let raw = fs::read_to_string(&path).map_err(|e| BumpError::Read {
        path: display.clone(),
        source: e,
    })?;
    let mut record: Value = serde_json::from_str(&raw).map_err(|e| BumpError::Parse {
        path: display.clone(),
        source: e,
    })?;
    let fields = record
        .as_object_mut()
        .ok_or_else(|| BumpError::NotAnObject {
            path: display.clone(),
        })?;

    let entry = options.entry_name();
    let current = fields
        .get(entry)
        .ok_or_else(|| BumpError::MissingEntry {
            entry: entry.to_string(),
            path: display.clone(),
        })?
        .as_str()
        .ok_or_else(|| BumpError::EntryNotString {
            entry: entry.to_string(),
            path: display.clone(),
        })?
        .to_string();

    let updated = match mode {
        BumpMode::Replace(value) => value,
        BumpMode::Increment(component, amount) => {
            let (mut triple, well_formed) = VersionTriple::parse(&current);
            if !well_formed {
                Logger::new().log_message(
                    LogLevel::Warning,
                    &format!("version in {} was not in MAJOR.MINOR.PATCH format", display),
                );
            }
            triple.apply(component, amount);
            triple.to_string()
        }
    };

    fields.insert(entry.to_string(), Value::String(updated.clone()));
    fs::write(&path, record.to_string()).map_err(|e| BumpError::Write {
        path: display,
        source: e,
    })?;

    Ok(BumpOutcome {
        original: current,
        updated,
    })
}
