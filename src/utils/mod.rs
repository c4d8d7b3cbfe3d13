pub mod logger;
pub mod path;
pub mod semver;
