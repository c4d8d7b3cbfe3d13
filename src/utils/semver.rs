use std::fmt;

/// Version component selected by a numeric bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// An exact MAJOR.MINOR.PATCH triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTriple {
    /// Parses a dotted version string into a triple.
    ///
    /// Returns the triple together with whether the input already had exactly
    /// three components. Missing trailing components are padded with 0 and
    /// extra components are dropped; the caller decides whether that deserves
    /// a warning. Components are read leniently: leading whitespace skipped,
    /// leading decimal digits taken, anything unparsable counts as 0.
    pub fn parse(raw: &str) -> (Self, bool) {
        let parts: Vec<&str> = raw.split('.').collect();
        let well_formed = parts.len() == 3;
        let component = |i: usize| parts.get(i).map(|s| leading_digits(s)).unwrap_or(0);
        let triple = VersionTriple {
            major: component(0),
            minor: component(1),
            patch: component(2),
        };
        (triple, well_formed)
    }

    /// Applies a single increment, resetting the lower components.
    pub fn apply(&mut self, component: Component, amount: u64) {
        match component {
            Component::Major => {
                self.major = self.major.saturating_add(amount);
                self.minor = 0;
                self.patch = 0;
            }
            Component::Minor => {
                self.minor = self.minor.saturating_add(amount);
                self.patch = 0;
            }
            Component::Patch => {
                self.patch = self.patch.saturating_add(amount);
            }
        }
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn leading_digits(s: &str) -> u64 {
    let digits: String = s
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<u64>().unwrap_or(0)
}
