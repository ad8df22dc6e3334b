//! Dotted version numbers with an optional metadata suffix

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::config::DEFAULT_META_DELIMITER;
use crate::version::error::ParseVersionError;

/// Separator between numeric components
const COMPONENT_DELIMITER: char = '.';

/// A parsed version such as `1.2.3` or `1.2.3-SNAPSHOT`
///
/// Ordering and equality only look at the numeric components, comparing them
/// most significant first and treating missing trailing components as `0`.
/// Metadata never takes part in comparisons, so `1.0` equals `1.0.0+dev`.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u32>,
    metadata: String,
    meta_separator: String,
}

impl Version {
    /// Parse a version string, splitting metadata off at the first
    /// `meta_delimiter` found after the start of the string.
    ///
    /// A delimiter at index 0 does not split, so it stays in the numeric part.
    /// Metadata starts one character after the delimiter starts, so a
    /// multi-character delimiter leaves its tail in the metadata.
    /// Trailing empty components are dropped ("1.0." is [1, 0]) and an empty
    /// numeric part yields a version without components.
    ///
    /// Examples (delimiter `"-"`):
    /// - "1.2.3" -> [1, 2, 3], metadata ""
    /// - "1.2.3-SNAPSHOT" -> [1, 2, 3], metadata "SNAPSHOT"
    /// - "-1.0" -> error, "-1" is not a component
    pub fn parse_with_delimiter(
        input: &str,
        meta_delimiter: &str,
    ) -> Result<Self, ParseVersionError> {
        let (numeric, metadata) = match input.find(meta_delimiter) {
            Some(index) if index > 0 => {
                let skip = meta_delimiter.chars().next().map_or(0, char::len_utf8);
                (&input[..index], &input[index + skip..])
            }
            _ => (input, ""),
        };

        let mut pieces: Vec<&str> = numeric.split(COMPONENT_DELIMITER).collect();
        while pieces.last().is_some_and(|piece| piece.is_empty()) {
            pieces.pop();
        }

        let components = pieces
            .into_iter()
            .map(|component| {
                component
                    .parse::<u32>()
                    .map_err(|source| ParseVersionError::InvalidComponent {
                        input: input.to_string(),
                        component: component.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            components,
            metadata: metadata.to_string(),
            meta_separator: meta_delimiter.to_string(),
        })
    }

    /// Parse a version string using [`DEFAULT_META_DELIMITER`]
    pub fn parse(input: &str) -> Result<Self, ParseVersionError> {
        Self::parse_with_delimiter(input, DEFAULT_META_DELIMITER)
    }

    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Component at `index`, or `None` if the version is shorter
    pub fn component(&self, index: usize) -> Option<u32> {
        self.components.get(index).copied()
    }

    pub fn major(&self) -> Option<u32> {
        self.component(0)
    }

    pub fn minor(&self) -> Option<u32> {
        self.component(1)
    }

    pub fn patch(&self) -> Option<u32> {
        self.component(2)
    }

    /// Metadata suffix, empty if the version had none
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// Delimiter used to rejoin metadata when rendering
    pub fn meta_separator(&self) -> &str {
        &self.meta_separator
    }

    /// Render only the numeric components, e.g. "1.2.3"
    pub fn to_string_without_metadata(&self) -> String {
        self.components
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_without_metadata())?;
        if !self.metadata.is_empty() {
            write!(f, "{}{}", self.meta_separator, self.metadata)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let length = self.components.len().max(other.components.len());
        (0..length)
            .map(|i| {
                let a = self.component(i).unwrap_or(0);
                let b = other.component(i).unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}
