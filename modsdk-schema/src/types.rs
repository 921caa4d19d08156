//! Schema type definitions.
//!
//! This module contains the top-level schema container, class identifiers
//! and the platforms a binding can target.

use crate::classes::ClassDefinition;
use crate::error::ParseError;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Target platform of a binding or hardcoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    /// macOS.
    Mac,
    /// Windows.
    Windows,
    /// iOS.
    Ios,
    /// Android.
    Android,
}

impl Platform {
    /// All known platforms.
    pub const ALL: [Platform; 4] = [Self::Mac, Self::Windows, Self::Ios, Self::Android];

    /// Parses a platform from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mac" | "macos" => Some(Self::Mac),
            "win" | "windows" => Some(Self::Windows),
            "ios" => Some(Self::Ios),
            "android" => Some(Self::Android),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mac => "mac",
            Self::Windows => "windows",
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }

    /// Returns the platform of the machine running the generator.
    ///
    /// Hosts that are not a known target fall back to Windows.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(target_os = "macos") {
            Self::Mac
        } else if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "android") {
            Self::Android
        } else {
            Self::Windows
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Platform {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::invalid_attr("bind", "platform", s))
    }
}

/// Fully-qualified class identifier, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ClassName(String);

impl ClassName {
    /// Creates a class name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ClassName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ClassName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for ClassName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ClassName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Complete schema: every class keyed by its name.
#[derive(Debug, Clone, Default)]
pub struct Root {
    /// Class definitions, iterated in name order.
    pub classes: BTreeMap<ClassName, ClassDefinition>,
}

impl Root {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class definition to the schema.
    ///
    /// # Errors
    /// Returns `ParseError::DuplicateDefinition` if a class with the same name exists.
    pub fn add_class(&mut self, class: ClassDefinition) -> Result<(), ParseError> {
        if self.classes.contains_key(class.name.as_str()) {
            return Err(ParseError::duplicate("class", class.name.as_str()));
        }
        self.classes.insert(class.name.clone(), class);
        Ok(())
    }

    /// Looks up a class by name.
    #[must_use]
    pub fn get_class(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.get(name)
    }

    /// Returns true if a class with the given name exists.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Returns the number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if the schema holds no classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
