//! Generator configuration.

use crate::cpp::templates;
use modsdk_schema::Platform;

/// Default namespace of classes declared by pre-existing headers.
pub const DEFAULT_EXTERNAL_PREFIX: &str = "cocos2d::";

/// Settings for one header generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    platform: Platform,
    external_prefix: String,
    prologue: String,
}

impl GeneratorConfig {
    /// Creates a configuration targeting the host platform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            platform: Platform::host(),
            external_prefix: DEFAULT_EXTERNAL_PREFIX.to_string(),
            prologue: templates::HEADER_START.to_string(),
        }
    }

    /// Sets the platform whose bindings and hardcodes are active.
    #[must_use]
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Sets the namespace marking classes that are declared elsewhere.
    #[must_use]
    pub fn external_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.external_prefix = prefix.into();
        self
    }

    /// Sets the boilerplate emitted before any declaration.
    #[must_use]
    pub fn prologue(mut self, prologue: impl Into<String>) -> Self {
        self.prologue = prologue.into();
        self
    }

    /// Returns the active platform.
    #[must_use]
    pub const fn active_platform(&self) -> Platform {
        self.platform
    }

    /// Returns the header prologue.
    #[must_use]
    pub fn header_prologue(&self) -> &str {
        &self.prologue
    }

    /// Returns true if the class lives in the external namespace.
    #[must_use]
    pub fn is_external(&self, class_name: &str) -> bool {
        !self.external_prefix.is_empty() && class_name.contains(&self.external_prefix)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.active_platform(), Platform::host());
        assert_eq!(config.header_prologue(), templates::HEADER_START);
        assert!(config.is_external("cocos2d::CCNode"));
        assert!(!config.is_external("PlayLayer"));
    }

    #[test]
    fn test_builder_setters() {
        let config = GeneratorConfig::new()
            .platform(Platform::Android)
            .external_prefix("fmod::")
            .prologue("#pragma once\n");

        assert_eq!(config.active_platform(), Platform::Android);
        assert_eq!(config.header_prologue(), "#pragma once\n");
        assert!(config.is_external("fmod::System"));
        assert!(!config.is_external("cocos2d::CCNode"));
    }

    #[test]
    fn test_empty_prefix_marks_nothing_external() {
        let config = GeneratorConfig::new().external_prefix("");
        assert!(!config.is_external("cocos2d::CCNode"));
    }
}
