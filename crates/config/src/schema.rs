use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `hud.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Milliseconds between overlay refreshes.
    pub refresh_ms: u64,
    /// Which metric groups the readout displays.
    pub sections: SectionsConfig,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            refresh_ms: 500,
            sections: SectionsConfig::default(),
        }
    }
}

/// Visibility toggles for the readout's metric groups.
///
/// Hiding a group only suppresses its display; the sampler still derives
/// every value each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    /// FPS, frame time, GPU time, and the health strip.
    pub timing: bool,
    /// Draw calls, batches, vertex count.
    pub render: bool,
    /// Used/peak/limit bars and the managed/native split.
    pub memory: bool,
    /// GC count, thread count, API and adapter names.
    pub system: bool,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            timing: true,
            render: true,
            memory: true,
            system: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: OverlayConfig = toml::from_str("").unwrap();
        assert_eq!(config.refresh_ms, 500);
        assert!(config.sections.timing);
        assert!(config.sections.render);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: OverlayConfig = toml::from_str(
            r#"
            refresh_ms = 250

            [sections]
            render = false
            "#,
        )
        .unwrap();

        assert_eq!(config.refresh_ms, 250);
        assert!(!config.sections.render);
        assert!(config.sections.memory);
    }
}
