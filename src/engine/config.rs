use crate::{
    engine::scale::ScaleMode,
    foundation::core::FRAME_DELAY_MS,
    foundation::error::{KenBurnsError, KenBurnsResult},
    transition::random::RandomGeneratorConfig,
};

/// Engine settings, loadable from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub scale_mode: ScaleMode,
    /// Delay requested between frames while animating.
    pub frame_delay_ms: u64,
    /// Drop the in-flight transition when the viewport or image changes, instead of
    /// letting it finish on the old geometry.
    pub restart_on_geometry_change: bool,
    /// Tuning for the default random generator.
    pub generator: RandomGeneratorConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scale_mode: ScaleMode::default(),
            frame_delay_ms: FRAME_DELAY_MS,
            restart_on_geometry_change: false,
            generator: RandomGeneratorConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> KenBurnsResult<()> {
        if self.frame_delay_ms == 0 {
            return Err(KenBurnsError::validation("frame_delay_ms must be > 0"));
        }
        self.generator.validate()
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> KenBurnsResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> KenBurnsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
