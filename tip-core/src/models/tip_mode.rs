use serde::{Deserialize, Serialize};

/// Which control currently supplies the tip fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipMode {
    /// Preset buttons (15%, 20%) set the tip.
    #[default]
    Preset,
    /// The continuous slider sets the tip.
    Custom,
}

impl TipMode {
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preset => "preset",
            Self::Custom => "custom",
        }
    }

    /// The other mode, as the "Custom" button flips between them.
    pub fn toggled(self) -> Self {
        match self {
            Self::Preset => Self::Custom,
            Self::Custom => Self::Preset,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_mode_is_preset() {
        assert_eq!(TipMode::default(), TipMode::Preset);
        assert!(!TipMode::default().is_custom());
    }

    #[test]
    fn toggled_flips_between_modes() {
        assert_eq!(TipMode::Preset.toggled(), TipMode::Custom);
        assert_eq!(TipMode::Custom.toggled(), TipMode::Preset);
    }
}
