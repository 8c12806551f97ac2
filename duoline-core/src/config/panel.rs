//! Panel power and contrast settings
//!
//! These values feed the extended-table commands of the init sequence.
//! The defaults produce `0x14 0x70 0x56 0x6C`, which suit the common
//! 3.3 V 8x2 modules.

use crate::command::{self, Bias};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest contrast value (6 bits)
pub const MAX_CONTRAST: u8 = 0x3F;

/// Panel settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Contrast (0-63)
    pub contrast: u8,
    /// LCD bias
    pub bias: Bias,
    /// Internal oscillator adjustment (0-7)
    pub oscillator: u8,
    /// Voltage follower amplifier ratio (0-7)
    pub follower_ratio: u8,
    /// Enable the booster circuit (needed below 4.5 V)
    pub booster: bool,
    /// Enable icon display
    pub icon: bool,
}

impl PanelConfig {
    pub const DEFAULT: Self = Self {
        contrast: 0x20,
        bias: Bias::OneFifth,
        oscillator: 4,
        follower_ratio: 4,
        booster: true,
        icon: false,
    };

    /// Same settings with a different contrast, clamped to 0-63
    pub const fn with_contrast(self, contrast: u8) -> Self {
        let contrast = if contrast > MAX_CONTRAST {
            MAX_CONTRAST
        } else {
            contrast
        };
        Self { contrast, ..self }
    }

    /// Internal oscillator command
    pub const fn oscillator_command(&self) -> u8 {
        command::oscillator(self.bias, self.oscillator)
    }

    /// Contrast low nibble command
    pub const fn contrast_low_command(&self) -> u8 {
        command::contrast_low(self.contrast)
    }

    /// Power/icon/contrast high bits command
    pub const fn power_command(&self) -> u8 {
        command::power_icon_contrast(self.icon, self.booster, self.contrast)
    }

    /// Follower control command
    pub const fn follower_command(&self) -> u8 {
        command::follower_control(true, self.follower_ratio)
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_commands() {
        let panel = PanelConfig::DEFAULT;
        assert_eq!(panel.oscillator_command(), 0x14);
        assert_eq!(panel.contrast_low_command(), 0x70);
        assert_eq!(panel.power_command(), 0x56);
        assert_eq!(panel.follower_command(), 0x6C);
    }

    #[test]
    fn test_contrast_is_split_across_commands() {
        let panel = PanelConfig::DEFAULT.with_contrast(0x2B);
        assert_eq!(panel.contrast_low_command(), 0x7B);
        assert_eq!(panel.power_command(), 0x56);

        let panel = PanelConfig::DEFAULT.with_contrast(0x1F);
        assert_eq!(panel.contrast_low_command(), 0x7F);
        assert_eq!(panel.power_command(), 0x55);
    }

    #[test]
    fn test_contrast_clamped() {
        assert_eq!(PanelConfig::DEFAULT.with_contrast(200).contrast, MAX_CONTRAST);
    }
}
