//! Part variants of the AD56x8 family
use core::fmt;
use core::str::FromStr;

use crate::UnknownName;

/// AD56x8 part variant.
///
/// The `-1` parts carry a 2.5V internal reference and power up with their
/// outputs at zero scale, the `-3` parts carry a 5V reference and power up at
/// midscale.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Model {
    /// 12 bit, 2.5V reference, zero scale at power up
    Ad5628_1,
    /// 12 bit, 5V reference, midscale at power up
    Ad5628_3,
    /// 14 bit, 2.5V reference, zero scale at power up
    Ad5648_1,
    /// 14 bit, 5V reference, midscale at power up
    Ad5648_3,
    /// 16 bit, 2.5V reference, zero scale at power up
    Ad5668_1,
    /// 16 bit, 5V reference, midscale at power up
    Ad5668_3,
}

impl Model {
    /// Every supported part
    pub const ALL: [Model; 6] = [
        Model::Ad5628_1,
        Model::Ad5628_3,
        Model::Ad5648_1,
        Model::Ad5648_3,
        Model::Ad5668_1,
        Model::Ad5668_3,
    ];

    /// Part identifier as printed in the datasheet ordering guide, e.g. `AD5628-1`
    pub const fn identifier(self) -> &'static str {
        match self {
            Model::Ad5628_1 => "AD5628-1",
            Model::Ad5628_3 => "AD5628-3",
            Model::Ad5648_1 => "AD5648-1",
            Model::Ad5648_3 => "AD5648-3",
            Model::Ad5668_1 => "AD5668-1",
            Model::Ad5668_3 => "AD5668-3",
        }
    }

    /// Native resolution of the DAC in bits
    pub const fn data_width(self) -> u8 {
        match self {
            Model::Ad5628_1 | Model::Ad5628_3 => 12,
            Model::Ad5648_1 | Model::Ad5648_3 => 14,
            Model::Ad5668_1 | Model::Ad5668_3 => 16,
        }
    }

    /// Internal reference voltage in volts
    pub const fn reference_voltage(self) -> f32 {
        if self.midscale_power_up() {
            5.0
        } else {
            2.5
        }
    }

    /// Fraction of full scale the outputs hold after power up
    pub const fn power_up_multiplier(self) -> f32 {
        if self.midscale_power_up() {
            0.5
        } else {
            0.0
        }
    }

    /// Largest code accepted by the input registers
    pub const fn full_scale(self) -> u16 {
        (((1u32) << self.data_width()) - 1) as u16
    }

    /// Code the outputs hold after power up or a software reset
    pub const fn power_up_code(self) -> u16 {
        if self.midscale_power_up() {
            1 << (self.data_width() - 1)
        } else {
            0
        }
    }

    /// Left shift aligning a code's MSB with bit 19 of the data field
    pub(crate) const fn data_shift(self) -> u8 {
        20 - self.data_width()
    }

    const fn midscale_power_up(self) -> bool {
        matches!(self, Model::Ad5628_3 | Model::Ad5648_3 | Model::Ad5668_3)
    }
}

impl FromStr for Model {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|model| model.identifier() == s)
            .ok_or(UnknownName)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
