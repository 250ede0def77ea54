use core::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Error returned when a symbolic name does not match any known selector.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct UnknownName;

// Implements `FromStr` and `TryFrom<&str>` from a name table. Names are
// matched exactly, several names may map to the same variant.
macro_rules! named {
    ($ty:ident { $($name:literal => $variant:ident),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(UnknownName),
                }
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = UnknownName;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                s.parse()
            }
        }
    };
}

/// Dac Channel
///
/// Operations accept anything that converts into a channel: the enum itself,
/// its numeric address (`0..=7`, `0xF`) or its name (`"DAC_A"`..`"DAC_H"`,
/// `"ALL_DAC"`).
#[derive(IntoPrimitive, TryFromPrimitive, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum Channel {
    /// DAC Channel A
    DacA = 0x0,
    /// DAC Channel B
    DacB = 0x1,
    /// DAC Channel C
    DacC = 0x2,
    /// DAC Channel D
    DacD = 0x3,
    /// DAC Channel E
    DacE = 0x4,
    /// DAC Channel F
    DacF = 0x5,
    /// DAC Channel G
    DacG = 0x6,
    /// DAC Channel H
    DacH = 0x7,
    /// All DAC Channels
    AllDacs = 0xF,
}

named!(Channel {
    "DAC_A" => DacA,
    "DAC_B" => DacB,
    "DAC_C" => DacC,
    "DAC_D" => DacD,
    "DAC_E" => DacE,
    "DAC_F" => DacF,
    "DAC_G" => DacG,
    "DAC_H" => DacH,
    "ALL_DAC" => AllDacs,
});

impl Channel {
    /// The eight individually addressable channels, A to H
    pub const OUTPUTS: [Channel; 8] = [
        Channel::DacA,
        Channel::DacB,
        Channel::DacC,
        Channel::DacD,
        Channel::DacE,
        Channel::DacF,
        Channel::DacG,
        Channel::DacH,
    ];

    /// Channel-select mask with one bit per output, all eight for [`Channel::AllDacs`]
    pub(crate) const fn mask(self) -> u8 {
        match self {
            Channel::AllDacs => 0xFF,
            chan => 1 << chan as u8,
        }
    }
}

/// Output state of a powered down channel.
#[derive(IntoPrimitive, TryFromPrimitive, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum PowerDownMode {
    /// Channel powered up, normal operation
    Normal = 0b00,
    /// Powered down, output pulled to GND through 1kΩ
    PullDown1k = 0b01,
    /// Powered down, output pulled to GND through 100kΩ
    PullDown100k = 0b10,
    /// Powered down, output three-stated
    ThreeState = 0b11,
}

named!(PowerDownMode {
    "NORMAL" => Normal,
    "1K_GND" => PullDown1k,
    "100K_GND" => PullDown100k,
    "TRISTATE" => ThreeState,
});

/// Code loaded into every DAC register when ~CLR is asserted.
///
/// The names mirror the 16 bit codes; 12 and 14 bit parts load the
/// corresponding left-aligned code.
#[derive(IntoPrimitive, TryFromPrimitive, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum ClearCode {
    /// Clear to 0x0000
    Zero = 0b00,
    /// Clear to 0x8000
    Midscale = 0b01,
    /// Clear to 0xFFFF
    FullScale = 0b10,
    /// ~CLR is ignored
    NoOperation = 0b11,
}

named!(ClearCode {
    "0x0000" => Zero,
    "ZERO" => Zero,
    "0x8000" => Midscale,
    "MIDSCALE" => Midscale,
    "0xFFFF" => FullScale,
    "FULLSCALE" => FullScale,
    "NOP" => NoOperation,
    "NORMAL" => NoOperation,
});

/// How a channel's DAC register gets loaded from its input register.
///
/// Converts from `bool`, `true` meaning software controlled.
#[derive(IntoPrimitive, TryFromPrimitive, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum LdacMode {
    /// Loaded on a pulse of the ~LDAC pin
    Hardware = 0,
    /// Loaded on every write, the ~LDAC pin is ignored
    Software = 1,
}

named!(LdacMode {
    "HW" => Hardware,
    "SW" => Software,
});

impl From<bool> for LdacMode {
    fn from(software: bool) -> Self {
        if software {
            LdacMode::Software
        } else {
            LdacMode::Hardware
        }
    }
}

/// State of the on-chip voltage reference.
#[derive(IntoPrimitive, TryFromPrimitive, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum InternalReference {
    /// Reference powered down, an external reference is required
    Off = 0,
    /// Reference powered up
    On = 1,
}

named!(InternalReference {
    "OFF" => Off,
    "ON" => On,
});

impl From<bool> for InternalReference {
    fn from(on: bool) -> Self {
        if on {
            InternalReference::On
        } else {
            InternalReference::Off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_names_and_codes_agree() {
        let names = [
            "DAC_A", "DAC_B", "DAC_C", "DAC_D", "DAC_E", "DAC_F", "DAC_G", "DAC_H",
        ];
        for (code, name) in names.iter().enumerate() {
            let by_name = Channel::try_from(*name).unwrap();
            let by_code = Channel::try_from(code as u8).unwrap();
            assert_eq!(by_name, by_code);
            assert_eq!(u8::from(by_name), code as u8);
        }
        assert_eq!(Channel::try_from("ALL_DAC"), Ok(Channel::AllDacs));
        assert_eq!(Channel::try_from(0xFu8).ok(), Some(Channel::AllDacs));
    }

    #[test]
    fn channel_rejects_unknown() {
        assert!(Channel::try_from(8u8).is_err());
        assert!(Channel::try_from(0xEu8).is_err());
        assert!(Channel::try_from(99u8).is_err());
        assert_eq!(Channel::try_from("DAC_Z"), Err(UnknownName));
        assert_eq!("dac_a".parse::<Channel>(), Err(UnknownName));
    }

    #[test]
    fn channel_masks() {
        assert_eq!(Channel::DacA.mask(), 0b0000_0001);
        assert_eq!(Channel::DacD.mask(), 0b0000_1000);
        assert_eq!(Channel::DacH.mask(), 0b1000_0000);
        assert_eq!(Channel::AllDacs.mask(), 0xFF);
    }

    #[test]
    fn mode_names() {
        assert_eq!("1K_GND".parse(), Ok(PowerDownMode::PullDown1k));
        assert_eq!("TRISTATE".parse(), Ok(PowerDownMode::ThreeState));
        assert_eq!("0x8000".parse(), Ok(ClearCode::Midscale));
        assert_eq!("MIDSCALE".parse(), Ok(ClearCode::Midscale));
        assert_eq!("NOP".parse(), Ok(ClearCode::NoOperation));
        assert_eq!("SW".parse(), Ok(LdacMode::Software));
        assert_eq!("ON".parse(), Ok(InternalReference::On));
        assert_eq!("FOO".parse::<PowerDownMode>(), Err(UnknownName));
        assert_eq!("FOO".parse::<ClearCode>(), Err(UnknownName));
        assert_eq!("on".parse::<InternalReference>(), Err(UnknownName));
    }

    #[test]
    fn boolean_modes() {
        assert_eq!(LdacMode::from(true), LdacMode::Software);
        assert_eq!(LdacMode::from(false), LdacMode::Hardware);
        assert_eq!(InternalReference::from(true), InternalReference::On);
        assert_eq!(u8::from(InternalReference::from(false)), 0);
    }

    #[test]
    fn mode_codes() {
        assert!(PowerDownMode::try_from(4u8).is_err());
        assert!(ClearCode::try_from(4u8).is_err());
        assert!(LdacMode::try_from(2u8).is_err());
        assert_eq!(u8::from(PowerDownMode::PullDown100k), 0b10);
        assert_eq!(u8::from(ClearCode::FullScale), 0b10);
    }
}
