//! Driver for Analog Devices AD56x8 series of octal 16/14/12bit SPI DACs
//!
//! Supports the AD5628, AD5648 and AD5668 in both reference variants (`-1`
//! with a 2.5V reference, `-3` with a 5V reference). The devices have no data
//! output, so the driver only ever writes 32 bit command frames and keeps no
//! copy of the device state.
//!
//! ```
//! # use embedded_hal_mock::eh1::spi::{Mock, Transaction};
//! use ad56x8::{Ad56x8, InternalReference, Model};
//! # let spi = Mock::new(&[
//! #     Transaction::transaction_start(),
//! #     Transaction::write_vec(vec![0x08, 0x00, 0x00, 0x01]),
//! #     Transaction::transaction_end(),
//! #     Transaction::transaction_start(),
//! #     Transaction::write_vec(vec![0x03, 0x28, 0x00, 0x00]),
//! #     Transaction::transaction_end(),
//! # ]);
//! let mut dac = Ad56x8::new(spi, Model::Ad5628_1);
//! dac.set_internal_reference_mode(InternalReference::On).unwrap();
//! // Channels and modes may also be given by address or by name
//! dac.write_and_update_channel("DAC_C", 0x800).unwrap();
//! # dac.destroy().done();
//! ```
//!
//! The SPI device must be configured for mode 0, MSB first.

#![deny(unsafe_code, missing_docs)]
#![cfg_attr(not(test), no_std)]

use bitfield_struct::bitfield;
use embedded_hal::spi::ErrorType;

mod asynch;
mod common;
mod encode;
mod model;
mod types;

pub use crate::model::Model;
pub use crate::types::*;

/// AD56x8 DAC on an SPI device
///
/// The blocking API is available when `DEV` implements
/// [`embedded_hal::spi::SpiDevice`], the `*_async` API when it implements
/// [`embedded_hal_async::spi::SpiDevice`].
pub struct Ad56x8<DEV> {
    spi: DEV,
    model: Model,
}

/// Errors for this crate
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// SPI communication error
    Spi(E),
    /// The model identifier does not name a supported part
    UnknownDeviceModel,
    /// Channel selector is neither a known name nor a valid address
    InvalidChannel,
    /// Mode selector is not valid for the command
    InvalidMode,
    /// DAC code does not fit in the model's data width
    ValueOutOfRange(u16),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
enum Command {
    WriteInput = 0x0,
    UpdateDac = 0x1,
    WriteInputUpdateAll = 0x2,
    WriteUpdate = 0x3,
    PowerDownUp = 0x4,
    LoadClearCode = 0x5,
    LoadLdac = 0x6,
    Reset = 0x7,
    SetupInternalRef = 0x8,
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> Self {
        cmd as u8
    }
}

/// 32 bit command frame, fields listed LSB first
#[bitfield(u32)]
struct CommandWord {
    #[bits(20)]
    data: u32,

    #[bits(4)]
    addr: u8,

    #[bits(4)]
    cmd: u8,

    #[bits(4)]
    _pad: u8,
}

/// Data field of the power down/up command
#[bitfield(u16)]
struct PowerDownData {
    /// One bit per channel, A in bit 0
    #[bits(8)]
    channels: u8,

    #[bits(2)]
    mode: u8,

    #[bits(6)]
    _unused: u8,
}

impl<DEV> Ad56x8<DEV> {
    /// Create a new AD56x8 DAC on an SPI device
    pub fn new(spi: DEV, model: Model) -> Self {
        Self { spi, model }
    }

    /// The part this driver was created for
    pub fn model(&self) -> Model {
        self.model
    }

    /// Destroy the driver and return the SPI device
    pub fn destroy(self) -> DEV {
        self.spi
    }
}

impl<DEV> Ad56x8<DEV>
where
    DEV: ErrorType,
{
    /// Create a new AD56x8 DAC from a model identifier such as `"AD5668-3"`
    ///
    /// Fails with [`Error::UnknownDeviceModel`] if the identifier does not
    /// name one of the six supported parts.
    pub fn from_model_name(spi: DEV, name: &str) -> Result<Self, Error<DEV::Error>> {
        let model = name.parse().map_err(|_| Error::UnknownDeviceModel)?;
        Ok(Self::new(spi, model))
    }
}
