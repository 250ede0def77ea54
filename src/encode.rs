//! Command frame encoding
//!
//! Every builder resolves its arguments first and only then packs the
//! command word, so a rejected argument never produces a frame.
use crate::{
    Channel, ClearCode, Command, CommandWord, Error, InternalReference, LdacMode, Model,
    PowerDownData, PowerDownMode,
};

/// A command word serialized MSB first, as shifted out on SDI
pub(crate) type Frame = [u8; 4];

/// Argument rejected before encoding
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Invalid {
    Channel,
    Mode,
    Value(u16),
}

impl<E> From<Invalid> for Error<E> {
    fn from(invalid: Invalid) -> Self {
        match invalid {
            Invalid::Channel => Error::InvalidChannel,
            Invalid::Mode => Error::InvalidMode,
            Invalid::Value(val) => Error::ValueOutOfRange(val),
        }
    }
}

pub(crate) fn channel<C: TryInto<Channel>>(chan: C) -> Result<Channel, Invalid> {
    chan.try_into().map_err(|_| Invalid::Channel)
}

pub(crate) fn mode<T, M: TryInto<T>>(mode: M) -> Result<T, Invalid> {
    mode.try_into().map_err(|_| Invalid::Mode)
}

fn frame(cmd: Command, addr: u8, data: u32) -> Frame {
    let word = CommandWord::new()
        .with_cmd(u8::from(cmd))
        .with_addr(addr)
        .with_data(data);
    u32::from(word).to_be_bytes()
}

/// Input register write, with or without update. The code is left-aligned
/// in the 20 bit data field.
pub(crate) fn input(model: Model, cmd: Command, chan: Channel, val: u16) -> Result<Frame, Invalid> {
    if val > model.full_scale() {
        return Err(Invalid::Value(val));
    }
    let data = u32::from(val) << model.data_shift();
    Ok(frame(cmd, chan.into(), data))
}

pub(crate) fn update_dac(chan: Channel) -> Frame {
    frame(Command::UpdateDac, chan.into(), 0)
}

pub(crate) fn power_mode(mode: PowerDownMode, chan: Channel) -> Frame {
    let data = PowerDownData::new()
        .with_channels(chan.mask())
        .with_mode(mode.into());
    frame(Command::PowerDownUp, 0, u16::from(data).into())
}

pub(crate) fn clear_code(mode: ClearCode) -> Frame {
    frame(Command::LoadClearCode, 0, u8::from(mode).into())
}

/// LDAC register write. Channels other than `chan` are set to hardware
/// control, the register is not read-modify-write.
pub(crate) fn ldac(mode: LdacMode, chan: Channel) -> Frame {
    let mask = match mode {
        LdacMode::Software => chan.mask(),
        LdacMode::Hardware => 0,
    };
    frame(Command::LoadLdac, 0, mask.into())
}

pub(crate) fn reset() -> Frame {
    frame(Command::Reset, 0, 0)
}

pub(crate) fn internal_reference(mode: InternalReference) -> Frame {
    frame(Command::SetupInternalRef, 0, u8::from(mode).into())
}
