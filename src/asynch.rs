//! Async implementation over [`embedded_hal_async::spi::SpiDevice`]
//!
//! Frames come from the same encoder as the blocking API, so both write
//! identical bytes for identical arguments.
use embedded_hal_async::spi::SpiDevice;

use crate::encode::{self, Frame};
use crate::{
    Ad56x8, Channel, ClearCode, Command, Error, InternalReference, LdacMode, PowerDownMode,
};

impl<DEV, E> Ad56x8<DEV>
where
    DEV: SpiDevice<Error = E>,
{
    /// Async version of [`write_input_register`](Self::write_input_register).
    pub async fn write_input_register_async<C>(&mut self, chan: C, val: u16) -> Result<(), Error<E>>
    where
        C: TryInto<Channel>,
    {
        let chan = encode::channel(chan)?;
        let frame = encode::input(self.model, Command::WriteInput, chan, val)?;
        self.write_async(frame).await
    }

    /// Async version of [`update_dac_register`](Self::update_dac_register).
    pub async fn update_dac_register_async<C>(&mut self, chan: C) -> Result<(), Error<E>>
    where
        C: TryInto<Channel>,
    {
        let chan = encode::channel(chan)?;
        self.write_async(encode::update_dac(chan)).await
    }

    /// Async version of
    /// [`write_input_register_update_all`](Self::write_input_register_update_all).
    pub async fn write_input_register_update_all_async<C>(
        &mut self,
        chan: C,
        val: u16,
    ) -> Result<(), Error<E>>
    where
        C: TryInto<Channel>,
    {
        let chan = encode::channel(chan)?;
        let frame = encode::input(self.model, Command::WriteInputUpdateAll, chan, val)?;
        self.write_async(frame).await
    }

    /// Async version of [`write_and_update_channel`](Self::write_and_update_channel).
    pub async fn write_and_update_channel_async<C>(&mut self, chan: C, val: u16) -> Result<(), Error<E>>
    where
        C: TryInto<Channel>,
    {
        let chan = encode::channel(chan)?;
        let frame = encode::input(self.model, Command::WriteUpdate, chan, val)?;
        self.write_async(frame).await
    }

    /// Async version of [`set_power_mode`](Self::set_power_mode).
    pub async fn set_power_mode_async<M, C>(&mut self, mode: M, chan: C) -> Result<(), Error<E>>
    where
        M: TryInto<PowerDownMode>,
        C: TryInto<Channel>,
    {
        let mode = encode::mode(mode)?;
        let chan = encode::channel(chan)?;
        self.write_async(encode::power_mode(mode, chan)).await
    }

    /// Async version of [`set_clear_code_mode`](Self::set_clear_code_mode).
    pub async fn set_clear_code_mode_async<M>(&mut self, mode: M) -> Result<(), Error<E>>
    where
        M: TryInto<ClearCode>,
    {
        let mode = encode::mode(mode)?;
        self.write_async(encode::clear_code(mode)).await
    }

    /// Async version of [`set_ldac_mode`](Self::set_ldac_mode).
    pub async fn set_ldac_mode_async<M, C>(&mut self, mode: M, chan: C) -> Result<(), Error<E>>
    where
        M: TryInto<LdacMode>,
        C: TryInto<Channel>,
    {
        let mode = encode::mode(mode)?;
        let chan = encode::channel(chan)?;
        self.write_async(encode::ldac(mode, chan)).await
    }

    /// Async version of [`reset`](Self::reset).
    pub async fn reset_async(&mut self) -> Result<(), Error<E>> {
        self.write_async(encode::reset()).await
    }

    /// Async version of
    /// [`set_internal_reference_mode`](Self::set_internal_reference_mode).
    pub async fn set_internal_reference_mode_async<M>(&mut self, mode: M) -> Result<(), Error<E>>
    where
        M: TryInto<InternalReference>,
    {
        let mode = encode::mode(mode)?;
        self.write_async(encode::internal_reference(mode)).await
    }

    async fn write_async(&mut self, frame: Frame) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt-03")]
        defmt::debug!("{}: write {=u32:#x}", self.model, u32::from_be_bytes(frame));
        self.spi.write(&frame).await.map_err(Error::Spi)
    }
}
