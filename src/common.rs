use embedded_hal::spi::SpiDevice;

use crate::encode::{self, Frame};
use crate::{
    Ad56x8, Channel, ClearCode, Command, Error, InternalReference, LdacMode, PowerDownMode,
};

impl<DEV, E> Ad56x8<DEV>
where
    DEV: SpiDevice<Error = E>,
{
    /// Write a value to the input register of the selected channel.
    ///
    /// The DAC register, and so the output, only follows once it is loaded
    /// through the ~LDAC pin, [`update_dac_register`](Self::update_dac_register)
    /// or a channel in software LDAC mode.
    ///
    /// `val` is right-aligned: 0..=0xFFF on the AD5628, 0..=0x3FFF on the
    /// AD5648 and 0..=0xFFFF on the AD5668. Wider values are rejected with
    /// [`Error::ValueOutOfRange`].
    /// ```ignore
    /// ad5628.write_input_register(Channel::DacA, 0x800)?;
    /// ad5628.write_input_register("DAC_B", 0x800)?;
    /// ad5628.write_input_register(0xF, 0x800)?;
    /// ```
    pub fn write_input_register<C>(&mut self, chan: C, val: u16) -> Result<(), Error<E>>
    where
        C: TryInto<Channel>,
    {
        let chan = encode::channel(chan)?;
        self.write(encode::input(self.model, Command::WriteInput, chan, val)?)
    }

    /// Load the DAC register of the selected channel from its input register.
    pub fn update_dac_register<C>(&mut self, chan: C) -> Result<(), Error<E>>
    where
        C: TryInto<Channel>,
    {
        let chan = encode::channel(chan)?;
        self.write(encode::update_dac(chan))
    }

    /// Write a value to the input register of the selected channel and load
    /// all DAC registers from their input registers.
    pub fn write_input_register_update_all<C>(&mut self, chan: C, val: u16) -> Result<(), Error<E>>
    where
        C: TryInto<Channel>,
    {
        let chan = encode::channel(chan)?;
        self.write(encode::input(
            self.model,
            Command::WriteInputUpdateAll,
            chan,
            val,
        )?)
    }

    /// Write a value to the selected channel and load its DAC register.
    pub fn write_and_update_channel<C>(&mut self, chan: C, val: u16) -> Result<(), Error<E>>
    where
        C: TryInto<Channel>,
    {
        let chan = encode::channel(chan)?;
        self.write(encode::input(self.model, Command::WriteUpdate, chan, val)?)
    }

    /// Power up or down a single or all DAC channels
    ///
    /// Only the selected channel is addressed, the others keep their mode.
    pub fn set_power_mode<M, C>(&mut self, mode: M, chan: C) -> Result<(), Error<E>>
    where
        M: TryInto<PowerDownMode>,
        C: TryInto<Channel>,
    {
        let mode = encode::mode(mode)?;
        let chan = encode::channel(chan)?;
        self.write(encode::power_mode(mode, chan))
    }

    /// Select the code all DAC registers are set to while ~CLR is low.
    pub fn set_clear_code_mode<M>(&mut self, mode: M) -> Result<(), Error<E>>
    where
        M: TryInto<ClearCode>,
    {
        let mode = encode::mode(mode)?;
        self.write(encode::clear_code(mode))
    }

    /// Set the LDAC register.
    ///
    /// Channels in software mode load their DAC register on every input
    /// register write regardless of the ~LDAC pin. The whole register is
    /// written, so every channel other than `chan` is put back in hardware
    /// mode.
    pub fn set_ldac_mode<M, C>(&mut self, mode: M, chan: C) -> Result<(), Error<E>>
    where
        M: TryInto<LdacMode>,
        C: TryInto<Channel>,
    {
        let mode = encode::mode(mode)?;
        let chan = encode::channel(chan)?;
        self.write(encode::ldac(mode, chan))
    }

    /// Software reset to power-on state.
    pub fn reset(&mut self) -> Result<(), Error<E>> {
        self.write(encode::reset())
    }

    /// Power the internal reference up or down.
    pub fn set_internal_reference_mode<M>(&mut self, mode: M) -> Result<(), Error<E>>
    where
        M: TryInto<InternalReference>,
    {
        let mode = encode::mode(mode)?;
        self.write(encode::internal_reference(mode))
    }

    fn write(&mut self, frame: Frame) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt-03")]
        defmt::debug!("{}: write {=u32:#x}", self.model, u32::from_be_bytes(frame));
        self.spi.write(&frame).map_err(Error::Spi)
    }
}

#[cfg(test)]
mod tests {
    mod fake_spi;

    use std::cell::RefCell;
    use std::rc::Rc;

    use self::fake_spi::*;
    use crate::*;

    fn dac(model: Model) -> (Ad56x8<FakeSpi>, Rc<RefCell<Vec<Vec<u8>>>>) {
        let spi = FakeSpi::new();
        let frames = Rc::clone(&spi.frames);
        (Ad56x8::new(spi, model), frames)
    }

    #[test]
    fn reset_frame() {
        let (mut dac, frames) = dac(Model::Ad5628_1);
        assert_eq!(dac.reset(), Ok(()));
        assert_eq!(*frames.borrow(), vec![vec![0x07, 0x00, 0x00, 0x00]]);
    }

    #[test]
    fn invalid_channel_writes_nothing() {
        let (mut dac, frames) = dac(Model::Ad5668_3);
        assert_eq!(dac.write_input_register(99u8, 0), Err(Error::InvalidChannel));
        assert_eq!(dac.update_dac_register("DAC_Z"), Err(Error::InvalidChannel));
        assert_eq!(
            dac.set_power_mode(PowerDownMode::Normal, 8u8),
            Err(Error::InvalidChannel)
        );
        assert_eq!(dac.set_ldac_mode("SW", "DAC_I"), Err(Error::InvalidChannel));
        assert!(frames.borrow().is_empty());
    }

    #[test]
    fn invalid_mode_writes_nothing() {
        let (mut dac, frames) = dac(Model::Ad5628_1);
        assert_eq!(dac.set_power_mode("FOO", Channel::DacA), Err(Error::InvalidMode));
        assert_eq!(dac.set_clear_code_mode("FOO"), Err(Error::InvalidMode));
        assert_eq!(dac.set_clear_code_mode(7u8), Err(Error::InvalidMode));
        assert_eq!(dac.set_ldac_mode("FOO", Channel::DacA), Err(Error::InvalidMode));
        assert_eq!(dac.set_internal_reference_mode("FOO"), Err(Error::InvalidMode));
        assert!(frames.borrow().is_empty());
    }

    #[test]
    fn out_of_range_value_writes_nothing() {
        let (mut dac, frames) = dac(Model::Ad5628_1);
        assert_eq!(
            dac.write_input_register(Channel::DacA, 0x1000),
            Err(Error::ValueOutOfRange(0x1000))
        );
        assert_eq!(
            dac.write_and_update_channel(Channel::DacA, 0xFFFF),
            Err(Error::ValueOutOfRange(0xFFFF))
        );
        assert!(frames.borrow().is_empty());
    }

    #[test]
    fn spi_error_is_passed_through() {
        let spi = FakeSpi::new();
        let frames = Rc::clone(&spi.frames);
        *spi.should_fail.borrow_mut() = true;
        let mut dac = Ad56x8::new(spi, Model::Ad5648_1);
        assert_eq!(dac.reset(), Err(Error::Spi(FakeSpiError)));
        assert!(frames.borrow().is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let (mut dac, frames) = dac(Model::Ad5648_3);
        for _ in 0..2 {
            dac.set_power_mode(PowerDownMode::PullDown100k, Channel::DacE)
                .unwrap();
            dac.write_input_register(Channel::DacE, 0x1555).unwrap();
        }
        let frames = frames.borrow();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0], frames[2]);
        assert_eq!(frames[1], frames[3]);
    }

    #[test]
    fn no_state_between_commands() {
        let (mut dac, frames) = dac(Model::Ad5668_1);
        dac.write_input_register(Channel::DacH, 0xFFFF).unwrap();
        dac.set_ldac_mode(LdacMode::Software, Channel::DacA).unwrap();
        dac.update_dac_register(Channel::DacA).unwrap();
        assert_eq!(
            *frames.borrow(),
            vec![
                vec![0x00, 0x7F, 0xFF, 0xF0],
                vec![0x06, 0x00, 0x00, 0x01],
                vec![0x01, 0x00, 0x00, 0x00],
            ]
        );
    }

    #[test]
    fn constructed_from_name() {
        let dac = Ad56x8::from_model_name(FakeSpi::new(), "AD5648-3").unwrap();
        assert_eq!(dac.model(), Model::Ad5648_3);
        assert!(matches!(
            Ad56x8::from_model_name(FakeSpi::new(), "AD5678-1"),
            Err(Error::UnknownDeviceModel)
        ));
    }
}
