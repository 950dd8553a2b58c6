#![no_std]

mod clock;
mod config;
mod constants;
mod segments;
mod transport;
mod wiring;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use segments::*;
pub use transport::*;
pub use wiring::*;

use embedded_hal::delay::DelayNs;

pub struct Max6954<T> {
    pub transport: T,
    config_register: u8,
}

impl<T, E> Max6954<T>
where
    T: Transport<Error = E>,
{
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            config_register: register::configuration::SHUTDOWN_MODE,
        }
    }

    pub fn destroy(self) -> T {
        self.transport
    }

    /// Brings the chip up from an unknown state. The display test lights
    /// every segment for `config.display_test_ms`.
    pub fn init<D: DelayNs>(
        &mut self,
        config: &Config,
        delay: &mut D,
    ) -> Result<(), Max6954Error<E>> {
        config.validate::<E>()?;

        log::debug!("entering shutdown, clearing digit data");
        self.write_config(
            register::configuration::SHUTDOWN_MODE | register::configuration::CLEAR_DIGIT_DATA,
        )?;

        log::debug!("display test for {} ms", config.display_test_ms);
        self.display_test(true)?;
        delay.delay_ms(config.display_test_ms);
        self.display_test(false)?;

        log::debug!("intensity {}", config.intensity);
        self.set_intensity(config.intensity)?;

        log::debug!("scan limit {} digit pairs", config.digit_pairs);
        self.set_scan_limit(config.digit_pairs)?;

        let digit_type = config.digit_type;
        self.set_digit_types(digit_type, digit_type, digit_type, digit_type)?;
        self.set_decode_mode(register::decode_mode::NO_DECODE)?;

        // digit data is cleared on the way out of shutdown
        log::debug!("leaving shutdown");
        self.write_config(
            register::configuration::NORMAL_OPERATION | register::configuration::CLEAR_DIGIT_DATA,
        )?;
        Ok(())
    }

    pub fn write_register(&mut self, address: u8, data: u8) -> Result<(), Max6954Error<E>> {
        if address > MAX_ADDRESS {
            return Err(Max6954Error::InvalidValue);
        }
        self.transport.transact((address as u16) << 8 | data as u16)?;

        if address == register::CONFIGURATION {
            self.config_register = data;
        }
        Ok(())
    }

    /// The chip answers a read one transaction late, so this sends the read
    /// request followed by a no-op and returns what came back during the no-op.
    pub fn read_register(&mut self, address: u8) -> Result<u8, Max6954Error<E>> {
        if address > MAX_ADDRESS {
            return Err(Max6954Error::InvalidValue);
        }
        self.transport.transact(READ_FLAG | (address as u16) << 8)?;
        let response = self.transport.transact(0x0000)?;
        Ok((response & 0xFF) as u8)
    }

    /// Shifts a no-op word through the chip.
    pub fn no_op(&mut self) -> Result<(), Max6954Error<E>> {
        self.write_register(register::NO_OP, 0)
    }

    pub fn write_config(&mut self, flags: u8) -> Result<(), Max6954Error<E>> {
        self.write_register(register::CONFIGURATION, flags)
    }

    /// Last value written to the configuration register.
    pub fn config(&self) -> u8 {
        self.config_register
    }

    pub fn set_shutdown(&mut self, shutdown: bool) -> Result<(), Max6954Error<E>> {
        let flags = if shutdown {
            self.config_register & !register::configuration::NORMAL_OPERATION
        } else {
            self.config_register | register::configuration::NORMAL_OPERATION
        };
        self.write_config(flags)
    }

    pub fn display_test(&mut self, enable: bool) -> Result<(), Max6954Error<E>> {
        let value = if enable {
            register::display_test::ALL_ON
        } else {
            register::display_test::NORMAL_OPERATION
        };
        self.write_register(register::DISPLAY_TEST, value)
    }

    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), Max6954Error<E>> {
        if intensity > MAX_INTENSITY {
            return Err(Max6954Error::InvalidValue);
        }
        self.write_register(register::GLOBAL_INTENSITY, intensity)
    }

    pub fn set_scan_limit(&mut self, digit_pairs: u8) -> Result<(), Max6954Error<E>> {
        if !(1..=MAX_DIGIT_PAIRS).contains(&digit_pairs) {
            return Err(Max6954Error::InvalidValue);
        }
        self.write_register(register::SCAN_LIMIT, digit_pairs - 1)
    }

    /// One bit per digit pair: 0 drives segments directly, 1 decodes hex.
    pub fn set_decode_mode(&mut self, flags: u8) -> Result<(), Max6954Error<E>> {
        self.write_register(register::DECODE_MODE, flags)
    }

    /// Types for cathode pairs CC7/CC6, CC5/CC4, CC3/CC2 and CC1/CC0.
    pub fn set_digit_types(
        &mut self,
        types_76: DigitType,
        types_54: DigitType,
        types_32: DigitType,
        types_10: DigitType,
    ) -> Result<(), Max6954Error<E>> {
        let code = (types_76 as u8) << 6
            | (types_54 as u8) << 4
            | (types_32 as u8) << 2
            | types_10 as u8;
        self.write_register(register::DIGIT_TYPE, code)
    }

    /// Writes a digit register. `planes` is any OR of `register::plane::P0`
    /// and `register::plane::P1`.
    pub fn write_digit(
        &mut self,
        digit: u8,
        planes: u8,
        value: u8,
    ) -> Result<(), Max6954Error<E>> {
        if digit >= MAX_CHIP_DIGITS {
            return Err(Max6954Error::InvalidLocation(digit));
        }
        if planes & !register::plane::BOTH != 0 || planes == 0 {
            return Err(Max6954Error::InvalidValue);
        }
        self.write_register(planes | digit, value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Max6954Error<E> {
    Pin(E),
    InvalidValue,
    InvalidLocation(u8),
}

impl<E> From<E> for Max6954Error<E> {
    fn from(error: E) -> Self {
        Max6954Error::Pin(error)
    }
}
