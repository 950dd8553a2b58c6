//! Bit-banged serial transport for the MAX6954.
//!
//! The chip clocks DIN on the rising edge of CLK, MSB first, and latches the
//! 16-bit shift register when CS rises. CS must rise while CLK is still high
//! after the last data bit, otherwise the chip treats the word as incomplete.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::constants::LOGIC_DELAY_NS;

/// A full-duplex 16-bit exchange with the driver chip.
pub trait Transport {
    type Error;

    /// Shifts `word` out MSB first and returns the 16 bits shifted in during
    /// the same exchange.
    fn transact(&mut self, word: u16) -> Result<u16, Self::Error>;
}

/// Four GPIO lines driven in software: clock, data out (to chip DIN), data in
/// (from chip DOUT) and chip select.
pub struct BitBangSpi<CLK, DOUT, DIN, CS, DELAY> {
    clk: CLK,
    dout: DOUT,
    din: DIN,
    cs: CS,
    delay: DELAY,
    logic_delay_ns: u32,
    // false while a transaction is in flight or after one was cut short
    idle: bool,
}

impl<CLK, DOUT, DIN, CS, DELAY, E> BitBangSpi<CLK, DOUT, DIN, CS, DELAY>
where
    CLK: OutputPin<Error = E>,
    DOUT: OutputPin<Error = E>,
    DIN: InputPin<Error = E>,
    CS: OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Takes ownership of the lines and puts the bus in its idle state
    /// (CS high, CLK low).
    pub fn new(clk: CLK, dout: DOUT, din: DIN, cs: CS, delay: DELAY) -> Result<Self, E> {
        let mut spi = Self {
            clk,
            dout,
            din,
            cs,
            delay,
            logic_delay_ns: LOGIC_DELAY_NS,
            idle: false,
        };
        spi.restore_idle()?;
        Ok(spi)
    }

    /// Overrides the setup and hold delay used around each clock edge.
    pub fn with_logic_delay_ns(mut self, ns: u32) -> Self {
        self.logic_delay_ns = ns;
        self
    }

    pub fn destroy(self) -> (CLK, DOUT, DIN, CS, DELAY) {
        (self.clk, self.dout, self.din, self.cs, self.delay)
    }

    /// CS high first so a half-shifted word is abandoned, then CLK low so the
    /// next transaction's first rising edge is real.
    fn restore_idle(&mut self) -> Result<(), E> {
        self.cs.set_high()?;
        self.clk.set_low()?;
        self.idle = true;
        Ok(())
    }

    // Leaves CLK high; the caller decides whether CS rises first.
    fn clock_bit(&mut self, bit: bool) -> Result<bool, E> {
        self.dout.set_state(bit.into())?;
        self.delay.delay_ns(self.logic_delay_ns);

        self.clk.set_high()?;
        self.delay.delay_ns(self.logic_delay_ns);

        self.din.is_high()
    }
}

impl<CLK, DOUT, DIN, CS, DELAY, E> Transport for BitBangSpi<CLK, DOUT, DIN, CS, DELAY>
where
    CLK: OutputPin<Error = E>,
    DOUT: OutputPin<Error = E>,
    DIN: InputPin<Error = E>,
    CS: OutputPin<Error = E>,
    DELAY: DelayNs,
{
    type Error = E;

    fn transact(&mut self, word: u16) -> Result<u16, E> {
        let mut response: u16 = 0;

        if !self.idle {
            log::debug!("bus not idle, resetting before transact");
            self.restore_idle()?;
            self.delay.delay_ns(self.logic_delay_ns);
        }
        self.idle = false;

        self.cs.set_low()?;
        self.delay.delay_ns(self.logic_delay_ns);

        for i in (0..16).rev() {
            let bit_in = self.clock_bit((word >> i) & 0x01 != 0)?;
            response = response << 1 | bit_in as u16;

            if i == 0 {
                self.cs.set_high()?;
                self.delay.delay_ns(self.logic_delay_ns);
            }

            self.clk.set_low()?;
        }

        self.idle = true;
        log::trace!("transact {:#06x} -> {:#06x}", word, response);
        Ok(response)
    }
}
