#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::ErrorKind;

use max6954_clock::{BitBangSpi, Transport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Clk,
    Dout,
    Cs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Set(Line, bool),
    Sample(bool),
}

/// A MAX6954 seen from its four pins. Shifts DIN in on CLK rising edges while
/// CS is low, latches the word when CS rises after 16 edges, and shifts a
/// pending read response out on DOUT during the following transaction.
pub struct SimChip {
    clk: bool,
    dout: bool,
    cs: bool,
    shift_in: u16,
    edges: u8,
    shift_out: u16,
    pending_out: u16,
    pub registers: [u8; 128],
    pub words: Vec<u16>,
    pub events: Vec<Event>,
    pub delay_ns: u64,
    /// Successful CLK falling edges left before the CLK pin starts failing
    pub clk_low_budget: Option<usize>,
}

impl Default for SimChip {
    fn default() -> Self {
        Self {
            clk: false,
            dout: false,
            cs: false,
            shift_in: 0,
            edges: 0,
            shift_out: 0,
            pending_out: 0,
            registers: [0; 128],
            words: Vec::new(),
            events: Vec::new(),
            delay_ns: 0,
            clk_low_budget: None,
        }
    }
}

impl SimChip {
    fn set(&mut self, line: Line, high: bool) {
        self.events.push(Event::Set(line, high));
        match line {
            Line::Clk => {
                if high && !self.clk && !self.cs {
                    self.shift_in = self.shift_in << 1 | self.dout as u16;
                    self.edges += 1;
                }
                self.clk = high;
            }
            Line::Dout => self.dout = high,
            Line::Cs => {
                if !high && self.cs {
                    self.shift_in = 0;
                    self.edges = 0;
                    self.shift_out = self.pending_out;
                    self.pending_out = 0;
                } else if high && !self.cs && self.edges == 16 {
                    self.latch(self.shift_in);
                }
                self.cs = high;
            }
        }
    }

    fn latch(&mut self, word: u16) {
        self.words.push(word);
        let address = ((word >> 8) & 0x7F) as usize;
        if word & 0x8000 != 0 {
            self.pending_out = word & 0x7F00 | self.registers[address] as u16;
        } else {
            self.registers[address] = (word & 0xFF) as u8;
        }
    }

    fn sample(&mut self) -> bool {
        let bit = if !self.cs && (1..=16).contains(&self.edges) {
            (self.shift_out >> (16 - self.edges)) & 0x01 != 0
        } else {
            false
        };
        self.events.push(Event::Sample(bit));
        bit
    }

    pub fn clear_log(&mut self) {
        self.events.clear();
        self.words.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.cs && !self.clk
    }

    pub fn edges(&self) -> u8 {
        self.edges
    }
}

pub type Shared = Rc<RefCell<SimChip>>;

pub struct SimPin {
    chip: Shared,
    line: Line,
}

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = ErrorKind;
}

impl embedded_hal::digital::OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut chip = self.chip.borrow_mut();
        if self.line == Line::Clk {
            let budget = chip.clk_low_budget;
            match budget {
                Some(0) => return Err(ErrorKind::Other),
                Some(n) => chip.clk_low_budget = Some(n - 1),
                None => {}
            }
        }
        chip.set(self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.chip.borrow_mut().set(self.line, true);
        Ok(())
    }
}

pub struct SimInput {
    chip: Shared,
}

impl embedded_hal::digital::ErrorType for SimInput {
    type Error = ErrorKind;
}

impl embedded_hal::digital::InputPin for SimInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.chip.borrow_mut().sample())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_high()?)
    }
}

pub struct SimDelay {
    chip: Shared,
}

impl embedded_hal::delay::DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.chip.borrow_mut().delay_ns += ns as u64;
    }
}

pub type SimSpi = BitBangSpi<SimPin, SimPin, SimInput, SimPin, SimDelay>;

pub fn sim_bus() -> (SimSpi, Shared) {
    let chip: Shared = Rc::new(RefCell::new(SimChip {
        // lines float high until the driver takes them
        cs: true,
        ..Default::default()
    }));
    let pin = |line| SimPin {
        chip: chip.clone(),
        line,
    };
    let spi = BitBangSpi::new(
        pin(Line::Clk),
        pin(Line::Dout),
        SimInput { chip: chip.clone() },
        pin(Line::Cs),
        SimDelay { chip: chip.clone() },
    )
    .unwrap();
    (spi, chip)
}

pub fn sim_delay() -> (SimDelay, Shared) {
    let chip: Shared = Rc::new(RefCell::new(SimChip::default()));
    (SimDelay { chip: chip.clone() }, chip)
}

/// Records every word and answers from a queue of canned responses.
#[derive(Default)]
pub struct MockTransport {
    pub words: Vec<u16>,
    pub responses: VecDeque<u16>,
}

impl Transport for MockTransport {
    type Error = Infallible;

    fn transact(&mut self, word: u16) -> Result<u16, Self::Error> {
        self.words.push(word);
        Ok(self.responses.pop_front().unwrap_or(0))
    }
}

/// Fails every transaction.
pub struct BrokenTransport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusFault;

impl Transport for BrokenTransport {
    type Error = BusFault;

    fn transact(&mut self, _word: u16) -> Result<u16, Self::Error> {
        Err(BusFault)
    }
}
