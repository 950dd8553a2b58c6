pub const MAX_ADDRESS: u8 = 0x7F; // 7-bit register address, bit 15 of the word selects read
pub const READ_FLAG: u16 = 0x8000;
pub const MAX_CHIP_DIGITS: u8 = 16; // 0-7 plus the "a" halves 8-15
pub const MAX_DIGIT_PAIRS: u8 = 8;
pub const MAX_INTENSITY: u8 = 15; // 4 bits
pub const LOGIC_DELAY_NS: u32 = 1_000;

#[allow(dead_code)]
pub mod register {
    pub const NO_OP: u8 = 0x00;
    pub const DECODE_MODE: u8 = 0x01;
    pub const GLOBAL_INTENSITY: u8 = 0x02;
    pub const SCAN_LIMIT: u8 = 0x03;
    pub const CONFIGURATION: u8 = 0x04;
    pub const GPIO_DATA: u8 = 0x05;
    pub const PORT_CONFIGURATION: u8 = 0x06;
    pub const DISPLAY_TEST: u8 = 0x07;
    pub const DIGIT_TYPE: u8 = 0x0C;
    pub const INTENSITY_10: u8 = 0x10;
    pub const INTENSITY_32: u8 = 0x11;
    pub const INTENSITY_54: u8 = 0x12;
    pub const INTENSITY_76: u8 = 0x13;
    pub const INTENSITY_10A: u8 = 0x14;
    pub const INTENSITY_32A: u8 = 0x15;
    pub const INTENSITY_54A: u8 = 0x16;
    pub const INTENSITY_76A: u8 = 0x17;

    pub mod plane {
        pub const P0: u8 = 0x20; // Digit0 - Digit7a, plane P0
        pub const P1: u8 = 0x40; // Digit0 - Digit7a, plane P1
        pub const BOTH: u8 = P0 | P1;
    }

    pub mod decode_mode {
        pub const NO_DECODE: u8 = 0x00; // no decode for digit pairs 7:0
        pub const DECODE_ALL: u8 = 0xFF; // hex decode for digit pairs 7:0
    }

    pub mod display_test {
        pub const NORMAL_OPERATION: u8 = 0x00;
        pub const ALL_ON: u8 = 0x01;
    }

    pub mod configuration {
        pub const SHUTDOWN_MODE: u8 = 0x00; // bit 0 clear: shutdown
        pub const NORMAL_OPERATION: u8 = 0x01; // bit 0 set: normal operation
        pub const BLINK_RATE_FAST: u8 = 0x02; // bit 1: fast blink rate
        pub const GLOBAL_BLINK_ENABLE: u8 = 0x04; // bit 2: enables blinking
        pub const BLINK_TIMING_RESET: u8 = 0x10; // bit 4: resets blink timing
        pub const CLEAR_DIGIT_DATA: u8 = 0x20; // bit 5: clears digit data on leaving shutdown
        pub const INDIVIDUAL_INTENSITIES: u8 = 0x40; // bit 6: use per-pair intensities
        pub const BLINK_PHASE_READBACK: u8 = 0x80; // bit 7: read-only blink phase
    }
}
