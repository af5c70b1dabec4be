pub trait OpCode {
    fn op_code(&self) -> u8;
}

/// Register addresses shared by the SRF08 and SRF10.
///
/// Reads and writes at the same address hit different registers: reading 0
/// returns the software revision, writing 0 issues a command.
pub mod register {
    /// Software revision (read)
    pub const REVISION: u8 = 0x00;
    /// Start of the block holding revision, light sensor and echoes (read)
    pub const RANGE_BASE: u8 = 0x00;
    /// Command register (write)
    pub const COMMAND: u8 = 0x00;
    /// Light sensor, SRF08 only (read)
    pub const LIGHT_SENSOR: u8 = 0x01;
    /// Max analog gain (write)
    pub const GAIN: u8 = 0x01;
    /// Range register (write)
    pub const MAX_RANGE: u8 = 0x02;
    /// Offset of the first echo high byte in a block read from register 0
    pub const ECHO_BASE: usize = 2;
}

/// Ranging command, selecting the units the result registers report in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Units {
    Inches = 0x50,
    #[default]
    Centimeters = 0x51,
    Microseconds = 0x52,
}

impl OpCode for Units {
    fn op_code(&self) -> u8 {
        *self as _
    }
}
