use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Deref,
    str::FromStr,
};

/// 7-bit I2C bus address of a rangefinder.
#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Address {
    raw: u8,
}

impl Default for Address {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Address {
    type Error = AddressError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or(AddressError::OutOfRange)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> u8 {
        addr.raw
    }
}

impl Deref for Address {
    type Target = u8;

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

impl Address {
    /// Highest 7-bit address
    pub const MAX: u8 = 0x7F;

    /// Factory address of both the SRF08 and the SRF10 (`0xE0` in datasheet notation)
    pub const DEFAULT: Address = Address { raw: 0x70 };

    pub const fn new(raw: u8) -> Option<Self> {
        if raw > Self::MAX {
            None
        } else {
            Some(Address { raw })
        }
    }

    /// The 8-bit write address, as the device datasheets print it
    pub fn eight_bit(&self) -> u8 {
        self.raw << 1
    }
}

/// Error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressError {
    Empty,
    Invalid,
    OutOfRange,
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() {
            return Err(AddressError::Empty);
        }
        let raw = u8::from_str_radix(digits, 16).map_err(|_| AddressError::Invalid)?;
        Self::try_from(raw)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{:#04x}", self.raw)
    }
}
