use crate::{
    bus::RegisterBus,
    command::{register, Units},
    model::MAX_ECHOES,
    Error, Rangefinder,
};
use byteorder::{BigEndian, ByteOrder};
use core::fmt::Debug;
use embedded_hal::delay::DelayNs;

/// Nonzero echo ranges in echo order, in the units of the last ranging command
pub type Echoes = heapless::Vec<u16, MAX_ECHOES>;

/// Decodes a block read from register 0.
///
/// Echo pairs start at byte 2, high byte first. A zero pair is an empty echo
/// slot and is skipped. At most [`MAX_ECHOES`] echoes are returned; further
/// nonzero pairs in an oversized block are ignored.
pub fn decode_echoes(block: &[u8]) -> Echoes {
    block
        .get(register::ECHO_BASE..)
        .unwrap_or_default()
        .chunks_exact(2)
        .map(BigEndian::read_u16)
        .filter(|range| *range != 0)
        .take(MAX_ECHOES)
        .collect()
}

pub trait Sensor {
    type Error: Debug;

    /// Issues a ranging command; the result is readable once the ping has settled
    fn start_measurement(&mut self, units: Units) -> Result<(), Error<Self::Error>>;

    /// Returns the echoes of the last completed ping
    fn read_measurement(&mut self) -> Result<Echoes, Error<Self::Error>>;

    /// Starts a ping, waits `settle_ms` and reads the echoes.
    ///
    /// The device is never polled; a settle time shorter than the ping yields
    /// stale echoes.
    fn measure(
        &mut self,
        units: Units,
        settle_ms: u32,
        delay: &mut impl DelayNs,
    ) -> Result<Echoes, Error<Self::Error>> {
        self.start_measurement(units)?;
        delay.delay_ms(settle_ms);
        self.read_measurement()
    }
}

impl<E: Debug, B: RegisterBus<Error = E>> Sensor for Rangefinder<B> {
    type Error = E;

    fn start_measurement(&mut self, units: Units) -> Result<(), Error<E>> {
        self.start_ranging(units)
    }

    fn read_measurement(&mut self) -> Result<Echoes, Error<E>> {
        self.read_range()
    }
}
