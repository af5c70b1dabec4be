use crate::{
    bus::{AddressList, OpenBus, RegisterBus},
    command::{register, OpCode, Units},
    model::{Capabilities, Model, MAX_BUFFER_SIZE},
    sensor::{decode_echoes, Echoes},
    Address, ArgumentError, Error,
};
use core::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Shortest configurable maximum range
pub const MIN_RANGE_MM: u16 = 43;
/// Longest configurable maximum range
pub const MAX_RANGE_MM: u16 = 11008;

/// Converts a maximum range in millimeters to the range register value
pub fn range_code(range_mm: u16) -> Result<u8, ArgumentError> {
    if !(MIN_RANGE_MM..=MAX_RANGE_MM).contains(&range_mm) {
        return Err(ArgumentError::RangeOutOfBounds(range_mm));
    }
    // 11008 / 43 - 1 == 255
    Ok((range_mm / MIN_RANGE_MM - 1) as u8)
}

/// SRF08/SRF10 driver bound to a transport and a bus address.
///
/// Ranging is two-phase: [`start_ranging`](Self::start_ranging) only issues the
/// command, and the caller must let the ping settle before
/// [`read_range`](Self::read_range). The devices expose no ready flag the
/// driver could poll, so reading too early returns stale or partially updated
/// echoes rather than an error.
pub struct Rangefinder<B: RegisterBus> {
    bus: Option<B>,
    address: Option<Address>,
    caps: Capabilities,
}

impl<E: Debug, B: RegisterBus<Error = E>> Rangefinder<B> {
    /// Binds to an already initialized transport.
    ///
    /// Without an `address` the bus is scanned and the first device found is used.
    pub fn new(bus: B, address: Option<Address>, caps: Capabilities) -> Result<Self, Error<E>> {
        let mut rangefinder = Self::unbound(caps);
        rangefinder.bind(bus, address)?;
        Ok(rangefinder)
    }

    /// Brings the transport up from `config`, then binds like [`new`](Self::new).
    /// The driver owns the transport and shuts it down on [`release`](Self::release).
    pub fn open(
        config: B::Config,
        address: Option<Address>,
        caps: Capabilities,
    ) -> Result<Self, Error<E>>
    where
        B: OpenBus,
    {
        let bus = B::open(config)?;
        Self::new(bus, address, caps)
    }

    pub fn unbound(caps: Capabilities) -> Self {
        Rangefinder {
            bus: None,
            address: None,
            caps,
        }
    }

    /// Binds a transport, returning the one previously bound.
    ///
    /// The address is taken from `address`, else from a previous
    /// [`set_bus_address`](Self::set_bus_address), else from a bus scan.
    /// On error the driver is left as it was.
    pub fn bind(&mut self, mut bus: B, address: Option<Address>) -> Result<Option<B>, Error<E>> {
        let address = match address.or(self.address) {
            Some(address) => address,
            None => Self::discover(&mut bus)?,
        };
        debug!("{} bound at {}", self.caps.model(), address);
        self.address = Some(address);
        Ok(self.bus.replace(bus))
    }

    fn discover(bus: &mut B) -> Result<Address, Error<E>> {
        let found = bus.scan()?;
        match found.first() {
            Some(address) => Ok(*address),
            None => {
                warn!("no device answered the bus scan");
                Err(Error::DeviceNotFound)
            }
        }
    }

    /// Releases the transport and forgets the address.
    ///
    /// Release failures are logged and otherwise ignored. The transport is
    /// handed back to the caller.
    pub fn release(&mut self) -> Option<B> {
        self.address = None;
        let mut bus = self.bus.take()?;
        if bus.release().is_err() {
            warn!("transport release failed");
        }
        Some(bus)
    }

    pub fn bus_address(&self) -> Option<Address> {
        self.address
    }

    pub fn set_bus_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    pub fn model(&self) -> Model {
        self.caps.model()
    }

    pub fn is_bound(&self) -> bool {
        self.bus.is_some() && self.address.is_some()
    }

    fn bound(&mut self) -> Result<(&mut B, Address), Error<E>> {
        match (self.bus.as_mut(), self.address) {
            (Some(bus), Some(address)) => Ok((bus, address)),
            _ => Err(Error::NotBound),
        }
    }

    pub fn scan_bus(&mut self) -> Result<AddressList, Error<E>> {
        let bus = self.bus.as_mut().ok_or(Error::NotBound)?;
        Ok(bus.scan()?)
    }

    /// Reads the firmware revision
    pub fn query_revision(&mut self) -> Result<u8, Error<E>> {
        let (bus, address) = self.bound()?;
        let mut revision = [0u8];
        bus.read(address, register::REVISION, &mut revision)?;
        Ok(revision[0])
    }

    /// Sets the maximum range, 43mm to 11008mm in 43mm steps
    pub fn configure_max_range(&mut self, range_mm: u16) -> Result<(), Error<E>> {
        let code = range_code(range_mm).map_err(Error::InvalidArgument)?;
        let (bus, address) = self.bound()?;
        trace!("max range {}mm -> code {}", range_mm, code);
        bus.write(address, register::MAX_RANGE, code)?;
        Ok(())
    }

    /// Sets the maximum analog gain, bounded by the model's ceiling
    pub fn configure_analog_gain(&mut self, gain: u8) -> Result<(), Error<E>> {
        let ceiling = self.caps.gain_ceiling();
        if gain > ceiling {
            return Err(Error::InvalidArgument(ArgumentError::GainAboveCeiling {
                gain,
                ceiling,
            }));
        }
        let (bus, address) = self.bound()?;
        bus.write(address, register::GAIN, gain)?;
        Ok(())
    }

    /// Issues a ranging command and returns without waiting for the ping
    pub fn start_ranging(&mut self, units: Units) -> Result<(), Error<E>> {
        let (bus, address) = self.bound()?;
        trace!("ranging in {}", units);
        bus.write(address, register::COMMAND, units.op_code())?;
        Ok(())
    }

    /// Reads the echo block and returns the nonzero echoes, nearest first.
    ///
    /// Does not touch device state, so repeated reads return the same echoes.
    pub fn read_range(&mut self) -> Result<Echoes, Error<E>> {
        let size = self.caps.echo_buffer_size();
        let (bus, address) = self.bound()?;
        let mut block = [0u8; MAX_BUFFER_SIZE];
        let block = &mut block[..size];
        bus.read(address, register::RANGE_BASE, block)?;
        Ok(decode_echoes(block))
    }

    /// Reads the light sensor, on models that have one
    pub fn read_light(&mut self) -> Result<u8, Error<E>> {
        if !self.caps.has_light_sensor() {
            return Err(Error::NotSupport);
        }
        let (bus, address) = self.bound()?;
        let mut light = [0u8];
        bus.read(address, register::LIGHT_SENSOR, &mut light)?;
        Ok(light[0])
    }
}

impl<B: RegisterBus> Display for Rangefinder<B> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self.address {
            Some(address) => write!(f, "<{} address {}>", self.caps.model(), address),
            None => write!(f, "<{} unbound>", self.caps.model()),
        }
    }
}
