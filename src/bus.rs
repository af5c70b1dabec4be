use crate::Address;
use core::{cell::RefCell, fmt::Debug};
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

/// Lowest address probed by a scan; 0x00..=0x07 are reserved
pub const SCAN_FIRST: u8 = 0x08;
/// Highest address probed by a scan; 0x78..=0x7F are reserved
pub const SCAN_LAST: u8 = 0x77;

pub const SCAN_CAPACITY: usize = (SCAN_LAST - SCAN_FIRST + 1) as usize;

/// Addresses found by a bus scan, in ascending order
pub type AddressList = heapless::Vec<Address, SCAN_CAPACITY>;

/// Register-addressed byte transport
pub trait RegisterBus {
    type Error: Debug;

    /// Lists the addresses of all devices acknowledging on the bus
    fn scan(&mut self) -> Result<AddressList, Self::Error>;

    /// Fills `buffer` with consecutive registers starting at `register`
    fn read(&mut self, address: Address, register: u8, buffer: &mut [u8])
        -> Result<(), Self::Error>;

    /// Writes one byte to `register`
    fn write(&mut self, address: Address, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Shuts the transport down. Transports with nothing to release keep the default.
    fn release(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Transport that can be brought up from construction parameters
pub trait OpenBus: RegisterBus + Sized {
    type Config;

    fn open(config: Self::Config) -> Result<Self, Self::Error>;
}

/// Borrowed transport; the owner keeps control over its lifecycle
impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    type Error = T::Error;

    fn scan(&mut self) -> Result<AddressList, Self::Error> {
        (**self).scan()
    }

    fn read(
        &mut self,
        address: Address,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        (**self).read(address, register, buffer)
    }

    fn write(&mut self, address: Address, register: u8, value: u8) -> Result<(), Self::Error> {
        (**self).write(address, register, value)
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Shared transport, for several sensors on one bus in a single thread
impl<T: RegisterBus> RegisterBus for &RefCell<T> {
    type Error = T::Error;

    fn scan(&mut self) -> Result<AddressList, Self::Error> {
        self.borrow_mut().scan()
    }

    fn read(
        &mut self,
        address: Address,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.borrow_mut().read(address, register, buffer)
    }

    fn write(&mut self, address: Address, register: u8, value: u8) -> Result<(), Self::Error> {
        self.borrow_mut().write(address, register, value)
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// [`RegisterBus`] over an `embedded_hal` I2C controller, using EEPROM style
/// register access.
pub struct I2cBus<I> {
    i2c: I,
}

impl<I: I2c> I2cBus<I> {
    pub fn new(i2c: I) -> Self {
        I2cBus { i2c }
    }

    pub fn free(self) -> I {
        self.i2c
    }
}

impl<I: I2c> RegisterBus for I2cBus<I> {
    type Error = I::Error;

    /// Probes every non-reserved address with an empty write.
    ///
    /// A missing acknowledge means no device; any other bus error aborts the scan.
    fn scan(&mut self) -> Result<AddressList, Self::Error> {
        let mut found = AddressList::new();
        for raw in SCAN_FIRST..=SCAN_LAST {
            match self.i2c.write(raw, &[]) {
                Ok(()) => {
                    if let Some(address) = Address::new(raw) {
                        // capacity covers the whole probed range
                        let _ = found.push(address);
                    }
                }
                Err(e) if matches!(e.kind(), ErrorKind::NoAcknowledge(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(found)
    }

    fn read(
        &mut self,
        address: Address,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(*address, &[register], buffer)
    }

    fn write(&mut self, address: Address, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(*address, &[register, value])
    }
}

/// Wraps a ready I2C controller; the driver then owns it
impl<I: I2c> OpenBus for I2cBus<I> {
    type Config = I;

    fn open(i2c: Self::Config) -> Result<Self, Self::Error> {
        Ok(I2cBus::new(i2c))
    }
}
