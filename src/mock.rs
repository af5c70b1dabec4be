//! In-memory register bus for driver tests.

extern crate std;

use crate::{
    bus::{AddressList, OpenBus, RegisterBus},
    Address,
};
use embedded_hal::delay::DelayNs;
use std::{vec, vec::Vec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    Nack,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read { address: Address, register: u8, len: usize },
    Write { address: Address, register: u8, value: u8 },
}

/// Devices answer with the same register image; writes are logged, not applied
#[derive(Debug, Default)]
pub struct MockBus {
    pub devices: Vec<Address>,
    pub registers: Vec<u8>,
    pub log: Vec<Access>,
    pub releases: usize,
    pub fail_release: bool,
    released: bool,
}

impl MockBus {
    pub fn with_devices(devices: &[u8]) -> Self {
        MockBus {
            devices: devices.iter().filter_map(|raw| Address::new(*raw)).collect(),
            registers: vec![0; 64],
            ..Default::default()
        }
    }

    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.log
            .iter()
            .filter_map(|access| match access {
                Access::Write {
                    register, value, ..
                } => Some((*register, *value)),
                Access::Read { .. } => None,
            })
            .collect()
    }

    fn check(&self, address: Address) -> Result<(), MockError> {
        if self.released {
            Err(MockError::Released)
        } else if self.devices.contains(&address) {
            Ok(())
        } else {
            Err(MockError::Nack)
        }
    }
}

impl RegisterBus for MockBus {
    type Error = MockError;

    fn scan(&mut self) -> Result<AddressList, Self::Error> {
        if self.released {
            return Err(MockError::Released);
        }
        let mut sorted = self.devices.clone();
        sorted.sort();
        Ok(sorted.into_iter().collect())
    }

    fn read(
        &mut self,
        address: Address,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.check(address)?;
        self.log.push(Access::Read {
            address,
            register,
            len: buffer.len(),
        });
        let start = register as usize;
        buffer.copy_from_slice(&self.registers[start..start + buffer.len()]);
        Ok(())
    }

    fn write(&mut self, address: Address, register: u8, value: u8) -> Result<(), Self::Error> {
        self.check(address)?;
        self.log.push(Access::Write {
            address,
            register,
            value,
        });
        Ok(())
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        self.releases += 1;
        self.released = true;
        if self.fail_release {
            Err(MockError::Nack)
        } else {
            Ok(())
        }
    }
}

impl OpenBus for MockBus {
    type Config = &'static [u8];

    fn open(devices: Self::Config) -> Result<Self, Self::Error> {
        Ok(MockBus::with_devices(devices))
    }
}

/// Records requested delays instead of sleeping
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
