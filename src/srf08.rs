//! SRF08: up to 17 echoes per ping, analog gain 0..=31 and a light sensor.

use crate::{
    bus::{OpenBus, RegisterBus},
    Address, Capabilities, Error, Rangefinder,
};
use core::fmt::Debug;

impl<E: Debug, B: RegisterBus<Error = E>> Rangefinder<B> {
    pub fn srf08(bus: B, address: Option<Address>) -> Result<Self, Error<E>> {
        Self::new(bus, address, Capabilities::SRF08)
    }

    pub fn open_srf08(config: B::Config, address: Option<Address>) -> Result<Self, Error<E>>
    where
        B: OpenBus,
    {
        Self::open(config, address, Capabilities::SRF08)
    }
}
