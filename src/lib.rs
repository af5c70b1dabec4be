#![no_std]
#![doc = include_str!("../README.md")]

#[macro_use]
mod fmt;

mod address;
pub mod bus;
mod command;
mod driver;
#[cfg(test)]
mod mock;
mod model;
mod result;
mod sensor;
#[cfg(feature = "srf08")]
pub mod srf08;
#[cfg(feature = "srf10")]
pub mod srf10;

pub use address::{Address, AddressError};
pub use bus::{I2cBus, OpenBus, RegisterBus};
pub use command::{register, OpCode, Units};
pub use driver::{range_code, Rangefinder, MAX_RANGE_MM, MIN_RANGE_MM};
pub use model::{Capabilities, Model, MAX_BUFFER_SIZE, MAX_ECHOES};
pub use result::{ArgumentError, Error};
pub use sensor::{decode_echoes, Echoes, Sensor};
