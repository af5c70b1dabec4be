use crate::command::register;
use core::fmt::{Display, Formatter, Result as FmtResult};

/// Bytes needed to hold the longest echo block any supported model returns
pub const MAX_BUFFER_SIZE: usize = 36;

/// Most echoes any supported model reports for a single ping
pub const MAX_ECHOES: usize = (MAX_BUFFER_SIZE - register::ECHO_BASE) / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Model {
    Srf08,
    Srf10,
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Model::Srf08 => f.write_str("SRF08"),
            Model::Srf10 => f.write_str("SRF10"),
        }
    }
}

/// Per-model limits the shared protocol is parameterized by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Capabilities {
    model: Model,
    echo_buffer_size: usize,
    gain_ceiling: u8,
    light_sensor: bool,
}

impl Capabilities {
    /// Up to 17 echoes, gain 0..=31, on-board light sensor
    pub const SRF08: Capabilities = Capabilities {
        model: Model::Srf08,
        echo_buffer_size: MAX_BUFFER_SIZE,
        gain_ceiling: 31,
        light_sensor: true,
    };

    /// Single echo, gain 0..=16
    pub const SRF10: Capabilities = Capabilities {
        model: Model::Srf10,
        echo_buffer_size: 4,
        gain_ceiling: 16,
        light_sensor: false,
    };

    pub fn model(&self) -> Model {
        self.model
    }

    /// Bytes read from register 0 by a range read
    pub fn echo_buffer_size(&self) -> usize {
        self.echo_buffer_size
    }

    pub fn max_echoes(&self) -> usize {
        (self.echo_buffer_size - register::ECHO_BASE) / 2
    }

    pub fn gain_ceiling(&self) -> u8 {
        self.gain_ceiling
    }

    pub fn has_light_sensor(&self) -> bool {
        self.light_sensor
    }
}

impl From<Model> for Capabilities {
    fn from(model: Model) -> Self {
        match model {
            Model::Srf08 => Capabilities::SRF08,
            Model::Srf10 => Capabilities::SRF10,
        }
    }
}
