use core::fmt::Debug;

/// Error type
#[derive(Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E: Sized + Debug> {
    /// Argument rejected before touching the bus
    #[error("invalid argument: {0}")]
    InvalidArgument(ArgumentError),
    /// Bus scan found nothing to bind to
    #[error("no device found on bus")]
    DeviceNotFound,
    /// Driver has no bus or address bound
    #[error("driver is not bound to a device")]
    NotBound,
    /// Model lacks the requested feature
    #[error("operation not supported by this model")]
    NotSupport,
    #[error("sensor communication error: {0:?}")]
    SensorComm(E),
}

impl<E: Sized + Debug> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::SensorComm(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentError {
    #[error("max range {0}mm outside 43..=11008mm")]
    RangeOutOfBounds(u16),
    #[error("gain {gain} above ceiling {ceiling}")]
    GainAboveCeiling { gain: u8, ceiling: u8 },
}
