//! SRF10: a single echo per ping and analog gain 0..=16.

use crate::{
    bus::{OpenBus, RegisterBus},
    Address, Capabilities, Error, Rangefinder,
};
use core::fmt::Debug;

impl<E: Debug, B: RegisterBus<Error = E>> Rangefinder<B> {
    pub fn srf10(bus: B, address: Option<Address>) -> Result<Self, Error<E>> {
        Self::new(bus, address, Capabilities::SRF10)
    }

    pub fn open_srf10(config: B::Config, address: Option<Address>) -> Result<Self, Error<E>>
    where
        B: OpenBus,
    {
        Self::open(config, address, Capabilities::SRF10)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        mock::{Access, MockBus},
        ArgumentError, Capabilities, Error, Model, Rangefinder,
    };

    #[test]
    fn test_gain_ceiling() {
        let mut bus = MockBus::with_devices(&[0x70]);
        let mut rf = Rangefinder::srf10(&mut bus, None).unwrap();
        rf.configure_analog_gain(16).unwrap();
        assert!(matches!(
            rf.configure_analog_gain(17),
            Err(Error::InvalidArgument(ArgumentError::GainAboveCeiling {
                gain: 17,
                ceiling: 16
            }))
        ));
        assert!(matches!(
            rf.configure_analog_gain(20),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(bus.writes(), [(1, 16)]);
    }

    #[test]
    fn test_srf08_accepts_gain_srf10_rejects() {
        let mut bus = MockBus::with_devices(&[0x70]);
        let mut srf08 = Rangefinder::new(&mut bus, None, Capabilities::SRF08).unwrap();
        assert!(srf08.configure_analog_gain(20).is_ok());
        let mut srf10 = Rangefinder::new(&mut bus, None, Capabilities::SRF10).unwrap();
        assert!(srf10.configure_analog_gain(20).is_err());
    }

    #[test]
    fn test_reads_single_echo() {
        let mut bus = MockBus::with_devices(&[0x70]);
        bus.registers[..6].copy_from_slice(&[0x05, 0x80, 0x00, 0x33, 0x00, 0x44]);
        let mut rf = Rangefinder::srf10(&mut bus, None).unwrap();
        assert_eq!(rf.model(), Model::Srf10);
        assert_eq!(rf.read_range().unwrap().as_slice(), &[0x33]);
        assert!(matches!(
            bus.log.last(),
            Some(Access::Read {
                register: 0,
                len: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_no_light_sensor() {
        let mut bus = MockBus::with_devices(&[0x70]);
        let mut rf = Rangefinder::srf10(&mut bus, None).unwrap();
        assert!(matches!(rf.read_light(), Err(Error::NotSupport)));
        assert!(bus.log.is_empty());
    }
}
