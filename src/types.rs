use crate::hw_def::*;

use core::fmt;

#[cfg(feature = "defmt")]
use defmt::Format;

/// Raw (still in u16 format) temperature and relative humidity from the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawMeasurement {
    /// unprocessed temperature
    pub temperature: u16,
    /// unprocessed relative humidity
    pub humidity: u16,
}
impl RawMeasurement {
    /// Assemble from the four data registers 0x00..=0x03, in address order
    pub fn from_registers(regs: [u8; 4]) -> Self {
        Self {
            temperature: raw_from_registers(regs[0], regs[1]),
            humidity: raw_from_registers(regs[2], regs[3]),
        }
    }
    /// Get temperature in Fahrenheit
    pub fn fahrenheit(&self) -> f64 {
        raw_temp_to_fahrenheit(self.temperature)
    }
    /// Get temperature in Centigrade
    pub fn centigrade(&self) -> f64 {
        raw_temp_to_centigrade(self.temperature)
    }
    /// Get relative humidity in percent
    pub fn humidity_percent(&self) -> f64 {
        raw_rel_humid_to_percent(self.humidity)
    }
}

/// Temperature and relative humidity after conversion
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// degrees centigrade
    pub centigrade: f64,
    /// relative humidity in percent
    pub humidity_percent: f64,
}
impl Measurement {
    /// Get temperature in Fahrenheit
    pub fn fahrenheit(&self) -> f64 {
        self.centigrade * 1.8 + 32.0
    }
}
impl From<&RawMeasurement> for Measurement {
    fn from(raw: &RawMeasurement) -> Self {
        Self {
            centigrade: raw.centigrade(),
            humidity_percent: raw.humidity_percent(),
        }
    }
}
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} °C, {:.1} %RH", self.centigrade, self.humidity_percent)
    }
}

/// Device ID of the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeviceId {
    /// HDC2010
    Hdc2010,
    /// Other
    Other(u16),
}
impl From<u16> for DeviceId {
    fn from(raw: u16) -> Self {
        match raw {
            DEVICE_ID_HDC2010 => DeviceId::Hdc2010,
            _ => DeviceId::Other(raw),
        }
    }
}
impl From<DeviceId> for u16 {
    fn from(id: DeviceId) -> u16 {
        match id {
            DeviceId::Hdc2010 => DEVICE_ID_HDC2010,
            DeviceId::Other(id) => id,
        }
    }
}
impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let did_u16: u16 = (*self).into();
        match self {
            DeviceId::Hdc2010 => write!(f, "HDC2010 (0x{did_u16:04X})"),
            DeviceId::Other(_) => write!(f, "Unknown (0x{did_u16:04X})"),
        }
    }
}

/// Manufacturer ID of the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ManufacturerId {
    /// Texas Instruments
    TexasInstruments,
    /// Other
    Other(u16),
}
impl From<u16> for ManufacturerId {
    fn from(raw: u16) -> Self {
        match raw {
            MANUFACTURER_ID_TEXAS_INSTRUMENTS => ManufacturerId::TexasInstruments,
            _ => ManufacturerId::Other(raw),
        }
    }
}
impl From<ManufacturerId> for u16 {
    fn from(id: ManufacturerId) -> u16 {
        match id {
            ManufacturerId::TexasInstruments => MANUFACTURER_ID_TEXAS_INSTRUMENTS,
            ManufacturerId::Other(id) => id,
        }
    }
}
impl fmt::Display for ManufacturerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mid_u16: u16 = (*self).into();
        match self {
            ManufacturerId::TexasInstruments => write!(f, "Texas Instruments (0x{mid_u16:04X})"),
            ManufacturerId::Other(_) => write!(f, "Unknown (0x{mid_u16:04X})"),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::format;

    #[test]
    fn raw_measurement_from_data_registers() {
        let raw = RawMeasurement::from_registers([0x00, 0x80, 0x00, 0x40]);
        assert_eq!(raw, RawMeasurement { temperature: 0x8000, humidity: 0x4000 });
        let converted = Measurement::from(&raw);
        assert_eq!(converted.centigrade, 42.5);
        assert_eq!(converted.humidity_percent, 25.0);
        assert_eq!(converted.fahrenheit(), 108.5);
        assert_eq!(format!("{converted}"), "42.5 °C, 25.0 %RH");
    }

    #[test]
    fn identity_values() {
        assert_eq!(DeviceId::from(0x07D0), DeviceId::Hdc2010);
        assert_eq!(DeviceId::from(0x08D0), DeviceId::Other(0x08D0));
        assert_eq!(ManufacturerId::from(0x5449), ManufacturerId::TexasInstruments);
        assert_eq!(format!("{}", DeviceId::Hdc2010), "HDC2010 (0x07D0)");
        assert_eq!(format!("{}", ManufacturerId::Other(0x1234)), "Unknown (0x1234)");
        assert_eq!(u16::from(ManufacturerId::TexasInstruments), 0x5449);
    }
}
