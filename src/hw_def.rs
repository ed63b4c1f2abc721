//! Register map, bus addresses and conversion constants of the HDC2010

#[cfg(feature = "defmt")]
use defmt::Format;

/// Expected content of the device ID register pair (0xFF:0xFE)
pub const DEVICE_ID_HDC2010: u16 = 0x07D0;
/// Expected content of the manufacturer ID register pair (0xFD:0xFC)
pub const MANUFACTURER_ID_TEXAS_INSTRUMENTS: u16 = 0x5449;

/// MEAS_TRIG, bit 0 of the measurement configuration register
pub const MEASUREMENT_CONFIG_TRIGGER: u8 = 1 << 0;

/// I²C target address, selected by the ADDR pin
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum I2cAddr {
    /// ADDR pin tied to GND (0x40)
    #[default]
    AddrGnd,
    /// ADDR pin tied to VDD (0x41)
    AddrVdd,
}
impl I2cAddr {
    /// 7-bit bus address
    pub fn as_u8(&self) -> u8 {
        match self {
            I2cAddr::AddrGnd => 0x40,
            I2cAddr::AddrVdd => 0x41,
        }
    }
}

/// Byte-wide registers of the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Register {
    /// temperature, bits 7..0 (bits 1..0 always zero)
    TempLow = 0x00,
    /// temperature, bits 15..8
    TempHigh = 0x01,
    /// relative humidity, bits 7..0 (bits 1..0 always zero)
    HumidLow = 0x02,
    /// relative humidity, bits 15..8
    HumidHigh = 0x03,
    /// interrupt/DRDY status
    InterruptDrdy = 0x04,
    /// peak temperature
    TempMax = 0x05,
    /// peak relative humidity
    HumidMax = 0x06,
    /// interrupt enable
    InterruptEnable = 0x07,
    /// temperature offset adjustment
    TempOffsetAdjust = 0x08,
    /// relative humidity offset adjustment
    HumidOffsetAdjust = 0x09,
    /// temperature threshold low
    TempThresholdLow = 0x0A,
    /// temperature threshold high
    TempThresholdHigh = 0x0B,
    /// relative humidity threshold low
    HumidThresholdLow = 0x0C,
    /// relative humidity threshold high
    HumidThresholdHigh = 0x0D,
    /// soft reset and auto measurement mode configuration
    ResetConfig = 0x0E,
    /// measurement trigger and resolution configuration
    MeasurementConfig = 0x0F,
    /// manufacturer ID, bits 7..0
    ManufacturerIdLow = 0xFC,
    /// manufacturer ID, bits 15..8
    ManufacturerIdHigh = 0xFD,
    /// device ID, bits 7..0
    DeviceIdLow = 0xFE,
    /// device ID, bits 15..8
    DeviceIdHigh = 0xFF,
}
impl Register {
    /// Register address on the bus
    pub fn addr(self) -> u8 {
        self as u8
    }
}

/// Which identity register pair a value came from
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IdentityField {
    /// device ID (0xFF:0xFE)
    DeviceId,
    /// manufacturer ID (0xFD:0xFC)
    ManufacturerId,
}
impl IdentityField {
    pub(crate) fn registers(self) -> (Register, Register) {
        match self {
            IdentityField::DeviceId => (Register::DeviceIdHigh, Register::DeviceIdLow),
            IdentityField::ManufacturerId => (Register::ManufacturerIdHigh, Register::ManufacturerIdLow),
        }
    }

    pub(crate) fn expected(self) -> u16 {
        match self {
            IdentityField::DeviceId => DEVICE_ID_HDC2010,
            IdentityField::ManufacturerId => MANUFACTURER_ID_TEXAS_INSTRUMENTS,
        }
    }
}

/// Assemble a raw sample from its low-address (LSB) and high-address (MSB) register
pub fn raw_from_registers(low: u8, high: u8) -> u16 {
    u16::from_le_bytes([low, high])
}

/// Convert a raw temperature sample to degrees centigrade
pub fn raw_temp_to_centigrade(raw: u16) -> f64 {
    (raw as f64 / 65536.0) * 165.0 - 40.0
}

/// Convert a raw temperature sample to degrees fahrenheit
pub fn raw_temp_to_fahrenheit(raw: u16) -> f64 {
    raw_temp_to_centigrade(raw) * 1.8 + 32.0
}

/// Convert a raw relative humidity sample to percent
pub fn raw_rel_humid_to_percent(raw: u16) -> f64 {
    (raw as f64 / 65536.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        let d = a - b;
        d < tol && d > -tol
    }

    #[test]
    fn temperature_endpoints() {
        assert_eq!(raw_temp_to_centigrade(0), -40.0);
        assert!(approx(raw_temp_to_centigrade(32768), 42.5, 1e-9));
        let top = raw_temp_to_centigrade(u16::MAX);
        assert!(top < 125.0);
        assert!(approx(top, 124.997_482_3, 1e-6));
    }

    #[test]
    fn humidity_endpoints() {
        assert_eq!(raw_rel_humid_to_percent(0), 0.0);
        assert!(approx(raw_rel_humid_to_percent(32768), 50.0, 1e-9));
        let top = raw_rel_humid_to_percent(u16::MAX);
        assert!(top < 100.0);
        assert!(approx(top, 99.998_474_1, 1e-6));
    }

    #[test]
    fn fahrenheit_follows_centigrade() {
        assert!(approx(raw_temp_to_fahrenheit(0), -40.0, 1e-9));
        assert!(approx(raw_temp_to_fahrenheit(32768), 108.5, 1e-9));
    }

    #[test]
    fn conversions_are_monotonic() {
        let mut prev_t = raw_temp_to_centigrade(0);
        let mut prev_h = raw_rel_humid_to_percent(0);
        for raw in 1..=u16::MAX {
            let t = raw_temp_to_centigrade(raw);
            let h = raw_rel_humid_to_percent(raw);
            assert!(t >= prev_t, "temperature decreased at {raw}");
            assert!(h >= prev_h, "humidity decreased at {raw}");
            prev_t = t;
            prev_h = h;
        }
    }

    #[test]
    fn low_register_is_lsb() {
        assert_eq!(raw_from_registers(0x00, 0x80), 0x8000);
        assert_eq!(raw_from_registers(0xD0, 0x07), DEVICE_ID_HDC2010);
        assert_eq!(raw_from_registers(0x49, 0x54), MANUFACTURER_ID_TEXAS_INSTRUMENTS);
    }

    #[test]
    fn register_map_addresses() {
        assert_eq!(Register::TempLow.addr(), 0x00);
        assert_eq!(Register::HumidHigh.addr(), 0x03);
        assert_eq!(Register::ResetConfig.addr(), 0x0E);
        assert_eq!(Register::MeasurementConfig.addr(), 0x0F);
        assert_eq!(Register::ManufacturerIdLow.addr(), 0xFC);
        assert_eq!(Register::DeviceIdHigh.addr(), 0xFF);
    }

    #[test]
    fn bus_addresses() {
        assert_eq!(I2cAddr::default().as_u8(), 0x40);
        assert_eq!(I2cAddr::AddrVdd.as_u8(), 0x41);
    }
}
