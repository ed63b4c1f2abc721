use crate::hw_def::*;
use crate::types::*;
use crate::{Error, Hdc2010};

use embedded_hal::i2c::I2c;

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        use defmt::{trace, warn};
    } else if #[cfg(feature = "log")] {
        use log::{trace, warn};
    } else {
        macro_rules! trace {
            ($($arg:tt)*) => {};
        }
        macro_rules! warn {
            ($($arg:tt)*) => {};
        }
    }
}

impl<I2C, E> Hdc2010<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Create a new HDC2010 driver instance
    ///
    /// No bus traffic happens until [`init`](Self::init) or a measurement is requested. The
    /// stored temperature and humidity start at zero.
    pub fn new(i2c: I2C, i2c_addr: I2cAddr) -> Self {
        Self {
            i2c,
            i2c_addr,
            temperature: 0.0,
            humidity: 0.0,
        }
    }

    /// Read a single register
    pub fn read_register(&mut self, reg: Register) -> Result<u8, Error<E>> {
        let [value] = self.read_registers::<1>(reg)?;
        Ok(value)
    }

    /// Read `N` contiguous registers starting at `reg`
    ///
    /// The device auto-increments its register pointer, so this is a single bus transaction.
    pub fn read_registers<const N: usize>(&mut self, reg: Register) -> Result<[u8; N], Error<E>> {
        let mut read_buf = [0u8; N];
        self.i2c
            .write_read(self.i2c_addr.as_u8(), &[reg.addr()], &mut read_buf)
            .map_err(Error::I2c)?;
        trace!("hdc2010::read_registers(): reg={:?} len={}", reg, N);
        Ok(read_buf)
    }

    /// Write a single register
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<E>> {
        trace!("hdc2010::write_register(): reg={:?} value={:#x}", reg, value);
        self.i2c
            .write(self.i2c_addr.as_u8(), &[reg.addr(), value])
            .map_err(Error::I2c)
    }

    /// Verify that the attached part is an HDC2010 made by Texas Instruments
    ///
    /// Reads the device ID pair and then the manufacturer ID pair, high register first. A pair
    /// that does not match stops verification with [`Error::IdentityMismatch`]; the manufacturer
    /// ID is not read after a device ID mismatch. If both pairs match but any of the four reads
    /// reported a bus error, [`Error::IdentityUnverified`] carries the number of failed reads.
    ///
    /// The driver must not be used further after an identity error.
    pub fn init(&mut self) -> Result<(), Error<E>> {
        let mut failed_reads = 0u8;
        let mut last_error = None;

        for field in [IdentityField::DeviceId, IdentityField::ManufacturerId] {
            let (high_reg, low_reg) = field.registers();
            let mut bytes = [0u8; 2];
            for (byte, reg) in bytes.iter_mut().zip([high_reg, low_reg]) {
                let (value, status) = self.read_identity_byte(reg);
                *byte = value;
                if let Err(i2c_err) = status {
                    warn!("hdc2010::init(): read of {:?} failed", reg);
                    failed_reads += 1;
                    last_error = Some(i2c_err);
                }
            }

            let found = raw_from_registers(bytes[1], bytes[0]);
            if found != field.expected() {
                warn!("hdc2010::init(): {:?} mismatch: found={:#x} expected={:#x}", field, found, field.expected());
                return Err(Error::IdentityMismatch { field, found });
            }
        }

        match last_error {
            Some(error) => Err(Error::IdentityUnverified { failed_reads, error }),
            None => Ok(()),
        }
    }

    // Starts from a zeroed byte on every call. A failing bus may still have stored data in it.
    fn read_identity_byte(&mut self, reg: Register) -> (u8, Result<(), E>) {
        let mut read_buf = [0u8; 1];
        let status = self.i2c.write_read(self.i2c_addr.as_u8(), &[reg.addr()], &mut read_buf);
        (read_buf[0], status)
    }

    /// Start a one-shot measurement
    ///
    /// Writes only the trigger bit to the measurement configuration register, which leaves
    /// resolution and mode bits at their reset values. The caller is responsible for waiting
    /// out the conversion time before reading the result.
    pub fn trigger_measurement(&mut self) -> Result<(), Error<E>> {
        self.write_register(Register::MeasurementConfig, MEASUREMENT_CONFIG_TRIGGER)
    }

    fn read_sample(&mut self, low_reg: Register, high_reg: Register) -> Result<u16, Error<E>> {
        let low = self.read_register(low_reg)?;
        let high = self.read_register(high_reg)?;
        Ok(raw_from_registers(low, high))
    }

    /// Read the temperature registers, convert to centigrade and store the result
    ///
    /// On error the stored temperature is left unchanged.
    pub fn read_temperature(&mut self) -> Result<f64, Error<E>> {
        let raw = self.read_sample(Register::TempLow, Register::TempHigh)?;
        self.temperature = raw_temp_to_centigrade(raw);
        trace!("hdc2010::read_temperature(): raw={:#x} centigrade={}", raw, self.temperature);
        Ok(self.temperature)
    }

    /// Read the humidity registers, convert to percent and store the result
    ///
    /// On error the stored humidity is left unchanged.
    pub fn read_humidity(&mut self) -> Result<f64, Error<E>> {
        let raw = self.read_sample(Register::HumidLow, Register::HumidHigh)?;
        self.humidity = raw_rel_humid_to_percent(raw);
        trace!("hdc2010::read_humidity(): raw={:#x} percent={}", raw, self.humidity);
        Ok(self.humidity)
    }

    /// Trigger a one-shot measurement and read back the temperature
    ///
    /// Nothing is read if the trigger fails.
    pub fn measure_temperature(&mut self) -> Result<f64, Error<E>> {
        self.trigger_measurement()?;
        self.read_temperature()
    }

    /// Trigger a one-shot measurement and read back the relative humidity
    ///
    /// Nothing is read if the trigger fails.
    pub fn measure_humidity(&mut self) -> Result<f64, Error<E>> {
        self.trigger_measurement()?;
        self.read_humidity()
    }

    /// Trigger a one-shot measurement and burst-read temperature and humidity together
    ///
    /// Both stored values are updated only when the whole cycle succeeds.
    pub fn measure(&mut self) -> Result<Measurement, Error<E>> {
        self.trigger_measurement()?;
        let raw = RawMeasurement::from_registers(self.read_registers::<4>(Register::TempLow)?);
        let measurement = Measurement::from(&raw);
        self.temperature = measurement.centigrade;
        self.humidity = measurement.humidity_percent;
        Ok(measurement)
    }

    /// Read the device ID
    pub fn read_device_id(&mut self) -> Result<DeviceId, Error<E>> {
        let [low, high] = self.read_registers::<2>(Register::DeviceIdLow)?;
        Ok(DeviceId::from(raw_from_registers(low, high)))
    }

    /// Read the manufacturer ID
    pub fn read_manufacturer_id(&mut self) -> Result<ManufacturerId, Error<E>> {
        let [low, high] = self.read_registers::<2>(Register::ManufacturerIdLow)?;
        Ok(ManufacturerId::from(raw_from_registers(low, high)))
    }
}
