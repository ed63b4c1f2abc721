//! This is a platform-agnostic Rust driver for the HDC2010 low-power humidity and temperature
//! digital sensor using the [`embedded-hal`] traits.  This driver was inspired by
//! [Diego Barrios Romero's hdc20xx-rs driver](https://github.com/eldruin/hdc20xx-rs).
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal
//!
//! This driver allows you to:
//! - Verify the device and manufacturer IDs of the attached part.
//! - Trigger a one-shot measurement.
//! - Read temperature and relative humidity, individually or as one burst.
//! - Keep the last successfully read temperature and humidity.
//! - Read and write individual registers.
//!
//! This driver does not support the following device features:
//! - Auto (self-timed) measurement mode.
//! - Interrupts, the DRDY flag and threshold alerts.
//! - Offset calibration.
//! - Heater and soft reset.
//!
//! ## Features
//!
//! - `defmt`: Enables logging using the `defmt` framework.
//! - `log`: Enables logging using the `log` framework.
//!
//! ## Supported devices: HDC2010
//!
//! The HDC2010 is an integrated humidity and temperature sensor that provides high accuracy
//! measurements with very low power consumption in an ultra-compact WLCSP package. The sensing
//! element of the HDC2010 is placed on the bottom part of the device. Measurement results are
//! stored as 14-bit values in pairs of byte-wide registers, least significant byte first.
//!
//! Datasheet:
//!   [HDC2010](https://www.ti.com/lit/ds/symlink/hdc2010.pdf)
//!
//! To use this driver, import this crate and an `embedded_hal` implementation, then instantiate
//! the device.
//!
//! ## Example:
//!
//! ```ignore
//! use hdc2010::{Hdc2010, I2cAddr};
//!
//! // Platform-specific
//! let i2c = /* embedded_hal::i2c::I2c instance */;
//!
//! let mut hdc2010 = Hdc2010::new(i2c, I2cAddr::AddrGnd);
//! hdc2010.init().unwrap();
//!
//! loop {
//!     hdc2010.trigger_measurement().unwrap();
//!
//!     // Platform-specific: allow the conversion to finish
//!     sleep_ms(2);
//!
//!     let temperature = hdc2010.read_temperature().unwrap();
//!     let humidity = hdc2010.read_humidity().unwrap();
//!     println!("{:0.1} °C, {:0.1} %RH", temperature, humidity);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![no_std]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

mod device_impl;
mod hw_def;
mod types;

pub use crate::{hw_def::*, types::*};

#[cfg(feature = "defmt")]
use defmt::Format;

/// HDC2010 device driver
///
/// Owns the bus handle and keeps the last successfully read temperature and relative humidity.
#[derive(Debug)]
pub struct Hdc2010<I2C> {
    pub(crate) i2c: I2C,
    pub(crate) i2c_addr: I2cAddr,
    pub(crate) temperature: f64,
    pub(crate) humidity: f64,
}

impl<I2C> Hdc2010<I2C> {
    /// Last successfully read temperature in degrees centigrade
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Last successfully read relative humidity in percent
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Destroy the driver and return the bus handle
    pub fn destroy(self) -> I2C {
        self.i2c
    }
}

/// All possible errors in this crate
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error<E> {
    /// I²C communication error
    I2c(E),
    /// Device or manufacturer ID read back does not belong to an HDC2010
    IdentityMismatch {
        /// register pair that did not match
        field: IdentityField,
        /// value assembled from the register pair
        found: u16,
    },
    /// Identity matched, but some of the identity reads reported an I²C error
    IdentityUnverified {
        /// number of failed register reads
        failed_reads: u8,
        /// last I²C error reported
        error: E,
    },
}
