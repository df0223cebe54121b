//! Gridlocator Library
//!
//! Conversion between decimal latitude/longitude and Maidenhead grid
//! locators, the compact position encoding used in amateur radio.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

pub mod locator;

pub use locator::{
    decode, encode, encode_with_precision, Axis, Coordinate, GridError, Locator, LocatorSettings,
    Precision, Result, Tier,
};
