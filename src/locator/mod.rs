//! Maidenhead grid locator conversion.
//!
//! A locator names a cell on a nested grid:
//! - Field: 18×18 cells of 20° longitude by 10° latitude (`A`-`R`)
//! - Square: 10×10 cells per field of 2° by 1° (`0`-`9`)
//! - Subsquare: 24×24 cells per square of 5' by 2.5' (`a`-`x`)
//!
//! Each tier contributes a character pair, longitude first.
//!
//! # Example Usage
//!
//! ```
//! use gridlocator::locator::{decode, encode, Locator, Precision};
//!
//! // Washington, D.C.
//! let code = encode(38.92, -77.065).unwrap();
//! assert_eq!(code, "FM18lw");
//!
//! // Decoding yields the southwest corner of the cell
//! let (lat, lon) = decode(&code).unwrap();
//! assert!((lat - 38.92).abs() < 0.1);
//! assert!((lon + 77.065).abs() < 0.1);
//!
//! // The typed surface canonicalizes case and exposes the cell
//! let locator: Locator = "fm18LW".parse().unwrap();
//! assert_eq!(locator.to_string(), "FM18lw");
//! assert_eq!(locator.square().precision(), Precision::Square);
//! ```

mod cell;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod symbol;
pub mod types;

pub use decoder::decode;
pub use encoder::{encode, encode_with_precision};
pub use error::{GridError, Result};
pub use symbol::{SymbolError, SymbolTable, SYMBOLS};
pub use types::{Axis, Coordinate, Locator, LocatorSettings, Precision, Tier};
