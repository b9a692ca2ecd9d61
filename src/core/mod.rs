//! IBAN engine: country registry, normalization, checksum and validation.
//!
//! Every public operation here is pure and total. Malformed input yields
//! `false`, an empty string or `None`, never a panic.

mod checksum;
pub mod countries;
mod error;
mod format;
mod normalize;
mod types;
mod validation;

pub use countries::{
    IBAN_COUNTRIES, IbanCountry, country_length, is_supported_country, lookup_country,
};
pub use error::*;
pub use format::*;
pub use normalize::normalize;
pub use types::*;
pub use validation::*;
