//! # iban-engine
//!
//! Validation, normalization and introspection of International Bank
//! Account Numbers per [ISO 13616](https://www.iso.org/standard/81090.html).
//!
//! An IBAN is accepted when it has the right shape (country code, two check
//! digits, alphanumeric BBAN), the exact length registered for its country,
//! and a mod-97 remainder of 1.
//!
//! ## Quick Start
//!
//! ```rust
//! use iban_engine::*;
//!
//! assert!(validate("DE89 3704 0044 0532 0130 00"));
//! assert!(!validate("DE89370400440532013001"));
//! assert!(!validate(None::<&str>));
//!
//! assert_eq!(format("de89370400440532013000"), "DE89 3704 0044 0532 0130 00");
//! assert_eq!(get_country_code("GB82WEST12345698765432").as_deref(), Some("GB"));
//!
//! let iban: Iban = "GB82 WEST 1234 5698 7654 32".parse().unwrap();
//! assert_eq!(iban.bban(), "WEST12345698765432");
//! assert_eq!(iban.country().length, 22);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Country registry, validation, formatting, `Iban` type |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
