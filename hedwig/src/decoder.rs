//! Decoder trait for type-safe conversions.
//!
//! `Decoder<T, D>` converts a source value of type `T` into a destination
//! type `D`. Every parsing stage in hedwig is one of these conversions:
//! armored text into an `Armor`, an `Armor` into packet bytes, packet
//! bytes into an RSA public key.
//!
//! # Design Pattern
//!
//! 1. `Decoder<T, D>` - performs the conversion
//! 2. `DecodableFrom<T>` - marker trait naming the valid destinations
//!
//! # Implementation Guide
//!
//! ```no_run
//! use hedwig::decoder::{Decoder, DecodableFrom};
//!
//! struct Octets(Vec<u8>);
//! struct Version(u8);
//!
//! #[derive(Debug)]
//! struct Empty;
//!
//! impl DecodableFrom<Octets> for Version {}
//!
//! impl Decoder<Octets, Version> for Octets {
//!     type Error = Empty;
//!
//!     fn decode(&self) -> Result<Version, Self::Error> {
//!         self.0.first().copied().map(Version).ok_or(Empty)
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type. The destination type must implement
/// `DecodableFrom<T>`.
///
/// # Type Parameters
///
/// * `T` - The source type (usually `Self`)
/// * `D` - The destination type that can be decoded from `T`
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is malformed. Decoders never return a
    /// partially decoded value.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// It has no methods; implement it for each destination type next to the
/// matching `Decoder` implementation:
///
/// ```no_run
/// use hedwig::decoder::DecodableFrom;
///
/// struct Text;
/// struct Bytes;
///
/// impl DecodableFrom<Text> for Bytes {}
/// ```
pub trait DecodableFrom<T> {}
