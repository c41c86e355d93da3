//! # hedwig
//!
//! Core conversion traits for the hedwig OpenPGP key reader.
//!
//! This crate defines the `Decoder` and `Encoder` traits that every other
//! hedwig crate implements, so each stage of key reading is expressed as a
//! type-checked conversion.
//!
//! ## Overview
//!
//! Reading an armored public key flows like this:
//! ```text
//! &str → Armor → RawPacket → RsaPublicKey
//! ```
//!
//! Each arrow is a `Decoder` implementation. Armoring goes the other way
//! through `Encoder`:
//! ```text
//! Vec<u8> → Armor → String (Display)
//! ```
//!
//! ## Type Safety
//!
//! The marker traits `DecodableFrom` and `EncodableTo` restrict which pairs
//! of types may be converted, so an unsupported conversion is a compile
//! error rather than a runtime failure.
//!
//! ## Example
//!
//! ```ignore
//! use hedwig::decoder::Decoder;
//! use armor::{Armor, RawPacket};
//! use pubkey::RsaPublicKey;
//!
//! let armor: Armor = "mI0EVabG/AEE...=s6n/".parse()?;
//! let packet: RawPacket = armor.decode()?;
//! let key: RsaPublicKey = packet.decode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
