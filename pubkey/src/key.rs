use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Serialize, Serializer};

use crate::error::KeyError;
use crate::mpi::Mpi;

/// RSA public key read from an OpenPGP public key packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsaPublicKey {
    #[serde(serialize_with = "serialize_hex")]
    modulus: BigUint, // n
    #[serde(serialize_with = "serialize_hex")]
    exponent: BigUint, // e
}

impl RsaPublicKey {
    pub fn new(modulus: BigUint, exponent: BigUint) -> Self {
        RsaPublicKey { modulus, exponent }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn exponent(&self) -> &BigUint {
        &self.exponent
    }

    /// The exponent as a machine integer, if it fits.
    pub fn exponent_u64(&self) -> Option<u64> {
        self.exponent.to_u64()
    }

    /// Key size in bits (RSA modulus bit length)
    pub fn key_size(&self) -> u64 {
        self.modulus.bits()
    }

    /// Modulus size in bytes.
    pub fn modulus_len(&self) -> usize {
        self.modulus.to_bytes_be().len()
    }
}

/// Builds the key from the modulus and exponent of a key material packet.
pub fn assemble(modulus: &Mpi<'_>, exponent: &Mpi<'_>) -> Result<RsaPublicKey, KeyError> {
    Ok(RsaPublicKey {
        modulus: to_integer("modulus", modulus)?,
        exponent: to_integer("exponent", exponent)?,
    })
}

fn to_integer(field: &'static str, mpi: &Mpi<'_>) -> Result<BigUint, KeyError> {
    let value = BigUint::from_bytes_be(mpi.bytes());
    // An MPI never carries more significant bits than it declares.
    if value.bits() > u64::from(mpi.bit_length()) {
        return Err(KeyError::InvalidIntegerEncoding {
            field,
            declared: mpi.bit_length(),
            actual: value.bits(),
        });
    }
    Ok(value)
}

fn serialize_hex<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{:X}", value))
}
