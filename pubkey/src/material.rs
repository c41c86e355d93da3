use nom::IResult;

use crate::error::KeyError;
use crate::mpi::Mpi;
use crate::options::ParseOptions;

/*
ref: https://www.rfc-editor.org/rfc/rfc4880#section-5.5.2

Version 4 public key packet body:

  - 1 octet  version number (4)
  - 4 octets creation time
  - 1 octet  public key algorithm
  - algorithm specific fields; for RSA:
      MPI of RSA public modulus n
      MPI of RSA public encryption exponent e
*/

pub const KEY_VERSION: u8 = 4;

/// Public key algorithm identifiers (RFC 4880 section 9.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKeyAlgorithm {
    RsaEncryptOrSign,
    RsaEncryptOnly,
    RsaSignOnly,
    Elgamal,
    Dsa,
    Ecdh,
    Ecdsa,
    EdDsa,
    Unknown(u8),
}

impl From<u8> for PublicKeyAlgorithm {
    fn from(value: u8) -> Self {
        match value {
            1 => PublicKeyAlgorithm::RsaEncryptOrSign,
            2 => PublicKeyAlgorithm::RsaEncryptOnly,
            3 => PublicKeyAlgorithm::RsaSignOnly,
            16 => PublicKeyAlgorithm::Elgamal,
            17 => PublicKeyAlgorithm::Dsa,
            18 => PublicKeyAlgorithm::Ecdh,
            19 => PublicKeyAlgorithm::Ecdsa,
            22 => PublicKeyAlgorithm::EdDsa,
            _ => PublicKeyAlgorithm::Unknown(value),
        }
    }
}

impl From<PublicKeyAlgorithm> for u8 {
    fn from(algorithm: PublicKeyAlgorithm) -> Self {
        match algorithm {
            PublicKeyAlgorithm::RsaEncryptOrSign => 1,
            PublicKeyAlgorithm::RsaEncryptOnly => 2,
            PublicKeyAlgorithm::RsaSignOnly => 3,
            PublicKeyAlgorithm::Elgamal => 16,
            PublicKeyAlgorithm::Dsa => 17,
            PublicKeyAlgorithm::Ecdh => 18,
            PublicKeyAlgorithm::Ecdsa => 19,
            PublicKeyAlgorithm::EdDsa => 22,
            PublicKeyAlgorithm::Unknown(value) => value,
        }
    }
}

/// Fields of an RSA public key packet body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMaterial<'a> {
    version: u8,
    creation_time: u32,
    algorithm: PublicKeyAlgorithm,
    modulus: Mpi<'a>,
    exponent: Mpi<'a>,
}

impl<'a> KeyMaterial<'a> {
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Seconds since the Unix epoch, as stored. Not validated.
    pub fn creation_time(&self) -> u32 {
        self.creation_time
    }

    pub fn algorithm(&self) -> PublicKeyAlgorithm {
        self.algorithm
    }

    pub fn modulus(&self) -> &Mpi<'a> {
        &self.modulus
    }

    pub fn exponent(&self) -> &Mpi<'a> {
        &self.exponent
    }
}

/// Reads the version, algorithm and RSA integers of a public key packet body.
///
/// Anything after the exponent is ignored.
pub fn parse_public_key_material<'a>(
    body: &'a [u8],
    options: &ParseOptions,
) -> Result<KeyMaterial<'a>, KeyError> {
    let (input, version) = parse_u8(body).map_err(|_| truncated("version", 1, body))?;
    if version != KEY_VERSION {
        return Err(KeyError::UnsupportedVersion(version));
    }

    let (input, creation_time) =
        parse_u32(input).map_err(|_| truncated("creation time", 4, input))?;

    let (input, algorithm) = parse_u8(input).map_err(|_| truncated("algorithm", 1, input))?;
    let algorithm = PublicKeyAlgorithm::from(algorithm);
    if algorithm != PublicKeyAlgorithm::RsaEncryptOrSign {
        return Err(KeyError::UnsupportedAlgorithm(algorithm.into()));
    }

    let (input, modulus) = Mpi::parse(input, "modulus", options.mpi_length())?;
    let (_, exponent) = Mpi::parse(input, "exponent", options.mpi_length())?;

    Ok(KeyMaterial {
        version,
        creation_time,
        algorithm,
        modulus,
        exponent,
    })
}

fn truncated(field: &'static str, needed: usize, input: &[u8]) -> KeyError {
    KeyError::TruncatedData {
        field,
        needed,
        available: input.len(),
    }
}

fn parse_u8(input: &[u8]) -> IResult<&[u8], u8> {
    nom::number::complete::be_u8(input)
}

fn parse_u32(input: &[u8]) -> IResult<&[u8], u32> {
    nom::number::complete::be_u32(input)
}
