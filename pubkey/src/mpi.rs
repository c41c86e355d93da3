use nom::{IResult, Parser};

use crate::error::KeyError;
use crate::options::MpiLength;

/*
ref: https://www.rfc-editor.org/rfc/rfc4880#section-3.2

MPI = 2 octets  -- length of the integer in bits, big-endian
      N octets  -- the integer, big-endian
*/

/// A multiprecision integer borrowed from a packet body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mpi<'a> {
    bit_length: u16,
    bytes: &'a [u8],
}

impl<'a> Mpi<'a> {
    pub fn new(bit_length: u16, bytes: &'a [u8]) -> Self {
        Mpi { bit_length, bytes }
    }

    pub fn bit_length(&self) -> u16 {
        self.bit_length
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Reads one MPI named `field`, returning the bytes that follow it.
    pub fn parse(
        input: &'a [u8],
        field: &'static str,
        length: MpiLength,
    ) -> Result<(&'a [u8], Mpi<'a>), KeyError> {
        let (input, bit_length) = parse_bit_length(input).map_err(|_| KeyError::TruncatedData {
            field,
            needed: 2,
            available: input.len(),
        })?;
        let needed = length.byte_len(bit_length);
        let (input, bytes) = take_bytes(input, needed).map_err(|_| KeyError::TruncatedData {
            field,
            needed,
            available: input.len(),
        })?;
        Ok((input, Mpi { bit_length, bytes }))
    }
}

fn parse_bit_length(input: &[u8]) -> IResult<&[u8], u16> {
    nom::number::complete::be_u16(input)
}

fn take_bytes(input: &[u8], n: usize) -> IResult<&[u8], &[u8]> {
    nom::bytes::complete::take(n).parse(input)
}
