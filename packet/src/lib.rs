use nom::{IResult, Parser};
use tracing::trace;

pub mod error;

pub use error::Error;

/*
ref: https://www.rfc-editor.org/rfc/rfc4880#section-4.2

Old format packet header:

   +---------------+
   |7 6 5 4 3 2 1 0|
   +---------------+
   Bit 7 -- Always one
   Bit 6 -- New packet format if set
   Bits 5-2 -- packet tag
   Bits 1-0 -- length-type
*/

const PACKET_MARKER: u8 = 0x80;
const NEW_FORMAT: u8 = 0x40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
    PublicKeyEncryptedSessionKey = 1,
    Signature = 2,
    SecretKey = 5,
    PublicKey = 6,
    SecretSubkey = 7,
    UserId = 13,
    PublicSubkey = 14,
    Unimplemented(u8),
}

impl From<u8> for Tag {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::PublicKeyEncryptedSessionKey,
            2 => Self::Signature,
            5 => Self::SecretKey,
            6 => Self::PublicKey,
            7 => Self::SecretSubkey,
            13 => Self::UserId,
            14 => Self::PublicSubkey,
            _ => Tag::Unimplemented(value),
        }
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::PublicKeyEncryptedSessionKey => 1,
            Tag::Signature => 2,
            Tag::SecretKey => 5,
            Tag::PublicKey => 6,
            Tag::SecretSubkey => 7,
            Tag::UserId => 13,
            Tag::PublicSubkey => 14,
            Tag::Unimplemented(value) => value,
        }
    }
}

/// Size of the length field that follows an old format header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthType {
    OneOctet,
    TwoOctet,
    FourOctet,
    Indeterminate,
}

impl LengthType {
    /// Number of length octets, `None` for an indeterminate length.
    pub fn octets(self) -> Option<usize> {
        match self {
            LengthType::OneOctet => Some(1),
            LengthType::TwoOctet => Some(2),
            LengthType::FourOctet => Some(4),
            LengthType::Indeterminate => None,
        }
    }
}

impl From<u8> for LengthType {
    fn from(value: u8) -> Self {
        match value & 0x03 {
            0 => LengthType::OneOctet,
            1 => LengthType::TwoOctet,
            2 => LengthType::FourOctet,
            _ => LengthType::Indeterminate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    tag: Tag,
    length_type: LengthType,
    body_length: u32,
}

impl PacketHeader {
    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn length_type(&self) -> LengthType {
        self.length_type
    }

    pub fn body_length(&self) -> u32 {
        self.body_length
    }

    /// Parses an old format header of any tag.
    ///
    /// Returns the header and the number of bytes it occupies.
    pub fn parse(input: &[u8]) -> Result<(PacketHeader, usize), Error> {
        let (tag, length_type) = parse_header_byte(input)?;
        let octets = length_type.octets().ok_or(Error::IndeterminateLength)?;
        let (rest, body_length) =
            parse_length(&input[1..], octets).map_err(|_| Error::TruncatedHeader {
                needed: 1 + octets,
                available: input.len(),
            })?;
        let consumed = input.len() - rest.len();
        trace!(?tag, body_length, consumed, "parsed packet header");
        Ok((
            PacketHeader {
                tag,
                length_type,
                body_length,
            },
            consumed,
        ))
    }
}

/// Parses the header of a public key packet (tag 6).
///
/// Any other tag is rejected before the length field is read.
pub fn parse_header(input: &[u8]) -> Result<(PacketHeader, usize), Error> {
    let (tag, _) = parse_header_byte(input)?;
    if tag != Tag::PublicKey {
        return Err(Error::UnexpectedTag(tag.into()));
    }
    PacketHeader::parse(input)
}

/// A packet header together with the body it frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet<'a> {
    header: PacketHeader,
    body: &'a [u8],
}

impl<'a> Packet<'a> {
    pub fn header(&self) -> &PacketHeader {
        &self.header
    }

    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    /// Parses one packet of any tag, returning the bytes that follow it.
    pub fn parse(input: &'a [u8]) -> Result<(&'a [u8], Packet<'a>), Error> {
        let (header, consumed) = PacketHeader::parse(input)?;
        Self::split(input, header, consumed)
    }

    /// Parses one public key packet, returning the bytes that follow it.
    pub fn parse_public_key(input: &'a [u8]) -> Result<(&'a [u8], Packet<'a>), Error> {
        let (header, consumed) = parse_header(input)?;
        Self::split(input, header, consumed)
    }

    fn split(
        input: &'a [u8],
        header: PacketHeader,
        consumed: usize,
    ) -> Result<(&'a [u8], Packet<'a>), Error> {
        let input = &input[consumed..];
        let (rest, body) = take_body(input, header.body_length).map_err(|_| {
            Error::TruncatedBody {
                declared: header.body_length,
                available: input.len(),
            }
        })?;
        Ok((rest, Packet { header, body }))
    }
}

fn parse_header_byte(input: &[u8]) -> Result<(Tag, LengthType), Error> {
    let (_, n) = parse_tag_byte(input).map_err(|_| Error::TruncatedHeader {
        needed: 1,
        available: input.len(),
    })?;
    if n & PACKET_MARKER == 0 {
        return Err(Error::InvalidMarker(n));
    }
    if n & NEW_FORMAT != 0 {
        return Err(Error::UnsupportedLengthEncoding(n));
    }
    Ok((Tag::from((n >> 2) & 0x0f), LengthType::from(n)))
}

fn parse_tag_byte(input: &[u8]) -> IResult<&[u8], u8> {
    nom::number::complete::be_u8(input)
}

fn parse_length(input: &[u8], octets: usize) -> IResult<&[u8], u32> {
    let (input, bs) = nom::bytes::complete::take(octets).parse(input)?;
    let n = bs.iter().fold(0u32, |n, &b| (n << 8) | u32::from(b));
    Ok((input, n))
}

fn take_body(input: &[u8], length: u32) -> IResult<&[u8], &[u8]> {
    nom::bytes::complete::take(length).parse(input)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::{Error, LengthType, Packet, PacketHeader, Tag, parse_header, parse_length};

    #[rstest(input, expected,
        case(vec![0x02], 0x02),
        case(vec![0x02, 0x0d], 0x020d),
        case(vec![0x00, 0x00, 0x02, 0x0d], 0x020d),
        case(vec![0xff, 0xff, 0xff, 0xff], u32::MAX),
    )]
    fn test_parse_length(input: Vec<u8>, expected: u32) {
        let (rest, actual) = parse_length(&input, input.len()).unwrap();

        assert!(rest.is_empty());
        assert_eq!(expected, actual);
    }

    #[rstest(input, tag, length_type, body_length, consumed,
        case(vec![0x98, 0x8d], Tag::PublicKey, LengthType::OneOctet, 141, 2),
        case(vec![0x99, 0x02, 0x0d, 0x04], Tag::PublicKey, LengthType::TwoOctet, 525, 3),
        case(vec![0x9a, 0x00, 0x00, 0x02, 0x0d], Tag::PublicKey, LengthType::FourOctet, 525, 5),
        case(vec![0xb4, 0x20], Tag::UserId, LengthType::OneOctet, 32, 2),
        case(vec![0x89, 0x02, 0x38], Tag::Signature, LengthType::TwoOctet, 568, 3),
        case(vec![0x80, 0x00], Tag::Unimplemented(0), LengthType::OneOctet, 0, 2),
    )]
    fn test_packet_header_parse(
        input: Vec<u8>,
        tag: Tag,
        length_type: LengthType,
        body_length: u32,
        consumed: usize,
    ) {
        let (header, actual_consumed) = PacketHeader::parse(&input).unwrap();

        assert_eq!(tag, header.tag());
        assert_eq!(length_type, header.length_type());
        assert_eq!(body_length, header.body_length());
        assert_eq!(consumed, actual_consumed);
    }

    #[rstest(input, expected,
        case(vec![], Error::TruncatedHeader { needed: 1, available: 0 }),
        case(vec![0x00], Error::InvalidMarker(0x00)),
        case(vec![0x7f, 0x00], Error::InvalidMarker(0x7f)),
        case(vec![0xc0], Error::UnsupportedLengthEncoding(0xc0)),
        case(vec![0xc6, 0x8d], Error::UnsupportedLengthEncoding(0xc6)),
        case(vec![0x9b], Error::IndeterminateLength),
        case(vec![0xb4, 0x20], Error::UnexpectedTag(13)),
        case(vec![0x89, 0x02, 0x38], Error::UnexpectedTag(2)),
        case(vec![0xb9, 0x02, 0x0d], Error::UnexpectedTag(14)),
        case(vec![0x98], Error::TruncatedHeader { needed: 2, available: 1 }),
        case(vec![0x99, 0x02], Error::TruncatedHeader { needed: 3, available: 2 }),
        case(vec![0x9a, 0x00, 0x00], Error::TruncatedHeader { needed: 5, available: 3 }),
    )]
    fn test_parse_header_with_error(input: Vec<u8>, expected: Error) {
        assert_eq!(Err(expected), parse_header(&input));
    }

    #[test]
    fn test_parse_header_public_key() {
        let input = [0x99, 0x02, 0x0d, 0x04];
        let (header, consumed) = parse_header(&input).unwrap();

        assert_eq!(Tag::PublicKey, header.tag());
        assert_eq!(525, header.body_length());
        assert_eq!(3, consumed);
    }

    #[test]
    fn test_packet_parse_splits_body() {
        let input = [0x98, 0x02, 0x04, 0x55, 0xb4, 0x00];
        let (rest, packet) = Packet::parse_public_key(&input).unwrap();

        assert_eq!(&[0x04, 0x55], packet.body());
        assert_eq!(&[0xb4, 0x00], rest);

        let (rest, packet) = Packet::parse(rest).unwrap();
        assert_eq!(Tag::UserId, packet.header().tag());
        assert!(packet.body().is_empty());
        assert!(rest.is_empty());
    }

    #[rstest(input, expected,
        case(vec![0x98, 0x03, 0x04, 0x55], Error::TruncatedBody { declared: 3, available: 2 }),
        case(vec![0x99, 0x02, 0x0d], Error::TruncatedBody { declared: 525, available: 0 }),
    )]
    fn test_packet_parse_truncated_body(input: Vec<u8>, expected: Error) {
        assert_eq!(Err(expected), Packet::parse_public_key(&input));
    }

    #[rstest(value, case(1), case(6), case(13), case(15))]
    fn test_tag_value_roundtrip(value: u8) {
        assert_eq!(value, u8::from(Tag::from(value)));
    }
}
