//! CRC-24 checksum used by OpenPGP armor.
//!
//! ref: https://www.rfc-editor.org/rfc/rfc4880#section-6.1

pub const CRC24_INIT: u32 = 0x00B7_04CE;
pub const CRC24_POLY: u32 = 0x0186_4CFB;

const CRC24_MASK: u32 = 0x00FF_FFFF;
const CRC24_OVERFLOW: u32 = 0x0100_0000;

/// Computes the 24-bit armor checksum of `data`.
///
/// The result always fits in the low 24 bits.
pub fn crc24(data: &[u8]) -> u32 {
    let mut crc = CRC24_INIT;
    for &byte in data {
        crc ^= u32::from(byte) << 16;
        for _ in 0..8 {
            crc <<= 1;
            if crc & CRC24_OVERFLOW != 0 {
                crc ^= CRC24_POLY;
            }
        }
    }
    crc & CRC24_MASK
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    use super::{CRC24_INIT, CRC24_POLY, crc24};

    // Byte-at-a-time table variant, computed independently of the bitwise loop.
    fn table() -> [u32; 256] {
        let mut table = [0u32; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            let mut c = (i as u32) << 16;
            for _ in 0..8 {
                c <<= 1;
                if c & 0x0100_0000 != 0 {
                    c ^= CRC24_POLY;
                }
            }
            *slot = c & 0x00FF_FFFF;
        }
        table
    }

    fn table_crc24(table: &[u32; 256], data: &[u8]) -> u32 {
        data.iter().fold(CRC24_INIT, |crc, &b| {
            ((crc << 8) & 0x00FF_FFFF) ^ table[(((crc >> 16) ^ u32::from(b)) & 0xff) as usize]
        })
    }

    #[rstest(
        input,
        expected,
        case(b"".as_slice(), CRC24_INIT),
        case(b"123456789".as_slice(), 0x21CF02),
        case(&[0x00], 0x6169D3),
        case(&[0xff], 0xBCECEB)
    )]
    fn test_crc24(input: &[u8], expected: u32) {
        assert_eq!(expected, crc24(input));
    }

    #[test]
    fn test_crc24_matches_table_variant() {
        let table = table();
        let mut rng = StdRng::seed_from_u64(0x4f50_4750);
        for _ in 0..128 {
            let len = rng.gen_range(0..2048);
            let mut data = vec![0u8; len];
            rng.fill(data.as_mut_slice());
            assert_eq!(table_crc24(&table, &data), crc24(&data), "length {len}");
        }
    }

    #[test]
    fn test_crc24_fits_24_bits() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(crc24(&data) & !0x00FF_FFFF, 0);
    }
}
