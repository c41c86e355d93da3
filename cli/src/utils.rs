use std::fs;
use std::io::{self, Read};

use crate::error::Result;

/// Read input from a file or stdin
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
pub(crate) fn read_input(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Returns the armor body of a full `-----BEGIN PGP ...-----` block.
///
/// Armor headers (`Key: value` lines up to the first blank line) are
/// dropped. Input without a BEGIN line is returned unchanged.
pub(crate) fn armor_body(contents: &str) -> &str {
    let Some(begin) = contents.find("-----BEGIN ") else {
        return contents;
    };
    let rest = &contents[begin..];
    let Some(after_begin) = rest.find('\n').map(|i| &rest[i + 1..]) else {
        return "";
    };
    let body = match after_begin.find("-----END ") {
        Some(end) => &after_begin[..end],
        None => after_begin,
    };
    if body.lines().next().is_some_and(|line| line.contains(": ")) {
        return match body.find("\n\n").or_else(|| body.find("\r\n\r\n")) {
            Some(blank) => &body[blank..],
            None => "",
        };
    }
    body
}

/// Format binary data as hexadecimal dump
///
/// 16 bytes per line with the offset on the left and the ASCII rendering on
/// the right, like `xxd`.
pub(crate) fn format_hex_dump(data: &[u8]) -> String {
    const BYTES_PER_LINE: usize = 16;
    let mut output = String::new();

    for (offset, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        output.push_str(&format!("{:08x}  ", offset * BYTES_PER_LINE));

        for i in 0..BYTES_PER_LINE {
            match chunk.get(i) {
                Some(byte) => output.push_str(&format!("{:02x} ", byte)),
                None => output.push_str("   "),
            }
            if i == 7 {
                output.push(' ');
            }
        }

        output.push_str(" |");
        for byte in chunk {
            if byte.is_ascii_graphic() || *byte == b' ' {
                output.push(*byte as char);
            } else {
                output.push('.');
            }
        }
        output.push_str("|\n");
    }

    output
}

/// Colon separated hex, `per_line` bytes per line, each line indented.
pub(crate) fn format_colon_hex(data: &[u8], per_line: usize, indent: &str) -> String {
    data.chunks(per_line)
        .map(|chunk| {
            let bytes: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
            format!("{indent}{}", bytes.join(":"))
        })
        .collect::<Vec<_>>()
        .join(":\n")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{armor_body, format_colon_hex, format_hex_dump};

    #[rstest(input, expected,
        case("mQENBFWmxvwB\n=s6n/\n", "mQENBFWmxvwB\n=s6n/\n"),
        case(
            "-----BEGIN PGP PUBLIC KEY BLOCK-----\n\nmQENBFWmxvwB\n=s6n/\n-----END PGP PUBLIC KEY BLOCK-----\n",
            "\nmQENBFWmxvwB\n=s6n/\n"
        ),
        case(
            "-----BEGIN PGP PUBLIC KEY BLOCK-----\nVersion: GnuPG v1\nComment: test\n\nmQENBFWmxvwB\n=s6n/\n-----END PGP PUBLIC KEY BLOCK-----\n",
            "\n\nmQENBFWmxvwB\n=s6n/\n"
        ),
        case("-----BEGIN PGP PUBLIC KEY BLOCK-----\nmQENBFWmxvwB\n=s6n/", "mQENBFWmxvwB\n=s6n/"),
    )]
    fn test_armor_body(input: &str, expected: &str) {
        assert_eq!(expected, armor_body(input));
    }

    #[test]
    fn test_format_hex_dump() {
        let dump = format_hex_dump(b"0123456789abcdefXY");
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(2, lines.len());
        assert_eq!(
            "00000000  30 31 32 33 34 35 36 37  38 39 61 62 63 64 65 66  |0123456789abcdef|",
            lines[0]
        );
        assert!(lines[1].starts_with("00000010  58 59 "));
        assert!(lines[1].ends_with("|XY|"));
    }

    #[test]
    fn test_format_colon_hex() {
        assert_eq!(
            "  01:02:03:\n  04",
            format_colon_hex(&[1, 2, 3, 4], 3, "  ")
        );
    }
}
