//! # 128-Bit Integer Text Codec
//!
//! This module converts signed and unsigned 128-bit integers to and from
//! ASCII digit strings in any radix from 2 to 36. Wide integer columns need
//! both ordered key encoding and text rendering; this codec is the text
//! half, shared by value display and result serialization.
//!
//! ## Format
//!
//! - Digits come from one of two fixed 36-character alphabets
//!   (`0-9a-z` or `0-9A-Z`).
//! - Negative values get a leading `-` in any radix.
//! - `explicit_sign` forces a leading `+` on non-negative values, radix 10
//!   only (matching the engine's display convention for signed columns).
//!
//! ## Algorithm
//!
//! Repeated division by the radix, producing digits least-significant-first
//! into a scratch buffer written back-to-front. Signed values are negated
//! into an unsigned 128-bit accumulator before the digit loop, so
//! `i128::MIN` needs no special case.
//!
//! ## Zero-Allocation Mode
//!
//! The `*_into` variants write into a caller-provided scratch buffer of at
//! least [`MAX_ENCODED_LEN`] bytes and return the filled suffix as `&str`.
//! The allocating `format_*` wrappers are built on top of them.
//!
//! ## Error Handling
//!
//! All functions return `eyre::Result` with descriptive messages:
//! - Radix outside 2..=36: "radix N out of range 2..=36"
//! - Scratch buffer too small: "scratch buffer too small for radix N"
//! - Parse errors: empty input, bare sign, invalid digit, overflow

use eyre::{bail, ensure, Result};

/// Worst-case encoded length: 128 binary digits plus a sign byte.
pub const MAX_ENCODED_LEN: usize = 129;

const LOWERCASE_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const UPPERCASE_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Formatting options for the 128-bit codec.
#[derive(Debug, Clone, Copy)]
pub struct Int128Format {
    /// Radix in 2..=36.
    pub radix: u32,
    /// Use the uppercase digit alphabet.
    pub uppercase: bool,
    /// Force a leading `+` on non-negative values (radix 10 only).
    pub explicit_sign: bool,
}

impl Default for Int128Format {
    fn default() -> Self {
        Self {
            radix: 10,
            uppercase: false,
            explicit_sign: false,
        }
    }
}

impl Int128Format {
    /// Creates options for the given radix with default styling.
    pub fn radix(radix: u32) -> Self {
        Self {
            radix,
            ..Self::default()
        }
    }
}

fn check_radix(radix: u32) -> Result<()> {
    ensure!(
        (2..=36).contains(&radix),
        "radix {} out of range 2..=36",
        radix
    );
    Ok(())
}

/// Writes the digits of `magnitude` back-to-front, returning the index of
/// the first digit. The caller has validated the radix and buffer size.
fn write_digits(mut magnitude: u128, radix: u32, uppercase: bool, buf: &mut [u8]) -> usize {
    let digits = if uppercase {
        UPPERCASE_DIGITS
    } else {
        LOWERCASE_DIGITS
    };
    let radix = radix as u128;
    let mut pos = buf.len();
    loop {
        pos -= 1;
        buf[pos] = digits[(magnitude % radix) as usize];
        magnitude /= radix;
        if magnitude == 0 {
            break;
        }
    }
    pos
}

/// Formats a signed 128-bit integer into a caller-provided scratch buffer.
///
/// Returns the filled suffix of `buf` as `&str`. The buffer must hold at
/// least [`MAX_ENCODED_LEN`] bytes.
pub fn format_i128_into(value: i128, fmt: Int128Format, buf: &mut [u8]) -> Result<&str> {
    check_radix(fmt.radix)?;
    ensure!(
        buf.len() >= MAX_ENCODED_LEN,
        "scratch buffer too small for radix {}: {} < {}",
        fmt.radix,
        buf.len(),
        MAX_ENCODED_LEN
    );

    let negative = value < 0;
    // Negate in u128 space; wrapping_neg maps i128::MIN to its exact magnitude.
    let magnitude = if negative {
        (value as u128).wrapping_neg()
    } else {
        value as u128
    };

    let mut pos = write_digits(magnitude, fmt.radix, fmt.uppercase, buf);
    if negative {
        pos -= 1;
        buf[pos] = b'-';
    } else if fmt.explicit_sign && fmt.radix == 10 {
        pos -= 1;
        buf[pos] = b'+';
    }

    // Digits and signs are ASCII by construction.
    Ok(std::str::from_utf8(&buf[pos..]).expect("codec output is ASCII"))
}

/// Formats an unsigned 128-bit integer into a caller-provided scratch buffer.
///
/// Same contract as [`format_i128_into`].
pub fn format_u128_into(value: u128, fmt: Int128Format, buf: &mut [u8]) -> Result<&str> {
    check_radix(fmt.radix)?;
    ensure!(
        buf.len() >= MAX_ENCODED_LEN,
        "scratch buffer too small for radix {}: {} < {}",
        fmt.radix,
        buf.len(),
        MAX_ENCODED_LEN
    );

    let mut pos = write_digits(value, fmt.radix, fmt.uppercase, buf);
    if fmt.explicit_sign && fmt.radix == 10 {
        pos -= 1;
        buf[pos] = b'+';
    }

    Ok(std::str::from_utf8(&buf[pos..]).expect("codec output is ASCII"))
}

/// Formats a signed 128-bit integer in the given radix.
pub fn format_i128(value: i128, radix: u32) -> Result<String> {
    let mut buf = [0u8; MAX_ENCODED_LEN];
    Ok(format_i128_into(value, Int128Format::radix(radix), &mut buf)?.to_string())
}

/// Formats an unsigned 128-bit integer in the given radix.
pub fn format_u128(value: u128, radix: u32) -> Result<String> {
    let mut buf = [0u8; MAX_ENCODED_LEN];
    Ok(format_u128_into(value, Int128Format::radix(radix), &mut buf)?.to_string())
}

fn digit_value(c: u8, radix: u32) -> Option<u32> {
    let v = match c {
        b'0'..=b'9' => (c - b'0') as u32,
        b'a'..=b'z' => (c - b'a') as u32 + 10,
        b'A'..=b'Z' => (c - b'A') as u32 + 10,
        _ => return None,
    };
    (v < radix).then_some(v)
}

/// Parses the unsigned magnitude after any sign byte.
fn parse_magnitude(digits: &[u8], radix: u32) -> Result<u128> {
    ensure!(!digits.is_empty(), "no digits in 128-bit integer literal");
    let mut acc: u128 = 0;
    for &c in digits {
        let Some(d) = digit_value(c, radix) else {
            bail!("invalid digit '{}' for radix {}", c as char, radix);
        };
        acc = acc
            .checked_mul(radix as u128)
            .and_then(|a| a.checked_add(d as u128))
            .ok_or_else(|| eyre::eyre!("128-bit integer literal overflows for radix {}", radix))?;
    }
    Ok(acc)
}

/// Parses a signed 128-bit integer from ASCII digits in the given radix.
///
/// Accepts an optional leading `+` or `-`; digits are case-insensitive.
pub fn parse_i128(text: &str, radix: u32) -> Result<i128> {
    check_radix(radix)?;
    let bytes = text.as_bytes();
    ensure!(!bytes.is_empty(), "empty 128-bit integer literal");

    let (negative, digits) = match bytes[0] {
        b'-' => (true, &bytes[1..]),
        b'+' => (false, &bytes[1..]),
        _ => (false, bytes),
    };
    let magnitude = parse_magnitude(digits, radix)?;

    if negative {
        ensure!(
            magnitude <= (i128::MAX as u128) + 1,
            "value -{} underflows i128",
            &text[1..]
        );
        Ok((magnitude as i128).wrapping_neg())
    } else {
        ensure!(magnitude <= i128::MAX as u128, "value {} overflows i128", text);
        Ok(magnitude as i128)
    }
}

/// Parses an unsigned 128-bit integer from ASCII digits in the given radix.
///
/// Accepts an optional leading `+`; a minus sign is an error.
pub fn parse_u128(text: &str, radix: u32) -> Result<u128> {
    check_radix(radix)?;
    let bytes = text.as_bytes();
    ensure!(!bytes.is_empty(), "empty 128-bit integer literal");

    let digits = match bytes[0] {
        b'-' => bail!("negative literal '{}' for unsigned 128-bit integer", text),
        b'+' => &bytes[1..],
        _ => bytes,
    };
    parse_magnitude(digits, radix)
}
