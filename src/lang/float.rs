//! ## Five byte numbers
//!
//! Small integers use a shorthand with a zero exponent byte. Everything
//! else is an exponent biased by 128 followed by a 32 bit mantissa whose
//! implied top bit is replaced by the sign.

use byteorder::{ByteOrder, LittleEndian};

pub type Float5 = [u8; 5];

const TWO_POW_32: f64 = 4_294_967_296.0;

pub fn encode_number(value: f64) -> Float5 {
    if value.fract() == 0.0 && value.abs() <= 65535.0 {
        let mut out = [0u8; 5];
        out[1] = if value < 0.0 { 0xFF } else { 0x00 };
        LittleEndian::write_u16(&mut out[2..4], value.abs() as u16);
        return out;
    }
    encode_float(value)
}

/// Out of range values, including infinities and NaN, encode as zero.
pub fn encode_float(value: f64) -> Float5 {
    if value == 0.0 || !value.is_finite() {
        return [0; 5];
    }
    let negative = value < 0.0;
    let mut m = value.abs();
    let mut exponent: i32 = 0;
    while m >= 1.0 {
        m /= 2.0;
        exponent += 1;
    }
    while m < 0.5 {
        m *= 2.0;
        exponent -= 1;
    }
    let mut mantissa = (m * TWO_POW_32).round() as u64;
    if mantissa > u64::from(u32::MAX) {
        mantissa >>= 1;
        exponent += 1;
    }
    let biased = exponent + 128;
    if !(1..=255).contains(&biased) {
        return [0; 5];
    }
    let mut out = [0u8; 5];
    out[0] = biased as u8;
    out[1..5].copy_from_slice(&(mantissa as u32).to_be_bytes());
    if negative {
        out[1] |= 0x80;
    } else {
        out[1] &= 0x7F;
    }
    out
}

/// Decodes the five bytes at `offset`, or `None` if the slice is too short.
pub fn decode_float(bytes: &[u8], offset: usize) -> Option<f64> {
    let b = bytes.get(offset..offset.checked_add(5)?)?;
    if b[0] == 0 {
        let magnitude = f64::from(LittleEndian::read_u16(&b[2..4]));
        return Some(if b[1] == 0xFF { -magnitude } else { magnitude });
    }
    let mantissa = u32::from_be_bytes([b[1] | 0x80, b[2], b[3], b[4]]);
    let value = f64::from(mantissa) / TWO_POW_32 * 2f64.powi(i32::from(b[0]) - 128);
    Some(if b[1] & 0x80 != 0 { -value } else { value })
}

/// Formats a value for display with at most eight significant digits.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let sci = format!("{:.7e}", value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };
    if !(-4..8).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        );
    }
    let fixed = format!("{:.*}", (7 - exponent) as usize, value);
    trim_fraction(&fixed).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
