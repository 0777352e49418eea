use num_format::{Locale, ToFormattedString};

use crate::config::{CURRENCY_FRACTION_DIGITS, CURRENCY_SYMBOL};

// Digits per chunk when a whole part is too big for u128; a multiple of 3
const CHUNK_DIGITS: usize = 36;

/// Formats an amount the way the site shows money everywhere:
/// `Ksh\u{a0}15,660.00` (no-break space after the symbol, as en-KE does).
///
/// Rounding is half away from zero on the shortest decimal form of the
/// value, so `1.005` shows as `1.01` even though the binary value sits just
/// below it. Negative values (including `-0.0`) keep their sign; NaN and
/// infinities render as `KshNaN` / `Ksh∞` / `-Ksh∞`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{}NaN", CURRENCY_SYMBOL);
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}{}∞", sign, CURRENCY_SYMBOL);
    }

    let (whole, fraction) = round_half_expand(&amount.abs().to_string(), CURRENCY_FRACTION_DIGITS);
    format!("{}{}\u{a0}{}.{}", sign, CURRENCY_SYMBOL, group_whole(&whole), fraction)
}

/// Rounds a plain decimal string (`"2.675"`) to `digits` fraction digits,
/// returning the whole and fraction parts separately.
fn round_half_expand(decimal: &str, digits: usize) -> (String, String) {
    let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));

    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    let round_up = fraction.as_bytes().get(digits).map_or(false, |d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let as_text = |bytes: &[u8]| bytes.iter().map(|&b| b as char).collect::<String>();
    (as_text(&kept[..split]), as_text(&kept[split..]))
}

fn group_whole(digits: &str) -> String {
    match digits.parse::<u128>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        Err(_) => {
            // Format the low chunk offset by 10^36 so its leading zeros survive,
            // then drop the "1," that the offset adds.
            let split = digits.len() - CHUNK_DIGITS;
            let low = digits[split..].parse::<u128>().unwrap_or_default();
            let padded = (10u128.pow(CHUNK_DIGITS as u32) + low).to_formatted_string(&Locale::en);
            format!("{},{}", group_whole(&digits[..split]), &padded[2..])
        }
    }
}
