//! Byte count rendering

use crate::constants::{G, K, M, T};

/// Renders a byte count as a scaled, human readable size.
///
/// Counts below one kibibyte are printed as whole bytes (`"512B"`). Larger
/// counts are divided by the largest fitting unit and printed with one decimal
/// digit, rounded half up (`"1.5G"`). The decimal separator is always `.`.
pub fn format_size(byte_size: u64) -> String {
    if byte_size < K {
        return format!("{}B", byte_size);
    }

    let (unit, suffix) = if byte_size < M {
        (K, 'K')
    } else if byte_size < G {
        (M, 'M')
    } else if byte_size < T {
        (G, 'G')
    } else {
        (T, 'T')
    };

    // u128 keeps `byte_size * 10` from overflowing near u64::MAX
    let unit = unit as u128;
    let tenths = (byte_size as u128 * 10 + unit / 2) / unit;
    format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}
