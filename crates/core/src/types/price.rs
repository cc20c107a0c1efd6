//! Price display formatting over decimal arithmetic.
//!
//! All money in this client is `rust_decimal::Decimal`; the backend sends
//! plain JSON numbers which `serde` decodes losslessly into `Decimal`. This
//! module only owns the storefront's display convention: US dollars, two
//! fraction digits, comma-grouped thousands (`$1,234.50`).

use rust_decimal::Decimal;

/// Format a decimal amount as a US dollar string: `$1,234.50`.
///
/// Negative amounts keep the sign ahead of the dollar symbol (`-$5.00`),
/// matching how refund lines are displayed.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).abs();
    let unsigned = rounded.to_string();

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((w, f)) => (w.to_owned(), format!("{f:0<2}")),
        None => (unsigned.clone(), "00".to_owned()),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{fraction}")
}
