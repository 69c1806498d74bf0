//! Display strings for currency and percentages.
//!
//! Currency uses the Indian grouping convention: the last three digits form
//! one group, every group to the left of it has two digits.

/// Group an integer the Indian way: 2772 → "2,772", 12345678 → "1,23,45,678".
pub fn format_inr(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        let from_right = len - i;
        if i > 0 && (from_right == 3 || (from_right > 3 && (from_right - 3) % 2 == 0)) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "₹2,772 Cr"
pub fn format_crore(n: i64) -> String {
    format!("₹{} Cr", format_inr(n))
}

/// "+45%"
pub fn format_gain_pct(n: i64) -> String {
    format!("+{n}%")
}

/// "35%"
pub fn format_pct(n: i64) -> String {
    format!("{n}%")
}
