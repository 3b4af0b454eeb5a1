//! Display formatting for counts and currency amounts (en-US grouping)

/// Group an integer with thousands separators: 1234567 -> "1,234,567"
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Grouped amount with at most two decimals, trailing zeros dropped:
/// 35600.50 -> "35,600.5", 19850.0 -> "19,850"
pub fn format_amount(val: f64) -> String {
    let cents = (val * 100.0).round() as i64;
    let int_part = cents / 100;
    let frac = (cents % 100).unsigned_abs();
    let mut out = if cents < 0 && int_part == 0 {
        format!("-{}", format_thousands(int_part))
    } else {
        format_thousands(int_part)
    };
    if frac != 0 {
        let digits = format!("{:02}", frac);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// "$" + grouped amount
pub fn format_money(val: f64) -> String {
    format!("${}", format_amount(val))
}

/// Fixed two-decimal price: 199.0 -> "$199.00"
pub fn format_price(val: f64) -> String {
    format!("${:.2}", val)
}

/// Initials of a display name: "Alice Wonderland" -> "AW"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(152), "152");
        assert_eq!(format_thousands(1250), "1,250");
        assert_eq!(format_thousands(249875), "249,875");
        assert_eq!(format_thousands(-1234567), "-1,234,567");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(35600.50), "35,600.5");
        assert_eq!(format_amount(19850.0), "19,850");
        assert_eq!(format_amount(1250.75), "1,250.75");
        assert_eq!(format_amount(550.20), "550.2");
        assert_eq!(format_amount(-0.5), "-0.5");
    }

    #[test]
    fn test_money_and_price() {
        assert_eq!(format_money(47800.75), "$47,800.75");
        assert_eq!(format_price(49.99), "$49.99");
        assert_eq!(format_price(199.0), "$199.00");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alice Wonderland"), "AW");
        assert_eq!(initials("Bob The Builder"), "BTB");
        assert_eq!(initials(""), "");
    }
}
