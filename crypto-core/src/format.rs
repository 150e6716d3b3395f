/// Fixed-point rendering with `,` between thousands, e.g. `1234.5` at two places is `1,234.50`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_two_places() {
        assert_eq!(format_grouped(1234.5, 2), "1,234.50");
        assert_eq!(format_grouped(67_012.346, 2), "67,012.35");
        assert_eq!(format_grouped(0.0421, 2), "0.04");
        assert_eq!(format_grouped(999.999, 2), "1,000.00");
    }

    #[test]
    fn zero_places_drops_the_point() {
        assert_eq!(format_grouped(1_325_000_000_000.0, 0), "1,325,000,000,000");
        assert_eq!(format_grouped(100.0, 0), "100");
        assert_eq!(format_grouped(12.4, 0), "12");
    }

    #[test]
    fn negatives_keep_the_sign_outside_the_groups() {
        assert_eq!(format_grouped(-123456.0, 0), "-123,456");
        assert_eq!(format_grouped(-3.2, 2), "-3.20");
    }
}
