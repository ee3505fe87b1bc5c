use itertools::Itertools;

/// Formats a whole-unit amount with `.` thousands separators, e.g.
/// `1250000` as `1.250.000`.
pub fn format_price(amount: u64) -> String {
    let reversed: Vec<char> = amount.to_string().chars().rev().collect();
    let grouped = reversed
        .chunks(3)
        .map(|group| group.iter().collect::<String>())
        .join(".");

    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1_000), "1.000");
        assert_eq!(format_price(50_000), "50.000");
        assert_eq!(format_price(949_999), "949.999");
        assert_eq!(format_price(1_250_000), "1.250.000");
        assert_eq!(format_price(u64::MAX), "18.446.744.073.709.551.615");
    }
}
