//! CLI command implementations.

pub mod analyze;

pub use analyze::AnalyzeArgs;

use bondcalc_analytics::CouponFrequency;

/// Parses a coupon frequency given as `1` or `2`.
pub fn parse_frequency(s: &str) -> Result<CouponFrequency, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("couponFrequency must be 1 or 2, got {s}"))?;
    CouponFrequency::try_from(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frequency() {
        assert_eq!(parse_frequency("1"), Ok(CouponFrequency::Annual));
        assert_eq!(parse_frequency("2"), Ok(CouponFrequency::SemiAnnual));
        assert!(parse_frequency("4").unwrap_err().contains("got 4"));
        assert!(parse_frequency("semi").unwrap_err().contains("got semi"));
    }
}
