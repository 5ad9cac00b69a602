//! Compile-time build information, generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_short_hash_or_unknown() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_date_is_iso_day() {
        assert!(BUILD_DATE == "unknown" || chrono::NaiveDate::parse_from_str(BUILD_DATE, "%Y-%m-%d").is_ok());
    }
}
