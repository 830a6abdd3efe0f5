use chrono::NaiveDate;
use rand::{Rng, distr::Alphanumeric};

pub const REFERENCE_PREFIX: &str = "HER";
const SUFFIX_LEN: usize = 6;

/// `HER<YYYYMMDD>-<6 uppercase alphanumerics>`. Only meant for correspondence,
/// not as a unique identity.
pub fn generate_order_reference(date: NaiveDate) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect();
    format!("{REFERENCE_PREFIX}{}-{suffix}", date.format("%Y%m%d"))
}

pub fn is_order_reference(value: &str) -> bool {
    let Some(rest) = value.strip_prefix(REFERENCE_PREFIX) else {
        return false;
    };
    let Some((date, suffix)) = rest.split_once('-') else {
        return false;
    };
    date.len() == 8
        && NaiveDate::parse_from_str(date, "%Y%m%d").is_ok()
        && suffix.len() == SUFFIX_LEN
        && suffix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}
