use std::ops::Index;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Parses the calendar part of an ISO-8601 date. Accepts `2021-06-20`,
/// `2021-06-20 10:42:32` and `2021-06-20T10:42:32+02:00`; the time part
/// is not needed for ordering posts and is ignored. Months and days take
/// two ASCII digits.
pub fn parse_post_date(buf: &str) -> Result<NaiveDate, String> {
    lazy_static! {
        static ref DATE_REGEX: Regex = Regex::new(
            r"^([0-9]{4})-([0-9]{2})-([0-9]{2})(?:[T ][0-9]{2}:[0-9]{2}(?::[0-9]{2}(?:\.[0-9]+)?)?(?:Z|[+-][0-9]{2}:?[0-9]{2})?)?$"
        ).unwrap();
    }

    let buf = buf.trim();
    let Some(caps) = DATE_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date {}", buf));
    };

    let y: i32 = to_int(caps.index(1), buf)?;
    let m: u32 = to_int(caps.index(2), buf)?;
    let d: u32 = to_int(caps.index(3), buf)?;

    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| format!("Date out of range {}", buf))
}

/// Splits a free-text query into lowercase tokens, dropping repeats.
pub fn tokenize(query: &str) -> Vec<String> {
    let mut tokens: Vec<String> = vec![];
    for token in query.split_whitespace().map(|t| t.to_lowercase()) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}
