//! `<H>h<M>m<S>s` duration parser.

use crate::error::{RankError, RankResult};
use regex::Regex;
use std::sync::OnceLock;

fn duration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)h(\d+)m(\d+)s$").expect("valid duration regex"))
}

/// Parses a `<H>h<M>m<S>s` duration into minutes.
///
/// All three components must be present. Seconds contribute an exact
/// fractional minute: `"1h1m1s"` is `61 + 1/60`.
///
/// # Errors
///
/// Returns [`RankError::MalformedDuration`] if the text does not match the
/// pattern exactly, or if a component does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use u_cinerank::runtime::parse_runtime;
///
/// assert_eq!(parse_runtime("1h45m0s").unwrap(), 105.0);
/// assert!(parse_runtime("105 min").is_err());
/// ```
pub fn parse_runtime(text: &str) -> RankResult<f64> {
    let malformed = || RankError::MalformedDuration {
        input: text.to_string(),
    };

    let caps = duration_pattern().captures(text).ok_or_else(malformed)?;
    let component = |i: usize| -> RankResult<f64> {
        caps[i]
            .parse::<u64>()
            .map(|v| v as f64)
            .map_err(|_| malformed())
    };

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;

    Ok(60.0 * hours + minutes + seconds / 60.0)
}
