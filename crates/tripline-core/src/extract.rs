//! Coordinate extraction from shared map links.
//!
//! Map services put the viewport center into the link path as
//! `@<lat>,<lon>[,<zoom>z]`. Shortened links carry no coordinates and are not
//! resolved here; callers fall back to manual entry.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::Coordinates;

fn at_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"@([-+]?\d+(?:\.\d+)?),([-+]?\d+(?:\.\d+)?)")
            .expect("coordinate pattern is valid")
    })
}

/// Finds the first `@lat,lon` pair in `input`.
///
/// Returns `None` when there is no such pair or when the pair is out of
/// range, so the result is never a partially valid position.
///
/// ```rust
/// use tripline_core::extract::extract_coordinates;
///
/// let link = "https://www.google.com/maps/place/Eiffel/@48.8584,2.2945,17z";
/// let coords = extract_coordinates(link).unwrap();
/// assert_eq!((coords.latitude(), coords.longitude()), (48.8584, 2.2945));
///
/// assert!(extract_coordinates("https://short.link/xyz").is_none());
/// ```
pub fn extract_coordinates(input: &str) -> Option<Coordinates> {
    let captures = at_pattern().captures(input)?;
    let latitude = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let longitude = captures.get(2)?.as_str().parse::<f64>().ok()?;
    Coordinates::new(latitude, longitude).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(input: &str) -> Option<(f64, f64)> {
        extract_coordinates(input).map(|c| (c.latitude, c.longitude))
    }

    #[test]
    fn test_extracts_embedded_pair() {
        assert_eq!(pair("...@48.8584,2.2945..."), Some((48.8584, 2.2945)));
    }

    #[test]
    fn test_extracts_from_full_place_link() {
        let link = "https://www.google.com/maps/place/Louvre+Museum/@48.8606111,2.337644,17z/data=!3m1";
        assert_eq!(pair(link), Some((48.8606111, 2.337644)));
    }

    #[test]
    fn test_signed_and_integer_values() {
        assert_eq!(pair("@-33.8568,151.2153"), Some((-33.8568, 151.2153)));
        assert_eq!(pair("@40,-74"), Some((40.0, -74.0)));
        assert_eq!(pair("@+10.5,-0.25"), Some((10.5, -0.25)));
    }

    #[test]
    fn test_shortened_link_is_not_found() {
        assert_eq!(pair("https://short.link/xyz"), None);
        assert_eq!(pair("https://maps.app.goo.gl/AbCdEf123"), None);
        assert_eq!(pair(""), None);
    }

    #[test]
    fn test_out_of_range_pair_is_not_found() {
        assert_eq!(pair("@123.0,2.0"), None);
        assert_eq!(pair("@12.0,200.0"), None);
    }

    #[test]
    fn test_incomplete_pair_is_not_found() {
        assert_eq!(pair("@48.8584"), None);
        assert_eq!(pair("@48.8584,"), None);
        assert_eq!(pair("@,2.2945"), None);
    }

    #[test]
    fn test_first_pair_wins() {
        assert_eq!(pair("@1.5,2.5/then/@3.5,4.5"), Some((1.5, 2.5)));
    }
}
