//! Popup markup for result and no-result markers.

use epoch_core::{Article, GeoPoint};

pub const NO_EVENTS_HEADING: &str = "No Historical Events Found";

/// Popup for a click whose query returned no articles.
#[must_use]
pub fn no_results_popup(point: GeoPoint) -> String {
    format!(
        concat!(
            "<div class=\"historical-popup\">",
            "<h3>{heading}</h3>",
            "<p>No notable historical events found in this area.</p>",
            "<p>Coordinates: {lat}, {lng}</p>",
            "</div>"
        ),
        heading = NO_EVENTS_HEADING,
        lat = to_fixed(point.lat, 4),
        lng = to_fixed(point.lng, 4),
    )
}

/// Popup for one article: title, extract, distance from the click, link.
#[must_use]
pub fn article_popup(article: &Article) -> String {
    format!(
        concat!(
            "<div class=\"historical-popup\">",
            "<h3>{title}</h3>",
            "<p>{extract}</p>",
            "<p><strong>Distance:</strong> {km}km from clicked point</p>",
            "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">Read more on Wikipedia</a>",
            "</div>"
        ),
        title = escape_html(&article.title),
        extract = escape_html(&article.extract),
        km = to_fixed(article.distance_km(), 1),
        url = escape_html(&article.url),
    )
}

/// Fixed-point formatting of the exact binary value, like JavaScript's
/// `Number.prototype.toFixed`.
///
/// `0.35` is stored as `0.34999...` and renders as `0.3`. Only values that
/// sit exactly halfway between two outputs (`0.25`, `2.5`) are rounded away
/// from zero.
#[must_use]
pub fn to_fixed(value: f64, decimals: u8) -> String {
    let precision = usize::from(decimals);
    if !is_exact_tie(value, decimals) {
        return format!("{value:.precision$}");
    }

    // The expansion of an exact tie ends in a 5 at `precision + 1` digits.
    let mut digits = format!("{:.*}", precision + 1, value.abs());
    digits.pop();
    if digits.ends_with('.') {
        digits.pop();
    }
    let rounded = increment_last_digit(&digits);
    if value.is_sign_negative() {
        format!("-{rounded}")
    } else {
        rounded
    }
}

/// `|value| * 10^decimals` has a fractional part of exactly one half.
///
/// That holds iff `|value| * 2^(decimals + 1)` is an odd integer; scaling by
/// a power of two is exact.
#[allow(clippy::float_cmp)]
fn is_exact_tie(value: f64, decimals: u8) -> bool {
    if !value.is_finite() {
        return false;
    }
    let scaled = value.abs() * 2_f64.powi(i32::from(decimals) + 1);
    scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

/// Add one unit in the last place of a plain decimal string, carrying left.
fn increment_last_digit(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        match *byte {
            b'.' => {}
            b'9' => *byte = b'0',
            digit => {
                *byte = digit + 1;
                carry = false;
                break;
            }
        }
    }
    let rounded = String::from_utf8_lossy(&bytes).into_owned();
    if carry {
        format!("1{rounded}")
    } else {
        rounded
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn article(distance: f64) -> Article {
        Article {
            title: "Battle of Marathon".into(),
            extract: "Fought in 490 BC.".into(),
            url: "https://en.wikipedia.org/wiki?curid=4316".into(),
            lat: 38.118,
            lon: 23.978,
            distance,
            pageid: Some(4316),
            years_mentioned: vec![-490],
            views: None,
        }
    }

    #[rstest]
    #[case(1.5, 1, "1.5")]
    #[case(500.0, 1, "500.0")]
    #[case(0.25, 1, "0.3")]
    #[case(-0.25, 1, "-0.3")]
    #[case(2.5, 0, "3")]
    #[case(9.5, 0, "10")]
    #[case(9.75, 1, "9.8")]
    #[case(0.35, 1, "0.3")]
    #[case(1.005, 2, "1.00")]
    #[case(10.000_05, 4, "10.0000")]
    #[case(0.5, 4, "0.5000")]
    #[case(0.049, 1, "0.0")]
    #[case(10.0, 4, "10.0000")]
    #[case(-33.868_82, 4, "-33.8688")]
    fn fixed_point_rounding(#[case] value: f64, #[case] decimals: u8, #[case] expected: &str) {
        assert_eq!(to_fixed(value, decimals), expected);
    }

    #[test]
    fn no_results_popup_shows_rounded_coordinates() {
        let html = no_results_popup(GeoPoint::new(10.0, 20.0));
        assert!(html.contains("No Historical Events Found"));
        assert!(html.contains("Coordinates: 10.0000, 20.0000"));
    }

    #[test]
    fn article_popup_shows_distance_in_km() {
        let html = article_popup(&article(1500.0));
        assert!(html.contains("<h3>Battle of Marathon</h3>"));
        assert!(html.contains("Fought in 490 BC."));
        assert!(html.contains("<strong>Distance:</strong> 1.5km from clicked point"));
        assert!(html.contains(r#"href="https://en.wikipedia.org/wiki?curid=4316""#));
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer""#));
    }

    #[test]
    fn article_popup_distance_uses_stored_binary_value() {
        let html = article_popup(&article(350.0));
        assert!(html.contains("<strong>Distance:</strong> 0.3km from clicked point"));
    }

    #[test]
    fn no_results_popup_does_not_round_up_near_halves() {
        let html = no_results_popup(GeoPoint::new(10.000_05, -0.000_05));
        assert!(html.contains("Coordinates: 10.0000, -0.0001"));
    }

    #[test]
    fn article_text_is_escaped() {
        let mut a = article(0.0);
        a.title = "<script>alert(1)</script>".into();
        a.extract = "Tom & Jerry".into();
        let html = article_popup(&a);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(!html.contains("<script>"));
    }
}
