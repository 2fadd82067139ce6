//! Page selection for the story reader.

use crate::models::PageView;

/// Parse a `page` request parameter.
///
/// Reads like a lenient integer parse: leading whitespace is skipped, an
/// optional sign and the leading run of ASCII digits are taken, and anything
/// after them is ignored. `"2.5"` is 2, `"3rd"` is 3. Missing or unparseable
/// input yields 1. Out-of-range magnitudes saturate.
pub fn parse_page_param(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 1;
    };

    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut seen_digit = false;
    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }

    if !seen_digit {
        return 1;
    }
    if negative {
        -value
    } else {
        value
    }
}

/// Select the page to show for a requested page number.
///
/// Requests below 1 show the first page; requests past the end show the last.
/// Returns `None` when `pages` is empty, since there is nothing to show.
pub fn paginate(pages: &[String], requested: i64) -> Option<PageView<'_>> {
    let total = pages.len();
    if total == 0 {
        return None;
    }

    let page = match usize::try_from(requested) {
        Ok(n) if n >= 1 => n.min(total),
        _ => 1,
    };

    Some(PageView {
        requested_page: requested,
        page,
        total_pages: total,
        text: &pages[page - 1],
        has_previous: page > 1,
        has_next: page < total,
        is_first: page == 1,
        is_last: page == total,
    })
}
