//! Display-only formatting for equipment names, dates and remarks.
//!
//! Nothing here fails: values that do not fit a rule are passed through.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::domain::entities::result_view::{Field, FieldValue, RemarkDisplay};

pub const REMARK_LABEL: &str = "Remark";

// Leading code such as "1.3 ", "4a.1.2 " or "2b. ".
static EQUIP_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[0-9]+[a-zA-Z]?(?:\.[0-9a-zA-Z]+)*\.?\s+").expect("equipment prefix regex")
});
static LEADING_YMD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})[/\-](\d{1,2})[/\-](\d{1,2})").expect("leading date regex")
});
// "2023-05" or "2023": month and day default to 01.
static PARTIAL_ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(?:-(\d{2}))?$").expect("partial date regex"));
static REMARK_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;，/。]+").expect("remark delimiter regex"));

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%a %b %d %Y",
    "%a, %b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Strips the structural code in front of an equipment name.
pub fn clean_equip(name: &str) -> String {
    EQUIP_PREFIX.replace(name, "").into_owned()
}

/// Normalizes a loosely formatted date to `YYYY-MM-DD` where possible.
pub fn date_only(value: &str) -> String {
    let text = value.trim();
    if text.is_empty() {
        return String::new();
    }
    if let Some(date) = parse_calendar_date(text) {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Some(caps) = LEADING_YMD.captures(text) {
        return format!("{}-{:0>2}-{:0>2}", &caps[1], &caps[2], &caps[3]);
    }
    if let Some((head, _)) = text.split_once(' ') {
        return head.to_string();
    }
    text.to_string()
}

fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc).date_naive());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.with_timezone(&Utc).date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|parsed| parsed.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
        .or_else(|| parse_partial_iso(text))
}

fn parse_partial_iso(text: &str) -> Option<NaiveDate> {
    let caps = PARTIAL_ISO.captures(text)?;
    let year = caps[1].parse::<i32>().ok()?;
    let month = caps
        .get(2)
        .map_or(Some(1), |month| month.as_str().parse::<u32>().ok())?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Splits a remark on `;` `，` `/` `。`. `None` for an empty remark.
pub fn remark_format(value: &str) -> Option<RemarkDisplay> {
    let text = value.trim();
    if text.is_empty() {
        return None;
    }
    let parts = REMARK_DELIMITERS
        .split(text)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();
    if parts.is_empty() {
        Some(RemarkDisplay::Plain(text.to_string()))
    } else {
        Some(RemarkDisplay::Block(parts))
    }
}

/// A labelled value, or `None` when the value is blank.
pub fn kv(label: &'static str, value: &str, emphasized: bool) -> Option<Field> {
    if value.trim().is_empty() {
        return None;
    }
    let value = if label == REMARK_LABEL {
        FieldValue::Remark(remark_format(value)?)
    } else {
        FieldValue::Text(value.to_string())
    };
    Some(Field {
        label,
        value,
        emphasized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_equip_strips_structural_prefix() {
        assert_eq!(clean_equip("1.3 Router A"), "Router A");
        assert_eq!(clean_equip("4a.1.2 Switch"), "Switch");
        assert_eq!(clean_equip("2b. Firewall"), "Firewall");
        assert_eq!(clean_equip("  12   Gateway"), "Gateway");
        assert_eq!(clean_equip("NoPrefix"), "NoPrefix");
        assert_eq!(clean_equip(""), "");
    }

    #[test]
    fn clean_equip_requires_whitespace_after_prefix() {
        assert_eq!(clean_equip("3.1Router"), "3.1Router");
        assert_eq!(clean_equip("1.1 "), "");
    }

    #[test]
    fn clean_equip_is_idempotent_on_single_prefix_labels() {
        for name in ["1.3 Router A", "4a.1.2 Switch", "NoPrefix", "", "7 PLC Rack 2"] {
            let once = clean_equip(name);
            assert_eq!(clean_equip(&once), once, "cleaning {name:?} twice changed it");
        }
    }

    #[test]
    fn date_only_normalizes_known_shapes() {
        assert_eq!(date_only("2023-05-01"), "2023-05-01");
        assert_eq!(date_only("2023/5/1"), "2023-05-01");
        assert_eq!(date_only("2023-05-01 extra text"), "2023-05-01");
        assert_eq!(date_only("2023-05-01T08:30:00"), "2023-05-01");
        assert_eq!(date_only("2023-05-01T23:30:00-05:00"), "2023-05-02");
        assert_eq!(date_only("  2023-5-9  "), "2023-05-09");
    }

    #[test]
    fn date_only_parses_month_name_and_us_shapes() {
        assert_eq!(date_only("May 1 2023"), "2023-05-01");
        assert_eq!(date_only("May 1, 2023"), "2023-05-01");
        assert_eq!(date_only("January 15 2024"), "2024-01-15");
        assert_eq!(date_only("Mon May 01 2023"), "2023-05-01");
        assert_eq!(date_only("5/1/2023"), "2023-05-01");
        assert_eq!(date_only("12/31/2022"), "2022-12-31");
        assert_eq!(date_only("2023.05.01"), "2023-05-01");
    }

    #[test]
    fn date_only_fills_partial_iso_dates() {
        assert_eq!(date_only("2023-05"), "2023-05-01");
        assert_eq!(date_only("2023"), "2023-01-01");
        assert_eq!(date_only("2023-13"), "2023-13");
    }

    #[test]
    fn date_only_falls_back_to_text() {
        assert_eq!(date_only(""), "");
        assert_eq!(date_only("   "), "");
        assert_eq!(date_only("pending review"), "pending");
        assert_eq!(date_only("unknown"), "unknown");
    }

    #[test]
    fn remark_format_splits_on_delimiters() {
        assert_eq!(
            remark_format("a;b/c"),
            Some(RemarkDisplay::Block(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ]))
        );
        assert_eq!(
            remark_format(" port 22，reset 。。vendor/ "),
            Some(RemarkDisplay::Block(vec![
                "port 22".to_string(),
                "reset".to_string(),
                "vendor".to_string()
            ]))
        );
    }

    #[test]
    fn remark_format_single_fragment_is_still_a_block() {
        assert_eq!(
            remark_format("single"),
            Some(RemarkDisplay::Block(vec!["single".to_string()]))
        );
    }

    #[test]
    fn remark_format_without_fragments_is_plain() {
        assert_eq!(remark_format(""), None);
        assert_eq!(remark_format("   "), None);
        assert_eq!(
            remark_format(" ;/; "),
            Some(RemarkDisplay::Plain(";/;".to_string()))
        );
    }

    #[test]
    fn kv_skips_blank_values_and_routes_remarks() {
        assert_eq!(kv("Login ID", "   ", true), None);
        assert_eq!(
            kv("Login ID", "admin", true),
            Some(Field {
                label: "Login ID",
                value: FieldValue::Text("admin".to_string()),
                emphasized: true,
            })
        );
        assert_eq!(
            kv(REMARK_LABEL, "a;b", false).map(|field| field.value),
            Some(FieldValue::Remark(RemarkDisplay::Block(vec![
                "a".to_string(),
                "b".to_string()
            ])))
        );
    }
}
