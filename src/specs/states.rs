// src/specs/states.rs
// Root directory page: state names → StateRecords.

use std::collections::HashSet;

use tracing::warn;

use crate::config::consts::EXCLUDED_STATE;
use crate::data::StateRecord;

/// USPS abbreviations for the 50 states plus the District of Columbia.
/// Deliberately no territories; see `EXCLUDED_STATE`.
const STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// Look up the two-letter code for a state's display name.
pub fn state_code(long_name: &str) -> Option<&'static str> {
    STATE_ABBREVIATIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(long_name))
        .map(|(_, code)| *code)
}

/// Shape cleaned directory-item texts into StateRecords.
///
/// - codes are lowercased for use as URL segments
/// - `EXCLUDED_STATE` is dropped silently (known, deliberate gap)
/// - any other unconvertible name is dropped with a warning; only that
///   record is lost, never the run
/// - duplicates by long name keep the first occurrence
pub fn from_directory_texts(texts: &[String]) -> Vec<StateRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for name in texts {
        if name == EXCLUDED_STATE {
            continue;
        }
        if !seen.insert(name.clone()) {
            continue;
        }
        match state_code(name) {
            Some(code) => out.push(StateRecord {
                long_name: name.clone(),
                short_code: code.to_ascii_lowercase(),
            }),
            None => warn!("no abbreviation for state name {:?}, dropping", name),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn codes_are_lowercased_url_segments() {
        let got = from_directory_texts(&texts(&["Indiana", "North Dakota"]));
        assert_eq!(got[0].short_code, "in");
        assert_eq!(got[1].short_code, "nd");
    }

    #[test]
    fn excluded_territory_is_dropped_and_nothing_else() {
        let got = from_directory_texts(&texts(&["Arkansas", "Puerto Rico", "Ohio"]));
        let names: Vec<&str> = got.iter().map(|r| r.long_name.as_str()).collect();
        assert_eq!(names, vec!["Arkansas", "Ohio"]);
    }

    #[test]
    fn duplicate_long_names_keep_first_occurrence_only() {
        let got = from_directory_texts(&texts(&["Ohio", "Texas", "Ohio"]));
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].long_name, "Ohio");
        assert_eq!(got[1].long_name, "Texas");
    }

    #[test]
    fn unknown_names_are_record_fatal_only() {
        let got = from_directory_texts(&texts(&["Atlantis", "Maine"]));
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].short_code, "me");
    }
}
