// src/specs/cities.rs
// State directory page: city names → CityRecords with composed page URLs.

use crate::data::CityRecord;

/// How a city display name becomes a URL slug.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlugMode {
    /// Remove only the first whitespace occurrence, then lowercase.
    /// "North Little Rock" → "northlittle rock". This is the historical
    /// rule the target site's URL scheme was reverse-engineered against;
    /// it is kept byte-for-byte and pinned by a unit test.
    #[default]
    FirstGap,
    /// Remove every whitespace character, then lowercase. Opt-in fix for
    /// multi-word city names; changes which URLs get fetched.
    AllWhitespace,
}

/// Derive the URL slug for a city display name.
pub fn city_slug(name: &str, mode: SlugMode) -> String {
    let stripped: String = match mode {
        SlugMode::FirstGap => {
            let mut removed = false;
            name.chars()
                .filter(|c| {
                    if c.is_whitespace() && !removed {
                        removed = true;
                        false
                    } else {
                        true
                    }
                })
                .collect()
        }
        SlugMode::AllWhitespace => name.chars().filter(|c| !c.is_whitespace()).collect(),
    };
    stripped.to_lowercase()
}

/// `{base}/{state_code}/` — a state's own directory page.
pub fn state_url(base_url: &str, state_code: &str) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), state_code)
}

/// `{base}/{state_code}/{city_slug}/` — a city's locations page.
pub fn city_url(base_url: &str, state_code: &str, city_slug: &str) -> String {
    format!(
        "{}/{}/{}/",
        base_url.trim_end_matches('/'),
        state_code,
        city_slug
    )
}

/// Shape one state's cleaned directory-item texts into CityRecords,
/// in page order.
pub fn from_directory_texts(
    base_url: &str,
    state_code: &str,
    texts: &[String],
    mode: SlugMode,
) -> Vec<CityRecord> {
    texts
        .iter()
        .map(|name| {
            let slug = city_slug(name, mode);
            CityRecord {
                city_full_name: name.clone(),
                city_slug: slug.clone(),
                state_code: state_code.to_string(),
                page_url: city_url(base_url, state_code, &slug),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_removes_only_the_first_gap() {
        // Pinned literal: the second space survives.
        assert_eq!(
            city_slug("North Little Rock", SlugMode::FirstGap),
            "northlittle rock"
        );
        assert_eq!(city_slug("Fort Wayne", SlugMode::FirstGap), "fortwayne");
        assert_eq!(city_slug("Indianapolis", SlugMode::FirstGap), "indianapolis");
    }

    #[test]
    fn all_whitespace_mode_strips_every_gap() {
        assert_eq!(
            city_slug("North Little Rock", SlugMode::AllWhitespace),
            "northlittlerock"
        );
    }

    #[test]
    fn city_url_composition() {
        assert_eq!(
            city_url("https://locations.example.com", "ar", "northlittlerock"),
            "https://locations.example.com/ar/northlittlerock/"
        );
        // trailing slash on the base does not double up
        assert_eq!(
            city_url("https://locations.example.com/", "ar", "northlittlerock"),
            "https://locations.example.com/ar/northlittlerock/"
        );
    }

    #[test]
    fn state_url_composition() {
        assert_eq!(
            state_url("https://locations.example.com", "in"),
            "https://locations.example.com/in/"
        );
    }

    #[test]
    fn records_carry_state_code_and_composed_url() {
        let got = from_directory_texts(
            "https://locations.example.com",
            "ar",
            &["North Little Rock".to_string()],
            SlugMode::FirstGap,
        );
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].state_code, "ar");
        assert_eq!(got[0].city_slug, "northlittle rock");
        assert_eq!(
            got[0].page_url,
            "https://locations.example.com/ar/northlittle rock/"
        );
    }
}
