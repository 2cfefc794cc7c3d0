//! City resolution: a free-text city name or an explicit FIAS id is turned
//! into the internal city code the goods search requires.

use crate::client::MagnitClient;
use crate::error::ScraperError;
use crate::types::scalar_to_string;

/// FIAS id of Moscow, captured from app traffic.
pub const FIAS_MOSCOW: &str = "0c5b2444-70a0-4932-980c-b4dc0d3f02b5";

/// FIAS id of Saint Petersburg, captured from app traffic.
pub const FIAS_SPB: &str = "c2deb16a-0330-4f05-821f-1d09c93331e6";

/// Known city-name spellings, checked in declared order.
///
/// The substring fallback takes the first entry whose key occurs in the
/// normalized input, so entry order is part of this table's contract.
const KNOWN_CITIES: &[(&str, &str)] = &[
    ("москва", FIAS_MOSCOW),
    ("moscow", FIAS_MOSCOW),
    ("msk", FIAS_MOSCOW),
    ("санкт-петербург", FIAS_SPB),
    ("санкт петербург", FIAS_SPB),
    ("спб", FIAS_SPB),
    ("питер", FIAS_SPB),
    ("saint petersburg", FIAS_SPB),
    ("st petersburg", FIAS_SPB),
    ("spb", FIAS_SPB),
];

/// A city resolved against the city-info endpoint.
#[derive(Debug, Clone)]
pub struct ResolvedCity {
    /// Internal city code used by the goods search.
    pub city_id: String,
    /// Display name; falls back to the caller's free-text input when the
    /// endpoint omits one.
    pub name: String,
    /// The FIAS id the resolution went through.
    pub fias_id: String,
}

/// Maps a free-text city name to a FIAS id via the static table.
///
/// Exact match on the trimmed, lowercased input first; then the first table
/// entry whose key is a substring of the input (handles forms like
/// `"Москва, РФ"`). `None` when nothing matches.
fn lookup_fias(city: &str) -> Option<&'static str> {
    let needle = city.trim().to_lowercase();

    if let Some((_, fias)) = KNOWN_CITIES.iter().find(|(key, _)| *key == needle) {
        return Some(fias);
    }

    KNOWN_CITIES
        .iter()
        .find(|(key, _)| needle.contains(key))
        .map(|(_, fias)| *fias)
}

/// Resolves the city to search in.
///
/// An explicit `fias_id` wins over a `city` name without warning; a name is
/// looked up in the static table; anything else is a configuration error.
/// Once a FIAS id is in hand, one call to the city-info endpoint yields the
/// internal city code.
///
/// # Errors
///
/// - [`ScraperError::UnresolvedCity`] — no FIAS id could be determined.
/// - [`ScraperError::MissingCityId`] — the endpoint answered without a city
///   code.
/// - Transport and decode errors from [`MagnitClient::city_info`].
pub async fn resolve_city(
    client: &MagnitClient,
    city: Option<&str>,
    fias_id: Option<&str>,
) -> Result<ResolvedCity, ScraperError> {
    let city = city.map(str::trim).filter(|s| !s.is_empty());
    let fias_id = fias_id.map(str::trim).filter(|s| !s.is_empty());

    let fias = match (fias_id, city) {
        (Some(explicit), _) => explicit.to_string(),
        (None, Some(name)) => lookup_fias(name)
            .ok_or_else(|| ScraperError::UnresolvedCity {
                input: name.to_string(),
            })?
            .to_string(),
        (None, None) => {
            return Err(ScraperError::UnresolvedCity {
                input: String::new(),
            })
        }
    };

    let info = client.city_info(&fias).await?;

    let city_id = info
        .city_id
        .as_ref()
        .and_then(scalar_to_string)
        .unwrap_or_default();
    if city_id.is_empty() {
        return Err(ScraperError::MissingCityId { fias_id: fias });
    }

    let name = info
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| city.unwrap_or_default().to_string());

    Ok(ResolvedCity {
        city_id,
        name,
        fias_id: fias,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_moscow() {
        assert_eq!(lookup_fias("москва"), Some(FIAS_MOSCOW));
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        assert_eq!(lookup_fias("Moscow"), Some(FIAS_MOSCOW));
        assert_eq!(lookup_fias("MOSCOW"), Some(FIAS_MOSCOW));
        assert_eq!(lookup_fias("SPB"), Some(FIAS_SPB));
    }

    #[test]
    fn exact_match_trims_whitespace() {
        assert_eq!(lookup_fias("  Санкт-Петербург  "), Some(FIAS_SPB));
    }

    #[test]
    fn substring_match_with_trailing_country() {
        assert_eq!(lookup_fias("Москва, РФ"), Some(FIAS_MOSCOW));
        assert_eq!(lookup_fias("Moscow, Russia"), Some(FIAS_MOSCOW));
    }

    #[test]
    fn substring_match_on_abbreviation() {
        assert_eq!(lookup_fias("г. Питер"), Some(FIAS_SPB));
    }

    #[test]
    fn unknown_city_yields_none() {
        assert!(lookup_fias("Новосибирск").is_none());
        assert!(lookup_fias("").is_none());
    }

    #[test]
    fn substring_ties_resolve_in_declared_order() {
        // Both cities occur in the input; the Moscow entries are declared
        // first, so Moscow wins.
        assert_eq!(lookup_fias("москва или спб"), Some(FIAS_MOSCOW));
    }
}
