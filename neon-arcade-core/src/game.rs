//! The page data model.
//!
//! All types in this module mirror the JSON supplied by the host page. Field
//! names on the wire are camelCase.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

/// A game in the catalog, one page per entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// URL slug identifying the game page.
    pub id: String,
    pub title: String,
    pub description: String,
    /// URL of the cover image.
    pub image: String,
    /// Unstructured display string, e.g. "Available on PC and mobile".
    pub platforms: String,
    #[serde(default)]
    pub play_links: Vec<PlayLink>,
    #[serde(default)]
    pub tournaments: Vec<RawTournament>,
}

/// An external "play now" link on a game page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayLink {
    pub label: String,
    pub href: String,
    /// Icon class rendered inside the button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A tournament as supplied by the page data source.
///
/// Timestamps are unparsed strings; [`RawTournament::parse`] converts them
/// into a [`Tournament`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTournament {
    pub name: String,
    pub prize: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl RawTournament {
    /// Parses the timestamp strings into a [`Tournament`].
    ///
    /// `start_time <= end_time` is assumed but not validated; inverted
    /// bounds pass through uncorrected.
    pub fn parse(&self) -> crate::Result<Tournament> {
        let start_time = parse_instant("startTime", &self.start_time)?;
        let end_time = parse_instant("endTime", &self.end_time)?;

        Ok(Tournament {
            name: self.name.clone(),
            prize: self.prize.clone(),
            start_time,
            end_time,
            link: self.link.clone(),
        })
    }
}

/// A tournament with parsed timestamps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tournament {
    pub name: String,
    pub prize: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub link: Option<String>,
}

/// Parses a timestamp string into an instant.
///
/// The page data source emits ISO-8601 timestamps in three shapes: full
/// RFC 3339, a naive datetime without offset (taken as UTC) and a plain date
/// (taken as midnight UTC).
fn parse_instant(field: &'static str, value: &str) -> crate::Result<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc));
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&datetime));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    Err(Error::InvalidTimestamp {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_test::{assert_tokens, Token};

    use super::{parse_instant, RawTournament};
    use crate::Error;

    fn raw(start: &str, end: &str) -> RawTournament {
        RawTournament {
            name: String::from("Cup A"),
            prize: String::from("$1,000"),
            start_time: start.to_owned(),
            end_time: end.to_owned(),
            link: None,
        }
    }

    #[test]
    fn test_parse_instant_rfc3339() {
        let instant = parse_instant("startTime", "2025-07-01T18:30:00Z").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2025, 7, 1, 18, 30, 0).unwrap());

        let instant = parse_instant("startTime", "2025-07-01T18:30:00+02:00").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2025, 7, 1, 16, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_naive() {
        let instant = parse_instant("startTime", "2025-07-01T18:30:00").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2025, 7, 1, 18, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_date_only() {
        let instant = parse_instant("startTime", "2020-01-01").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_malformed() {
        let err = parse_instant("endTime", "next tuesday").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidTimestamp {
                field: "endTime",
                value: String::from("next tuesday"),
            }
        );
    }

    #[test]
    fn test_parse_tournament() {
        let tournament = raw("2020-01-01", "2020-01-02").parse().unwrap();

        assert_eq!(tournament.name, "Cup A");
        assert_eq!(tournament.prize, "$1,000");
        assert_eq!(
            tournament.start_time,
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            tournament.end_time,
            Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap()
        );
        assert_eq!(tournament.link, None);
    }

    #[test]
    fn test_parse_tournament_malformed_start() {
        let err = raw("not a date", "2020-01-02").parse().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidTimestamp {
                field: "startTime",
                value: String::from("not a date"),
            }
        );
    }

    #[test]
    fn test_raw_tournament_wire_names() {
        let mut raw = raw("2025-07-01T00:00:00Z", "2025-07-02T00:00:00Z");
        raw.link = Some(String::from("https://example.com/cup-a"));

        assert_tokens(
            &raw,
            &[
                Token::Struct {
                    name: "RawTournament",
                    len: 5,
                },
                Token::Str("name"),
                Token::Str("Cup A"),
                Token::Str("prize"),
                Token::Str("$1,000"),
                Token::Str("startTime"),
                Token::Str("2025-07-01T00:00:00Z"),
                Token::Str("endTime"),
                Token::Str("2025-07-02T00:00:00Z"),
                Token::Str("link"),
                Token::Some,
                Token::Str("https://example.com/cup-a"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_game_from_json() {
        let game: super::Game = serde_json::from_str(
            r#"{
                "id": "starfall",
                "title": "Starfall",
                "description": "A fast arena shooter.",
                "image": "/assets/games/starfall.webp",
                "platforms": "Available on PC and mobile",
                "playLinks": [
                    { "label": "Play on Steam", "href": "https://example.com/steam" }
                ],
                "tournaments": [
                    {
                        "name": "Weekly Cup",
                        "prize": "500 USDC",
                        "startTime": "2025-07-01T18:00:00Z",
                        "endTime": "2025-07-01T22:00:00Z"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(game.id, "starfall");
        assert_eq!(game.play_links.len(), 1);
        assert_eq!(game.play_links[0].icon, None);
        assert_eq!(game.tournaments.len(), 1);
        assert_eq!(game.tournaments[0].start_time, "2025-07-01T18:00:00Z");
    }

    #[test]
    fn test_game_defaults() {
        let game: super::Game = serde_json::from_str(
            r#"{
                "id": "starfall",
                "title": "Starfall",
                "description": "",
                "image": "",
                "platforms": ""
            }"#,
        )
        .unwrap();

        assert!(game.play_links.is_empty());
        assert!(game.tournaments.is_empty());
    }
}
