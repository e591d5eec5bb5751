//! Serde model of the catalog search payload
//!
//! The external API makes no guarantees about field presence, so every
//! nested field here is optional or defaulted. A record with nothing in it
//! still deserializes; the projection layer turns the gaps into fallback
//! display values.

use serde::Deserialize;

/// Top-level search response. Only the track section is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<TrackSection>,
}

impl SearchResponse {
    /// The `tracks.items` list, defaulting to empty when the section or the
    /// list is absent.
    pub fn into_track_records(self) -> Vec<TrackRecord> {
        self.tracks.map(|section| section.items).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackSection {
    #[serde(default)]
    pub items: Vec<TrackRecord>,
}

/// One raw search result item. The interesting fields sit under `data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackRecord {
    #[serde(default)]
    pub data: TrackData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "albumOfTrack")]
    pub album_of_track: Option<AlbumRef>,
    #[serde(default)]
    pub artists: Option<ArtistSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "coverArt")]
    pub cover_art: Option<CoverArt>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverArt {
    #[serde(default)]
    pub sources: Vec<CoverSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverSource {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistSection {
    #[serde(default)]
    pub items: Vec<ArtistRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistRecord {
    #[serde(default)]
    pub profile: Option<ArtistProfile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistProfile {
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_fully_populated_response() {
        let raw = r#"{
            "tracks": {
                "items": [
                    {
                        "data": {
                            "name": "Daylight",
                            "albumOfTrack": {
                                "name": "Nectar",
                                "coverArt": {
                                    "sources": [
                                        {"url": "https://img.example/daylight.jpg", "width": 300, "height": 300}
                                    ]
                                }
                            },
                            "artists": {
                                "items": [
                                    {"profile": {"name": "Joji"}},
                                    {"profile": {"name": "Diplo"}}
                                ]
                            }
                        }
                    }
                ]
            }
        }"#;

        let response: SearchResponse = serde_json::from_str(raw).unwrap();
        let records = response.into_track_records();
        assert_eq!(records.len(), 1);

        let data = &records[0].data;
        assert_eq!(data.name.as_deref(), Some("Daylight"));
        let cover = data
            .album_of_track
            .as_ref()
            .and_then(|album| album.cover_art.as_ref())
            .and_then(|art| art.sources.first())
            .and_then(|source| source.url.as_deref());
        assert_eq!(cover, Some("https://img.example/daylight.jpg"));
        let artists: Vec<_> = data
            .artists
            .as_ref()
            .unwrap()
            .items
            .iter()
            .filter_map(|a| a.profile.as_ref().and_then(|p| p.name.as_deref()))
            .collect();
        assert_eq!(artists, ["Joji", "Diplo"]);
    }

    #[test]
    fn missing_tracks_section_yields_no_records() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_track_records().is_empty());
    }

    #[test]
    fn empty_items_list_yields_no_records() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"tracks": {"items": []}}"#).unwrap();
        assert!(response.into_track_records().is_empty());
    }

    #[test]
    fn a_bare_record_still_deserializes() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"tracks": {"items": [{"data": {}}, {}]}}"#).unwrap();
        let records = response.into_track_records();
        assert_eq!(records.len(), 2);
        assert!(records[0].data.name.is_none());
        assert!(records[1].data.album_of_track.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw = r#"{
            "tracks": {"items": [], "totalCount": 0, "pagingInfo": {"limit": 10}},
            "albums": {"items": []},
            "topResults": {}
        }"#;
        let response: SearchResponse = serde_json::from_str(raw).unwrap();
        assert!(response.into_track_records().is_empty());
    }
}
