//! Projection from raw catalog records to display-ready tracks
//!
//! The projection is pure and total: any record, however sparse, yields one
//! `TrackResult`. Missing data degrades to fallback text, never an error.

use super::payload::TrackRecord;

pub const UNKNOWN_TRACK: &str = "Unknown Track";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// A display-ready track tile. Recomputed on every successful search;
/// never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackResult {
    pub name: String,
    /// Artist display names in the order the catalog returned them.
    pub artists: Vec<String>,
    pub album_cover_url: Option<String>,
}

impl TrackResult {
    /// Artist names joined with `", "`, or the fallback when none are known.
    pub fn artist_line(&self) -> String {
        if self.artists.is_empty() {
            UNKNOWN_ARTIST.to_string()
        } else {
            self.artists.join(", ")
        }
    }
}

/// Map one raw record into its display entity.
pub fn project_track(record: &TrackRecord) -> TrackResult {
    let data = &record.data;

    let name = data
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_TRACK)
        .to_string();

    let album_cover_url = data
        .album_of_track
        .as_ref()
        .and_then(|album| album.cover_art.as_ref())
        .and_then(|art| art.sources.first())
        .and_then(|source| source.url.as_deref())
        .filter(|url| !url.is_empty())
        .map(str::to_string);

    let artists = data
        .artists
        .as_ref()
        .map(|section| {
            section
                .items
                .iter()
                .filter_map(|artist| artist.profile.as_ref())
                .filter_map(|profile| profile.name.as_deref())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    TrackResult {
        name,
        artists,
        album_cover_url,
    }
}
