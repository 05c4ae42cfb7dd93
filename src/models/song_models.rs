use chrono::NaiveDateTime;
use diesel::Queryable;
use serde::Serialize;

/// A song together with the name of its artist, as every catalog
/// endpoint returns it.
#[derive(Queryable, Serialize, Debug, Clone, PartialEq)]
pub struct SongResponse {
    pub id: i32,
    pub title: String,
    pub artist_id: i32,
    pub artist: String,
    pub duration: String,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub created_at: Option<NaiveDateTime>,
}
