use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::db::unicode_lower;
use crate::errors::{ServiceError, ServiceResult};
use crate::models::artist_models::Artist;
use crate::models::search_models::{SearchResponse, ARTIST_RESULT_LIMIT, SONG_RESULT_LIMIT};
use crate::models::song_models::SongResponse;
use crate::schema::{artists, songs};

type SongColumns = (
    songs::id,
    songs::title,
    songs::artist_id,
    artists::name,
    songs::duration,
    songs::genre,
    songs::release_year,
    songs::created_at,
);

const SONG_COLUMNS: SongColumns = (
    songs::id,
    songs::title,
    songs::artist_id,
    artists::name,
    songs::duration,
    songs::genre,
    songs::release_year,
    songs::created_at,
);

// --------------------- Artists ---------------------
pub fn list_artists(conn: &mut SqliteConnection) -> ServiceResult<Vec<Artist>> {
    let list = artists::table
        .select(Artist::as_select())
        .order((artists::name.asc(), artists::id.asc()))
        .load(conn)?;
    Ok(list)
}

pub fn get_artist(conn: &mut SqliteConnection, artist_id: i32) -> ServiceResult<Artist> {
    artists::table
        .find(artist_id)
        .select(Artist::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ServiceError::not_found("Artist not found"))
}

// --------------------- Songs ---------------------
pub fn list_songs(conn: &mut SqliteConnection) -> ServiceResult<Vec<SongResponse>> {
    let list = songs::table
        .inner_join(artists::table)
        .select(SONG_COLUMNS)
        .order((artists::name.asc(), songs::title.asc(), songs::id.asc()))
        .load::<SongResponse>(conn)?;
    Ok(list)
}

pub fn get_song(conn: &mut SqliteConnection, song_id: i32) -> ServiceResult<SongResponse> {
    songs::table
        .inner_join(artists::table)
        .filter(songs::id.eq(song_id))
        .select(SONG_COLUMNS)
        .first::<SongResponse>(conn)
        .optional()?
        .ok_or_else(|| ServiceError::not_found("Song not found"))
}

/// Unknown artists simply have no songs.
pub fn list_songs_by_artist(conn: &mut SqliteConnection, artist_id: i32) -> ServiceResult<Vec<SongResponse>> {
    let list = songs::table
        .inner_join(artists::table)
        .filter(songs::artist_id.eq(artist_id))
        .select(SONG_COLUMNS)
        .order((songs::title.asc(), songs::id.asc()))
        .load::<SongResponse>(conn)?;
    Ok(list)
}

// --------------------- Search ---------------------
pub fn is_blank_term(term: &str) -> bool {
    term.trim().is_empty()
}

/// Case-insensitive substring search over song titles, artist names of
/// songs, and artist names. A blank term matches nothing.
pub fn search(conn: &mut SqliteConnection, term: &str) -> ServiceResult<SearchResponse> {
    if is_blank_term(term) {
        return Ok(SearchResponse::default());
    }
    let pattern = like_pattern(term);

    let songs = songs::table
        .inner_join(artists::table)
        .filter(
            unicode_lower(songs::title)
                .like(pattern.clone())
                .escape('\\')
                .or(unicode_lower(artists::name).like(pattern.clone()).escape('\\')),
        )
        .select(SONG_COLUMNS)
        .order((songs::title.asc(), songs::id.asc()))
        .limit(SONG_RESULT_LIMIT)
        .load::<SongResponse>(conn)?;

    let artists = artists::table
        .filter(unicode_lower(artists::name).like(pattern).escape('\\'))
        .select(Artist::as_select())
        .order((artists::name.asc(), artists::id.asc()))
        .limit(ARTIST_RESULT_LIMIT)
        .load(conn)?;

    Ok(SearchResponse { songs, artists })
}

/// `%term%`, lower-cased, with LIKE wildcards in the term matched literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
