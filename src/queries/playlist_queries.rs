use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::SqliteConnection;

use crate::errors::{ServiceError, ServiceResult};
use crate::models::playlist_models::{NewPlaylist, NewPlaylistSong, PlaylistResponse, PlaylistSongResponse};
use crate::schema::{playlist_songs, playlists, songs, users};

// --------------------- Playlists ---------------------
pub fn list_playlists(conn: &mut SqliteConnection, user_id: i32) -> ServiceResult<Vec<PlaylistResponse>> {
    let sql = r#"
        SELECT
            p.id,
            p.user_id,
            p.name,
            p.description,
            p.color_hex,
            COUNT(ps.id) AS count,
            p.created_at
        FROM playlists p
        LEFT JOIN playlist_songs ps ON ps.playlist_id = p.id
        WHERE p.user_id = ?
        GROUP BY p.id
        ORDER BY p.created_at DESC, p.id DESC
    "#;

    let list = diesel::sql_query(sql)
        .bind::<Integer, _>(user_id)
        .load::<PlaylistResponse>(conn)?;
    Ok(list)
}

pub fn create_playlist(conn: &mut SqliteConnection, new_playlist: NewPlaylist) -> ServiceResult<i32> {
    let user_exists: bool = diesel::select(exists(users::table.find(new_playlist.user_id))).get_result(conn)?;
    if !user_exists {
        return Err(ServiceError::not_found("User not found"));
    }

    let new_id = diesel::insert_into(playlists::table)
        .values(&new_playlist)
        .returning(playlists::id)
        .get_result::<i32>(conn)?;

    log::debug!("user {} created playlist {new_id}", new_playlist.user_id);
    Ok(new_id)
}

/// Removes the playlist and every song link it owns.
pub fn delete_playlist(conn: &mut SqliteConnection, playlist_id: i32) -> ServiceResult<()> {
    conn.transaction::<_, ServiceError, _>(|conn| {
        diesel::delete(playlist_songs::table.filter(playlist_songs::playlist_id.eq(playlist_id))).execute(conn)?;
        match diesel::delete(playlists::table.find(playlist_id)).execute(conn)? {
            0 => Err(ServiceError::not_found("Playlist not found")),
            _ => Ok(()),
        }
    })?;
    log::debug!("deleted playlist {playlist_id}");
    Ok(())
}

// --------------------- Songs in Playlist ---------------------

/// Ordered by `track_order`, ties broken by insertion (link id).
pub fn get_playlist_songs(conn: &mut SqliteConnection, playlist_id: i32) -> ServiceResult<Vec<PlaylistSongResponse>> {
    let sql = r#"
        SELECT
            ps.id AS playlist_song_id,
            s.id AS song_id,
            s.title,
            a.id AS artist_id,
            a.name AS artist,
            s.duration,
            s.genre,
            ps.track_order,
            ps.added_at
        FROM playlist_songs ps
        JOIN songs s ON ps.song_id = s.id
        JOIN artists a ON s.artist_id = a.id
        WHERE ps.playlist_id = ?
        ORDER BY ps.track_order ASC, ps.id ASC
    "#;

    let list = diesel::sql_query(sql)
        .bind::<Integer, _>(playlist_id)
        .load::<PlaylistSongResponse>(conn)?;
    Ok(list)
}

/// Returns the id of the new link row. The same song may be linked more
/// than once.
pub fn add_song_to_playlist(conn: &mut SqliteConnection, new_song: NewPlaylistSong) -> ServiceResult<i32> {
    // Existence checks and the insert hold the same write lock.
    let link_id = conn.immediate_transaction::<_, ServiceError, _>(|conn| {
        let playlist_exists: bool =
            diesel::select(exists(playlists::table.find(new_song.playlist_id))).get_result(conn)?;
        if !playlist_exists {
            return Err(ServiceError::not_found("Playlist not found"));
        }
        let song_exists: bool = diesel::select(exists(songs::table.find(new_song.song_id))).get_result(conn)?;
        if !song_exists {
            return Err(ServiceError::not_found("Song not found"));
        }

        let link_id = diesel::insert_into(playlist_songs::table)
            .values(&new_song)
            .returning(playlist_songs::id)
            .get_result::<i32>(conn)?;
        Ok(link_id)
    })?;

    log::debug!(
        "added song {} to playlist {} at {}",
        new_song.song_id,
        new_song.playlist_id,
        new_song.track_order
    );
    Ok(link_id)
}

pub fn remove_song_from_playlist(conn: &mut SqliteConnection, playlist_id: i32, playlist_song_id: i32) -> ServiceResult<()> {
    let removed = diesel::delete(
        playlist_songs::table
            .filter(playlist_songs::id.eq(playlist_song_id))
            .filter(playlist_songs::playlist_id.eq(playlist_id)),
    )
    .execute(conn)?;

    match removed {
        0 => Err(ServiceError::not_found("Song not found in playlist")),
        _ => Ok(()),
    }
}
