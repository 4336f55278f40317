//! Integration tests for the playlists vertical slice
//!
//! Tests the playlist store:
//! - Creation defaults and ownership checks
//! - Idempotent membership with updated_at touch rules
//! - Foreign key rejection of unknown tracks
//! - Track and per-user listing order
//! - Cascade delete of membership rows
//! - Viewer-specific like state on playlist tracks


use sqlx::Row;
use test_helpers::{create_test_profile, insert_test_song, TestDb};
use tuneloop_storage::{playlists, songs};

#[tokio::test]
async fn test_create_starts_empty_with_matching_timestamps() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let alice = create_test_profile(pool, "alice").await;

    let playlist = playlists::create(pool, &alice, "Road Trip", "Windows down")
        .await
        .unwrap();
    assert_eq!(playlist.track_count, 0);
    assert_eq!(playlist.created_at, playlist.updated_at);
    assert_eq!(playlist.user_id, alice);

    let detail = playlists::get_by_id(pool, &playlist.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.playlist, playlist);
    assert!(detail.tracks.is_empty());
}

#[tokio::test]
async fn test_is_owner_is_exact() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let alice = create_test_profile(pool, "alice").await;
    let bob = create_test_profile(pool, "bob").await;
    let playlist = playlists::create(pool, &alice, "Mine", "").await.unwrap();

    assert!(playlists::is_owner(pool, &playlist.id, &alice).await.unwrap());
    assert!(!playlists::is_owner(pool, &playlist.id, &bob).await.unwrap());
    assert!(!playlists::is_owner(pool, "no-such-playlist", &alice)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_add_track_is_idempotent_but_still_touches() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let alice = create_test_profile(pool, "alice").await;
    insert_test_song(pool, "s1", "Dreams", "Fleetwood Mac").await;
    let playlist = playlists::create(pool, &alice, "Mine", "").await.unwrap();

    playlists::add_track(pool, &playlist.id, "s1").await.unwrap();
    let after_first = playlists::get_by_id(pool, &playlist.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after_first.playlist.track_count, 1);
    assert_eq!(after_first.tracks.len(), 1);
    assert!(after_first.playlist.updated_at > playlist.updated_at);

    // re-adding the same song changes nothing but still counts as activity
    playlists::add_track(pool, &playlist.id, "s1").await.unwrap();
    let after_second = playlists::get_by_id(pool, &playlist.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after_second.playlist.track_count, 1);
    assert!(after_second.playlist.updated_at > after_first.playlist.updated_at);
}

#[tokio::test]
async fn test_add_track_with_unknown_song_fails_cleanly() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let alice = create_test_profile(pool, "alice").await;
    let playlist = playlists::create(pool, &alice, "Mine", "").await.unwrap();

    assert!(playlists::add_track(pool, &playlist.id, "no-such-song")
        .await
        .is_err());

    // the failed insert must not count as activity
    let detail = playlists::get_by_id(pool, &playlist.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.playlist.track_count, 0);
    assert_eq!(detail.playlist.updated_at, playlist.updated_at);
}

#[tokio::test]
async fn test_remove_track_only_touches_when_a_row_went_away() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let alice = create_test_profile(pool, "alice").await;
    insert_test_song(pool, "s1", "Dreams", "Fleetwood Mac").await;
    let playlist = playlists::create(pool, &alice, "Mine", "").await.unwrap();
    playlists::add_track(pool, &playlist.id, "s1").await.unwrap();

    let before = playlists::get_by_id(pool, &playlist.id, None)
        .await
        .unwrap()
        .unwrap();

    let removed = playlists::remove_track(pool, &playlist.id, "not-a-member")
        .await
        .unwrap();
    assert!(!removed);
    let unchanged = playlists::get_by_id(pool, &playlist.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.playlist.updated_at, before.playlist.updated_at);

    let removed = playlists::remove_track(pool, &playlist.id, "s1").await.unwrap();
    assert!(removed);
    let after = playlists::get_by_id(pool, &playlist.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.playlist.track_count, 0);
    assert!(after.tracks.is_empty());
    assert!(after.playlist.updated_at > before.playlist.updated_at);
}

#[tokio::test]
async fn test_tracks_are_listed_most_recently_added_first() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let alice = create_test_profile(pool, "alice").await;
    insert_test_song(pool, "s1", "Dreams", "Fleetwood Mac").await;
    insert_test_song(pool, "s2", "The Chain", "Fleetwood Mac").await;
    insert_test_song(pool, "s3", "Creep", "Radiohead").await;
    let playlist = playlists::create(pool, &alice, "Mine", "").await.unwrap();

    playlists::add_track(pool, &playlist.id, "s1").await.unwrap();
    playlists::add_track(pool, &playlist.id, "s2").await.unwrap();
    playlists::add_track(pool, &playlist.id, "s3").await.unwrap();

    let detail = playlists::get_by_id(pool, &playlist.id, None)
        .await
        .unwrap()
        .unwrap();
    let ids: Vec<&str> = detail
        .tracks
        .iter()
        .map(|t| t.song.song.id.as_str())
        .collect();
    assert_eq!(ids, ["s3", "s2", "s1"]);
}

#[tokio::test]
async fn test_list_by_user_orders_by_activity() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let alice = create_test_profile(pool, "alice").await;
    let bob = create_test_profile(pool, "bob").await;
    insert_test_song(pool, "s1", "Dreams", "Fleetwood Mac").await;

    let first = playlists::create(pool, &alice, "First", "").await.unwrap();
    playlists::create(pool, &alice, "Second", "").await.unwrap();

    let listed = playlists::list_by_user(pool, &alice).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Second", "First"]);

    // adding a track bumps the older playlist back to the top
    playlists::add_track(pool, &first.id, "s1").await.unwrap();
    let listed = playlists::list_by_user(pool, &alice).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);
    assert_eq!(listed[0].track_count, 1);

    assert!(playlists::list_by_user(pool, &bob).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_by_id_returns_none_for_unknown_playlist() {
    let test_db = TestDb::new().await;

    let detail = playlists::get_by_id(test_db.pool(), "no-such-playlist", None)
        .await
        .unwrap();
    assert!(detail.is_none());
}

#[tokio::test]
async fn test_delete_cascades_membership_rows() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let alice = create_test_profile(pool, "alice").await;
    insert_test_song(pool, "s1", "Dreams", "Fleetwood Mac").await;
    let playlist = playlists::create(pool, &alice, "Mine", "").await.unwrap();
    playlists::add_track(pool, &playlist.id, "s1").await.unwrap();

    assert!(playlists::delete(pool, &playlist.id).await.unwrap());
    assert!(playlists::get_by_id(pool, &playlist.id, None)
        .await
        .unwrap()
        .is_none());

    let row = sqlx::query("SELECT COUNT(*) AS n FROM playlist_tracks")
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(row.get::<i64, _>("n"), 0);

    // second delete finds nothing
    assert!(!playlists::delete(pool, &playlist.id).await.unwrap());
}

#[tokio::test]
async fn test_detail_carries_viewer_like_state() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let alice = create_test_profile(pool, "alice").await;
    let bob = create_test_profile(pool, "bob").await;
    insert_test_song(pool, "s1", "Dreams", "Fleetwood Mac").await;
    let playlist = playlists::create(pool, &alice, "Mine", "").await.unwrap();
    playlists::add_track(pool, &playlist.id, "s1").await.unwrap();

    songs::like(pool, &alice, "s1").await.unwrap();
    songs::like(pool, &bob, "s1").await.unwrap();

    let for_alice = playlists::get_by_id(pool, &playlist.id, Some(&alice))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(for_alice.tracks[0].song.like_count, 2);
    assert!(for_alice.tracks[0].song.is_liked);

    let anonymous = playlists::get_by_id(pool, &playlist.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(anonymous.tracks[0].song.like_count, 2);
    assert!(!anonymous.tracks[0].song.is_liked);
}
