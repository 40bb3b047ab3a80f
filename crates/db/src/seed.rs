//! Seeds an empty store with the fixed catalog from
//! [`tracklist_core::seed`].

use tracklist_core::seed::{ALBUMS, ARTISTS, FIRST_ALBUM_TRACKS};

use crate::models::album::CreateAlbum;
use crate::models::artist::CreateArtist;
use crate::models::track::CreateTrack;
use crate::store::{Store, StoreResult};

/// Insert the seed catalog unless a live album already exists.
///
/// Returns `true` when rows were inserted. A partially seeded store (some
/// albums present) is left as is.
pub async fn seed_catalog(store: &dyn Store) -> StoreResult<bool> {
    if store.any_albums().await? {
        tracing::debug!("Albums present, skipping seed");
        return Ok(false);
    }

    let mut album_ids = Vec::with_capacity(ALBUMS.len());
    for seed in ALBUMS {
        let album = store
            .create_album(&CreateAlbum {
                title: seed.title.to_string(),
                year: seed.year,
            })
            .await?;
        album_ids.push(album.id);
    }

    if let Some(&album_id) = album_ids.first() {
        for seed in FIRST_ALBUM_TRACKS {
            store
                .create_track(&CreateTrack {
                    album_id,
                    title: seed.title.to_string(),
                    track_number: seed.track_number,
                })
                .await?;
        }
    }

    for name in ARTISTS {
        store
            .create_artist(&CreateArtist {
                name: name.to_string(),
            })
            .await?;
    }

    tracing::info!(
        albums = ALBUMS.len(),
        tracks = FIRST_ALBUM_TRACKS.len(),
        artists = ARTISTS.len(),
        "Seeded catalog"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::store::{AlbumStore, ArtistStore, TrackStore};

    #[tokio::test]
    async fn seeds_empty_store() {
        let store = MemoryStore::new();
        assert!(seed_catalog(&store).await.unwrap());

        let albums = store.list_albums().await.unwrap();
        assert_eq!(albums.len(), 3);
        assert_eq!(albums[0].title, "Blonde");
        assert_eq!(albums[0].year, 2016);

        let tracks = store.list_album_tracks(albums[0].id).await.unwrap();
        assert_eq!(tracks.len(), 9);
        assert_eq!(tracks[0].title, "Nikes");
        assert_eq!(tracks[8].title, "Solo (Reprise)");
        for album in &albums[1..] {
            assert!(store.list_album_tracks(album.id).await.unwrap().is_empty());
        }

        assert_eq!(store.list_artists().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn reseeding_leaves_counts_unchanged() {
        let store = MemoryStore::new();
        seed_catalog(&store).await.unwrap();
        assert!(!seed_catalog(&store).await.unwrap());

        let albums = store.list_albums().await.unwrap();
        assert_eq!(albums.len(), 3);
        assert_eq!(store.list_album_tracks(albums[0].id).await.unwrap().len(), 9);
        assert_eq!(store.list_artists().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn existing_album_suppresses_seed() {
        let store = MemoryStore::new();
        store
            .create_album(&CreateAlbum {
                title: "OK Computer".to_string(),
                year: 1997,
            })
            .await
            .unwrap();

        assert!(!seed_catalog(&store).await.unwrap());
        assert_eq!(store.list_albums().await.unwrap().len(), 1);
        assert!(store.list_artists().await.unwrap().is_empty());
    }
}
