//! Postgres repositories. Each holds the SQL for one table and takes the
//! pool explicitly; [`crate::pg_store::PgStore`] adapts them to the store
//! traits.

pub mod album_repo;
pub mod artist_repo;
pub mod track_repo;

pub use album_repo::AlbumRepo;
pub use artist_repo::ArtistRepo;
pub use track_repo::TrackRepo;
