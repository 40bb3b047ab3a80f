pub mod album;
pub mod artist;
