//! Fixed catalog inserted into an empty store at startup.
//!
//! The first album in [`ALBUMS`] owns every entry of [`FIRST_ALBUM_TRACKS`].

/// A seed album: `(title, year)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedAlbum {
    pub title: &'static str,
    pub year: i32,
}

/// A seed track on the first seeded album.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedTrack {
    pub title: &'static str,
    pub track_number: i32,
}

pub const ALBUMS: [SeedAlbum; 3] = [
    SeedAlbum {
        title: "Blonde",
        year: 2016,
    },
    SeedAlbum {
        title: "Blonde on Blonde",
        year: 1966,
    },
    SeedAlbum {
        title: "Harvest Moon",
        year: 1992,
    },
];

pub const FIRST_ALBUM_TRACKS: [SeedTrack; 9] = [
    SeedTrack {
        title: "Nikes",
        track_number: 1,
    },
    SeedTrack {
        title: "Ivy",
        track_number: 2,
    },
    SeedTrack {
        title: "Pink + White",
        track_number: 3,
    },
    SeedTrack {
        title: "Be Yourself",
        track_number: 4,
    },
    SeedTrack {
        title: "Solo",
        track_number: 5,
    },
    SeedTrack {
        title: "Skyline To",
        track_number: 6,
    },
    SeedTrack {
        title: "Self Control",
        track_number: 7,
    },
    SeedTrack {
        title: "Good Guy",
        track_number: 8,
    },
    SeedTrack {
        title: "Solo (Reprise)",
        track_number: 9,
    },
];

pub const ARTISTS: [&str; 3] = ["Frank Ocean", "Bob Dylan", "Neil Young"];
