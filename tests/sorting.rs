use muselib::library::{AlbumSortBy, ArtistSortBy, GenreSortBy, PlaylistSortBy, SongSortBy};
use muselib::model::Song;
use muselib::Library;
use std::path::PathBuf;

/// Build a song with the attributes the sorting tests care about
fn song(path: &str, title: &str, artist: Option<&str>, duration_ms: u32) -> Song {
    let path = PathBuf::from(path);
    Song {
        id: Song::id_for(&path),
        path,
        title: title.to_string(),
        artist: artist.map(str::to_string),
        album: None,
        album_artist: None,
        genre: None,
        year: None,
        track_number: None,
        duration_ms,
        date_added: None,
    }
}

/// Song keyed to a specific album; titles do not matter here
fn album_song(path: &str, album: &str, artist: &str) -> Song {
    let mut song = song(path, "Track", Some(artist), 180_000);
    song.album = Some(album.to_string());
    song
}

/// Song keyed to a specific genre; titles do not matter here
fn genre_song(path: &str, genre: &str) -> Song {
    let mut song = song(path, "Track", None, 0);
    song.genre = Some(genre.to_string());
    song
}

/// Library with a fixed set of songs, inserted in the given order
fn library_of(songs: Vec<Song>) -> Library {
    let mut library = Library::new();
    for song in songs {
        library.add_song(song);
    }
    library
}

#[test]
fn test_sorted_ids_are_a_permutation_of_the_input() {
    let library = library_of(vec![
        song("/m/c.mp3", "Gamma", Some("Ann"), 100),
        song("/m/a.mp3", "Alpha", Some("Bob"), 300),
        song("/m/b.mp3", "Beta", Some("Cid"), 200),
    ]);

    let ids: Vec<String> = library.songs().ids().cloned().collect();
    let sorted = library.songs().sort(&ids, SongSortBy::Duration, false);

    let mut expected = ids.clone();
    expected.sort();
    let mut actual = sorted.clone();
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn test_sorts_ascending_and_reverse_flips_the_sequence() {
    let a = song("/m/1.mp3", "Amber", None, 0);
    let b = song("/m/2.mp3", "Blue", None, 0);
    let c = song("/m/3.mp3", "Coral", None, 0);
    let (ia, ib, ic) = (a.id.clone(), b.id.clone(), c.id.clone());
    let library = library_of(vec![a, b, c]);

    // Caller order is b, a, c; ascending by title must give a, b, c.
    let input = vec![ib.clone(), ia.clone(), ic.clone()];
    let sorted = library.songs().sort(&input, SongSortBy::Title, false);
    assert_eq!(sorted, vec![ia.clone(), ib.clone(), ic.clone()]);

    let reversed = library.songs().sort(&input, SongSortBy::Title, true);
    assert_eq!(reversed, vec![ic, ib, ia]);
}

#[test]
fn test_reverse_is_the_exact_reversal_of_the_forward_order() {
    let library = library_of(vec![
        song("/m/1.mp3", "One", Some("Zed"), 50),
        song("/m/2.mp3", "Two", Some("Yan"), 250),
        song("/m/3.mp3", "Three", None, 150),
        song("/m/4.mp3", "Four", Some("Xia"), 150),
    ]);
    let ids: Vec<String> = library.songs().ids().cloned().collect();

    for by in [SongSortBy::Title, SongSortBy::Artist, SongSortBy::Duration] {
        let forward = library.songs().sort(&ids, by, false);
        let mut backward = library.songs().sort(&ids, by, true);
        backward.reverse();
        assert_eq!(forward, backward);
    }
}

#[test]
fn test_empty_input_yields_empty_output() {
    let library = Library::new();
    assert!(library.songs().sort(&[], SongSortBy::Title, false).is_empty());
    assert!(library.songs().sort(&[], SongSortBy::Title, true).is_empty());
}

#[test]
fn test_equal_keys_keep_the_callers_order() {
    let w = song("/m/w.mp3", "W", None, 100);
    let x = song("/m/x.mp3", "X", None, 200);
    let y = song("/m/y.mp3", "Y", None, 200);
    let z = song("/m/z.mp3", "Z", None, 200);
    let (iw, ix, iy, iz) = (w.id.clone(), x.id.clone(), y.id.clone(), z.id.clone());
    let library = library_of(vec![w, x, y, z]);

    // The three tied songs are listed z, x, y and must come out z, x, y.
    let input = vec![iz.clone(), ix.clone(), iy.clone(), iw.clone()];
    let sorted = library.songs().sort(&input, SongSortBy::Duration, false);
    assert_eq!(sorted, vec![iw.clone(), iz.clone(), ix.clone(), iy.clone()]);

    // Reversing flips the whole sequence, ties included.
    let reversed = library.songs().sort(&input, SongSortBy::Duration, true);
    assert_eq!(reversed, vec![iy, ix, iz, iw]);
}

#[test]
fn test_custom_keeps_the_callers_order() {
    let a = song("/m/1.mp3", "Amber", None, 0);
    let b = song("/m/2.mp3", "Blue", None, 0);
    let c = song("/m/3.mp3", "Coral", None, 0);
    let (ia, ib, ic) = (a.id.clone(), b.id.clone(), c.id.clone());
    let library = library_of(vec![a, b, c]);

    let input = vec![ic.clone(), ia.clone(), ib.clone()];
    let kept = library.songs().sort(&input, SongSortBy::Custom, false);
    assert_eq!(kept, input);

    let reversed = library.songs().sort(&input, SongSortBy::Custom, true);
    assert_eq!(reversed, vec![ib, ia, ic]);
}

#[test]
fn test_songs_without_the_attribute_sort_first() {
    let untagged = song("/m/u.mp3", "Untagged", None, 0);
    let tagged_a = song("/m/a.mp3", "A", Some("Alice"), 0);
    let tagged_b = song("/m/b.mp3", "B", Some("Bob"), 0);
    let (iu, ia, ib) = (
        untagged.id.clone(),
        tagged_a.id.clone(),
        tagged_b.id.clone(),
    );
    let library = library_of(vec![untagged, tagged_a, tagged_b]);

    let input = vec![ib.clone(), iu.clone(), ia.clone()];
    let sorted = library.songs().sort(&input, SongSortBy::Artist, false);
    assert_eq!(sorted, vec![iu, ia, ib]);
}

#[test]
fn test_unknown_ids_stay_in_the_result_and_sort_first() {
    let a = song("/m/a.mp3", "Amber", None, 0);
    let b = song("/m/b.mp3", "Blue", None, 0);
    let (ia, ib) = (a.id.clone(), b.id.clone());
    let library = library_of(vec![a, b]);

    let input = vec![ib.clone(), "deadbeef".to_string(), ia.clone()];
    let sorted = library.songs().sort(&input, SongSortBy::Title, false);
    assert_eq!(sorted, vec!["deadbeef".to_string(), ia, ib]);
}

#[test]
fn test_name_sorts_ignore_case() {
    let a = song("/m/1.mp3", "apple", None, 0);
    let b = song("/m/2.mp3", "Banana", None, 0);
    let c = song("/m/3.mp3", "cherry", None, 0);
    let (ia, ib, ic) = (a.id.clone(), b.id.clone(), c.id.clone());
    let library = library_of(vec![a, b, c]);

    let input = vec![ic.clone(), ib.clone(), ia.clone()];
    let sorted = library.songs().sort(&input, SongSortBy::Title, false);
    assert_eq!(sorted, vec![ia, ib, ic]);
}

#[test]
fn test_albums_sort_by_tracks_count() {
    let library = library_of(vec![
        album_song("/m/1.mp3", "Big Album", "Ann"),
        album_song("/m/2.mp3", "Big Album", "Ann"),
        album_song("/m/3.mp3", "Small Album", "Ann"),
    ]);

    let ids: Vec<String> = library.albums().ids().cloned().collect();
    let sorted = library.albums().sort(&ids, AlbumSortBy::TracksCount, false);
    let names: Vec<&str> = sorted
        .iter()
        .filter_map(|id| library.albums().get(id))
        .map(|album| album.name.as_str())
        .collect();
    assert_eq!(names, vec!["Small Album", "Big Album"]);

    let reversed = library.albums().sort(&ids, AlbumSortBy::TracksCount, true);
    let names: Vec<&str> = reversed
        .iter()
        .filter_map(|id| library.albums().get(id))
        .map(|album| album.name.as_str())
        .collect();
    assert_eq!(names, vec!["Big Album", "Small Album"]);
}

#[test]
fn test_artists_sort_by_name_ignores_case_and_keeps_unknown_names_first() {
    let library = library_of(vec![
        album_song("/m/1.mp3", "Autobahn", "beta"),
        album_song("/m/2.mp3", "Discovery", "Alpha"),
    ]);

    let input = vec![
        "beta".to_string(),
        "Alpha".to_string(),
        "ghost".to_string(),
    ];
    let sorted = library.artists().sort(&input, ArtistSortBy::ArtistName, false);
    assert_eq!(sorted, ["ghost", "Alpha", "beta"]);

    let reversed = library.artists().sort(&input, ArtistSortBy::ArtistName, true);
    assert_eq!(reversed, ["beta", "Alpha", "ghost"]);
}

#[test]
fn test_artists_sort_by_album_and_track_counts() {
    let library = library_of(vec![
        album_song("/m/1.mp3", "Autobahn", "Kraftwerk"),
        album_song("/m/2.mp3", "Trans-Europe Express", "Kraftwerk"),
        album_song("/m/3.mp3", "Discovery", "Daft Punk"),
        album_song("/m/4.mp3", "Discovery", "Daft Punk"),
        album_song("/m/5.mp3", "Discovery", "Daft Punk"),
    ]);

    // Kraftwerk: 2 albums, 2 tracks; Daft Punk: 1 album, 3 tracks.
    let names = vec!["Kraftwerk".to_string(), "Daft Punk".to_string()];

    let by_albums = library.artists().sort(&names, ArtistSortBy::AlbumsCount, false);
    assert_eq!(by_albums, ["Daft Punk", "Kraftwerk"]);

    let by_tracks = library.artists().sort(&names, ArtistSortBy::TracksCount, false);
    assert_eq!(by_tracks, ["Kraftwerk", "Daft Punk"]);

    let reversed = library.artists().sort(&names, ArtistSortBy::TracksCount, true);
    assert_eq!(reversed, ["Daft Punk", "Kraftwerk"]);
}

#[test]
fn test_genres_sort_by_name_and_tracks_count() {
    let library = library_of(vec![
        genre_song("/m/1.mp3", "ambient"),
        genre_song("/m/2.mp3", "ambient"),
        genre_song("/m/3.mp3", "Techno"),
    ]);

    let names = vec![
        "Techno".to_string(),
        "ambient".to_string(),
        "Chillout".to_string(),
    ];

    // Unknown names sort first; known ones compare case-insensitively.
    let by_name = library.genres().sort(&names, GenreSortBy::GenreName, false);
    assert_eq!(by_name, ["Chillout", "ambient", "Techno"]);

    let by_count = library.genres().sort(&names, GenreSortBy::TracksCount, false);
    assert_eq!(by_count, ["Chillout", "Techno", "ambient"]);

    let reversed = library.genres().sort(&names, GenreSortBy::TracksCount, true);
    assert_eq!(reversed, ["ambient", "Techno", "Chillout"]);
}

#[test]
fn test_playlists_sort_by_title_and_tracks_count() {
    let mut library = Library::new();
    library
        .playlists_mut()
        .create("Morning".to_string(), vec![PathBuf::from("/m/a.mp3")]);
    library.playlists_mut().create("Evening".to_string(), vec![]);

    let ids: Vec<String> = library.playlists().ids().cloned().collect();

    let by_title = library.playlists().sort(&ids, PlaylistSortBy::Title, false);
    let titles: Vec<&str> = by_title
        .iter()
        .filter_map(|id| library.playlists().get(id))
        .map(|playlist| playlist.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Evening", "Morning"]);

    let by_count = library
        .playlists()
        .sort(&ids, PlaylistSortBy::TracksCount, false);
    let titles: Vec<&str> = by_count
        .iter()
        .filter_map(|id| library.playlists().get(id))
        .map(|playlist| playlist.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Evening", "Morning"]);
}
