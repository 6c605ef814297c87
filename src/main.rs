use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use muselib::library::{AlbumSortBy, ArtistSortBy, GenreSortBy, PlaylistSortBy, SongSortBy};
use muselib::scanner::parse_local_playlist;
use muselib::{Library, PlaylistsFile, Scanner, Settings};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "muselib")]
#[command(about = "Index a music directory and browse it sorted", long_about = None)]
struct Args {
    /// Music directory to index
    #[arg(short = 'm', long, default_value = "~/Music")]
    music_dir: String,

    /// Data directory for playlists.json and settings.json
    #[arg(short = 'd', long, default_value = "~/.local/share/muselib")]
    data_dir: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan the music directory and print summary counts
    Scan,

    /// List songs
    Songs {
        /// Sort strategy (defaults to the last used one)
        #[arg(long)]
        sort_by: Option<SongSortBy>,

        /// Reverse the listing (defaults to the last used direction)
        #[arg(long)]
        reverse: Option<bool>,
    },

    /// List albums
    Albums {
        /// Sort strategy (defaults to the last used one)
        #[arg(long)]
        sort_by: Option<AlbumSortBy>,

        /// Reverse the listing (defaults to the last used direction)
        #[arg(long)]
        reverse: Option<bool>,
    },

    /// List artists
    Artists {
        /// Sort strategy (defaults to the last used one)
        #[arg(long)]
        sort_by: Option<ArtistSortBy>,

        /// Reverse the listing (defaults to the last used direction)
        #[arg(long)]
        reverse: Option<bool>,
    },

    /// List genres
    Genres {
        /// Sort strategy (defaults to the last used one)
        #[arg(long)]
        sort_by: Option<GenreSortBy>,

        /// Reverse the listing (defaults to the last used direction)
        #[arg(long)]
        reverse: Option<bool>,
    },

    /// List playlists
    Playlists {
        /// Sort strategy (defaults to the last used one)
        #[arg(long)]
        sort_by: Option<PlaylistSortBy>,

        /// Reverse the listing (defaults to the last used direction)
        #[arg(long)]
        reverse: Option<bool>,
    },

    /// Create a custom playlist
    CreatePlaylist {
        /// Playlist title
        title: String,

        /// Member audio file paths
        songs: Vec<PathBuf>,
    },

    /// Delete a playlist by id
    DeletePlaylist {
        /// Playlist id (see `playlists`)
        id: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let music_dir = PathBuf::from(shellexpand::tilde(&args.music_dir).into_owned());
    let data_dir = PathBuf::from(shellexpand::tilde(&args.data_dir).into_owned());

    let mut settings = Settings::load_from_dir(&data_dir)?;
    let playlists_file = PlaylistsFile::in_dir(&data_dir);

    match args.command {
        Command::Scan => {
            let library = load_library(&music_dir, &playlists_file)?;
            playlists_file.write(&library.playlists().to_document())?;
            println!("{} songs", library.song_count());
            println!("{} albums", library.albums().len());
            println!("{} artists", library.artists().len());
            println!("{} genres", library.genres().len());
            println!("{} playlists", library.playlist_count());
        }
        Command::Songs { sort_by, reverse } => {
            let library = load_library(&music_dir, &playlists_file)?;
            let by = sort_by.unwrap_or_else(|| settings.songs_sort_by());
            let reverse = reverse.unwrap_or_else(|| settings.songs_sort_reverse());
            list_songs(&library, by, reverse);
            settings.set_songs_sort_by(by)?;
            settings.set_songs_sort_reverse(reverse)?;
        }
        Command::Albums { sort_by, reverse } => {
            let library = load_library(&music_dir, &playlists_file)?;
            let by = sort_by.unwrap_or_else(|| settings.albums_sort_by());
            let reverse = reverse.unwrap_or_else(|| settings.albums_sort_reverse());
            list_albums(&library, by, reverse);
            settings.set_albums_sort_by(by)?;
            settings.set_albums_sort_reverse(reverse)?;
        }
        Command::Artists { sort_by, reverse } => {
            let library = load_library(&music_dir, &playlists_file)?;
            let by = sort_by.unwrap_or_else(|| settings.artists_sort_by());
            let reverse = reverse.unwrap_or_else(|| settings.artists_sort_reverse());
            list_artists(&library, by, reverse);
            settings.set_artists_sort_by(by)?;
            settings.set_artists_sort_reverse(reverse)?;
        }
        Command::Genres { sort_by, reverse } => {
            let library = load_library(&music_dir, &playlists_file)?;
            let by = sort_by.unwrap_or_else(|| settings.genres_sort_by());
            let reverse = reverse.unwrap_or_else(|| settings.genres_sort_reverse());
            list_genres(&library, by, reverse);
            settings.set_genres_sort_by(by)?;
            settings.set_genres_sort_reverse(reverse)?;
        }
        Command::Playlists { sort_by, reverse } => {
            let library = load_library(&music_dir, &playlists_file)?;
            let by = sort_by.unwrap_or_else(|| settings.playlists_sort_by());
            let reverse = reverse.unwrap_or_else(|| settings.playlists_sort_reverse());
            list_playlists(&library, by, reverse);
            settings.set_playlists_sort_by(by)?;
            settings.set_playlists_sort_reverse(reverse)?;
        }
        Command::CreatePlaylist { title, songs } => {
            let mut library = load_library(&music_dir, &playlists_file)?;
            let playlist = library.playlists_mut().create(title, songs);
            println!("Created playlist {} ({})", playlist.title, playlist.id);
            playlists_file.write(&library.playlists().to_document())?;
        }
        Command::DeletePlaylist { id } => {
            let mut library = load_library(&music_dir, &playlists_file)?;
            let Some(playlist) = library.playlists_mut().remove(&id) else {
                bail!("No playlist with id {}", id);
            };
            playlists_file.write(&library.playlists().to_document())?;
            println!("Deleted playlist {} ({})", playlist.title, playlist.id);
        }
    }

    Ok(())
}

/// Scan the music directory, then fold the persisted playlist document
/// back in (custom playlists live only in that document).
fn load_library(music_dir: &Path, playlists_file: &PlaylistsFile) -> Result<Library> {
    let mut library = Scanner::new(music_dir.to_path_buf()).scan()?;
    let document = playlists_file.read()?;
    library.playlists_mut().restore(document, parse_local_playlist);
    Ok(library)
}

fn order_suffix(reverse: bool) -> &'static str {
    if reverse {
        ", reversed"
    } else {
        ""
    }
}

fn list_songs(library: &Library, by: SongSortBy, reverse: bool) {
    let ids: Vec<String> = library.songs().ids().cloned().collect();
    let sorted = library.songs().sort(&ids, by, reverse);
    println!(
        "{} song(s), sorted by {}{}",
        sorted.len(),
        by.label(),
        order_suffix(reverse)
    );
    for id in &sorted {
        if let Some(song) = library.songs().get(id) {
            println!(
                "  {} - {} [{}] {}",
                song.title,
                song.artist.as_deref().unwrap_or("Unknown Artist"),
                song.album.as_deref().unwrap_or("Unknown Album"),
                format_duration(song.duration_ms)
            );
        }
    }
}

fn list_albums(library: &Library, by: AlbumSortBy, reverse: bool) {
    let ids: Vec<String> = library.albums().ids().cloned().collect();
    let sorted = library.albums().sort(&ids, by, reverse);
    println!(
        "{} album(s), sorted by {}{}",
        sorted.len(),
        by.label(),
        order_suffix(reverse)
    );
    for id in &sorted {
        if let Some(album) = library.albums().get(id) {
            let year = album.year.map(|y| format!(", {}", y)).unwrap_or_default();
            println!(
                "  {} - {} ({} tracks{})",
                album.name,
                album.artist.as_deref().unwrap_or("Unknown Artist"),
                album.tracks_count,
                year
            );
        }
    }
}

fn list_artists(library: &Library, by: ArtistSortBy, reverse: bool) {
    let names: Vec<String> = library.artists().names().cloned().collect();
    let sorted = library.artists().sort(&names, by, reverse);
    println!(
        "{} artist(s), sorted by {}{}",
        sorted.len(),
        by.label(),
        order_suffix(reverse)
    );
    for name in &sorted {
        if let Some(artist) = library.artists().get(name) {
            println!(
                "  {} ({} albums, {} tracks)",
                artist.name, artist.albums_count, artist.tracks_count
            );
        }
    }
}

fn list_genres(library: &Library, by: GenreSortBy, reverse: bool) {
    let names: Vec<String> = library.genres().names().cloned().collect();
    let sorted = library.genres().sort(&names, by, reverse);
    println!(
        "{} genre(s), sorted by {}{}",
        sorted.len(),
        by.label(),
        order_suffix(reverse)
    );
    for name in &sorted {
        if let Some(genre) = library.genres().get(name) {
            println!("  {} ({} tracks)", genre.name, genre.tracks_count);
        }
    }
}

fn list_playlists(library: &Library, by: PlaylistSortBy, reverse: bool) {
    let ids: Vec<String> = library.playlists().ids().cloned().collect();
    let sorted = library.playlists().sort(&ids, by, reverse);
    println!(
        "{} playlist(s), sorted by {}{}",
        sorted.len(),
        by.label(),
        order_suffix(reverse)
    );
    for id in &sorted {
        if let Some(playlist) = library.playlists().get(id) {
            let kind = if playlist.is_local() { " [local]" } else { "" };
            println!(
                "  {}  {} ({} tracks){}",
                playlist.id,
                playlist.title,
                playlist.tracks_count(),
                kind
            );
        }
    }
}

/// Render a duration in m:ss form
fn format_duration(ms: u32) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
