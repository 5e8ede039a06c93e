//! Beat District CLI - browse the catalog, manage playlists, drive the player
use anyhow::Context;
use beat_api_client::BeatApiClient;
use beat_cli::{AppStore, BeatConfig, ClientError, NoticeLevel, StoredSession, TracingOutput};
use beat_core::{
    format_clock, LoginForm, RegisterForm, Song, SongForm, SongId, ALL_SONGS_PLAYLIST,
};
use beat_library::PlaylistEditor;
use beat_playback::PlaybackEvent;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "beat")]
#[command(about = "Beat District music client", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./beat.toml if present)
    #[arg(short, long, global = true, env = "BEAT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List songs of the catalog or of one of your playlists
    Songs {
        /// Free-text filter over every song field
        #[arg(short, long)]
        search: Option<String>,
        /// Playlist to browse instead of "All Songs"
        #[arg(short, long)]
        playlist: Option<String>,
    },
    /// List your playlists
    Playlists,
    /// Create, update or delete a playlist
    Playlist {
        #[command(subcommand)]
        action: PlaylistCommand,
    },
    /// Upload a new song (admin)
    AddSong(NewSongArgs),
    /// Edit an existing song (admin)
    EditSong(EditSongArgs),
    /// Walk the player through a playlist without producing sound
    Queue {
        /// Playlist to queue instead of "All Songs"
        #[arg(short, long)]
        playlist: Option<String>,
        /// Song to start from
        #[arg(long)]
        start: Option<String>,
        /// Number of skips to perform
        #[arg(short = 'n', long, default_value_t = 5)]
        steps: usize,
        /// Skip backwards
        #[arg(long)]
        previous: bool,
        /// Pick songs at random
        #[arg(long)]
        shuffle: bool,
    },
}

#[derive(Subcommand)]
enum PlaylistCommand {
    /// Create a playlist from song ids
    Create {
        name: String,
        /// Song id to include (repeatable)
        #[arg(long = "song", required = true)]
        songs: Vec<String>,
    },
    /// Add or remove songs of an existing playlist
    Update {
        name: String,
        /// Song id to add (repeatable)
        #[arg(long)]
        add: Vec<String>,
        /// Song id to remove (repeatable)
        #[arg(long)]
        remove: Vec<String>,
    },
    /// Delete a playlist
    Delete { name: String },
}

#[derive(Args)]
struct NewSongArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    artist: String,
    #[arg(long)]
    album: String,
    #[arg(long)]
    year: String,
    /// Duration as m:ss
    #[arg(long)]
    duration: String,
    /// Audio file
    #[arg(long)]
    file: PathBuf,
    /// Cover image
    #[arg(long)]
    album_photo: PathBuf,
}

#[derive(Args)]
struct EditSongArgs {
    /// Id of the song to edit
    #[arg(long)]
    id: String,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    artist: Option<String>,
    #[arg(long)]
    album: Option<String>,
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    duration: Option<String>,
    /// Replacement audio file
    #[arg(long)]
    file: Option<PathBuf>,
    /// Replacement cover image
    #[arg(long)]
    album_photo: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = BeatConfig::load(cli.config.as_deref())?;
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let api = BeatApiClient::new(config.api_config())?;
    let mut store = AppStore::new(config.playback.clone());

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
        } => {
            store
                .register(&api, &RegisterForm::new(name, email, password))
                .await;
        }
        Commands::Login { email, password } => {
            login(&mut store, &api, &config, LoginForm::new(email, password)).await?;
        }
        Commands::Logout => {
            StoredSession::remove(&config.session.path).await?;
            store.logout(&api).await;
        }
        Commands::Whoami => {
            restore(&mut store, &api, &config).await?;
            whoami(&store);
        }
        Commands::Songs { search, playlist } => {
            songs(&mut store, &api, &config, search, playlist).await?;
        }
        Commands::Playlists => {
            restore(&mut store, &api, &config).await?;
            for playlist in store.session().playlists() {
                println!("{} ({} songs)", playlist.name, playlist.len());
            }
        }
        Commands::Playlist { action } => {
            restore(&mut store, &api, &config).await?;
            refresh(&mut store, &api).await?;
            playlist(&mut store, &api, action).await?;
        }
        Commands::AddSong(args) => {
            restore(&mut store, &api, &config).await?;
            let form = SongForm {
                id: None,
                title: args.title,
                artist: args.artist,
                album: args.album,
                year: args.year,
                duration: args.duration,
                file: Some(args.file),
                album_photo: Some(args.album_photo),
            };
            store.add_song(&api, &form).await;
        }
        Commands::EditSong(args) => {
            restore(&mut store, &api, &config).await?;
            refresh(&mut store, &api).await?;
            let form = edit_form(&store, args)?;
            store.edit_song(&api, &form).await;
        }
        Commands::Queue {
            playlist,
            start,
            steps,
            previous,
            shuffle,
        } => {
            if playlist.is_some() {
                restore(&mut store, &api, &config).await?;
            }
            refresh(&mut store, &api).await?;
            queue(&mut store, playlist, start, steps, previous, shuffle)?;
        }
    }

    report(&mut store)
}

/// Print pending notices; an error notice fails the command
fn report(store: &mut AppStore) -> anyhow::Result<()> {
    let mut failure = None;
    for notice in store.take_notices() {
        match notice.level {
            NoticeLevel::Success | NoticeLevel::Info => println!("{}", notice.message),
            NoticeLevel::Error => failure = Some(notice.message),
        }
    }

    match failure {
        Some(message) => Err(anyhow::anyhow!(message)),
        None => Ok(()),
    }
}

async fn login(
    store: &mut AppStore,
    api: &BeatApiClient,
    config: &BeatConfig,
    form: LoginForm,
) -> anyhow::Result<()> {
    store.login(api, &form).await;

    if let Some(token) = store.session().token() {
        let user_id = store.session().user().map(|user| user.id.clone());
        StoredSession::new(token, user_id)
            .save(&config.session.path)
            .await
            .with_context(|| format!("saving session to {}", config.session.path.display()))?;
    }
    Ok(())
}

async fn restore(
    store: &mut AppStore,
    api: &BeatApiClient,
    config: &BeatConfig,
) -> anyhow::Result<()> {
    let Some(stored) = StoredSession::load(&config.session.path).await? else {
        return Err(ClientError::NotLoggedIn.into());
    };

    if !store.restore_session(api, stored.token, stored.user_id).await {
        report(store)?;
    }
    Ok(())
}

async fn refresh(store: &mut AppStore, api: &BeatApiClient) -> anyhow::Result<()> {
    if !store.refresh_catalog(api).await {
        report(store)?;
    }
    Ok(())
}

fn whoami(store: &AppStore) {
    let Some(user) = store.session().user() else {
        return;
    };
    let role = if user.is_admin { "admin" } else { "listener" };
    println!("{} <{}> ({role})", user.name, user.email);
    println!("{} playlists", user.playlists.len());
}

async fn songs(
    store: &mut AppStore,
    api: &BeatApiClient,
    config: &BeatConfig,
    search: Option<String>,
    playlist: Option<String>,
) -> anyhow::Result<()> {
    if let Some(name) = playlist.as_deref() {
        if name != ALL_SONGS_PLAYLIST {
            restore(store, api, config).await?;
        }
    }
    refresh(store, api).await?;

    if let Some(name) = playlist.as_deref() {
        if !store.select_playlist(name) {
            return report(store);
        }
    }

    let filter = store
        .catalog()
        .filter_by_text(search.as_deref().unwrap_or_default());
    for song in &filter {
        print_song(song);
    }
    if filter.is_filtering() {
        println!("{} matching songs", filter.count());
    }
    Ok(())
}

async fn playlist(
    store: &mut AppStore,
    api: &BeatApiClient,
    action: PlaylistCommand,
) -> anyhow::Result<()> {
    match action {
        PlaylistCommand::Create { name, songs } => {
            let mut editor = PlaylistEditor::new();
            editor.set_name(name)?;
            for id in songs {
                let song = store.catalog().find_song(&SongId::new(id))?;
                if !editor.is_selected(&song.id) {
                    editor.toggle_song(song);
                }
            }
            store.save_playlist(api, &mut editor).await;
        }
        PlaylistCommand::Update { name, add, remove } => {
            let mut editor = PlaylistEditor::for_edit(store.session().playlist(&name)?);
            for id in add {
                let song = store.catalog().find_song(&SongId::new(id))?;
                if !editor.is_selected(&song.id) {
                    editor.toggle_song(song);
                }
            }
            for id in remove {
                let id = SongId::new(id);
                let selected = editor.selected().iter().find(|song| song.id == id).cloned();
                if let Some(song) = selected {
                    editor.toggle_song(&song);
                }
            }
            store.save_playlist(api, &mut editor).await;
        }
        PlaylistCommand::Delete { name } => {
            store.delete_playlist(api, &name).await;
        }
    }
    Ok(())
}

/// Start from the stored song and overlay the given fields
fn edit_form(store: &AppStore, args: EditSongArgs) -> anyhow::Result<SongForm> {
    let song = store.catalog().find_song(&SongId::new(args.id))?;
    Ok(SongForm {
        id: Some(song.id.clone()),
        title: args.title.unwrap_or_else(|| song.title.clone()),
        artist: args.artist.unwrap_or_else(|| song.artist.clone()),
        album: args.album.unwrap_or_else(|| song.album.clone()),
        year: args.year.unwrap_or_else(|| song.year.clone()),
        duration: args.duration.unwrap_or_else(|| song.duration.clone()),
        file: args.file,
        album_photo: args.album_photo,
    })
}

fn queue(
    store: &mut AppStore,
    playlist: Option<String>,
    start: Option<String>,
    steps: usize,
    previous: bool,
    shuffle: bool,
) -> anyhow::Result<()> {
    if let Some(name) = playlist.as_deref() {
        if !store.select_playlist(name) {
            return report(store);
        }
    }
    if let Some(id) = start {
        if !store.select_song(&SongId::new(id)) {
            return report(store);
        }
    }

    let player = store.player_mut();
    player.set_output(Box::new(TracingOutput::new()));
    if shuffle {
        player.set_shuffle(true);
    }
    player.play();

    print_position(player.current_index(), player.current_song());
    for _ in 0..steps {
        if previous {
            player.previous();
        } else {
            player.next();
        }
        print_position(player.current_index(), player.current_song());
    }

    for event in player.drain_events() {
        if let PlaybackEvent::SongChanged { generation, .. } = event {
            tracing::debug!(generation = generation.value(), "Song change");
        }
    }
    Ok(())
}

fn print_position(index: Option<usize>, song: Option<&Song>) {
    match (index, song) {
        (Some(index), Some(song)) => println!("[{index}] {} - {}", song.title, song.subtitle()),
        _ => println!("(queue is empty)"),
    }
}

fn print_song(song: &Song) {
    let length = song
        .duration_seconds()
        .map(format_clock)
        .unwrap_or_else(|| song.duration.clone());
    println!("{}  {}  {}  [{length}]", song.id, song.title, song.subtitle());
}
