use std::net::SocketAddr;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use proyektor::{cli, config, error, types::LyricsQuery};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the HTTP gateway
    Serve(ServeOptions),

    /// List the 66 books and their numbers
    Books,

    /// List Bible versions offered by the remote verse API
    Versions,

    /// Read a verse or a range of verses
    Read(ReadOptions),

    /// Print a local song stanza by stanza
    Song(SongOptions),

    /// Query the remote lyrics index
    Lyrics(LyricsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS
    #[clap(long)]
    pub addr: Option<SocketAddr>,
}

#[derive(Parser, Debug, Clone)]
pub struct ReadOptions {
    /// Version code, e.g. rv1960
    pub version: String,
    /// Book name, e.g. genesis
    pub book: String,
    pub chapter: String,
    /// Verse number or range, e.g. 16 or 16-18
    pub verse: String,

    /// Read from local files instead of the configured source
    #[clap(long)]
    pub local: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SongOptions {
    /// lentas or rapidas
    pub category: String,
    pub name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct LyricsOptions {
    #[command(subcommand)]
    pub command: LyricsSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum LyricsSubcommand {
    /// Search by keywords or fields
    Search(LyricsSearchOpts),

    /// Fetch lyrics by track id
    Get(LyricsGetOpts),

    /// Fetch lyrics by track signature
    Find(LyricsFindOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct LyricsSearchOpts {
    /// Free-text keywords
    #[clap(long, short)]
    pub query: Option<String>,
    #[clap(long)]
    pub track: Option<String>,
    #[clap(long)]
    pub artist: Option<String>,
    #[clap(long)]
    pub album: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct LyricsGetOpts {
    pub id: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct LyricsFindOpts {
    #[clap(long)]
    pub track: String,
    #[clap(long)]
    pub artist: String,
    #[clap(long)]
    pub album: Option<String>,
    /// Track duration in seconds
    #[clap(long)]
    pub duration: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let mut app_config = match config::AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    match cli.command {
        Command::Serve(opt) => {
            if let Some(addr) = opt.addr {
                app_config.server_addr = addr;
            }
            cli::serve(app_config).await
        }
        Command::Books => cli::books(),
        Command::Versions => cli::versions(&app_config).await,
        Command::Read(opt) => {
            cli::read(
                &app_config,
                opt.version,
                opt.book,
                opt.chapter,
                opt.verse,
                opt.local,
            )
            .await
        }
        Command::Song(opt) => cli::song(&app_config, opt.category, opt.name).await,
        Command::Lyrics(opt) => match opt.command {
            LyricsSubcommand::Search(s) => {
                let query = LyricsQuery {
                    query: s.query,
                    track_name: s.track,
                    artist_name: s.artist,
                    album_name: s.album,
                };
                cli::lyrics_search(&app_config, query).await
            }
            LyricsSubcommand::Get(g) => cli::lyrics_get(&app_config, g.id).await,
            LyricsSubcommand::Find(f) => {
                cli::lyrics_find(&app_config, f.track, f.artist, f.album, f.duration).await
            }
        },
        Command::Completions(_) => {}
    }
}
