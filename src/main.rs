// valscope: inspect rendered values as an expandable tree

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use valscope::constants::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_SEQUENCE_LEN, DEFAULT_MAX_STRING_LEN, DEFAULT_MAX_VISITS,
};
use valscope::render::{Engine, RenderConfig};
use valscope::sample::sample_session;
use valscope::ui::{dump::dump, App};

#[derive(Parser)]
#[command(name = "valscope")]
#[command(
    version,
    about = "Browse pretty-printed values of a sample debugging session"
)]
struct Args {
    /// Deepest chain of nested renders for one request
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Most values visited for one request
    #[arg(long, default_value_t = DEFAULT_MAX_VISITS)]
    max_visits: usize,

    /// Longest string decoded, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_STRING_LEN)]
    max_string_len: usize,

    /// Most elements listed for a vector or tree
    #[arg(long, default_value_t = DEFAULT_MAX_SEQUENCE_LEN)]
    max_sequence_len: usize,

    /// Print the tree to stdout instead of starting the inspector
    #[arg(long)]
    dump: bool,

    /// Levels to expand below the roots in dump mode
    #[arg(long, default_value_t = 1, requires = "dump")]
    expand: usize,

    /// Write logs to this file (RUST_LOG selects the level)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the subscriber. Without a log file, logs go to stderr in dump mode
/// only, so nothing draws over the inspector.
fn init_logging(log_file: Option<&Path>, dump: bool) -> io::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if dump => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref(), args.dump)?;

    let config = RenderConfig::default()
        .with_max_depth(args.max_depth)
        .with_max_visits(args.max_visits)
        .with_max_string_len(args.max_string_len)
        .with_max_sequence_len(args.max_sequence_len);

    let session = sample_session()?;
    let engine = Engine::new(&session.image).with_config(config);
    info!(
        roots = session.roots.len(),
        cells = session.image.live_cells(),
        config = ?engine.config(),
        "sample session ready"
    );

    if args.dump {
        print!("{}", dump(&engine, &session.roots, args.expand));
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(engine, &session.roots);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
