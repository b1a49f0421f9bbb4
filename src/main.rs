use {
  anyhow::Context,
  api_error_response::ApiErrorResponse,
  app::App,
  client::Client,
  collect::collect_comments,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_source::CommentSource,
  comment_thread::CommentThread,
  comment_thread_response::CommentThreadResponse,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  draw::draw_winners,
  draw_result::DrawResult,
  effect::Effect,
  error::Error,
  event::Event,
  fetch_error::FetchError,
  focus::Focus,
  form::Form,
  help_view::HelpView,
  list_cursor::ListCursor,
  pending_fetch::PendingFetch,
  rand::{Rng, seq::SliceRandom},
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  regex::Regex,
  serde::Deserialize,
  session::Session,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env,
    error::Error as _,
    fmt::{self, Display},
    fs::File,
    io::{self, IsTerminal, Stdout},
    num::IntErrorKind,
    path::PathBuf,
    process,
    sync::{LazyLock, Mutex},
    time::{Duration, Instant},
  },
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing_subscriber::EnvFilter,
  transient_message::TransientMessage,
  utils::{format_count, truncate, wrap_text},
  video_id::VideoId,
};

mod api_error_response;
mod app;
mod client;
mod collect;
mod command;
mod command_dispatch;
mod comment;
mod comment_source;
mod comment_thread;
mod comment_thread_response;
mod config;
mod draw;
mod draw_result;
mod effect;
mod error;
mod event;
mod fetch_error;
mod focus;
mod form;
mod help_view;
mod list_cursor;
mod pending_fetch;
mod session;
mod state;
mod transient_message;
mod utils;
mod video_id;

const BASE_INDENT: &str = " ";

const FETCH_IN_PROGRESS_STATUS: &str =
  "Still loading comments, wait for the current fetch to finish.";

const FORM_HEIGHT: u16 = 7;

const HELP_STATUS: &str = "Press ? or esc to close help";
const HELP_TITLE: &str = " Help ";

const HELP_TEXT: &str = "\
Form:
  tab       next field
  shift+tab previous field
  enter     fetch (key, url, keyword) or draw (counts)
  ctrl+f    fetch comments
  ctrl+r    draw winners and alternates
  f1        toggle this help
  esc       quit
  ctrl+c    quit

Participants:
  ↑ / k     move selection up
  ↓ / j     move selection down
  pg↑ pg↓   page up / down
  home end  jump to first / last
  enter / o open the selected comment in your browser
  f         fetch comments
  d         draw winners and alternates
  ?         toggle this help
  q         quit

Winners are marked ★ and alternates ☆.
";

const IDLE_STATUS: &str =
  "tab next field • ctrl+f fetch • ctrl+r draw • f1 help • esc quit";

const LOADING_STATUS: &str = "Loading comments...";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging(config: &Config) -> Result {
  let Some(path) = &config.log_file else {
    return Ok(());
  };

  let file = File::options()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file `{}`", path.display()))?;

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("giveaway=info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .with_target(false)
    .init();

  Ok(())
}

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

fn run() -> Result {
  let config = Config::from_env();

  initialize_logging(&config)?;

  tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting giveaway");

  let mut terminal =
    initialize_terminal().context("could not initialize terminal")?;

  let mut app = App::new(&config);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = tokio::task::block_in_place(run) {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
