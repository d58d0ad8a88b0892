use anyhow::{Context, Result};
use cadenza_config::{CadenzaPaths, ConfigBackend, TomlConfigBackend};
use cadenza_core::domain::SessionState;
use cadenza_core::ports::{CatalogSource, ReplySink, SystemClock};
use cadenza_core::{ChatSettings, Chatbot};
use cadenza_dataset::{CsvCatalogSource, DatasetConfig};
use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod sink;

use sink::ConsoleSink;

const PROMPT: &str = "You: ";
const CHAT_SECTION: &str = "chat";
const LOG_ENV_VAR: &str = "CADENZA_LOG";

fn parse_path(s: &str) -> Result<PathBuf> {
  let original_path = PathBuf::from(s);
  if original_path.is_absolute() {
    return Ok(original_path);
  }
  let cwd = std::env::current_dir()?;
  Ok(cwd.join(original_path))
}

/// Chatbot de música sobre un catálogo CSV.
#[derive(Parser, Debug)]
#[command(name = "cadenza", version, about)]
struct CliArgs {
  /// CSV del catálogo; si no se indica se usa el de la sección [dataset].
  #[arg(value_parser = parse_path)]
  dataset: Option<PathBuf>,

  /// Fichero de configuración alternativo.
  #[arg(long, value_parser = parse_path)]
  config: Option<PathBuf>,

  /// Filtro de logs (p.ej. `debug` o `cadenza_core=trace`). Tiene prioridad sobre CADENZA_LOG.
  #[arg(long)]
  log_level: Option<String>,
}

fn init_tracing(log_level: Option<&str>) -> Result<()> {
  let filter = match log_level {
    Some(directives) => EnvFilter::try_new(directives).with_context(|| format!("invalid log filter '{directives}'"))?,
    None => EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).with_env_var(LOG_ENV_VAR).from_env_lossy(),
  };

  tracing_subscriber::registry()
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .with(filter)
    .try_init()
    .context("could not install the tracing subscriber")
}

fn print_banner() {
  println!("Welcome to the Cadenza Music Chatbot!");
  println!("I can help you with:");
  println!("- Latest trending songs");
  println!("- Recommending songs of your taste");
  println!("- Getting artist statistics");
  println!("- Finding information about songs");
  println!("- Release date information");
  println!("And more! Type 'exit' to end the chat.");
}

fn main() -> Result<()> {
  let cli_args = CliArgs::parse();
  init_tracing(cli_args.log_level.as_deref())?;

  let paths = CadenzaPaths::detect().context("could not resolve Cadenza directories")?;
  let backend = match &cli_args.config {
    Some(file) => TomlConfigBackend::with_file(file),
    None => TomlConfigBackend::new(&paths),
  };
  debug!("using config file {:?}", backend.config_file());

  let settings: ChatSettings = backend.load_section_with_default(CHAT_SECTION)?;
  backend.save_section(CHAT_SECTION, &settings)?;
  let dataset = DatasetConfig::load(&backend)?;

  let source = match cli_args.dataset {
    Some(path) => CsvCatalogSource::new(path, dataset.min_release_year),
    None => CsvCatalogSource::from_config(&dataset, &paths),
  };
  let catalog = source
    .load_catalog()
    .with_context(|| format!("could not load the dataset at {}", source.path().display()))?;
  info!("catalog loaded with {} tracks", catalog.len());

  let chatbot = Chatbot::new(Arc::new(catalog), settings, SystemClock)?;

  print_banner();
  run(&chatbot, paths.history_file())
}

fn run(chatbot: &Chatbot, history_file: PathBuf) -> Result<()> {
  let mut rl = DefaultEditor::new()?;
  let _ = rl.load_history(&history_file);

  let mut session = SessionState::default();
  let mut sink = ConsoleSink::stdout();

  loop {
    match rl.readline(PROMPT) {
      Ok(line) => {
        let _ = rl.add_history_entry(line.as_str());
        if line.trim().eq_ignore_ascii_case("exit") {
          sink.deliver("Goodbye!")?;
          break;
        }
        chatbot.reply_to(&line, &mut session, &mut sink)?;
      }
      Err(ReadlineError::Interrupted) => {
        println!("CTRL-C");
        break;
      }
      Err(ReadlineError::Eof) => {
        println!("CTRL-D: exiting.");
        break;
      }
      Err(e) => {
        println!("Error: {:?}", e);
        break;
      }
    }
  }

  if let Err(e) = rl.save_history(&history_file) {
    debug!("could not save history to {:?}: {e}", history_file);
  }
  Ok(())
}
