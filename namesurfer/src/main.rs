#![warn(clippy::all, rust_2018_idioms)]

use std::io::{BufRead, Write};
use std::path::PathBuf;

use app_core::event::EventQueue;
use clap::Parser;
use namesurfer::{
    events::{AddName, ExportSvg, LoadSession},
    parse_command, Config, NameSurfer,
};
use rank_data::RankStore;

const PROMPT: &str = "name> ";
const DEFAULT_OUTPUT: &str = "namesurfer.svg";

/// Chart the popularity of baby names across the decades 1900-2000.
#[derive(Parser, Debug)]
#[command(name = "namesurfer", version)]
struct Cli {
    /// Ranking dataset, one `NAME r1900 ... r2000` record per line.
    #[arg(short, long)]
    data: Option<PathBuf>,
    /// Viewport width.
    #[arg(long)]
    width: Option<f64>,
    /// Viewport height.
    #[arg(long)]
    height: Option<f64>,
    /// Write the chart of NAMES to this svg file and exit.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Restore a saved session before doing anything else.
    #[arg(short, long)]
    session: Option<PathBuf>,
    /// Prefix every point label with the name.
    #[arg(long)]
    name_labels: bool,
    /// Names to chart. Without any, an interactive prompt is started.
    names: Vec<String>,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match Config::from_config_file() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("unable to load config file \".namesurfer\" from home directory: {err}");
            Config::default()
        }
    };
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    config.layout.label_with_name |= cli.name_labels;

    // A missing dataset is reported, the app keeps running with nothing to
    // look up.
    let store = RankStore::from_path(&config.data_path).unwrap_or_else(|err| {
        log::error!("{err}");
        eprintln!("could not load {}: {err}", config.data_path.display());
        RankStore::new()
    });

    let mut app = NameSurfer::new(config, store);
    let mut queue = EventQueue::<NameSurfer>::new();
    if let Some(path) = cli.session {
        queue.queue_event(Box::new(LoadSession::new(Some(path))));
    }

    if cli.names.is_empty() && cli.output.is_none() {
        return run_interactive(&mut app, queue);
    }

    for name in cli.names {
        queue.queue_event(Box::new(AddName::new(name)));
    }
    let output = cli.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    queue.queue_event(Box::new(ExportSvg::new(output)));
    let failed = queue.run_events(&mut app);
    print_messages(&mut app);
    if failed > 0 {
        return Err(format!("{failed} step(s) failed"));
    }
    Ok(())
}

fn run_interactive(app: &mut NameSurfer, mut queue: EventQueue<NameSurfer>) -> Result<(), String> {
    queue.run_events(app);
    print_messages(app);
    println!(
        "{} names loaded from {}, type 'help' for commands",
        app.store().len(),
        app.config().data_path.display()
    );

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{PROMPT}");
        if let Err(err) = std::io::stdout().flush() {
            log::debug!("could not flush prompt: {err}");
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|err| format!("could not read input: {err}"))?;
        match parse_command(&line) {
            Ok(Some(event)) => queue.queue_event(event),
            Ok(None) if line.trim() == "help" => println!("{}", namesurfer::HELP),
            Ok(None) => (),
            Err(err) => println!("{err}"),
        }
        queue.run_events(app);
        print_messages(app);
        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

fn print_messages(app: &mut NameSurfer) {
    for message in app.take_messages() {
        println!("{message}");
    }
}
