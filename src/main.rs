mod app;
mod assets;
mod audio;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::util::Globals;
use anyhow::Context;
use lexopt::{Arg, Parser};
use simplelog::LevelFilter;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    verbose: bool,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('l') | Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('v') | Arg::Long("verbose") => args.verbose = true,
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }

    fn run(self) -> ExitCode {
        match self {
            Cli::Run(args) => match args.run() {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    log::error!("{e:#}");
                    eprintln!("wrapsnake: {e:?}");
                    ExitCode::FAILURE
                }
            },
            Cli::Help => {
                println!("Usage: wrapsnake [-c|--config <FILE>] [-l|--log-file <FILE>] [-v|--verbose]");
                println!();
                println!("Wraparound snake game");
                println!();
                println!("Options:");
                println!("  -c, --config <FILE>     Read display, speed, & asset settings from FILE");
                println!("  -l, --log-file <FILE>   Write log messages to FILE");
                println!("  -v, --verbose           Also log debug messages");
                println!("  -h, --help              Show this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                println!();
                println!("Keys: arrows/wasd/hjkl to steer, r to restart, q to quit");
                ExitCode::SUCCESS
            }
            Cli::Version => {
                println!("wrapsnake {}", env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

impl Arguments {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    fn run(self) -> anyhow::Result<()> {
        let level = self.log_level();
        match self.log_file.or_else(logging::default_log_path) {
            Some(path) => {
                if let Err(e) = logging::init(&path, level) {
                    let e = anyhow::Error::new(e)
                        .context(format!("could not log to {}", path.display()));
                    eprintln!("wrapsnake: warning: {e:#}; continuing without a log");
                }
            }
            None => eprintln!("wrapsnake: warning: no log directory found; continuing without a log"),
        }
        log::info!("Starting wrapsnake {}", env!("CARGO_PKG_VERSION"));
        let config = match self.config {
            Some(path) => Config::load(&path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?,
            None => Config::default(),
        };
        let globals = Globals::new(&config).context("invalid configuration")?;
        let terminal = ratatui::init();
        let r = App::new(globals).run(terminal);
        ratatui::restore();
        match r {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
            r => r.context("terminal I/O failed"),
        }
    }
}

fn main() -> ExitCode {
    match Cli::from_parser(Parser::from_env()) {
        Ok(cli) => cli.run(),
        Err(e) => {
            eprintln!("wrapsnake: {e}");
            ExitCode::from(2)
        }
    }
}
