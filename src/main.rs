//! Binary entrypoint for the riddlereef CLI.
//!
//! Commands:
//! - `init` - write a starter `config.toml`
//! - `check <input> <answer>` - run the answer matcher once (exit 1 when incorrect)
//! - `score <a> <b>` - print the raw similarity of two strings
//! - `best <input> <targets...>` - rate `input` against several candidates
//! - `rooms` - list rooms and how many riddles each carries
//! - `play` - run an interactive game on stdin/stdout
//!
//! See the library crate docs for module‑level details: `riddlereef::`.
use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};

use riddlereef::answer::best_match;
use riddlereef::config::Config;
use riddlereef::game::terminal::Terminal;
use riddlereef::logutil::escape_log;

#[derive(Parser)]
#[command(name = "riddlereef")]
#[command(about = "A riddle party game for Reef Town with a forgiving answer checker")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Check one answer against the canonical answer
    Check {
        /// What the player typed
        input: String,
        /// The canonical answer
        answer: String,
        /// Override the configured threshold
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// Print the similarity score of two strings (after normalization)
    Score {
        first: String,
        second: String,
        /// Score the raw strings without normalizing them
        #[arg(long)]
        raw: bool,
    },
    /// Rate an input against several candidates and report the closest
    Best {
        input: String,
        #[arg(required = true)]
        targets: Vec<String>,
    },
    /// List rooms and their riddle counts
    Rooms,
    /// Play an interactive game in the terminal
    Play,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => load_config(&cli.config).await?,
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Init { force } => {
            if Path::new(&cli.config).exists() && !force {
                warn!("{} already exists; use --force to overwrite", cli.config);
                std::process::exit(1);
            }
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
            println!("Wrote {}", cli.config);
        }
        Commands::Check {
            input,
            answer,
            threshold,
        } => {
            let mut settings = config.matcher.clone();
            if let Some(t) = threshold {
                settings = settings.with_threshold(t);
            }
            let mut check_config = config.clone();
            check_config.matcher = settings;
            check_config.validate()?;
            let matcher = check_config.matcher();
            let outcome = matcher.evaluate(&input, &answer);
            debug!(
                "check input=\"{}\" answer=\"{}\" normalized=({:?}, {:?}) score={:.4}",
                escape_log(&input),
                escape_log(&answer),
                outcome.normalized_input,
                outcome.normalized_answer,
                outcome.score
            );
            if outcome.accepted {
                println!("correct (score {:.3})", outcome.score);
            } else {
                println!("incorrect (score {:.3})", outcome.score);
                std::process::exit(1);
            }
        }
        Commands::Score { first, second, raw } => {
            let matcher = config.matcher();
            let score = if raw {
                matcher.scorer().score(&first, &second)
            } else {
                matcher
                    .scorer()
                    .score(&matcher.normalize(&first), &matcher.normalize(&second))
            };
            println!("{:.4}", score);
        }
        Commands::Best { input, targets } => {
            let matcher = config.matcher();
            let normalized: Vec<String> = targets.iter().map(|t| matcher.normalize(t)).collect();
            let wanted = matcher.normalize(&input);
            if let Some(found) = best_match(matcher.scorer(), &wanted, normalized.as_slice()) {
                for (target, rating) in targets.iter().zip(found.ratings.iter()) {
                    println!("{:.4}  {}", rating.rating, target);
                }
                println!("best: {}", targets[found.best_index]);
            }
        }
        Commands::Rooms => {
            let table = config.riddle_table()?;
            let state = config.new_game()?;
            for room in state.rooms() {
                let count = table.riddles_for(&room.id).len();
                let lock = if room.unlocked { "" } else { " (locked)" };
                println!("{:<16} {:<18} {} riddles{}", room.id, room.name, count, lock);
            }
        }
        Commands::Play => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut terminal = Terminal::new(&config, stdin.lock(), stdout.lock())?;
            terminal.run(&mut rand::thread_rng())?;
        }
    }

    Ok(())
}

/// Load the config file, or fall back to defaults when it does not exist.
async fn load_config(path: &str) -> Result<Config> {
    if Path::new(path).exists() {
        Config::load(path).await
    } else {
        Ok(Config::default())
    }
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides config
    let base_level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let file = config.logging.file.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    if let Some(f) = file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Interactive runs also see log lines on the console
        let is_tty = atty::is(atty::Stream::Stdout);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
