use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dayplan::catalog::{self, Category};
use dayplan::config;
use dayplan::day::{self, Counter, Direction};
use dayplan::planner::Planner;
use dayplan::store::Store;
use dayplan::tui;

#[derive(Parser)]
#[command(
    name = "dayplan",
    version = env!("DAYPLAN_VERSION"),
    about = "Track today's study and work schedule"
)]
struct Cli {
    /// Path to the `SQLite` database (default: ~/.dayplan/dayplan.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the TUI dashboard (default)
    Dashboard,
    /// Initialize the dayplan config directory
    Init,
    /// Show today's progress
    Status {
        /// Print the stored day record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the schedule grouped by time of day
    Tasks {
        /// Only show one part of the day: morning, afternoon, evening, night or late-night
        #[arg(long)]
        category: Option<Category>,
    },
    /// Toggle a task between done and not done
    Toggle {
        /// Task id as shown by `dayplan tasks`
        id: String,
    },
    /// Step a counter up by one (or down with --down)
    Count {
        /// Counter: dsa, sql-js or internship
        counter: String,
        /// Decrement instead of increment
        #[arg(long)]
        down: bool,
    },
    /// Toggle today's workout
    Workout,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    config::ensure_dirs()?;
    if let Err(e) = init_tracing() {
        eprintln!("warning: logging disabled: {e:#}");
    }

    let cfg = config::load()?;
    let db_path = cfg.db_path(cli.db.as_deref())?;

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Init => {
            let planner = open_planner(&db_path)?;
            planner
                .save()
                .with_context(|| format!("failed to write {}", db_path.display()))?;
            println!("dayplan initialized at {}", db_path.display());
            Ok(())
        }
        Commands::Status { json } => {
            let planner = open_planner(&db_path)?;
            let record = planner.record();
            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
                return Ok(());
            }
            println!("{}", record.date);
            println!(
                "  Progress:        {}% ({}/{} tasks)",
                record.completion_rate(),
                record.completed_count(),
                record.tasks.len()
            );
            for counter in Counter::ALL {
                println!(
                    "  {:<17}{}/{}",
                    format!("{}:", counter.label()),
                    record.counter(counter),
                    counter.target()
                );
            }
            println!(
                "  Workout:         {}",
                if record.workout_completed {
                    "done"
                } else {
                    "not done"
                }
            );
            Ok(())
        }
        Commands::Tasks { category } => {
            let planner = open_planner(&db_path)?;
            for section in day::view::sections_in(planner.record(), category) {
                println!(
                    "{} {}",
                    section.category.icon(),
                    section.category.title()
                );
                for row in &section.rows {
                    println!(
                        "  {:>2} {} {} ({})",
                        row.def.id,
                        if row.completed { "✓" } else { "○" },
                        row.def.title,
                        row.def.time
                    );
                }
            }
            Ok(())
        }
        Commands::Toggle { id } => {
            let mut planner = open_planner(&db_path)?;
            if planner.toggle_task(&id)? {
                let title = catalog::find(&id).map_or("", |t| t.title);
                let state = if planner.record().is_completed(&id) {
                    "done"
                } else {
                    "not done"
                };
                println!("'{title}' marked {state}");
            } else {
                println!("No task with id '{id}'. Use `dayplan tasks` to list ids.");
            }
            Ok(())
        }
        Commands::Count { counter, down } => {
            let counter: Counter = counter.parse().map_err(anyhow::Error::msg)?;
            let direction = if down {
                Direction::Decrement
            } else {
                Direction::Increment
            };
            let mut planner = open_planner(&db_path)?;
            let value = planner.adjust_counter(counter, direction)?;
            println!("{}: {value}/{}", counter.label(), counter.target());
            Ok(())
        }
        Commands::Workout => {
            let mut planner = open_planner(&db_path)?;
            let done = planner.toggle_workout()?;
            println!("Workout {}", if done { "done" } else { "not done" });
            Ok(())
        }
        Commands::Dashboard => {
            let planner = open_planner(&db_path)?;
            tui::run(planner, cfg.theme.build())
        }
    }
}

fn open_planner(db_path: &std::path::Path) -> Result<Planner> {
    let store = Store::open(db_path)?;
    Planner::open(store, &day::today_stamp())
}

/// Log to ~/.dayplan/dayplan.log; the dashboard owns the terminal.
/// Filter comes from `DAYPLAN_LOG`, then `RUST_LOG`, then `dayplan=info`.
fn init_tracing() -> Result<()> {
    let path = config::log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let spec = std::env::var("DAYPLAN_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| {
            std::env::var("RUST_LOG")
                .ok()
                .filter(|value| !value.trim().is_empty())
        })
        .unwrap_or_else(|| "dayplan=info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&spec).context("invalid log filter")?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)?;
    Ok(())
}
