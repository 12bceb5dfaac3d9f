use clap::{Parser, Subcommand};

mod commands;
mod config;
mod state;

#[derive(Parser)]
#[command(name = "habitflow-cli", version, about = "Habitflow CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Log progress for a habit
    Log(commands::log::LogArgs),
    /// Mark a habit completed for today
    Done {
        /// Habit id or exact title
        habit: String,
    },
    /// Undo today's completion
    Undo {
        /// Habit id or exact title
        habit: String,
    },
    /// Calendar grid for a habit
    Calendar(commands::calendar::CalendarArgs),
    /// Streaks and completion statistics
    Stats(commands::stats::StatsArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Log(args) => commands::log::run(args),
        Commands::Done { habit } => commands::track::done(&habit),
        Commands::Undo { habit } => commands::track::undo(&habit),
        Commands::Calendar(args) => commands::calendar::run(args),
        Commands::Stats(args) => commands::stats::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
