use anyhow::Result;
use clap::{Parser, Subcommand};
use heroes_cli::{commands, parse_stat};
use heroes_core::constants::{DEFAULT_DATA_FILE, UNLIMITED};
use heroes_core::StatKey;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "heroes")]
#[command(about = "HeroesDB - query, sort and group a collection of hero records", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file holding the array of heroes
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_FILE)]
    data: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show heroes in load order
    List {
        /// Show at most this many heroes (0 = all)
        #[arg(short, long, default_value_t = UNLIMITED)]
        limit: usize,

        /// Output JSON file for the listed heroes
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show every detail of a hero (exact name)
    Show {
        name: String,

        /// Output JSON file for the hero
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show heroes whose names start with a prefix (any case)
    StartsWith {
        prefix: String,

        /// Output JSON file for the matches
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Remove all heroes with an exact name
    Remove {
        name: String,

        /// Output JSON file for the removal report
        #[arg(short, long)]
        output: Option<String>,

        /// Write the remaining heroes to this JSON file
        #[arg(long)]
        save: Option<String>,
    },

    /// Remove all heroes whose names start with a prefix (any case)
    RemovePrefix {
        prefix: String,

        /// Output JSON file for the removal report
        #[arg(short, long)]
        output: Option<String>,

        /// Write the remaining heroes to this JSON file
        #[arg(long)]
        save: Option<String>,
    },

    /// Append a hero read from a JSON file
    Add {
        /// JSON file with one hero object
        #[arg(long)]
        from: String,

        /// Output JSON file for the added hero
        #[arg(short, long)]
        output: Option<String>,

        /// Write the resulting heroes to this JSON file
        #[arg(long)]
        save: Option<String>,
    },

    /// Replace the first hero with an exact name
    Update {
        name: String,

        /// JSON file with the replacement hero object
        #[arg(long)]
        from: String,

        /// Output JSON file for the update report
        #[arg(short, long)]
        output: Option<String>,

        /// Write the resulting heroes to this JSON file
        #[arg(long)]
        save: Option<String>,
    },

    /// Sort by name, descending
    SortName {
        /// Output JSON file for the sorted heroes
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Sort ascending by a power stat
    SortBy {
        /// intelligence, strength, speed, durability, power or combat
        #[arg(value_parser = parse_stat)]
        stat: StatKey,

        /// Output JSON file for the sorted heroes
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Find a hero by binary search on name (any case)
    Search {
        name: String,

        /// Output JSON file for the search report
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Count heroes per first letter
    GroupCounts {
        /// Output JSON file for the counts
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show heroes whose names start with a letter
    ByLetter {
        letter: String,

        /// Output JSON file for the matches
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Remove a hero through the first-letter index
    RemoveGrouped {
        name: String,

        /// Output JSON file for the removal report
        #[arg(short, long)]
        output: Option<String>,

        /// Write the remaining heroes to this JSON file
        #[arg(long)]
        save: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let data = cli.data.as_str();

    // Execute command
    match cli.command {
        Commands::List { limit, output } => commands::list::execute(data, limit, output.as_deref()),

        Commands::Show { name, output } => commands::list::show(data, &name, output.as_deref()),

        Commands::StartsWith { prefix, output } => {
            commands::list::starts_with(data, &prefix, output.as_deref())
        }

        Commands::Remove { name, output, save } => {
            commands::remove::execute(data, &name, output.as_deref(), save.as_deref())
        }

        Commands::RemovePrefix {
            prefix,
            output,
            save,
        } => commands::remove::prefix(data, &prefix, output.as_deref(), save.as_deref()),

        Commands::Add { from, output, save } => {
            commands::edit::add(data, &from, output.as_deref(), save.as_deref())
        }

        Commands::Update {
            name,
            from,
            output,
            save,
        } => commands::edit::update(data, &name, &from, output.as_deref(), save.as_deref()),

        Commands::SortName { output } => commands::sort::by_name(data, output.as_deref()),

        Commands::SortBy { stat, output } => {
            commands::sort::by_stat(data, stat, output.as_deref())
        }

        Commands::Search { name, output } => {
            commands::search::execute(data, &name, output.as_deref())
        }

        Commands::GroupCounts { output } => commands::group::counts(data, output.as_deref()),

        Commands::ByLetter { letter, output } => {
            commands::group::by_letter(data, &letter, output.as_deref())
        }

        Commands::RemoveGrouped { name, output, save } => {
            commands::remove::grouped(data, &name, output.as_deref(), save.as_deref())
        }
    }
}
