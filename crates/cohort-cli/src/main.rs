use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "cohort",
    about = "Cohort — sector- and location-aware group builder",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a class.toml scaffold with default group sizes
    Init {
        /// Class name
        #[arg(short, long, default_value = "My class")]
        name: String,
        /// Where to write the config
        #[arg(short, long, default_value = "class.toml")]
        path: String,
    },
    /// Check a class config and member roster without grouping
    Validate {
        #[arg(short, long, default_value = "class.toml")]
        config: String,
        /// JSON array of members
        #[arg(short, long)]
        members: String,
    },
    /// Split the roster into balanced groups.
    ///
    /// Members are kept together by sector first, then by location.
    /// Refuses to run if the config or roster fails validation.
    Group {
        #[arg(short, long, default_value = "class.toml")]
        config: String,
        #[arg(short, long)]
        members: String,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// List registered sectors and locations for autocomplete
    Suggest {
        #[arg(short, long)]
        members: String,
        /// Only sectors containing this text (case-insensitive)
        #[arg(long)]
        sector: Option<String>,
        /// Only locations containing this text (case-insensitive)
        #[arg(long)]
        location: Option<String>,
    },
    /// Check manually edited groups against the class size bounds.
    ///
    /// Every listed member must be on the roster and in at most one group.
    Check {
        #[arg(short, long, default_value = "class.toml")]
        config: String,
        /// JSON array of members (the class roster)
        #[arg(short, long)]
        members: String,
        /// JSON array of {id, name, member_ids}
        #[arg(short, long)]
        groups: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cohort=info".parse()?)
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { name, path } => commands::init::init(&name, &path),
        Commands::Validate { config, members } => {
            commands::validate::validate(&config, &members)
        }
        Commands::Group { config, members, format } => {
            commands::group::group(&config, &members, &format)
        }
        Commands::Suggest { members, sector, location } => {
            commands::suggest::suggest(&members, sector.as_deref(), location.as_deref())
        }
        Commands::Check { config, members, groups } => {
            commands::check::check(&config, &members, &groups)
        }
    }
}
