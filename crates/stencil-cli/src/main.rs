//! stencil CLI - Run the code generators outside of a build script
//!
//! Commands:
//! - `stencil api` - Generate repositories, models and controllers from a schema
//! - `stencil mappings` - Generate mapping extensions from registration calls
//! - `stencil handlers` - Generate handler plumbing from marked structs
//! - `stencil generate` - Run everything a stencil.toml manifest names
//! - `stencil check` - Validate a stencil.toml manifest

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod check;
mod generate;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(author, version, about = "Code generators for stencil projects", long_about = None)]
struct Cli {
    /// Log more detail (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate repositories, models and controllers from a JSON schema
    Api {
        /// Path to the schema document
        #[arg(short, long)]
        schema: String,

        /// Output directory for generated code
        #[arg(short, long)]
        output: String,

        /// stencil.toml whose [generator] section to use
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// Generate mapping extensions from registration calls
    Mappings {
        /// Source root to scan
        #[arg(short, long)]
        source: String,

        /// Output directory for generated code
        #[arg(short, long)]
        output: String,

        /// stencil.toml whose [generator] section to use
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// Generate handler plumbing from marked structs
    Handlers {
        /// Source root to scan
        #[arg(short, long)]
        source: String,

        /// Output directory for generated code
        #[arg(short, long)]
        output: String,

        /// stencil.toml whose [generator] section to use
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// Run every generator a manifest names
    Generate {
        /// Output directory for generated code
        #[arg(short, long)]
        output: String,

        /// Path to stencil.toml (default: ./stencil.toml)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Exit with an error when any entity or candidate was left out
        #[arg(long)]
        deny_failures: bool,
    },

    /// Validate a stencil.toml manifest
    Check {
        /// Path to stencil.toml (default: ./stencil.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Api {
            schema,
            output,
            manifest,
        } => {
            generate::api(&schema, &output, manifest)?;
        }
        Commands::Mappings {
            source,
            output,
            manifest,
        } => {
            generate::from_sources(generate::SourceKind::Mappings, &source, &output, manifest)?;
        }
        Commands::Handlers {
            source,
            output,
            manifest,
        } => {
            generate::from_sources(generate::SourceKind::Handlers, &source, &output, manifest)?;
        }
        Commands::Generate {
            output,
            manifest,
            deny_failures,
        } => {
            generate::all(&output, manifest, deny_failures)?;
        }
        Commands::Check { manifest } => {
            check::run(manifest)?;
        }
    }

    Ok(())
}
