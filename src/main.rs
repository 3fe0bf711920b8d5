use std::fs::File;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use accordclient::document::{render_tree, ChannelDocument};
use accordclient::{Client, ClientConfig};

/// Build channels from a JSON snapshot and print the resulting guild tree.
#[derive(Parser)]
#[command(name = "accord-channels", version)]
struct Args {
    /// Snapshot with `guilds` and `channels` arrays; `-` reads stdin
    #[arg(default_value = "-")]
    input: std::path::PathBuf,

    /// Build channels of guilds missing from the snapshot (they are not cached)
    #[arg(long)]
    allow_unknown_guild: bool,

    /// Treat the channel records as coming from an interaction payload
    #[arg(long)]
    from_interaction: bool,
}

fn load(input: &Path) -> accordclient::Result<ChannelDocument> {
    if input.as_os_str() == "-" {
        ChannelDocument::from_reader(io::stdin().lock())
    } else {
        ChannelDocument::from_reader(File::open(input)?)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "accordclient=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let document = match load(&args.input) {
        Ok(document) => document,
        Err(e) => {
            tracing::error!("failed to load {}: {e}", args.input.display());
            return ExitCode::FAILURE;
        }
    };

    let mut options = config.default_options();
    options.allow_unknown_guild |= args.allow_unknown_guild;
    options.from_interaction = args.from_interaction;

    let client = Client::new(config);
    let report = document.apply(&client, options);
    tracing::info!(
        guilds = client.guilds().len(),
        created = report.created.len(),
        skipped = report.skipped.len(),
        "applied snapshot"
    );

    print!("{}", render_tree(&client));
    ExitCode::SUCCESS
}
