mod binary_utils;
mod containers;
mod error;
mod report;
mod sdk;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use containers::vpcf::{self, ResourcePaths, DEFAULT_GAME};
use report::{write_report, BuildReport};
use sdk::SdkLayout;

/// Builds a compiled particle system (.vpcf_c) that renders an existing compiled
/// texture, without going through the resource compiler.
#[derive(Debug, Parser)]
#[command(name = "dry_erase", version)]
struct Args {
    /// Top directory of the SDK installation. Defaults to the directory the
    /// executable is in.
    #[arg(long, env = "DRY_ERASE_SDK")]
    sdk: Option<PathBuf>,

    /// Game directory inside the SDK to use. Defaults to "hlvr".
    #[arg(long)]
    game: Option<String>,

    /// Game directory relative path of the .vtex resource.
    #[arg(long)]
    vtex: String,

    /// Game directory relative path to write the .vpcf resource to. Defaults to
    /// particles/dry_erase/<texture name>.vpcf.
    #[arg(long)]
    vpcf: Option<String>,

    /// Also write a JSON build report to this file.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().compact().without_time())
            .with(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env_lossy(),
            ),
    )
    .context("Failed to set global tracing subscriber")?;

    run(Args::parse())?;
    Ok(())
}

fn run(args: Args) -> anyhow::Result<PathBuf> {
    let sdk_root = match args.sdk {
        Some(sdk) => sdk,
        None => executable_dir().context("Unable to get SDK location")?,
    };
    let game = args.game.unwrap_or_else(|| {
        warn!("No game directory specified, using \"{}\"", DEFAULT_GAME);
        DEFAULT_GAME.to_string()
    });

    let paths = ResourcePaths::new(&args.vtex, args.vpcf.as_deref(), &game);
    let layout = SdkLayout::new(&sdk_root, &paths.game);
    info!("Using game directory {:?}", layout.game_dir());

    let texture = layout.read_texture(&paths.texture)?;
    let file = vpcf::build(&paths, &texture).context("Failed to create .vpcf file")?;
    info!("CRC-32 checksum = 0x{:08x}", file.checksum);

    let written = layout.write_particle(&paths.output, &file.bytes)?;
    info!("Created new .vpcf file {:?}", written);

    if let Some(report_path) = &args.report {
        write_report(report_path, &BuildReport::new(&paths, &file, &written))?;
        info!("Wrote build report {:?}", report_path);
    }

    Ok(written)
}

fn executable_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe.parent().map(Path::to_path_buf).unwrap_or_default())
}
