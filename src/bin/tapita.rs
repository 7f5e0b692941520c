use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use tapita::{
    CoverConfig, CoverRequest, DEFAULT_IDENTICON_URL, IdenticonClient, IdenticonOpts,
    OutputTarget, ParleyTextDevice, render_cover, write_png,
};

/// Generate a book cover PNG.
#[derive(Parser, Debug)]
#[command(name = "tapita", version)]
struct Cli {
    /// Book title.
    #[arg(short, long)]
    title: String,

    /// Optional subtitle.
    #[arg(short, long)]
    subtitle: Option<String>,

    /// Author name.
    #[arg(short, long)]
    author: String,

    /// Output PNG path, or `-` for stdout.
    #[arg(short, long, default_value = "cover.png")]
    output: String,

    /// TrueType/OpenType font file. Defaults to the bundled DejaVu Sans Mono.
    #[arg(long)]
    font: Option<PathBuf>,

    /// JSON cover config. Missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Identicon endpoint.
    #[arg(long, env = "TAPITA_IDENTICON_URL", default_value = DEFAULT_IDENTICON_URL)]
    identicon_url: String,

    /// Artwork request timeout in seconds (0 disables it).
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CoverConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => CoverConfig::default(),
    };
    let request = CoverRequest::new(cli.title, cli.subtitle, cli.author)?;

    let mut text = match &cli.font {
        Some(path) => ParleyTextDevice::from_path(path)?,
        None => ParleyTextDevice::bundled()?,
    };
    let artwork = IdenticonClient::new(IdenticonOpts {
        base_url: cli.identicon_url,
        timeout: (cli.timeout_secs > 0).then(|| Duration::from_secs(cli.timeout_secs)),
    })?;

    let cover = render_cover(&request, &config, &mut text, &artwork)
        .with_context(|| format!("render cover for '{}'", request.title()))?;

    let target = OutputTarget::from_arg(&cli.output);
    write_png(&cover, &target)?;
    if let OutputTarget::File(path) = &target {
        tracing::info!(path = %path.display(), "wrote cover");
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
