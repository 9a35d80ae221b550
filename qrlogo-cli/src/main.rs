use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "qrlogo", version, about = "Place a logo in the centre of QR codes")]
struct Cli {
    /// Payloads to encode (e.g. URLs); each one becomes `qr-NNN.png`.
    #[arg(required_unless_present = "print_config")]
    payloads: Vec<String>,

    /// The logo to place in the centre of the code.
    #[arg(long, required_unless_present = "print_config")]
    logo: Option<PathBuf>,

    /// Output image directory.
    #[arg(long, default_value = "qrcodes")]
    output_dir: PathBuf,

    /// JSON options file; flags given on the command line take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background colour (SVG 1.1 colour name or #rrggbb) [default: white].
    #[arg(long)]
    background_color: Option<String>,

    /// Code colour (SVG 1.1 colour name or #rrggbb) [default: black].
    #[arg(long)]
    code_color: Option<String>,

    /// Remove the quiet-zone border around the whole code.
    #[arg(long)]
    disable_border: bool,

    /// Fraction [0,1] of the code to cover with the logo; should not exceed 0.3 [default: 0.2].
    #[arg(long)]
    logo_coverage: Option<f64>,

    /// Padding around the logo: none, square, circle or dilate [default: dilate].
    #[arg(long)]
    padding: Option<String>,

    /// Padding margin around the logo in pixels [default: 20].
    #[arg(long)]
    padding_weight: Option<u32>,

    /// Side length of the output image in pixels [default: 2048].
    #[arg(long)]
    qr_size: Option<u32>,

    /// Print the effective options as JSON and exit.
    #[arg(long)]
    print_config: bool,

    /// Worker threads for rendering several payloads (defaults to all cores).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = resolve_options(&cli)?;

    if cli.print_config {
        println!("{}", opts.to_json_pretty()?);
        return Ok(());
    }

    let logo_path = cli.logo.as_deref().context("--logo is required")?;
    let logo = qrlogo::open_logo(logo_path)?;
    let compositor = qrlogo::Compositor::new(logo, opts)?;

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("create output dir '{}'", cli.output_dir.display()))?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cli.threads.unwrap_or(0))
        .build()
        .context("build render thread pool")?;

    let failures: Vec<(usize, String)> = pool.install(|| {
        cli.payloads
            .par_iter()
            .enumerate()
            .filter_map(|(i, payload)| {
                let out = output_path(&cli.output_dir, i);
                match render_one(&compositor, payload, &out) {
                    Ok(()) => {
                        tracing::info!(payload = %payload, path = %out.display(), "wrote");
                        None
                    }
                    Err(e) => {
                        tracing::error!(payload = %payload, error = %e, "failed");
                        Some((i, format!("{e:#}")))
                    }
                }
            })
            .collect()
    });

    if !failures.is_empty() {
        anyhow::bail!(
            "{} of {} payloads failed (first: #{} {})",
            failures.len(),
            cli.payloads.len(),
            failures[0].0 + 1,
            failures[0].1
        );
    }
    Ok(())
}

fn resolve_options(cli: &Cli) -> anyhow::Result<qrlogo::LogoOptions> {
    let base = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            qrlogo::LogoOptions::from_json(&json)
                .with_context(|| format!("parse config '{}'", path.display()))?
        }
        None => qrlogo::LogoOptions::default(),
    };

    let mut b = qrlogo::LogoOptionsBuilder::from_options(base);
    if let Some(name) = &cli.padding {
        b = b.padding(name.parse()?);
    }
    if let Some(c) = &cli.background_color {
        b = b.background(c.parse()?);
    }
    if let Some(c) = &cli.code_color {
        b = b.code_color(c.parse()?);
    }
    if cli.disable_border {
        b = b.disable_border(true);
    }
    if let Some(v) = cli.logo_coverage {
        b = b.logo_coverage(v);
    }
    if let Some(v) = cli.padding_weight {
        b = b.padding_weight(v);
    }
    if let Some(v) = cli.qr_size {
        b = b.qr_size(v);
    }
    Ok(b.build()?)
}

fn render_one(
    compositor: &qrlogo::Compositor,
    payload: &str,
    out: &Path,
) -> anyhow::Result<()> {
    let img = compositor.render(payload)?;
    qrlogo::save_png(&img, out)?;
    Ok(())
}

fn output_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("qr-{:03}.png", index + 1))
}
