use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "zonacero", version)]
struct Cli {
    /// Log diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the hero overlay placement for a container size.
    Place(PlaceArgs),
    /// Preload the critical images and report the loading gate.
    Preload(PreloadArgs),
    /// Resolve a location path against the page table.
    Route(RouteArgs),
}

#[derive(Args, Debug)]
struct PlaceArgs {
    /// Container size, e.g. `1920x1080`.
    #[arg(long)]
    container: String,

    /// Background image to read the natural size from.
    #[arg(long, conflicts_with = "image_size", required_unless_present = "image_size")]
    image: Option<PathBuf>,

    /// Natural background size, e.g. `3840x2160`.
    #[arg(long)]
    image_size: Option<String>,

    /// Site config providing the anchor (defaults to the hero logo anchor).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overlay height / width; when set the overlay box is printed too.
    #[arg(long)]
    overlay_aspect: Option<f64>,
}

#[derive(Args, Debug)]
struct PreloadArgs {
    /// Site config; image paths resolve against its directory.
    #[arg(long)]
    config: PathBuf,

    /// Treat the loading countdown as already elapsed.
    #[arg(long)]
    timer_done: bool,
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Site config (defaults to the built-in page table).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Location path, e.g. `/Lore`.
    path: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
    match cli.cmd {
        Command::Place(args) => cmd_place(args),
        Command::Preload(args) => cmd_preload(args),
        Command::Route(args) => cmd_route(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<zonacero::SiteConfig> {
    match path {
        Some(p) => {
            zonacero::SiteConfig::load(p).with_context(|| format!("load config '{}'", p.display()))
        }
        None => Ok(zonacero::SiteConfig::default()),
    }
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{s}");
    Ok(())
}

fn cmd_place(args: PlaceArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let container = zonacero::parse_dimensions(&args.container)?;

    let outcome = match (&args.image, &args.image_size) {
        (Some(path), _) => zonacero::preload_image(path),
        (None, Some(s)) => zonacero::AssetOutcome::Loaded {
            size: zonacero::parse_dimensions(s)?,
        },
        (None, None) => anyhow::bail!("either --image or --image-size is required"),
    };

    let mut tracker = cfg.hero_tracker();
    tracker.on_resize(container);
    let placement = match outcome {
        zonacero::AssetOutcome::Loaded { size } => tracker.on_image_loaded(size),
        zonacero::AssetOutcome::Failed { .. } => tracker.on_image_failed(),
    };

    let mut out = serde_json::json!({ "placement": placement });
    if let Some(aspect) = args.overlay_aspect
        && placement.ready
    {
        let r = placement.overlay_rect(aspect);
        out["overlay_rect"] = serde_json::json!({
            "x0": r.x0, "y0": r.y0, "x1": r.x1, "y1": r.y1,
        });
    }
    print_json(&out)
}

fn cmd_preload(args: PreloadArgs) -> anyhow::Result<()> {
    let cfg = load_config(Some(&args.config))?;
    let root = args.config.parent().unwrap_or_else(|| Path::new("."));

    let mut gate = cfg.loading_gate();
    gate.assets_mut().preload_all(root);
    if args.timer_done {
        gate.mark_timer_done();
    }

    let assets = gate
        .assets()
        .iter()
        .map(|(name, outcome)| {
            let v = serde_json::to_value(outcome)
                .with_context(|| format!("serialize outcome for '{name}'"))?;
            Ok((name.to_string(), v))
        })
        .collect::<anyhow::Result<serde_json::Map<String, serde_json::Value>>>()?;

    print_json(&serde_json::json!({
        "assets": assets,
        "assets_settled": gate.assets().is_settled(),
        "gate": {
            "timer_done": gate.timer_done(),
            "open": gate.is_open(),
            "loading": gate.is_loading(),
        },
        "loading_duration_ms": cfg.loading_duration_ms,
    }))
}

fn cmd_route(args: RouteArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let site = cfg.site_map()?;
    print_json(&serde_json::json!({
        "route": site.resolve(&args.path),
        "nav": site.nav_links(&args.path),
    }))
}
