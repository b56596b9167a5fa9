mod preview;

use std::fs;
use std::path::PathBuf;

use miette::{IntoDiagnostic, WrapErr, bail};
use tickgrid::params::ids;
use tickgrid::render::fit_to_viewport;
use tickgrid::{DEFAULT_FILENAME, KeyValueParams, LayoutParams, compute_layout, export_svg, render_layout};

use preview::PixmapSurface;

const USAGE: &str = "\
Usage: tickgrid [key=value ...] [--params FILE] [--out PATH] [--preview PATH.png] [--viewport WxH]

Keys:
  papersize          A6..A1 or Custom (default A3)
  cardType           card preset or Custom (default Business Card UK (85x55mm))
  angle              rotation in degrees, -90..90
  xOffset, yOffset   grid shift in mm, -100..100
  customPaperWidth, customPaperHeight, customCardWidth, customCardHeight
                     mm, 1..1200, used when Custom is selected

Set RUST_LOG=tickgrid=debug for layout details.";

struct Options {
    params: KeyValueParams,
    out: PathBuf,
    preview: Option<PathBuf>,
    viewport: (u32, u32),
}

fn main() -> miette::Result<()> {
    // Logs go to stderr; stdout carries the summary line.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return Ok(());
    }
    let opts = parse_args(&args)?;

    for key in opts.params.keys() {
        if !ids::ALL.contains(&key) {
            tracing::warn!("ignoring unknown parameter `{key}`");
        }
    }

    let params = LayoutParams::from_source(&opts.params)?;
    let layout = compute_layout(&params)?;
    if layout.is_empty() {
        tracing::warn!("no {} card fits on a {} page", layout.setup.card, layout.setup.paper);
    }

    let svg = export_svg(layout.setup.paper, &layout.segments)?;
    fs::write(&opts.out, svg)
        .into_diagnostic()
        .wrap_err_with(|| format!("writing {}", opts.out.display()))?;

    if let Some(path) = &opts.preview {
        let (vw, vh) = opts.viewport;
        let placement = fit_to_viewport(vw, vh, layout.setup.paper);
        let mut surface = PixmapSurface::new(placement.width, placement.height)?;
        render_layout(&layout, &mut surface);
        surface.save_png(path)?;
        tracing::info!("preview {}x{} written to {}", placement.width, placement.height, path.display());
    }

    println!(
        "{} cards, {} ticks -> {}",
        layout.registry.len(),
        layout.ticks.len(),
        opts.out.display()
    );
    Ok(())
}

fn parse_args(args: &[String]) -> miette::Result<Options> {
    let mut opts = Options {
        params: KeyValueParams::new(),
        out: PathBuf::from(DEFAULT_FILENAME),
        preview: None,
        viewport: (1280, 800),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" | "-o" => opts.out = PathBuf::from(value_for(arg, iter.next())?),
            "--preview" => opts.preview = Some(PathBuf::from(value_for(arg, iter.next())?)),
            "--viewport" => opts.viewport = parse_viewport(value_for(arg, iter.next())?)?,
            "--params" => {
                let path = value_for(arg, iter.next())?;
                let text = fs::read_to_string(path)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("reading parameter file {path}"))?;
                let file = text
                    .parse::<KeyValueParams>()
                    .wrap_err_with(|| format!("in parameter file {path}"))?;
                opts.params.merge(file);
            }
            other if other.starts_with('-') => bail!("unknown option `{other}`\n\n{USAGE}"),
            other => match KeyValueParams::parse_pair(other) {
                Some((k, v)) => opts.params.set(k, v),
                None => bail!("expected key=value, got `{other}`"),
            },
        }
    }
    Ok(opts)
}

fn value_for<'a>(flag: &str, value: Option<&'a String>) -> miette::Result<&'a str> {
    match value {
        Some(v) => Ok(v.as_str()),
        None => bail!("`{flag}` needs a value"),
    }
}

fn parse_viewport(text: &str) -> miette::Result<(u32, u32)> {
    let parsed = text
        .split_once(['x', 'X'])
        .and_then(|(w, h)| Some((w.trim().parse().ok()?, h.trim().parse().ok()?)));
    match parsed {
        Some(size) => Ok(size),
        None => bail!("viewport must look like 1280x800, got `{text}`"),
    }
}
