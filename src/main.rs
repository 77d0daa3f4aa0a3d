// SPDX-License-Identifier: MPL-2.0
use movie_maker::config::{self, Config, ThemePreference};
use movie_maker::error::{Error, Result};
use movie_maker::icon::{HttpFetcher, IconSize, ThemeCache};
use movie_maker::{clock, logging};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
movie-maker

USAGE:
  movie-maker time <MS> [--keep-ms]
  movie-maker icon <NAME> [--theme dark|light|system] [--size N] [--out FILE.png]

OPTIONS:
  --config PATH   Read settings from PATH instead of the user config file
  -h, --help      Print this help
";

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(mut args: pico_args::Arguments) -> Result<()> {
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").map_err(arg_error)?;
    let config = match config_path {
        Some(path) => config::load_from_path(&path)?,
        None => config::load()?,
    };

    match args.subcommand().map_err(arg_error)?.as_deref() {
        Some("time") => {
            let keep_ms = args.contains("--keep-ms");
            let ms: f64 = args.free_from_str().map_err(arg_error)?;
            reject_leftovers(args)?;
            println!("{}", clock::ms_to_time(ms, keep_ms));
            Ok(())
        }
        Some("icon") => {
            let theme = args
                .opt_value_from_fn("--theme", parse_theme)
                .map_err(arg_error)?;
            let size: Option<u32> = args.opt_value_from_str("--size").map_err(arg_error)?;
            let out: Option<PathBuf> = args.opt_value_from_str("--out").map_err(arg_error)?;
            let name: String = args.free_from_str().map_err(arg_error)?;
            reject_leftovers(args)?;
            render_icon(&config, &name, theme, size, out).await
        }
        Some(other) => Err(Error::Config(format!("unknown command: {other}"))),
        None => {
            print!("{HELP}");
            Ok(())
        }
    }
}

async fn render_icon(
    config: &Config,
    name: &str,
    theme: Option<ThemePreference>,
    size: Option<u32>,
    out: Option<PathBuf>,
) -> Result<()> {
    let size = size.map_or_else(|| config.icon_size(), IconSize::square);
    let theme = theme.unwrap_or_else(|| config.theme()).resolve();

    let template = config.url_template()?;
    let url = template.url_for(name);

    let cache = ThemeCache::new(HttpFetcher::new(config.max_icon_bytes())?).with_size(size);

    let image = cache.themed_image(&url, theme).await?;
    let raster = image.raster();

    match out {
        Some(path) => {
            std::fs::write(&path, raster.encode_png()?)?;
            tracing::info!("Wrote {name} ({theme:?}) to {}", path.display());
        }
        None => println!(
            "{name}: {}x{} {theme:?} icon from {url}",
            raster.width(),
            raster.height()
        ),
    }
    Ok(())
}

fn parse_theme(value: &str) -> std::result::Result<ThemePreference, String> {
    ThemePreference::from_arg(value).ok_or_else(|| format!("unknown theme: {value}"))
}

fn reject_leftovers(args: pico_args::Arguments) -> Result<()> {
    let rest = args.finish();
    if rest.is_empty() {
        return Ok(());
    }
    Err(Error::Config(format!("unexpected arguments: {rest:?}")))
}

fn arg_error(err: pico_args::Error) -> Error {
    Error::Config(err.to_string())
}
