use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use skirmish::{timed, Engagement, MapConfig, Seed, Skirmish};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for generating skirmish maps and checking whether the first unit can
/// fire on the second.
#[derive(Debug, StructOpt)]
#[structopt(name = "skirmish")]
struct Opt {
    /// Path to a config file that defines the map to be generated. Supported
    /// formats: JSON, TOML. If not given, the default config is used.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for the map. Any text is allowed. Overrides the seed from the
    /// config file.
    #[structopt(short, long)]
    seed: Option<String>,

    /// Map radius, in hexes. Overrides the radius from the config file.
    #[structopt(short, long)]
    radius: Option<u16>,

    /// If given, output files will be written to this directory. The exact
    /// files that appear in the directory are defined by the output formats.
    /// See `--output-formats` for more info
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to write output in. Supported formats:
    ///
    /// cfg - The full config object used for the map, in TOML format
    ///
    /// json - The engagement report between the first two units, as JSON
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the map's full config in a human-readable file
    Cfg,
    /// Export the engagement report as JSON
    Json,
}

impl OutputFormat {
    fn file_name(self) -> &'static str {
        match self {
            Self::Cfg => "map.toml",
            Self::Json => "engagement.json",
        }
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<MapConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Serialize a value for the given output format
fn serialize(
    output_format: OutputFormat,
    config: &MapConfig,
    engagement: Option<&Engagement>,
) -> anyhow::Result<Vec<u8>> {
    fn to_json(value: &impl Serialize) -> anyhow::Result<Vec<u8>> {
        serde_json::to_vec_pretty(value).context("error serializing JSON")
    }

    match (output_format, engagement) {
        (OutputFormat::Cfg, _) => Ok(toml::to_string_pretty(config)
            .context("error serializing config")?
            .into_bytes()),
        (OutputFormat::Json, Some(engagement)) => to_json(engagement),
        (OutputFormat::Json, None) => {
            bail!("json output needs at least 2 units to engage")
        }
    }
}

/// Write one output file in the given format
fn gen_output(
    output_dir: &Path,
    output_format: OutputFormat,
    config: &MapConfig,
    engagement: Option<&Engagement>,
) -> anyhow::Result<()> {
    let output_file_path = output_dir.join(output_format.file_name());

    timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, &output_file_path
        ),
        log::Level::Info,
        {
            let bytes = serialize(output_format, config, engagement)?;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_file_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_file_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", &output_file_path)
            })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => MapConfig::default(),
    };
    if let Some(seed) = &opt.seed {
        config.seed = Seed::from(seed.as_str());
    }
    if let Some(radius) = opt.radius {
        config.radius = radius;
    }

    let skirmish = Skirmish::generate(config)?;
    let engagement = match skirmish.units() {
        [attacker, defender, ..] => {
            let engagement = skirmish.engage(*attacker, *defender)?;
            info!(
                "Engagement: hex {} -> hex {}, distance {}, {} intervening \
                hexes, {}",
                engagement.attacker,
                engagement.defender,
                engagement.distance,
                engagement.intervening().count(),
                if engagement.in_arc {
                    "in arc"
                } else {
                    "out of arc"
                }
            );
            Some(engagement)
        }
        units => {
            info!("Only {} unit(s) placed, nothing to engage", units.len());
            None
        }
    };

    // If an output dir was specified, write out output format(s) there
    if let Some(output_dir) = opt.output {
        if opt.output_formats.is_empty() {
            bail!("output dir was specified, but no output formats were given")
        }
        fs::create_dir_all(&output_dir)?;

        for output_format in opt.output_formats {
            gen_output(
                &output_dir,
                output_format,
                skirmish.config(),
                engagement.as_ref(),
            )?;
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
