use clap::Parser;
use optgroup::console::{self, ConsoleOptions};
use optgroup::core::config::{self, CliOverrides, ConfigSource};
use optgroup::core::definition::{DefinitionError, GroupDefinition};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "optgroup", about = "Drive an option group from the command line")]
struct Args {
    /// Option group definition (TOML)
    #[arg(short, long)]
    group: Option<PathBuf>,

    /// Config file to use instead of ~/.optgroup/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, overrides_with = "no_pretty")]
    pretty: bool,

    /// Compact JSON output, even if the config file asks for pretty
    #[arg(long, overrides_with = "pretty")]
    no_pretty: bool,

    /// Log level
    #[arg(long, value_parser = ["off", "error", "warn", "info", "debug", "trace"])]
    log_level: Option<String>,
}

impl Args {
    fn pretty_override(&self) -> Option<bool> {
        match (self.pretty, self.no_pretty) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let (file_config, source) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("optgroup: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    // The logger isn't up yet, so a failed default-config write goes to stderr too.
    if let ConfigSource::GenerateFailed { .. } = source {
        eprintln!("optgroup: {source}");
    }

    let pretty = args.pretty_override();
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            group: args.group,
            pretty,
            log_level: args.log_level,
        },
    );

    // Initialize file logger
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = match resolved.level_filter() {
        Ok(level) => Some(level),
        Err(e) => {
            eprintln!("optgroup: {e}; logging at debug");
            None
        }
    };

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level.unwrap_or(LevelFilter::Debug), log_config, log_file);
    }

    log::info!("optgroup starting up: {}", source);
    if level.is_none() {
        log::warn!("Unknown log level {:?}, logging at debug", resolved.log_level);
    }
    log::debug!("Resolved config: {:?}", resolved);

    let Some(group_path) = resolved.group_path else {
        eprintln!("optgroup: no option group given (use --group or OPTGROUP_GROUP)");
        return Ok(ExitCode::FAILURE);
    };

    let loaded = GroupDefinition::load(&group_path).and_then(|definition| {
        let title = definition.title.clone();
        let model = definition.into_model().map_err(DefinitionError::Invalid)?;
        Ok((model, title))
    });
    let (model, title) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Failed to load {}: {}", group_path.display(), e);
            eprintln!("optgroup: {}: {e}", group_path.display());
            return Ok(ExitCode::FAILURE);
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console::run(
        model,
        stdin.lock(),
        stdout.lock(),
        ConsoleOptions {
            pretty: resolved.pretty,
            title,
        },
    )?;
    Ok(ExitCode::SUCCESS)
}
