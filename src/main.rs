use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use console::{style, StyledObject};
use log::{debug, info, warn};
use rand::rngs::OsRng;
use serde::Serialize;

use greengrow_passgen::config::{MAX_LENGTH, MIN_LENGTH};
use greengrow_passgen::{
    check_password_strength, generate_password_with, GenerationConfig, PasswordError, Preset,
    RandomSource, Result, StrengthColor, StrengthReport, PASSWORD_OPTIONS,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate and score GreenGrow account passwords",
    long_about = None
)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Score a password against the strength rubric
    Check {
        /// Password to score; read from stdin when omitted
        password: Option<String>,
    },

    /// List the built-in presets
    Presets,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Preset to start from
    #[arg(long, short, env = "GREENGROW_PRESET", default_value = "strong")]
    preset: Preset,

    /// JSON options file, used instead of the preset
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of characters
    #[arg(long, short, value_parser = clap::value_parser!(u16).range(8..=32))]
    length: Option<u16>,

    #[arg(long)]
    no_uppercase: bool,

    #[arg(long)]
    no_lowercase: bool,

    #[arg(long)]
    no_numbers: bool,

    #[arg(long)]
    no_symbols: bool,

    /// Keep look-alike characters (0 O 1 l I)
    #[arg(long)]
    allow_similar: bool,

    /// How many passwords to print
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,

    /// Draw from the operating system's random source
    #[arg(long)]
    secure: bool,
}

impl GenerateArgs {
    /// Builds the options from the config file or preset, then the flags.
    /// The length always ends up within the offered 8..=32 range.
    fn resolve_config(&self) -> Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!("loading password options from {}", path.display());
                GenerationConfig::load(path)?
            }
            None => self.preset.config(),
        };

        if let Some(length) = self.length {
            config = config.length(usize::from(length));
        }
        if self.no_uppercase {
            config = config.uppercase(false);
        }
        if self.no_lowercase {
            config = config.lowercase(false);
        }
        if self.no_numbers {
            config = config.numbers(false);
        }
        if self.no_symbols {
            config = config.symbols(false);
        }
        if self.allow_similar {
            config = config.exclude_similar(false);
        }

        let clamped = config.with_clamped_length();
        if clamped.length != config.length {
            warn!(
                "password length {} is outside {}..={}, using {}",
                config.length, MIN_LENGTH, MAX_LENGTH, clamped.length
            );
        }

        Ok(clamped)
    }
}

#[derive(Serialize)]
struct Generated {
    password: String,
    report: StrengthReport,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("command line: {cli:?}");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => generate(&args, cli.json),
        Command::Check { password } => {
            let password = match password {
                Some(password) => password,
                None => read_password_line(io::stdin().lock())?,
            };
            check(&password, cli.json)
        }
        Command::Presets => presets(cli.json),
    }
}

fn generate(args: &GenerateArgs, json: bool) -> Result<()> {
    let config = args.resolve_config()?;
    if let Some(preset) = Preset::matching(&config) {
        debug!("options match the {preset} preset");
    }

    let passwords = if args.secure {
        generate_batch(&config, args.count, &mut OsRng)?
    } else {
        generate_batch(&config, args.count, &mut rand::thread_rng())?
    };

    let generated: Vec<Generated> = passwords
        .into_iter()
        .map(|password| {
            let report = check_password_strength(&password);
            Generated { password, report }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
        return Ok(());
    }

    for entry in &generated {
        println!(
            "{}  {}",
            entry.password,
            tinted(entry.report.color, entry.report.strength.as_str())
        );
    }

    Ok(())
}

fn generate_batch<R: RandomSource>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    (0..count).map(|_| generate_password_with(config, &mut *rng)).collect()
}

fn check(password: &str, json: bool) -> Result<()> {
    let report = check_password_strength(password);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Strength: {}",
        tinted(report.color, report.strength.as_str().to_uppercase())
    );
    println!("Score:    {}/{}", report.score, report.max_score());
    println!("Length:   {} characters", password.chars().count());
    println!("Feedback:");
    for item in &report.feedback {
        println!("  - {item}");
    }

    Ok(())
}

fn presets(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&PASSWORD_OPTIONS)?);
        return Ok(());
    }

    for preset in Preset::ALL {
        let config = preset.config();
        println!(
            "{:<8} length={:<3} upper={} lower={} numbers={} symbols={} exclude-similar={}",
            preset,
            config.length,
            config.include_uppercase,
            config.include_lowercase,
            config.include_numbers,
            config.include_symbols,
            config.exclude_similar
        );
    }

    Ok(())
}

fn tinted<D>(color: StrengthColor, value: D) -> StyledObject<D> {
    match color {
        StrengthColor::Red => style(value).red(),
        StrengthColor::Yellow => style(value).yellow(),
        StrengthColor::Green => style(value).green(),
    }
}

/// Reads one line, dropping only the line terminator.
fn read_password_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|err| match err.kind() {
            io::ErrorKind::InvalidData => {
                PasswordError::InvalidInput("password is not valid UTF-8".to_string())
            }
            _ => PasswordError::FileSystem(err),
        })?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
