use anyhow::{anyhow, bail, Result};
use appicon_core::{generate, GenerateOptions, IconCatalog, PlatformSelection, SourceImage};
use std::{
    env,
    path::{Path, PathBuf},
};

mod archive;

fn usage() {
    eprintln!("appicon <generate|validate> [options] <input>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  generate [options] <input>  Generate iOS/Android icon sets from a source image");
    eprintln!("  validate <input>            Check a source image against icon requirements");
    eprintln!();
    eprintln!("Generate options:");
    eprintln!("  -o, --output <dir>          Output directory (default: ./app-icons)");
    eprintln!("  -p, --platform <list>       Comma-separated platforms: ios,android (default: both)");
    eprintln!("      --round                 Also emit round Android launcher icons");
    eprintln!("      --zip                   Archive the output directory to <output>.zip");
    eprintln!("      --timestamp             Append a run timestamp to the output directory");
    eprintln!();
    eprintln!("The source image should be a square PNG or JPEG, 1024x1024 or larger.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  APPICON_LOG                 Log filter (default: info)");
}

/// Generate command configuration
struct GenerateCommand {
    input: PathBuf,
    output: PathBuf,
    platforms: String,
    round: bool,
    zip: bool,
    timestamp: bool,
}

impl GenerateCommand {
    fn parse(args: &[String]) -> Result<Self> {
        let mut cmd = GenerateCommand {
            input: PathBuf::new(),
            output: PathBuf::from("./app-icons"),
            platforms: "ios,android".to_string(),
            round: false,
            zip: false,
            timestamp: false,
        };
        let mut input = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    if i + 1 < args.len() {
                        cmd.output = PathBuf::from(&args[i + 1]);
                        i += 2;
                    } else {
                        bail!("--output requires a value");
                    }
                }
                "--platform" | "-p" => {
                    if i + 1 < args.len() {
                        cmd.platforms = args[i + 1].clone();
                        i += 2;
                    } else {
                        bail!("--platform requires a value (ios, android or both)");
                    }
                }
                "--round" => {
                    cmd.round = true;
                    i += 1;
                }
                "--zip" => {
                    cmd.zip = true;
                    i += 1;
                }
                "--timestamp" => {
                    cmd.timestamp = true;
                    i += 1;
                }
                arg if !arg.starts_with('-') => {
                    input = Some(PathBuf::from(arg));
                    i += 1;
                }
                other => bail!("Unknown flag: {}", other),
            }
        }

        cmd.input =
            input.ok_or_else(|| anyhow!("Usage: appicon generate [options] <input>"))?;
        Ok(cmd)
    }
}

fn cmd_generate(cmd: &GenerateCommand) -> Result<()> {
    if !cmd.input.exists() {
        bail!("Input file not found: {}", cmd.input.display());
    }

    let selection = PlatformSelection::parse(&cmd.platforms)?;

    let output = if cmd.timestamp {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        PathBuf::from(format!("{}-{}", cmd.output.display(), stamp))
    } else {
        cmd.output.clone()
    };

    let source = SourceImage::from_path(&cmd.input)?;
    println!(
        "Generating app icons from {} ({}x{} {})",
        cmd.input.display(),
        source.width(),
        source.height(),
        source.format_name()
    );

    let set = generate(
        &source,
        selection,
        &output,
        &IconCatalog::standard(),
        GenerateOptions {
            round_icons: cmd.round,
        },
    )?;

    for warning in &set.warnings {
        eprintln!("  Warning: {}", warning);
    }
    for icon in &set.icons {
        println!("  {} ({}x{})", icon.filename, icon.pixel_size, icon.pixel_size);
    }
    println!(
        "\nGenerated {} icons in {}",
        set.len(),
        output.display()
    );

    if cmd.zip {
        let zip_path = output.with_extension("zip");
        archive::zip_dir(&output, &zip_path)?;
        println!("Archived to {}", zip_path.display());
    }

    Ok(())
}

fn cmd_validate(input: &Path) -> Result<()> {
    if !input.exists() {
        bail!("Input file not found: {}", input.display());
    }

    let source = SourceImage::from_path(input)?;
    let validation = source.validate();

    println!(
        "{}: {}x{} {}",
        input.display(),
        validation.width,
        validation.height,
        source.format_name()
    );
    println!("  square:      {}", validation.is_square);
    println!("  alpha:       {}", validation.has_transparency);
    println!("  >= 1024px:   {}", validation.meets_recommended);

    if validation.warnings.is_empty() {
        println!("\nSource image meets all icon requirements.");
    } else {
        for warning in &validation.warnings {
            println!("  Warning: {}", warning);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Initialize tracing with env-filter support
    // Use APPICON_LOG env var for log level configuration, default to "info"
    use tracing_subscriber::EnvFilter;
    let filter =
        EnvFilter::try_from_env("APPICON_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        usage();
        return Ok(());
    }

    let cmd = args.remove(0);

    match cmd.as_str() {
        "generate" => {
            let cmd = GenerateCommand::parse(&args)?;
            cmd_generate(&cmd)?;
        }
        "validate" => {
            let input = args
                .first()
                .map(PathBuf::from)
                .ok_or_else(|| anyhow!("Usage: appicon validate <input>"))?;
            cmd_validate(&input)?;
        }
        "help" | "--help" | "-h" => {
            usage();
        }
        other => {
            usage();
            bail!("Unknown command: {}", other);
        }
    }

    Ok(())
}
