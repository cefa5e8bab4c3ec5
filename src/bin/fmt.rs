//! rulenorm-fmt: CLI tool for normalizing rule-list files.

use clap::{Args, Parser, Subcommand};
use rulenorm::{Engine, ListMeta, NormalizeOptions};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rulenorm-fmt")]
#[command(author = "KuGouGo")]
#[command(version = "0.1.0")]
#[command(about = "Normalize rule lists into canonical .list and sing-box JSON artifacts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Header banner options shared by all subcommands.
#[derive(Args)]
struct BannerArgs {
    /// List name for the header (defaults to the input file stem)
    #[arg(long)]
    name: Option<String>,

    /// Author line for the header
    #[arg(long, default_value = "KuGouGo")]
    author: String,

    /// Repository line for the header
    #[arg(long, default_value = "https://github.com/KuGouGo/Rules")]
    repo: String,

    /// Keep rules covered by a broader DOMAIN-SUFFIX rule
    #[arg(long)]
    no_dedup: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a rule list in place
    Format {
        /// Input .list file (rewritten in place)
        file: PathBuf,

        /// Write a <file>.bak copy before rewriting
        #[arg(long)]
        backup: bool,

        /// Also write the JSON artifact to this path
        #[arg(long)]
        json: Option<PathBuf>,

        #[command(flatten)]
        banner: BannerArgs,
    },

    /// Convert a rule list to the JSON artifact only
    Convert {
        /// Input .list file
        input: PathBuf,

        /// Output .json file
        output: PathBuf,

        #[command(flatten)]
        banner: BannerArgs,
    },

    /// Normalize every *.list file directly under a directory
    Batch {
        /// Directory containing .list files
        dir: PathBuf,

        /// Write <file>.bak copies before rewriting
        #[arg(long)]
        backup: bool,

        /// Also write a .json artifact next to each list
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        banner: BannerArgs,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Format {
            file,
            backup,
            json,
            banner,
        } => format_file(&file, backup, json.as_deref(), &banner),
        Commands::Convert {
            input,
            output,
            banner,
        } => convert_file(&input, &output, &banner),
        Commands::Batch {
            dir,
            backup,
            json,
            banner,
        } => batch_dir(&dir, backup, json, &banner),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Build an engine for one input file, deriving the list name from the file
/// stem when not given explicitly.
fn engine_for(file: &Path, banner: &BannerArgs) -> Engine {
    let name = banner.name.clone().unwrap_or_else(|| {
        file.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "rules".to_string())
    });
    Engine::new(
        ListMeta::new(name, banner.author.clone(), banner.repo.clone()),
        NormalizeOptions {
            dedup: !banner.no_dedup,
        },
    )
}

fn format_file(
    file: &Path,
    backup: bool,
    json: Option<&Path>,
    banner: &BannerArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(file)?;
    let out = engine_for(file, banner).process(&content)?;

    if backup {
        let bak = backup_path(file);
        fs::copy(file, &bak)?;
        log::info!("wrote backup {:?}", bak);
    }

    fs::write(file, &out.list_text)?;
    if let Some(json_path) = json {
        fs::write(json_path, &out.json_text)?;
    }

    println!(
        "Normalized {:?}: {} rules ({} invalid lines skipped)",
        file,
        out.stats.total(),
        out.invalid_lines
    );
    Ok(())
}

fn convert_file(
    input: &Path,
    output: &Path,
    banner: &BannerArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let out = engine_for(input, banner).process(&content)?;

    fs::write(output, &out.json_text)?;

    println!(
        "Converted {:?} -> {:?} ({} rules)",
        input,
        output,
        out.stats.total()
    );
    Ok(())
}

fn batch_dir(
    dir: &Path,
    backup: bool,
    json: bool,
    banner: &BannerArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "list"))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(format!("no .list files found in {:?}", dir).into());
    }

    let mut failed = 0usize;
    for file in &files {
        let json_path = json.then(|| file.with_extension("json"));
        if let Err(e) = format_file(file, backup, json_path.as_deref(), banner) {
            eprintln!("  Warning: failed to normalize {:?}: {}", file, e);
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, files.len()).into());
    }
    println!("Normalized {} files in {:?}", files.len(), dir);
    Ok(())
}

/// Backup path for an in-place rewrite: `emby.list` -> `emby.list.bak`.
fn backup_path(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}
