use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use markdown_sitegen_config::{DEFAULT_FILE, SiteConfig};
use markdown_sitegen_engine::{RenderOptions, build_site, markdown_to_html};
use std::{fs, path::PathBuf, process};

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(about = "Build a static site from Markdown content")]
struct Cli {
    /// Log every file touched
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert the content tree into the output directory
    Build(BuildArgs),
    /// Convert a single Markdown file to an HTML fragment
    Render {
        /// Input Markdown file
        file: PathBuf,

        /// Output HTML file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Escape attribute values
        #[arg(long)]
        escape_attributes: bool,
    },
    /// Write a config file holding the defaults
    InitConfig {
        #[arg(short, long, default_value = DEFAULT_FILE)]
        config: PathBuf,
    },
}

#[derive(Args, Default)]
struct BuildArgs {
    /// Config file; missing means defaults
    #[arg(short, long, default_value = DEFAULT_FILE)]
    config: PathBuf,

    /// Markdown content directory
    #[arg(long)]
    content: Option<PathBuf>,

    /// Static asset directory
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Page template
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep building past pages that fail to convert
    #[arg(long)]
    keep_going: bool,
}

impl BuildArgs {
    fn apply(&self, mut config: SiteConfig) -> SiteConfig {
        if let Some(content) = &self.content {
            config.content_dir = content.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        if let Some(template) = &self.template {
            config.template_path = template.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if self.keep_going {
            config.build.fail_fast = false;
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Build(args) => build(&args),
        Command::Render {
            file,
            output,
            escape_attributes,
        } => render(file, output, RenderOptions { escape_attributes }),
        Command::InitConfig { config } => init_config(config),
    }
}

fn build(args: &BuildArgs) -> Result<()> {
    let config = SiteConfig::load_or_default(&args.config)?;
    let config = args.apply(config);
    log::debug!("Using config {config:?}");

    let report = build_site(&config)?;
    if !report.is_success() {
        bail!("{} page(s) failed to convert", report.failures.len());
    }
    Ok(())
}

fn render(file: PathBuf, output: Option<PathBuf>, options: RenderOptions) -> Result<()> {
    let markdown =
        fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
    let html =
        markdown_to_html(&markdown, &options).with_context(|| format!("converting {}", file.display()))?;

    match output {
        Some(output) => {
            fs::write(&output, html).with_context(|| format!("writing {}", output.display()))?;
            log::info!("Created {}", output.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn init_config(path: PathBuf) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    SiteConfig::default().save_to_path(&path)?;
    log::info!("Wrote default config to {}", path.display());
    Ok(())
}
