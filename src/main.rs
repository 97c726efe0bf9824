//! Design Engineer CLI
//!
//! Usage:
//!   design-engineer [OPTIONS] <COMMAND>
//!
//! Commands:
//!   illustration  Render a teaching illustration to SVG
//!   token         Name design tokens and export them
//!   certificate   Render certificate PDFs and claim certificates
//!
//! Options:
//!   -c, --config <FILE>  Site configuration (TOML format)
//!   -h, --help           Print help

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use design_engineer::certificate::{
    verification_url, AnyCertificate, CertificateApi, CertificateCard, CertificateError, ClaimRequest, DownloadSink, FileSink,
    HttpCertificateApi, Platform, Track, TrackCertificateCard,
};
use design_engineer::clipboard::{Clipboard, SystemClipboard};
use design_engineer::illustration::{self, illustration_map, render_illustration, RenderMode};
use design_engineer::tokens::{
    parse_component_spec, BuilderState, Category, EducationalState, ExportOptions, NamingConvention,
    OutputFormat, TokenError,
};
use design_engineer::{Error, Palette, Result, SiteConfig, SvgConfig};

#[derive(Parser)]
#[command(name = "design-engineer")]
#[command(about = "Design Engineer Course toolkit: illustrations, certificates and token naming")]
struct Cli {
    /// Site configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a teaching illustration to SVG
    Illustration(IllustrationArgs),

    /// Name design tokens and export them
    #[command(subcommand)]
    Token(TokenCommand),

    /// Render certificate PDFs and claim certificates
    #[command(subcommand)]
    Certificate(CertificateCommand),
}

#[derive(Args)]
struct IllustrationArgs {
    /// Illustration key, e.g. box-model
    key: Option<String>,

    /// List every registered key
    #[arg(short, long)]
    list: bool,

    /// Wrap the SVG in a <figure> for embedding
    #[arg(short, long)]
    figure: bool,

    /// Figure caption (implies --figure)
    #[arg(long)]
    caption: Option<String>,

    /// Palette file for illustration colours (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Show a warning block for unknown keys instead of failing
    #[arg(long)]
    dev: bool,

    /// Include the XML declaration
    #[arg(long)]
    standalone: bool,
}

#[derive(Subcommand)]
enum TokenCommand {
    /// Build a token name from one selection
    Name(TokenSelection),

    /// Print export code for a selection and its related tokens
    Export(TokenSelection),

    /// Generate tokens for whole components
    Builder(BuilderArgs),
}

#[derive(Args)]
struct TokenSelection {
    #[arg(long)]
    category: Category,

    #[arg(long)]
    property: String,

    #[arg(long)]
    context: Option<String>,

    #[arg(long)]
    element: Option<String>,

    #[arg(long, default_value = "default")]
    variant: String,

    /// Interaction state; repeat for several
    #[arg(long = "state")]
    states: Vec<String>,

    /// Add hover, active, focus and disabled
    #[arg(long)]
    all_states: bool,

    #[arg(long, default_value_t = NamingConvention::default())]
    convention: NamingConvention,

    #[arg(long, default_value_t = OutputFormat::default())]
    format: OutputFormat,

    /// Also print the related tokens of the category
    #[arg(long)]
    related: bool,

    /// Copy the output to the clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Args)]
struct BuilderArgs {
    /// Built-in component id to include; repeat for several
    #[arg(long = "component")]
    components: Vec<String>,

    /// Custom component as NAME:category,category[:states]
    #[arg(long = "custom")]
    custom: Vec<String>,

    /// Variants to generate (default: default)
    #[arg(long = "variant")]
    variants: Vec<String>,

    #[arg(long = "state")]
    states: Vec<String>,

    #[arg(long, default_value_t = NamingConvention::default())]
    convention: NamingConvention,

    #[arg(long, default_value_t = OutputFormat::default())]
    format: OutputFormat,

    /// Print export code instead of bare names
    #[arg(long)]
    export: bool,

    #[arg(long)]
    copy: bool,
}

#[derive(Subcommand)]
enum CertificateCommand {
    /// Render a certificate record (JSON) to PDF
    Pdf {
        /// Master or track certificate record
        input: PathBuf,

        /// Output file (defaults to the card's download filename)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Claim a certificate for the signed-in student
    Claim {
        /// web, ios or android
        #[arg(long)]
        platform: String,

        /// Claim a single track (design, engineering or convergence)
        #[arg(long)]
        track: Option<String>,

        /// Session token sent as a bearer token
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "design_engineer=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::default(),
    };

    match cli.command {
        Command::Illustration(args) => run_illustration(args, &config),
        Command::Token(TokenCommand::Name(selection)) => run_token_name(selection),
        Command::Token(TokenCommand::Export(selection)) => run_token_export(selection),
        Command::Token(TokenCommand::Builder(args)) => run_token_builder(args),
        Command::Certificate(CertificateCommand::Pdf { input, output }) => {
            run_certificate_pdf(&input, output, &config)
        }
        Command::Certificate(CertificateCommand::Claim {
            platform,
            track,
            token,
        }) => run_claim(&platform, track.as_deref(), token.as_deref(), &config).await,
    }
}

fn run_illustration(args: IllustrationArgs, config: &SiteConfig) -> Result<()> {
    if args.list {
        for key in illustration_map().keys() {
            println!("{}", key);
        }
        return Ok(());
    }

    let Some(key) = args.key else {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "an illustration key is required (use --list to see them)",
        )));
    };

    let palette = match &args.palette {
        Some(path) => Palette::from_file(path)?,
        None => Palette::default(),
    };
    let svg_config = SvgConfig::default().with_standalone(args.standalone);
    let mode = if args.dev || config.is_development() {
        RenderMode::Development
    } else {
        RenderMode::Production
    };

    if args.figure || args.caption.is_some() {
        let html = render_illustration(&key, args.caption.as_deref(), mode, &palette, &svg_config)
            .ok_or_else(|| illustration::RegistryError::NotFound { key: key.clone() })?;
        println!("{}", html);
    } else {
        println!("{}", illustration::render_svg(&key, &palette, &svg_config)?);
    }
    Ok(())
}

fn educational_state(selection: &TokenSelection) -> EducationalState {
    let mut state = EducationalState::new();
    state.convention = selection.convention;
    state.format = selection.format;
    state.select_category(selection.category);
    state.select_property(selection.property.as_str());
    if let Some(context) = &selection.context {
        state.select_context(context.as_str());
    }
    if let Some(element) = &selection.element {
        state.toggle_element(element);
    }
    state.select_variant(selection.variant.as_str());
    if selection.all_states {
        state.add_all_interactive_states();
    }
    for s in &selection.states {
        if !state.states.contains(s) {
            state.toggle_state(s);
        }
    }
    state
}

fn emit(output: &str, copy: bool) -> Result<()> {
    println!("{}", output);
    if copy {
        SystemClipboard::new()?.write_text(output)?;
        eprintln!("Copied to clipboard");
    }
    Ok(())
}

fn run_token_name(selection: TokenSelection) -> Result<()> {
    let state = educational_state(&selection);
    let mut lines: Vec<String> = state.generated_tokens().into_iter().map(|t| t.formatted).collect();
    if selection.related {
        for group in state.related_tokens() {
            lines.push(String::new());
            lines.push(format!("# {}", group.property));
            lines.extend(group.tokens.into_iter().map(|t| t.formatted));
        }
    }
    emit(&lines.join("\n"), selection.copy)
}

fn run_token_export(selection: TokenSelection) -> Result<()> {
    let state = educational_state(&selection);
    let code = state.export_code(ExportOptions::new(selection.format, Some(selection.category)));
    emit(&code, selection.copy)
}

fn run_token_builder(args: BuilderArgs) -> Result<()> {
    let mut builder = BuilderState::new();
    builder.convention = args.convention;
    builder.format = args.format;
    for id in &args.components {
        if !builder.select(id, true) {
            return Err(TokenError::InvalidComponent(id.clone()).into());
        }
    }
    for spec in &args.custom {
        let (name, categories, has_states) = parse_component_spec(spec)?;
        if builder.add_custom(&name, &categories, has_states).is_none() {
            tracing::warn!(spec = %spec, "ignoring custom component with an empty name");
        }
    }
    if !args.variants.is_empty() {
        builder.variants = args.variants;
    }
    builder.states = args.states;

    let output = if args.export {
        builder.export_code(ExportOptions::new(args.format, None))
    } else {
        builder.generate().join("\n")
    };
    emit(&output, args.copy)
}

fn run_certificate_pdf(input: &Path, output: Option<PathBuf>, config: &SiteConfig) -> Result<()> {
    let record: AnyCertificate = serde_json::from_str(&fs::read_to_string(input)?)?;
    let (filename, document) = match record {
        AnyCertificate::Master(certificate) => {
            let card = CertificateCard::new(certificate, config.origin.as_str());
            (card.filename(), card.document())
        }
        AnyCertificate::Track(certificate) => {
            let card = TrackCertificateCard::new(certificate, config.origin.as_str());
            (card.filename(), card.document())
        }
    };
    let bytes = document.to_pdf().map_err(CertificateError::from)?;
    let mut sink = match output {
        Some(path) => FileSink::to_file(path),
        None => FileSink::new("."),
    };
    sink.save(&filename, &bytes)?;
    for path in &sink.saved {
        println!("{}", path.display());
    }
    Ok(())
}

async fn run_claim(
    platform: &str,
    track: Option<&str>,
    token: Option<&str>,
    config: &SiteConfig,
) -> Result<()> {
    let platform: Platform = platform.parse()?;
    let track = track.map(str::parse::<Track>).transpose()?;
    let api = HttpCertificateApi::new(config.api_base(), token, config.http_timeout())?;
    let certificate = api.claim(&ClaimRequest { platform, track }).await?;
    println!("{}", certificate.display_title());
    println!("{}", verification_url(&config.origin, certificate.slug()));
    Ok(())
}
