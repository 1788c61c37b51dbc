use clap::{Parser, Subcommand, ValueEnum};
use iconforge::{
    BundledSource, DirectoryFragmentSource, FragmentEmitter, FragmentSource, GenerateError,
    Generator, IconResolver, Props, ResolveError, TemplateEmitter,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(version, about = "Generate and render SVG icon fragments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract fragments from a directory of SVG icons
    Generate(GenerateArgs),
    /// Render one icon to stdout
    Render(RenderArgs),
    /// List the icons a fragment set provides
    List(SourceArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Bare fragment files plus an index of `Icon` constants
    Fragment,
    /// One Rust function per icon plus a `mod.rs`-style index
    Template,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// Directory holding the source `<name>.svg` files
    #[arg(long, default_value = "assets/icons")]
    source: PathBuf,

    /// Directory receiving one artifact per icon
    #[arg(long, default_value = "assets/fragments")]
    out: PathBuf,

    /// Index file listing every icon
    #[arg(long, default_value = "src/icons.rs")]
    index: PathBuf,

    /// Do not write an index
    #[arg(long, default_value_t = false)]
    no_index: bool,

    #[arg(long, value_enum, default_value_t = Format::Fragment)]
    format: Format,

    /// Fail on SVG files that cannot be unwrapped instead of emitting empty fragments
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Path the fragment index imports `Icon` from
    #[arg(long, default_value = "crate::Icon")]
    icon_import: String,

    /// Path generated template functions import `Props` from
    #[arg(long, default_value = "crate::Props")]
    props_import: String,

    /// Upstream icon set version recorded in the fragment index
    #[arg(long)]
    icon_set_version: Option<String>,

    /// Print the generation report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct SourceArgs {
    /// Fragment directory; the bundled set is used when omitted
    #[arg(long)]
    fragments: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Kebab-case icon name, e.g. `chevron-right`
    name: String,

    #[command(flatten)]
    source: SourceArgs,

    /// Presentation properties as JSON, e.g. '{"size": 32, "color": "red"}'
    #[arg(long)]
    props: Option<String>,
}

impl SourceArgs {
    fn open(&self) -> Arc<dyn FragmentSource> {
        match &self.fragments {
            Some(dir) => Arc::new(DirectoryFragmentSource::new(dir)),
            None => Arc::new(BundledSource::new()),
        }
    }
}

fn generate(args: GenerateArgs) -> Result<(), CliError> {
    let builder = Generator::builder()
        .source_dir(&args.source)
        .output_dir(&args.out)
        .index_file((!args.no_index).then_some(&args.index))
        .strict(args.strict);

    let builder = match args.format {
        Format::Fragment => builder.emitter(
            FragmentEmitter::new()
                .with_icon_import(args.icon_import)
                .with_icon_set_version(args.icon_set_version),
        ),
        Format::Template => {
            builder.emitter(TemplateEmitter::new().with_props_import(args.props_import))
        }
    };

    let report = builder.build()?.run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for icon in report.empty_fragments() {
            eprintln!("warning: {} has an empty fragment", icon.name);
        }
        println!(
            "Generated {} icon(s) into {}",
            report.len(),
            report.output_dir.display()
        );
    }
    Ok(())
}

fn render(args: RenderArgs) -> Result<(), CliError> {
    let props: Props = match &args.props {
        Some(json) => serde_json::from_str(json)?,
        None => Props::default(),
    };
    let resolver = IconResolver::new(args.source.open());
    println!("{}", resolver.resolve(&args.name, &props)?);
    Ok(())
}

fn list(args: SourceArgs) -> Result<(), CliError> {
    for name in args.open().names() {
        println!("{}", name);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("iconforge=info"))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate(args) => generate(args),
        Command::Render(args) => render(args),
        Command::List(args) => list(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
