use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "splashgen", version, about = "Draw splash screen and icon PNG assets")]
struct Cli {
    /// Defaults to `generate all` when omitted.
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose and write the PNG files of a built-in preset.
    Generate(GenerateArgs),
    /// Render a layout JSON file to a single PNG.
    Render(RenderArgs),
    /// Print the layouts of a built-in preset as JSON.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Preset to generate.
    #[arg(value_enum, default_value_t = PresetChoice::All)]
    preset: PresetChoice,

    /// Directory the fixed asset paths are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[command(flatten)]
    font: FontArgs,

    /// Create missing output directories instead of failing.
    #[arg(long)]
    mkdir: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input JSON: a layout, one dumped output, or the array `dump` prints.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Entry to render when the input is a dumped array.
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    font: FontArgs,

    /// Create missing output directories instead of failing.
    #[arg(long)]
    mkdir: bool,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    #[arg(value_enum)]
    preset: PresetChoice,
}

#[derive(clap::Args, Debug)]
struct FontArgs {
    /// Font file probed first for glyph rendering (overrides $SPLASHGEN_FONT).
    #[arg(long, conflicts_with = "no_font")]
    font: Option<PathBuf>,

    /// Skip font probing and always draw glyphs as vector line art.
    #[arg(long)]
    no_font: bool,
}

impl FontArgs {
    fn probe(&self) -> splashgen::FontProbe {
        if self.no_font {
            return splashgen::FontProbe::disabled();
        }
        let system = splashgen::FontProbe::system();
        match &self.font {
            Some(path) => splashgen::FontProbe::with_candidates(
                std::iter::once(path.clone()).chain(system.candidates().iter().cloned()),
            ),
            None => system,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    All,
    SplashIcon,
    LaunchBackground,
    SplashBackground,
    SplashLogo,
}

impl PresetChoice {
    fn presets(self) -> Vec<splashgen::Preset> {
        use splashgen::Preset;
        match self {
            Self::All => Preset::ALL.to_vec(),
            Self::SplashIcon => vec![Preset::SplashIcon],
            Self::LaunchBackground => vec![Preset::LaunchBackground],
            Self::SplashBackground => vec![Preset::SplashBackground],
            Self::SplashLogo => vec![Preset::SplashLogo],
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Some(Command::Generate(args)) => cmd_generate(args),
        Some(Command::Render(args)) => cmd_render(args),
        Some(Command::Dump(args)) => cmd_dump(args),
        None => cmd_generate(GenerateArgs::parse_from(["generate"])),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let fonts = args.font.probe();
    let opts = splashgen::GenerateOpts {
        create_dirs: args.mkdir,
    };

    for preset in args.preset.presets() {
        let written = splashgen::generate_preset(preset, &args.root, &fonts, opts)
            .with_context(|| format!("generate preset '{preset}'"))?;
        for path in written {
            eprintln!("wrote {}", path.display());
        }
    }
    Ok(())
}

/// Accepted `render --in` documents.
enum RenderInput {
    Layout(splashgen::Layout),
    Output(splashgen::OutputSpec),
}

fn read_render_json(path: &Path, index: usize) -> anyhow::Result<RenderInput> {
    let f = File::open(path).with_context(|| format!("open layout '{}'", path.display()))?;
    let r = BufReader::new(f);
    let v: serde_json::Value = serde_json::from_reader(r).with_context(|| "parse layout JSON")?;

    if v.is_array() {
        let mut outputs: Vec<splashgen::OutputSpec> =
            serde_json::from_value(v).with_context(|| "parse dumped outputs")?;
        anyhow::ensure!(
            index < outputs.len(),
            "--index {index} out of range ({} outputs)",
            outputs.len()
        );
        return Ok(RenderInput::Output(outputs.swap_remove(index)));
    }
    if v.get("layout").is_some() {
        let output = serde_json::from_value(v).with_context(|| "parse dumped output")?;
        return Ok(RenderInput::Output(output));
    }
    let layout = serde_json::from_value(v).with_context(|| "parse layout JSON")?;
    Ok(RenderInput::Layout(layout))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let input = read_render_json(&args.in_path, args.index)?;
    let fonts = args.font.probe();
    let opts = splashgen::GenerateOpts {
        create_dirs: args.mkdir,
    };

    let rendered = match &input {
        RenderInput::Layout(layout) => {
            layout.validate()?;
            splashgen::render_layout(layout, &args.out, &fonts, opts)
        }
        RenderInput::Output(output) => {
            output.layout.validate()?;
            splashgen::render_output(output, &args.out, &fonts, opts)
        }
    };
    rendered.with_context(|| format!("render '{}'", args.in_path.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let mut outputs = Vec::new();
    for preset in args.preset.presets() {
        outputs.extend(preset.outputs()?);
    }
    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &outputs).context("write layout JSON")?;
    println!();
    Ok(())
}
