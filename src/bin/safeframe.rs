use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use safeframe::{
    DeviceCatalog, DeviceModel, Orientation, PanelNode, PreviewRequest, Rect, SafeAreaAdjuster,
    ScreenSize, ViewportSpec,
};

#[derive(Parser, Debug)]
#[command(name = "safeframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a viewport fixture to a panel and print the adjusted node.
    Apply(ApplyArgs),
    /// Synthesize geometry for a catalog device and print the adjusted node.
    Simulate(SimulateArgs),
    /// List the builtin device catalog.
    Devices,
    /// Identify the catalog device matching a resolution.
    Identify(IdentifyArgs),
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input viewport JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Also rescale the panel to compensate the safe-area shrink.
    #[arg(long, default_value_t = false)]
    auto_scale: bool,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Device key (see `safeframe devices`).
    #[arg(long)]
    device: DeviceModel,

    /// Simulate landscape orientation instead of portrait.
    #[arg(long, default_value_t = false)]
    landscape: bool,

    /// Also rescale the panel to compensate the safe-area shrink.
    #[arg(long, default_value_t = false)]
    auto_scale: bool,

    /// Panel local rect width used by scale compensation.
    #[arg(long, default_value_t = 0.0)]
    panel_width: f64,

    /// Panel local rect height used by scale compensation.
    #[arg(long, default_value_t = 0.0)]
    panel_height: f64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct IdentifyArgs {
    /// Live screen width in pixels.
    #[arg(long)]
    width: u32,

    /// Live screen height in pixels.
    #[arg(long)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Apply(args) => cmd_apply(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Devices => cmd_devices(),
        Command::Identify(args) => cmd_identify(args),
    }
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let viewport = ViewportSpec::from_path(&args.in_path)
        .with_context(|| format!("load viewport '{}'", args.in_path.display()))?;

    let mut node = viewport.panel_or_default();
    let mut adjuster = SafeAreaAdjuster::new(args.auto_scale);
    adjuster.apply(&viewport.probe(), &mut node)?;

    emit_node(&node, args.out.as_deref())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let orientation = if args.landscape {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    };
    let request = PreviewRequest {
        model: args.device,
        orientation,
    };

    let mut node = PanelNode::with_rect(Rect::from_origin_size(
        (0.0, 0.0),
        (args.panel_width, args.panel_height),
    ));
    let mut adjuster = SafeAreaAdjuster::new(args.auto_scale);
    safeframe::simulate(&DeviceCatalog::builtin(), request, &mut adjuster, &mut node)?;

    emit_node(&node, args.out.as_deref())
}

fn cmd_devices() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&DeviceCatalog::builtin())?;
    println!("{json}");
    Ok(())
}

fn cmd_identify(args: IdentifyArgs) -> anyhow::Result<()> {
    let screen = ScreenSize {
        width: args.width,
        height: args.height,
    };
    let found = DeviceCatalog::builtin().identify(screen);
    let json = serde_json::to_string(&found.map(DeviceModel::key))?;
    println!("{json}");
    Ok(())
}

fn emit_node(node: &PanelNode, out: Option<&std::path::Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(node)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
