use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use plotgrid::DrawSurface as _;

#[derive(Parser, Debug)]
#[command(name = "plotgrid", version)]
struct Cli {
    /// Log planning and rendering steps to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the planned layout geometry as JSON.
    Plan(PlanArgs),
    /// Render a layout for a land size and unit.
    Render(RenderArgs),
    /// Render the three-plot demo for a viewport size.
    Demo(DemoArgs),
    /// Feed a JSON array of UI events through the viewport controller.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct LandArgs {
    /// Land size, in `--unit`s.
    #[arg(long, allow_hyphen_values = true)]
    size: String,

    /// Unit tag: acres, ha or m2.
    #[arg(long, default_value = "acres")]
    unit: String,

    /// Subdivision style.
    #[arg(long, value_enum, default_value_t = ModeChoice::Strip)]
    mode: ModeChoice,
}

#[derive(Parser, Debug)]
struct OutputArgs {
    /// Output path (.png or .svg).
    #[arg(long)]
    out: PathBuf,

    /// Output format; inferred from the `--out` extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// Backend used for PNG output.
    #[arg(long, value_enum, default_value_t = BackendChoice::Cpu)]
    backend: BackendChoice,

    /// Font file for plot labels (cpu backend).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Render config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    land: LandArgs,

    /// Pixels per foot; overrides the config value.
    #[arg(long)]
    scale: Option<f64>,

    /// Render config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    land: LandArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input events JSON.
    #[arg(long = "events")]
    events_path: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Strip,
    RoadNetwork,
}

impl From<ModeChoice> for plotgrid::LayoutMode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Strip => Self::Strip,
            ModeChoice::RoadNetwork => Self::RoadNetwork,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatChoice {
    Png,
    Svg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Cpu,
    Svg,
}

/// Alerts go to stderr, where a terminal user will see them.
struct StderrNotifier;

impl plotgrid::Notifier for StderrNotifier {
    fn alert(&mut self, message: &str) {
        eprintln!("alert: {message}");
    }
}

type Controller = plotgrid::ViewportController<plotgrid::DisplayList, StderrNotifier>;

#[derive(serde::Serialize)]
struct Summary {
    event: &'static str,
    width: u32,
    height: u32,
    plot_count: usize,
    roads: usize,
    labels: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    area_sq_ft: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<&plotgrid::Outcome> for Summary {
    fn from(outcome: &plotgrid::Outcome) -> Self {
        match outcome {
            plotgrid::Outcome::DemoRendered { size, stats } => Self {
                event: "demo",
                width: size.width,
                height: size.height,
                plot_count: stats.plots_drawn,
                roads: stats.roads_drawn,
                labels: stats.labels_drawn,
                area_sq_ft: None,
                error: None,
            },
            plotgrid::Outcome::LayoutRendered {
                size,
                stats,
                area_sq_ft,
            } => Self {
                event: "layout",
                width: size.width,
                height: size.height,
                plot_count: stats.plots_drawn,
                roads: stats.roads_drawn,
                labels: stats.labels_drawn,
                area_sq_ft: Some(*area_sq_ft),
                error: None,
            },
            plotgrid::Outcome::Rejected(err) => Self {
                event: "rejected",
                width: 0,
                height: 0,
                plot_count: 0,
                roads: 0,
                labels: 0,
                area_sq_ft: None,
                error: Some(err.to_string()),
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Render(args) => cmd_render(args),
        Command::Demo(args) => cmd_demo(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<plotgrid::RenderConfig> {
    match path {
        Some(p) => Ok(plotgrid::RenderConfig::from_json_path(p)?),
        None => Ok(plotgrid::RenderConfig::default()),
    }
}

fn form_for(land: &LandArgs) -> plotgrid::FormSubmission {
    plotgrid::FormSubmission::new(land.size.as_str(), land.unit.as_str()).with_mode(land.mode.into())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(scale) = args.scale {
        cfg.scale = scale;
        cfg.validate()?;
    }
    let form = form_for(&args.land);
    let request = plotgrid::LayoutRequest::from_form(&form)?;
    let area = request.area();

    let out = match cfg.plan_layout(area, form.mode)? {
        plotgrid::LayoutSource::RoadNetwork(plan) => serde_json::json!({
            "mode": form.mode,
            "area_sq_ft": area,
            "surface": plan.surface_size(),
            "plots_x": plan.plots_x,
            "plots_y": plan.plots_y,
            "plot_count": plan.plot_count(),
        }),
        plotgrid::LayoutSource::Computed(plan) => {
            let cells = plotgrid::tile_plots(&plan);
            serde_json::json!({
                "mode": form.mode,
                "area_sq_ft": area,
                "surface": plan.surface_size(),
                "plan": plan,
                "plot_count": cells.len(),
            })
        }
        plotgrid::LayoutSource::Demo => anyhow::bail!("planning never yields the demo layout"),
    };

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn new_controller(output: &OutputArgs) -> anyhow::Result<Controller> {
    let cfg = load_config(output.config.as_deref())?;
    Ok(plotgrid::ViewportController::new(
        plotgrid::DisplayList::default(),
        StderrNotifier,
        cfg,
    ))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut controller = new_controller(&args.output)?;
    let outcome = controller.handle(plotgrid::UiEvent::Submit {
        form: form_for(&args.land),
    });
    let summary = match outcome {
        plotgrid::Outcome::Rejected(err) => return Err(err.into()),
        rendered => Summary::from(&rendered),
    };

    write_output(&controller, &args.output)?;
    print_summary(&summary)
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let mut controller = new_controller(&args.output)?;
    let outcome = controller.handle(plotgrid::UiEvent::Resize {
        viewport: plotgrid::Viewport::new(args.width, args.height),
    });

    write_output(&controller, &args.output)?;
    print_summary(&Summary::from(&outcome))
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let f = File::open(&args.events_path)
        .with_context(|| format!("open events '{}'", args.events_path.display()))?;
    let events: Vec<plotgrid::UiEvent> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse events JSON")?;

    let mut controller = new_controller(&args.output)?;
    let outcomes = controller.run(events);
    let summaries: Vec<Summary> = outcomes.iter().map(Summary::from).collect();

    write_output(&controller, &args.output)?;
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

fn print_summary(summary: &Summary) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

fn output_format(output: &OutputArgs) -> FormatChoice {
    output.format.unwrap_or_else(|| {
        let is_svg = output
            .out
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if is_svg {
            FormatChoice::Svg
        } else {
            FormatChoice::Png
        }
    })
}

fn write_output(controller: &Controller, output: &OutputArgs) -> anyhow::Result<()> {
    let list = controller.surface();
    if list.size().is_empty() {
        anyhow::bail!(
            "surface is {}x{}; nothing to write",
            list.size().width,
            list.size().height
        );
    }

    if let Some(parent) = output.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    match output_format(output) {
        FormatChoice::Svg => {
            let svg = plotgrid::to_svg(list, controller.config().background);
            std::fs::write(&output.out, svg)
                .with_context(|| format!("write svg '{}'", output.out.display()))?;
        }
        FormatChoice::Png => {
            let mut settings = controller.config().render_settings();
            if let Some(font) = &output.font {
                let bytes = std::fs::read(font)
                    .with_context(|| format!("read font '{}'", font.display()))?;
                settings.font_bytes = Some(Arc::new(bytes));
            }
            let kind = match output.backend {
                BackendChoice::Cpu => plotgrid::BackendKind::Cpu,
                BackendChoice::Svg => plotgrid::BackendKind::Svg,
            };
            let mut backend = plotgrid::create_backend(kind, &settings)?;
            let frame = backend.present(list)?;

            image::save_buffer_with_format(
                &output.out,
                &frame.to_straight_rgba8(),
                frame.width,
                frame.height,
                image::ColorType::Rgba8,
                image::ImageFormat::Png,
            )
            .with_context(|| format!("write png '{}'", output.out.display()))?;
        }
    }

    eprintln!("wrote {}", output.out.display());
    Ok(())
}
