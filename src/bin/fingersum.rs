use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use fingersum::{
    AppConfig, CpuBackend, Hand, PngSequenceSink, RenderMode, Session, check_expression, gallery,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fingersum", version, about = "Count single-digit sums on ten fingers")]
struct Cli {
    /// Settings JSON (canvas, background, fps, timings, mode).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Render style; overrides the config file.
    #[arg(long, global = true)]
    mode: Option<RenderMode>,

    /// Photo of the left hand (photo mode).
    #[arg(long, global = true)]
    left_photo: Option<PathBuf>,

    /// Photo of the right hand (photo mode).
    #[arg(long, global = true)]
    right_photo: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate an expression.
    Check {
        /// Expression such as "3 + 4".
        expr: String,
    },
    /// List the quick-test examples and their outcomes.
    Gallery {
        /// Print JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Animate a run in the terminal in real time.
    Play(PlayArgs),
    /// Render the state at one instant of a run as a PNG.
    Frame(FrameArgs),
    /// Render a whole run as a numbered PNG sequence.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Expression such as "3 + 4".
    expr: String,

    /// Playback speed multiplier.
    #[arg(long, default_value_t = 1.0)]
    speed: f64,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Expression such as "3 + 4".
    expr: String,

    /// Milliseconds after the trigger.
    #[arg(long, default_value_t = 0)]
    at_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Expression such as "3 + 4".
    expr: String,

    /// Directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Extra time to keep rendering after the result appears.
    #[arg(long, default_value_t = 1000)]
    tail_ms: u64,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.cmd {
        Command::Check { expr } => Ok(cmd_check(expr)),
        Command::Gallery { json } => cmd_gallery(*json),
        Command::Play(args) => cmd_play(&cli, args),
        Command::Frame(args) => cmd_frame(&cli, args),
        Command::Render(args) => cmd_render(&cli, args),
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fingersum={default_level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn cmd_check(expr: &str) -> ExitCode {
    match check_expression(expr) {
        Ok(ops) => {
            println!("ok: {ops} = {}", ops.sum());
            ExitCode::SUCCESS
        }
        Err(rejection) => {
            println!("rejected ({}): {rejection}", rejection.code());
            ExitCode::from(2)
        }
    }
}

fn cmd_gallery(json: bool) -> anyhow::Result<ExitCode> {
    let entries = gallery();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).context("serialize gallery")?
        );
        return Ok(ExitCode::SUCCESS);
    }
    for (i, entry) in entries.iter().enumerate() {
        let outcome = match entry.outcome {
            Ok(ops) => format!("ok, sum {}", ops.sum()),
            Err(r) => r.to_string(),
        };
        println!("{i:>2}  {:<8}  {outcome}", entry.expression);
    }
    Ok(ExitCode::SUCCESS)
}

fn build_session(cli: &Cli, expr: &str) -> anyhow::Result<Session> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }

    let mut session = Session::new(config);
    for (hand, path) in [(Hand::Left, &cli.left_photo), (Hand::Right, &cli.right_photo)] {
        if let Some(path) = path {
            session
                .attach_photo_path(hand, path)
                .with_context(|| format!("attach {} hand photo", hand.name()))?;
        }
    }
    session.set_input(expr);
    Ok(session)
}

fn cmd_play(cli: &Cli, args: &PlayArgs) -> anyhow::Result<ExitCode> {
    anyhow::ensure!(
        args.speed.is_finite() && args.speed > 0.0,
        "--speed must be positive"
    );
    let mut session = build_session(cli, &args.expr)?;
    if let Err(blocked) = session.run() {
        println!("cannot run: {blocked}");
        return Ok(ExitCode::from(2));
    }

    println!("{}", session.sequencer().slots());
    while let Some(due) = session.sequencer().next_wake() {
        let wait_ms = due.since(session.sequencer().now());
        std::thread::sleep(Duration::from_secs_f64(wait_ms as f64 / 1000.0 / args.speed));

        let before = session.sequencer().revision();
        session.advance(wait_ms);
        if session.sequencer().revision() != before {
            println!("{}", session.sequencer().slots());
        }
    }

    if let Some(result) = session.result() {
        println!("{} + {} = {}", result.a, result.b, result.sum);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_frame(cli: &Cli, args: &FrameArgs) -> anyhow::Result<ExitCode> {
    let mut session = build_session(cli, &args.expr)?;
    if let Err(blocked) = session.run() {
        println!("cannot run: {blocked}");
        return Ok(ExitCode::from(2));
    }
    session.advance(args.at_ms);

    let frame = session.render_frame(&CpuBackend::new())?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    fingersum::encode::png::write_png(&args.out, &frame)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_render(cli: &Cli, args: &RenderArgs) -> anyhow::Result<ExitCode> {
    let mut session = build_session(cli, &args.expr)?;
    if let Err(rejection) = session.validation() {
        println!("cannot run: {rejection}");
        return Ok(ExitCode::from(2));
    }

    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats = session.render_timeline(&CpuBackend::new(), &mut sink, args.tail_ms)?;

    eprintln!(
        "wrote {} frames to {} ({} rendered, {} reused)",
        stats.frames_total,
        args.out_dir.display(),
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(ExitCode::SUCCESS)
}
