use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info, warn};

use pitchside::config::{ColourScheme, PitchConfig};
use pitchside::csv::CsvWriter;
use pitchside::domain::{EventType, Side};
use pitchside::surface::Surface;
use pitchside::svg::SvgOptions;
use pitchside::tracking::TrackingData;
use pitchside::{dataset, events, overlay, pitch, print, svg, tracking};

const DEFAULT_DATA_DIR: &str = "./sample-data/data";
const TRACKING_PREVIEW_ROWS: usize = 5;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// directory holding the Sample_Game_* data
    #[clap(short = 'd', long = "data-dir", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// list the games available in the data directory and exit
    #[clap(long)]
    list: bool,

    /// game ID
    #[clap(short = 'g', long, default_value_t = 1)]
    game: u32,

    /// team to analyse (home or away)
    #[clap(short = 't', long, value_parser = parse_side, default_value = "home")]
    team: Side,

    /// event type to break down by subtype
    #[clap(short = 'e', long = "event-type", value_parser = parse_event_type, default_value = "SHOT")]
    event_type: EventType,

    /// seconds of tracking data to trace from kick-off
    #[clap(short = 's', long, default_value_t = 60)]
    seconds: u64,

    /// also render a snapshot of player positions at this frame index
    #[clap(long)]
    frame: Option<usize>,

    /// JSON file with pitch rendering options
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// pitch colour scheme (green or white), overriding the config file
    #[clap(long = "colour-scheme", value_parser = parse_colour_scheme)]
    colour_scheme: Option<ColourScheme>,

    /// also write the team's tracking data, in metres, as CSV
    #[clap(long = "export-csv")]
    export_csv: bool,

    /// directory to write the rendered SVGs to
    #[clap(short = 'o', long)]
    out: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if !self.list {
            self.out.as_ref().ok_or(anyhow!("output directory must be specified"))?;
        }
        if self.seconds == 0 {
            bail!("at least one second of tracking data must be traced");
        }
        Ok(())
    }
}

fn parse_side(s: &str) -> anyhow::Result<Side> {
    Side::from_str(s).map_err(|_| anyhow!("unsupported team {s}"))
}

fn parse_event_type(s: &str) -> anyhow::Result<EventType> {
    match EventType::from_str(s)? {
        EventType::Other(other) => Err(anyhow!("unsupported event type {other}")),
        event_type => Ok(event_type),
    }
}

fn parse_colour_scheme(s: &str) -> anyhow::Result<ColourScheme> {
    Ok(ColourScheme::from_str(s)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    if args.list {
        let games = dataset::discover_games(&args.data_dir)?;
        info!("{} game(s) under {:?}", games.len(), args.data_dir);
        for game in games {
            println!("{game}");
        }
        return Ok(());
    }

    let config = load_config(&args)?;
    debug!("config: {config:?}");
    let out = args.out.clone().ok_or(anyhow!("output directory must be specified"))?;
    fs::create_dir_all(&out)?;
    let svg_options = SvgOptions::default();
    let start_time = Instant::now();

    let events = events::read_from_file(dataset::events_path(&args.data_dir, args.game), &config.field)?;
    info!("game {}: loaded {} events", args.game, events.len());

    let team_events = events.for_team(args.team);
    println!(
        "{} team's events overview:\n{}",
        args.team,
        Console::default().render(&print::tabulate_counts("Type", &team_events.type_counts()))
    );

    let team_event_type = team_events.of_type(&args.event_type);
    println!(
        "{} team's {} results:\n{}",
        args.team,
        args.event_type,
        Console::default().render(&print::tabulate_counts("Subtype", &team_event_type.subtype_counts()))
    );

    // goals are drawn from the team's shots irrespective of the selected event type
    let team_goals = team_events.of_type(&EventType::Shot).goals();
    println!(
        "{} team's goals:\n{}",
        args.team,
        Console::default().render(&print::tabulate_events(&team_goals))
    );
    let mut surface = pitch::draw(&config);
    overlay::plot_goals(&mut surface, &team_goals);
    write_svg(&out.join("goals.svg"), &surface, &svg_options)?;

    let mut tracking = TrackingData::read_from_file(dataset::tracking_path(&args.data_dir, args.game, args.team))?;
    tracking.to_metric(&config.field)?;
    info!(
        "tracking the {} team: {} players over {} frames",
        args.team,
        tracking.players().len(),
        tracking.num_frames()
    );
    println!(
        "{}",
        Console::default().render(&print::tabulate_table(&tracking.table().head(TRACKING_PREVIEW_ROWS)))
    );

    let frames = tracking::frames_in(Duration::from_secs(args.seconds));
    if frames > tracking.num_frames() {
        warn!("requested {frames} frames, only {} available", tracking.num_frames());
    }
    let mut surface = pitch::draw(&config);
    overlay::plot_traces(&mut surface, &tracking, frames)?;
    write_svg(&out.join("tracking.svg"), &surface, &svg_options)?;

    if let Some(frame) = args.frame {
        if frame >= tracking.num_frames() {
            return Err(anyhow!("frame {frame} is out of range; the file has {} frames", tracking.num_frames()).into());
        }
        let mut surface = pitch::draw(&config);
        overlay::plot_snapshot(&mut surface, &tracking, frame);
        write_svg(&out.join("frame.svg"), &surface, &svg_options)?;
    }

    if args.export_csv {
        let path = out.join(format!("tracking_{}.csv", args.team.to_string().to_lowercase()));
        let mut csv = CsvWriter::create(&path)?;
        csv.append_table(tracking.table())?;
        csv.flush()?;
        info!("exported tracking data to {path:?}");
    }

    let elapsed_time = start_time.elapsed();
    info!("rendered game {} in {}s", args.game, elapsed_time.as_millis() as f64 / 1_000.);
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<PitchConfig> {
    let mut config = match &args.config {
        None => PitchConfig::default(),
        Some(path) => PitchConfig::from_json_file(path)?,
    };
    if let Some(colour_scheme) = args.colour_scheme {
        config.colour_scheme = colour_scheme;
    }
    Ok(config)
}

fn write_svg(path: &Path, surface: &Surface, options: &SvgOptions) -> anyhow::Result<()> {
    svg::write_to_file(path, surface, options)?;
    info!("wrote {path:?}");
    Ok(())
}
