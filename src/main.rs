//! NLA Timeline
//!
//! Headless driver for the timeline model: create, inspect and play back
//! project folders from the command line.

use std::cell::RefCell;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use nla_timeline::core::{drive, TickOutcome};
use nla_timeline::state::{Clip, ClipId, EditorState, Project, TimelineAction, TimelineStore, Track, TrackType};
use nla_timeline::timeline::{content_width, playhead_x, track_rows};
use nla_timeline::{EditorConfig, Result};

#[derive(Parser, Debug)]
#[command(name = "nla-timeline", version, about = "Timeline model for a non-linear editor")]
struct Cli {
    /// Editor config (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a sample timeline, split its clip and print the result
    Demo,
    /// Create an empty project folder
    New {
        folder: PathBuf,
        #[arg(short, long, default_value = "Untitled Project")]
        name: String,
    },
    /// Print tracks and clip geometry of a project
    Info { folder: PathBuf },
    /// Play a project in real time until the end
    Play {
        folder: PathBuf,
        /// Start position in seconds
        #[arg(long, default_value_t = 0.0)]
        from: f64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = EditorConfig::load_or_default(cli.config.as_deref());

    match cli.command {
        Command::Demo => run_demo(&config),
        Command::New { folder, name } => {
            let mut project = config.new_project(name);
            let path = project.save_to(&folder)?;
            println!("Created {}", path.display());
        }
        Command::Info { folder } => {
            let project = Project::load(&folder)?;
            let store = TimelineStore::new(project, config.scale);
            print_state(store.state());
        }
        Command::Play { folder, from } => {
            let project = Project::load(&folder)?;
            let store = RefCell::new(TimelineStore::new(project, config.scale));
            store.borrow_mut().seek(from);
            let token = store.borrow_mut().play();
            let outcome = drive(&store, token, config.tick_interval()).await;
            if let TickOutcome::Advanced { playhead, .. } = outcome {
                info!("finished at {:.3}s", playhead);
            }
        }
    }

    Ok(())
}

fn run_demo(config: &EditorConfig) {
    let mut project = config.new_project("Demo");
    project.tracks.clear();
    let mut store = TimelineStore::new(project, config.scale);
    store.dispatch(TimelineAction::AddTrack(Track::with_id("T1", "Video 1", TrackType::Video)));
    store.dispatch(TimelineAction::AddClip(
        Clip::new("T1", 2.0, 12.0).with_id("C1").with_label("Sample Clip"),
    ));
    print_state(store.state());

    store.dispatch(TimelineAction::SplitClip {
        id: ClipId::from("C1"),
        at: 5.0,
    });
    println!();
    println!("after split at 5.0s:");
    print_state(store.state());
}

fn print_state(state: &EditorState) {
    println!(
        "{} | duration {:.2}s | zoom {} | width {:.1}px | playhead {:.2}s @ {:.1}px",
        state.project.name,
        state.duration(),
        state.zoom,
        content_width(state),
        state.playhead,
        playhead_x(state),
    );
    for row in track_rows(state) {
        println!("  [{}] {} ({:?})", row.track_id, row.name, row.track_type);
        for clip in row.clips {
            let marker = if clip.selected { "*" } else { " " };
            println!(
                "   {} {} '{}' x={:.1} w={:.1} {}",
                marker, clip.clip_id, clip.label, clip.left, clip.width, clip.color
            );
        }
    }
}
