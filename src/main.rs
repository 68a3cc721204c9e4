//! Bouncy Balls headless driver
//!
//! Runs the simulation loop without a window: optional scripted pointer
//! input, wall-clock pacing, and a JSON dump of the final frame. A windowed
//! host would replace the script with real events and draw each `Frame`.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;

use bouncy_balls::Settings;
use bouncy_balls::platform::TickClock;
use bouncy_balls::renderer::Frame;
use bouncy_balls::sim::{InputEvent, PointerSession, TickStatus, World, tick};

#[derive(Debug, Parser)]
#[command(name = "bouncy-balls", about = "Headless 2D bouncing-ball sandbox")]
struct Args {
    /// Settings JSON file (defaults are used when absent or invalid)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 1440)]
    ticks: u64,

    /// Seed for body colors
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Grab the first body and throw it up and to the right
    #[arg(long)]
    fling: bool,

    /// Run as fast as possible instead of at the configured tick rate
    #[arg(long)]
    unthrottled: bool,

    /// Print the final frame as JSON
    #[arg(long)]
    dump: bool,
}

/// Scripted grab-and-throw of body 0
struct FlingScript {
    start: u64,
    drag_ticks: u64,
    step: Vec2,
    anchor: Option<Vec2>,
}

impl FlingScript {
    fn new(start: u64) -> Self {
        Self {
            start,
            drag_ticks: 15,
            step: Vec2::new(8.0, -6.0),
            anchor: None,
        }
    }

    fn events(&mut self, n: u64, world: &World) -> Vec<InputEvent> {
        if n < self.start || world.bodies.is_empty() {
            return Vec::new();
        }
        let offset = n - self.start;
        if offset == 0 {
            let p = world.bodies[0].pos;
            self.anchor = Some(p);
            return vec![InputEvent::PointerPress { x: p.x, y: p.y }];
        }
        let Some(anchor) = self.anchor else {
            return Vec::new();
        };
        if offset <= self.drag_ticks {
            let p = anchor + self.step * offset as f32;
            vec![InputEvent::PointerMove { x: p.x, y: p.y }]
        } else if offset == self.drag_ticks + 1 {
            vec![InputEvent::PointerRelease]
        } else {
            Vec::new()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    log::info!("Bouncy Balls (headless) starting...");
    let settings = Settings::load(args.config.as_deref());
    let mut world = World::new(&settings, args.seed);
    let mut session = PointerSession::new();
    let mut clock = TickClock::new(settings.tick_period());
    let mut script = args.fling.then(|| FlingScript::new(settings.tick_rate as u64));

    let mut contacts = 0;
    for n in 0..args.ticks {
        let events = match script.as_mut() {
            Some(script) => script.events(n, &world),
            None => Vec::new(),
        };

        let report = tick(&mut world, &mut session, &events);
        contacts += report.contacts;
        if let Some((index, vel)) = report.released {
            log::info!(
                "Tick {}: body {} thrown at ({:.2}, {:.2})",
                world.time_ticks,
                world.bodies[index].id,
                vel.x,
                vel.y
            );
        }
        if report.status == TickStatus::Stopped {
            break;
        }

        if !args.unthrottled {
            clock.wait();
        }
    }

    log::info!(
        "Stopped after {} ticks, {} contacts resolved",
        world.time_ticks,
        contacts
    );
    for body in &world.bodies {
        log::info!(
            "  body {}: pos ({:.1}, {:.1}) vel ({:.2}, {:.2})",
            body.id,
            body.pos.x,
            body.pos.y,
            body.vel.x,
            body.vel.y
        );
    }

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&Frame::capture(&world))?);
    }

    Ok(())
}
