//! Headless walkthrough of the booth scene.
//!
//! Loads options (the default scene, or a TOML preset given as the first
//! argument), then replays a scripted visitor session through the input
//! processor and engine, logging the camera as it flies between booths.
//! Run with `RUST_LOG=info` (or `debug` for every transition).

use std::path::Path;
use std::process::ExitCode;

use focal::engine::{FocusCommand, FocusEngine};
use focal::focus::TargetId;
use focal::input::{InputEvent, InputProcessor, MouseButton};
use focal::options::Options;
use focal::FocalError;

const DT: f32 = 1.0 / 60.0;
/// Frames simulated after each scripted step.
const FRAMES_PER_STEP: usize = 90;

/// Scripted visitor actions.
enum Step {
    Resize(u32, u32),
    PointAt(f32, f32),
    Click,
    Key(&'static str),
}

struct Walkthrough {
    engine: FocusEngine,
    input: InputProcessor,
    /// Screen-space picking stand-in: one horizontal band per target.
    targets: Vec<TargetId>,
    viewport_width: f32,
    cursor: (f32, f32),
}

impl Walkthrough {
    fn new(options: &Options) -> Result<Self, FocalError> {
        let engine = FocusEngine::from_options(options)?;
        let targets = engine.registry().ids().cloned().collect();
        Ok(Self {
            engine,
            input: InputProcessor::with_config(
                options.keybindings.clone(),
                options.orbit.mobile_breakpoint,
            ),
            targets,
            viewport_width: 1280.0,
            cursor: (0.0, 0.0),
        })
    }

    /// Target under the cursor: the viewport is split into equal columns,
    /// one per target, with a gap of empty background on each side.
    fn pick(&self) -> Option<TargetId> {
        let margin = self.viewport_width * 0.1;
        let usable = self.viewport_width - 2.0 * margin;
        let x = self.cursor.0 - margin;
        if x < 0.0 || x >= usable || self.targets.is_empty() {
            return None;
        }
        let column = (x / usable * self.targets.len() as f32) as usize;
        self.targets.get(column).cloned()
    }

    fn events(&mut self, step: &Step) -> Vec<InputEvent> {
        match *step {
            Step::Resize(width, height) => {
                self.viewport_width = width as f32;
                vec![InputEvent::Resized { width, height }]
            }
            Step::PointAt(x, y) => {
                self.cursor = (x, y);
                vec![InputEvent::CursorMoved { x, y }]
            }
            Step::Click => vec![
                InputEvent::MouseButton {
                    button: MouseButton::Left,
                    pressed: true,
                },
                InputEvent::MouseButton {
                    button: MouseButton::Left,
                    pressed: false,
                },
            ],
            Step::Key(_) => Vec::new(),
        }
    }

    fn perform(&mut self, step: &Step) -> Result<(), FocalError> {
        let mut commands: Vec<FocusCommand> = Vec::new();
        for event in self.events(step) {
            let picked = self.pick();
            commands.extend(self.input.handle_event(event, picked.as_ref()));
        }
        if let Step::Key(key) = step {
            commands.extend(self.input.handle_key_press(key));
        }
        for command in commands {
            log::info!("command: {command:?}");
            self.engine.execute(command)?;
        }
        Ok(())
    }

    fn fly(&mut self) {
        for frame in 0..FRAMES_PER_STEP {
            let out = self.engine.update(DT);
            if frame % 15 == 0 || (out.settled && frame + 1 == FRAMES_PER_STEP) {
                log::info!(
                    "frame {frame:>3}: eye ({:.3}, {:.3}, {:.3}) settled={} auto_rotate={}",
                    out.pose.position.x,
                    out.pose.position.y,
                    out.pose.position.z,
                    out.settled,
                    out.orbit.auto_rotate,
                );
            }
        }
        for id in &self.targets {
            if let Ok(scale) = self.engine.animated_scale(id) {
                log::debug!("{id} scale {scale:.3}");
            }
        }
    }
}

fn load_options() -> Result<Options, FocalError> {
    match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path)),
        None => Ok(Options::default()),
    }
}

fn run() -> Result<(), FocalError> {
    let options = load_options()?;
    let mut walkthrough = Walkthrough::new(&options)?;

    let script = [
        Step::Resize(1280, 720),
        Step::PointAt(300.0, 360.0),
        Step::Click,
        Step::PointAt(1000.0, 360.0),
        Step::Click,
        Step::Click,
        Step::PointAt(300.0, 360.0),
        Step::Click,
        Step::Key("Escape"),
        Step::Resize(390, 844),
    ];

    for step in &script {
        walkthrough.perform(step)?;
        walkthrough.fly();
        log::info!("focus: {:?}", walkthrough.engine.focus());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
