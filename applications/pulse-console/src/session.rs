/// Console session: feeds commands to the controller and prints the results
use crate::command::Command;
use crate::simulated::{PathFile, SimulatedHandle};
use crate::view::ConsoleView;
use pulse_playback::{
    format_time, PlayState, PlaybackController, PlaybackHandle, PlayerConfig, PlayerError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info, warn};

pub type ConsoleController = PlaybackController<SimulatedHandle, ConsoleView>;

/// Failure of a single console command
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error("No play request outstanding")]
    NoPendingRequest,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Print player events as JSON lines instead of view renders
    pub json: bool,

    /// Seed for shuffle picks; random when absent
    pub seed: Option<u64>,
}

/// Whether the session keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Snapshot printed by `status`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub index: usize,
    pub length: usize,
    pub title: String,
    pub artist: String,
    pub state: PlayState,
    pub elapsed: String,
    pub duration: String,
    pub shuffle: bool,
    pub repeat: bool,
    pub liked: bool,
    pub volume: f64,
}

pub struct Session {
    controller: ConsoleController,
    options: SessionOptions,
}

impl Session {
    /// Start a session and render the first track
    pub fn new(config: &PlayerConfig, options: SessionOptions) -> Result<Self, PlayerError> {
        let handle = SimulatedHandle::new(config.simulated_duration_secs);
        let view = ConsoleView::new();

        let controller = match options.seed {
            Some(seed) => {
                PlaybackController::with_rng(config, handle, view, StdRng::seed_from_u64(seed))?
            }
            None => PlaybackController::new(config, handle, view)?,
        };

        let mut session = Self {
            controller,
            options,
        };
        session.pump()?;
        Ok(session)
    }

    /// Read commands until `quit` or end of input
    ///
    /// Bad commands and failed operations are reported on `output` and do
    /// not end the session.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> anyhow::Result<()> {
        self.flush(output)?;

        for line in input.lines() {
            let line = line?;
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(output, "error: {}", e)?;
                    continue;
                }
            };

            debug!(?command, "Executing command");
            let wants_status = command == Command::Status;
            let flow = match self.execute(command) {
                Ok(flow) => flow,
                Err(e) => {
                    warn!(error = %e, "Command failed");
                    writeln!(output, "error: {}", e)?;
                    Flow::Continue
                }
            };
            self.flush(output)?;
            if wants_status {
                self.print_status(output)?;
            }

            if flow == Flow::Quit {
                break;
            }
        }

        info!(
            tracks = self.controller.playlist().len(),
            "Session finished"
        );
        Ok(())
    }

    /// Apply one command, then deliver whatever the handle reported
    pub fn execute(&mut self, command: Command) -> Result<Flow, SessionError> {
        let result = self.apply(command);
        // Handle events raised before a failure still need delivering
        self.pump()?;
        result
    }

    fn apply(&mut self, command: Command) -> Result<Flow, SessionError> {
        let player = &mut self.controller;

        match command {
            Command::Play => player.toggle_play(),
            Command::Next => player.next_track()?,
            Command::Prev => player.prev_track()?,
            Command::Shuffle => player.toggle_shuffle(),
            Command::Repeat => player.toggle_repeat(),
            Command::Like => player.toggle_like(),
            Command::Seek(fraction) => player.seek(fraction),
            Command::Volume(input) => {
                player.view_mut().set_volume_input(&input);
                player.set_volume()?;
            }
            Command::Upload(paths) => {
                let files = paths.into_iter().map(PathFile).collect();
                player.handle_file_upload(files)?;
            }
            Command::Card(index) => player.select_card(index)?,
            Command::Tick(seconds) => player.handle_mut().tick(seconds),
            Command::End => player.handle_mut().finish(),
            Command::Reject(reason) => {
                if !player.handle_mut().reject(&reason) {
                    return Err(SessionError::NoPendingRequest);
                }
            }
            Command::Status => {}
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Current player snapshot
    pub fn status(&self) -> StatusReport {
        let player = &self.controller;
        let handle = player.handle();
        let track = player.current_track();
        let state = player.state();

        StatusReport {
            index: player.current_index(),
            length: player.playlist().len(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            state: state.play,
            elapsed: format_time(handle.current_time()),
            duration: format_time(handle.duration().unwrap_or(f64::NAN)),
            shuffle: state.shuffle,
            repeat: state.repeat,
            liked: state.liked,
            volume: state.volume,
        }
    }

    pub fn controller(&self) -> &ConsoleController {
        &self.controller
    }

    // Feed handle events back until the handle goes quiet; an `Ended` can
    // load the next track, which reports metadata in turn.
    fn pump(&mut self) -> Result<(), PlayerError> {
        loop {
            let events = self.controller.handle_mut().take_events();
            if events.is_empty() {
                return Ok(());
            }
            for event in events {
                self.controller.handle_event(event)?;
            }
        }
    }

    fn flush<W: Write>(&mut self, output: &mut W) -> anyhow::Result<()> {
        let lines = self.controller.view_mut().take_lines();
        let events = self.controller.drain_events();

        if self.options.json {
            for event in &events {
                writeln!(output, "{}", serde_json::to_string(event)?)?;
            }
        } else {
            for line in &lines {
                writeln!(output, "{}", line)?;
            }
        }
        Ok(())
    }

    /// Print a status snapshot
    pub fn print_status<W: Write>(&self, output: &mut W) -> anyhow::Result<()> {
        let status = self.status();
        if self.options.json {
            writeln!(output, "{}", serde_json::to_string(&status)?)?;
        } else {
            writeln!(
                output,
                "[{}/{}] {} - {} ({}) {} / {}  shuffle={} repeat={} liked={} volume={}",
                status.index + 1,
                status.length,
                status.title,
                status.artist,
                state_label(status.state),
                status.elapsed,
                status.duration,
                status.shuffle,
                status.repeat,
                status.liked,
                status.volume,
            )?;
        }
        Ok(())
    }
}

fn state_label(state: PlayState) -> &'static str {
    match state {
        PlayState::Paused => "paused",
        PlayState::Requesting => "requesting",
        PlayState::Playing => "playing",
    }
}

