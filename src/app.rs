use crate::audio::{Audio, Bell};
use crate::command::Command;
use crate::game::Game;
use crate::util::Globals;
use crossterm::event::{poll, read, Event};
use rand::{rngs::ThreadRng, Rng};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub(crate) struct App<R = ThreadRng, A = Bell<io::Stdout>> {
    globals: Globals,
    game: Game<R>,
    audio: A,
    pacer: Pacer,
    quitting: bool,
}

impl App {
    pub(crate) fn new(globals: Globals) -> App {
        let audio = Bell::new(io::stdout(), globals.assets.sounds);
        let game = Game::new(globals.grid);
        App::from_parts(globals, game, audio)
    }
}

impl<R: Rng, A: Audio> App<R, A> {
    pub(crate) fn from_parts(globals: Globals, game: Game<R>, audio: A) -> App<R, A> {
        let pacer = Pacer::new(globals.tick_period);
        App {
            globals,
            game,
            audio,
            pacer,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            let was_playing = self.game.playing();
            self.wait_for_tick()?;
            self.end_tick(was_playing);
        }
        Ok(())
    }

    /// Step the game, unless the player quit during this tick or the game was
    /// over when the tick began.  A freshly restarted snake thus gets drawn
    /// at its starting cell before it first moves.
    fn end_tick(&mut self, was_playing: bool) {
        if was_playing && !self.quitting {
            self.game.step(&mut self.audio);
        }
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| self.game.draw(frame, &self.globals.assets.food))?;
        Ok(())
    }

    /// Handle input events until the next tick is due or the player quits
    fn wait_for_tick(&mut self) -> io::Result<()> {
        let deadline = self.pacer.next_tick(Instant::now());
        while !self.quitting {
            let wait = deadline.saturating_duration_since(Instant::now());
            if !poll(wait)? {
                break;
            }
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event.as_key_press_event().and_then(Command::from_key_event) {
            Some(Command::Quit) => {
                log::info!("Quitting");
                self.quitting = true;
            }
            Some(cmd) => self.game.handle_command(cmd),
            None => (),
        }
    }
}

/// Schedules ticks at a fixed rate.  If a tick runs late, the schedule
/// resumes from the late tick rather than trying to catch up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Pacer {
    period: Duration,
    last: Option<Instant>,
}

impl Pacer {
    fn new(period: Duration) -> Pacer {
        Pacer { period, last: None }
    }

    /// Return the instant at which the next tick should run, given that the
    /// current time is `now`
    fn next_tick(&mut self, now: Instant) -> Instant {
        let next = match self.last {
            Some(last) => (last + self.period).max(now),
            None => now + self.period,
        };
        self.last = Some(next);
        next
    }
}
