//! Main application state and event loop

use crate::animation::{Animator, FULL_MESSAGE};
use crate::clock::Clock;
use crate::config::Config;
use crate::input::{Entry, KeySource, MenuCommand, read_value};
use crate::store::Stack;
use crate::ui::scene::{Scene, Screen};
use std::io;
use tracing::{debug, info, warn};

pub const WELCOME_MESSAGE: &str = "Welcome! Press P to push your first item.";
pub const CANCELLED_MESSAGE: &str = "Push operation cancelled.";

/// What the application is doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Polling for a menu key
    Idle,
    EnteringValue,
    PushAnimating,
    PopAnimating,
    Terminating,
}

/// The main application state
pub struct App<S: Screen, K: KeySource, C: Clock> {
    stack: Stack,
    screen: S,
    keys: K,
    clock: C,
    config: Config,
    mode: Mode,
    /// Message on the idle board until the first command is handled
    banner: Option<&'static str>,
}

impl<S: Screen, K: KeySource, C: Clock> App<S, K, C> {
    pub fn new(screen: S, keys: K, clock: C, config: Config) -> Self {
        App {
            stack: Stack::new(),
            screen,
            keys,
            clock,
            config,
            mode: Mode::Idle,
            banner: Some(WELCOME_MESSAGE),
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Give the screen back, e.g. to restore the terminal
    pub fn into_screen(self) -> S {
        self.screen
    }

    /// Run until `Q` is pressed, then show the farewell screen
    pub fn run(&mut self) -> io::Result<()> {
        info!("stack visualizer started");

        while self.mode != Mode::Terminating {
            self.draw_idle()?;

            let key = self
                .keys
                .poll_key(self.config.timing.poll_interval())?;
            if let Some(command) = key.and_then(MenuCommand::from_key) {
                self.handle_command(command)?;
            }
        }

        self.farewell()
    }

    /// Run one menu command to completion
    pub fn handle_command(&mut self, command: MenuCommand) -> io::Result<()> {
        debug!(?command, "menu command");
        self.banner = None;

        match command {
            MenuCommand::Push => self.push()?,
            MenuCommand::Pop => {
                self.mode = Mode::PopAnimating;
                Animator::new(&mut self.screen, &mut self.clock, &self.config.timing)
                    .pop(&mut self.stack)?;
            }
            MenuCommand::Quit => {
                self.mode = Mode::Terminating;
                return Ok(());
            }
        }

        self.mode = Mode::Idle;
        self.draw_idle()
    }

    fn push(&mut self) -> io::Result<()> {
        if self.stack.is_full() {
            warn!("push requested on a full stack");
            return Animator::new(&mut self.screen, &mut self.clock, &self.config.timing).notify(
                &self.stack,
                FULL_MESSAGE,
                self.config.timing.failure_dwell(),
            );
        }

        self.mode = Mode::EnteringValue;
        match read_value(&mut self.keys, &mut self.screen, &self.stack)? {
            Entry::Value(value) => {
                self.mode = Mode::PushAnimating;
                Animator::new(&mut self.screen, &mut self.clock, &self.config.timing)
                    .push(&mut self.stack, value)?;
            }
            Entry::Cancelled => {
                info!("push cancelled");
                Animator::new(&mut self.screen, &mut self.clock, &self.config.timing).notify(
                    &self.stack,
                    CANCELLED_MESSAGE,
                    self.config.timing.message_dwell(),
                )?;
            }
        }
        Ok(())
    }

    fn draw_idle(&mut self) -> io::Result<()> {
        let scene = match self.banner {
            Some(banner) => Scene::message(&self.stack, banner),
            None => Scene::board(&self.stack),
        };
        self.screen.show(&scene)
    }

    fn farewell(&mut self) -> io::Result<()> {
        info!(count = self.stack.len(), "shutting down");
        self.screen.show(&Scene::Farewell)?;
        self.clock.sleep(self.config.timing.farewell_dwell());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::input::ScriptedKeys;
    use crate::ui::scene::{SceneRecorder, Shot};

    fn app(script: &str) -> App<SceneRecorder, ScriptedKeys, ManualClock> {
        App::new(
            SceneRecorder::default(),
            ScriptedKeys::typed(script),
            ManualClock::new(),
            Config::default(),
        )
    }

    #[test]
    fn test_welcome_until_first_command() {
        let mut app = app("xq");
        app.run().unwrap();

        let messages = app.screen().messages();
        // Drawn on both idle iterations; 'x' is ignored and keeps the banner
        assert_eq!(messages, vec![WELCOME_MESSAGE, WELCOME_MESSAGE]);
        assert_eq!(app.screen().shots.last(), Some(&Shot::Farewell));
        assert_eq!(app.mode(), Mode::Terminating);
    }

    #[test]
    fn test_push_while_full_skips_entry() {
        let mut app = app("");
        for v in 1..=10 {
            app.stack.push(v).unwrap();
        }

        app.handle_command(MenuCommand::Push).unwrap();
        assert_eq!(app.stack().len(), 10);
        assert!(app.screen().messages().contains(&FULL_MESSAGE));
        assert_eq!(
            app.clock().sleeps,
            vec![Config::default().timing.failure_dwell()]
        );
        assert_eq!(app.mode(), Mode::Idle);
    }

    #[test]
    fn test_cancelled_push() {
        let mut app = app("4\x1b");
        app.handle_command(MenuCommand::Push).unwrap();

        assert!(app.stack().is_empty());
        assert_eq!(app.screen().messages(), vec![CANCELLED_MESSAGE]);
        assert_eq!(
            app.clock().sleeps,
            vec![Config::default().timing.message_dwell()]
        );
    }

    #[test]
    fn test_command_ends_on_clean_board() {
        let mut app = app("8\r");
        app.handle_command(MenuCommand::Push).unwrap();

        assert_eq!(
            app.screen().shots.last(),
            Some(&Shot::Board {
                values: vec![8],
                message: None,
                entry: None,
                moving: None,
            })
        );
    }
}
