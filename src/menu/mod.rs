//! Interactive text menu.
//!
//! The menu reads lines from any `BufRead` and writes to any `Write`, so a
//! whole session can be scripted in tests. End of input behaves like
//! choosing quit. Errors from the utilities are printed and the menu is
//! shown again; only I/O errors on the console itself are returned.

mod email;
mod notes;
mod organizer;
mod tasks;
mod timelog;

use crate::config::Config;
use crate::store::{Loaded, RecordStore};
use crate::tasks::TaskList;
use crate::timelog::{Clock, SystemClock, TimeLog};
use std::io::{self, BufRead, Write};
use tracing::debug;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// The utilities behind the menu, wired from configuration.
pub struct Suite<C: Clock = SystemClock> {
    pub tasks: TaskList,
    pub timelog: TimeLog<C>,
    pub note_extensions: Vec<String>,
}

impl Suite<SystemClock> {
    pub fn from_config(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Suite<C> {
    pub fn with_clock(config: &Config, clock: C) -> Self {
        let store = RecordStore::from_config(&config.storage);
        Self {
            tasks: TaskList::new(store.clone(), &config.storage.tasks_file),
            timelog: TimeLog::new(
                store,
                &config.storage.sessions_file,
                clock,
                &config.timelog.timestamp_format,
            ),
            note_extensions: config.notes.extensions.clone(),
        }
    }
}

/// What the caller should do after a submenu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Stay,
    Back,
    Quit,
}

/// Line-driven console front end.
pub struct Menu<R, W, C: Clock = SystemClock> {
    suite: Suite<C>,
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write, C: Clock> Menu<R, W, C> {
    pub fn new(suite: Suite<C>, input: R, output: W) -> Self {
        Self {
            suite,
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the terminal before the main and task menus.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Give back the output sink (used by tests to inspect the transcript).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the main menu until quit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.clear()?;
            let banner = "=".repeat(35);
            writeln!(self.output, "{}", banner)?;
            writeln!(self.output, " ** Utility Suite For The Human Dev v0.5 ** ")?;
            writeln!(self.output, "{}", banner)?;
            writeln!(self.output, "1. ToDo List/Task Manager")?;
            writeln!(self.output, "2. File Cleanup/Organizer")?;
            writeln!(self.output, "3. Local Knowledge Search")?;
            writeln!(self.output, "4. Quick Email Drafter")?;
            writeln!(self.output, "5. Simple Time Log (Unfinished!)")?;
            writeln!(self.output, "0. Quit the Program")?;
            writeln!(self.output, "{}", banner)?;

            let Some(choice) = self.ask("\n> Pick a module: ")? else {
                return self.quit();
            };

            let flow = match choice.as_str() {
                "1" => self.task_menu()?,
                "2" => self.organizer_menu()?,
                "3" => self.notes_menu()?,
                "4" => self.email_menu()?,
                "5" => self.timelog_menu()?,
                "0" => return self.quit(),
                _ => {
                    writeln!(self.output, "Invalid choice, dude. Pick 0-5.")?;
                    self.pause("Press Enter to continue...")?
                }
            };

            if flow == Flow::Quit {
                return self.quit();
            }
        }
    }

    fn quit(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nShutting down. See ya later!")?;
        self.output.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }

    /// Prompt and read one trimmed line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Wait for Enter. End of input turns into quit.
    fn pause(&mut self, prompt: &str) -> io::Result<Flow> {
        match self.ask(&format!("\n{}", prompt))? {
            Some(_) => Ok(Flow::Stay),
            None => Ok(Flow::Quit),
        }
    }

    /// Print the recovery warning of a load, if any.
    fn report_warning<T>(&mut self, loaded: &Loaded<T>) -> io::Result<()> {
        if let Some(ref warning) = loaded.warning {
            writeln!(self.output, "!! WARNING: {}. Starting fresh. !!", warning)?;
        }
        Ok(())
    }
}
