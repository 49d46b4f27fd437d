use super::{Flow, Menu};
use crate::format::format_session_list;
use crate::timelog::Clock;
use std::io::{self, BufRead, Write};

impl<R: BufRead, W: Write, C: Clock> Menu<R, W, C> {
    pub(super) fn timelog_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "\n--- Simple Time Log ---")?;
            writeln!(self.output, "1. Log Session START")?;
            writeln!(self.output, "2. Log Session END (WIP)")?;
            writeln!(self.output, "3. View History")?;
            writeln!(self.output, "0. Back")?;

            let Some(choice) = self.ask("\n> Choice: ")? else {
                return Ok(Flow::Quit);
            };

            match choice.as_str() {
                "1" => self.start_session()?,
                "2" => self.end_session()?,
                "3" => self.show_history()?,
                "0" => return Ok(Flow::Back),
                _ => {
                    writeln!(self.output, "Bad input.")?;
                    continue;
                }
            }

            if self.pause("Hit Enter to continue...")? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn start_session(&mut self) -> io::Result<()> {
        match self.suite.timelog.start_session() {
            Ok(session) => writeln!(
                self.output,
                "\n[Session Started @ {}] Get to work!\n",
                session.start_time
            ),
            Err(e) => writeln!(self.output, "\nCould not log the session: {}\n", e),
        }
    }

    fn end_session(&mut self) -> io::Result<()> {
        if let Err(e) = self.suite.timelog.end_session() {
            writeln!(self.output, "\n--- Feature Not Implemented Yet (WIP) ---")?;
            writeln!(self.output, "Sorry, {}.", e)?;
        }
        Ok(())
    }

    fn show_history(&mut self) -> io::Result<()> {
        let loaded = self.suite.timelog.history();
        self.report_warning(&loaded)?;

        match format_session_list(&loaded.records) {
            None => writeln!(self.output, "\nNothing logged yet. Start a session!\n"),
            Some(list) => {
                writeln!(self.output, "\n--- WORK SESSION LOG (Raw Data) ---\n")?;
                writeln!(self.output, "{}\n", list)
            }
        }
    }
}
