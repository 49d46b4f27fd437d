use super::{Flow, Menu};
use crate::error::SuiteError;
use crate::format::format_organize_report;
use crate::organizer::organize;
use crate::timelog::Clock;
use std::io::{self, BufRead, Write};
use std::path::Path;

impl<R: BufRead, W: Write, C: Clock> Menu<R, W, C> {
    pub(super) fn organizer_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "\n--- File Sorter (The Mess Maker) ---")?;
            writeln!(self.output, "1. Run Folder Sort")?;
            writeln!(self.output, "0. Back")?;

            let Some(choice) = self.ask("\nChoice: ")? else {
                return Ok(Flow::Quit);
            };

            match choice.as_str() {
                "1" => {
                    if self.run_organizer()? == Flow::Quit
                        || self.pause("Hit Enter to return...")? == Flow::Quit
                    {
                        return Ok(Flow::Quit);
                    }
                }
                "0" => return Ok(Flow::Back),
                _ => writeln!(self.output, "1 or 0, that's it.")?,
            }
        }
    }

    fn run_organizer(&mut self) -> io::Result<Flow> {
        let Some(folder) = self.ask("\nFolder path to organize: ")? else {
            return Ok(Flow::Quit);
        };

        writeln!(self.output, "\nStarting cleanup...\n")?;
        match organize(Path::new(&folder)) {
            Ok(report) => writeln!(self.output, "\n{}\n", format_organize_report(&report))?,
            Err(SuiteError::NotADirectory(_)) => writeln!(
                self.output,
                "Folder not found or it's not a folder, sorry."
            )?,
            Err(e) => writeln!(self.output, "Could not organize the folder: {}", e)?,
        }
        Ok(Flow::Stay)
    }
}
