use super::{Flow, Menu};
use crate::notes::search;
use crate::timelog::Clock;
use std::io::{self, BufRead, Write};
use std::path::Path;

impl<R: BufRead, W: Write, C: Clock> Menu<R, W, C> {
    pub(super) fn notes_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "\n--- Local Brain Dump Search ---")?;
            writeln!(self.output, "1. Search Notes")?;
            writeln!(self.output, "0. Back")?;

            let Some(choice) = self.ask("\n> Go: ")? else {
                return Ok(Flow::Quit);
            };

            match choice.as_str() {
                "1" => {
                    if self.search_notes()? == Flow::Quit
                        || self.pause("Press Enter to continue...")? == Flow::Quit
                    {
                        return Ok(Flow::Quit);
                    }
                }
                "0" => return Ok(Flow::Back),
                _ => writeln!(self.output, "1 or 0, please.")?,
            }
        }
    }

    fn search_notes(&mut self) -> io::Result<Flow> {
        let Some(folder) = self.ask("\nNotes folder (e.g., C:/notes): ")? else {
            return Ok(Flow::Quit);
        };
        let dir = Path::new(&folder);
        if !dir.is_dir() {
            writeln!(self.output, "Can't find the notes folder.")?;
            return Ok(Flow::Stay);
        }

        let Some(keyword) = self.ask("What keyword are you looking for? ")? else {
            return Ok(Flow::Quit);
        };
        if keyword.is_empty() {
            writeln!(self.output, "Need a keyword, dude.")?;
            return Ok(Flow::Stay);
        }

        writeln!(self.output, "\nSearching for '{}'...", keyword)?;
        match search(dir, &keyword, &self.suite.note_extensions) {
            Ok(hits) if hits.is_empty() => writeln!(
                self.output,
                "Couldn't find '{}' anywhere. Better luck next time.",
                keyword
            )?,
            Ok(hits) => {
                writeln!(self.output, "\n** FOUND IT! In these files: **")?;
                for name in hits {
                    writeln!(self.output, " - {}", name)?;
                }
            }
            Err(e) => writeln!(self.output, "Search failed: {}", e)?,
        }
        writeln!(self.output)?;
        Ok(Flow::Stay)
    }
}
