use super::{Flow, Menu};
use crate::error::SuiteError;
use crate::format::format_task_list;
use crate::timelog::Clock;
use std::io::{self, BufRead, Write};

impl<R: BufRead, W: Write, C: Clock> Menu<R, W, C> {
    pub(super) fn task_menu(&mut self) -> io::Result<Flow> {
        loop {
            self.clear()?;
            let rule = "~".repeat(30);
            writeln!(self.output, "{}", rule)?;
            writeln!(self.output, " TASK MANAGER (v1.1) ")?;
            writeln!(self.output, "{}", rule)?;
            writeln!(self.output, "1. View Tasks")?;
            writeln!(self.output, "2. Add Task")?;
            writeln!(self.output, "3. Toggle Task Status (Done/Pending)")?;
            writeln!(self.output, "0. Back")?;

            let Some(choice) = self.ask("\n> What now? ")? else {
                return Ok(Flow::Quit);
            };

            let flow = match choice.as_str() {
                "1" => self.view_tasks()?,
                "2" => self.add_task()?,
                "3" => self.toggle_task()?,
                "0" => return Ok(Flow::Back),
                _ => {
                    writeln!(self.output, "Invalid input. Try again.")?;
                    Flow::Stay
                }
            };
            if flow == Flow::Quit {
                return Ok(flow);
            }

            if self.pause("...hit ENTER...")? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn view_tasks(&mut self) -> io::Result<Flow> {
        let loaded = self.suite.tasks.list();
        self.report_warning(&loaded)?;

        match format_task_list(&loaded.records) {
            None => writeln!(self.output, "\n--> Nothing left to do! You are free! <--\n")?,
            Some(table) => {
                writeln!(self.output, "\n[ YOUR TO-DO LIST (Don't look at the due dates) ]\n")?;
                writeln!(self.output, "{}", table)?;
            }
        }
        Ok(Flow::Stay)
    }

    fn add_task(&mut self) -> io::Result<Flow> {
        let Some(title) = self.ask("\nTask name (keep it brief): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(due) = self.ask("Due date (e.g., tomorrow, or 2026-01-30): ")? else {
            return Ok(Flow::Quit);
        };

        match self.suite.tasks.add(&title, &due) {
            Ok(_) => writeln!(self.output, "\n...Task added. It's officially on your plate.\n")?,
            Err(SuiteError::InvalidInput { .. }) => {
                writeln!(self.output, "Task needs a name. Aborting.")?
            }
            Err(e) => writeln!(self.output, "\nCould not save the task: {}", e)?,
        }
        Ok(Flow::Stay)
    }

    fn toggle_task(&mut self) -> io::Result<Flow> {
        let loaded = self.suite.tasks.list();
        self.report_warning(&loaded)?;
        let Some(table) = format_task_list(&loaded.records) else {
            writeln!(self.output, "\nNo tasks to mark.\n")?;
            return Ok(Flow::Stay);
        };
        writeln!(self.output, "\n{}", table)?;

        let Some(raw) = self.ask("\nTask # to flip status: ")? else {
            return Ok(Flow::Quit);
        };

        match self.suite.tasks.toggle(&raw) {
            Ok((index, status)) => writeln!(
                self.output,
                "\nTask {} status changed to **{}**.",
                index, status
            )?,
            Err(SuiteError::OutOfRange { .. }) => writeln!(
                self.output,
                "\nThat number is outside the bounds. Read the list carefully!"
            )?,
            Err(SuiteError::InvalidInput { .. }) => {
                writeln!(self.output, "\nMust be a digit. I can't work with that.")?
            }
            Err(e) => writeln!(self.output, "\nCould not update the task: {}", e)?,
        }
        Ok(Flow::Stay)
    }
}
