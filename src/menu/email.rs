use super::{Flow, Menu};
use crate::email::EmailTemplate;
use crate::format::format_email;
use crate::timelog::Clock;
use std::io::{self, BufRead, Write};

impl<R: BufRead, W: Write, C: Clock> Menu<R, W, C> {
    pub(super) fn email_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "\n--- Email Draft Tool ---")?;
            writeln!(self.output, "1. Draft a Quick Email")?;
            writeln!(self.output, "0. Back")?;

            let Some(choice) = self.ask("\n> Pick: ")? else {
                return Ok(Flow::Quit);
            };

            match choice.as_str() {
                "1" => {
                    if self.draft_email()? == Flow::Quit
                        || self.pause("Hit Enter to continue...")? == Flow::Quit
                    {
                        return Ok(Flow::Quit);
                    }
                }
                "0" => return Ok(Flow::Back),
                _ => writeln!(self.output, "Invalid. Back.")?,
            }
        }
    }

    fn draft_email(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n--- Templates ---\n")?;
        writeln!(self.output, "1. Leave Request")?;
        writeln!(self.output, "2. Customer Complaint")?;
        writeln!(self.output, "3. Custom Quick Draft\n")?;

        let Some(choice) = self.ask("Template number: ")? else {
            return Ok(Flow::Quit);
        };

        let template = match choice.as_str() {
            "1" => {
                let fields = self.ask_all(&[
                    "Your name: ",
                    "Reason (e.g., sick, vacation): ",
                    "Dates (e.g., 10/10 to 10/12): ",
                ])?;
                let Some([name, reason, dates]) = fields else {
                    return Ok(Flow::Quit);
                };
                EmailTemplate::LeaveRequest {
                    name,
                    reason,
                    dates,
                }
            }
            "2" => {
                let Some(issue) =
                    self.ask("What's the one sentence summary of the problem?: ")?
                else {
                    return Ok(Flow::Quit);
                };
                EmailTemplate::Complaint { issue }
            }
            "3" => {
                let Some([subject, body]) = self.ask_all(&["Subject: ", "Body: "])? else {
                    return Ok(Flow::Quit);
                };
                EmailTemplate::Custom { subject, body }
            }
            _ => {
                writeln!(self.output, "Unknown template. Nothing generated.")?;
                return Ok(Flow::Stay);
            }
        };

        writeln!(self.output, "\n--- YOUR EMAIL DRAFT ---\n")?;
        writeln!(self.output, "{}\n", format_email(&template.render()))?;
        Ok(Flow::Stay)
    }

    /// Ask each prompt in turn; `None` if input ends midway.
    fn ask_all<const N: usize>(&mut self, prompts: &[&str; N]) -> io::Result<Option<[String; N]>> {
        let mut answers: [String; N] = std::array::from_fn(|_| String::new());
        for (answer, prompt) in answers.iter_mut().zip(prompts) {
            match self.ask(prompt)? {
                Some(line) => *answer = line,
                None => return Ok(None),
            }
        }
        Ok(Some(answers))
    }
}
