//! Plain-text rendering of records and drafts for the menu.

use crate::email::EmailDraft;
use crate::organizer::OrganizeReport;
use crate::types::{Session, Task};

/// Shown in place of a missing session end.
pub const STILL_ACTIVE: &str = "STILL ACTIVE?";

/// One task row: `[01] title (padded) | DUE: due | PENDING`.
pub fn format_task_line(position: usize, task: &Task) -> String {
    let status = if task.stat.is_completed() {
        "**DONE**"
    } else {
        "PENDING"
    };
    format!(
        "[{:02}] {:<35} | DUE: {} | {}",
        position, task.title, task.due, status
    )
}

/// Numbered task table, or `None` when there is nothing to show.
pub fn format_task_list(tasks: &[Task]) -> Option<String> {
    if tasks.is_empty() {
        return None;
    }
    let mut out = String::new();
    for (i, task) in tasks.iter().enumerate() {
        out.push_str(&format_task_line(i + 1, task));
        out.push('\n');
    }
    out.push_str(&"-".repeat(50));
    Some(out)
}

pub fn format_session_line(position: usize, session: &Session) -> String {
    format!(
        "S{}. Start: {} | Ended: {}",
        position,
        session.start_time,
        session.end_time.as_deref().unwrap_or(STILL_ACTIVE)
    )
}

pub fn format_session_list(sessions: &[Session]) -> Option<String> {
    if sessions.is_empty() {
        return None;
    }
    let lines: Vec<String> = sessions
        .iter()
        .enumerate()
        .map(|(i, s)| format_session_line(i + 1, s))
        .collect();
    Some(lines.join("\n"))
}

pub fn format_email(draft: &EmailDraft) -> String {
    format!("Subject: {}\n\n{}", draft.subject, draft.body)
}

/// Failures first, then the total.
pub fn format_organize_report(report: &OrganizeReport) -> String {
    let mut out = String::new();
    for failure in &report.failures {
        out.push_str(&format!(
            "Skipping {} ({})\n",
            failure.file_name, failure.error
        ));
    }
    out.push_str(&format!("Finished! Moved {} things.", report.moved()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskStatus;

    #[test]
    fn test_task_line_padding_and_status() {
        let mut task = Task::new("Buy milk", "today");
        assert_eq!(
            format_task_line(3, &task),
            format!("[03] Buy milk{} | DUE: today | PENDING", " ".repeat(27))
        );

        task.stat = TaskStatus::Completed;
        assert!(format_task_line(12, &task).starts_with("[12] Buy milk"));
        assert!(format_task_line(12, &task).ends_with("| **DONE**"));
    }

    #[test]
    fn test_empty_lists_render_nothing() {
        assert!(format_task_list(&[]).is_none());
        assert!(format_session_list(&[]).is_none());
    }

    #[test]
    fn test_session_line_without_end() {
        let session = Session::started_at("2026-01-30 @ 09:00:00");
        assert_eq!(
            format_session_line(1, &session),
            "S1. Start: 2026-01-30 @ 09:00:00 | Ended: STILL ACTIVE?"
        );
    }

    #[test]
    fn test_email_layout() {
        let draft = EmailDraft {
            subject: "Hi".into(),
            body: "Body".into(),
        };
        assert_eq!(format_email(&draft), "Subject: Hi\n\nBody");
    }

    #[test]
    fn test_organize_report_summary() {
        let report = OrganizeReport::default();
        assert_eq!(format_organize_report(&report), "Finished! Moved 0 things.");
    }
}
