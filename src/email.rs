//! Fill-in-the-blank email templates.

/// A template with its blanks filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailTemplate {
    LeaveRequest {
        name: String,
        reason: String,
        dates: String,
    },
    Complaint {
        issue: String,
    },
    Custom {
        subject: String,
        body: String,
    },
}

/// A rendered email ready to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

impl EmailTemplate {
    pub fn render(&self) -> EmailDraft {
        match self {
            EmailTemplate::LeaveRequest {
                name,
                reason,
                dates,
            } => EmailDraft {
                subject: format!("Out of Office: {}", name),
                body: format!(
                    "Hey [Boss Name],\n\n\
                     I'll be out of the office from {} because of {}.\n\n\
                     Talk soon,\n{}",
                    dates, reason, name
                ),
            },
            EmailTemplate::Complaint { issue } => EmailDraft {
                subject: format!("This is Unacceptable: {}", issue),
                body: format!(
                    "To Whom It May Concern,\n\n\
                     Your service/product has failed me. The issue is: {}.\n\n\
                     Fix this ASAP.\n\n\
                     Regards,\n[My Account ID]",
                    issue
                ),
            },
            EmailTemplate::Custom { subject, body } => EmailDraft {
                subject: subject.clone(),
                body: body.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_request() {
        let draft = EmailTemplate::LeaveRequest {
            name: "Sam".into(),
            reason: "vacation".into(),
            dates: "10/10 to 10/12".into(),
        }
        .render();

        assert_eq!(draft.subject, "Out of Office: Sam");
        assert_eq!(
            draft.body,
            "Hey [Boss Name],\n\nI'll be out of the office from 10/10 to 10/12 because of vacation.\n\nTalk soon,\nSam"
        );
    }

    #[test]
    fn test_complaint() {
        let draft = EmailTemplate::Complaint {
            issue: "router died".into(),
        }
        .render();

        assert_eq!(draft.subject, "This is Unacceptable: router died");
        assert!(draft.body.contains("The issue is: router died.\n\nFix this ASAP."));
        assert!(draft.body.ends_with("Regards,\n[My Account ID]"));
    }

    #[test]
    fn test_custom_passes_through() {
        let draft = EmailTemplate::Custom {
            subject: "Hi".into(),
            body: "See you".into(),
        }
        .render();
        assert_eq!(
            draft,
            EmailDraft {
                subject: "Hi".into(),
                body: "See you".into()
            }
        );
    }
}
