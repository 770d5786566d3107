//! Templates for the two visitor-facing forms.
//!
//! Visitor input is HTML-escaped before it is placed in an HTML body.

use crate::OutgoingEmail;

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Submission from the contact page form.
#[derive(Debug, Clone)]
pub struct ContactFormEmail<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

impl ContactFormEmail<'_> {
    /// Render for delivery to `to`, replying to the visitor.
    pub fn render(&self, to: &str) -> OutgoingEmail {
        let text = format!(
            "Name: {} {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}\n",
            self.first_name, self.last_name, self.email, self.subject, self.message
        );
        let html = format!(
            "<h2>New Contact Form Submission</h2>\n\
             <p><strong>Name:</strong> {} {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Subject:</strong> {}</p>\n\
             <h3>Message:</h3>\n\
             <p>{}</p>\n",
            escape_html(self.first_name),
            escape_html(self.last_name),
            escape_html(self.email),
            escape_html(self.subject),
            escape_html(self.message),
        );
        OutgoingEmail {
            to: to.to_string(),
            reply_to: Some(self.email.to_string()),
            subject: format!("Contact Form: {}", self.subject),
            text: Some(text),
            html,
        }
    }
}

/// Short message sent from the site footer.
#[derive(Debug, Clone)]
pub struct QuickMessageEmail<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: Option<&'a str>,
    pub message: &'a str,
}

impl QuickMessageEmail<'_> {
    pub fn render(&self, to: &str) -> OutgoingEmail {
        let subject_line = self
            .subject
            .map(|s| format!("<p><strong>Subject:</strong> {}</p>\n", escape_html(s)))
            .unwrap_or_default();
        let html = format!(
            "<div>\n\
             <h2>New message from your portfolio website</h2>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             {}\
             <p><strong>Message:</strong></p>\n\
             <p>{}</p>\n\
             </div>\n",
            escape_html(self.name),
            escape_html(self.email),
            subject_line,
            escape_html(self.message).replace('\n', "<br>"),
        );
        OutgoingEmail {
            to: to.to_string(),
            reply_to: Some(self.email.to_string()),
            subject: match self.subject {
                Some(s) => s.to_string(),
                None => format!("New message from {}", self.name),
            },
            text: None,
            html,
        }
    }
}
