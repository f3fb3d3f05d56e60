//! Render a submission into the relay's outgoing mail.

use vitrine_model::ContactSubmission;

use super::OutgoingMail;

pub fn render(submission: &ContactSubmission) -> OutgoingMail {
    let text_body = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        submission.name, submission.email, submission.message
    );

    // User-supplied content is entity-escaped before interpolation; the
    // message additionally gets its newlines rendered as breaks.
    let html_body = format!(
        concat!(
            r#"<div style="font-family: Arial, sans-serif; padding: 20px; border: 1px solid #eee; border-radius: 5px;">"#,
            r#"<h2 style="color: #333;">New Contact Form Submission</h2>"#,
            "<p><strong>Name:</strong> {name}</p>",
            "<p><strong>Email:</strong> {email}</p>",
            "<br>",
            "<p><strong>Message:</strong></p>",
            r#"<p style="background: #f9f9f9; padding: 15px; border-radius: 5px;">{message}</p>"#,
            "</div>",
        ),
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        message = escape_html(&submission.message).replace('\n', "<br>"),
    );

    OutgoingMail {
        reply_to: submission.email.clone(),
        subject: format!("New Portfolio Message from {}", submission.name),
        text_body,
        html_body,
    }
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
