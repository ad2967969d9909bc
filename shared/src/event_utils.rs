//! Event codes and links
//!
//! An event's code is a URL slug of its title. Attendance and feedback pages
//! address events by code.

use crate::models::event::EventType;

/// Lowercase the title and replace every whitespace run with `-`
pub fn event_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    slug
}

/// `/admin/attend/{slug}`
pub fn attendance_link(title: &str) -> String {
    format!("/admin/attend/{}", event_slug(title))
}

/// `/feedback/{slug}`
pub fn feedback_link(title: &str) -> String {
    format!("/feedback/{}", event_slug(title))
}

/// Whether the feedback QR code is offered for this event type
pub fn should_show_feedback_qr(event_type: EventType) -> bool {
    event_type.collects_feedback()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_basic() {
        assert_eq!(event_slug("ML Workshop"), "ml-workshop");
        assert_eq!(event_slug("ML  Workshop 2025"), "ml-workshop-2025");
        assert_eq!(event_slug("Tech\tTalk\n"), "tech-talk-");
    }

    #[test]
    fn test_slug_keeps_punctuation() {
        assert_eq!(event_slug("Rust: Intro/Advanced"), "rust:-intro/advanced");
    }

    #[test]
    fn test_slug_edges() {
        assert_eq!(event_slug(" Leading"), "-leading");
        assert_eq!(event_slug("   "), "-");
        assert_eq!(event_slug(""), "");
    }

    #[test]
    fn test_links() {
        assert_eq!(attendance_link("AI Seminar"), "/admin/attend/ai-seminar");
        assert_eq!(feedback_link("AI Seminar"), "/feedback/ai-seminar");
    }

    #[test]
    fn test_feedback_qr() {
        assert!(!should_show_feedback_qr(EventType::DepartmentMeeting));
        assert!(should_show_feedback_qr(EventType::Workshop));
    }
}
