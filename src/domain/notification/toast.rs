//! Fire-and-forget toast request

/// A single desktop alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    /// Optional third line of text
    pub extra_line: Option<String>,
    /// Critical urgency / alarm sound
    pub urgent: bool,
    /// Named sound (WSL only); `None` means silent unless `urgent`
    pub sound_name: Option<String>,
    /// Include the app icon where supported
    pub hero: bool,
}

impl NotificationRequest {
    /// Create a plain, silent notification
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            extra_line: None,
            urgent: false,
            sound_name: None,
            hero: false,
        }
    }

    /// Add a third line of text
    pub fn with_extra_line(mut self, line: impl Into<String>) -> Self {
        self.extra_line = Some(line.into());
        self
    }

    /// Mark as urgent (critical urgency, alarm sound)
    pub fn urgent(mut self, urgent: bool) -> Self {
        self.urgent = urgent;
        self
    }

    /// Request a named sound
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound_name = Some(sound.into());
        self
    }

    /// Include the app icon
    pub fn hero(mut self, hero: bool) -> Self {
        self.hero = hero;
        self
    }

    /// Body and extra line joined with `separator`
    pub fn joined_body(&self, separator: &str) -> String {
        match &self.extra_line {
            Some(line) => format!("{}{}{}", self.body, separator, line),
            None => self.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_plain_and_silent() {
        let req = NotificationRequest::new("Build", "Done");
        assert_eq!(req.title, "Build");
        assert_eq!(req.body, "Done");
        assert!(!req.urgent);
        assert!(!req.hero);
        assert!(req.extra_line.is_none());
        assert!(req.sound_name.is_none());
    }

    #[test]
    fn joined_body_without_extra_line() {
        let req = NotificationRequest::new("t", "body");
        assert_eq!(req.joined_body(" | "), "body");
    }

    #[test]
    fn joined_body_with_extra_line() {
        let req = NotificationRequest::new("t", "body").with_extra_line("more");
        assert_eq!(req.joined_body(" | "), "body | more");
        assert_eq!(req.joined_body("\n"), "body\nmore");
    }
}
