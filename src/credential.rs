use std::fmt;

/// The Spoonacular API key, held in memory only
///
/// `form_visible` mirrors whether the key entry form should be shown. It
/// starts out visible and is hidden once a non-blank key is saved.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    key: String,
    form_visible: bool,
}

impl Default for Credential {
    fn default() -> Self {
        Self {
            key: String::new(),
            form_visible: true,
        }
    }
}

impl Credential {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the key as typed, without saving
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// Save the current key. Returns false and changes nothing if it is blank.
    pub fn save(&mut self) -> bool {
        if self.is_blank() {
            return false;
        }
        self.key = self.key.trim().to_string();
        self.form_visible = false;
        true
    }

    pub fn show_form(&mut self) {
        self.form_visible = true;
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn is_blank(&self) -> bool {
        self.key.trim().is_empty()
    }

    pub fn key(&self) -> &str {
        self.key.trim()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("key", &if self.is_blank() { "<empty>" } else { "<redacted>" })
            .field("form_visible", &self.form_visible)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_starts_visible() {
        let credential = Credential::new();
        assert!(credential.form_visible());
        assert!(credential.is_blank());
    }

    #[test]
    fn test_save_blank_key_keeps_form() {
        let mut credential = Credential::new();
        credential.set_key("   ");
        assert!(!credential.save());
        assert!(credential.form_visible());
    }

    #[test]
    fn test_save_hides_form_and_show_reopens() {
        let mut credential = Credential::new();
        credential.set_key(" abc123 ");
        assert!(credential.save());
        assert!(!credential.form_visible());
        assert_eq!(credential.key(), "abc123");

        credential.show_form();
        assert!(credential.form_visible());
        assert_eq!(credential.key(), "abc123");
    }

    #[test]
    fn test_debug_redacts_key() {
        let mut credential = Credential::new();
        credential.set_key("super-secret");
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
