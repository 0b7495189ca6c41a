use std::fmt;

/// Identity used when the CI system creates tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagger {
    name: String,
    email: String,
}

impl Tagger {
    /// Parses `Name <email>`.
    ///
    /// Without a well-formed `<...>` part the whole string is the name and
    /// the email is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use vcsroot_git::Tagger;
    ///
    /// let tagger = Tagger::parse("Build Bot <ci@example.org>");
    /// assert_eq!(tagger.name(), "Build Bot");
    /// assert_eq!(tagger.email(), "ci@example.org");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let Some(start) = raw.find('<') else {
            return Self::name_only(raw);
        };
        match raw.rfind('>') {
            Some(end) if end > start => Self {
                name: raw[..start].trim().to_string(),
                email: raw[start + 1..end].to_string(),
            },
            _ => Self::name_only(raw),
        }
    }

    fn name_only(raw: &str) -> Self {
        Self {
            name: raw.to_string(),
            email: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Tagger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.email.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} <{}>", self.name, self.email)
        }
    }
}
