use std::fmt;

/// Session of the visitor, passed explicitly to whatever needs it.
///
/// Populated from the persisted token at the start of a request and cleared on logout.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    token: Option<String>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Self::anonymous();
        }
        Self {
            token: Some(token.to_string()),
        }
    }

    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn clear(&mut self) {
        self.token = None;
    }
}

// Keep tokens out of logs.
impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_anonymous() {
        assert!(!SessionContext::with_token("   ").is_authenticated());
    }

    #[test]
    fn clear_drops_the_token() {
        let mut session = SessionContext::with_token("abc");
        assert_eq!(session.bearer(), Some("abc"));

        session.clear();

        assert_eq!(session, SessionContext::anonymous());
    }

    #[test]
    fn debug_output_hides_token() {
        let rendered = format!("{:?}", SessionContext::with_token("secret-token"));

        assert!(!rendered.contains("secret-token"));
        assert_eq!(rendered, "SessionContext { authenticated: true }");
    }
}
