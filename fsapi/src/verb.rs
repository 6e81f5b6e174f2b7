use std::fmt;

/// The request kinds of the FSAPI protocol
///
/// The verb decides the URL shape (keyword, cursor segment, injected
/// parameters) and the decode strategy for the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    CreateSession,
    DeleteSession,
    Get,
    Set,
    ListGetNext,
    GetNotify,
}

impl Verb {
    /// Every verb, in protocol order
    pub const ALL: [Verb; 6] = [
        Verb::CreateSession,
        Verb::DeleteSession,
        Verb::Get,
        Verb::Set,
        Verb::ListGetNext,
        Verb::GetNotify,
    ];

    /// The leading URL path segment for this verb
    pub fn keyword(&self) -> &'static str {
        match self {
            Verb::CreateSession => "CREATE_SESSION",
            Verb::DeleteSession => "DELETE_SESSION",
            Verb::Get => "GET",
            Verb::Set => "SET",
            Verb::ListGetNext => "LIST_GET_NEXT",
            Verb::GetNotify => "GET_NOTIFIES",
        }
    }

    /// Whether the request must carry the active session id
    pub fn requires_session(&self) -> bool {
        !matches!(self, Verb::CreateSession)
    }

    /// Whether the request addresses a node and therefore needs a command
    pub fn requires_command(&self) -> bool {
        matches!(self, Verb::Get | Verb::Set | Verb::ListGetNext)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_create_session_runs_without_session() {
        for verb in Verb::ALL {
            assert_eq!(verb.requires_session(), verb != Verb::CreateSession, "{verb:?}");
        }
    }

    #[test]
    fn test_keywords_are_distinct() {
        let mut keywords: Vec<_> = Verb::ALL.iter().map(Verb::keyword).collect();
        keywords.sort_unstable();
        keywords.dedup();
        assert_eq!(keywords.len(), Verb::ALL.len());
    }
}
