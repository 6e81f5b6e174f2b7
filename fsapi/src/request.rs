//! Request URL construction
//!
//! Turns a verb, an optional command path and caller arguments into the
//! relative path and query handed to the transport, injecting the PIN, the
//! session id and the list paging defaults.

use url::form_urlencoded;

use crate::error::{ApiError, Result};
use crate::session::Session;
use crate::verb::Verb;

/// Page size requested by LIST_GET_NEXT unless the caller sets `maxItems`
pub const DEFAULT_MAX_ITEMS: u16 = u16::MAX;

/// Cursor segment meaning "from the start of the list"
pub const LIST_START: i32 = -1;

/// Ordered query arguments
///
/// Keys keep their insertion order; inserting an existing key replaces its
/// value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pairs: Vec<(String, String)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Args::new();
        for (k, v) in iter {
            args.insert(k, v);
        }
        args
    }
}

/// Build the path and query for one request, starting the list at the
/// default cursor
pub fn build(session: &Session, verb: Verb, command: Option<&str>, args: &Args) -> Result<String> {
    build_at(session, verb, command, args, LIST_START)
}

/// Like [`build`], with an explicit LIST_GET_NEXT cursor
pub fn build_at(
    session: &Session,
    verb: Verb,
    command: Option<&str>,
    args: &Args,
    cursor: i32,
) -> Result<String> {
    if verb.requires_command() && command.is_none() {
        return Err(ApiError::MissingCommand(verb));
    }
    let session_id = match (verb.requires_session(), session.id()) {
        (true, None) => return Err(ApiError::NoSession),
        (_, id) => id,
    };

    let mut path = verb.keyword().to_string();
    let mut query = form_urlencoded::Serializer::new(String::new());

    if verb == Verb::GetNotify {
        // Fixed endpoint that names the session parameter `sid`
        query.append_pair("pin", &session.pin().to_string());
        if let Some(id) = session_id {
            query.append_pair("sid", &id.to_string());
        }
        return Ok(format!("{}?{}", path, query.finish()));
    }

    if let Some(command) = command {
        path.push('/');
        path.push_str(command);
    }
    if verb == Verb::ListGetNext {
        path.push('/');
        path.push_str(&cursor.to_string());
    }

    let mut full = args.clone();
    full.insert("pin", session.pin());
    if let (true, Some(id)) = (verb.requires_session(), session_id) {
        full.insert("session", id);
    }
    if verb == Verb::ListGetNext && !full.contains_key("maxItems") {
        full.insert("maxItems", DEFAULT_MAX_ITEMS);
    }

    query.extend_pairs(full.iter());
    Ok(format!("{}?{}", path, query.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command;
    use proptest::prelude::*;

    fn active(id: u32) -> Session {
        let mut session = Session::new(1234);
        session.activate(id);
        session
    }

    #[test]
    fn test_create_session_has_no_session_param() {
        let url = build(&Session::new(1234), Verb::CreateSession, None, &Args::new()).unwrap();
        assert_eq!(url, "CREATE_SESSION?pin=1234");
    }

    #[test]
    fn test_get_injects_pin_and_session() {
        let url = build(&active(42), Verb::Get, Some(command::VOLUME), &Args::new()).unwrap();
        assert_eq!(url, "GET/netRemote.sys.audio.volume?pin=1234&session=42");
    }

    #[test]
    fn test_set_keeps_caller_args_first() {
        let args = Args::new().with("value", 12);
        let url = build(&active(42), Verb::Set, Some(command::VOLUME), &args).unwrap();
        assert_eq!(url, "SET/netRemote.sys.audio.volume?value=12&pin=1234&session=42");
    }

    #[test]
    fn test_list_get_next_appends_cursor_and_page_size() {
        let url = build(&active(7), Verb::ListGetNext, Some(command::VALID_MODES), &Args::new()).unwrap();
        assert_eq!(
            url,
            "LIST_GET_NEXT/netRemote.sys.caps.validModes/-1?pin=1234&session=7&maxItems=65535"
        );
    }

    #[test]
    fn test_list_get_next_respects_caller_page_size() {
        let args = Args::new().with("maxItems", 20);
        let url = build_at(&active(7), Verb::ListGetNext, Some(command::NAV_LIST), &args, 19).unwrap();
        assert_eq!(url, "LIST_GET_NEXT/netRemote.nav.list/19?maxItems=20&pin=1234&session=7");
    }

    #[test]
    fn test_colliding_key_is_replaced_in_place() {
        let args = Args::new().with("pin", 9999).with("value", 1);
        let url = build(&active(3), Verb::Set, Some(command::POWER), &args).unwrap();
        assert_eq!(url, "SET/netRemote.sys.power?pin=1234&value=1&session=3");
    }

    #[test]
    fn test_get_notifies_uses_sid() {
        let args = Args::new().with("ignored", "x");
        let url = build(&active(5), Verb::GetNotify, Some(command::POWER), &args).unwrap();
        assert_eq!(url, "GET_NOTIFIES?pin=1234&sid=5");
    }

    #[test]
    fn test_delete_session() {
        let url = build(&active(5), Verb::DeleteSession, None, &Args::new()).unwrap();
        assert_eq!(url, "DELETE_SESSION?pin=1234&session=5");
    }

    #[test]
    fn test_values_are_encoded() {
        let args = Args::new().with("value", "Ö1 & more");
        let url = build(&active(1), Verb::Set, Some(command::SEARCH), &args).unwrap();
        assert_eq!(url, "SET/netRemote.nav.searchTerm?value=%C3%961+%26+more&pin=1234&session=1");
    }

    #[test]
    fn test_caller_errors() {
        let inactive = Session::new(1234);
        assert!(matches!(
            build(&inactive, Verb::Get, Some(command::POWER), &Args::new()),
            Err(ApiError::NoSession)
        ));
        assert!(matches!(
            build(&active(1), Verb::Get, None, &Args::new()),
            Err(ApiError::MissingCommand(Verb::Get))
        ));
    }

    #[test]
    fn test_args_replace_in_place() {
        let mut args: Args = vec![("a", "1"), ("b", "2")].into_iter().collect();
        args.insert("a", "3");
        assert_eq!(args.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
        assert_eq!(args.len(), 2);
    }

    proptest! {
        #[test]
        fn test_query_round_trip(
            pairs in proptest::collection::vec(("[a-zA-Z][a-zA-Z0-9_]{0,8}", "\\PC{0,16}"), 0..6)
        ) {
            let args: Args = pairs
                .into_iter()
                .filter(|(k, _)| !matches!(k.as_str(), "pin" | "session" | "maxItems"))
                .collect();

            let url = build(&active(99), Verb::Set, Some(command::SEARCH), &args).unwrap();
            let (_, query) = url.split_once('?').unwrap();
            let decoded: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect();

            let expected: Vec<(String, String)> = args
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            prop_assert_eq!(&decoded[..args.len()], &expected[..]);
            prop_assert_eq!(&decoded[args.len()..], &[
                ("pin".to_string(), "1234".to_string()),
                ("session".to_string(), "99".to_string()),
            ][..]);
        }
    }
}
