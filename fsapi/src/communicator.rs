use fsapi_transport::Transport;
use tracing::{debug, info, warn};

use crate::error::{ApiError, Result};
use crate::request::{self, Args, LIST_START};
use crate::response::{self, DecoderRegistry, FromResponse, ItemList, Notification, Response};
use crate::session::Session;
use crate::value::Value;
use crate::verb::Verb;

/// The FSAPI protocol engine
///
/// Each call is one linear exchange: build the request from the session and
/// arguments, fetch it through the transport, decode the body for the verb
/// and command. The communicator itself holds no session state; lifecycle
/// calls take the [`Session`] mutably, everything else borrows it.
///
/// ```rust,no_run
/// use fsapi::{command, Communicator, HttpTransport, Session};
///
/// let communicator = Communicator::new(HttpTransport::new("http://192.168.1.30/fsapi"));
/// let mut session = Session::new(1234);
/// communicator.create_session(&mut session)?;
///
/// let volume: u8 = communicator.get(&session, command::VOLUME)?;
/// communicator.set(&session, command::VOLUME, volume.saturating_add(1))?;
/// # Ok::<(), fsapi::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Communicator<T: Transport> {
    transport: T,
    registry: DecoderRegistry,
}

impl<T: Transport> Communicator<T> {
    /// Create a communicator with the standard command registry
    pub fn new(transport: T) -> Self {
        Self::with_registry(transport, DecoderRegistry::standard())
    }

    pub fn with_registry(transport: T, registry: DecoderRegistry) -> Self {
        Self { transport, registry }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn registry(&self) -> &DecoderRegistry {
        &self.registry
    }

    /// Open a session and store its id in `session`
    ///
    /// Opening a new session invalidates any other session on the device.
    pub fn create_session(&self, session: &mut Session) -> Result<u32> {
        let response = self.exchange(session, Verb::CreateSession, None, &Args::new(), LIST_START)?;
        match response {
            Response::Session(id) => {
                session.activate(id);
                info!(session_id = id, "FSAPI session created");
                Ok(id)
            }
            other => Err(unexpected("session id", &other)),
        }
    }

    /// Close the active session; `session` is inactive afterwards
    pub fn delete_session(&self, session: &mut Session) -> Result<()> {
        let response = self.exchange(session, Verb::DeleteSession, None, &Args::new(), LIST_START)?;
        <()>::from_response(response)?;
        if let Some(id) = session.id() {
            info!(session_id = id, "FSAPI session deleted");
        }
        session.invalidate();
        Ok(())
    }

    /// Run any non-lifecycle verb and convert the result into `R`
    ///
    /// Session creation and deletion change the session and go through
    /// [`create_session`](Self::create_session) and
    /// [`delete_session`](Self::delete_session) instead.
    pub fn execute<R: FromResponse>(
        &self,
        session: &Session,
        verb: Verb,
        command: Option<&str>,
        args: &Args,
    ) -> Result<R> {
        if matches!(verb, Verb::CreateSession | Verb::DeleteSession) {
            return Err(ApiError::InvalidParameter(format!(
                "{} changes the session; use the session lifecycle methods",
                verb
            )));
        }
        let response = self.exchange(session, verb, command, args, LIST_START)?;
        Ok(R::from_response(response)?)
    }

    /// Read a scalar node
    pub fn get<R: FromResponse>(&self, session: &Session, command: &str) -> Result<R> {
        self.execute(session, Verb::Get, Some(command), &Args::new())
    }

    /// Write a scalar node
    pub fn set(&self, session: &Session, command: &str, value: impl Into<Value>) -> Result<()> {
        let args = Args::new().with("value", value.into().to_arg());
        self.execute(session, Verb::Set, Some(command), &args)
    }

    /// Read a whole list from its start
    pub fn list<R: FromResponse>(&self, session: &Session, command: &str) -> Result<R> {
        self.execute(session, Verb::ListGetNext, Some(command), &Args::new())
    }

    /// Read up to `max_items` list entries following `cursor`
    ///
    /// `cursor` is the key of the last item already seen, or -1 for the
    /// start of the list. The device answers `FS_LIST_END` once nothing is
    /// left.
    pub fn list_from(
        &self,
        session: &Session,
        command: &str,
        cursor: i32,
        max_items: u16,
    ) -> Result<ItemList> {
        let args = Args::new().with("maxItems", max_items);
        let response = self.exchange(session, Verb::ListGetNext, Some(command), &args, cursor)?;
        Ok(ItemList::from_response(response)?)
    }

    /// Drain pending notifications
    ///
    /// The device holds the request open for a while and answers
    /// `FS_TIMEOUT` when nothing changed; see [`ApiError::is_timeout`].
    pub fn notifications(&self, session: &Session) -> Result<Vec<Notification>> {
        self.execute(session, Verb::GetNotify, None, &Args::new())
    }

    fn exchange(
        &self,
        session: &Session,
        verb: Verb,
        command: Option<&str>,
        args: &Args,
        cursor: i32,
    ) -> Result<Response> {
        let url = request::build_at(session, verb, command, args, cursor)?;
        let path = url.split('?').next().unwrap_or_default();
        debug!(%verb, path, "FSAPI request");

        let body = self.transport.get(&url)?;

        response::decode(&self.registry, verb, command, &body).map_err(|e| {
            if let ApiError::DeviceStatus(status) = &e {
                warn!(%verb, command = command.unwrap_or_default(), status = %status, "Device rejected request");
            }
            e
        })
    }
}

fn unexpected(expected: &'static str, response: &Response) -> ApiError {
    crate::error::DecodeError::UnexpectedResponse {
        expected,
        found: response.kind(),
    }
    .into()
}
