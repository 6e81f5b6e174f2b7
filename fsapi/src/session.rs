/// PIN used by devices that were never configured otherwise
pub const DEFAULT_PIN: u32 = 1234;

/// Authentication state for one device
///
/// Holds the PIN and, once `CREATE_SESSION` succeeded, the session id the
/// device handed out. Only the communicator changes the id; callers pass the
/// session by reference into every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pin: u32,
    id: Option<u32>,
}

impl Session {
    pub fn new(pin: u32) -> Self {
        Self { pin, id: None }
    }

    pub fn pin(&self) -> u32 {
        self.pin
    }

    /// The active session id, if any
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub(crate) fn activate(&mut self, id: u32) {
        self.id = Some(id);
    }

    pub(crate) fn invalidate(&mut self) {
        self.id = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_PIN)
    }
}
