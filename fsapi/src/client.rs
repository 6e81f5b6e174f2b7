use fsapi_transport::{HttpTransport, Transport};

use crate::command;
use crate::communicator::Communicator;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::response::{
    EqBandListItem, EqualizerPreset, NavListItem, Notification, Preset, RadioMode,
};
use crate::session::Session;

/// A client for one FSAPI radio
///
/// Owns the [`Session`] and offers one method per device capability, each a
/// thin call into the [`Communicator`] with the matching command and verb.
/// Anything not covered here is reachable through
/// [`communicator`](Self::communicator) and the constants in
/// [`command`](crate::command).
///
/// ```rust,no_run
/// use fsapi::{ClientConfig, FsClient};
///
/// let mut client = FsClient::from_config(&ClientConfig::new("http://192.168.1.30/fsapi"))?;
/// client.create_session()?;
///
/// if !client.power()? {
///     client.set_power(true)?;
/// }
/// for mode in client.valid_modes()? {
///     println!("{}: {}", mode.key(), mode);
/// }
/// # Ok::<(), fsapi::ApiError>(())
/// ```
#[derive(Debug)]
pub struct FsClient<T: Transport = HttpTransport> {
    communicator: Communicator<T>,
    session: Session,
}

impl FsClient<HttpTransport> {
    /// Create a client talking HTTP to the configured device
    ///
    /// No request is sent until [`create_session`](Self::create_session).
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::with_timeouts(
            config.base_url.clone(),
            config.connect_timeout,
            config.read_timeout,
        );
        Ok(Self::with_transport(transport, config.pin))
    }
}

impl<T: Transport> FsClient<T> {
    pub fn with_transport(transport: T, pin: u32) -> Self {
        Self {
            communicator: Communicator::new(transport),
            session: Session::new(pin),
        }
    }

    pub fn communicator(&self) -> &Communicator<T> {
        &self.communicator
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Open a session, replacing any session this client held
    pub fn create_session(&mut self) -> Result<u32> {
        self.communicator.create_session(&mut self.session)
    }

    pub fn delete_session(&mut self) -> Result<()> {
        self.communicator.delete_session(&mut self.session)
    }

    // System

    pub fn power(&self) -> Result<bool> {
        self.communicator.get(&self.session, command::POWER)
    }

    pub fn set_power(&self, on: bool) -> Result<()> {
        self.communicator.set(&self.session, command::POWER, on)
    }

    /// Key of the active mode in [`valid_modes`](Self::valid_modes)
    pub fn mode(&self) -> Result<u32> {
        self.communicator.get(&self.session, command::MODE)
    }

    pub fn set_mode(&self, key: u32) -> Result<()> {
        self.communicator.set(&self.session, command::MODE, key)
    }

    pub fn valid_modes(&self) -> Result<Vec<RadioMode>> {
        self.communicator.list(&self.session, command::VALID_MODES)
    }

    pub fn friendly_name(&self) -> Result<String> {
        self.communicator.get(&self.session, command::FRIENDLY_NAME)
    }

    pub fn set_friendly_name(&self, name: &str) -> Result<()> {
        self.communicator.set(&self.session, command::FRIENDLY_NAME, name)
    }

    pub fn version(&self) -> Result<String> {
        self.communicator.get(&self.session, command::VERSION)
    }

    /// Seconds until the sleep timer switches the radio off; 0 when unset
    pub fn sleep_timer(&self) -> Result<u32> {
        self.communicator.get(&self.session, command::SLEEP)
    }

    pub fn set_sleep_timer(&self, seconds: u32) -> Result<()> {
        self.communicator.set(&self.session, command::SLEEP, seconds)
    }

    // Audio

    pub fn volume(&self) -> Result<u8> {
        self.communicator.get(&self.session, command::VOLUME)
    }

    pub fn set_volume(&self, volume: u8) -> Result<()> {
        self.communicator.set(&self.session, command::VOLUME, volume)
    }

    /// Number of volume steps; the maximum volume is one less
    pub fn volume_steps(&self) -> Result<u8> {
        self.communicator.get(&self.session, command::VOLUME_STEPS)
    }

    pub fn mute(&self) -> Result<bool> {
        self.communicator.get(&self.session, command::MUTE)
    }

    pub fn set_mute(&self, mute: bool) -> Result<()> {
        self.communicator.set(&self.session, command::MUTE, mute)
    }

    pub fn equalizer_presets(&self) -> Result<Vec<EqualizerPreset>> {
        self.communicator.list(&self.session, command::EQUALIZER_PRESETS)
    }

    pub fn equalizer_preset(&self) -> Result<u8> {
        self.communicator.get(&self.session, command::EQUALIZER_PRESET)
    }

    pub fn set_equalizer_preset(&self, key: u8) -> Result<()> {
        self.communicator.set(&self.session, command::EQUALIZER_PRESET, key)
    }

    pub fn equalizer_bands(&self) -> Result<Vec<EqBandListItem>> {
        self.communicator.list(&self.session, command::EQUALIZER_BANDS)
    }

    pub fn custom_eq_bass(&self) -> Result<i16> {
        self.communicator.get(&self.session, command::CUSTOM_EQ_BASS)
    }

    pub fn set_custom_eq_bass(&self, level: i16) -> Result<()> {
        self.communicator.set(&self.session, command::CUSTOM_EQ_BASS, level)
    }

    pub fn custom_eq_treble(&self) -> Result<i16> {
        self.communicator.get(&self.session, command::CUSTOM_EQ_TREBLE)
    }

    pub fn set_custom_eq_treble(&self, level: i16) -> Result<()> {
        self.communicator.set(&self.session, command::CUSTOM_EQ_TREBLE, level)
    }

    // Playback

    pub fn play_status(&self) -> Result<u8> {
        self.communicator.get(&self.session, command::PLAY_STATUS)
    }

    /// Send a transport command (stop, play, pause, next, previous)
    pub fn play_control(&self, control: u8) -> Result<()> {
        self.communicator.set(&self.session, command::PLAY_CONTROL, control)
    }

    pub fn play_info_name(&self) -> Result<String> {
        self.communicator.get(&self.session, command::PLAY_INFO_NAME)
    }

    pub fn play_info_text(&self) -> Result<String> {
        self.communicator.get(&self.session, command::PLAY_INFO_TEXT)
    }

    pub fn play_info_graphic_uri(&self) -> Result<String> {
        self.communicator.get(&self.session, command::PLAY_INFO_GRAPHIC)
    }

    pub fn play_info_artist(&self) -> Result<String> {
        self.communicator.get(&self.session, command::PLAY_INFO_ARTIST)
    }

    pub fn play_info_album(&self) -> Result<String> {
        self.communicator.get(&self.session, command::PLAY_INFO_ALBUM)
    }

    /// Tuned FM frequency in kHz
    pub fn frequency(&self) -> Result<u32> {
        self.communicator.get(&self.session, command::PLAY_FREQUENCY)
    }

    pub fn set_frequency(&self, khz: u32) -> Result<()> {
        self.communicator.set(&self.session, command::PLAY_FREQUENCY, khz)
    }

    // Navigation

    pub fn presets(&self) -> Result<Vec<Preset>> {
        self.communicator.list(&self.session, command::PRESETS)
    }

    pub fn select_preset(&self, key: u32) -> Result<()> {
        self.communicator.set(&self.session, command::SELECT_PRESET, key)
    }

    /// Navigation must be enabled before the menu can be listed or walked
    pub fn set_nav_state(&self, enabled: bool) -> Result<()> {
        self.communicator.set(&self.session, command::NAV_STATE, enabled)
    }

    pub fn nav_list(&self) -> Result<Vec<NavListItem>> {
        self.communicator.list(&self.session, command::NAV_LIST)
    }

    /// Enter the directory with `key`; -1 goes back up
    pub fn navigate(&self, key: i32) -> Result<()> {
        self.communicator
            .set(&self.session, command::NAVIGATE, key.to_string())
    }

    pub fn select_item(&self, key: u32) -> Result<()> {
        self.communicator.set(&self.session, command::SELECT_ITEM, key)
    }

    pub fn search(&self, term: &str) -> Result<()> {
        self.communicator.set(&self.session, command::SEARCH, term)
    }

    // Notifications

    /// Wait for pending notifications
    ///
    /// Fails with `FS_TIMEOUT` when the device had nothing to report.
    pub fn notifications(&self) -> Result<Vec<Notification>> {
        self.communicator.notifications(&self.session)
    }
}
