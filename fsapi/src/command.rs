//! The FSAPI command table
//!
//! Node paths the client knows about, plus the static type tables the
//! [`DecoderRegistry`](crate::DecoderRegistry) is built from. Commands are
//! opaque to the protocol engine: it only uses them as URL segments and as
//! dispatch keys.

use crate::response::items::ItemShape;
use crate::value::ValueType;

// System
pub const POWER: &str = "netRemote.sys.power";
pub const MODE: &str = "netRemote.sys.mode";
pub const FRIENDLY_NAME: &str = "netRemote.sys.info.friendlyName";
pub const VERSION: &str = "netRemote.sys.info.version";
pub const SLEEP: &str = "netRemote.sys.sleep";
pub const DATE: &str = "netRemote.sys.clock.localDate";
pub const TIME: &str = "netRemote.sys.clock.localTime";
pub const VALID_MODES: &str = "netRemote.sys.caps.validModes";
pub const EQUALIZER_PRESETS: &str = "netRemote.sys.caps.eqPresets";
pub const EQUALIZER_BANDS: &str = "netRemote.sys.caps.eqBands";
pub const VOLUME_STEPS: &str = "netRemote.sys.caps.volumeSteps";
pub const FM_FREQ_LOWER: &str = "netRemote.sys.caps.fmFreqRange.lower";
pub const FM_FREQ_UPPER: &str = "netRemote.sys.caps.fmFreqRange.upper";
pub const FM_FREQ_STEP: &str = "netRemote.sys.caps.fmFreqRange.stepSize";

// Audio
pub const VOLUME: &str = "netRemote.sys.audio.volume";
pub const MUTE: &str = "netRemote.sys.audio.mute";
pub const EQUALIZER_PRESET: &str = "netRemote.sys.audio.eqPresetIndex";
pub const LOUDNESS: &str = "netRemote.sys.audio.eqLoudness";
pub const CUSTOM_EQ_BASS: &str = "netRemote.sys.audio.eqCustom.param0";
pub const CUSTOM_EQ_TREBLE: &str = "netRemote.sys.audio.eqCustom.param1";

// Network
pub const NETWORK_STANDBY: &str = "netRemote.sys.net.keepConnected";
pub const WLAN_MAC: &str = "netRemote.sys.net.wlan.macAddress";
pub const WLAN_SSID: &str = "netRemote.sys.net.wlan.connectedSSID";
pub const WLAN_RSSI: &str = "netRemote.sys.net.wlan.rssi";
pub const WIRED_MAC: &str = "netRemote.sys.net.wired.macAddress";

// Playback
pub const PLAY_CONTROL: &str = "netRemote.play.control";
pub const PLAY_STATUS: &str = "netRemote.play.status";
pub const PLAY_INFO_NAME: &str = "netRemote.play.info.name";
pub const PLAY_INFO_TEXT: &str = "netRemote.play.info.text";
pub const PLAY_INFO_GRAPHIC: &str = "netRemote.play.info.graphicUri";
pub const PLAY_INFO_ALBUM: &str = "netRemote.play.info.album";
pub const PLAY_INFO_ARTIST: &str = "netRemote.play.info.artist";
pub const PLAY_INFO_DURATION: &str = "netRemote.play.info.duration";
pub const PLAY_POSITION: &str = "netRemote.play.position";
pub const PLAY_FREQUENCY: &str = "netRemote.play.frequency";
pub const PLAY_SIGNAL_STRENGTH: &str = "netRemote.play.signalStrength";
pub const PLAY_REPEAT: &str = "netRemote.play.repeat";
pub const PLAY_SHUFFLE: &str = "netRemote.play.shuffle";
pub const PLAY_SCROBBLE: &str = "netRemote.play.scrobble";
pub const DAB_ENSEMBLE_ID: &str = "netRemote.play.serviceIds.dabEnsembleId";
pub const DAB_SERVICE_ID: &str = "netRemote.play.serviceIds.dabServiceId";
pub const DAB_ECC: &str = "netRemote.play.serviceIds.ecc";
pub const FM_RDS_PI: &str = "netRemote.play.serviceIds.fmRdsPi";

// Navigation
pub const PRESETS: &str = "netRemote.nav.presets";
pub const SELECTED_PRESET: &str = "netRemote.nav.preset.currentPreset";
pub const NAVIGATE: &str = "netRemote.nav.action.navigate";
pub const SELECT_ITEM: &str = "netRemote.nav.action.selectItem";
pub const SELECT_PRESET: &str = "netRemote.nav.action.selectPreset";
pub const NAV_LIST: &str = "netRemote.nav.list";
/// Width varies between firmware releases, so no decoder is registered;
/// use [`DecoderRegistry::register_scalar`](crate::DecoderRegistry::register_scalar)
pub const NUM_ENTRIES: &str = "netRemote.nav.numItems";
pub const SEARCH: &str = "netRemote.nav.searchTerm";
pub const NAV_STATE: &str = "netRemote.nav.state";
pub const NAV_STATUS: &str = "netRemote.nav.status";

/// Value type decoded by GET for each readable scalar command
pub(crate) static SCALAR_COMMANDS: &[(&str, ValueType)] = &[
    (POWER, ValueType::Bool),
    (MUTE, ValueType::Bool),
    (PLAY_REPEAT, ValueType::Bool),
    (PLAY_SHUFFLE, ValueType::Bool),
    (PLAY_SCROBBLE, ValueType::Bool),
    (NETWORK_STANDBY, ValueType::Bool),
    (LOUDNESS, ValueType::Bool),
    (NAV_STATUS, ValueType::Bool),
    (NAV_STATE, ValueType::Bool),
    (VOLUME, ValueType::U8),
    (VOLUME_STEPS, ValueType::U8),
    (PLAY_CONTROL, ValueType::U8),
    (PLAY_SIGNAL_STRENGTH, ValueType::U8),
    (PLAY_STATUS, ValueType::U8),
    (EQUALIZER_PRESET, ValueType::U8),
    (DAB_ECC, ValueType::U8),
    (WLAN_RSSI, ValueType::U8),
    (MODE, ValueType::U32),
    (SELECTED_PRESET, ValueType::U32),
    (PLAY_FREQUENCY, ValueType::U32),
    (PLAY_INFO_DURATION, ValueType::U32),
    (PLAY_POSITION, ValueType::U32),
    (FM_FREQ_LOWER, ValueType::U32),
    (FM_FREQ_UPPER, ValueType::U32),
    (FM_FREQ_STEP, ValueType::U32),
    (SLEEP, ValueType::U32),
    (DAB_SERVICE_ID, ValueType::U32),
    (DAB_ENSEMBLE_ID, ValueType::U16),
    (FM_RDS_PI, ValueType::U16),
    (CUSTOM_EQ_BASS, ValueType::S16),
    (CUSTOM_EQ_TREBLE, ValueType::S16),
    (PLAY_INFO_NAME, ValueType::Text),
    (PLAY_INFO_TEXT, ValueType::Text),
    (PLAY_INFO_GRAPHIC, ValueType::Text),
    (PLAY_INFO_ALBUM, ValueType::Text),
    (PLAY_INFO_ARTIST, ValueType::Text),
    (FRIENDLY_NAME, ValueType::Text),
    (VERSION, ValueType::Text),
    (DATE, ValueType::Text),
    (TIME, ValueType::Text),
    (WLAN_MAC, ValueType::Text),
    (WLAN_SSID, ValueType::Text),
    (WIRED_MAC, ValueType::Text),
    (SEARCH, ValueType::Text),
];

/// Item shape decoded by LIST_GET_NEXT for each list command
pub(crate) static LIST_COMMANDS: &[(&str, ItemShape)] = &[
    (VALID_MODES, ItemShape::RadioMode),
    (EQUALIZER_PRESETS, ItemShape::EqualizerPreset),
    (PRESETS, ItemShape::Preset),
    (NAV_LIST, ItemShape::NavListItem),
    (EQUALIZER_BANDS, ItemShape::EqBand),
];
