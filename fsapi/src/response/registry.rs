use std::collections::HashMap;

use crate::command::{LIST_COMMANDS, SCALAR_COMMANDS};
use crate::error::DecodeError;
use crate::response::items::ItemShape;
use crate::value::ValueType;
use crate::verb::Verb;

/// How the payload of one `FS_OK` response is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    SessionId,
    Ack,
    Scalar(ValueType),
    List(ItemShape),
    Notifications,
}

/// Maps (verb, command) to the decoder for its response
///
/// Verbs without a payload or with a fixed payload resolve regardless of
/// command. GET and LIST_GET_NEXT resolve through per-command tables built
/// from [`crate::command`]; further commands can be registered at runtime.
#[derive(Debug, Clone)]
pub struct DecoderRegistry {
    scalars: HashMap<String, ValueType>,
    lists: HashMap<String, ItemShape>,
}

impl DecoderRegistry {
    /// An empty registry that only knows the command-independent verbs
    pub fn empty() -> Self {
        Self {
            scalars: HashMap::new(),
            lists: HashMap::new(),
        }
    }

    /// The registry for every command in [`crate::command`]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for (command, value_type) in SCALAR_COMMANDS {
            registry.register_scalar(*command, *value_type);
        }
        for (command, shape) in LIST_COMMANDS {
            registry.register_list(*command, *shape);
        }
        registry
    }

    pub fn register_scalar(&mut self, command: impl Into<String>, value_type: ValueType) {
        self.scalars.insert(command.into(), value_type);
    }

    pub fn register_list(&mut self, command: impl Into<String>, shape: ItemShape) {
        self.lists.insert(command.into(), shape);
    }

    pub fn scalar_type(&self, command: &str) -> Option<ValueType> {
        self.scalars.get(command).copied()
    }

    pub fn list_shape(&self, command: &str) -> Option<ItemShape> {
        self.lists.get(command).copied()
    }

    pub fn resolve(&self, verb: Verb, command: Option<&str>) -> Result<Decoder, DecodeError> {
        match verb {
            Verb::CreateSession => Ok(Decoder::SessionId),
            Verb::DeleteSession | Verb::Set => Ok(Decoder::Ack),
            Verb::GetNotify => Ok(Decoder::Notifications),
            Verb::Get => command
                .and_then(|c| self.scalar_type(c))
                .map(Decoder::Scalar)
                .ok_or_else(|| not_implemented(verb, command)),
            Verb::ListGetNext => command
                .and_then(|c| self.list_shape(c))
                .map(Decoder::List)
                .ok_or_else(|| not_implemented(verb, command)),
        }
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn not_implemented(verb: Verb, command: Option<&str>) -> DecodeError {
    DecodeError::NotImplemented(format!("{} {}", verb, command.unwrap_or("<none>")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command;

    #[test]
    fn test_standard_registry() {
        let registry = DecoderRegistry::standard();
        assert_eq!(
            registry.resolve(Verb::Get, Some(command::POWER)),
            Ok(Decoder::Scalar(ValueType::Bool))
        );
        assert_eq!(
            registry.resolve(Verb::Get, Some(command::CUSTOM_EQ_BASS)),
            Ok(Decoder::Scalar(ValueType::S16))
        );
        assert_eq!(
            registry.resolve(Verb::ListGetNext, Some(command::PRESETS)),
            Ok(Decoder::List(ItemShape::Preset))
        );
        assert_eq!(registry.resolve(Verb::Set, Some(command::POWER)), Ok(Decoder::Ack));
        assert_eq!(registry.resolve(Verb::GetNotify, None), Ok(Decoder::Notifications));
        assert_eq!(registry.resolve(Verb::CreateSession, None), Ok(Decoder::SessionId));
    }

    #[test]
    fn test_unregistered_commands() {
        let registry = DecoderRegistry::standard();
        assert!(matches!(
            registry.resolve(Verb::Get, Some("netRemote.sys.unknown")),
            Err(DecodeError::NotImplemented(_))
        ));
        // A list command is not readable through GET
        assert!(matches!(
            registry.resolve(Verb::Get, Some(command::VALID_MODES)),
            Err(DecodeError::NotImplemented(_))
        ));
    }

    #[test]
    fn test_num_entries_has_no_guessed_type() {
        let mut registry = DecoderRegistry::standard();
        assert!(matches!(
            registry.resolve(Verb::Get, Some(command::NUM_ENTRIES)),
            Err(DecodeError::NotImplemented(_))
        ));

        registry.register_scalar(command::NUM_ENTRIES, ValueType::U32);
        assert_eq!(
            registry.resolve(Verb::Get, Some(command::NUM_ENTRIES)),
            Ok(Decoder::Scalar(ValueType::U32))
        );
    }

    #[test]
    fn test_register_additional_command() {
        let mut registry = DecoderRegistry::empty();
        assert!(registry.resolve(Verb::Get, Some("netRemote.sys.lang")).is_err());

        registry.register_scalar("netRemote.sys.lang", ValueType::U32);
        assert_eq!(
            registry.resolve(Verb::Get, Some("netRemote.sys.lang")),
            Ok(Decoder::Scalar(ValueType::U32))
        );
    }
}
