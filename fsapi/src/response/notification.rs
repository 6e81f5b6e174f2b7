use serde::Serialize;
use xmltree::Element;

use crate::error::DecodeError;
use crate::value::{self, Value};
use crate::xml;

/// A state change pushed by the device through GET_NOTIFIES
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Node path that changed, e.g. `netRemote.play.status`
    pub name: String,
    pub value: Value,
}

impl Notification {
    /// The value converted to `T`
    pub fn value_as<T>(&self) -> Result<T, DecodeError>
    where
        T: TryFrom<Value, Error = DecodeError>,
    {
        T::try_from(self.value.clone())
    }
}

/// Decode every `<notify>` child of `root` in document order
pub(crate) fn parse_notifications(root: &Element) -> Result<Vec<Notification>, DecodeError> {
    xml::child_elements(root)
        .filter(|el| el.name == "notify")
        .map(|notify| {
            let name = xml::attribute(notify, "notify", "node")?.to_string();
            let value = value::decode_tagged(xml::child(notify, "value")?)?;
            Ok(Notification { name, value })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let root = xml::parse(
            r#"<fsapiResponse><status>FS_OK</status>
                 <notify node="netRemote.play.info.name"><value><c8_array>First</c8_array></value></notify>
                 <notify node="netRemote.sys.audio.volume"><value><u8>9</u8></value></notify>
                 <notify node="netRemote.play.info.text"><value><c8_array>Third</c8_array></value></notify>
               </fsapiResponse>"#,
        )
        .unwrap();

        let names: Vec<_> = parse_notifications(&root)
            .unwrap()
            .into_iter()
            .map(|n| n.name)
            .collect();
        assert_eq!(
            names,
            ["netRemote.play.info.name", "netRemote.sys.audio.volume", "netRemote.play.info.text"]
        );
    }

    #[test]
    fn test_value_as() {
        let n = Notification { name: "netRemote.sys.power".into(), value: Value::U8(1) };
        assert!(n.value_as::<bool>().unwrap());
        assert_eq!(n.value_as::<u8>().unwrap(), 1);
        assert!(n.value_as::<String>().is_err());
    }

    #[test]
    fn test_unknown_tag() {
        let root = xml::parse(
            r#"<r><notify node="x"><value><array>1</array></value></notify></r>"#,
        )
        .unwrap();
        assert!(matches!(parse_notifications(&root), Err(DecodeError::NotImplemented(_))));
    }

    #[test]
    fn test_missing_node() {
        let root = xml::parse(r#"<r><notify><value><u8>1</u8></value></notify></r>"#).unwrap();
        assert_eq!(
            parse_notifications(&root).unwrap_err(),
            DecodeError::MissingAttribute { element: "notify", attribute: "node" }
        );
    }
}
