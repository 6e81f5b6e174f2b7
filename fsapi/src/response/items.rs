//! Structured list items returned by LIST_GET_NEXT
//!
//! Every item carries a numeric `key` attribute and a set of named fields:
//!
//! ```xml
//! <item key="3">
//!   <field name="id"><c8_array>IR</c8_array></field>
//!   <field name="selectable"><u8>1</u8></field>
//!   <field name="label"><c8_array>Internet radio</c8_array></field>
//! </item>
//! ```
//!
//! Parsing is total: a list decodes completely or not at all.

use serde::Serialize;
use std::fmt;
use xmltree::Element;

use crate::error::DecodeError;
use crate::value::{self, Value};
use crate::xml;

/// Key and display label shared by every list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyedLabel {
    pub key: i32,
    pub label: String,
}

/// A source mode (internet radio, DAB, FM, AUX, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioMode {
    #[serde(flatten)]
    pub item: KeyedLabel,
    pub id: String,
    pub is_selectable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EqualizerPreset {
    #[serde(flatten)]
    pub item: KeyedLabel,
}

/// A stored station; the device calls the label `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    #[serde(flatten)]
    pub item: KeyedLabel,
}

/// An entry of the navigation menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavListItem {
    #[serde(flatten)]
    pub item: KeyedLabel,
    /// 0 is a directory, 1 a playable item
    pub item_type: u8,
    pub subtype: u8,
}

impl NavListItem {
    pub fn name(&self) -> &str {
        &self.item.label
    }
}

/// One band of the custom equalizer with its adjustable range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EqBandListItem {
    #[serde(flatten)]
    pub item: KeyedLabel,
    pub min: i16,
    pub max: i16,
}

macro_rules! keyed_label_accessors {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                pub fn key(&self) -> i32 {
                    self.item.key
                }

                pub fn label(&self) -> &str {
                    &self.item.label
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.item.label)
                }
            }
        )*
    };
}

keyed_label_accessors!(RadioMode, EqualizerPreset, Preset, NavListItem, EqBandListItem);

/// Which item type a list command produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemShape {
    RadioMode,
    EqualizerPreset,
    Preset,
    NavListItem,
    EqBand,
}

/// A decoded list, tagged by the shape its command produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ItemList {
    RadioModes(Vec<RadioMode>),
    EqualizerPresets(Vec<EqualizerPreset>),
    Presets(Vec<Preset>),
    NavList(Vec<NavListItem>),
    EqBands(Vec<EqBandListItem>),
}

impl ItemList {
    pub fn shape(&self) -> ItemShape {
        match self {
            ItemList::RadioModes(_) => ItemShape::RadioMode,
            ItemList::EqualizerPresets(_) => ItemShape::EqualizerPreset,
            ItemList::Presets(_) => ItemShape::Preset,
            ItemList::NavList(_) => ItemShape::NavListItem,
            ItemList::EqBands(_) => ItemShape::EqBand,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ItemList::RadioModes(v) => v.len(),
            ItemList::EqualizerPresets(v) => v.len(),
            ItemList::Presets(v) => v.len(),
            ItemList::NavList(v) => v.len(),
            ItemList::EqBands(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decode every `<item>` child of `root` as `shape`
pub(crate) fn parse_items(root: &Element, shape: ItemShape) -> Result<ItemList, DecodeError> {
    let items = xml::child_elements(root).filter(|el| el.name == "item");
    Ok(match shape {
        ItemShape::RadioMode => ItemList::RadioModes(collect(items, radio_mode)?),
        ItemShape::EqualizerPreset => ItemList::EqualizerPresets(collect(items, |el| {
            Ok(EqualizerPreset { item: keyed(el, "label")? })
        })?),
        ItemShape::Preset => ItemList::Presets(collect(items, |el| {
            Ok(Preset { item: keyed(el, "name")? })
        })?),
        ItemShape::NavListItem => ItemList::NavList(collect(items, nav_list_item)?),
        ItemShape::EqBand => ItemList::EqBands(collect(items, eq_band)?),
    })
}

fn collect<'a, T>(
    items: impl Iterator<Item = &'a Element>,
    parse: impl Fn(&Element) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
    items.map(parse).collect()
}

fn radio_mode(el: &Element) -> Result<RadioMode, DecodeError> {
    Ok(RadioMode {
        item: keyed(el, "label")?,
        id: field(el, "id")?.into_typed()?,
        is_selectable: field(el, "selectable")?.into_typed()?,
    })
}

fn nav_list_item(el: &Element) -> Result<NavListItem, DecodeError> {
    Ok(NavListItem {
        item: keyed(el, "name")?,
        item_type: field(el, "type")?.into_typed()?,
        subtype: field(el, "subtype")?.into_typed()?,
    })
}

fn eq_band(el: &Element) -> Result<EqBandListItem, DecodeError> {
    Ok(EqBandListItem {
        item: keyed(el, "label")?,
        min: field(el, "min")?.into_typed()?,
        max: field(el, "max")?.into_typed()?,
    })
}

fn keyed(el: &Element, label_field: &str) -> Result<KeyedLabel, DecodeError> {
    let raw = xml::attribute(el, "item", "key")?;
    let key = raw.trim().parse().map_err(|_| DecodeError::InvalidNumber {
        kind: "item key",
        text: raw.to_string(),
    })?;
    Ok(KeyedLabel {
        key,
        label: field(el, label_field)?.into_typed()?,
    })
}

fn field(el: &Element, name: &str) -> Result<Value, DecodeError> {
    let field = xml::child_elements(el)
        .find(|child| child.name == "field" && child.attributes.get("name").map(String::as_str) == Some(name))
        .ok_or_else(|| DecodeError::MissingField(name.to_string()))?;
    value::decode_tagged(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(body: &str) -> Element {
        xml::parse(&format!("<fsapiResponse><status>FS_OK</status>{}</fsapiResponse>", body)).unwrap()
    }

    #[test]
    fn test_radio_mode() {
        let root = list(
            r#"<item key="6">
                 <field name="id"><c8_array>AUXIN</c8_array></field>
                 <field name="selectable"><u8>1</u8></field>
                 <field name="label"><c8_array>AUX-Modus</c8_array></field>
                 <field name="streamable"><u8>0</u8></field>
               </item>
               <listend/>"#,
        );
        let ItemList::RadioModes(modes) = parse_items(&root, ItemShape::RadioMode).unwrap() else {
            panic!("wrong list shape");
        };
        assert_eq!(modes.len(), 1);
        assert_eq!(modes[0].key(), 6);
        assert_eq!(modes[0].id, "AUXIN");
        assert!(modes[0].is_selectable);
        assert_eq!(modes[0].to_string(), "AUX-Modus");
    }

    #[test]
    fn test_nav_list_item() {
        let root = list(
            r#"<item key="0">
                 <field name="name"><c8_array>Stations</c8_array></field>
                 <field name="type"><u8>0</u8></field>
                 <field name="subtype"><u8>0</u8></field>
               </item>"#,
        );
        let ItemList::NavList(items) = parse_items(&root, ItemShape::NavListItem).unwrap() else {
            panic!("wrong list shape");
        };
        assert_eq!(items[0].name(), "Stations");
        assert_eq!(items[0].item_type, 0);
    }

    #[test]
    fn test_eq_band() {
        let root = list(
            r#"<item key="1">
                 <field name="label"><c8_array>Treble</c8_array></field>
                 <field name="min"><s16>-7</s16></field>
                 <field name="max"><s16>7</s16></field>
               </item>"#,
        );
        let ItemList::EqBands(bands) = parse_items(&root, ItemShape::EqBand).unwrap() else {
            panic!("wrong list shape");
        };
        assert_eq!((bands[0].min, bands[0].max), (-7, 7));
        assert_eq!(bands[0].label(), "Treble");
    }

    #[test]
    fn test_missing_field_fails_whole_list() {
        let root = list(
            r#"<item key="0"><field name="label"><c8_array>Normal</c8_array></field></item>
               <item key="1"><field name="other"><c8_array>x</c8_array></field></item>"#,
        );
        assert_eq!(
            parse_items(&root, ItemShape::EqualizerPreset).unwrap_err(),
            DecodeError::MissingField("label".to_string())
        );
    }

    #[test]
    fn test_bad_key() {
        let missing = list(r#"<item><field name="name"><c8_array>a</c8_array></field></item>"#);
        assert!(matches!(
            parse_items(&missing, ItemShape::Preset),
            Err(DecodeError::MissingAttribute { element: "item", attribute: "key" })
        ));

        let invalid = list(r#"<item key="x"><field name="name"><c8_array>a</c8_array></field></item>"#);
        assert!(matches!(
            parse_items(&invalid, ItemShape::Preset),
            Err(DecodeError::InvalidNumber { kind: "item key", .. })
        ));
    }

    #[test]
    fn test_empty_list() {
        let root = list("<listend/>");
        let items = parse_items(&root, ItemShape::Preset).unwrap();
        assert!(items.is_empty());
        assert_eq!(items.shape(), ItemShape::Preset);
    }
}
