//! Custom serde deserializers for PubMed XML fields

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::result;

/// One `<AbstractText>` element with its optional `Label` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct AbstractTextWithLabel {
    pub label: Option<String>,
    pub text: String,
}

impl<'de> Deserialize<'de> for AbstractTextWithLabel {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_abstract_text_with_label(deserializer)
    }
}

/// Accepts both a bare string and a map of `$text`/`$value` parts plus `@Label`
///
/// Attributes other than `@Label` (such as `@NlmCategory`) are ignored.
pub(super) fn deserialize_abstract_text_with_label<'de, D>(
    deserializer: D,
) -> result::Result<AbstractTextWithLabel, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, MapAccess, Visitor};

    struct AbstractTextVisitor;

    impl<'de> Visitor<'de> for AbstractTextVisitor {
        type Value = AbstractTextWithLabel;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("abstract text content")
        }

        fn visit_str<E>(self, value: &str) -> result::Result<AbstractTextWithLabel, E>
        where
            E: de::Error,
        {
            Ok(AbstractTextWithLabel {
                label: None,
                text: value.to_string(),
            })
        }

        fn visit_string<E>(self, value: String) -> result::Result<AbstractTextWithLabel, E>
        where
            E: de::Error,
        {
            Ok(AbstractTextWithLabel {
                label: None,
                text: value,
            })
        }

        fn visit_map<M>(self, mut map: M) -> result::Result<AbstractTextWithLabel, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut text_parts = Vec::new();
            let mut label = None;
            while let Some(key) = map.next_key::<String>()? {
                if key == "$text" || key == "$value" {
                    let value: String = map.next_value()?;
                    text_parts.push(value);
                } else if key == "@Label" {
                    let value: String = map.next_value()?;
                    label = Some(value);
                } else {
                    let _: de::IgnoredAny = map.next_value()?;
                }
            }
            Ok(AbstractTextWithLabel {
                label,
                text: text_parts.join(""),
            })
        }
    }

    deserializer.deserialize_any(AbstractTextVisitor)
}
