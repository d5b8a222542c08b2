//! Topic / main-item / secondary-item derivation.
//!
//! An article can be classified either by a combined `topic` string
//! (`"Obesity - GLP-1 receptor"`) or by the split `main_item` /
//! `secondary_item` pair. Whichever side is supplied, the other is derived
//! on persist so both representations stay queryable.

/// The resolved classification triple stored on an article row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicFields {
    pub topic: Option<String>,
    pub main_item: Option<String>,
    pub secondary_item: Option<String>,
}

/// Resolves the topic triple from whatever the caller supplied.
///
/// If `topic` is present it is split on the first `-` into main/secondary
/// (each trimmed) and wins over explicitly supplied items. If `topic` is
/// absent but both items are present, the topic is synthesized as
/// `"{main_item} - {secondary_item}"`. Anything else passes through.
pub fn derive_topic_fields(
    topic: Option<&str>,
    main_item: Option<&str>,
    secondary_item: Option<&str>,
) -> TopicFields {
    let topic = topic.map(str::trim).filter(|t| !t.is_empty());
    let main_item = main_item.map(str::trim).filter(|s| !s.is_empty());
    let secondary_item = secondary_item.map(str::trim).filter(|s| !s.is_empty());

    if let Some(topic) = topic {
        let (main, secondary) = match topic.split_once('-') {
            Some((main, secondary)) => {
                let secondary = secondary.trim();
                (
                    main.trim().to_string(),
                    (!secondary.is_empty()).then(|| secondary.to_string()),
                )
            }
            None => (topic.to_string(), None),
        };

        return TopicFields {
            topic: Some(topic.to_string()),
            main_item: (!main.is_empty()).then_some(main),
            secondary_item: secondary,
        };
    }

    let synthesized = match (main_item, secondary_item) {
        (Some(main), Some(secondary)) => Some(format!("{main} - {secondary}")),
        _ => None,
    };

    TopicFields {
        topic: synthesized,
        main_item: main_item.map(String::from),
        secondary_item: secondary_item.map(String::from),
    }
}
