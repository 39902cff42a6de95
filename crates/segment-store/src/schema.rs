//! The fixed collection schema the ingestion side provisions: content is
//! the only vectorized property; the three metadata-path fields are stored
//! but excluded from vectorization.

use serde::{Deserialize, Serialize};

/// Collection (class) name in the retrieval index.
pub const POLICY_SEGMENT_CLASS: &str = "PolicySegment";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSchema {
    pub class: String,
    pub description: String,
    pub properties: Vec<PropertySchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    pub name: String,
    pub data_type: Vec<String>,
    pub description: String,
    pub vectorize: bool,
}

impl PropertySchema {
    fn text(name: &str, description: &str, vectorize: bool) -> Self {
        Self {
            name: name.to_string(),
            data_type: vec!["text".to_string()],
            description: description.to_string(),
            vectorize,
        }
    }

    fn int(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            data_type: vec!["int".to_string()],
            description: description.to_string(),
            vectorize: false,
        }
    }
}

/// Schema for structurally chunked policy segments.
#[must_use]
pub fn collection_schema() -> CollectionSchema {
    CollectionSchema {
        class: POLICY_SEGMENT_CLASS.to_string(),
        description: "Structurally chunked policy document segments with hierarchical metadata"
            .to_string(),
        properties: vec![
            PropertySchema::text(
                "content",
                "The actual content chunk (paragraph or sentence group)",
                true,
            ),
            PropertySchema::text("parent_heading", "The immediate parent heading text", false),
            PropertySchema::text(
                "top_level_section",
                "The highest-level section heading",
                false,
            ),
            PropertySchema::text(
                "section_path",
                "Structural path identifier (e.g. \"1.2.3\")",
                false,
            ),
            PropertySchema::int("source_page", "Page number in the original document"),
        ],
    }
}
