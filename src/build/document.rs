use crate::types::{DocumentRecord, Passthrough};
use serde::{Deserialize, Serialize};

/// A document as the builder receives it: display fields plus raw text.
///
/// `title`, `summary`, and `text` are all indexed. Everything except `text`
/// ends up in the snapshot's document record.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    pub path: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weave: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loom: Option<String>,
    #[serde(flatten)]
    pub extra: Passthrough,
}

impl SourceDocument {
    pub fn new(path: &str, title: &str, text: &str) -> Self {
        Self {
            path: path.to_string(),
            title: title.to_string(),
            summary: String::new(),
            text: text.to_string(),
            weave: None,
            loom: None,
            extra: Passthrough::new(),
        }
    }

    /// Everything that gets tokenized, in one string.
    pub fn indexed_text(&self) -> String {
        format!("{} {} {}", self.title, self.summary, self.text)
    }

    /// The snapshot record for this document, given its token count.
    pub fn into_record(self, document_length: u32) -> DocumentRecord {
        DocumentRecord {
            path: self.path,
            title: self.title,
            summary: self.summary,
            document_length,
            weave: self.weave,
            loom: self.loom,
            extra: self.extra,
        }
    }
}
