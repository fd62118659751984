use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input shared by `read-file` and `list-directory`.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct PathInput {
    #[schemars(description = "Absolute path to the file or directory")]
    pub path: String,
}

impl PathInput {
    pub fn new(path: impl Into<String>) -> Self {
        PathInput { path: path.into() }
    }
}

/// Result of `read-file`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReadFileOutput {
    pub content: String,
    /// Number of characters (Unicode scalar values) in `content`.
    pub size: usize,
}

impl ReadFileOutput {
    pub fn from_content(content: String) -> Self {
        let size = content.chars().count();
        ReadFileOutput { content, size }
    }
}

/// One direct child of a listed directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirEntry {
    pub name: String,
    pub is_directory: bool,
}

/// Result of `list-directory`; entries keep the order the OS returned them in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListDirectoryOutput {
    pub entries: Vec<DirEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_counts_characters_not_bytes() {
        let out = ReadFileOutput::from_content("héllo ✓".to_string());
        assert_eq!(out.size, 7);
        assert!(out.content.len() > out.size);
    }

    #[test]
    fn dir_entry_uses_wire_names() {
        let entry = DirEntry {
            name: "b".into(),
            is_directory: true,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, serde_json::json!({"name": "b", "isDirectory": true}));
    }
}
