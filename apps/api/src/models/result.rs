use serde::{Deserialize, Serialize};

/// The success payload of `/api/improve-resume`.
///
/// Both content fields are populated together or the value does not exist;
/// there is no partially-filled variant. `suggestions` is a valid result even
/// when empty — the primary server path always returns an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementResult {
    pub original_content: String,
    pub improved_content: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}
