//! Schema document loading.
//!
//! ```json
//! [
//!   { "name": "User", "props": [
//!       { "name": "Id", "type": "int", "key": true },
//!       { "name": "Name", "type": "string" }
//!   ] }
//! ]
//! ```

use crate::error::GenerateResult;
use crate::model::{EntityDescription, MemberDescription};
use serde::{Deserialize, Serialize};

/// One entity object of a schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub name: String,

    #[serde(default)]
    pub props: Vec<PropDefinition>,
}

/// One member of a [`ModelDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropDefinition {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub key: bool,
}

impl From<ModelDefinition> for EntityDescription {
    fn from(model: ModelDefinition) -> Self {
        let members = model
            .props
            .into_iter()
            .map(|prop| {
                let member = MemberDescription::new(prop.name, prop.type_name);
                if prop.key { member.key() } else { member }
            })
            .collect();
        EntityDescription::new(model.name, members)
    }
}

/// Parse a schema document.
///
/// An empty or whitespace-only document has no entities. Entity validity is
/// not checked here; see [`EntityDescription::validate`].
pub fn from_json(json: &str) -> GenerateResult<Vec<EntityDescription>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    let models: Vec<ModelDefinition> = serde_json::from_str(json)?;
    Ok(models.into_iter().map(EntityDescription::from).collect())
}
