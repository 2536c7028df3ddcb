use serde::{
    Serialize,
    Deserialize
};

#[derive(Clone, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String,
    #[serde(default)]
    code: Option<String>
}

impl NamedJsonObject {
    pub fn name(&self) -> &String {
        &self.name
    }

    /// Short alias (ISO 3166-1 alpha-2 for countries).
    pub fn code(&self) -> Option<&String> {
        self.code.as_ref()
    }
}
