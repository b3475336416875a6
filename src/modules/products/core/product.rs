use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog entry: a server-assigned `id` plus whatever fields the caller sent.
///
/// `id` must be a JSON string in the stored file. A record with any other id
/// type makes the whole collection fail to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Product fields as received on creation, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewProduct {
    pub fields: Map<String, Value>,
}

impl NewProduct {
    /// Attaches the generated id. A caller-supplied `id` field is dropped.
    pub fn into_product(self, id: String) -> Product {
        let mut fields = self.fields;
        fields.remove("id");
        Product { id, fields }
    }
}
