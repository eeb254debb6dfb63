use serde::{de::DeserializeOwned, Serialize};

pub type ResourceId = u64;

/// A REST resource addressed by a single numeric id.
///
/// `id() == None` means the value has not been persisted yet. The server is
/// the source of truth for everything else about the shape; clients treat
/// bodies as opaque beyond the id.
pub trait Resource: Serialize + DeserializeOwned {
    fn id(&self) -> Option<ResourceId>;
}

/// Opaque resources carry their id in the conventional `"id"` key.
impl Resource for serde_json::Value {
    fn id(&self) -> Option<ResourceId> {
        self.get("id").and_then(|v| v.as_u64())
    }
}
