pub mod decoded_identity;
pub mod document_id;
pub mod validated_json;

pub use decoded_identity::DecodedIdentity;
pub use document_id::DocumentId;
pub use validated_json::ValidatedJson;
