/// Character identifiers as issued by the remote API.
pub type CharacterId = i64;
