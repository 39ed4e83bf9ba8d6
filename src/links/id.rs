use uuid::Uuid;

/// Fresh identifier for a new link record.
///
/// Random v4 UUIDs come from the operating system CSPRNG, so collisions with
/// previously minted or stored ids are not a practical concern.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
