//! Participant-set rules for conversation creation

use courier_common::{Error, Result};
use uuid::Uuid;

/// Assemble the participant set for a new conversation.
///
/// The persisted set is the union of the requested ids and the creating
/// caller, deduplicated with the caller first. An empty request is rejected.
pub fn assemble_participant_set(caller: Uuid, requested: &[Uuid]) -> Result<Vec<Uuid>> {
    if requested.is_empty() {
        return Err(Error::Validation(
            "Participant list cannot be empty".to_string(),
        ));
    }

    let mut set = vec![caller];
    for id in requested {
        if !set.contains(id) {
            set.push(*id);
        }
    }

    Ok(set)
}
