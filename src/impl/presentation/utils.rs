use std::collections::HashMap;

use crate::entities::CounterpartyId;

const UNKNOWN_COUNTERPARTY: &str = "(unknown)";

/// Display name for an entry's counterparty: empty when there is none,
/// `(unknown)` when the lookup has no name for it.
pub(crate) fn counterparty_label(
    counterparty_id: Option<CounterpartyId>,
    names: &HashMap<CounterpartyId, String>,
) -> String {
    match counterparty_id {
        None => String::new(),
        Some(id) => names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_COUNTERPARTY.to_string()),
    }
}
