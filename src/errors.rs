use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Amount parsing.
define_client_error!(AmountEmpty, "Amount is empty.");
define_client_error!(AmountNotANumber, "Amount '{text}' is not a number.", { text: &str });
define_client_error!(
    AmountOutOfRange,
    "Amount '{text}' is outside the supported range.",
    { text: &str }
);
define_client_error!(
    InvalidStoredAmount,
    "Invalid stored amount: '{value}'.",
    { value: &str }
);

// Configuration.
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(
    InvalidNumberLocale,
    "Invalid number locale: {details}.",
    { details: &str }
);
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });

// Wire records.
define_client_error!(InvalidJson, "Invalid {record_type} (invalid JSON format).", { record_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });

// Ledger.
define_client_error!(
    LedgerEntryNotFound,
    "Ledger entry {id} does not exist.",
    { id: u64 }
);
define_client_error!(
    DuplicateLedgerEntryId,
    "Ledger entry {id} already exists.",
    { id: u64 }
);

// Photos.
define_client_error!(
    InvalidPhotoDataUrl,
    "Photo payload is not a valid base64 data URL."
);

// Export.
define_internal_error!(CsvWriteFailed, "Failed to write ledger CSV.");
