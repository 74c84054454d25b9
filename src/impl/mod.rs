// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod locale_ron_datasource;
        pub(crate) mod records_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod derived_record_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod ledger_entry_model;
        pub(crate) mod stored_amount_model;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod canonical_amount;
        pub(crate) mod derived_record;
        pub(crate) mod ledger_entry;
        pub(crate) mod number_locale;
        pub(crate) mod photo_payload;
    }
    pub(crate) mod logic {
        pub(crate) mod binary_payload_codec;
        pub(crate) mod derived_field_graph;
        pub(crate) mod ledger_balance_engine;
        pub(crate) mod number_codec;
        pub(crate) mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod ledger_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod ledger_csv_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::canonical_amount::*;
        pub use crate::domain::entities::derived_record::*;
        pub use crate::domain::entities::ledger_entry::*;
        pub use crate::domain::entities::number_locale::*;
        pub use crate::domain::entities::photo_payload::*;
    }

    pub mod logic {
        pub use crate::domain::logic::binary_payload_codec::*;
        pub use crate::domain::logic::derived_field_graph::*;
        pub use crate::domain::logic::ledger_balance_engine::{recompute_ledger, LedgerBalanceEngine};
        pub use crate::domain::logic::number_codec::*;
        pub use crate::domain::logic::utils::{round2, to_cents};
    }

    pub mod repositories {
        pub use crate::domain::repositories::ledger_repository::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::ledger_usecase::*;
    }
}
