use crate::entities::{DerivedRecord, RawCharges, StoredDerivedRecord};

use super::stored_amount_model::StoredAmountModel;

/// Monthly charge record as exchanged with the store. Derived outputs are
/// accepted on input but ignored; they are always derived again from the raw
/// inputs.
#[derive(Debug, Default, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(default)]
pub(crate) struct DerivedRecordModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub box_charge: StoredAmountModel,
    pub section_charge: StoredAmountModel,
    pub basket_charge: StoredAmountModel,
    pub caretaker_fee: StoredAmountModel,
    pub vaccine_fee: StoredAmountModel,
    pub anemia_fee: StoredAmountModel,
    pub deworming_fee: StoredAmountModel,
    pub daily_consumption: StoredAmountModel,
    pub days_in_period: StoredAmountModel,
    pub unit_forage_cost: StoredAmountModel,
    pub cube_count: StoredAmountModel,
    pub unit_cube_cost: StoredAmountModel,
    pub monthly_consumption: Option<StoredAmountModel>,
    pub monthly_forage_cost: Option<StoredAmountModel>,
    pub monthly_cube_cost: Option<StoredAmountModel>,
    pub total_charge: Option<StoredAmountModel>,
}

impl Into<StoredDerivedRecord> for DerivedRecordModel {
    fn into(self) -> StoredDerivedRecord {
        StoredDerivedRecord {
            id: self.id,
            record: DerivedRecord::new(RawCharges {
                box_charge: self.box_charge.into(),
                section_charge: self.section_charge.into(),
                basket_charge: self.basket_charge.into(),
                caretaker_fee: self.caretaker_fee.into(),
                vaccine_fee: self.vaccine_fee.into(),
                anemia_fee: self.anemia_fee.into(),
                deworming_fee: self.deworming_fee.into(),
                daily_consumption: self.daily_consumption.into(),
                days_in_period: self.days_in_period.into(),
                unit_forage_cost: self.unit_forage_cost.into(),
                cube_count: self.cube_count.into(),
                unit_cube_cost: self.unit_cube_cost.into(),
            }),
        }
    }
}

impl From<&StoredDerivedRecord> for DerivedRecordModel {
    fn from(stored: &StoredDerivedRecord) -> Self {
        let raw = stored.record.raw();
        let derived = stored.record.derived();
        Self {
            id: stored.id,
            box_charge: StoredAmountModel(raw.box_charge),
            section_charge: StoredAmountModel(raw.section_charge),
            basket_charge: StoredAmountModel(raw.basket_charge),
            caretaker_fee: StoredAmountModel(raw.caretaker_fee),
            vaccine_fee: StoredAmountModel(raw.vaccine_fee),
            anemia_fee: StoredAmountModel(raw.anemia_fee),
            deworming_fee: StoredAmountModel(raw.deworming_fee),
            daily_consumption: StoredAmountModel(raw.daily_consumption),
            days_in_period: StoredAmountModel(raw.days_in_period),
            unit_forage_cost: StoredAmountModel(raw.unit_forage_cost),
            cube_count: StoredAmountModel(raw.cube_count),
            unit_cube_cost: StoredAmountModel(raw.unit_cube_cost),
            monthly_consumption: Some(StoredAmountModel(derived.monthly_consumption())),
            monthly_forage_cost: Some(StoredAmountModel(derived.monthly_forage_cost())),
            monthly_cube_cost: Some(StoredAmountModel(derived.monthly_cube_cost())),
            total_charge: Some(StoredAmountModel(derived.total_charge())),
        }
    }
}
