use super::canonical_amount::CanonicalAmount;

/// Inputs entered by hand on a monthly charge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawField {
    BoxCharge,
    SectionCharge,
    BasketCharge,
    CaretakerFee,
    VaccineFee,
    AnemiaFee,
    DewormingFee,
    DailyConsumption,
    DaysInPeriod,
    UnitForageCost,
    CubeCount,
    UnitCubeCost,
}

/// Outputs computed from the raw inputs. Never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivedField {
    MonthlyConsumption,
    MonthlyForageCost,
    MonthlyCubeCost,
    TotalCharge,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawCharges {
    pub box_charge: CanonicalAmount,
    pub section_charge: CanonicalAmount,
    pub basket_charge: CanonicalAmount,
    pub caretaker_fee: CanonicalAmount,
    pub vaccine_fee: CanonicalAmount,
    pub anemia_fee: CanonicalAmount,
    pub deworming_fee: CanonicalAmount,
    /// Forage consumed per day.
    pub daily_consumption: CanonicalAmount,
    pub days_in_period: CanonicalAmount,
    pub unit_forage_cost: CanonicalAmount,
    pub cube_count: CanonicalAmount,
    pub unit_cube_cost: CanonicalAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedCharges {
    pub(crate) monthly_consumption: CanonicalAmount,
    pub(crate) monthly_forage_cost: CanonicalAmount,
    pub(crate) monthly_cube_cost: CanonicalAmount,
    pub(crate) total_charge: CanonicalAmount,
}

/// Raw inputs together with the outputs derived from exactly those inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRecord {
    pub(crate) raw: RawCharges,
    pub(crate) derived: DerivedCharges,
}

/// A derived record together with the id the store knows it by.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDerivedRecord {
    pub id: Option<u64>,
    pub record: DerivedRecord,
}

// --

impl RawField {
    pub const ALL: [RawField; 12] = [
        RawField::BoxCharge,
        RawField::SectionCharge,
        RawField::BasketCharge,
        RawField::CaretakerFee,
        RawField::VaccineFee,
        RawField::AnemiaFee,
        RawField::DewormingFee,
        RawField::DailyConsumption,
        RawField::DaysInPeriod,
        RawField::UnitForageCost,
        RawField::CubeCount,
        RawField::UnitCubeCost,
    ];
}

impl RawCharges {
    pub fn get(&self, field: RawField) -> CanonicalAmount {
        match field {
            RawField::BoxCharge => self.box_charge,
            RawField::SectionCharge => self.section_charge,
            RawField::BasketCharge => self.basket_charge,
            RawField::CaretakerFee => self.caretaker_fee,
            RawField::VaccineFee => self.vaccine_fee,
            RawField::AnemiaFee => self.anemia_fee,
            RawField::DewormingFee => self.deworming_fee,
            RawField::DailyConsumption => self.daily_consumption,
            RawField::DaysInPeriod => self.days_in_period,
            RawField::UnitForageCost => self.unit_forage_cost,
            RawField::CubeCount => self.cube_count,
            RawField::UnitCubeCost => self.unit_cube_cost,
        }
    }

    pub fn set(&mut self, field: RawField, value: CanonicalAmount) {
        let slot = match field {
            RawField::BoxCharge => &mut self.box_charge,
            RawField::SectionCharge => &mut self.section_charge,
            RawField::BasketCharge => &mut self.basket_charge,
            RawField::CaretakerFee => &mut self.caretaker_fee,
            RawField::VaccineFee => &mut self.vaccine_fee,
            RawField::AnemiaFee => &mut self.anemia_fee,
            RawField::DewormingFee => &mut self.deworming_fee,
            RawField::DailyConsumption => &mut self.daily_consumption,
            RawField::DaysInPeriod => &mut self.days_in_period,
            RawField::UnitForageCost => &mut self.unit_forage_cost,
            RawField::CubeCount => &mut self.cube_count,
            RawField::UnitCubeCost => &mut self.unit_cube_cost,
        };
        *slot = value;
    }
}

impl DerivedCharges {
    pub fn monthly_consumption(&self) -> CanonicalAmount {
        self.monthly_consumption
    }

    pub fn monthly_forage_cost(&self) -> CanonicalAmount {
        self.monthly_forage_cost
    }

    pub fn monthly_cube_cost(&self) -> CanonicalAmount {
        self.monthly_cube_cost
    }

    pub fn total_charge(&self) -> CanonicalAmount {
        self.total_charge
    }

    pub fn get(&self, field: DerivedField) -> CanonicalAmount {
        match field {
            DerivedField::MonthlyConsumption => self.monthly_consumption,
            DerivedField::MonthlyForageCost => self.monthly_forage_cost,
            DerivedField::MonthlyCubeCost => self.monthly_cube_cost,
            DerivedField::TotalCharge => self.total_charge,
        }
    }

    pub(crate) fn set(&mut self, field: DerivedField, value: CanonicalAmount) {
        match field {
            DerivedField::MonthlyConsumption => self.monthly_consumption = value,
            DerivedField::MonthlyForageCost => self.monthly_forage_cost = value,
            DerivedField::MonthlyCubeCost => self.monthly_cube_cost = value,
            DerivedField::TotalCharge => self.total_charge = value,
        }
    }
}

impl DerivedRecord {
    pub fn raw(&self) -> &RawCharges {
        &self.raw
    }

    pub fn derived(&self) -> &DerivedCharges {
        &self.derived
    }
}
