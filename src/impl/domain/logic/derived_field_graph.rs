use crate::entities::{
    CanonicalAmount, DerivedCharges, DerivedField, DerivedRecord, RawCharges, RawField,
};

use super::{number_codec::NumberCodec, utils::round2};

/// An input to a formula: either a raw field or a previously derived one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Raw(RawField),
    Derived(DerivedField),
}

#[derive(Debug, Clone, Copy)]
pub enum Formula {
    Product(&'static [Operand]),
    Sum(&'static [Operand]),
}

impl Formula {
    pub fn operands(&self) -> &'static [Operand] {
        match self {
            Formula::Product(operands) | Formula::Sum(operands) => operands,
        }
    }
}

impl DerivedField {
    /// Every derived field appears after all derived fields it reads.
    pub const EVALUATION_ORDER: [DerivedField; 4] = [
        DerivedField::MonthlyConsumption,
        DerivedField::MonthlyForageCost,
        DerivedField::MonthlyCubeCost,
        DerivedField::TotalCharge,
    ];

    pub fn formula(self) -> Formula {
        use Operand::{Derived, Raw};
        match self {
            DerivedField::MonthlyConsumption => Formula::Product(&[
                Raw(RawField::DailyConsumption),
                Raw(RawField::DaysInPeriod),
            ]),
            DerivedField::MonthlyForageCost => Formula::Product(&[
                Derived(DerivedField::MonthlyConsumption),
                Raw(RawField::UnitForageCost),
            ]),
            DerivedField::MonthlyCubeCost => {
                Formula::Product(&[Raw(RawField::CubeCount), Raw(RawField::UnitCubeCost)])
            }
            DerivedField::TotalCharge => Formula::Sum(&[
                Raw(RawField::BoxCharge),
                Raw(RawField::SectionCharge),
                Raw(RawField::BasketCharge),
                Raw(RawField::CaretakerFee),
                Raw(RawField::VaccineFee),
                Raw(RawField::AnemiaFee),
                Raw(RawField::DewormingFee),
                Derived(DerivedField::MonthlyForageCost),
                Derived(DerivedField::MonthlyCubeCost),
            ]),
        }
    }

    /// Evaluates against the raw inputs and the outputs derived so far. The
    /// result is rounded here, so later formulas read the rounded value.
    fn evaluate(self, raw: &RawCharges, derived: &DerivedCharges) -> CanonicalAmount {
        let value_of = |operand: &Operand| match *operand {
            Operand::Raw(field) => raw.get(field),
            Operand::Derived(field) => derived.get(field),
        };
        let value: f64 = match self.formula() {
            Formula::Product(operands) => operands.iter().map(value_of).product(),
            Formula::Sum(operands) => operands.iter().map(value_of).sum(),
        };
        round2(value)
    }
}

/// Derives all outputs from the given raw inputs.
pub fn compute_derived(raw: &RawCharges) -> DerivedCharges {
    let raw = canonicalized(raw);
    DerivedField::EVALUATION_ORDER
        .iter()
        .fold(DerivedCharges::default(), |mut derived, field| {
            let value = field.evaluate(&raw, &derived);
            derived.set(*field, value);
            derived
        })
}

/// Derived fields that must be recomputed when `field` changes, directly or
/// through another derived field, in evaluation order.
pub fn dependents_of(field: RawField) -> Vec<DerivedField> {
    DerivedField::EVALUATION_ORDER
        .iter()
        .fold(Vec::new(), |mut affected, candidate| {
            let reads_affected_input =
                candidate
                    .formula()
                    .operands()
                    .iter()
                    .any(|operand| match operand {
                        Operand::Raw(raw) => *raw == field,
                        Operand::Derived(derived) => affected.contains(derived),
                    });
            if reads_affected_input {
                affected.push(*candidate);
            }
            affected
        })
}

fn canonicalized(raw: &RawCharges) -> RawCharges {
    RawField::ALL.iter().fold(*raw, |mut acc, field| {
        acc.set(*field, round2(raw.get(*field)));
        acc
    })
}

impl DerivedRecord {
    pub fn new(raw: RawCharges) -> Self {
        let raw = canonicalized(&raw);
        Self {
            derived: compute_derived(&raw),
            raw,
        }
    }

    /// Replaces one raw input and re-derives. Returns the derived fields that
    /// depend on the input.
    pub fn set_raw(&mut self, field: RawField, value: CanonicalAmount) -> Vec<DerivedField> {
        self.raw.set(field, round2(value));
        self.derived = compute_derived(&self.raw);
        dependents_of(field)
    }

    pub fn set_raw_text(
        &mut self,
        field: RawField,
        text: &str,
        codec: &NumberCodec,
    ) -> Vec<DerivedField> {
        self.set_raw(field, codec.parse_localized(text))
    }
}
