// tests/common/builders.rs
use range_count::Decimal;

/// Owns decimal descriptor storage and lends it out in the nullable slot
/// shape the counting API expects.
#[allow(dead_code)]
#[derive(Default)]
pub struct DecimalRanges {
    slots: Vec<Option<Vec<Decimal>>>,
}

#[allow(dead_code)]
impl DecimalRanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair(mut self, low: i64, high: i64) -> Self {
        self.slots.push(Some(vec![Decimal::from(low), Decimal::from(high)]));
        self
    }

    pub fn decimal_pair(mut self, low: Decimal, high: Decimal) -> Self {
        self.slots.push(Some(vec![low, high]));
        self
    }

    pub fn empty(mut self) -> Self {
        self.slots.push(Some(Vec::new()));
        self
    }

    pub fn raw(mut self, values: &[i64]) -> Self {
        self.slots.push(Some(values.iter().copied().map(Decimal::from).collect()));
        self
    }

    pub fn absent(mut self) -> Self {
        self.slots.push(None);
        self
    }

    pub fn slots(&self) -> Vec<Option<&[Decimal]>> {
        self.slots.iter().map(|slot| slot.as_deref()).collect()
    }
}

#[allow(dead_code)]
pub fn decimals(values: &[i64]) -> Vec<Decimal> {
    values.iter().copied().map(Decimal::from).collect()
}
