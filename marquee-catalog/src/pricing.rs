use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything the discount engine needs to price one ticket of a showing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketContext {
    /// Movie carries the special code
    pub is_special: bool,

    /// When the showing starts; only the hour component participates in
    /// the midday rule
    pub start_time: DateTime<Utc>,

    /// 1-based position of the showing within the day
    pub sequence_of_day: u32,

    /// Base ticket price before discount
    pub base_price: f64,
}

/// The fixed discount rule table, represented as data so tests can pin it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountConfig {
    /// Fraction of base price taken off for special movies
    pub special_rate: f64,

    /// Fraction of base price taken off for midday showings
    pub midday_rate: f64,

    /// Inclusive start hour of the midday window
    pub midday_start_hour: u32,

    /// Inclusive end hour of the midday window
    pub midday_end_hour: u32,

    /// Flat currency discounts keyed by exact sequence number
    pub sequence_discounts: HashMap<u32, f64>,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            special_rate: 0.20,
            midday_rate: 0.25,
            midday_start_hour: 11,
            midday_end_hour: 16,
            sequence_discounts: {
                let mut m = HashMap::new();
                m.insert(1, 3.0);
                m.insert(2, 2.0);
                m.insert(7, 1.0);
                m
            },
        }
    }
}

/// Evaluates the three discount rules for a showing and applies the
/// largest. The two percentage rules (special, midday) never stack: only
/// the bigger of the two competes against the flat sequence discount, and
/// on an exact tie the flat discount wins.
pub struct DiscountEngine {
    config: DiscountConfig,
}

impl Default for DiscountEngine {
    fn default() -> Self {
        Self::new(DiscountConfig::default())
    }
}

impl DiscountEngine {
    pub fn new(config: DiscountConfig) -> Self {
        Self { config }
    }

    /// The larger of the special-movie and midday percentage discounts,
    /// as a currency amount
    fn percentage_discount(&self, context: &TicketContext) -> f64 {
        let special_discount = if context.is_special {
            context.base_price * self.config.special_rate
        } else {
            0.0
        };

        let hour = context.start_time.hour();
        let midday_discount =
            if hour >= self.config.midday_start_hour && hour <= self.config.midday_end_hour {
                context.base_price * self.config.midday_rate
            } else {
                0.0
            };

        special_discount.max(midday_discount)
    }

    /// Flat discount keyed by the exact sequence number, zero for
    /// sequences outside the table
    fn sequence_discount(&self, context: &TicketContext) -> f64 {
        self.config
            .sequence_discounts
            .get(&context.sequence_of_day)
            .copied()
            .unwrap_or(0.0)
    }

    /// The discount to subtract from the base price. The comparison is
    /// deliberately strict: on an exact tie the flat sequence discount
    /// wins over the percentage one.
    pub fn discount(&self, context: &TicketContext) -> f64 {
        let percentage_discount = self.percentage_discount(context);
        let sequence_discount = self.sequence_discount(context);
        if percentage_discount > sequence_discount {
            percentage_discount
        } else {
            sequence_discount
        }
    }

    /// Per-ticket fee for the showing. No rounding and no clamping; the
    /// caller owns display formatting.
    pub fn ticket_fee(&self, context: &TicketContext) -> f64 {
        context.base_price - self.discount(context)
    }
}
