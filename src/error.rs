//! Error handling for the engine

use rust_decimal::Decimal;

/// Validation error raised at the construction boundary.
///
/// The resolvers trust validated inputs; these errors surface to the
/// persistence/API layer that builds the value types, never from inside a
/// resolution call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("date range ends at {to} before it starts at {from}")]
    InvertedDateRange {
        from: chrono::DateTime<chrono::Utc>,
        to: chrono::DateTime<chrono::Utc>,
    },

    #[error("discount is enabled but has no date range")]
    MissingDiscountRange,

    #[error("percentage discount requires a percentage, none given")]
    MissingDiscountPercentage,

    #[error("discount percentage {0} is outside 0-100")]
    DiscountPercentageOutOfRange(Decimal),

    #[error("fixed-price discount requires a discount price, none given")]
    MissingDiscountPrice,

    #[error("discount price {0} is negative")]
    NegativeDiscountPrice(Decimal),

    #[error("max discount amount {0} is negative")]
    NegativeMaxDiscountAmount(Decimal),

    #[error("pricing option '{id}' has negative price {price}")]
    NegativePrice { id: String, price: Decimal },

    #[error("pax range allows at most {max_pax} passengers but requires at least {min_pax}")]
    InvalidPaxRange { min_pax: u32, max_pax: u32 },

    #[error("pax range must cover at least one passenger")]
    ZeroMinPax,

    #[error("pricing option '{0}' uses the custom category but has no custom label")]
    MissingCustomCategory(String),

    #[error("pricing group '{group}' has duplicate option id '{id}'")]
    DuplicateOptionId { group: String, id: String },

    #[error("pricing group '{0}' has no options")]
    EmptyPricingGroup(String),

    #[error("recurring departure '{0}' is missing a recurrence pattern")]
    MissingRecurrencePattern(String),

    #[error("non-recurring departure '{0}' carries recurrence fields")]
    UnexpectedRecurrenceFields(String),

    #[error("recurring departure '{0}' is missing a recurrence end date")]
    MissingRecurrenceEndDate(String),

    #[error("departure '{0}' has a recurrence end date on or before its start")]
    RecurrenceEndNotAfterStart(String),

    #[error("schedule has duplicate departure id '{0}'")]
    DuplicateDepartureId(String),

    #[error("flexible schedule requires a default date range")]
    MissingDefaultDateRange,

    #[error("default date range is only valid on flexible schedules")]
    UnexpectedDefaultDateRange,

    #[error("schedule recurrence interval must be at least 1")]
    ZeroRecurrenceInterval,
}

pub type Result<T> = std::result::Result<T, ValidationError>;
