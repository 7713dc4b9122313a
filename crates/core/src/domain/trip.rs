use chrono::NaiveDate;

/// The caller's requested trip. Immutable for the duration of one search;
/// the page text being searched travels separately as shared read-only data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConstraints {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

impl SearchConstraints {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self { origin: origin.into(), destination: destination.into(), date }
    }
}
