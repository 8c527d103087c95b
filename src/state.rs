use crate::models::trip::Trip;

/// The filtered record set for one session iteration, plus which optional
/// columns the backing file carried. Built fresh by the loader and dropped
/// once the reports are done.
#[derive(Debug, Clone, Default)]
pub struct TripData {
    /// Trips that survived the month/day filters, in file order.
    pub trips: Vec<Trip>,

    /// Whether the backing file has a `Gender` column.
    pub has_gender: bool,

    /// Whether the backing file has a `Birth Year` column.
    pub has_birth_year: bool,
}

impl TripData {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Returns the next page of trips starting at `offset`; empty once the
    /// offset runs past the end.
    pub fn page(&self, offset: usize, size: usize) -> &[Trip] {
        let start = offset.min(self.trips.len());
        let end = offset.saturating_add(size).min(self.trips.len());
        &self.trips[start..end]
    }
}
