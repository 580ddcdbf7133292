//! Common traits for KUMA API responses

/// Trait for list responses that carry one page of records
///
/// Most list endpoints answer with a bare JSON array; some (incidents) nest
/// the array under a key. Implement this trait for the response shape to use
/// it with `KumaClient::fetch_all_pages()`.
pub trait PaginatedResponse<T> {
    /// Consume self and return the records of this page
    fn into_data(self) -> Vec<T>;
}

impl<T> PaginatedResponse<T> for Vec<T> {
    fn into_data(self) -> Vec<T> {
        self
    }
}

/// Trait for rows that are written to CSV exports
pub trait CsvRecord {
    /// Header row, in export column order
    const HEADER: &'static [&'static str];

    /// Field values, in the same order as `HEADER`
    fn fields(&self) -> Vec<&str>;
}
