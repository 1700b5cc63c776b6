//! List window types

use serde::Deserialize;

/// Maximum rows per list request
const MAX_LIMIT: i64 = 200;

/// Default rows per list request
const DEFAULT_LIMIT: i64 = 50;

/// Resolved offset/limit window for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    /// Rows to skip from the start of the store order
    pub skip: i64,
    /// Maximum rows to return (max 200)
    pub limit: i64,
}

impl ListWindow {
    /// Create a window with validation.
    ///
    /// - `skip` is clamped to a minimum of 0
    /// - `limit` is clamped to 1..=200
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip: skip.max(0),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.skip
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for ListWindow {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for list requests
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl From<ListParams> for ListWindow {
    fn from(params: ListParams) -> Self {
        Self::new(
            params.skip.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_skip() {
        let w = ListWindow::new(-5, 10);
        assert_eq!(w.offset(), 0);
    }

    #[test]
    fn clamps_limit() {
        let w = ListWindow::new(0, 0);
        assert_eq!(w.limit(), 1);

        let w = ListWindow::new(0, 999);
        assert_eq!(w.limit(), 200);
    }

    #[test]
    fn defaults() {
        let w = ListWindow::default();
        assert_eq!(w.offset(), 0);
        assert_eq!(w.limit(), 50);
    }

    #[test]
    fn from_params() {
        let w = ListWindow::from(ListParams {
            skip: Some(10),
            limit: Some(2),
        });
        assert_eq!(w.offset(), 10);
        assert_eq!(w.limit(), 2);

        let w = ListWindow::from(ListParams::default());
        assert_eq!(w, ListWindow::default());
    }
}
