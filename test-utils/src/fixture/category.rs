//! Category fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::category;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Sports";

/// Default test category color.
pub const DEFAULT_COLOR: &str = "#EF4444";

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Sports"`
/// - color: `"#EF4444"`
/// - created_at: 2025-01-01T00:00:00Z
pub fn entity() -> category::Model {
    category::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        color: DEFAULT_COLOR.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}
