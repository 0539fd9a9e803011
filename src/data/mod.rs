/// Data layer: core types, loading, and header sanitization.
///
/// Architecture:
/// ```text
///  .csv / .xlsx
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → raw headers + typed cells
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ sanitize  │  normalize headers to [A-Za-z0-9_]
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  ordered columns + rows, schema lookup
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod sanitize;
