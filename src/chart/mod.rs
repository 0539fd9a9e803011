/// Chart layer: request types, validation, and figure dispatch.
///
/// ```text
///  UI selections
///        │
///        ▼
///   ┌──────────┐
///   │ request   │  ChartRequest → validate → ValidatedRequest
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  figure   │  dispatch to Scatter / Bar / Histogram data
///   └──────────┘
/// ```

pub mod figure;
pub mod request;
