/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  grain_size_times.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → Dataset (or LoadError)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  grain sizes / times / task counts, file order
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
