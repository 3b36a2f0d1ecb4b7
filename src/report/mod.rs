//! Shaping apportionment results for display: overview cards, divisor
//! sweeps and plain-text tables shared by every front-end.

mod summary;
mod sweep;
mod table;

pub use summary::{format_thousands, Summary};
pub use sweep::{sweep, SweepPoint, MAX_SWEEP_POINTS};
pub use table::{format_count, render_comparison, render_summary, render_sweep};
