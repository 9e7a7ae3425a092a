//! DST disambiguation for civil times that are skipped or repeated.

use serde::{Deserialize, Serialize};

use crate::instant::Instant;

/// How a civil time is mapped back to an instant across a DST transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DstPolicy {
    /// Repeated times resolve to the earlier instant; skipped times to the end of the gap.
    #[default]
    Earliest,
    /// Repeated times resolve to the later instant; skipped times to the end of the gap.
    Latest,
    /// Repeated and skipped times are errors.
    Strict,
}

/// Every instant a civil time can denote in a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalResolution {
    Unique(Instant),
    /// The civil time occurs twice (fall back).
    Ambiguous { earlier: Instant, later: Instant },
    /// The civil time falls in a gap (spring forward). `transition` is the first
    /// instant after the gap.
    Skipped { transition: Instant },
}
