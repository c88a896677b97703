use serde::{Deserialize, Serialize};

/// Marks whether signals were read from the chain or synthesized after a
/// provider failure, so callers can tell real input from synthetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalSource {
    Chain,
    Fallback,
}
