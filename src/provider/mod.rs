pub use self::{attestation::Attestation, chain_rpc::ChainRpc};

mod attestation;
mod chain_rpc;
