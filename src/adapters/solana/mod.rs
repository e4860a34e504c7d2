mod rpc;

pub use rpc::SolanaRpc;
