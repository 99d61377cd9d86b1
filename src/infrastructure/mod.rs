pub mod rpc_adapter;
pub mod store;
