/// Logger
pub mod logger;
/// RPC providers
pub mod providers;
