mod gateway_event;
mod hosting_adapter;
mod invoker;

pub use gateway_event::{GatewayEvent, GatewayEventAdapter, GatewayResponse};
pub use hosting_adapter::{AdapterError, HostingAdapter, InboundCall, OutboundCall};
pub use invoker::ServerlessInvoker;
