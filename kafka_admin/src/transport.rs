mod http_transport;
mod reqwest_transport;

pub use http_transport::*;
pub use reqwest_transport::*;
