//! Renderers for every generated artifact.

mod dal_lua;
mod drivers;
mod models_lua;
mod queries_lua;
mod request_json;

pub use dal_lua::DalLua;
pub use drivers::{DRIVERS, DriverShim};
pub use models_lua::ModelsLua;
pub use queries_lua::QueriesLua;
pub use request_json::RequestJson;
