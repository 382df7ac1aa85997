//! Request construction shared by all resource services.

pub mod query_params;
pub mod request;
pub mod url_encoding;

pub use query_params::{QueryParams, ToQuery};
pub use request::{API_KEY_HEADER, COMPANY_ID_HEADER, ORG_ID_HEADER, RequestContext, send_json};
pub use url_encoding::{encode_path_segment, resource_path};
