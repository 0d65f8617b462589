pub mod request;

pub use request::{ApiResponse, ContactPayload, ServicesQuery};
