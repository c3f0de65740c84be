//! Resource request domain entities (read path only).

pub mod model;
pub mod status;

pub use model::ResourceRequest;
pub use status::RequestStatus;
