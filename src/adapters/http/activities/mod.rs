//! HTTP adapter for activity endpoints.
//!
//! - `GET /activities` - Full registry with rosters
//! - `POST /activities/:activity_name/signup?email=` - Add a student (teacher only)
//! - `DELETE /activities/:activity_name/unregister?email=` - Remove a student (teacher only)

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ActivityListResponse, ActivityResponse, EmailQuery, ErrorResponse, RosterCommandResponse,
};
pub use handlers::ActivityHandlers;
pub use routes::activity_routes;
