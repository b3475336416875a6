// Composition root for the shop API.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the file-backed collections and the stores on top of them.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
