// Composition root for the activities bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory activity registry with the seed activities.
// - Wire the registry into the use case handlers.
// - Expose the HTTP router (REST, GraphQL, static signup page).

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
