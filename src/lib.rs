//! Orderhouse: order-management REST service backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{DeletePolicy, Settings};
pub use error::{AppError, FieldErrors};
pub use model::{Customer, Order, Product};
pub use routes::{api_routes, common_routes};
pub use service::{CustomerService, OrderService, ProductService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
