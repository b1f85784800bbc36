pub mod customers;
pub mod orders;
pub mod products;
pub mod validation;

pub use customers::CustomerService;
pub use orders::OrderService;
pub use products::ProductService;
