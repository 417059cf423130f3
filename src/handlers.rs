pub mod areas;
pub mod categories;
pub mod ping;
pub mod products;
pub mod roles;
pub mod users;
pub mod warehouses;
