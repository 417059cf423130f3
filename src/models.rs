pub mod area;
pub mod category;
pub mod product;
pub mod record;
pub mod role;
pub mod user;
pub mod warehouse;

pub use area::{Area, AreaInput};
pub use category::{Category, CategoryInput};
pub use product::{Product, ProductInput};
pub use record::{LookupField, RecordMeta, Resource};
pub use role::{Role, RoleInput};
pub use user::{User, UserInput};
pub use warehouse::{Warehouse, WarehouseInput};
