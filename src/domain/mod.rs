pub mod events;
pub mod inventory;
pub mod item;
pub mod value_objects;

pub use events::*;
pub use inventory::Inventory;
pub use item::*;
pub use value_objects::*;
