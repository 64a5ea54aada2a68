//! Read-only mappings of the rental schema. The tables are owned by the database;
//! these models only give the columns Rust types.

#[allow(unused_imports)]
pub mod prelude {
    pub use super::category::Entity as Category;
    pub use super::customer::Entity as Customer;
    pub use super::film::Entity as Film;
    pub use super::film_category::Entity as FilmCategory;
    pub use super::inventory::Entity as Inventory;
    pub use super::payment::Entity as Payment;
    pub use super::rental::Entity as Rental;
}

pub mod category;
pub mod customer;
pub mod film;
pub mod film_category;
pub mod inventory;
pub mod payment;
pub mod rental;
