//! SeaORM entities mapping to database tables.

pub mod todo;

pub mod prelude {
    pub use super::todo::Entity as Todo;
    pub use super::todo::Model as TodoModel;
    pub use super::todo::ActiveModel as TodoActiveModel;
    pub use super::todo::Column as TodoColumn;
}
