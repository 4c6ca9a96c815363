mod aggregate;
mod category;
mod error;
mod event;
mod id;

pub use aggregate::AggregateRoot;
pub use category::{
    CLASS_NAME, Category, CategoryBuilder, CategoryEvent, CategoryName, CategoryNameError,
    CategoryRecord, MAX_NAME_LEN,
};
pub use error::Error;
pub use event::{DomainEvent, Event};
pub use id::{CategoryId, IdGenerator, RandomIds, SeededIds};
