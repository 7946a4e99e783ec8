//! Record schemas for the storefront collections, their validation rules
//! and the document store client.

pub mod contact;
pub mod db;
pub mod errors;
pub mod kind;
pub mod order;
pub mod product;
pub mod record;
pub mod user;

pub use contact::ContactInquiry;
pub use errors::{FieldError, ModelError};
pub use kind::RecordKind;
pub use order::{Order, OrderItem};
pub use product::Product;
pub use record::{parse_record, Record};
pub use user::User;
