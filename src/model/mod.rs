pub mod name;
pub mod phone;
pub mod birthday;
pub mod record;
pub mod address_book;
pub mod upcoming;

// Re-exports for convenience
pub use name::Name;
pub use phone::Phone;
pub use birthday::{Birthday, DATE_FORMAT};
pub use record::Record;
pub use address_book::AddressBook;
pub use upcoming::UpcomingBirthday;
