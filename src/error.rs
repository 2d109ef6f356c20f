use thiserror::Error;

/// Why [`commit_add`](crate::ListStore::commit_add) left the list untouched.
///
/// The add dialog stays open in every case, so a caller that does not want
/// to surface a message can simply ignore the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddError {
    #[error("item name is empty")]
    BlankName,

    #[error("quantity {input:?} is not a positive whole number")]
    InvalidQuantity { input: String },
}
