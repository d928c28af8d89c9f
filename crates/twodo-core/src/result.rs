use crate::error::TwoDoError;

pub type TwoDoResult<T> = Result<T, TwoDoError>;
