use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttrError {
    #[error("can't convert {found} into Symbol")]
    TypeMismatch { found: &'static str },
}

pub type Result<T> = std::result::Result<T, AttrError>;
