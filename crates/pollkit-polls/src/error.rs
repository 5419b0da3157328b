//! Error types for pollkit-polls

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] pollkit_fs::Error),

    #[error("Catalog has none of the known categories")]
    NoCategories,

    #[error("Category {category} has {available} accounts, at least 2 are needed")]
    NotEnoughAccounts { category: String, available: usize },

    #[error("A poll needs at least 2 options, got {0}")]
    InvalidOptionCount(usize),

    #[error("Catalog has no template usable for {options} options")]
    NoTemplates { options: usize },
}
