use thiserror::Error;

pub type PrinceResult<T> = std::result::Result<T, PrinceError>;

#[derive(Error, Debug)]
pub enum PrinceError {
    #[error("invalid configuration: {0}")]
    Configuration(&'static str),

    #[error("keyspace for a chain overflowed a 128-bit integer")]
    Overflow,

    #[error("an I/O error occured")]
    Io(#[from] std::io::Error),

    #[error("failed to decode the persisted resume cursor")]
    Decode(#[from] bincode::Error),
}
