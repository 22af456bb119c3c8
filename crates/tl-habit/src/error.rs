use thiserror::Error;

#[derive(Debug, Error)]
pub enum HabitError {
    #[error("habit parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HabitResult<T> = Result<T, HabitError>;
