#[derive(thiserror::Error, Debug)]
pub enum AppErrors {
    #[error("io: {0}")]
    Io(String),
    #[error("console: {0}")]
    Console(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("row {row}: bad timestamp {value:?}: {source}")]
    Timestamp {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("input closed before a value was supplied")]
    InputClosed,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionParseError {
    #[error("unknown city {0:?}")]
    UnknownCity(String),
    #[error("unknown month {0:?}")]
    UnknownMonth(String),
    #[error("unknown day {0:?}")]
    UnknownDay(String),
}

pub type AppResult<T> = Result<T, AppErrors>;
