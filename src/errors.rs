use thiserror::Error;

pub type Result<T> = std::result::Result<T, TelloError>;

#[derive(Error, Debug)]
pub enum TelloError {
    #[error("drone rejected \"{command}\" - {response}")]
    CommandFailed { command: String, response: String },

    #[error("no response to \"{command}\" within {timeout_millis}ms")]
    Timeout { command: String, timeout_millis: u128 },

    #[error("could not reach drone after {attempts} attempts")]
    ConnectFailed { attempts: u32 },

    #[error("could not parse \"{msg}\"")]
    ParseError { msg: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}
