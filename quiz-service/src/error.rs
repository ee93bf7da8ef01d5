use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("user not recognized")]
    UnknownUser,
    #[error("no quiz available")]
    NoQuizAvailable,
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    #[error("{0}")]
    Store(String),
    #[error("{0}")]
    Asset(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let msg = self.to_string();
        let status: StatusCode = self.into();

        (status, msg).into_response()
    }
}

impl From<Error> for StatusCode {
    fn from(error: Error) -> Self {
        match error {
            Error::UnknownUser => StatusCode::FORBIDDEN,
            Error::NoQuizAvailable => StatusCode::NOT_FOUND,
            Error::MalformedRecord(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Store(_) | Error::Asset(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
