use std::convert::Infallible;

use warp::{
    filters::body::BodyDeserializeError,
    http::StatusCode,
    reject::{LengthRequired, MethodNotAllowed, PayloadTooLarge, UnsupportedMediaType},
    Rejection, Reply,
};

use crate::{error::Error, schema::ErrorBody};

fn status_and_message(err: &Rejection) -> (StatusCode, String) {
    if err.is_not_found() {
        return (StatusCode::NOT_FOUND, "Not Found".to_string());
    }

    if let Some(e) = err.find::<Error>() {
        (e.status(), e.message())
    } else if let Some(e) = err.find::<BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if err.find::<UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Expected a JSON request body".to_string(),
        )
    } else if err.find::<PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            "Request body too large".to_string(),
        )
    } else if err.find::<LengthRequired>().is_some() {
        (
            StatusCode::LENGTH_REQUIRED,
            "Content-Length required".to_string(),
        )
    } else if err.find::<MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed".to_string(),
        )
    } else {
        log::error!("Unhandled rejection: {err:?}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    }
}

/// Turns every rejection into `{"error": "..."}` with a matching status.
pub async fn recover(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, error) = status_and_message(&err);

    if status.is_server_error() {
        log::error!("> {status}: {error}");
    } else {
        log::trace!("> {status}: {error}");
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorBody { error }),
        status,
    ))
}
