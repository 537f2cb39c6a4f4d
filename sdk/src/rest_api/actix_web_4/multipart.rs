// Copyright 2024 HerbsTrace Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use actix_multipart::{Multipart, MultipartError};
use actix_web_4::{dev, error, web, Error, FromRequest, HttpRequest};
use futures::future::{self, FutureExt, LocalBoxFuture};
use futures::TryStreamExt;

use crate::error::InternalError;
use crate::rest_api::resources::{
    error::ErrorResponse,
    form::{MultipartForm, UploadedFile},
};

use super::{error_response, ServiceState};

/// A `multipart/form-data` request body read completely into memory.
///
/// The body is rejected with 413 once it grows beyond the `max_upload_size` of the
/// `ServiceState`, and with 400 when it is not valid multipart data.
pub struct FormPayload(pub MultipartForm);

impl FormPayload {
    pub fn into_inner(self) -> MultipartForm {
        self.0
    }
}

impl FromRequest for FormPayload {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut dev::Payload) -> Self::Future {
        let max_upload_size = match req.app_data::<web::Data<ServiceState>>() {
            Some(state) => state.max_upload_size,
            None => {
                return future::err(rejection(ErrorResponse::internal_error(Box::new(
                    InternalError::with_message("App state not found".to_string()),
                ))))
                .boxed_local()
            }
        };

        let multipart = Multipart::new(req.headers(), payload.take());
        read_form(multipart, max_upload_size)
            .map(|result| result.map(FormPayload).map_err(rejection))
            .boxed_local()
    }
}

async fn read_form(
    mut multipart: Multipart,
    max_upload_size: usize,
) -> Result<MultipartForm, ErrorResponse> {
    let mut form = MultipartForm::new();
    let mut received = 0;

    while let Some(mut field) = multipart.try_next().await.map_err(malformed)? {
        let disposition = field.content_disposition();
        let field_name = disposition
            .get_name()
            .map(ToString::to_string)
            .unwrap_or_default();
        let file_name = disposition.get_filename().map(ToString::to_string);

        let mut content = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(malformed)? {
            received += chunk.len();
            if received > max_upload_size {
                return Err(ErrorResponse::new(
                    413,
                    &format!(
                        "Request body exceeds the maximum upload size of {} bytes",
                        max_upload_size
                    ),
                ));
            }
            content.extend_from_slice(&chunk);
        }

        match file_name {
            // browsers send an empty, unnamed part for a file input left blank
            Some(file_name) if file_name.is_empty() && content.is_empty() => (),
            Some(file_name) => form.add_file(UploadedFile {
                field_name,
                file_name: Some(file_name),
                content,
            }),
            None => {
                let value = String::from_utf8(content).map_err(|_| {
                    ErrorResponse::new(
                        400,
                        &format!("Field '{}' is not valid UTF-8", field_name),
                    )
                })?;
                form.add_field(field_name, value);
            }
        }
    }

    Ok(form)
}

fn malformed(err: MultipartError) -> ErrorResponse {
    debug!("Rejecting multipart body: {}", err);
    ErrorResponse::new(400, &format!("Malformed multipart body: {}", err))
}

fn rejection(err: ErrorResponse) -> Error {
    let response = error_response(&err);
    Error::from(error::InternalError::from_response(
        err.message().to_string(),
        response,
    ))
}
