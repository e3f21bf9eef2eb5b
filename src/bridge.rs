//! Request/response boundary between a host UI and the flattening core.
//!
//! A host (a webview, a plugin, a CLI) sends [`ApiRequest`]s carrying an `id`;
//! the [`Dispatcher`] answers each with an [`ApiResponse`] carrying the same `id`,
//! so an asynchronous transport can match answers to callers. The core functions
//! stay free of any host state; the [`Host`] trait is the only way back out.

use crate::export::render_document;
use crate::face::{Face, Face2d, ModelData};
use crate::flatten::flatten_faces;
use crate::io::svg::SvgOptions;
use crate::io::{IoError, write_file};
use crate::units::Units;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// What the core needs from the host application.
pub trait Host {
    /// Current selection, units and saved preferences.
    fn model_data(&self) -> Result<ModelData, IoError>;

    /// Store the preferences blob.
    fn save_user_prefs(&mut self, prefs_json: &str) -> Result<(), IoError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "camelCase")]
pub enum ApiCall {
    GetData,
    GetFaces,
    FlattenFaces {
        faces: Vec<Face>,
    },
    #[serde(rename_all = "camelCase")]
    RenderSvg {
        units: Units,
        faces: Vec<Face2d>,
        #[serde(default)]
        fraction_digits: Option<usize>,
    },
    WriteFile {
        path: String,
        contents: String,
        #[serde(default)]
        overwrite: bool,
    },
    #[serde(rename_all = "camelCase")]
    SaveUserPrefs {
        prefs_json: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub id: u64,
    #[serde(flatten)]
    pub call: ApiCall,
}

/// Answer to one request. `message` holds the payload on success and a
/// human-readable error string on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub id: u64,
    pub ok: bool,
    pub message: Value,
}

impl ApiResponse {
    pub const fn success(id: u64, message: Value) -> Self {
        Self {
            id,
            ok: true,
            message,
        }
    }

    pub fn failure(id: u64, message: impl ToString) -> Self {
        Self {
            id,
            ok: false,
            message: Value::String(message.to_string()),
        }
    }
}

/// Routes requests to the core and the host.
pub struct Dispatcher<H: Host> {
    host: H,
}

impl<H: Host> Dispatcher<H> {
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Handle a request. Failures become `ok: false` responses; nothing panics
    /// and nothing is retried.
    pub fn handle(&mut self, request: ApiRequest) -> ApiResponse {
        let id = request.id;
        match self.call(request.call) {
            Ok(message) => ApiResponse::success(id, message),
            Err(err) => {
                tracing::warn!(id, %err, "request failed");
                ApiResponse::failure(id, err)
            },
        }
    }

    /// Handle a request given as JSON and answer in JSON.
    pub fn handle_json(&mut self, request: &str) -> String {
        let response = match serde_json::from_str::<ApiRequest>(request) {
            Ok(request) => self.handle(request),
            Err(err) => {
                // best effort to echo the id of a request we could not fully parse
                let id = serde_json::from_str::<Value>(request)
                    .ok()
                    .and_then(|v| v.get("id").and_then(Value::as_u64))
                    .unwrap_or(0);
                ApiResponse::failure(id, IoError::Json(err))
            },
        };
        serde_json::to_string(&response).unwrap_or_else(|err| {
            format!(r#"{{"id":{},"ok":false,"message":"{}"}}"#, response.id, err)
        })
    }

    fn call(&mut self, call: ApiCall) -> Result<Value, IoError> {
        match call {
            ApiCall::GetData => Ok(serde_json::to_value(self.host.model_data()?)?),
            ApiCall::GetFaces => Ok(serde_json::to_value(self.host.model_data()?.faces)?),
            ApiCall::FlattenFaces { faces } => {
                let flat: Vec<Face2d> = flatten_faces(&faces)?.into_iter().map(|f| f.face).collect();
                Ok(serde_json::to_value(flat)?)
            },
            ApiCall::RenderSvg {
                units,
                faces,
                fraction_digits,
            } => {
                let mut options = SvgOptions::default();
                if let Some(digits) = fraction_digits {
                    options.fraction_digits = digits;
                }
                Ok(Value::String(render_document(&faces, units, &options)?))
            },
            ApiCall::WriteFile {
                path,
                contents,
                overwrite,
            } => {
                write_file(&path, &contents, overwrite)?;
                Ok(json!(format!("{path} written successfully.")))
            },
            ApiCall::SaveUserPrefs { prefs_json } => {
                self.host.save_user_prefs(&prefs_json)?;
                Ok(Value::Null)
            },
        }
    }
}
