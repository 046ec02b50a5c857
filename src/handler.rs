use lambda_http::{http::Method, Body, Error, Request, Response};
use serde::Deserialize;
use serde_json::json;

/// Headers attached to every response, pre-flight and error paths included.
const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "OPTIONS,POST"),
    ("Content-Type", "application/json"),
];

#[derive(Debug, Deserialize)]
struct GreetingRequest {
    #[serde(default = "default_name")]
    name: String,
}

fn default_name() -> String {
    "World".to_string()
}

fn json_response(status: u16, body: Body) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(status);
    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }
    let resp = builder.body(body).map_err(Box::new)?;
    Ok(resp)
}

/// Handle API Gateway requests: answer CORS pre-flight directly, otherwise
/// greet whoever the JSON body names.
pub async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    // Browsers send OPTIONS before the real request; no body to parse there.
    if event.method() == Method::OPTIONS {
        return json_response(200, Body::Empty);
    }

    match serde_json::from_slice::<GreetingRequest>(event.body()) {
        Ok(payload) => json_response(
            200,
            json!({ "message": format!("Hello, {}!", payload.name) })
                .to_string()
                .into(),
        ),
        Err(e) => {
            tracing::debug!(error = %e, "rejected malformed request body");
            json_response(400, json!({ "error": e.to_string() }).to_string().into())
        }
    }
}
