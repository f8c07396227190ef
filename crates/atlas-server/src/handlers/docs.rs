//! Interface description: OpenAPI document and a browsable page

use atlas_core::API_KEY_HEADER;
use axum::{response::Html, Json};
use serde_json::{json, Value};

pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_PAGE)
}

const SWAGGER_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>Atlas API</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    SwaggerUIBundle({
      url: "/openapi.json",
      dom_id: "#swagger-ui",
      oauth2RedirectUrl: window.location.origin + "/docs/oauth2-redirect"
    });
  </script>
</body>
</html>
"##;

fn openapi_document() -> Value {
    let person = json!({
        "type": "object",
        "properties": {
            "id": { "type": "integer", "format": "int64" },
            "name": { "type": "string", "nullable": true },
            "surname": { "type": "string", "nullable": true },
            "alias": { "type": "string", "nullable": true },
            "phone": { "type": "string", "nullable": true },
            "group": { "type": "string", "nullable": true }
        },
        "required": ["id", "name", "surname", "alias", "phone", "group"]
    });
    let new_person = json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "nullable": true },
            "surname": { "type": "string", "nullable": true },
            "alias": { "type": "string", "nullable": true },
            "phone": { "type": "string", "nullable": true },
            "group": { "type": "string", "nullable": true }
        }
    });
    let error = json!({
        "type": "object",
        "properties": {
            "error": { "type": "string" },
            "code": { "type": "string" }
        },
        "required": ["error", "code"]
    });
    let unauthorized = json!({
        "description": "Missing or invalid API key",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Error" } } }
    });

    let search_ok = json!({
        "description": "Up to 50 matches, newest first",
        "content": {
            "application/json": {
                "schema": {
                    "type": "object",
                    "properties": {
                        "results": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Person" }
                        }
                    }
                }
            }
        }
    });

    json!({
        "openapi": "3.0.3",
        "info": { "title": "Atlas API", "version": env!("CARGO_PKG_VERSION") },
        "security": [{ "ApiKey": [] }],
        "paths": {
            "/health": {
                "get": {
                    "summary": "Verify storage is reachable",
                    "security": [],
                    "responses": {
                        "200": { "description": "Storage reachable" },
                        "503": { "description": "Storage unreachable" }
                    }
                }
            },
            "/init": {
                "post": {
                    "summary": "Create the persons table and indexes if absent",
                    "responses": {
                        "200": { "description": "Schema ready" },
                        "401": unauthorized
                    }
                }
            },
            "/persons": {
                "post": {
                    "summary": "Insert one person",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/NewPerson" } } }
                    },
                    "responses": {
                        "200": { "description": "Inserted; returns the assigned id" },
                        "400": { "description": "Malformed body" },
                        "401": unauthorized
                    }
                }
            },
            "/search": {
                "get": {
                    "summary": "Case-insensitive substring search over name, surname, alias and phone",
                    "parameters": [{
                        "name": "q",
                        "in": "query",
                        "required": true,
                        "description": "Name/alias/phone fragment",
                        "schema": { "type": "string", "minLength": 1 }
                    }],
                    "responses": {
                        "200": search_ok,
                        "400": { "description": "Missing or empty query" },
                        "401": unauthorized
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Person": person,
                "NewPerson": new_person,
                "Error": error
            },
            "securitySchemes": {
                "ApiKey": { "type": "apiKey", "in": "header", "name": API_KEY_HEADER }
            }
        }
    })
}
