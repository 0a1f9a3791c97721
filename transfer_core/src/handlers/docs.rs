//! Static OpenAPI description of the transfer endpoints

use axum::{response::IntoResponse, Json};
use serde_json::{json, Value};

pub const API_TITLE: &str = "File Transfer API";
pub const API_DESCRIPTION: &str = "API for uploading and downloading zip files";
pub const API_VERSION: &str = "1.0.0";

pub async fn openapi_spec() -> impl IntoResponse {
    Json(openapi_document())
}

pub fn openapi_document() -> Value {
    let error_response = json!({
        "description": "Error",
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Error" } }
        }
    });

    let index = json!({
        "get": {
            "summary": "Serve the landing page",
            "responses": {
                "200": {
                    "description": "HTML page",
                    "content": { "text/html": { "schema": { "type": "string" } } }
                },
                "500": error_response
            }
        }
    });

    let filenames = json!({ "type": "array", "items": { "type": "string" } });
    let list_files = json!({
        "get": {
            "summary": "List available zip files",
            "responses": {
                "200": {
                    "description": "Stored zip filenames",
                    "content": { "application/json": { "schema": filenames } }
                },
                "500": error_response
            }
        }
    });

    let upload_body = json!({
        "required": true,
        "content": {
            "multipart/form-data": {
                "schema": {
                    "type": "object",
                    "required": ["file"],
                    "properties": { "file": { "type": "string", "format": "binary" } }
                }
            }
        }
    });
    let upload = json!({
        "post": {
            "summary": "Upload a zip file",
            "requestBody": upload_body,
            "responses": {
                "200": {
                    "description": "Stored filename",
                    "content": {
                        "application/json": {
                            "schema": { "$ref": "#/components/schemas/UploadResponse" }
                        }
                    }
                },
                "400": error_response,
                "500": error_response
            }
        }
    });

    let download = json!({
        "get": {
            "summary": "Download a zip file",
            "parameters": [{
                "name": "filename",
                "in": "path",
                "required": true,
                "schema": { "type": "string" }
            }],
            "responses": {
                "200": {
                    "description": "Zip archive",
                    "content": {
                        "application/zip": { "schema": { "type": "string", "format": "binary" } }
                    }
                },
                "404": error_response
            }
        }
    });

    let schemas = json!({
        "UploadResponse": {
            "type": "object",
            "required": ["filename", "status"],
            "properties": {
                "filename": { "type": "string" },
                "status": { "type": "string" }
            }
        },
        "Error": {
            "type": "object",
            "required": ["error", "code", "status"],
            "properties": {
                "error": { "type": "string" },
                "code": { "type": "string" },
                "status": { "type": "integer" }
            }
        }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": API_TITLE,
            "description": API_DESCRIPTION,
            "version": API_VERSION
        },
        "paths": {
            "/": index,
            "/list-files": list_files,
            "/upload": upload,
            "/download/{filename}": download
        },
        "components": { "schemas": schemas }
    })
}
