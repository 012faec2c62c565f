//! API documentation endpoints.
//!
//! Serves a static OpenAPI 3.0 description of the contract plus a Swagger
//! UI page that renders it. Purely descriptive; nothing here affects the
//! behavior of the API itself.

use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};

/// Swagger UI shell loading the document from the JSON endpoint.
const SWAGGER_PAGE: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8">
  <title>QA Pet API - Documentação</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5.11.0/swagger-ui.css" />
  <style>
    .swagger-ui .topbar { display: none }
  </style>
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5.11.0/swagger-ui-bundle.js"></script>
  <script>
    window.onload = function() {
      window.ui = SwaggerUIBundle({
        url: '/api-docs/openapi.json',
        dom_id: '#swagger-ui',
        deepLinking: true,
        displayRequestDuration: true,
        docExpansion: 'list'
      });
    };
  </script>
</body>
</html>"#;

pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_PAGE)
}

pub async fn openapi_json() -> Json<Value> {
    Json(openapi_document())
}

/// The OpenAPI 3.0 document describing the whole HTTP contract.
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "QA Pet API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "API REST para treinamento e prática de testes de QA (manual e automação)."
        },
        "servers": [
            { "url": "http://localhost:3000", "description": "Servidor de desenvolvimento local" }
        ],
        "tags": [
            { "name": "Pets", "description": "Operações relacionadas a pets (animais de estimação)" }
        ],
        "components": {
            "schemas": {
                "PetKind": {
                    "type": "string",
                    "enum": ["dog", "cat", "bird", "other"],
                    "description": "Tipo/espécie do pet",
                    "example": "dog"
                },
                "Pet": {
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "string",
                            "format": "uuid",
                            "description": "Identificador único do pet (gerado automaticamente)",
                            "example": "550e8400-e29b-41d4-a716-446655440000"
                        },
                        "name": { "type": "string", "minLength": 1, "maxLength": 100, "example": "Rex" },
                        "kind": { "$ref": "#/components/schemas/PetKind" },
                        "age": { "type": "integer", "minimum": 0, "maximum": 150, "example": 5 },
                        "breed": { "type": "string", "maxLength": 100, "example": "Labrador" },
                        "ownerName": { "type": "string", "maxLength": 100, "example": "João Silva" },
                        "createdAt": { "type": "string", "format": "date-time" },
                        "updatedAt": { "type": "string", "format": "date-time" }
                    },
                    "required": ["id", "name", "kind", "age", "createdAt", "updatedAt"]
                },
                "CreatePet": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "minLength": 1, "maxLength": 100, "example": "Rex" },
                        "kind": { "$ref": "#/components/schemas/PetKind" },
                        "age": { "type": "integer", "minimum": 0, "maximum": 150, "example": 5 },
                        "breed": { "type": "string", "maxLength": 100 },
                        "ownerName": { "type": "string", "maxLength": 100 }
                    },
                    "required": ["name", "kind", "age"]
                },
                "UpdatePet": {
                    "type": "object",
                    "description": "Atualização parcial: todos os campos são opcionais, mas ao menos um deve ser fornecido.",
                    "properties": {
                        "name": { "type": "string", "minLength": 1, "maxLength": 100 },
                        "kind": { "$ref": "#/components/schemas/PetKind" },
                        "age": { "type": "integer", "minimum": 0, "maximum": 150 },
                        "breed": { "type": "string", "maxLength": 100 },
                        "ownerName": { "type": "string", "maxLength": 100 }
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "properties": {
                        "erro": {
                            "type": "string",
                            "description": "Código identificador do tipo de erro",
                            "enum": [
                                "ERRO_VALIDACAO",
                                "RECURSO_NAO_ENCONTRADO",
                                "ID_INVALIDO",
                                "JSON_INVALIDO",
                                "ERRO_INTERNO"
                            ]
                        },
                        "mensagem": { "type": "string", "description": "Mensagem descritiva" },
                        "detalhes": { "description": "Detalhes adicionais sobre o erro (opcional)" }
                    },
                    "required": ["erro", "mensagem"]
                }
            }
        },
        "paths": {
            "/pets": {
                "post": {
                    "tags": ["Pets"],
                    "summary": "Cria um novo pet",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/CreatePet" }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Pet criado com sucesso",
                            "content": {
                                "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
                            }
                        },
                        "400": {
                            "description": "Dados inválidos",
                            "content": {
                                "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } }
                            }
                        }
                    }
                },
                "get": {
                    "tags": ["Pets"],
                    "summary": "Lista todos os pets (com filtros opcionais)",
                    "parameters": [
                        {
                            "name": "kind",
                            "in": "query",
                            "required": false,
                            "schema": { "$ref": "#/components/schemas/PetKind" }
                        },
                        {
                            "name": "age",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "number", "minimum": 0 }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Lista de pets",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": { "$ref": "#/components/schemas/Pet" } }
                                }
                            }
                        },
                        "400": {
                            "description": "Filtros inválidos",
                            "content": {
                                "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } }
                            }
                        }
                    }
                }
            },
            "/pets/{id}": {
                "parameters": [
                    {
                        "name": "id",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "string", "format": "uuid" }
                    }
                ],
                "get": {
                    "tags": ["Pets"],
                    "summary": "Busca um pet pelo ID",
                    "responses": {
                        "200": {
                            "description": "Pet encontrado",
                            "content": {
                                "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
                            }
                        },
                        "400": { "description": "ID inválido" },
                        "404": { "description": "Pet não encontrado" }
                    }
                },
                "put": {
                    "tags": ["Pets"],
                    "summary": "Atualiza um pet (atualização parcial permitida)",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/UpdatePet" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Pet atualizado",
                            "content": {
                                "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
                            }
                        },
                        "400": { "description": "Dados ou ID inválidos" },
                        "404": { "description": "Pet não encontrado" }
                    }
                },
                "delete": {
                    "tags": ["Pets"],
                    "summary": "Remove um pet",
                    "responses": {
                        "204": { "description": "Pet removido com sucesso" },
                        "400": { "description": "ID inválido" },
                        "404": { "description": "Pet não encontrado" }
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Health check",
                    "responses": {
                        "200": { "description": "Serviço operacional" }
                    }
                }
            }
        }
    })
}
