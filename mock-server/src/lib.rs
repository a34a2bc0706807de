//! In-memory stand-in for the ViaCEP provider.
//!
//! Serves the two lookup endpoints over a small fixture directory with the
//! provider's observable rules: malformed input is a 400, an unknown postal
//! code is a 200 carrying `{"erro": true}`, and an address search with no
//! match is a 200 carrying `[]`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// One address record in the provider's wire shape.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub cep: String,
    pub logradouro: String,
    pub complemento: String,
    pub unidade: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
    pub estado: String,
    pub regiao: String,
    pub ibge: String,
    pub gia: String,
    pub ddd: String,
    pub siafi: String,
}

impl Address {
    /// Digits-only postal code, as used in request paths.
    pub fn digits(&self) -> String {
        self.cep.chars().filter(char::is_ascii_digit).collect()
    }
}

/// Records the mock serves, plus an optional status that overrides every
/// answer (for exercising unexpected provider states).
#[derive(Clone, Debug, Default)]
pub struct Directory {
    pub addresses: Vec<Address>,
    pub forced_status: Option<StatusCode>,
}

impl Directory {
    pub fn new(addresses: Vec<Address>) -> Self {
        Self {
            addresses,
            forced_status: None,
        }
    }

    pub fn with_forced_status(mut self, status: StatusCode) -> Self {
        self.forced_status = Some(status);
        self
    }

    pub fn find_by_cep(&self, cep: &str) -> Option<&Address> {
        self.addresses.iter().find(|a| a.digits() == cep)
    }

    /// State and city match exactly (case-insensitive); the street query is
    /// a case-insensitive substring of the record's street.
    pub fn search(&self, uf: &str, city: &str, street: &str) -> Vec<Address> {
        let street = street.to_lowercase();
        self.addresses
            .iter()
            .filter(|a| a.uf.eq_ignore_ascii_case(uf))
            .filter(|a| a.localidade.to_lowercase() == city.to_lowercase())
            .filter(|a| a.logradouro.to_lowercase().contains(&street))
            .cloned()
            .collect()
    }
}

pub type Db = Arc<Directory>;

pub fn app() -> Router {
    app_with(Directory::new(fixtures()))
}

pub fn app_with(directory: Directory) -> Router {
    Router::new()
        .route("/ws/{cep}/json/", get(lookup_cep))
        .route("/ws/{uf}/{city}/{street}/json/", get(search_address))
        .with_state(Arc::new(directory))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, directory: Directory) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(directory)).await
}

fn is_valid_cep(cep: &str) -> bool {
    cep.len() == 8 && cep.bytes().all(|b| b.is_ascii_digit())
}

async fn lookup_cep(State(db): State<Db>, Path(cep): Path<String>) -> Response {
    if let Some(status) = db.forced_status {
        return status.into_response();
    }
    if !is_valid_cep(&cep) {
        log::info!("rejecting malformed cep {cep:?}");
        return StatusCode::BAD_REQUEST.into_response();
    }
    match db.find_by_cep(&cep) {
        Some(address) => Json(address.clone()).into_response(),
        None => {
            log::info!("cep {cep} not in directory");
            Json(serde_json::json!({ "erro": true })).into_response()
        }
    }
}

async fn search_address(
    State(db): State<Db>,
    Path((uf, city, street)): Path<(String, String, String)>,
) -> Response {
    if let Some(status) = db.forced_status {
        return status.into_response();
    }
    let well_formed = uf.chars().count() == 2
        && uf.chars().all(char::is_alphabetic)
        && city.chars().count() >= 3
        && street.chars().count() >= 3;
    if !well_formed {
        log::info!("rejecting malformed address search {uf:?}/{city:?}/{street:?}");
        return StatusCode::BAD_REQUEST.into_response();
    }
    let found = db.search(&uf, &city, &street);
    log::info!("address search {uf}/{city}/{street}: {} match(es)", found.len());
    Json(found).into_response()
}

fn record(cep: &str, logradouro: &str, complemento: &str, bairro: &str, localidade: &str, uf: &str) -> Address {
    let (estado, regiao, ibge, ddd, siafi) = match (uf, localidade) {
        ("SP", _) => ("São Paulo", "Sudeste", "3550308", "11", "7107"),
        ("MG", "Belo Horizonte") => ("Minas Gerais", "Sudeste", "3106200", "31", "4123"),
        ("MG", _) => ("Minas Gerais", "Sudeste", "3170206", "34", "5403"),
        _ => ("", "", "", "", ""),
    };
    Address {
        cep: cep.to_string(),
        logradouro: logradouro.to_string(),
        complemento: complemento.to_string(),
        unidade: String::new(),
        bairro: bairro.to_string(),
        localidade: localidade.to_string(),
        uf: uf.to_string(),
        estado: estado.to_string(),
        regiao: regiao.to_string(),
        ibge: ibge.to_string(),
        gia: if uf == "SP" { "1004".to_string() } else { String::new() },
        ddd: ddd.to_string(),
        siafi: siafi.to_string(),
    }
}

/// Default fixture directory.
pub fn fixtures() -> Vec<Address> {
    vec![
        record("01001-000", "Praça da Sé", "lado ímpar", "Sé", "São Paulo", "SP"),
        record("01310-100", "Avenida Paulista", "de 612 a 1510 - lado par", "Bela Vista", "São Paulo", "SP"),
        record("30130-010", "Praça Sete de Setembro", "", "Centro", "Belo Horizonte", "MG"),
        record("38400-100", "Rua Xavantes", "", "Centro", "Uberlândia", "MG"),
        record("38408-262", "Rua Xingu", "", "Jardim Brasília", "Uberlândia", "MG"),
        record("38400-128", "Avenida Afonso Pena", "", "Centro", "Uberlândia", "MG"),
    ]
}
