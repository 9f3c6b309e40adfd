pub mod folio_api;
