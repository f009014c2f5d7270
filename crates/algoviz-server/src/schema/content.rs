//! `GET /get_content` response type.

use indexmap::IndexMap;
use serde::Serialize;

use crate::content::{AlgorithmContent, DataStructureInfo};

#[derive(Debug, Clone, Serialize)]
pub struct ContentResponse {
    pub algorithms: IndexMap<&'static str, AlgorithmContent>,
    pub data_structures: IndexMap<&'static str, DataStructureInfo>,
}
