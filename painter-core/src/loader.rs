/// External mesh-data records and format dispatch
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::obj;

/// A raw vertex table plus 1-based triangle indices into it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelData {
    pub points: Vec<[f64; 3]>,
    pub triangles: Vec<[usize; 3]>,
}

impl ModelData {
    /// Parse a `{"points": [...], "triangles": [...]}` record
    pub fn from_json(input: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Parse mesh data, choosing the format from a file extension.
pub fn load_model_data(data: &[u8], extension: &str) -> Result<ModelData, LoadError> {
    let text = std::str::from_utf8(data)
        .map_err(|e| LoadError::UnsupportedFormat(format!("not UTF-8 text: {e}")))?;

    let model = match extension.to_ascii_lowercase().as_str() {
        "json" => ModelData::from_json(text)?,
        "obj" => obj::parse_obj(text)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    tracing::debug!(
        "Loaded {} points and {} triangles from .{}",
        model.points.len(),
        model.triangles.len(),
        extension
    );
    Ok(model)
}
