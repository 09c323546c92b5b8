use super::columns::extract_columns;
use crate::config::StoreConfig;
use crate::constants::DISTANCE_METADATA_KEY;
use crate::store::{Document, SearchRequest, StoreError};
use arrow_array::{Array, RecordBatch};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Converts one batch of vector search output into documents, keeping the store's row order.
pub fn process_search_batch(
    rb: &RecordBatch,
    config: &StoreConfig,
    request: &SearchRequest,
) -> Result<Vec<Document>, StoreError> {
    let columns = extract_columns(rb, config)?;
    debug!("Found {} results in batch", columns.len());

    let mut documents = Vec::with_capacity(columns.len());
    for i in 0..columns.len() {
        let distance = columns.distance_column.value(i);
        let similarity = 1.0 - distance;
        if !request.accepts(similarity) {
            debug!(
                "Skipping row {} with similarity {:.4} below threshold {}",
                i, similarity, request.similarity_threshold
            );
            continue;
        }

        let mut document = Document::new(
            columns.id_column.value(i),
            if columns.content_column.is_valid(i) {
                columns.content_column.value(i)
            } else {
                ""
            },
        );
        if let Some(raw) = columns.metadata(i) {
            document.metadata = parse_metadata(raw);
        }
        document
            .metadata
            .insert(DISTANCE_METADATA_KEY.to_string(), Value::from(distance));
        documents.push(document);
    }

    Ok(documents)
}

pub fn parse_metadata(raw: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            warn!("Ignoring metadata that is not a JSON object: {}", raw);
            Map::new()
        }
    }
}
