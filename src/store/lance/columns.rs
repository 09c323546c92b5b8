use crate::config::StoreConfig;
use crate::constants::DISTANCE_COLUMN;
use crate::store::StoreError;
use arrow_array::{Array, Float32Array, RecordBatch, StringArray};

pub struct BatchColumns<'a> {
    pub id_column: &'a StringArray,
    pub content_column: &'a StringArray,
    pub metadata_column: Option<&'a StringArray>,
    pub distance_column: &'a Float32Array,
}

impl BatchColumns<'_> {
    pub fn len(&self) -> usize {
        self.content_column.len()
    }

    pub fn metadata(&self, row: usize) -> Option<&str> {
        self.metadata_column
            .filter(|column| column.is_valid(row))
            .map(|column| column.value(row))
    }
}

fn string_column<'a>(rb: &'a RecordBatch, name: &str) -> Result<&'a StringArray, StoreError> {
    rb.column_by_name(name)
        .ok_or_else(|| StoreError::Schema(format!("{} column not found", name)))?
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| StoreError::Schema(format!("Failed to downcast {} column", name)))
}

pub fn extract_columns<'a>(
    rb: &'a RecordBatch,
    config: &StoreConfig,
) -> Result<BatchColumns<'a>, StoreError> {
    let metadata_column = match rb.column_by_name(&config.metadata_column) {
        Some(_) => Some(string_column(rb, &config.metadata_column)?),
        None => None,
    };

    Ok(BatchColumns {
        id_column: string_column(rb, &config.id_column)?,
        content_column: string_column(rb, &config.content_column)?,
        metadata_column,
        distance_column: rb
            .column_by_name(DISTANCE_COLUMN)
            .ok_or_else(|| StoreError::Schema("_distance column not found".to_string()))?
            .as_any()
            .downcast_ref::<Float32Array>()
            .ok_or_else(|| StoreError::Schema("Failed to downcast _distance column".to_string()))?,
    })
}
