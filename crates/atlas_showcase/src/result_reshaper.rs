use atlas_google::distance_matrix::{DistanceMatrixResponse, MatrixElement, Measure};
use serde::Serialize;
use thiserror::Error;

use crate::location::Location;

pub const NOT_AVAILABLE: &str = "N/A";

/// One origin/destination pair of a distance matrix, ready for display.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResult {
    pub id: usize,
    pub status: String,
    pub from_coordinate: String,
    pub from_address: String,
    pub to_coordinate: String,
    pub to_address: String,
    pub duration: String,
    pub distance: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ReshapeError {
    #[error("Response has no rows")]
    MissingRows,

    #[error("No location for matrix index {index}")]
    MissingLocation { index: usize },

    #[error("No origin address for row {index}")]
    MissingOriginAddress { index: usize },

    #[error("No destination address for element {index}")]
    MissingDestinationAddress { index: usize },

    #[error("Element {row},{element} is OK but has no {field}")]
    MissingValue {
        row: usize,
        element: usize,
        field: &'static str,
    },
}

/// Flattens a matrix response into one [`DistanceResult`] per element, row by row.
///
/// `locations` must be the list the matrix was requested with: it is used
/// for both the origin (row index) and the destination (element index).
pub fn reshape(
    matrix: &DistanceMatrixResponse,
    locations: &[Location],
) -> Result<Vec<DistanceResult>, ReshapeError> {
    let rows = matrix.rows.as_deref().ok_or(ReshapeError::MissingRows)?;
    let mut results = Vec::with_capacity(matrix.element_count());

    for (i, row) in rows.iter().enumerate() {
        let from = location_at(locations, i)?;
        let from_address = matrix
            .origin_addresses
            .get(i)
            .ok_or(ReshapeError::MissingOriginAddress { index: i })?;

        for (j, element) in row.elements.iter().enumerate() {
            let to = location_at(locations, j)?;
            let to_address = matrix
                .destination_addresses
                .get(j)
                .ok_or(ReshapeError::MissingDestinationAddress { index: j })?;

            let (duration, distance) = format_element(element, i, j)?;
            let id = results.len();

            results.push(DistanceResult {
                id,
                status: element.status.clone(),
                from_coordinate: from.coordinate(),
                from_address: from_address.clone(),
                to_coordinate: to.coordinate(),
                to_address: to_address.clone(),
                duration,
                distance,
            });
        }
    }

    Ok(results)
}

fn location_at(locations: &[Location], index: usize) -> Result<&Location, ReshapeError> {
    locations
        .get(index)
        .ok_or(ReshapeError::MissingLocation { index })
}

fn format_element(
    element: &MatrixElement,
    row: usize,
    column: usize,
) -> Result<(String, String), ReshapeError> {
    if !element.is_ok() {
        return Ok((NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()));
    }

    let value = |measure: &Option<Measure>, field: &'static str| {
        measure
            .as_ref()
            .map(|measure| format_number(&measure.value))
            .ok_or(ReshapeError::MissingValue {
                row,
                element: column,
                field,
            })
    };

    let duration = value(&element.duration, "duration")?;
    let distance = value(&element.distance, "distance")?;

    Ok((format!("{duration} seconds"), format!("{distance} meters")))
}

/// Whole numbers sent as floats (`600.0`, `1e3`) print without a fraction.
fn format_number(value: &serde_json::Number) -> String {
    match value.as_f64() {
        Some(float) if value.is_f64() && float.is_finite() && float.fract() == 0.0 => {
            format!("{float:.0}")
        }
        _ => value.to_string(),
    }
}
