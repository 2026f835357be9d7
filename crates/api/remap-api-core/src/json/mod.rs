//! JSON helpers for animation fields.
//!
//! The serializer side of a beatmap calls [`to_json_value`] (which simplifies
//! first) and the deserializer side calls [`parse_point_definition`]; both
//! forms of a definition are accepted on input.

use serde_json::Value as JsonValue;

use crate::definition::RawPointDefinition;
use crate::error::PointError;
use crate::point::{PointDefinition, PointOrToken};

/// Parse a field's JSON text into a typed definition.
pub fn parse_point_definition(s: &str) -> Result<PointDefinition, PointError> {
    let raw: RawPointDefinition = serde_json::from_str(s)?;
    PointDefinition::try_from(raw)
}

/// Parse an already-decoded JSON value into the raw wire shape.
pub fn parse_raw_definition(value: JsonValue) -> Result<RawPointDefinition, PointError> {
    Ok(serde_json::from_value(value)?)
}

/// Parse a JSON value, keeping runtime points as tokens.
pub fn parse_points_or_tokens(value: JsonValue) -> Result<Vec<PointOrToken>, PointError> {
    PointOrToken::decode_all(parse_raw_definition(value)?)
}

/// Emit a definition in its smallest wire form.
pub fn to_json_value(def: PointDefinition) -> Result<JsonValue, PointError> {
    let raw = RawPointDefinition::from(def.simplify());
    Ok(serde_json::to_value(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_zero_time_point_is_emitted_as_constant() {
        let def = parse_point_definition("[[1, 2, 3, 0]]").unwrap();
        assert_eq!(to_json_value(def).unwrap(), json!([1.0, 2.0, 3.0]));
    }

    #[test]
    fn tokens_survive_the_round_trip() {
        let points = parse_points_or_tokens(json!([["baseCombo", 0], [1, 1]])).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(
            serde_json::to_value(points[0].to_raw()).unwrap(),
            json!(["baseCombo", 0.0])
        );
    }
}
