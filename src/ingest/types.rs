use serde::Serialize;
use serde_json::Value;

use crate::domain::Reading;

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Checks the raw body and extracts a [`Reading`]. Types are strict: a
/// numeric-looking string is not a number.
pub fn reading_from_body(body: &Value) -> Result<Reading, &'static str> {
    let location = match body.get("location") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err("missing_location"),
    };
    let temperature = number(body, "temperature").ok_or("temperature_not_number")?;
    let humidity = number(body, "humidity").ok_or("humidity_not_number")?;

    Ok(Reading {
        location,
        temperature,
        humidity,
    })
}

fn number(body: &Value, key: &str) -> Option<f64> {
    match body.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_well_formed_reading() {
        let reading =
            reading_from_body(&json!({"location": "porch", "temperature": 21.5, "humidity": 60.2}))
                .unwrap();
        assert_eq!(reading.location, "porch");
        assert_eq!(reading.temperature, 21.5);
        assert_eq!(reading.humidity, 60.2);
    }

    #[test]
    fn integers_are_numbers() {
        let reading =
            reading_from_body(&json!({"location": "attic", "temperature": -4, "humidity": 80}))
                .unwrap();
        assert_eq!(reading.temperature, -4.0);
        assert_eq!(reading.humidity, 80.0);
    }

    #[test]
    fn location_must_be_non_empty_string() {
        for body in [
            json!({"temperature": 1.0, "humidity": 2.0}),
            json!({"location": "", "temperature": 1.0, "humidity": 2.0}),
            json!({"location": null, "temperature": 1.0, "humidity": 2.0}),
            json!({"location": 7, "temperature": 1.0, "humidity": 2.0}),
        ] {
            assert_eq!(reading_from_body(&body), Err("missing_location"), "{body}");
        }
    }

    #[test]
    fn temperature_and_humidity_are_type_strict() {
        let bad = [json!("23.5"), json!(true), json!(null), json!([1.0]), json!({})];
        for value in &bad {
            let body = json!({"location": "porch", "temperature": value, "humidity": 50.0});
            assert_eq!(reading_from_body(&body), Err("temperature_not_number"));

            let body = json!({"location": "porch", "temperature": 20.0, "humidity": value});
            assert_eq!(reading_from_body(&body), Err("humidity_not_number"));
        }

        let missing = json!({"location": "porch", "temperature": 20.0});
        assert_eq!(reading_from_body(&missing), Err("humidity_not_number"));

        let missing = json!({"location": "porch", "humidity": 60.2});
        assert_eq!(reading_from_body(&missing), Err("temperature_not_number"));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert!(reading_from_body(&json!([1, 2, 3])).is_err());
        assert!(reading_from_body(&json!("porch")).is_err());
    }
}
