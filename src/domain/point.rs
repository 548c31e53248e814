use std::collections::BTreeMap;
use time::OffsetDateTime;

/// One time-series record. No setters once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    measurement: String,
    tags: BTreeMap<String, String>,
    fields: BTreeMap<String, f64>,
    timestamp: Option<OffsetDateTime>,
}

impl Point {
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
            tags: BTreeMap::new(),
            fields: BTreeMap::new(),
            timestamp: None,
        }
    }

    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    pub fn float_field(mut self, key: impl Into<String>, value: f64) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    #[cfg(test)]
    pub fn timestamp_at(mut self, ts: OffsetDateTime) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Keeps an existing timestamp, otherwise stamps `ts`.
    pub fn or_timestamp(mut self, ts: OffsetDateTime) -> Self {
        self.timestamp.get_or_insert(ts);
        self
    }

    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    pub fn fields(&self) -> &BTreeMap<String, f64> {
        &self.fields
    }

    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        self.timestamp
    }

    /// `measurement,tag=val field=val timestamp_ns`, tags and fields in key order.
    pub fn to_line_protocol(&self) -> String {
        let mut line = escape_measurement(&self.measurement);

        for (key, value) in &self.tags {
            line.push(',');
            line.push_str(&escape_tag_key(key));
            line.push('=');
            line.push_str(&escape_tag_value(value));
        }

        line.push(' ');
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            line.push_str(&escape_field_key(key));
            line.push('=');
            line.push_str(&value.to_string());
        }

        if let Some(ts) = self.timestamp {
            line.push(' ');
            line.push_str(&ts.unix_timestamp_nanos().to_string());
        }
        line
    }
}

fn escape_measurement(s: &str) -> String {
    escape_control(&s.replace(',', "\\,").replace(' ', "\\ "))
}

fn escape_tag_key(s: &str) -> String {
    escape_control(
        &s.replace(',', "\\,")
            .replace('=', "\\=")
            .replace(' ', "\\ "),
    )
}

fn escape_tag_value(s: &str) -> String {
    escape_control(
        &s.replace(',', "\\,")
            .replace('=', "\\=")
            .replace(' ', "\\ "),
    )
}

fn escape_field_key(s: &str) -> String {
    escape_tag_key(s)
}

// a raw newline would end the line early
fn escape_control(s: &str) -> String {
    s.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
