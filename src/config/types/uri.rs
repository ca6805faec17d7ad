use schemars::r#gen::SchemaGenerator;
use schemars::schema::{Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};
use std::ops::Deref;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Uri(
    #[serde(deserialize_with = "crate::config::types::deserialize_uri")] pub http::Uri,
);

impl JsonSchema for Uri {
    fn schema_name() -> String {
        "Uri".to_string()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let mut schema: SchemaObject = String::json_schema(generator).into();
        schema.format = Some("uri".into());
        schema.into()
    }
}

impl Deref for Uri {
    type Target = http::Uri;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<http::Uri> for Uri {
    fn from(value: http::Uri) -> Self {
        Self(value)
    }
}

impl FromStr for Uri {
    type Err = http::uri::InvalidUri;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(http::Uri::from_str(s)?))
    }
}

/// Deserialize a Uri from a string.
pub fn deserialize_uri<'de, D, T>(data: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<http::Uri>,
{
    let val = String::deserialize(data)?;
    http::Uri::from_str(val.as_str())
        .map(Into::into)
        .map_err(|err| serde::de::Error::custom(err.to_string()))
}
