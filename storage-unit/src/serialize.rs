use std::{fmt, marker::PhantomData};

use serde::{
    de::{self, Unexpected, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::scale::{Scale, Unit};

impl<S> Unit<S>
where
    S: Scale,
{
    /// The textual form as a JSON string, e.g. `"\"1.5Kb\""`.
    pub fn to_json(&self) -> String {
        serde_json::Value::String(self.to_string()).to_string()
    }

    /// Reads a JSON string in the textual form, or a bare JSON integer
    /// holding the raw count of bits.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<S> Serialize for Unit<S>
where
    S: Scale,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Accepts either the textual form or an integer count of bits, which
/// needs a self-describing format (JSON, TOML); formats such as bincode
/// cannot drive `deserialize_any`.
impl<'de, S> Deserialize<'de> for Unit<S>
where
    S: Scale,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(UnitVisitor::<S>(PhantomData))
    }
}

struct UnitVisitor<S>(PhantomData<S>);

impl<'de, S> Visitor<'de> for UnitVisitor<S>
where
    S: Scale,
{
    type Value = Unit<S>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a {} quantity such as \"10K{}\" or a count of bits",
            S::NAME.to_lowercase(),
            S::MARKER
        )
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Unit::parse(v).map_err(E::custom)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Unit::new(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v)
            .map(Unit::new)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }
}
