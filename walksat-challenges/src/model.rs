use crate::SatError;
use rand::Rng;
use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;

/// A full truth assignment, one value per variable.
///
/// Variables are addressed by their 1-based id. `true` stands for the `+1`
/// polarity and `false` for `-1`. The length is fixed at construction and the
/// only mutation is [`Model::flip`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Model {
    values: Vec<bool>,
}

impl Model {
    pub fn from_values(values: Vec<bool>) -> Self {
        Self { values }
    }

    /// Builds a model from `+1`/`-1` values.
    pub fn from_signs(signs: &[i8]) -> Result<Self, SatError> {
        let values = signs
            .iter()
            .enumerate()
            .map(|(idx, &sign)| match sign {
                1 => Ok(true),
                -1 => Ok(false),
                _ => Err(SatError::InvalidSolution {
                    reason: format!("value '{}' of variable {} is not +1 or -1", sign, idx + 1),
                }),
            })
            .collect::<Result<Vec<bool>, SatError>>()?;
        Ok(Self { values })
    }

    /// Independent fair coin per variable.
    pub fn random<R: Rng + ?Sized>(num_variables: usize, rng: &mut R) -> Self {
        Self {
            values: (0..num_variables).map(|_| rng.gen::<bool>()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Truth value of `variable`. Panics if the id is outside `[1, len]`.
    #[inline]
    pub fn get(&self, variable: usize) -> bool {
        self.values[variable - 1]
    }

    /// `+1` or `-1`.
    pub fn value(&self, variable: usize) -> i8 {
        if self.get(variable) {
            1
        } else {
            -1
        }
    }

    #[inline]
    pub fn flip(&mut self, variable: usize) {
        let value = &mut self.values[variable - 1];
        *value = !*value;
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn to_signs(&self) -> Vec<i8> {
        self.values.iter().map(|&v| if v { 1 } else { -1 }).collect()
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
        for &value in &self.values {
            seq.serialize_element(&(if value { 1i8 } else { -1i8 }))?;
        }
        seq.end()
    }
}

struct ModelVisitor;

impl<'de> Visitor<'de> for ModelVisitor {
    type Value = Model;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of 1/-1 integers or booleans")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<serde_json::Value>()? {
            match value {
                serde_json::Value::Number(n) if n.as_i64() == Some(1) => values.push(true),
                serde_json::Value::Number(n) if n.as_i64() == Some(-1) => values.push(false),
                serde_json::Value::Bool(b) => values.push(b),
                _ => return Err(de::Error::custom("expected 1, -1, true, or false")),
            }
        }
        Ok(Model { values })
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(ModelVisitor)
    }
}
