use derive_more::Display;
use fnv::FnvHasher;
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// RNG seed for map generation.
///
/// A seed can be given as a number or as any text. Text that parses as a
/// `u64` is treated as that number, so `"42"` and `42` are the same seed.
/// Any other text (e.g. `"hill 203"`) is kept as-is and hashed into a `u64`
/// when the seed is actually used. That makes it easy to share memorable
/// seeds for a scenario.
///
/// Seeds always serialize as a **string**. JSON and TOML can't reliably hold
/// a full 64-bit unsigned integer, and since numeric strings parse back into
/// [Seed::Int], nothing is lost on a round trip.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Seed {
    /// A numeric seed, used directly
    Int(u64),
    /// A textual seed, hashed with FNV before use
    Text(String),
}

impl Seed {
    /// Get the numeric value to seed an RNG with
    pub fn to_u64(&self) -> u64 {
        match self {
            Self::Int(seed) => *seed,
            Self::Text(text) => {
                let mut hasher = FnvHasher::default();
                text.hash(&mut hasher);
                hasher.finish()
            }
        }
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        Self::Int(seed)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        text.parse::<u64>()
            .map(Self::Int)
            .unwrap_or_else(|_| Self::Text(text.into()))
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        // Numbers and strings are both fine, so there's no single type hint
        deserializer.deserialize_any(SeedVisitor)
    }
}

struct SeedVisitor;

impl SeedVisitor {
    fn visit_int<E, T>(value: T) -> Result<Seed, E>
    where
        E: serde::de::Error,
        T: TryInto<u64> + fmt::Display + Copy,
    {
        value
            .try_into()
            .map(Seed::Int)
            .map_err(|_| E::custom(format!("seed out of range: {}", value)))
    }
}

impl<'de> Visitor<'de> for SeedVisitor {
    type Value = Seed;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-negative integer or a string")
    }

    // Smaller int types all get widened to one of these by serde
    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Seed, E> {
        Ok(Seed::Int(value))
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Seed, E> {
        Self::visit_int(value)
    }

    fn visit_u128<E: serde::de::Error>(self, value: u128) -> Result<Seed, E> {
        Self::visit_int(value)
    }

    fn visit_i128<E: serde::de::Error>(self, value: i128) -> Result<Seed, E> {
        Self::visit_int(value)
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Seed, E> {
        Ok(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{
        assert_de_tokens, assert_de_tokens_error, assert_ser_tokens, Token,
    };

    #[test]
    fn test_from_str() {
        assert_eq!(Seed::from("0"), Seed::Int(0));
        assert_eq!(Seed::from("1021522790211909"), Seed::Int(1021522790211909));
        // Anything that isn't a u64 stays as text
        assert_eq!(Seed::from("-4"), Seed::Text("-4".into()));
        assert_eq!(Seed::from("hill 203"), Seed::Text("hill 203".into()));
    }

    #[test]
    fn test_to_u64() {
        assert_eq!(Seed::Int(77).to_u64(), 77);
        assert_eq!(
            Seed::Text("hill 203".into()).to_u64(),
            10144672175967052966
        );
        // Hashing is stable
        assert_eq!(
            Seed::Text("ridge".into()).to_u64(),
            Seed::Text("ridge".into()).to_u64()
        );
    }

    #[test]
    fn test_serialize() {
        assert_ser_tokens(&Seed::Int(77), &[Token::String("77")]);
        assert_ser_tokens(
            &Seed::Text("hill 203".into()),
            &[Token::String("hill 203")],
        );
    }

    #[test]
    fn test_deserialize() {
        assert_de_tokens(&Seed::Int(77), &[Token::U64(77)]);
        assert_de_tokens(&Seed::Int(77), &[Token::U8(77)]);
        assert_de_tokens(&Seed::Int(77), &[Token::I32(77)]);
        assert_de_tokens(&Seed::Int(77), &[Token::String("77")]);
        assert_de_tokens(
            &Seed::Text("hill 203".into()),
            &[Token::Str("hill 203")],
        );

        assert_de_tokens_error::<Seed>(
            &[Token::I64(-1)],
            "seed out of range: -1",
        );
        assert_de_tokens_error::<Seed>(
            &[Token::Bool(true)],
            "invalid type: boolean `true`, \
            expected a non-negative integer or a string",
        );
    }
}
