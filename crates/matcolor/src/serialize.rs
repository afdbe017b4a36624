//! Optional serialization with serde.
//!
//! Colors serialize as `#rrggbbaa` strings and themes as structs with the
//! seed, mode, contrast, and one color per role.

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::rgb::StandardRgb;
use crate::scheme::Role;
use crate::theme::{Contrast, MaterialTheme};

impl Serialize for StandardRgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rgba_hex())
    }
}

impl<'de> Deserialize<'de> for StandardRgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        StandardRgb::from_rgba_hex(&s).map_err(D::Error::custom)
    }
}

impl Serialize for Contrast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Contrast {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "standard" => Ok(Contrast::Standard),
            "medium" => Ok(Contrast::Medium),
            "high" => Ok(Contrast::High),
            _ => Err(D::Error::unknown_variant(&s, &["standard", "medium", "high"])),
        }
    }
}

impl Serialize for MaterialTheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MaterialTheme", 3 + Role::COUNT)?;
        state.serialize_field("seed", &self.seed())?;
        state.serialize_field("is_dark", &self.is_dark())?;
        state.serialize_field("contrast", &self.contrast())?;
        for (role, color) in self.colors() {
            state.serialize_field(role.name(), &color)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod test {
    use crate::rgb::StandardRgb;
    use crate::theme::{Contrast, MaterialTheme};

    #[test]
    fn test_color() -> Result<(), serde_json::Error> {
        let color = StandardRgb::with_alpha(0x63, 0xa0, 0x02, 0x80);
        let json = serde_json::to_string(&color)?;
        assert_eq!(json, "\"#63a00280\"");
        assert_eq!(serde_json::from_str::<StandardRgb>(&json)?, color);

        assert!(serde_json::from_str::<StandardRgb>("\"#63a0\"").is_err());
        Ok(())
    }

    #[test]
    fn test_theme() -> Result<(), Box<dyn std::error::Error>> {
        let theme = MaterialTheme::from_rgba_hex("#63A002FF", false, Contrast::Standard)?;
        let value = serde_json::to_value(&theme)?;

        assert_eq!(value["seed"], "#63a002ff");
        assert_eq!(value["is_dark"], false);
        assert_eq!(value["contrast"], "standard");
        assert_eq!(value["primary"], "#4c662bff");
        assert_eq!(value["on_primary_container"], "#354e16ff");

        let seed: StandardRgb = serde_json::from_value(value["seed"].clone())?;
        let contrast: Contrast = serde_json::from_value(value["contrast"].clone())?;
        let twin = MaterialTheme::new(seed, false, contrast, Default::default());
        assert_eq!(twin.primary(), theme.primary());

        Ok(())
    }
}
