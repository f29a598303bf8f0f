use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Publication state shared by main and sub categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// Icon tag a main category renders with. Stored as the tag name; anything
/// unrecognized falls back to the generic layers icon, matching how the
/// storefront renders unknown tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum IconTag {
    #[default]
    Zap,
    Shirt,
    Home,
    Smile,
    Dumbbell,
    Baby,
    Car,
    Book,
    Coffee,
    Monitor,
    Smartphone,
    Watch,
    Layers,
}

impl IconTag {
    fn from_name(name: &str) -> Self {
        match name {
            "Zap" => Self::Zap,
            "Shirt" => Self::Shirt,
            "Home" => Self::Home,
            "Smile" => Self::Smile,
            "Dumbbell" => Self::Dumbbell,
            "Baby" => Self::Baby,
            "Car" => Self::Car,
            "Book" => Self::Book,
            "Coffee" => Self::Coffee,
            "Monitor" => Self::Monitor,
            "Smartphone" => Self::Smartphone,
            "Watch" => Self::Watch,
            _ => Self::Layers,
        }
    }
}

impl<'de> Deserialize<'de> for IconTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Numeric fields arrive from stored form state as numbers, numeric
/// strings, or the empty string. Mirrors the storefront's
/// `parseInt(value || 0)` reads: anything unusable counts as zero.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64().unwrap_or_else(|| {
            n.as_f64().map(|f| f.round() as i64).unwrap_or_default()
        }),
        Value::String(s) => crate::filter::parse_price(&s),
        _ => 0,
    })
}
