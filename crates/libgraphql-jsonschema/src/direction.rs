/// Which representation a schema describes, or which conversion a transcode
/// performs.
///
/// | direction     | input form   | output form  |
/// |---------------|--------------|--------------|
/// | `Normalize`   | serialized   | serialized   |
/// | `Deserialize` | serialized   | deserialized |
/// | `Serialize`   | deserialized | serialized   |
///
/// Normalizing is `serialize(parse(value))` for every custom scalar, which
/// validates wire data while keeping it wire-shaped.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Deserialize,
    #[default]
    Normalize,
    Serialize,
}
impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Deserialize => "deserialize",
            Self::Normalize => "normalize",
            Self::Serialize => "serialize",
        })
    }
}
impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deserialize" => Ok(Self::Deserialize),
            "normalize" => Ok(Self::Normalize),
            "serialize" => Ok(Self::Serialize),
            other => Err(format!(
                "Unknown direction `{other}` (expected deserialize, normalize, \
                or serialize)",
            )),
        }
    }
}
