use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

/// Contact details pulled from the resume. Every field may be null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Tag category. Decoding is strict: any other literal is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TagType {
    Skill,
    Interest,
    Position,
    Field,
    Motto,
}

/// A single classified attribute of the candidate.
///
/// The model is told to answer `null` for anything it cannot find, so `null`
/// names and confidences decode as empty/zero instead of failing the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeTag {
    /// Filled with a fresh UUID by the parser when the model leaves it blank.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub confidence: f64, // 0.0 – 1.0, not enforced
    #[serde(default, deserialize_with = "integral_score")]
    pub score: Option<i32>, // 1 – 10, not enforced
}

/// The structured result of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub personal_info: Option<PersonalInfo>,
    pub tags: Vec<ResumeTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `8` and `8.0`; rejects `8.5`.
fn integral_score<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(v) if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 => {
            Ok(Some(v as i32))
        }
        Some(v) => Err(D::Error::custom(format!(
            "score must be a whole number, got {v}"
        ))),
    }
}
