use serde::{Deserialize, Deserializer, Serialize};

/// 章节：`_id` 为原始存储主键，同时接受 `id`。
/// `name` 只在产出推荐时才需要，未被引用的章节可以缺少名称。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(default)]
    pub name: String,
    /// 有序的章节 id 列表，顺序决定推荐顺序
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chapters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub chapter_id: String,
    #[serde(default)]
    pub is_completed: bool,
}

/// 请求体：学习者当前快照。三个字段缺失或为 `null` 时均视为空列表。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerSnapshot {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chapters: Vec<Chapter>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<Topic>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub progress: Vec<ProgressEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Chapter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationReason {
    #[serde(rename = "Not started")]
    NotStarted,
    #[serde(rename = "Incomplete")]
    Incomplete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub name: String,
    pub topic: String,
    pub reason: RecommendationReason,
}

impl Recommendation {
    pub fn chapter(name: &str, topic: &str, reason: RecommendationReason) -> Self {
        Self {
            kind: RecommendationKind::Chapter,
            name: name.to_string(),
            topic: topic.to_string(),
            reason,
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
