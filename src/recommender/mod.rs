//! 学习路径推荐：根据章节、主题与进度快照，列出未开始或未完成的章节

pub mod types;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use types::{
    Chapter, LearnerSnapshot, ProgressEntry, Recommendation, RecommendationKind,
    RecommendationReason, Topic,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("topic '{topic}' references unknown chapter '{chapter_id}'")]
    DanglingChapter { topic: String, chapter_id: String },
    #[error("chapter '{chapter_id}' referenced by topic '{topic}' has no name")]
    UnnamedChapter { topic: String, chapter_id: String },
}

/// 需要产出推荐的章节不存在或缺少名称时的处理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DanglingChapterPolicy {
    /// 记录告警并跳过该章节
    #[default]
    Skip,
    /// 整个请求失败
    Fail,
}

impl FromStr for DanglingChapterPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "fail" => Ok(Self::Fail),
            other => Err(format!("invalid dangling chapter policy '{other}'")),
        }
    }
}

impl fmt::Display for DanglingChapterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str("skip"),
            Self::Fail => f.write_str("fail"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LearningPathRecommender {
    dangling_policy: DanglingChapterPolicy,
}

impl LearningPathRecommender {
    pub fn new(dangling_policy: DanglingChapterPolicy) -> Self {
        Self { dangling_policy }
    }

    pub fn dangling_policy(&self) -> DanglingChapterPolicy {
        self.dangling_policy
    }

    /// 按主题顺序（外层）与章节顺序（内层）产出推荐，不排序、不跨主题去重。
    pub fn recommend_learning_path(
        &self,
        snapshot: &LearnerSnapshot,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        // 重复 id 时后出现的章节覆盖先出现的
        let chapters: HashMap<&str, &Chapter> = snapshot
            .chapters
            .iter()
            .map(|ch| (ch.id.as_str(), ch))
            .collect();

        // 同一章节存在多条进度时取输入顺序中的第一条
        let mut progress: HashMap<&str, &ProgressEntry> = HashMap::new();
        for entry in &snapshot.progress {
            progress.entry(entry.chapter_id.as_str()).or_insert(entry);
        }

        let mut out = Vec::new();
        for topic in &snapshot.topics {
            for chapter_id in &topic.chapters {
                let reason = match progress.get(chapter_id.as_str()) {
                    None => RecommendationReason::NotStarted,
                    Some(entry) if !entry.is_completed => RecommendationReason::Incomplete,
                    Some(_) => continue,
                };

                // 章节只在需要产出推荐时才解引用
                let name = match chapters.get(chapter_id.as_str()) {
                    Some(Chapter {
                        name: Some(name), ..
                    }) => name,
                    found => {
                        let err = if found.is_none() {
                            RecommendError::DanglingChapter {
                                topic: topic.name.clone(),
                                chapter_id: chapter_id.clone(),
                            }
                        } else {
                            RecommendError::UnnamedChapter {
                                topic: topic.name.clone(),
                                chapter_id: chapter_id.clone(),
                            }
                        };
                        match self.dangling_policy {
                            DanglingChapterPolicy::Skip => {
                                tracing::warn!(error = %err, "Skipping unresolvable chapter");
                                continue;
                            }
                            DanglingChapterPolicy::Fail => return Err(err),
                        }
                    }
                };

                out.push(Recommendation::chapter(name, &topic.name, reason));
            }
        }

        Ok(out)
    }

    /// 占位接口，保留给 `/api/recommend`：任意请求体都返回空列表
    pub fn recommend(&self, _payload: &serde_json::Value) -> Vec<Recommendation> {
        Vec::new()
    }
}
